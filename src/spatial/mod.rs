//! Spatial layer: hexagon tiling of the viewport

pub mod hex;
pub mod sprite;
