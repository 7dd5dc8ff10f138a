//! Vector art for a single cell, relative to the cell's top-left corner.
//!
//! The host draws the dark outline, a faint highlight over the top edges and
//! one neon edge whose opacity follows the wave.

use std::f32::consts::PI;

use crate::domain::settings::GridSettings;

pub type Point = [f32; 2];

/// Pointy-top hexagon vertices around the cell centre, starting at -30°
pub fn hex_vertices(radius: f32, cell_width: f32, cell_height: f32) -> [Point; 6] {
    let cx = cell_width * 0.5;
    let cy = cell_height * 0.5;
    let mut points = [[0.0; 2]; 6];
    for (i, p) in points.iter_mut().enumerate() {
        let angle = PI / 3.0 * i as f32 - PI / 6.0;
        *p = [cx + radius * angle.cos(), cy + radius * angle.sin()];
    }
    points
}

#[derive(Clone, Debug, PartialEq)]
pub struct HexSprite {
    pub outline: [Point; 6],
    pub highlight: [Point; 4],
    pub neon_edge: [Point; 2],
}

impl HexSprite {
    pub fn from_settings(settings: &GridSettings) -> Self {
        let outline = hex_vertices(settings.hex_size, settings.cell_width, settings.cell_height);
        let inner = hex_vertices(
            (settings.hex_size - settings.neon_inset).max(0.0),
            settings.cell_width,
            settings.cell_height,
        );
        Self {
            outline,
            highlight: [outline[0], outline[1], outline[2], outline[3]],
            neon_edge: [inner[1], inner[2]],
        }
    }

    pub fn outline_flat(&self) -> Vec<f32> {
        flatten(&self.outline)
    }

    pub fn highlight_flat(&self) -> Vec<f32> {
        flatten(&self.highlight)
    }

    pub fn neon_edge_flat(&self) -> Vec<f32> {
        flatten(&self.neon_edge)
    }
}

fn flatten(points: &[Point]) -> Vec<f32> {
    points.iter().flat_map(|p| p.iter().copied()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist(p: Point, c: Point) -> f32 {
        ((p[0] - c[0]).powi(2) + (p[1] - c[1]).powi(2)).sqrt()
    }

    #[test]
    fn outline_vertices_sit_on_the_radius() {
        let s = GridSettings::default();
        let sprite = HexSprite::from_settings(&s);
        let centre = [48.0, s.cell_height * 0.5];
        for p in sprite.outline {
            assert!((dist(p, centre) - 40.0).abs() < 1e-3);
        }
        // vertex 1 sits at +30°: right of and below the centre
        let v1 = sprite.outline[1];
        assert!((v1[0] - (48.0 + 40.0 * (PI / 6.0).cos())).abs() < 1e-3);
        assert!((v1[1] - (centre[1] + 20.0)).abs() < 1e-3);
    }

    #[test]
    fn neon_edge_is_inset_segment_one_to_two() {
        let s = GridSettings::default();
        let sprite = HexSprite::from_settings(&s);
        let inner = hex_vertices(34.0, s.cell_width, s.cell_height);
        assert_eq!(sprite.neon_edge, [inner[1], inner[2]]);
        assert_eq!(sprite.highlight[3], sprite.outline[3]);
        assert_eq!(sprite.outline_flat().len(), 12);
        assert_eq!(sprite.neon_edge_flat().len(), 4);
    }
}
