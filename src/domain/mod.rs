//! Domain data: tunable settings and the tagline set

pub mod settings;
pub mod taglines;
