//! Tunable parameters for the backdrop and the tagline rotation.
//!
//! Defaults reproduce the landing page exactly; JSON overrides are partial
//! (`#[serde(default)]`), so `{"gap": 6}` only changes the gap.

use serde::{Deserialize, Serialize};

/// Hourly poll for the target-hour re-roll
pub const POLL_INTERVAL_MS: u32 = 60 * 60 * 1000;

pub const DATE_KEY: &str = "lastTaglineChange";
pub const INDEX_KEY: &str = "currentTaglineIndex";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// Outline radius of the dark hexagon inside its cell
    pub hex_size: f32,
    /// How far the neon edge sits inside the outline
    pub neon_inset: f32,
    /// Wire gap between neighbouring cells (px)
    pub gap: f32,
    /// Cell bounding box (px)
    pub cell_width: f32,
    pub cell_height: f32,
    /// Horizontal origin of column 0; derived from width and gap when absent
    pub left_offset: Option<f32>,
    /// Fixed navbar height subtracted from the viewport height
    pub navbar_height: f32,
    /// Extra rows/columns beyond the exact fit
    pub safety_margin: u32,
    /// Horizontal pitch as a fraction of (cell_width + gap)
    pub column_step: f32,
    /// Vertical pitch as a fraction of (cell_height + gap)
    pub row_step: f32,
    /// Honeycomb stagger applied to odd rows
    pub odd_row_shift: f32,
    /// Per-column drift correction
    pub column_drift: f32,
    /// Wave time advances once every `frame_skip` frames
    pub frame_skip: u32,
    pub wave_step: f32,
    /// Phase lag per unit of (row + column)
    pub phase_spread: f32,
}

impl Default for GridSettings {
    fn default() -> Self {
        GridSettings {
            hex_size: 40.0,
            neon_inset: 6.0,
            gap: 4.0,
            cell_width: 96.0,
            cell_height: 3.0_f32.sqrt() * 48.0,
            left_offset: None,
            navbar_height: 56.0,
            safety_margin: 3,
            column_step: 0.75,
            row_step: 0.8,
            odd_row_shift: 0.4,
            column_drift: 0.05,
            frame_skip: 3,
            wave_step: 0.036,
            phase_spread: 0.4,
        }
    }
}

impl GridSettings {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let settings: GridSettings = serde_json::from_str(json).map_err(|e| e.to_string())?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), String> {
        let positive = [
            ("hex_size", self.hex_size),
            ("cell_width", self.cell_width),
            ("cell_height", self.cell_height),
            ("column_step", self.column_step),
            ("row_step", self.row_step),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("{} must be a positive number, got {}", name, value));
            }
        }
        let finite = [
            ("neon_inset", self.neon_inset),
            ("gap", self.gap),
            ("navbar_height", self.navbar_height),
            ("odd_row_shift", self.odd_row_shift),
            ("column_drift", self.column_drift),
            ("wave_step", self.wave_step),
            ("phase_spread", self.phase_spread),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(format!("{} must be finite", name));
            }
        }
        if let Some(offset) = self.left_offset {
            if !offset.is_finite() {
                return Err("left_offset must be finite".to_string());
            }
        }
        if self.gap < 0.0 {
            return Err(format!("gap must not be negative, got {}", self.gap));
        }
        if self.frame_skip == 0 {
            return Err("frame_skip must be at least 1".to_string());
        }
        Ok(())
    }

    #[inline]
    pub fn pitch_x(&self) -> f32 { self.cell_width + self.gap }

    #[inline]
    pub fn pitch_y(&self) -> f32 { self.cell_height + self.gap }

    /// Column 0 starts half a cell left of the viewport so the left edge is covered
    #[inline]
    pub fn left_offset(&self) -> f32 {
        self.left_offset
            .unwrap_or(-(self.cell_width * 0.5 + self.gap * 0.5))
    }
}

/// De-duplication policy for the target-hour re-roll
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HourGuard {
    /// Every poll that lands in the target hour re-rolls
    #[default]
    Unguarded,
    /// Skip the re-roll when the stored change date is already today
    OncePerDay,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationSettings {
    /// Local hour (0..=23) at which the tagline re-rolls
    pub target_hour: u32,
    pub poll_interval_ms: u32,
    pub hour_guard: HourGuard,
    pub date_key: String,
    pub index_key: String,
}

impl Default for RotationSettings {
    fn default() -> Self {
        RotationSettings {
            target_hour: 3,
            poll_interval_ms: POLL_INTERVAL_MS,
            hour_guard: HourGuard::Unguarded,
            date_key: DATE_KEY.to_string(),
            index_key: INDEX_KEY.to_string(),
        }
    }
}

impl RotationSettings {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let settings: RotationSettings = serde_json::from_str(json).map_err(|e| e.to_string())?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.target_hour > 23 {
            return Err(format!("target_hour must be in 0..=23, got {}", self.target_hour));
        }
        if self.poll_interval_ms == 0 || self.poll_interval_ms > i32::MAX as u32 {
            return Err(format!("poll_interval_ms out of range: {}", self.poll_interval_ms));
        }
        if self.date_key.is_empty() || self.index_key.is_empty() || self.date_key == self.index_key {
            return Err("storage keys must be non-empty and distinct".to_string());
        }
        Ok(())
    }
}
