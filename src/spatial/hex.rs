//! Hex grid geometry
//!
//! Cells are laid out in a staggered honeycomb: columns overlap by a quarter
//! pitch, rows by a fifth, odd rows are shifted right and carry one extra
//! column so the stagger never exposes the left edge. Row/column fully
//! determine a cell's pixel position; nothing here is persisted.

use crate::domain::settings::GridSettings;

/// Host viewport in CSS pixels (navbar included)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GridDimensions {
    pub columns: u32,
    pub rows: u32,
}

impl GridDimensions {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.columns == 0 || self.rows == 0
    }

    /// Odd rows render one extra column to fill the stagger gap
    #[inline]
    pub fn columns_in_row(&self, row: u32) -> u32 {
        if self.is_empty() {
            0
        } else if row % 2 == 1 {
            self.columns + 1
        } else {
            self.columns
        }
    }

    /// Total logical cells, extra odd-row columns included
    pub fn cell_count(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        let odd_rows = (self.rows / 2) as usize;
        (self.rows as usize) * (self.columns as usize) + odd_rows
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellCoord {
    pub row: u32,
    pub column: u32,
}

impl CellCoord {
    pub fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellPosition {
    pub row: u32,
    pub column: u32,
    /// Top-left corner of the cell bounding box
    pub x: f32,
    pub y: f32,
}

impl CellPosition {
    #[inline]
    pub fn coord(&self) -> CellCoord {
        CellCoord { row: self.row, column: self.column }
    }

    /// Inclusive bounding-box test
    #[inline]
    pub fn contains(&self, px: f32, py: f32, width: f32, height: f32) -> bool {
        px >= self.x && px <= self.x + width && py >= self.y && py <= self.y + height
    }
}

/// Upper bound on columns and rows, margin included. Keeps per-frame work
/// bounded for absurd viewports or custom pitches.
pub const MAX_AXIS_CELLS: u32 = 1024;

/// Columns/rows needed to cover the viewport below the navbar, plus margin.
/// Zero, negative or non-finite viewport sizes give an empty grid; a viewport
/// no taller than the navbar still gets the margin rows.
pub fn grid_dimensions(viewport: Viewport, settings: &GridSettings) -> GridDimensions {
    let width = viewport.width;
    if !(width.is_finite() && viewport.height.is_finite()) || width <= 0.0 || viewport.height <= 0.0 {
        return GridDimensions::default();
    }
    let height = viewport.height - settings.navbar_height;

    let pitch_x = settings.pitch_x();
    let pitch_y = settings.pitch_y();
    let columns = axis_count(
        (width - pitch_x * (1.0 - settings.column_step)) / (pitch_x * settings.column_step),
        settings.safety_margin,
    );
    let rows = axis_count(
        (height - pitch_y * 0.5) / (pitch_y * settings.row_step),
        settings.safety_margin,
    );

    GridDimensions { columns, rows }
}

#[inline]
fn axis_count(exact: f32, margin: u32) -> u32 {
    let fit = exact.ceil().clamp(0.0, MAX_AXIS_CELLS as f32) as u32;
    fit.saturating_add(margin).min(MAX_AXIS_CELLS)
}

/// Pixel position of a logical cell
#[inline]
pub fn cell_position(row: u32, column: u32, settings: &GridSettings) -> CellPosition {
    let pitch_x = settings.pitch_x();
    let col = column as f32;

    let mut x = col * (pitch_x * settings.column_step) + settings.left_offset();
    if row % 2 == 1 {
        x += settings.odd_row_shift * pitch_x;
    }
    x += col * settings.column_drift * pitch_x;
    let y = row as f32 * (settings.pitch_y() * settings.row_step);

    CellPosition { row, column, x, y }
}

/// Geometry state: settings, last viewport and the derived dimensions
#[derive(Clone, Debug)]
pub struct HexGrid {
    settings: GridSettings,
    viewport: Viewport,
    dims: GridDimensions,
}

impl HexGrid {
    pub fn new(settings: GridSettings) -> Self {
        Self {
            settings,
            viewport: Viewport::default(),
            dims: GridDimensions::default(),
        }
    }

    pub fn with_viewport(settings: GridSettings, width: f32, height: f32) -> Self {
        let mut grid = Self::new(settings);
        grid.resize(width, height);
        grid
    }

    /// Recompute dimensions; returns true when they changed
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        self.viewport = Viewport::new(width, height);
        let dims = grid_dimensions(self.viewport, &self.settings);
        let changed = dims != self.dims;
        self.dims = dims;
        changed
    }

    #[inline]
    pub fn settings(&self) -> &GridSettings { &self.settings }

    #[inline]
    pub fn viewport(&self) -> Viewport { self.viewport }

    #[inline]
    pub fn dimensions(&self) -> GridDimensions { self.dims }

    #[inline]
    pub fn cell_count(&self) -> usize { self.dims.cell_count() }

    #[inline]
    pub fn position(&self, row: u32, column: u32) -> CellPosition {
        cell_position(row, column, &self.settings)
    }

    pub fn contains_coord(&self, coord: CellCoord) -> bool {
        coord.row < self.dims.rows && coord.column < self.dims.columns_in_row(coord.row)
    }

    /// Culling: cells entirely below or above the viewport are not drawn
    #[inline]
    pub fn is_visible(&self, pos: &CellPosition) -> bool {
        pos.y <= self.viewport.height && pos.y + self.settings.cell_height >= 0.0
    }

    /// Row-major walk over every logical cell
    pub fn cells(&self) -> Cells<'_> {
        Cells { grid: self, row: 0, column: 0 }
    }
}

pub struct Cells<'a> {
    grid: &'a HexGrid,
    row: u32,
    column: u32,
}

impl<'a> Iterator for Cells<'a> {
    type Item = CellPosition;

    fn next(&mut self) -> Option<CellPosition> {
        let dims = self.grid.dims;
        while self.row < dims.rows {
            if self.column < dims.columns_in_row(self.row) {
                let pos = self.grid.position(self.row, self.column);
                self.column += 1;
                return Some(pos);
            }
            self.row += 1;
            self.column = 0;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_page_viewport_dimensions() {
        let settings = GridSettings::default();
        let dims = grid_dimensions(Viewport::new(1280.0, 800.0), &settings);
        // ceil((1280 - 25) / 75) + 3, ceil((744 - 43.57) / 69.71) + 3
        assert_eq!(dims, GridDimensions { columns: 20, rows: 14 });

        let exact_rows = ((800.0 - 56.0) / (settings.pitch_y() * 0.8)).ceil() as u32;
        assert!(dims.rows >= exact_rows);
    }

    #[test]
    fn degenerate_viewports_give_empty_grid() {
        let settings = GridSettings::default();
        for (w, h) in [(0.0, 800.0), (1280.0, 0.0), (-5.0, 300.0), (1280.0, -1.0), (f32::NAN, 10.0)] {
            let dims = grid_dimensions(Viewport::new(w, h), &settings);
            assert!(dims.is_empty(), "{}x{} should be empty", w, h);
            assert_eq!(dims.cell_count(), 0);
        }
    }

    #[test]
    fn viewport_under_navbar_keeps_margin_rows() {
        for h in [1.0, 50.0, 56.0] {
            let dims = grid_dimensions(Viewport::new(1280.0, h), &GridSettings::default());
            assert_eq!(dims, GridDimensions { columns: 20, rows: 3 }, "1280x{}", h);
        }
    }

    #[test]
    fn huge_viewport_is_capped() {
        let dims = grid_dimensions(Viewport::new(1.0e12, 1.0e12), &GridSettings::default());
        assert_eq!(dims, GridDimensions { columns: MAX_AXIS_CELLS, rows: MAX_AXIS_CELLS });

        let settings = GridSettings { safety_margin: u32::MAX, ..GridSettings::default() };
        let dims = grid_dimensions(Viewport::new(1280.0, 800.0), &settings);
        assert_eq!(dims.columns, MAX_AXIS_CELLS);
    }

    #[test]
    fn tiny_viewport_still_gets_margin() {
        let dims = grid_dimensions(Viewport::new(1.0, 57.0), &GridSettings::default());
        assert_eq!(dims, GridDimensions { columns: 3, rows: 3 });
    }

    #[test]
    fn placement_matches_honeycomb_formula() {
        let s = GridSettings::default();
        let even = cell_position(0, 2, &s);
        assert!((even.x - (2.0 * 75.0 - 50.0 + 2.0 * 5.0)).abs() < 1e-4);
        assert_eq!(even.y, 0.0);

        let odd = cell_position(1, 0, &s);
        assert!((odd.x - (-50.0 + 40.0)).abs() < 1e-4);
        assert!((odd.y - s.pitch_y() * 0.8).abs() < 1e-4);

        assert_eq!(cell_position(5, 7, &s), cell_position(5, 7, &s));
    }

    #[test]
    fn odd_rows_carry_an_extra_column() {
        let grid = HexGrid::with_viewport(GridSettings::default(), 1280.0, 800.0);
        let dims = grid.dimensions();
        assert_eq!(dims.columns_in_row(0), 20);
        assert_eq!(dims.columns_in_row(1), 21);
        assert_eq!(grid.cells().count(), grid.cell_count());
        assert_eq!(grid.cell_count(), 7 * 20 + 7 * 21);
        assert!(grid.contains_coord(CellCoord::new(1, 20)));
        assert!(!grid.contains_coord(CellCoord::new(0, 20)));
    }

    #[test]
    fn cells_iterate_row_major() {
        let grid = HexGrid::with_viewport(GridSettings::default(), 320.0, 200.0);
        let mut last = None;
        for pos in grid.cells() {
            if let Some((r, c)) = last {
                assert!(pos.row > r || (pos.row == r && pos.column == c + 1));
            }
            last = Some((pos.row, pos.column));
        }
    }

    #[test]
    fn resize_reports_changes_only() {
        let mut grid = HexGrid::new(GridSettings::default());
        assert!(grid.resize(1280.0, 800.0));
        assert!(!grid.resize(1281.0, 800.0));
        assert!(grid.resize(0.0, 0.0));
        assert_eq!(grid.cells().count(), 0);
    }
}
