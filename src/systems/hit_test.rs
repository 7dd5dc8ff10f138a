//! Pointer → cell lookup
//!
//! Cells are approximated by their bounding rectangle, and neighbouring
//! rectangles overlap near shared corners. The scan is row-major and the
//! first containing cell wins, so ties always go to the upper row, then the
//! left column.

use crate::spatial::hex::{CellCoord, HexGrid};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HitResult {
    pub cell: Option<CellCoord>,
    /// Cells examined before the scan stopped
    pub scanned: u32,
}

pub fn hit_test(grid: &HexGrid, x: f32, y: f32) -> HitResult {
    if !(x.is_finite() && y.is_finite()) {
        return HitResult::default();
    }
    let settings = grid.settings();
    let (width, height) = (settings.cell_width, settings.cell_height);

    let mut scanned = 0;
    for pos in grid.cells() {
        scanned += 1;
        if pos.contains(x, y, width, height) {
            return HitResult { cell: Some(pos.coord()), scanned };
        }
    }
    HitResult { cell: None, scanned }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::settings::GridSettings;

    fn grid() -> HexGrid {
        HexGrid::with_viewport(GridSettings::default(), 1280.0, 800.0)
    }

    #[test]
    fn shared_vertical_edge_goes_to_left_cell() {
        let g = grid();
        let left = g.position(0, 0);
        let edge_x = left.x + g.settings().cell_width;
        // the right neighbour's box also contains this x
        assert!(g.position(0, 1).contains(edge_x, 10.0, 96.0, g.settings().cell_height));
        assert_eq!(hit_test(&g, edge_x, 10.0).cell, Some(CellCoord::new(0, 0)));
    }

    #[test]
    fn row_overlap_goes_to_upper_row() {
        let g = grid();
        let y = g.position(1, 0).y + 1.0;
        assert_eq!(hit_test(&g, 20.0, y).cell, Some(CellCoord::new(0, 0)));
    }

    #[test]
    fn lower_row_wins_below_the_overlap() {
        let g = grid();
        let row1 = g.position(1, 0);
        let y = g.settings().cell_height + 2.0;
        let hit = hit_test(&g, row1.x + 1.0, y).cell;
        assert_eq!(hit, Some(CellCoord::new(1, 0)));
    }

    #[test]
    fn outside_the_grid_is_none_after_full_scan() {
        let g = grid();
        let miss = hit_test(&g, -200.0, -200.0);
        assert_eq!(miss.cell, None);
        assert_eq!(miss.scanned as usize, g.cell_count());
        assert_eq!(hit_test(&g, f32::NAN, 10.0), HitResult::default());
    }

    #[test]
    fn repeated_lookups_agree() {
        let g = grid();
        for (x, y) in [(640.0, 400.0), (33.3, 71.0), (1279.0, 799.0)] {
            assert_eq!(hit_test(&g, x, y), hit_test(&g, x, y));
            assert!(hit_test(&g, x, y).cell.is_some());
        }
    }
}
