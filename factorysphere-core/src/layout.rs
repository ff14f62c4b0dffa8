//! Deterministic floor-plan grid assignment.
//!
//! Tiles are a pure function of list index: fixed column count, unit cells,
//! and an aisle gap pushed in every two rows. No randomness.

use crate::numbers::usize_to_f64;
use serde::{Deserialize, Serialize};

pub const GRID_COLS: usize = 8;

const CELL_W: f64 = 1.0;
const CELL_H: f64 = 1.0;
const CELL_GAP: f64 = 0.25;
const AISLE_GAP: f64 = 0.25;

/// Position and size of one unit tile on the floor plan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// Tile for the unit at `index` in the ordered unit list.
#[must_use]
pub fn tile_for_index(index: usize) -> Tile {
    let col = index % GRID_COLS;
    let row = index / GRID_COLS;
    let aisle = usize_to_f64(row / 2) * AISLE_GAP;
    Tile {
        x: usize_to_f64(col) * (CELL_W + CELL_GAP),
        y: usize_to_f64(row) * (CELL_H + CELL_GAP) + aisle,
        w: CELL_W,
        h: CELL_H,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_row_spreads_across_columns() {
        for col in 0..GRID_COLS {
            let tile = tile_for_index(col);
            assert!((tile.x - usize_to_f64(col) * 1.25).abs() < f64::EPSILON);
            assert!(tile.y.abs() < f64::EPSILON);
        }
    }

    #[test]
    fn rows_advance_with_aisle_gap_every_two_rows() {
        // row 1: no aisle yet
        let tile = tile_for_index(GRID_COLS);
        assert!((tile.y - 1.25).abs() < f64::EPSILON);
        // row 2: first aisle
        let tile = tile_for_index(2 * GRID_COLS);
        assert!((tile.y - (2.5 + 0.25)).abs() < f64::EPSILON);
        // row 3: still one aisle
        let tile = tile_for_index(3 * GRID_COLS);
        assert!((tile.y - (3.75 + 0.25)).abs() < f64::EPSILON);
        // row 4: second aisle
        let tile = tile_for_index(4 * GRID_COLS);
        assert!((tile.y - (5.0 + 0.5)).abs() < f64::EPSILON);
    }

    #[test]
    fn positions_are_unique() {
        let tiles: Vec<Tile> = (0..41).map(tile_for_index).collect();
        for (i, a) in tiles.iter().enumerate() {
            for b in &tiles[i + 1..] {
                assert!((a.x - b.x).abs() > f64::EPSILON || (a.y - b.y).abs() > f64::EPSILON);
            }
        }
    }

    #[test]
    fn cells_are_unit_sized() {
        let tile = tile_for_index(17);
        assert!((tile.w - 1.0).abs() < f64::EPSILON);
        assert!((tile.h - 1.0).abs() < f64::EPSILON);
    }
}
