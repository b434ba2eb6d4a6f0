//! Bounds-checked coordinates for the 6x6 board.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Board edge length. The board is always `BOARD_SIZE` x `BOARD_SIZE`.
pub const BOARD_SIZE: u8 = 6;

/// A square coordinate on the board.
///
/// A `Coord` can only be constructed in bounds, so holding one is proof
/// that (row, col) addresses a real square. Off-board arithmetic yields
/// `None` rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Creates a coordinate, or `None` if (row, col) is off the board.
    #[instrument]
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Returns the row (0-5).
    pub fn row(&self) -> u8 {
        self.row
    }

    /// Returns the column (0-5).
    pub fn col(&self) -> u8 {
        self.col
    }

    /// Offsets this coordinate by (dr, dc).
    ///
    /// Returns `None` when the result leaves the board, so callers can
    /// drop off-board targets with `filter_map`.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Iterates all 36 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coord { row, col }))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
