//! Knight movement: the eight standard jump offsets.

use super::{TargetKind, TargetMap, classify};
use crate::coord::Coord;
use crate::types::{Board, Player};
use tracing::instrument;

/// The eight (±2, ±1) knight jumps.
const JUMPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Computes knight targets from `from` for a knight owned by `owner`.
///
/// Off-board offsets are silently excluded; friendly-occupied squares
/// block, opponent-occupied squares are captures.
#[instrument(skip(board))]
pub fn targets(board: &Board, from: Coord, owner: Player) -> TargetMap {
    JUMPS
        .iter()
        .filter_map(|&(dr, dc)| from.offset(dr, dc))
        .filter_map(|to| classify(board, to, owner).map(|kind| (to, kind)))
        .collect()
}
