//! Move legality and board effects for Mini Rooks.
//!
//! This module contains pure functions for evaluating moves according
//! to the game rules. Rules are separated from board storage so the
//! typestate transitions and the invariant checks share one set of
//! semantics.

pub mod knight;
pub mod pawn;
pub mod rook;

use crate::action::Move;
use crate::coord::Coord;
use crate::types::{Board, Piece, PieceKind, Player, Square};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::instrument;

/// How a destination square may be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetKind {
    /// Relocation onto an empty square.
    Move,
    /// Capture of an opponent piece.
    Capture,
}

/// Legal destinations for one piece, keyed by coordinate.
pub type TargetMap = BTreeMap<Coord, TargetKind>;

/// Computes the legal targets for the piece at `from`.
///
/// Returns an empty map for an empty square. Defined over any occupied
/// square regardless of whose turn it is; turn gating happens in the
/// move contract and the wrapper, not here.
#[instrument(skip(board))]
pub fn legal_targets(board: &Board, from: Coord) -> TargetMap {
    match board.get(from).piece() {
        None => TargetMap::new(),
        Some(piece) => match piece.kind {
            PieceKind::Rook => rook::targets(board, from, piece.owner),
            PieceKind::Knight => knight::targets(board, from, piece.owner),
            PieceKind::Pawn => pawn::targets(board, from, piece.owner),
        },
    }
}

/// Classifies `to` for a piece owned by `owner`.
///
/// Empty squares are moves, opponent pieces are captures, friendly
/// pieces block.
pub(crate) fn classify(board: &Board, to: Coord, owner: Player) -> Option<TargetKind> {
    match board.get(to).piece() {
        None => Some(TargetKind::Move),
        Some(piece) if piece.owner != owner => Some(TargetKind::Capture),
        Some(_) => None,
    }
}

/// What applying a move did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Applied {
    /// The piece that was on the destination square, if any.
    pub captured: Option<Piece>,
    /// Whether the moved pawn was promoted to a knight.
    pub promoted: bool,
}

/// Applies a move's board effects: relocation, then pawn promotion.
///
/// Performs no legality checking; callers validate first (an empty
/// origin is a no-op). A captured royal rook ends the game, so the
/// promotion check is skipped on that branch.
#[instrument(skip(board))]
pub fn apply(board: &mut Board, mov: Move) -> Applied {
    let Some(moving) = board.get(mov.from).piece() else {
        return Applied {
            captured: None,
            promoted: false,
        };
    };

    let captured = board.get(mov.to).piece();
    board.set(mov.to, Square::Occupied(moving));
    board.set(mov.from, Square::Empty);

    if captured.is_some_and(|piece| piece.royal) {
        return Applied {
            captured,
            promoted: false,
        };
    }

    let promoted =
        moving.kind == PieceKind::Pawn && mov.to.row() == moving.owner.promotion_row();
    if promoted {
        board.set(
            mov.to,
            Square::Occupied(Piece::new(PieceKind::Knight, moving.owner)),
        );
    }

    Applied { captured, promoted }
}
