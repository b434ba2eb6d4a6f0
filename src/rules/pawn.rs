//! Pawn movement: single forward step, diagonal captures.

use super::{TargetKind, TargetMap};
use crate::coord::Coord;
use crate::types::{Board, Player};
use tracing::instrument;

/// Computes pawn targets from `from` for a pawn owned by `owner`.
///
/// White advances toward row 0, Black toward row 5. The forward square
/// is a move only while empty (pawns never capture straight ahead);
/// the two forward diagonals are captures only while opponent-occupied.
/// There is no double-step.
#[instrument(skip(board))]
pub fn targets(board: &Board, from: Coord, owner: Player) -> TargetMap {
    let mut targets = TargetMap::new();
    let dir = owner.forward();

    if let Some(ahead) = from.offset(dir, 0) {
        if board.is_empty(ahead) {
            targets.insert(ahead, TargetKind::Move);
        }
    }

    for dc in [-1, 1] {
        if let Some(diag) = from.offset(dir, dc) {
            if board
                .get(diag)
                .piece()
                .is_some_and(|piece| piece.owner != owner)
            {
                targets.insert(diag, TargetKind::Capture);
            }
        }
    }

    targets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Piece, PieceKind, Square};

    fn coord(row: u8, col: u8) -> Coord {
        Coord::new(row, col).unwrap()
    }

    #[test]
    fn test_starting_pawn_moves_forward_only() {
        let board = Board::starting_layout();

        // White pawn at (4, 1): forward (3, 1) is empty, diagonals
        // (3, 0) and (3, 2) are empty so no captures are offered.
        let targets = targets(&board, coord(4, 1), Player::White);

        assert_eq!(targets.len(), 1);
        assert_eq!(targets.get(&coord(3, 1)), Some(&TargetKind::Move));
    }

    #[test]
    fn test_blocked_pawn_cannot_advance() {
        let mut board = Board::new();
        board.set(
            coord(4, 1),
            Square::Occupied(Piece::new(PieceKind::Pawn, Player::White)),
        );
        board.set(
            coord(3, 1),
            Square::Occupied(Piece::new(PieceKind::Rook, Player::Black)),
        );

        // Straight ahead is occupied: no forward move, no forward capture.
        let targets = targets(&board, coord(4, 1), Player::White);

        assert!(targets.is_empty());
    }

    #[test]
    fn test_diagonal_captures_both_sides() {
        let mut board = Board::new();
        board.set(
            coord(4, 1),
            Square::Occupied(Piece::new(PieceKind::Pawn, Player::White)),
        );
        board.set(
            coord(3, 0),
            Square::Occupied(Piece::new(PieceKind::Pawn, Player::Black)),
        );
        board.set(
            coord(3, 2),
            Square::Occupied(Piece::new(PieceKind::Rook, Player::Black)),
        );

        let targets = targets(&board, coord(4, 1), Player::White);

        assert_eq!(targets.get(&coord(3, 0)), Some(&TargetKind::Capture));
        assert_eq!(targets.get(&coord(3, 1)), Some(&TargetKind::Move));
        assert_eq!(targets.get(&coord(3, 2)), Some(&TargetKind::Capture));
    }

    #[test]
    fn test_diagonal_never_targets_friendly_piece() {
        let mut board = Board::new();
        board.set(
            coord(4, 1),
            Square::Occupied(Piece::new(PieceKind::Pawn, Player::White)),
        );
        board.set(
            coord(3, 0),
            Square::Occupied(Piece::new(PieceKind::Knight, Player::White)),
        );

        let targets = targets(&board, coord(4, 1), Player::White);

        assert_eq!(targets.get(&coord(3, 0)), None);
    }

    #[test]
    fn test_black_pawn_advances_toward_row_five() {
        let board = Board::starting_layout();

        let targets = targets(&board, coord(1, 0), Player::Black);

        assert_eq!(targets.len(), 1);
        assert_eq!(targets.get(&coord(2, 0)), Some(&TargetKind::Move));
    }
}
