//! Rook movement: orthogonal ray walking.

use super::{TargetKind, TargetMap};
use crate::coord::Coord;
use crate::types::{Board, Player};
use tracing::instrument;

/// The four orthogonal ray directions.
const RAYS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Computes rook targets from `from` for a rook owned by `owner`.
///
/// Each ray extends over empty squares and stops at the first occupied
/// square, which is a capture target iff opponent-owned. The ray never
/// continues past an occupied square.
#[instrument(skip(board))]
pub fn targets(board: &Board, from: Coord, owner: Player) -> TargetMap {
    let mut targets = TargetMap::new();

    for (dr, dc) in RAYS {
        let mut current = from;
        while let Some(next) = current.offset(dr, dc) {
            match board.get(next).piece() {
                None => {
                    targets.insert(next, TargetKind::Move);
                    current = next;
                }
                Some(piece) => {
                    if piece.owner != owner {
                        targets.insert(next, TargetKind::Capture);
                    }
                    break;
                }
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
    fn test_open_board_reaches_whole_rank_and_file() {
        let mut board = Board::new();
        board.set(
            coord(3, 3),
            Square::Occupied(Piece::new(PieceKind::Rook, Player::White)),
        );

        let targets = targets(&board, coord(3, 3), Player::White);

        // 5 squares along the row plus 5 along the column.
        assert_eq!(targets.len(), 10);
        assert!(targets.values().all(|kind| *kind == TargetKind::Move));
    }

    #[test]
    fn test_ray_stops_before_friendly_piece() {
        let board = Board::starting_layout();

        // White rook at (5, 0): right-moving ray hits the knight at (5, 2).
        let targets = targets(&board, coord(5, 0), Player::White);

        assert_eq!(targets.get(&coord(5, 1)), Some(&TargetKind::Move));
        assert_eq!(targets.get(&coord(5, 2)), None);
        assert_eq!(targets.get(&coord(5, 3)), None);
    }

    #[test]
    fn test_ray_stops_on_enemy_capture() {
        let mut board = Board::new();
        board.set(
            coord(3, 0),
            Square::Occupied(Piece::new(PieceKind::Rook, Player::White)),
        );
        board.set(
            coord(3, 4),
            Square::Occupied(Piece::new(PieceKind::Pawn, Player::Black)),
        );

        let targets = targets(&board, coord(3, 0), Player::White);

        assert_eq!(targets.get(&coord(3, 4)), Some(&TargetKind::Capture));
        // Nothing beyond the captured piece.
        assert_eq!(targets.get(&coord(3, 5)), None);
    }

    #[test]
    fn test_starting_rook_up_ray() {
        let board = Board::starting_layout();

        // White rook at (5, 0): the up ray runs to (2, 0), then captures
        // the black pawn at (1, 0) and stops before the royal at (0, 0).
        let targets = targets(&board, coord(5, 0), Player::White);

        assert_eq!(targets.get(&coord(4, 0)), Some(&TargetKind::Move));
        assert_eq!(targets.get(&coord(3, 0)), Some(&TargetKind::Move));
        assert_eq!(targets.get(&coord(2, 0)), Some(&TargetKind::Move));
        assert_eq!(targets.get(&coord(1, 0)), Some(&TargetKind::Capture));
        assert_eq!(targets.get(&coord(0, 0)), None);
    }
}
