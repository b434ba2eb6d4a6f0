//! Contract-based validation for Mini Rooks moves.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use crate::action::{Move, MoveError};
use crate::invariants::{InvariantSet, MiniRooksInvariants};
use crate::rules;
use crate::typestate::GameInProgress;
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// Contracts formalize Hoare-style reasoning:
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    ///
    /// This verifies that the transition maintained system invariants.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The origin square must hold a piece.
pub struct PieceAtOrigin;

impl PieceAtOrigin {
    /// Checks that the origin square is occupied.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        if game.board().is_empty(mov.from) {
            Err(MoveError::EmptySquare(mov.from))
        } else {
            Ok(())
        }
    }
}

/// Precondition: The mover must be the side to move and own the origin piece.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Checks that the mover has the turn and owns the origin piece.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        if mov.player != game.to_move() {
            return Err(MoveError::WrongPlayer(mov.player));
        }

        match game.board().get(mov.from).piece() {
            Some(piece) if piece.owner == mov.player => Ok(()),
            _ => Err(MoveError::WrongPlayer(mov.player)),
        }
    }
}

/// Precondition: The destination must be in the piece's legal target set.
pub struct TargetIsLegal;

impl TargetIsLegal {
    /// Checks that the destination is in the piece's legal target set.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        if rules::legal_targets(game.board(), mov.from).contains_key(&mov.to) {
            Ok(())
        } else {
            Err(MoveError::IllegalTarget(mov.to))
        }
    }
}

/// Composite precondition: A move is legal if a piece of the side to
/// move sits at the origin and the destination is in its legal set.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        PieceAtOrigin::check(mov, game)?;
        PlayersTurn::check(mov, game)?;
        TargetIsLegal::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Origin holds a piece owned by the side to move
/// - Destination is in the piece's legal target set
///
/// Postconditions:
/// - Both royal rooks still on the board
/// - Sides still alternate
/// - History still reproduces the board
pub struct MoveContract;

impl Contract<GameInProgress, Move> for MoveContract {
    fn pre(game: &GameInProgress, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(_before: &GameInProgress, after: &GameInProgress) -> Result<(), MoveError> {
        MiniRooksInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::Coord;
    use crate::types::Player;
    use crate::typestate::{GameResult, GameSetup};

    fn coord(row: u8, col: u8) -> Coord {
        Coord::new(row, col).unwrap()
    }

    #[test]
    fn test_precondition_legal_pawn_push() {
        let game = GameSetup::new().start(Player::White);
        let action = Move::new(Player::White, coord(4, 1), coord(3, 1));

        assert!(MoveContract::pre(&game, &action).is_ok());
    }

    #[test]
    fn test_precondition_empty_origin() {
        let game = GameSetup::new().start(Player::White);
        let action = Move::new(Player::White, coord(3, 3), coord(2, 3));

        assert!(matches!(
            MoveContract::pre(&game, &action),
            Err(MoveError::EmptySquare(_))
        ));
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let game = GameSetup::new().start(Player::White);
        // Black tries to move while it's White's turn.
        let action = Move::new(Player::Black, coord(1, 0), coord(2, 0));

        assert!(matches!(
            MoveContract::pre(&game, &action),
            Err(MoveError::WrongPlayer(_))
        ));
    }

    #[test]
    fn test_precondition_opponent_piece() {
        let game = GameSetup::new().start(Player::White);
        // White tries to push a Black pawn.
        let action = Move::new(Player::White, coord(1, 0), coord(2, 0));

        assert!(matches!(
            MoveContract::pre(&game, &action),
            Err(MoveError::WrongPlayer(_))
        ));
    }

    #[test]
    fn test_precondition_illegal_target() {
        let game = GameSetup::new().start(Player::White);
        // Pawns cannot step diagonally into an empty square.
        let action = Move::new(Player::White, coord(4, 1), coord(3, 0));

        assert!(matches!(
            MoveContract::pre(&game, &action),
            Err(MoveError::IllegalTarget(_))
        ));
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let game = GameSetup::new().start(Player::White);
        let action = Move::new(Player::White, coord(4, 1), coord(3, 1));

        if let Ok(GameResult::InProgress(after)) = game.clone().make_move(action) {
            assert!(MoveContract::post(&game, &after).is_ok());
        }
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let game = GameSetup::new().start(Player::White);
        let action = Move::new(Player::White, coord(4, 1), coord(3, 1));

        if let Ok(GameResult::InProgress(mut after)) = game.clone().make_move(action) {
            // Corrupt the board: erase Black's royal rook.
            after.board.set(coord(0, 0), crate::types::Square::Empty);

            assert!(MoveContract::post(&game, &after).is_err());
        }
    }
}
