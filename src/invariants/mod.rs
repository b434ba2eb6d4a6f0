//! First-class invariants for Mini Rooks.
//!
//! Invariants are logical properties that must hold throughout game
//! execution. They are testable independently and serve as
//! documentation of system guarantees.

/// A logical property that must hold for a given state.
///
/// Invariants express system guarantees that should never be violated.
/// They are checked in debug builds and can be tested independently.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// This trait enables composition of multiple invariants into a single
/// verification step. Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod alternating_turn;
pub mod history_consistent;
pub mod royal_count;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use royal_count::RoyalCountInvariant;

/// All Mini Rooks invariants as a composable set.
pub type MiniRooksInvariants = (
    RoyalCountInvariant,
    AlternatingTurnInvariant,
    HistoryConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Move;
    use crate::coord::Coord;
    use crate::types::{Player, Square};
    use crate::typestate::{GameInProgress, GameResult, GameSetup};

    fn coord(row: u8, col: u8) -> Coord {
        Coord::new(row, col).unwrap()
    }

    #[test]
    fn test_invariant_set_holds_for_fresh_game() {
        let game = GameSetup::new().start(Player::White);
        assert!(MiniRooksInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let moves = vec![
            Move::new(Player::White, coord(4, 1), coord(3, 1)),
            Move::new(Player::Black, coord(1, 0), coord(2, 0)),
            Move::new(Player::White, coord(3, 1), coord(2, 1)),
        ];

        if let Ok(GameResult::InProgress(game)) = GameInProgress::replay(&moves) {
            assert!(MiniRooksInvariants::check_all(&game).is_ok());
        } else {
            panic!("Expected in-progress game");
        }
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let game = GameSetup::new().start(Player::White);
        let action = Move::new(Player::White, coord(4, 1), coord(3, 1));

        if let Ok(GameResult::InProgress(mut game)) = game.make_move(action) {
            // Corrupt the board by erasing White's royal rook.
            game.board.set(coord(5, 5), Square::Empty);

            let result = MiniRooksInvariants::check_all(&game);
            assert!(result.is_err());

            let violations = result.unwrap_err();
            assert!(!violations.is_empty());
        }
    }

    #[test]
    fn test_two_invariants_as_set() {
        let game = GameSetup::new().start(Player::White);

        type TwoInvariants = (RoyalCountInvariant, AlternatingTurnInvariant);
        assert!(TwoInvariants::check_all(&game).is_ok());
    }
}
