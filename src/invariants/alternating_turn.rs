//! Alternating turn invariant: sides alternate White, Black, White, ...

use super::Invariant;
use crate::types::Player;
use crate::typestate::GameInProgress;

/// Invariant: Sides alternate turns.
///
/// Move history must show White, Black, White, Black, ... and the side
/// to move must match the history's parity. First move is always White.
pub struct AlternatingTurnInvariant;

impl Invariant<GameInProgress> for AlternatingTurnInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let history = game.history();

        if history.is_empty() {
            return game.to_move() == Player::White;
        }

        if history[0].player != Player::White {
            return false;
        }

        for window in history.windows(2) {
            if window[0].player == window[1].player {
                return false;
            }
        }

        let expected_next = if history.len() % 2 == 0 {
            Player::White
        } else {
            Player::Black
        };

        game.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Sides alternate turns (White, Black, White, ...)"
    }
}
