//! Royal count invariant: one royal rook per side while in progress.

use super::Invariant;
use crate::types::PieceKind;
use crate::typestate::GameInProgress;
use strum::IntoEnumIterator;

/// Invariant: Each side has exactly one royal piece, and it is a rook.
///
/// Royal status never transfers and promotion never grants it, so an
/// in-progress game always holds both royal rooks; once one falls the
/// game is finished and this state no longer exists.
pub struct RoyalCountInvariant;

impl Invariant<GameInProgress> for RoyalCountInvariant {
    fn holds(game: &GameInProgress) -> bool {
        crate::types::Player::iter().all(|player| {
            let royals: Vec<_> = game
                .board()
                .pieces()
                .filter(|(_, piece)| piece.owner == player && piece.royal)
                .collect();

            royals.len() == 1 && royals[0].1.kind == PieceKind::Rook
        })
    }

    fn description() -> &'static str {
        "Each side has exactly one royal rook while the game is in progress"
    }
}
