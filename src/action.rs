//! First-class action types for Mini Rooks.
//!
//! Moves are domain events, not side effects. They represent the
//! player's intent and can be validated independently of execution.

use crate::coord::Coord;
use crate::types::Player;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move: a player relocating the piece at `from` onto `to`.
///
/// Moves are first-class domain events that can be:
/// - Validated before application
/// - Serialized for replay
/// - Logged for debugging
/// - Reasoned about by contracts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The square the moving piece starts on.
    pub from: Coord,
    /// The destination square.
    pub to: Coord,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, from: Coord, to: Coord) -> Self {
        Self { player, from, to }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the origin square.
    pub fn from(&self) -> Coord {
        self.from
    }

    /// Returns the destination square.
    pub fn to(&self) -> Coord {
        self.to
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} -> {}", self.player, self.from, self.to)
    }
}

/// Error that can occur when validating or applying a move.
///
/// Illegal attempts are routine (a misclick in the View), so they are
/// surfaced as values rather than panics; a rejected move changes no
/// game state.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// There is no piece at the origin square.
    #[display("No piece at {}", _0)]
    EmptySquare(Coord),

    /// It's not this player's turn, or the piece belongs to the opponent.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),

    /// The destination is not a legal target for the piece at the origin.
    #[display("{} is not a legal target", _0)]
    IllegalTarget(Coord),

    /// The game hasn't started yet.
    #[display("Game hasn't started yet")]
    NotStarted,

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
