//! Serializable game wrapper for typestate phases.

use crate::action::{Move, MoveError};
use crate::coord::Coord;
use crate::rules::TargetMap;
use crate::types::{Board, Player};
use crate::typestate::{GameFinished, GameInProgress, GameResult, GameSetup};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Outcome of a successful move attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The move was applied and the turn passed to the opponent.
    Applied,
    /// The move captured the royal rook; the mover wins.
    Won(Player),
}

/// Serializable wrapper for a game in any phase.
///
/// Since typestate phases can't be directly serialized, we use this
/// enum to wrap all possible phases. It is also the engine boundary a
/// View talks to: selection queries and move attempts enter here, and
/// a rejected attempt never changes state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AnyGame {
    /// Game in setup phase.
    Setup {
        /// The board state.
        board: Board,
    },
    /// Game in progress.
    InProgress {
        /// The board state.
        board: Board,
        /// Current side to move.
        to_move: Player,
        /// Move history.
        history: Vec<Move>,
    },
    /// Game finished by a winning capture.
    Finished {
        /// The board state.
        board: Board,
        /// The winner.
        winner: Player,
        /// Move history.
        history: Vec<Move>,
    },
}

// ─────────────────────────────────────────────────────────────
//  Typestate conversions
// ─────────────────────────────────────────────────────────────

impl From<GameSetup> for AnyGame {
    fn from(game: GameSetup) -> Self {
        AnyGame::Setup {
            board: game.board().clone(),
        }
    }
}

impl From<GameInProgress> for AnyGame {
    fn from(game: GameInProgress) -> Self {
        AnyGame::InProgress {
            board: game.board().clone(),
            to_move: game.to_move(),
            history: game.history().to_vec(),
        }
    }
}

impl From<GameFinished> for AnyGame {
    fn from(game: GameFinished) -> Self {
        AnyGame::Finished {
            board: game.board().clone(),
            winner: game.winner(),
            history: game.history().to_vec(),
        }
    }
}

impl From<GameResult> for AnyGame {
    fn from(result: GameResult) -> Self {
        match result {
            GameResult::InProgress(g) => g.into(),
            GameResult::Finished(g) => g.into(),
        }
    }
}

impl AnyGame {
    /// Creates a fresh game with the starting layout, White to move.
    #[instrument]
    pub fn new() -> Self {
        GameSetup::new().start(Player::White).into()
    }

    /// Resets to a fresh game, clearing any finished state.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Returns the board for any game phase.
    pub fn board(&self) -> &Board {
        match self {
            AnyGame::Setup { board } => board,
            AnyGame::InProgress { board, .. } => board,
            AnyGame::Finished { board, .. } => board,
        }
    }

    /// Returns the move history for any game phase.
    pub fn history(&self) -> &[Move] {
        match self {
            AnyGame::Setup { .. } => &[],
            AnyGame::InProgress { history, .. } => history,
            AnyGame::Finished { history, .. } => history,
        }
    }

    /// Returns the current side to move, if the game is in progress.
    pub fn to_move(&self) -> Option<Player> {
        match self {
            AnyGame::InProgress { to_move, .. } => Some(*to_move),
            _ => None,
        }
    }

    /// Returns the winner, if the game is finished.
    pub fn winner(&self) -> Option<Player> {
        match self {
            AnyGame::Finished { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    /// Returns true if the game is over.
    pub fn is_over(&self) -> bool {
        matches!(self, AnyGame::Finished { .. })
    }

    /// Returns a status string for display.
    pub fn status_string(&self) -> String {
        match self {
            AnyGame::Setup { .. } => "Ready to start".to_string(),
            AnyGame::InProgress { to_move, .. } => format!("{} to move", to_move),
            AnyGame::Finished { winner, .. } => {
                format!("{} wins! Captured the Royal Rook", winner)
            }
        }
    }

    /// Computes the legal targets for selecting the square at `at`.
    ///
    /// Rejects selections the View must not act on: an empty square,
    /// an opponent-owned piece, or any selection once the game is over.
    /// Rejection changes no state and never passes the turn.
    #[instrument(skip(self))]
    pub fn select_square(&self, at: Coord) -> Result<TargetMap, MoveError> {
        match self {
            AnyGame::Setup { .. } => Err(MoveError::NotStarted),
            AnyGame::Finished { .. } => Err(MoveError::GameOver),
            AnyGame::InProgress { board, to_move, .. } => {
                let piece = board.get(at).piece().ok_or(MoveError::EmptySquare(at))?;
                if piece.owner != *to_move {
                    return Err(MoveError::WrongPlayer(piece.owner));
                }
                Ok(crate::rules::legal_targets(board, at))
            }
        }
    }

    /// Attempts to move the piece at `from` onto `to` for the side to move.
    ///
    /// On success the wrapper advances to the resulting phase and the
    /// outcome distinguishes a normal move from a winning capture. On
    /// failure the error is returned and the game is left untouched, so
    /// an illegal attempt (a routine misclick) is a harmless no-op.
    ///
    /// Validation replays the full history through the contract-checked
    /// typestate, so a corrupted wrapper cannot smuggle in an illegal
    /// position.
    #[instrument(skip(self))]
    pub fn attempt_move(&mut self, from: Coord, to: Coord) -> Result<MoveOutcome, MoveError> {
        let (to_move, mut moves) = match self {
            AnyGame::Setup { .. } => return Err(MoveError::NotStarted),
            AnyGame::Finished { .. } => return Err(MoveError::GameOver),
            AnyGame::InProgress {
                to_move, history, ..
            } => (*to_move, history.clone()),
        };

        moves.push(Move::new(to_move, from, to));

        debug!(
            move_count = moves.len(),
            "Replaying moves with contract validation"
        );

        match GameInProgress::replay(&moves) {
            Ok(GameResult::InProgress(game)) => {
                *self = game.into();
                Ok(MoveOutcome::Applied)
            }
            Ok(GameResult::Finished(game)) => {
                let winner = game.winner();
                *self = game.into();
                Ok(MoveOutcome::Won(winner))
            }
            Err(e) => {
                warn!(error = %e, "Move rejected");
                Err(e)
            }
        }
    }
}

impl Default for AnyGame {
    fn default() -> Self {
        Self::new()
    }
}
