//! Phase-specific typestate structs for Mini Rooks.
//!
//! Each phase is its own distinct type with phase-specific fields.
//! This encodes invariants at compile time - a `GameFinished` ALWAYS
//! has a winner, not `Option<Player>`.

use crate::action::{Move, MoveError};
use crate::contracts::{Contract, MoveContract};
use crate::coord::Coord;
use crate::rules::{self, TargetMap};
use crate::types::{Board, Player};
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Game in setup phase - ready to start.
///
/// The board is always at the fixed starting layout.
/// No history, no winner.
#[derive(Debug, Clone)]
pub struct GameSetup {
    board: Board,
}

impl GameSetup {
    /// Creates a new game in setup phase.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::starting_layout(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Starts the game with the first mover (consumes setup, returns in-progress).
    #[instrument(skip(self))]
    pub fn start(self, first_player: Player) -> GameInProgress {
        GameInProgress {
            board: self.board,
            history: Vec::new(),
            to_move: first_player,
        }
    }
}

impl Default for GameSetup {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Game in progress - can accept moves.
///
/// Invariants enforced by type:
/// - to_move alternates
/// - No winner yet (the winner lives in GameFinished)
#[derive(Debug, Clone)]
pub struct GameInProgress {
    pub(crate) board: Board,
    pub(crate) history: Vec<Move>,
    pub(crate) to_move: Player,
}

impl GameInProgress {
    /// Makes a move, consuming self and transitioning to the next state.
    ///
    /// Returns either a new InProgress or a Finished state. A move that
    /// captures the opponent's royal rook finishes the game immediately:
    /// the turn does not flip and the promotion check never runs.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always (LegalMove)
    /// - Postconditions checked in debug builds only
    #[instrument(skip(self))]
    pub fn make_move(self, action: Move) -> Result<GameResult, MoveError> {
        // Precondition: Check contract
        MoveContract::pre(&self, &action)?;

        // Store state for postcondition checking
        #[cfg(debug_assertions)]
        let before = self.clone();

        // Apply move effects (relocation, then promotion)
        let mut game = self;
        let applied = rules::apply(&mut game.board, action);
        game.history.push(action);

        // Winning capture: the mover wins, no turn switch
        if applied.captured.is_some_and(|piece| piece.royal) {
            return Ok(GameResult::Finished(GameFinished {
                board: game.board,
                history: game.history,
                winner: action.player,
            }));
        }

        // Continue game
        game.to_move = game.to_move.opponent();

        // Postcondition: Verify contract in debug builds
        #[cfg(debug_assertions)]
        MoveContract::post(&before, &game)?;

        Ok(GameResult::InProgress(game))
    }

    /// Returns the current side to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the legal targets for the piece at `from`.
    ///
    /// Defined over any occupied square; whether the piece may actually
    /// be moved this turn is decided by the move contract.
    #[instrument(skip(self))]
    pub fn legal_targets(&self, from: Coord) -> TargetMap {
        rules::legal_targets(&self.board, from)
    }

    /// Replays moves from the starting layout.
    ///
    /// Stops at the first winning capture; trailing moves are ignored.
    #[instrument]
    pub fn replay(moves: &[Move]) -> Result<GameResult, MoveError> {
        let mut game = GameSetup::new().start(Player::White);

        for action in moves {
            match game.make_move(*action)? {
                GameResult::InProgress(g) => game = g,
                GameResult::Finished(g) => return Ok(GameResult::Finished(g)),
            }
        }

        Ok(GameResult::InProgress(game))
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Game finished - a royal rook has been captured.
///
/// The winner is ALWAYS present (not Option).
/// This struct encodes the invariant at the type level.
#[derive(Debug, Clone)]
pub struct GameFinished {
    board: Board,
    history: Vec<Move>,
    winner: Player,
}

impl GameFinished {
    /// Returns the winner.
    ///
    /// Never returns Option - the winner is guaranteed.
    pub fn winner(&self) -> Player {
        self.winner
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Restarts the game (consumes finished, returns setup).
    ///
    /// The only exit from the finished state.
    #[instrument(skip(self))]
    pub fn restart(self) -> GameSetup {
        GameSetup::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of making a move.
#[derive(Debug)]
pub enum GameResult {
    /// Game continues.
    InProgress(GameInProgress),
    /// Game finished by a winning capture.
    Finished(GameFinished),
}
