//! Mini Rooks - pure game logic for a 6x6 hot-seat board game
//!
//! Two players share one seat and alternate moves; capturing the
//! opponent's Royal Rook wins immediately. Pieces are rooks, knights
//! and pawns, with pawns promoting to knights on the far rank.
//!
//! # Architecture
//!
//! - **Rules**: pure legality and effect functions over board state
//! - **Typestate**: phase-per-struct game state machine with contracts
//! - **Invariants**: first-class, independently testable guarantees
//! - **Wrapper**: serializable facade a View renders and drives
//!
//! # Example
//!
//! ```
//! use mini_rooks::{AnyGame, Coord, MoveOutcome};
//!
//! let mut game = AnyGame::new();
//!
//! // White pawn at (4, 1) may step to (3, 1).
//! let from = Coord::new(4, 1).unwrap();
//! let to = Coord::new(3, 1).unwrap();
//! let targets = game.select_square(from).unwrap();
//! assert!(targets.contains_key(&to));
//!
//! assert_eq!(game.attempt_move(from, to), Ok(MoveOutcome::Applied));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod coord;
mod types;
mod wrapper;

// Public module declarations
pub mod contracts;
pub mod invariants;
pub mod rules;
pub mod typestate;

// Crate-level exports - Coordinates
pub use coord::{BOARD_SIZE, Coord};

// Crate-level exports - Domain types
pub use types::{Board, Piece, PieceKind, Player, Square};

// Crate-level exports - Actions
pub use action::{Move, MoveError};

// Crate-level exports - Rules
pub use rules::{TargetKind, TargetMap, legal_targets};

// Crate-level exports - Typestate phases
pub use typestate::{GameFinished, GameInProgress, GameResult, GameSetup};

// Crate-level exports - View-facing wrapper
pub use wrapper::{AnyGame, MoveOutcome};
