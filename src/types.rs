//! Core domain types for Mini Rooks.

use crate::coord::{BOARD_SIZE, Coord};
use serde::{Deserialize, Serialize};

/// A side in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Player {
    /// White (moves first, advances toward row 0).
    White,
    /// Black (moves second, advances toward row 5).
    Black,
}

impl Player {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Row delta for this side's pawns.
    pub fn forward(self) -> i8 {
        match self {
            Player::White => -1,
            Player::Black => 1,
        }
    }

    /// The far rank where this side's pawns promote.
    pub fn promotion_row(self) -> u8 {
        match self {
            Player::White => 0,
            Player::Black => BOARD_SIZE - 1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::White => write!(f, "White"),
            Player::Black => write!(f, "Black"),
        }
    }
}

/// The kind of a piece.
///
/// A closed set: per-kind move rules live in the `rules` module rather
/// than behind a trait, since no further kinds will be added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum PieceKind {
    /// Slides along the four orthogonal rays.
    Rook,
    /// Jumps the eight (±2, ±1) offsets.
    Knight,
    /// Steps forward to empty squares, captures diagonally forward.
    Pawn,
}

impl PieceKind {
    /// Single-letter symbol for board display.
    pub fn symbol(self) -> char {
        match self {
            PieceKind::Rook => 'R',
            PieceKind::Knight => 'N',
            PieceKind::Pawn => 'P',
        }
    }
}

/// A piece on the board.
///
/// Each side starts with exactly one royal rook; capturing it ends the
/// game. Royal status never transfers and promotion never grants it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    /// What the piece is.
    pub kind: PieceKind,
    /// Which side owns it.
    pub owner: Player,
    /// Whether capturing this piece wins the game.
    pub royal: bool,
}

impl Piece {
    /// Creates an ordinary (non-royal) piece.
    pub fn new(kind: PieceKind, owner: Player) -> Self {
        Self {
            kind,
            owner,
            royal: false,
        }
    }

    /// Creates a side's royal rook.
    pub fn royal_rook(owner: Player) -> Self {
        Self {
            kind: PieceKind::Rook,
            owner,
            royal: true,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a piece.
    Occupied(Piece),
}

impl Square {
    /// Returns the occupying piece, if any.
    pub fn piece(&self) -> Option<Piece> {
        match self {
            Square::Empty => None,
            Square::Occupied(piece) => Some(*piece),
        }
    }
}

/// 6x6 Mini Rooks board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Rows of squares, indexed [row][col].
    squares: [[Square; 6]; 6],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            squares: [[Square::Empty; 6]; 6],
        }
    }

    /// Creates a board with the fixed starting layout.
    ///
    /// White's back rank sits at row 5 with the royal rook at (5, 5);
    /// Black's at row 0 with the royal rook at (0, 0). The layout is
    /// deliberately asymmetric and must not be "corrected".
    pub fn starting_layout() -> Self {
        let mut board = Self::new();
        let place = |board: &mut Board, row: u8, col: u8, piece: Piece| {
            let coord = Coord::new(row, col).expect("starting layout is in bounds");
            board.set(coord, Square::Occupied(piece));
        };

        place(&mut board, 5, 5, Piece::royal_rook(Player::White));
        place(&mut board, 5, 0, Piece::new(PieceKind::Rook, Player::White));
        place(&mut board, 5, 2, Piece::new(PieceKind::Knight, Player::White));
        place(&mut board, 5, 3, Piece::new(PieceKind::Rook, Player::White));
        place(&mut board, 4, 1, Piece::new(PieceKind::Pawn, Player::White));
        place(&mut board, 4, 5, Piece::new(PieceKind::Pawn, Player::White));

        place(&mut board, 0, 0, Piece::royal_rook(Player::Black));
        place(&mut board, 0, 2, Piece::new(PieceKind::Rook, Player::Black));
        place(&mut board, 0, 3, Piece::new(PieceKind::Knight, Player::Black));
        place(&mut board, 0, 5, Piece::new(PieceKind::Rook, Player::Black));
        place(&mut board, 1, 0, Piece::new(PieceKind::Pawn, Player::Black));
        place(&mut board, 1, 4, Piece::new(PieceKind::Pawn, Player::Black));

        board
    }

    /// Gets the square at a coordinate.
    pub fn get(&self, coord: Coord) -> Square {
        self.squares[coord.row() as usize][coord.col() as usize]
    }

    /// Sets the square at a coordinate.
    pub fn set(&mut self, coord: Coord, square: Square) {
        self.squares[coord.row() as usize][coord.col() as usize] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.get(coord) == Square::Empty
    }

    /// Returns all rows of squares, indexed [row][col].
    pub fn squares(&self) -> &[[Square; 6]; 6] {
        &self.squares
    }

    /// Iterates over all occupied squares as (coordinate, piece) pairs.
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        Coord::all().filter_map(|coord| self.get(coord).piece().map(|piece| (coord, piece)))
    }

    /// Formats the board as a human-readable grid.
    ///
    /// White pieces are uppercase, Black lowercase; the royal rook is
    /// suffixed with `*`, empty squares shown as `.`.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let coord = Coord::new(row, col).expect("display loop is in bounds");
                match self.get(coord) {
                    Square::Empty => result.push_str(" ."),
                    Square::Occupied(piece) => {
                        let symbol = match piece.owner {
                            Player::White => piece.kind.symbol(),
                            Player::Black => piece.kind.symbol().to_ascii_lowercase(),
                        };
                        result.push(if piece.royal { '*' } else { ' ' });
                        result.push(symbol);
                    }
                }
                if col < BOARD_SIZE - 1 {
                    result.push(' ');
                }
            }
            if row < BOARD_SIZE - 1 {
                result.push('\n');
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting_layout()
    }
}
