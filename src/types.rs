use std::fmt;

use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 8;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// A board coordinate. Rows grow downwards from Red's home rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Cell {
    pub row: i8,
    pub col: i8,
}

impl Cell {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    pub fn in_bounds(self) -> bool {
        (0..BOARD_SIZE as i8).contains(&self.row) && (0..BOARD_SIZE as i8).contains(&self.col)
    }

    /// Index into a row-major 64-entry array. Caller must check `in_bounds`.
    pub(crate) fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    pub(crate) fn from_index(idx: usize) -> Self {
        Self::new((idx / BOARD_SIZE) as i8, (idx % BOARD_SIZE) as i8)
    }

    pub fn offset(self, dr: i8, dc: i8) -> Self {
        Self::new(self.row + dr, self.col + dc)
    }

    /// Dark squares are the only ones pieces ever stand on.
    pub fn is_playable(self) -> bool {
        (self.row + self.col) % 2 == 1
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Red,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Self::White => Self::Red,
            Self::Red => Self::White,
        }
    }

    /// Row delta of a forward step.
    pub fn forward(self) -> i8 {
        match self {
            Self::White => -1,
            Self::Red => 1,
        }
    }

    /// Row on which a man of this color is crowned.
    pub fn promotion_row(self) -> i8 {
        match self {
            Self::White => 0,
            Self::Red => BOARD_SIZE as i8 - 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    WhiteMan,
    WhiteKing,
    RedMan,
    RedKing,
}

impl Piece {
    pub fn king(color: Color) -> Self {
        match color {
            Color::White => Self::WhiteKing,
            Color::Red => Self::RedKing,
        }
    }

    pub fn color(self) -> Color {
        match self {
            Self::WhiteMan | Self::WhiteKing => Color::White,
            Self::RedMan | Self::RedKing => Color::Red,
        }
    }

    pub fn is_king(self) -> bool {
        matches!(self, Self::WhiteKing | Self::RedKing)
    }

    pub fn promoted(self) -> Self {
        Self::king(self.color())
    }

    /// Encoding used by `Board::to_array`: 1/2 white man/king, 3/4 red man/king.
    pub fn code(self) -> u8 {
        match self {
            Self::WhiteMan => 1,
            Self::WhiteKing => 2,
            Self::RedMan => 3,
            Self::RedKing => 4,
        }
    }
}

/// Result of a single successful step, returned to the caller of `attempt_move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveReport {
    pub applied_from: Cell,
    pub applied_to: Cell,
    pub promoted: bool,
    pub was_jump: bool,
    /// Contract:
    /// - `true` when the same piece must jump again before the turn passes.
    /// - `false` when the turn has passed to the other side.
    pub continues_jump: bool,
}

/// Origin and destination of the most recent AI step, for highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AiMove {
    pub from: Cell,
    pub to: Cell,
}

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// Row-major, see `Piece::code`; 0 is empty.
    pub board: Vec<u8>,
    pub turn: Color,
    pub white_count: u8,
    pub red_count: u8,
    pub is_game_over: bool,
    pub must_jump: bool,
    pub forced_origin: Option<Cell>,
    pub selected: Option<Cell>,
    pub last_ai_move: Option<AiMove>,
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    pub winner: Color,
    pub white_count: u8,
    pub red_count: u8,
}
