use crate::types::{BOARD_SIZE, Cell, Color, NUM_SQUARES, Piece};

const HOME_ROWS: i8 = 3;

/// Checkers board: 64 row-major cells, each empty or holding one piece.
///
/// Pure storage. Legality is enforced by `crate::rules`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Piece>; NUM_SQUARES],
}

impl Board {
    /// Creates the standard starting position:
    /// red men on the dark squares of rows 0-2, white men on rows 5-7.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for idx in 0..NUM_SQUARES {
            let cell = Cell::from_index(idx);
            if !cell.is_playable() {
                continue;
            }
            if cell.row < HOME_ROWS {
                board.cells[idx] = Some(Piece::RedMan);
            } else if cell.row >= BOARD_SIZE as i8 - HOME_ROWS {
                board.cells[idx] = Some(Piece::WhiteMan);
            }
        }
        board
    }

    pub fn empty() -> Self {
        Self {
            cells: [None; NUM_SQUARES],
        }
    }

    /// Builds a board holding exactly the given pieces.
    /// Out-of-range cells are ignored.
    pub fn from_pieces(pieces: &[(Cell, Piece)]) -> Self {
        let mut board = Self::empty();
        for &(cell, piece) in pieces {
            board.set(cell, Some(piece));
        }
        board
    }

    /// Returns `None` for empty or out-of-range cells.
    pub fn get(&self, cell: Cell) -> Option<Piece> {
        if !cell.in_bounds() {
            return None;
        }
        self.cells[cell.index()]
    }

    pub fn set(&mut self, cell: Cell, piece: Option<Piece>) {
        if cell.in_bounds() {
            self.cells[cell.index()] = piece;
        }
    }

    /// Occupied cells with their pieces, in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Cell, Piece)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(idx, piece)| piece.map(|p| (Cell::from_index(idx), p)))
    }

    /// Number of pieces (men and kings) of the given color.
    pub fn count(&self, color: Color) -> u8 {
        self.pieces().filter(|(_, p)| p.color() == color).count() as u8
    }

    /// Converts board to `[u8; 64]` using `Piece::code`, 0 for empty.
    pub fn to_array(&self) -> [u8; NUM_SQUARES] {
        let mut out = [0u8; NUM_SQUARES];
        for (slot, piece) in out.iter_mut().zip(self.cells.iter()) {
            *slot = piece.map_or(0, Piece::code);
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
