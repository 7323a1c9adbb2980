use crate::board::Board;
use crate::error::IllegalMove;
use crate::types::{Cell, Color, NUM_SQUARES};

/// Every displacement a piece can ever make, ordered so that destinations
/// from one origin come out in ascending `(row, col)` order.
const CANDIDATE_OFFSETS: [(i8, i8); 8] = [
    (-2, -2),
    (-2, 2),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
    (2, -2),
    (2, 2),
];
const JUMP_OFFSETS: [(i8, i8); 4] = [(2, 2), (2, -2), (-2, 2), (-2, -2)];

/// Restrictions on the side to move beyond piece geometry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveContext {
    /// Landing cell of a capture that must keep jumping.
    pub forced_origin: Option<Cell>,
    /// Some capture is available, so only captures are allowed.
    pub must_jump: bool,
}

impl MoveContext {
    /// No chained jump pending and captures optional.
    pub fn unconstrained() -> Self {
        Self::default()
    }

    /// Context at the start of a turn: forced capture applies if any jump exists.
    pub fn for_side(board: &Board, side: Color) -> Self {
        Self {
            forced_origin: None,
            must_jump: must_jump_for_side(board, side),
        }
    }
}

/// What `apply_move` did besides relocating the piece.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    pub promoted: bool,
    pub was_jump: bool,
    /// Only ever set after a non-promoting jump.
    pub further_jump_available: bool,
}

/// Validates a move and reports the first rule it breaks.
pub fn check_move(
    board: &Board,
    from: Cell,
    to: Cell,
    side: Color,
    ctx: &MoveContext,
) -> Result<(), IllegalMove> {
    for cell in [from, to] {
        if !cell.in_bounds() {
            return Err(IllegalMove::OutOfBounds(cell));
        }
    }

    let dr = to.row - from.row;
    let dc = to.col - from.col;
    let is_jump = dc.abs() == 2;

    if let Some(origin) = ctx.forced_origin {
        if from != origin || !is_jump {
            return Err(IllegalMove::ForcedJumpViolation(origin));
        }
    } else if ctx.must_jump && !is_jump {
        return Err(IllegalMove::MustCaptureViolation);
    }

    let piece = board.get(from).ok_or(IllegalMove::NoPieceAtOrigin)?;
    if piece.color() != side {
        return Err(IllegalMove::WrongTurn);
    }

    let step = if is_jump { 2 } else { 1 };
    let row_ok = if piece.is_king() {
        dr.abs() == step
    } else {
        dr == step * side.forward()
    };
    if !row_ok || (!is_jump && dc.abs() != 1) {
        return Err(IllegalMove::ShapeMismatch);
    }

    if board.get(to).is_some() {
        return Err(IllegalMove::DestinationOccupied);
    }

    if is_jump {
        let mid = from.offset(dr / 2, dc / 2);
        match board.get(mid) {
            Some(captured) if captured.color() != side => {}
            _ => return Err(IllegalMove::NoCaptureTarget),
        }
    }

    Ok(())
}

pub fn is_legal_move(board: &Board, from: Cell, to: Cell, side: Color, ctx: &MoveContext) -> bool {
    check_move(board, from, to, side, ctx).is_ok()
}

/// Moves the piece on `from` to `to`, crowning and capturing as needed.
///
/// Mutates in place. Callers evaluating a move speculatively work on a copy.
/// Caller contract: the move has passed `check_move`.
pub fn apply_move(board: &mut Board, from: Cell, to: Cell) -> MoveOutcome {
    debug_assert!(board.get(from).is_some(), "apply_move from empty cell {from}");
    let Some(mut piece) = board.get(from) else {
        return MoveOutcome::default();
    };
    let side = piece.color();

    let promoted = !piece.is_king() && to.row == side.promotion_row();
    if promoted {
        piece = piece.promoted();
    }

    board.set(from, None);
    board.set(to, Some(piece));

    let was_jump = (to.col - from.col).abs() == 2;
    if was_jump {
        board.set(
            from.offset((to.row - from.row) / 2, (to.col - from.col) / 2),
            None,
        );
    }

    // A freshly crowned piece ends the turn even if it could capture again.
    let further_jump_available = was_jump && !promoted && has_jump_from(board, to, side);

    MoveOutcome {
        promoted,
        was_jump,
        further_jump_available,
    }
}

/// Legal `(from, to)` pairs for `side` in ascending `(from, to)` row-major order.
pub fn legal_moves(board: &Board, side: Color, ctx: &MoveContext) -> Vec<(Cell, Cell)> {
    let mut out = Vec::new();
    for from in origins(board, side) {
        out.extend(
            destinations(board, from, side, ctx)
                .into_iter()
                .map(|to| (from, to)),
        );
    }
    out
}

/// Cells the piece on `from` may move to, for highlighting a selection.
pub fn legal_destinations(board: &Board, from: Cell, side: Color, ctx: &MoveContext) -> Vec<Cell> {
    if !from.in_bounds() {
        return Vec::new();
    }
    destinations(board, from, side, ctx)
}

pub fn must_jump_for_side(board: &Board, side: Color) -> bool {
    origins(board, side).any(|from| has_jump_from(board, from, side))
}

/// Mobility of `side`: every geometrically legal destination, captures optional.
pub fn legal_move_count(board: &Board, side: Color) -> usize {
    let ctx = MoveContext::unconstrained();
    origins(board, side)
        .map(|from| destinations(board, from, side, &ctx).len())
        .sum()
}

pub fn is_game_over(board: &Board, side_to_move: Color) -> bool {
    legal_move_count(board, side_to_move) == 0
}

fn origins(board: &Board, side: Color) -> impl Iterator<Item = Cell> + '_ {
    (0..NUM_SQUARES)
        .map(Cell::from_index)
        .filter(move |&cell| board.get(cell).is_some_and(|p| p.color() == side))
}

fn destinations(board: &Board, from: Cell, side: Color, ctx: &MoveContext) -> Vec<Cell> {
    CANDIDATE_OFFSETS
        .iter()
        .map(|&(dr, dc)| from.offset(dr, dc))
        .filter(|&to| is_legal_move(board, from, to, side, ctx))
        .collect()
}

fn has_jump_from(board: &Board, from: Cell, side: Color) -> bool {
    let ctx = MoveContext::unconstrained();
    JUMP_OFFSETS
        .iter()
        .any(|&(dr, dc)| is_legal_move(board, from, from.offset(dr, dc), side, &ctx))
}
