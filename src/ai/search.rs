use log::debug;
use web_time::Instant;

use crate::board::Board;
use crate::game::MoveSelector;
use crate::rules::{self, MoveContext};
use crate::types::{Cell, Color};

/// One-ply greedy selector: plays the move that leaves `side` with the widest
/// mobility margin over its opponent.
///
/// Material and king safety are ignored. Equal scores keep the move found first
/// in ascending `(from, to)` order.
#[derive(Debug, Default, Clone, Copy)]
pub struct GreedyMobilitySelector;

impl MoveSelector for GreedyMobilitySelector {
    fn select_move(&self, board: &Board, side: Color, ctx: &MoveContext) -> Option<(Cell, Cell)> {
        let start = Instant::now();
        let candidates = rules::legal_moves(board, side, ctx);

        let mut best: Option<((Cell, Cell), i32)> = None;
        for (from, to) in candidates.iter().copied() {
            let score = mobility_score(board, side, from, to);
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some(((from, to), score));
            }
        }

        if let Some(((from, to), score)) = best {
            debug!(
                "{side:?} selects {from} -> {to} (score {score}, {} candidates, {:?})",
                candidates.len(),
                start.elapsed()
            );
        }
        best.map(|(mv, _)| mv)
    }
}

/// Mobility of `side` minus mobility of its opponent after playing `from -> to`
/// on a scratch copy of `board`.
pub fn mobility_score(board: &Board, side: Color, from: Cell, to: Cell) -> i32 {
    let mut next = *board;
    rules::apply_move(&mut next, from, to);
    rules::legal_move_count(&next, side) as i32
        - rules::legal_move_count(&next, side.opponent()) as i32
}
