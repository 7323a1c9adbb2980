use log::{debug, info, warn};

use crate::ai::GreedyMobilitySelector;
use crate::board::Board;
use crate::config::GameConfig;
use crate::error::IllegalMove;
use crate::rules::{self, MoveContext};
use crate::types::{AiMove, Cell, Color, GameResult, GameState, MoveReport};

pub trait MoveSelector: Send + Sync {
    fn select_move(&self, board: &Board, side: Color, ctx: &MoveContext) -> Option<(Cell, Cell)>;
}

/// Deterministic selector that always plays the first legal move in scan order.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstLegalMoveSelector;

impl MoveSelector for FirstLegalMoveSelector {
    fn select_move(&self, board: &Board, side: Color, ctx: &MoveContext) -> Option<(Cell, Cell)> {
        rules::legal_moves(board, side, ctx).into_iter().next()
    }
}

/// What a click did to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The game had ended; the click restarted it.
    Reset,
    /// The clicked cell is now the selected origin.
    Selected(Cell),
    /// Off-board click; selection cleared.
    Ignored,
    /// The selected piece moved. `ai` holds every step of the reply, if any.
    Moved { human: MoveReport, ai: Vec<MoveReport> },
}

pub struct GameSession {
    board: Board,
    turn: Color,
    forced_origin: Option<Cell>,
    must_jump: bool,
    game_over: bool,
    selected: Option<Cell>,
    last_ai_move: Option<AiMove>,
    config: GameConfig,
    selector: Box<dyn MoveSelector>,
}

impl GameSession {
    pub fn new(config: GameConfig, selector: Box<dyn MoveSelector>) -> Self {
        let mut session = Self {
            board: Board::new(),
            turn: Color::White,
            forced_origin: None,
            must_jump: false,
            game_over: false,
            selected: None,
            last_ai_move: None,
            config,
            selector,
        };
        session.reset();
        session
    }

    pub fn new_with_default_selector(config: GameConfig) -> Self {
        Self::new(config, Box::new(GreedyMobilitySelector))
    }

    /// Restores the starting position with White to move.
    pub fn reset(&mut self) {
        self.load_position(Board::new(), Color::White);
        self.last_ai_move = None;
    }

    /// Replaces the position wholesale, e.g. to set up a puzzle.
    pub fn load_position(&mut self, board: Board, turn: Color) {
        self.board = board;
        self.turn = turn;
        self.forced_origin = None;
        self.selected = None;
        self.must_jump = rules::must_jump_for_side(&self.board, turn);
        self.game_over = rules::is_game_over(&self.board, turn);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn forced_origin(&self) -> Option<Cell> {
        self.forced_origin
    }

    pub fn must_jump(&self) -> bool {
        self.must_jump
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    pub fn selected(&self) -> Option<Cell> {
        self.selected
    }

    pub fn last_ai_move(&self) -> Option<AiMove> {
        self.last_ai_move
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// The side with no legal move loses.
    pub fn winner(&self) -> Option<Color> {
        self.game_over.then_some(self.turn.opponent())
    }

    fn context(&self) -> MoveContext {
        MoveContext {
            forced_origin: self.forced_origin,
            must_jump: self.must_jump,
        }
    }

    /// Validates and plays one step for the side to move.
    pub fn attempt_move(&mut self, from: Cell, to: Cell) -> Result<MoveReport, IllegalMove> {
        if self.game_over {
            return Err(IllegalMove::GameOver);
        }
        rules::check_move(&self.board, from, to, self.turn, &self.context())?;

        let mover = self.turn;
        let outcome = rules::apply_move(&mut self.board, from, to);
        let continues_jump = outcome.further_jump_available;

        if continues_jump {
            self.forced_origin = Some(to);
            debug!("{mover:?} {from} -> {to} must keep jumping");
        } else {
            self.forced_origin = None;
            self.turn = mover.opponent();
            debug!("{mover:?} {from} -> {to}, {:?} to move", self.turn);
        }

        self.must_jump = rules::must_jump_for_side(&self.board, self.turn);
        self.game_over = rules::is_game_over(&self.board, self.turn);
        if self.game_over {
            info!("game over: {:?} has no legal move", self.turn);
        }

        Ok(MoveReport {
            applied_from: from,
            applied_to: to,
            promoted: outcome.promoted,
            was_jump: outcome.was_jump,
            continues_jump,
        })
    }

    /// Asks the selector for a step for the side to move. Never returns an illegal move.
    pub fn select_ai_move(&self) -> Option<(Cell, Cell)> {
        if self.game_over {
            return None;
        }
        let ctx = self.context();
        let (from, to) = self.selector.select_move(&self.board, self.turn, &ctx)?;
        if let Err(err) = rules::check_move(&self.board, from, to, self.turn, &ctx) {
            warn!("selector proposed illegal move {from} -> {to}: {err}");
            return None;
        }
        Some((from, to))
    }

    /// Plays the configured AI side until the turn passes or the game ends,
    /// including every link of a chained jump.
    pub fn play_ai_turn(&mut self) -> Vec<MoveReport> {
        let mut reports = Vec::new();
        while !self.game_over && self.config.ai_side == Some(self.turn) {
            let Some((from, to)) = self.select_ai_move() else {
                break;
            };
            match self.attempt_move(from, to) {
                Ok(report) => {
                    self.last_ai_move = Some(AiMove { from, to });
                    reports.push(report);
                }
                Err(err) => {
                    warn!("AI move {from} -> {to} rejected: {err}");
                    break;
                }
            }
        }
        reports
    }

    /// Two-click protocol: the first click selects an origin, the second tries
    /// to move there. A rejected target becomes the new selection. A click on a
    /// finished game restarts it and counts as the first click.
    pub fn click(&mut self, cell: Cell) -> ClickOutcome {
        if self.game_over {
            self.reset();
            self.play_ai_turn();
            self.selected = cell.in_bounds().then_some(cell);
            return ClickOutcome::Reset;
        }
        if !cell.in_bounds() {
            self.selected = None;
            return ClickOutcome::Ignored;
        }

        let Some(from) = self.selected else {
            self.selected = Some(cell);
            return ClickOutcome::Selected(cell);
        };

        match self.attempt_move(from, cell) {
            Ok(human) => {
                self.selected = None;
                let ai = self.play_ai_turn();
                ClickOutcome::Moved { human, ai }
            }
            Err(err) => {
                debug!("click {from} -> {cell} rejected ({err}), reselecting");
                self.selected = Some(cell);
                ClickOutcome::Selected(cell)
            }
        }
    }

    /// Cells reachable from `from` for the side to move under the current
    /// forced-jump rules.
    pub fn legal_destinations(&self, from: Cell) -> Vec<Cell> {
        rules::legal_destinations(&self.board, from, self.turn, &self.context())
    }

    pub fn to_game_state(&self) -> GameState {
        GameState {
            board: self.board.to_array().to_vec(),
            turn: self.turn,
            white_count: self.board.count(Color::White),
            red_count: self.board.count(Color::Red),
            is_game_over: self.game_over,
            must_jump: self.must_jump,
            forced_origin: self.forced_origin,
            selected: self.selected,
            last_ai_move: self.last_ai_move,
        }
    }

    pub fn to_game_result(&self) -> Option<GameResult> {
        Some(GameResult {
            winner: self.winner()?,
            white_count: self.board.count(Color::White),
            red_count: self.board.count(Color::Red),
        })
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new_with_default_selector(GameConfig::default())
    }
}
