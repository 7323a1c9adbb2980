use wasm_bindgen::prelude::*;

pub mod ai;
pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod rules;
pub mod types;
mod wasm_api;

pub use board::Board;
pub use config::GameConfig;
pub use error::IllegalMove;
pub use game::{ClickOutcome, GameSession, MoveSelector};
pub use types::{Cell, Color, Piece};
pub use wasm_api::CheckersGame;

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}

/// Routes `log` records to the browser console.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn init_logging(verbose: bool) {
    let level = if verbose { log::Level::Debug } else { log::Level::Info };
    let _ = console_log::init_with_level(level);
}
