use serde::Deserialize;

use crate::types::Color;

/// Session settings supplied by the embedding UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    /// Side played by the computer. `None` leaves both sides to human clicks.
    pub ai_side: Option<Color>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            ai_side: Some(Color::Red),
        }
    }
}

impl GameConfig {
    pub fn two_player() -> Self {
        Self { ai_side: None }
    }
}
