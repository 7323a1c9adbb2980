use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::GameConfig;
use crate::game::GameSession;
use crate::types::Cell;

/// Browser-facing handle owning one game session.
#[wasm_bindgen]
pub struct CheckersGame {
    session: GameSession,
}

#[wasm_bindgen]
impl CheckersGame {
    /// `config` is `{ aiSide: "Red" | "White" | null }` or `undefined` for defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<CheckersGame, JsValue> {
        let config: GameConfig = if config.is_undefined() || config.is_null() {
            GameConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config).map_err(|e| JsValue::from_str(&e.to_string()))?
        };
        let mut session = GameSession::new_with_default_selector(config);
        session.play_ai_turn();
        Ok(Self { session })
    }

    #[wasm_bindgen(js_name = getState)]
    pub fn state(&self) -> Result<JsValue, JsValue> {
        to_js(&self.session.to_game_state())
    }

    /// Feeds one board click and returns the resulting state.
    pub fn click(&mut self, row: i32, col: i32) -> Result<JsValue, JsValue> {
        self.session.click(cell(row, col));
        self.state()
    }

    #[wasm_bindgen(js_name = attemptMove)]
    pub fn attempt_move(
        &mut self,
        from_row: i32,
        from_col: i32,
        to_row: i32,
        to_col: i32,
    ) -> Result<JsValue, JsValue> {
        let report = self
            .session
            .attempt_move(cell(from_row, from_col), cell(to_row, to_col))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        to_js(&report)
    }

    /// Plays the AI side's full turn, if it is to move. Returns the step reports.
    #[wasm_bindgen(js_name = aiMove)]
    pub fn ai_move(&mut self) -> Result<JsValue, JsValue> {
        to_js(&self.session.play_ai_turn())
    }

    #[wasm_bindgen(js_name = legalDestinations)]
    pub fn legal_destinations(&self, row: i32, col: i32) -> Result<JsValue, JsValue> {
        to_js(&self.session.legal_destinations(cell(row, col)))
    }

    #[wasm_bindgen(js_name = isOver)]
    pub fn is_over(&self) -> bool {
        self.session.is_over()
    }

    /// `undefined` while the game is running.
    #[wasm_bindgen(js_name = getResult)]
    pub fn result(&self) -> Result<JsValue, JsValue> {
        to_js(&self.session.to_game_result())
    }

    pub fn reset(&mut self) {
        self.session.reset();
        self.session.play_ai_turn();
    }
}

fn cell(row: i32, col: i32) -> Cell {
    Cell::new(
        i8::try_from(row).unwrap_or(-1),
        i8::try_from(col).unwrap_or(-1),
    )
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn js_coordinates_outside_i8_map_off_board() {
        assert!(!cell(300, 2).in_bounds());
        assert!(!cell(2, -500).in_bounds());
        assert_eq!(cell(5, 2), Cell::new(5, 2));
    }
}
