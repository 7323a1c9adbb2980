//! Tests of the JS boundary.
//!
//! Run with: wasm-pack test --node

#![cfg(target_arch = "wasm32")]

use checkers::CheckersGame;
use js_sys::{Array, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

fn field(value: &JsValue, name: &str) -> JsValue {
    Reflect::get(value, &JsValue::from_str(name)).expect("field should exist")
}

fn two_player_config() -> JsValue {
    let config = js_sys::Object::new();
    Reflect::set(&config, &JsValue::from_str("aiSide"), &JsValue::NULL).unwrap();
    config.into()
}

#[wasm_bindgen_test]
fn default_game_starts_with_white_to_move() {
    let game = CheckersGame::new(JsValue::UNDEFINED).unwrap();
    let state = game.state().unwrap();

    assert_eq!(field(&state, "turn").as_string().as_deref(), Some("White"));
    assert_eq!(field(&state, "white_count").as_f64(), Some(12.0));
    assert_eq!(Array::from(&field(&state, "board")).length(), 64);
    assert!(!game.is_over());
    assert!(game.result().unwrap().is_undefined());
}

#[wasm_bindgen_test]
fn clicks_play_a_move_and_the_ai_answers() {
    let mut game = CheckersGame::new(JsValue::UNDEFINED).unwrap();

    game.click(5, 2).unwrap();
    let state = game.click(4, 1).unwrap();

    assert_eq!(field(&state, "turn").as_string().as_deref(), Some("White"));
    assert!(!field(&state, "last_ai_move").is_undefined());
}

#[wasm_bindgen_test]
fn illegal_move_reports_reason() {
    let mut game = CheckersGame::new(two_player_config()).unwrap();

    let err = game.attempt_move(5, 2, 3, 2).unwrap_err();

    assert_eq!(err.as_string().as_deref(), Some("this piece cannot move that way"));
}

#[wasm_bindgen_test]
fn two_player_game_does_not_auto_move() {
    let mut game = CheckersGame::new(two_player_config()).unwrap();

    game.attempt_move(5, 2, 4, 1).unwrap();
    let steps = game.ai_move().unwrap();
    let state = game.state().unwrap();

    assert_eq!(Array::from(&steps).length(), 0);
    assert_eq!(field(&state, "turn").as_string().as_deref(), Some("Red"));
    assert_eq!(Array::from(&game.legal_destinations(2, 1).unwrap()).length(), 2);
}
