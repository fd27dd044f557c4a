use wasm_bindgen::prelude::*;

use crate::matchup::{Matchup, Turn};
use crate::types::{Color, Position};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}

/// Browser-facing wrapper around one user-vs-computer game.
#[wasm_bindgen]
pub struct WasmSession {
    matchup: Matchup,
}

#[wasm_bindgen]
impl WasmSession {
    #[wasm_bindgen(constructor)]
    pub fn new(user_is_black: bool) -> WasmSession {
        let color = if user_is_black {
            Color::Black
        } else {
            Color::White
        };
        WasmSession {
            matchup: Matchup::new(color),
        }
    }

    /// Returns `false` for out-of-range coordinates or an illegal square.
    pub fn put_disc(&self, x: u8, y: u8) -> bool {
        Position::new(x, y).is_some_and(|pos| self.matchup.user_put(pos))
    }

    pub fn take_pass(&self) -> bool {
        self.matchup.user_pass()
    }

    /// Returns `false` if the game had already ended.
    pub fn surrender(&self) -> bool {
        self.matchup.user_surrender()
    }

    pub fn opponent_move(&self) -> bool {
        self.matchup.opponent_turn()
    }

    pub fn is_finished(&self) -> bool {
        self.matchup.is_finished()
    }

    pub fn user_moves_first(&self) -> bool {
        self.matchup.first_turn() == Turn::User
    }

    pub fn state(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.matchup.snapshot()).map_err(JsValue::from)
    }

    pub fn valid_moves(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.matchup.user_valid_moves()).map_err(JsValue::from)
    }
}
