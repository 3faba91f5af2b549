//! Browser-facing wrapper. Values cross the boundary as plain JS objects.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::GameConfig;
use crate::error::CheckersError;
use crate::game::Game;
use crate::types::{Position, Side};

#[wasm_bindgen]
pub struct CheckersEngine {
    game: Game,
}

#[wasm_bindgen]
impl CheckersEngine {
    /// `config` may be `undefined` or any subset of `GameConfig` fields.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<CheckersEngine, JsValue> {
        let config = if config.is_undefined() || config.is_null() {
            GameConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        Ok(Self {
            game: Game::new_with_default_selector(config),
        })
    }

    #[wasm_bindgen(js_name = newGame)]
    pub fn new_game(&mut self) {
        self.game.new_game();
    }

    pub fn state(&self) -> Result<JsValue, JsValue> {
        to_js(&self.game.view())
    }

    #[wasm_bindgen(js_name = legalMoves)]
    pub fn legal_moves(&self, row: u8, col: u8) -> Result<JsValue, JsValue> {
        to_js(&self.game.legal_moves(Position::new(row, col)))
    }

    /// `side` is `"light"`, `"dark"`, or absent for the side to move.
    #[wasm_bindgen(js_name = mandatoryJumps)]
    pub fn mandatory_jumps(&self, side: JsValue) -> Result<JsValue, JsValue> {
        let side: Option<Side> = serde_wasm_bindgen::from_value(side)?;
        let side = side.unwrap_or_else(|| self.game.active_side());
        to_js(&self.game.mandatory_jumps(side))
    }

    pub fn select(&mut self, row: u8, col: u8) -> Result<JsValue, JsValue> {
        let selection = self
            .game
            .select(Position::new(row, col))
            .map_err(to_js_error)?;
        to_js(&selection)
    }

    #[wasm_bindgen(js_name = chooseDestination)]
    pub fn choose_destination(&mut self, row: u8, col: u8) -> Result<JsValue, JsValue> {
        let result = self
            .game
            .choose_destination(Position::new(row, col))
            .map_err(to_js_error)?;
        to_js(&result)
    }

    pub fn click(&mut self, row: u8, col: u8) -> Result<JsValue, JsValue> {
        let result = self
            .game
            .click(Position::new(row, col))
            .map_err(to_js_error)?;
        to_js(&result)
    }

    pub fn undo(&mut self) -> Result<(), JsValue> {
        self.game.undo().map_err(to_js_error)
    }

    pub fn redo(&mut self) -> Result<(), JsValue> {
        self.game.redo().map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = isAutomatedTurn)]
    pub fn is_automated_turn(&self) -> bool {
        self.game.is_automated_turn()
    }

    /// Plays one segment for the automated side; the host adds any delay.
    #[wasm_bindgen(js_name = automatedStep)]
    pub fn automated_step(&mut self) -> Result<JsValue, JsValue> {
        let result = self.game.play_automated_step().map_err(to_js_error)?;
        to_js(&result)
    }

    /// Accepts `"light"`, `"dark"`, or `null` for two human players.
    #[wasm_bindgen(js_name = setAutomatedSide)]
    pub fn set_automated_side(&mut self, side: JsValue) -> Result<(), JsValue> {
        let side: Option<Side> = serde_wasm_bindgen::from_value(side)?;
        self.game.set_automated_side(side);
        Ok(())
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(JsValue::from)
}

fn to_js_error(err: CheckersError) -> JsValue {
    JsError::new(&err.to_string()).into()
}
