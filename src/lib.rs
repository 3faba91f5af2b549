use wasm_bindgen::prelude::*;

pub mod ai;
pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod history;
pub mod movegen;
pub mod rules;
pub mod types;
pub mod wasm_api;

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
