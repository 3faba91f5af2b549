use serde::{Deserialize, Serialize};

use crate::types::Side;

/// Game setup accepted from the host; missing fields take defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub first_side: Side,
    /// Side played by the move selector, `None` for two humans.
    pub automated_side: Option<Side>,
    /// Seeds the default random selector; `None` draws from the thread RNG.
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn two_player() -> Self {
        Self {
            automated_side: None,
            ..Self::default()
        }
    }

    /// A human plays against the selector, which controls `side`.
    pub fn against(side: Side) -> Self {
        Self {
            automated_side: Some(side),
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_side: Side::Light,
            automated_side: Some(Side::Dark),
            seed: None,
        }
    }
}
