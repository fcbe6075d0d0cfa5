//! Per-game configuration.

use std::time::Duration;

use crate::game_state::chess_types::{Color, ModeChoice};

pub const DEFAULT_OPPONENT_DELAY: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Mode used by `GameState::new` and by `reset(None)`.
    pub mode: ModeChoice,
    /// Seed for mode randomization. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Let `ModeChoice::Random` pick from all six modes instead of the
    /// four legacy ones.
    pub full_random_pool: bool,
    /// Side played by the opponent strategy, if any.
    pub opponent: Option<Color>,
    pub opponent_delay: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: ModeChoice::default(),
            seed: None,
            full_random_pool: false,
            opponent: Some(Color::Black),
            opponent_delay: DEFAULT_OPPONENT_DELAY,
        }
    }
}

impl GameConfig {
    pub fn with_mode(mut self, mode: impl Into<ModeChoice>) -> Self {
        self.mode = mode.into();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_full_random_pool(mut self, enabled: bool) -> Self {
        self.full_random_pool = enabled;
        self
    }

    pub fn with_opponent(mut self, opponent: Option<Color>) -> Self {
        self.opponent = opponent;
        self
    }

    pub fn with_opponent_delay(mut self, delay: Duration) -> Self {
        self.opponent_delay = delay;
        self
    }
}
