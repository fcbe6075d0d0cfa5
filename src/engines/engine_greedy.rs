//! Default opponent policy: take something if possible, otherwise move at
//! random.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::trace;

use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::{CandidateMove, Color};
use crate::game_state::game_state::GameState;

pub struct GreedyEngine {
    rng: StdRng,
}

impl GreedyEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for GreedyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "greedy"
    }

    fn choose_move(&mut self, game_state: &GameState, color: Color) -> Option<CandidateMove> {
        let legal_moves = game_state.all_legal_moves(color);
        let captures: Vec<CandidateMove> = legal_moves
            .iter()
            .copied()
            .filter(|mv| mv.captured.is_some())
            .collect();
        trace!(
            legal = legal_moves.len(),
            captures = captures.len(),
            "greedy engine choosing"
        );

        let pool = if captures.is_empty() {
            &legal_moves
        } else {
            &captures
        };
        pool.as_slice().choose(&mut self.rng).copied()
    }
}
