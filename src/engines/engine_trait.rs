//! Opponent strategy abstraction.
//!
//! The game session asks an `Engine` for a move only when it is the engine's
//! side to move, no promotion is pending and the game is not over. Any
//! strategy that picks from `GameState::all_legal_moves` fits behind it.

use crate::game_state::chess_types::{CandidateMove, Color};
use crate::game_state::game_state::GameState;

pub trait Engine: Send {
    fn name(&self) -> &str;

    /// Called after a reset so stateful strategies can clear caches.
    fn new_game(&mut self) {}

    /// One legal move for `color`, or `None` when it has none.
    fn choose_move(&mut self, game_state: &GameState, color: Color) -> Option<CandidateMove>;
}
