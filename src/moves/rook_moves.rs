use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{slide_targets, ORTHOGONAL_DIRECTIONS};

/// Orthogonal slides. The rook charge is a side effect of applying a capture,
/// not an extra destination, so it never shows up here.
pub fn rook_moves(board: &Board, from: Position, color: Color) -> Vec<Position> {
    let mut out = Vec::with_capacity(14);
    slide_targets(board, from, color, &ORTHOGONAL_DIRECTIONS, &mut out);
    out
}
