//! Bishop movement, including the sniper capture.

use crate::game_state::chess_rules::SNIPER_DISTANCE;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{push_unique, slide_targets, DIAGONAL_DIRECTIONS};

pub fn bishop_moves(board: &Board, from: Position, color: Color, mode: GameMode) -> Vec<Position> {
    let mut out = Vec::with_capacity(13);
    slide_targets(board, from, color, &DIAGONAL_DIRECTIONS, &mut out);
    if mode.bishop_sniper() {
        for target in sniper_targets(board, from, color) {
            push_unique(&mut out, target);
        }
    }
    out
}

/// Capture-only targets exactly two squares away diagonally, ignoring
/// whatever stands in between.
pub fn sniper_targets(board: &Board, from: Position, color: Color) -> Vec<Position> {
    DIAGONAL_DIRECTIONS
        .iter()
        .filter_map(|&(d_row, d_col)| from.offset(d_row * SNIPER_DISTANCE, d_col * SNIPER_DISTANCE))
        .filter(|&pos| board.is_enemy(pos, color))
        .collect()
}
