use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::jump_targets;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Extended (3,1) vaults available under heavy knight.
pub const KNIGHT_VAULT_OFFSETS: [(i8, i8); 8] = [
    (-3, -1),
    (-3, 1),
    (3, -1),
    (3, 1),
    (-1, -3),
    (1, -3),
    (-1, 3),
    (1, 3),
];

/// Squares a heavy knight stuns around its landing square.
pub const STUN_OFFSETS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub fn knight_moves(board: &Board, from: Position, color: Color, mode: GameMode) -> Vec<Position> {
    let mut out = Vec::with_capacity(16);
    jump_targets(board, from, color, &KNIGHT_OFFSETS, &mut out);
    if mode.heavy_knight() {
        jump_targets(board, from, color, &KNIGHT_VAULT_OFFSETS, &mut out);
    }
    out
}

/// Enemy pieces orthogonally adjacent to `landing`.
pub fn stun_targets(board: &Board, landing: Position, color: Color) -> Vec<Position> {
    STUN_OFFSETS
        .iter()
        .filter_map(|&(d_row, d_col)| landing.offset(d_row, d_col))
        .filter(|&pos| board.is_enemy(pos, color))
        .collect()
}
