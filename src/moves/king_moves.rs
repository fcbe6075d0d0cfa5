use crate::game_state::chess_rules::{KINGSIDE_ROOK_COL, KING_START_COL, QUEENSIDE_ROOK_COL};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::{in_check, is_safe};
use crate::move_generation::legal_move_shared::jump_targets;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Adjacent steps only. This is also the king's attack set.
pub fn king_steps(board: &Board, from: Position, color: Color) -> Vec<Position> {
    let mut out = Vec::with_capacity(8);
    jump_targets(board, from, color, &KING_OFFSETS, &mut out);
    out
}

pub fn king_moves(board: &Board, from: Position, king: Piece, mode: GameMode) -> Vec<Position> {
    let mut out = king_steps(board, from, king.color);
    generate_castling_moves(board, from, king, mode, &mut out);
    out
}

fn generate_castling_moves(
    board: &Board,
    from: Position,
    king: Piece,
    mode: GameMode,
    out: &mut Vec<Position>,
) {
    let color = king.color;
    let home = Position::new(color.back_rank(), KING_START_COL);
    if king.has_moved || from != home {
        return;
    }

    // Cannot castle out of check.
    if in_check(board, color, mode) {
        return;
    }

    for side in [CastlingSide::Kingside, CastlingSide::Queenside] {
        if let Some(to) = castling_target(board, from, color, side, mode) {
            out.push(to);
        }
    }
}

fn castling_target(
    board: &Board,
    from: Position,
    color: Color,
    side: CastlingSide,
    mode: GameMode,
) -> Option<Position> {
    let (rook_col, step) = match side {
        CastlingSide::Kingside => (KINGSIDE_ROOK_COL, 1),
        CastlingSide::Queenside => (QUEENSIDE_ROOK_COL, -1),
    };

    match board.get(Position::new(from.row, rook_col)) {
        Some(rook) if rook.kind == PieceKind::Rook && rook.color == color && !rook.has_moved => {}
        _ => return None,
    }

    let (low, high) = if rook_col > from.col {
        (from.col + 1, rook_col)
    } else {
        (rook_col + 1, from.col)
    };
    if (low..high).any(|col| !board.is_empty(Position::new(from.row, col))) {
        return None;
    }

    // Each square the king crosses, and the one it lands on, is tested on its own.
    let transit = Position::new(from.row, from.col + step);
    let landing = Position::new(from.row, from.col + 2 * step);
    if !is_safe(board, from, transit, color, mode) || !is_safe(board, from, landing, color, mode) {
        return None;
    }

    Some(landing)
}
