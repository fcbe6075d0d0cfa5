//! Pawn movement: steps, double steps, diagonal captures, en passant, and the
//! ghost-pawn jump.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_unique;

/// Pseudo-legal pawn destinations.
pub fn pawn_moves(board: &Board, from: Position, pawn: Piece, ctx: &RuleContext) -> Vec<Position> {
    let mut out = Vec::with_capacity(6);
    let color = pawn.color;
    let dir = color.pawn_direction();

    if let Some(one_step) = from.offset(dir, 0) {
        if board.is_empty(one_step) {
            out.push(one_step);

            let may_double = if ctx.mode.double_step_anywhere() {
                true
            } else {
                from.row == color.pawn_start_row() && !pawn.has_moved
            };
            if may_double {
                if let Some(two_step) = from.offset(2 * dir, 0) {
                    if board.is_empty(two_step) {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    for to in pawn_attacks(from, color) {
        if board.is_enemy(to, color) {
            out.push(to);
        }
    }

    if let Some(target) = en_passant_target(board, from, color, ctx.last_move) {
        out.push(target);
    }

    if let Some(landing) = ghost_walk_target(board, from, pawn, ctx.mode) {
        push_unique(&mut out, landing);
    }

    out
}

/// Diagonal attack set. Pawns never attack straight ahead.
pub fn pawn_attacks(from: Position, color: Color) -> Vec<Position> {
    let dir = color.pawn_direction();
    [-1, 1]
        .into_iter()
        .filter_map(|d_col| from.offset(dir, d_col))
        .collect()
}

/// Square behind an enemy pawn that just advanced two rows beside `from`.
pub fn en_passant_target(
    board: &Board,
    from: Position,
    color: Color,
    last_move: Option<LastMove>,
) -> Option<Position> {
    let last = last_move?;
    if !last.is_pawn_double_step() || last.piece.color == color {
        return None;
    }
    if last.to.row != from.row || (last.to.col - from.col).abs() != 1 {
        return None;
    }
    match board.get(last.to) {
        Some(victim) if victim.kind == PieceKind::Pawn && victim.color != color => {}
        _ => return None,
    }
    let target = from.offset(color.pawn_direction(), last.to.col - from.col)?;
    board.is_empty(target).then_some(target)
}

/// One-time two-row jump over whatever stands directly ahead.
pub fn ghost_walk_target(board: &Board, from: Position, pawn: Piece, mode: GameMode) -> Option<Position> {
    if !mode.ghost_walk() || pawn.ghost_walk_used {
        return None;
    }
    let dir = pawn.color.pawn_direction();
    let middle = from.offset(dir, 0)?;
    let landing = from.offset(2 * dir, 0)?;
    (!board.is_empty(middle) && board.is_empty(landing)).then_some(landing)
}
