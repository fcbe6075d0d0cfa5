//! Attack detection and the what-if king safety test.
//!
//! Attack sets are built from raw piece movement without any legality
//! filtering, which keeps `is_safe` -> `attacked` from recursing back into
//! castling generation. Stunned pieces still attack.

use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::king_moves::king_steps;
use crate::moves::knight_moves::knight_moves;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::queen_moves::queen_moves;
use crate::moves::rook_moves::rook_moves;

/// Squares `piece` on `from` could capture on, variant powers included.
pub fn attack_squares(board: &Board, from: Position, piece: Piece, mode: GameMode) -> Vec<Position> {
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(from, piece.color),
        PieceKind::Knight => knight_moves(board, from, piece.color, mode),
        PieceKind::Bishop => bishop_moves(board, from, piece.color, mode),
        PieceKind::Rook => rook_moves(board, from, piece.color),
        PieceKind::Queen => queen_moves(board, from, piece.color, mode),
        PieceKind::King => king_steps(board, from, piece.color),
    }
}

pub fn attacked(board: &Board, pos: Position, by: Color, mode: GameMode) -> bool {
    board
        .pieces_of(by)
        .any(|(from, piece)| attack_squares(board, from, piece, mode).contains(&pos))
}

/// False when `color` has no king on the board.
pub fn in_check(board: &Board, color: Color, mode: GameMode) -> bool {
    let Some(king_sq) = board.king_square(color) else {
        return false;
    };
    attacked(board, king_sq, color.opposite(), mode)
}

/// Copy the board, relocate `from` to `to`, and ask whether `color` is left
/// in check.
pub fn is_safe(board: &Board, from: Position, to: Position, color: Color, mode: GameMode) -> bool {
    is_safe_with_removal(board, from, to, None, color, mode)
}

/// Like [`is_safe`], also clearing `removed` (an en-passant victim).
pub fn is_safe_with_removal(
    board: &Board,
    from: Position,
    to: Position,
    removed: Option<Position>,
    color: Color,
    mode: GameMode,
) -> bool {
    let mut scratch = board.clone();
    let Some(piece) = scratch.take(from) else {
        return false;
    };
    if let Some(victim) = removed {
        scratch.set(victim, None);
    }
    scratch.set(to, Some(piece));
    !in_check(&scratch, color, mode)
}
