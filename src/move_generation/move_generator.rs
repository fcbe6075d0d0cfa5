//! Pseudo-legal move dispatch.
//!
//! Routes a square to its piece-specific generator under the active mode.
//! Generation never mutates the board.

use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::king_moves::king_moves;
use crate::moves::knight_moves::knight_moves;
use crate::moves::pawn_moves::pawn_moves;
use crate::moves::queen_moves::queen_moves;
use crate::moves::rook_moves::rook_moves;

/// Destinations allowed by the movement pattern of the piece on `from`.
/// Empty for an empty square or a stunned piece.
pub fn pseudo_legal_moves(board: &Board, from: Position, ctx: &RuleContext) -> Vec<Position> {
    let Some(piece) = board.get(from) else {
        return Vec::new();
    };
    if piece.is_stunned() {
        return Vec::new();
    }

    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, from, piece, ctx),
        PieceKind::Knight => knight_moves(board, from, piece.color, ctx.mode),
        PieceKind::Bishop => bishop_moves(board, from, piece.color, ctx.mode),
        PieceKind::Rook => rook_moves(board, from, piece.color),
        PieceKind::Queen => queen_moves(board, from, piece.color, ctx.mode),
        PieceKind::King => king_moves(board, from, piece, ctx.mode),
    }
}
