//! Full legal move generation pipeline.
//!
//! Takes piece-wise pseudo-legal destinations, drops every candidate that
//! leaves the mover's king attacked, and classifies the side to move.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::{in_check, is_safe_with_removal};
use crate::move_generation::move_generator::pseudo_legal_moves;
use crate::moves::pawn_moves::en_passant_target;

/// Legal destinations for the piece on `from`.
pub fn legal_moves_from(board: &Board, from: Position, ctx: &RuleContext) -> Vec<Position> {
    let Some(piece) = board.get(from) else {
        return Vec::new();
    };
    let ep_target = if piece.kind == PieceKind::Pawn {
        en_passant_target(board, from, piece.color, ctx.last_move)
    } else {
        None
    };

    pseudo_legal_moves(board, from, ctx)
        .into_iter()
        .filter(|&to| {
            // The en-passant victim leaves the board too, which can open a line.
            let removed = if Some(to) == ep_target {
                ctx.last_move.map(|last| last.to)
            } else {
                None
            };
            is_safe_with_removal(board, from, to, removed, piece.color, ctx.mode)
        })
        .collect()
}

pub fn has_any_legal_move(board: &Board, color: Color, ctx: &RuleContext) -> bool {
    board
        .pieces_of(color)
        .any(|(from, _)| !legal_moves_from(board, from, ctx).is_empty())
}

/// Every legal move for `color`. Promotions are offered once, as a queen.
pub fn all_legal_moves(board: &Board, color: Color, ctx: &RuleContext) -> Vec<CandidateMove> {
    let mut out = Vec::with_capacity(48);
    for (from, piece) in board.pieces_of(color) {
        let ep_target = if piece.kind == PieceKind::Pawn {
            en_passant_target(board, from, color, ctx.last_move)
        } else {
            None
        };
        for to in legal_moves_from(board, from, ctx) {
            let captured = if Some(to) == ep_target {
                ctx.last_move.and_then(|last| board.get(last.to))
            } else {
                board.get(to)
            };
            let promotion = (piece.kind == PieceKind::Pawn && to.row == color.promotion_row())
                .then_some(PieceKind::Queen);
            out.push(CandidateMove {
                from,
                to,
                promotion,
                captured,
            });
        }
    }
    out
}

/// Playing / check / checkmate / stalemate for `color`. Never yields `Draw`.
pub fn classify_status(board: &Board, color: Color, ctx: &RuleContext) -> GameStatus {
    let checked = in_check(board, color, ctx.mode);
    let can_move = has_any_legal_move(board, color, ctx);
    match (checked, can_move) {
        (true, false) => GameStatus::Checkmate,
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check,
        (false, true) => GameStatus::Playing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic() -> RuleContext {
        RuleContext::new(GameMode::Classic, None)
    }

    #[test]
    fn startpos_has_twenty_moves() {
        let board = Board::starting_position();
        assert_eq!(all_legal_moves(&board, Color::White, &classic()).len(), 20);
        assert_eq!(all_legal_moves(&board, Color::Black, &classic()).len(), 20);
    }

    #[test]
    fn back_rank_mate_is_checkmate() {
        let board = Board::from_ascii(&[
            "R.....k.", ".....ppp", "........", "........", "........", "........", "........",
            "....K...",
        ])
        .expect("diagram should parse");
        assert_eq!(
            classify_status(&board, Color::Black, &classic()),
            GameStatus::Checkmate
        );
    }

    #[test]
    fn cornered_king_without_moves_is_stalemate() {
        let board = Board::from_ascii(&[
            "k.......", "..Q.....", ".K......", "........", "........", "........", "........",
            "........",
        ])
        .expect("diagram should parse");
        assert_eq!(
            classify_status(&board, Color::Black, &classic()),
            GameStatus::Stalemate
        );
    }

    #[test]
    fn en_passant_that_exposes_the_king_is_filtered() {
        let board = Board::from_ascii(&[
            "........", "........", "........", "K..pP..r", "........", "........", "........",
            "......k.",
        ])
        .expect("diagram should parse");
        let black_pawn = board.get(Position::new(3, 3)).expect("black pawn on d5");
        let ctx = RuleContext::new(
            GameMode::Classic,
            Some(LastMove {
                from: Position::new(1, 3),
                to: Position::new(3, 3),
                piece: black_pawn,
            }),
        );
        let moves = legal_moves_from(&board, Position::new(3, 4), &ctx);
        assert!(!moves.contains(&Position::new(2, 3)));
        assert!(moves.contains(&Position::new(2, 4)));
    }

    #[test]
    fn en_passant_candidate_reports_the_victim() {
        let board = Board::from_ascii(&[
            "....k...", "........", "........", "...pP...", "........", "........", "........",
            "....K...",
        ])
        .expect("diagram should parse");
        let black_pawn = board.get(Position::new(3, 3)).expect("black pawn on d5");
        let ctx = RuleContext::new(
            GameMode::Classic,
            Some(LastMove {
                from: Position::new(1, 3),
                to: Position::new(3, 3),
                piece: black_pawn,
            }),
        );
        let ep = all_legal_moves(&board, Color::White, &ctx)
            .into_iter()
            .find(|m| m.to == Position::new(2, 3))
            .expect("en passant should be offered");
        assert_eq!(ep.captured.map(|p| p.kind), Some(PieceKind::Pawn));
    }
}
