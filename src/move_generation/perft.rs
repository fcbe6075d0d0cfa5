//! Perft: exhaustive legal move tree counting.
//!
//! Walks the tree with `apply_move`/`undo` on a single `GameState`, so it
//! validates generation, application and reversal together. Promotions are
//! expanded to every promotion choice.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_rules::PROMOTION_CHOICES;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft(game_state: &mut GameState, depth: u8) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for (from, to, promotion) in expanded_moves(game_state) {
        game_state.apply_move(from, to, promotion)?;
        if depth == 1 {
            total.merge(leaf_counts(game_state));
        } else {
            total.merge(perft(game_state, depth - 1)?);
        }
        game_state.undo()?;
    }

    Ok(total)
}

/// Per-root-move node counts, the usual aid for bisecting a perft mismatch.
pub fn perft_divide(
    game_state: &mut GameState,
    depth: u8,
) -> ChessResult<Vec<(Position, Position, Option<PieceKind>, usize)>> {
    let mut out = Vec::new();
    if depth == 0 {
        return Ok(out);
    }
    for (from, to, promotion) in expanded_moves(game_state) {
        game_state.apply_move(from, to, promotion)?;
        let nodes = perft(game_state, depth - 1)?.nodes;
        game_state.undo()?;
        out.push((from, to, promotion, nodes));
    }
    Ok(out)
}

fn expanded_moves(game_state: &GameState) -> Vec<(Position, Position, Option<PieceKind>)> {
    let side = game_state.side_to_move();
    let mut out = Vec::new();
    for candidate in game_state.all_legal_moves(side) {
        match candidate.promotion {
            Some(_) => out.extend(
                PROMOTION_CHOICES
                    .iter()
                    .map(|&kind| (candidate.from, candidate.to, Some(kind))),
            ),
            None => out.push((candidate.from, candidate.to, None)),
        }
    }
    out
}

fn leaf_counts(game_state: &GameState) -> PerftCounts {
    let mut counts = PerftCounts {
        nodes: 1,
        ..PerftCounts::default()
    };
    if let Some(record) = game_state.history().last() {
        counts.captures = usize::from(record.is_capture());
        counts.en_passant = usize::from(record.en_passant.is_some());
        counts.castles = usize::from(record.castling.is_some());
        counts.promotions = usize::from(record.promotion.is_some());
    }
    match game_state.status() {
        GameStatus::Check => counts.checks = 1,
        GameStatus::Checkmate => {
            counts.checks = 1;
            counts.checkmates = 1;
        }
        _ => {}
    }
    counts
}
