//! Board mutation for applying and reverting validated moves.
//!
//! `execute_move` assumes the move already passed the legality filter. It
//! performs every board-level side effect (en passant, castling rook, ghost
//! flag, promotion, rook charge) and returns a `MoveRecord` from which
//! `revert_move` restores the previous board exactly.

use crate::game_state::chess_rules::{
    KINGSIDE_ROOK_COL, KINGSIDE_ROOK_TARGET_COL, QUEENSIDE_ROOK_COL, QUEENSIDE_ROOK_TARGET_COL,
    ROOK_CHARGE_MIN_DISTANCE,
};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::in_check;

pub fn execute_move(
    board: &mut Board,
    from: Position,
    to: Position,
    promotion: Option<PieceKind>,
    mode: GameMode,
    halfmove_clock: u16,
) -> Option<MoveRecord> {
    let piece = board.get(from)?;
    let prev_stuns = stun_snapshot(board);

    let mut captured = board.get(to);
    let mut en_passant = None;
    if piece.kind == PieceKind::Pawn && captured.is_none() && from.col != to.col {
        let victim_sq = Position::new(from.row, to.col);
        if let Some(victim) = board.get(victim_sq) {
            if victim.kind == PieceKind::Pawn && victim.color != piece.color {
                captured = Some(victim);
                en_passant = Some(victim_sq);
                board.set(victim_sq, None);
            }
        }
    }

    let ghost_walk = mode.ghost_walk()
        && piece.kind == PieceKind::Pawn
        && !piece.ghost_walk_used
        && (to.row - from.row).abs() == 2
        && !board.is_empty(Position::new((from.row + to.row) / 2, from.col));

    let mut castling = None;
    if piece.kind == PieceKind::King && (to.col - from.col).abs() == 2 {
        let (side, rook_col, rook_target) = if to.col > from.col {
            (CastlingSide::Kingside, KINGSIDE_ROOK_COL, KINGSIDE_ROOK_TARGET_COL)
        } else {
            (CastlingSide::Queenside, QUEENSIDE_ROOK_COL, QUEENSIDE_ROOK_TARGET_COL)
        };
        if let Some(mut rook) = board.take(Position::new(from.row, rook_col)) {
            rook.has_moved = true;
            board.set(Position::new(from.row, rook_target), Some(rook));
            castling = Some(side);
        }
    }

    let landed = match promotion {
        Some(kind) => Piece {
            has_moved: true,
            ..Piece::new(kind, piece.color)
        },
        None => Piece {
            has_moved: true,
            ghost_walk_used: piece.ghost_walk_used || ghost_walk,
            ..piece
        },
    };
    board.set(to, Some(landed));
    board.set(from, None);

    let charged_to = if mode.rook_charge() && piece.kind == PieceKind::Rook && captured.is_some() {
        charge_rook(board, from, to, piece.color, mode)
    } else {
        None
    };

    Some(MoveRecord {
        from,
        to,
        piece,
        captured,
        promotion,
        en_passant,
        castling,
        charged_to,
        ghost_walk,
        piece_had_moved: piece.has_moved,
        captured_had_moved: captured.is_some_and(|c| c.has_moved),
        prev_halfmove_clock: halfmove_clock,
        prev_stuns,
    })
}

/// Carries a rook one more empty square along its capture line when the
/// capture covered at least three squares. The extension is skipped if it
/// would leave the rook's own king attacked.
fn charge_rook(
    board: &mut Board,
    from: Position,
    to: Position,
    color: Color,
    mode: GameMode,
) -> Option<Position> {
    if from.row != to.row && from.col != to.col {
        return None;
    }
    let distance = (to.row - from.row).abs() + (to.col - from.col).abs();
    if distance < ROOK_CHARGE_MIN_DISTANCE {
        return None;
    }

    let extra = to.offset((to.row - from.row).signum(), (to.col - from.col).signum())?;
    if !board.is_empty(extra) {
        return None;
    }

    let rook = board.take(to);
    board.set(extra, rook);
    if in_check(board, color, mode) {
        let rook = board.take(extra);
        board.set(to, rook);
        return None;
    }
    Some(extra)
}

/// Restores the board to exactly how it was before `record` was executed.
pub fn revert_move(board: &mut Board, record: &MoveRecord) {
    let row = record.from.row;

    if let Some(side) = record.castling {
        let (rook_col, rook_target) = match side {
            CastlingSide::Kingside => (KINGSIDE_ROOK_COL, KINGSIDE_ROOK_TARGET_COL),
            CastlingSide::Queenside => (QUEENSIDE_ROOK_COL, QUEENSIDE_ROOK_TARGET_COL),
        };
        if let Some(mut rook) = board.take(Position::new(row, rook_target)) {
            rook.has_moved = false;
            board.set(Position::new(row, rook_col), Some(rook));
        }
    }

    if let Some(charged) = record.charged_to {
        board.set(charged, None);
    }

    board.set(
        record.from,
        Some(Piece {
            has_moved: record.piece_had_moved,
            ..record.piece
        }),
    );

    let restored_capture = record.captured.map(|captured| Piece {
        has_moved: record.captured_had_moved,
        ..captured
    });
    match record.en_passant {
        Some(victim_sq) => {
            board.set(victim_sq, restored_capture);
            board.set(record.to, None);
        }
        // Promotion or plain move: the promoted piece (if any) is already
        // replaced by the pawn on `from`, so `to` gets back its old occupant.
        None => board.set(record.to, restored_capture),
    }

    restore_stuns(board, &record.prev_stuns);
}

/// Every non-zero stun counter on the board.
pub fn stun_snapshot(board: &Board) -> Vec<(Position, u8)> {
    board
        .pieces()
        .filter(|(_, piece)| piece.is_stunned())
        .map(|(pos, piece)| (pos, piece.stunned_turns))
        .collect()
}

pub fn restore_stuns(board: &mut Board, snapshot: &[(Position, u8)]) {
    board.for_each_piece_mut(|_, piece| piece.stunned_turns = 0);
    for &(pos, turns) in snapshot {
        if let Some(piece) = board.get_mut(pos) {
            piece.stunned_turns = turns;
        }
    }
}

/// Start-of-turn recovery: `color`'s stun counters drop by one.
pub fn tick_stuns(board: &mut Board, color: Color) {
    board.for_each_piece_mut(|_, piece| {
        if piece.color == color {
            piece.stunned_turns = piece.stunned_turns.saturating_sub(1);
        }
    });
}
