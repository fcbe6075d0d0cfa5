use crate::game_state::chess_types::*;

/// One applied move plus every pre-move fact needed to reverse it exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Position,
    pub to: Position,
    /// Mover as it stood before the move. Stays a pawn after promotion.
    pub piece: Piece,
    /// Whatever was taken, including an en-passant victim.
    pub captured: Option<Piece>,
    pub promotion: Option<PieceKind>,
    /// Square of the en-passant victim when it differs from `to`.
    pub en_passant: Option<Position>,
    pub castling: Option<CastlingSide>,
    /// Final rook square when a rook charge carried it past `to`.
    pub charged_to: Option<Position>,
    pub ghost_walk: bool,
    pub piece_had_moved: bool,
    pub captured_had_moved: bool,

    pub prev_halfmove_clock: u16,
    /// Every non-zero stun counter on the board before the move.
    pub prev_stuns: Vec<(Position, u8)>,
}

impl MoveRecord {
    /// Square the mover finally occupies.
    #[inline]
    pub fn landing(&self) -> Position {
        self.charged_to.unwrap_or(self.to)
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub fn as_last_move(&self) -> LastMove {
        LastMove {
            from: self.from,
            to: self.landing(),
            piece: self.piece,
        }
    }
}

/// Append-only history owned by the game state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveLog {
    records: Vec<MoveRecord>,
}

impl MoveLog {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, record: MoveRecord) {
        self.records.push(record);
    }

    #[inline]
    pub fn pop(&mut self) -> Option<MoveRecord> {
        self.records.pop()
    }

    #[inline]
    pub fn last(&self) -> Option<&MoveRecord> {
        self.records.last()
    }

    #[inline]
    pub fn last_mut(&mut self) -> Option<&mut MoveRecord> {
        self.records.last_mut()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[MoveRecord] {
        &self.records
    }
}
