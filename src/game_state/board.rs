//! The 8x8 mailbox board.
//!
//! `Board` is pure data: it answers bounds and occupancy questions and lets
//! callers place or remove pieces. All rule knowledge lives elsewhere.

use std::fmt;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::BACK_RANK_ORDER;
use crate::game_state::chess_types::*;
use crate::utils::render_game_state::render_board;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Classic initial setup with black on rows 0-1 and white on rows 6-7.
    pub fn starting_position() -> Self {
        let mut board = Self::empty();
        for color in [Color::White, Color::Black] {
            for (col, kind) in BACK_RANK_ORDER.iter().enumerate() {
                board.set(
                    Position::new(color.back_rank(), col as i8),
                    Some(Piece::new(*kind, color)),
                );
            }
            for col in 0..8 {
                board.set(
                    Position::new(color.pawn_start_row(), col),
                    Some(Piece::new(PieceKind::Pawn, color)),
                );
            }
        }
        board
    }

    /// Builds a board from eight rows of text, row 0 first.
    ///
    /// Uppercase letters are white, lowercase black (`KQRBNP`), and `.` is an
    /// empty square. Whitespace inside a row is ignored. Every piece starts
    /// with all flags cleared, so callers adjust `has_moved` where it matters.
    pub fn from_ascii(rows: &[&str]) -> ChessResult<Self> {
        if rows.len() != 8 {
            return Err(ChessErrors::InvalidBoardDiagram(format!(
                "expected 8 rows, got {}",
                rows.len()
            )));
        }

        let mut board = Self::empty();
        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != 8 {
                return Err(ChessErrors::InvalidBoardDiagram(format!(
                    "row {row} has {} squares",
                    cells.len()
                )));
            }
            for (col, ch) in cells.into_iter().enumerate() {
                if ch == '.' {
                    continue;
                }
                let piece = piece_from_char(ch).ok_or_else(|| {
                    ChessErrors::InvalidBoardDiagram(format!("unknown piece '{ch}'"))
                })?;
                board.set(Position::new(row as i8, col as i8), Some(piece));
            }
        }
        Ok(board)
    }

    #[inline]
    pub fn get(&self, pos: Position) -> Option<Piece> {
        if !pos.is_valid() {
            return None;
        }
        self.squares[pos.row as usize][pos.col as usize]
    }

    #[inline]
    pub fn get_mut(&mut self, pos: Position) -> Option<&mut Piece> {
        if !pos.is_valid() {
            return None;
        }
        self.squares[pos.row as usize][pos.col as usize].as_mut()
    }

    /// Places (or clears) a square. Off-board positions are ignored.
    #[inline]
    pub fn set(&mut self, pos: Position, piece: Option<Piece>) {
        if pos.is_valid() {
            self.squares[pos.row as usize][pos.col as usize] = piece;
        }
    }

    #[inline]
    pub fn take(&mut self, pos: Position) -> Option<Piece> {
        if !pos.is_valid() {
            return None;
        }
        self.squares[pos.row as usize][pos.col as usize].take()
    }

    #[inline]
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    #[inline]
    pub fn is_own(&self, pos: Position, color: Color) -> bool {
        matches!(self.get(pos), Some(p) if p.color == color)
    }

    #[inline]
    pub fn is_enemy(&self, pos: Position, color: Color) -> bool {
        matches!(self.get(pos), Some(p) if p.color != color)
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.squares.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().filter_map(move |(col, cell)| {
                cell.map(|piece| (Position::new(row as i8, col as i8), piece))
            })
        })
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    pub fn king_square(&self, color: Color) -> Option<Position> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(pos, _)| pos)
    }

    /// Mutable access to every piece, used for stun bookkeeping.
    pub fn for_each_piece_mut(&mut self, mut f: impl FnMut(Position, &mut Piece)) {
        for (row, cells) in self.squares.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                if let Some(piece) = cell.as_mut() {
                    f(Position::new(row as i8, col as i8), piece);
                }
            }
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}

fn piece_from_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };
    Some(Piece::new(kind, color))
}
