//! Core value types shared by every subsystem.
//!
//! The board is a plain 8x8 mailbox of optional pieces, so these types carry
//! per-piece flags (`has_moved`, ghost-walk usage, stun counters) directly on
//! the piece rather than in side tables.

use std::fmt;
use std::str::FromStr;

pub use crate::game_state::board::Board;
pub use crate::game_state::game_state::GameState;
pub use crate::game_state::undo_state::{MoveLog, MoveRecord};

use crate::chess_errors::ChessErrors;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single pawn step. White moves towards row 0.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row holding this side's king and rooks in the initial position.
    #[inline]
    pub const fn back_rank(self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    #[inline]
    pub const fn pawn_start_row(self) -> i8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Farthest row for this side's pawns.
    #[inline]
    pub const fn promotion_row(self) -> i8 {
        self.opposite().back_rank()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Pieces a pawn may turn into.
    #[inline]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
        )
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        };
        f.write_str(name)
    }
}

/// A piece together with the movement flags the rules need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    /// Gates castling and the classic double pawn step.
    pub has_moved: bool,
    /// One-shot flag for the ghost-pawn jump.
    pub ghost_walk_used: bool,
    /// While non-zero the piece cannot move.
    pub stunned_turns: u8,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self {
            kind,
            color,
            has_moved: false,
            ghost_walk_used: false,
            stunned_turns: 0,
        }
    }

    #[inline]
    pub const fn is_stunned(&self) -> bool {
        self.stunned_turns > 0
    }
}

/// Board coordinate. Row 0 is black's back rank, row 7 is white's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        self.row >= 0 && self.row < 8 && self.col >= 0 && self.col < 8
    }

    /// Shifted position, or `None` when it falls off the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Position> {
        let next = Position::new(self.row + d_row, self.col + d_col);
        next.is_valid().then_some(next)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            let file = char::from(b'a' + self.col as u8);
            write!(f, "{}{}", file, 8 - self.row)
        } else {
            write!(f, "({},{})", self.row, self.col)
        }
    }
}

/// Rule modifier active for a whole game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    Classic,
    /// Pawns may double-step from any rank.
    SpecialPawnPower,
    /// Each pawn may once jump over the piece directly ahead of it.
    GhostPawn,
    /// Knights gain (3,1) vaults and stun orthogonal neighbours.
    HeavyKnight,
    /// Bishops capture two squares away diagonally regardless of blockers.
    BishopSniper,
    /// Long rook captures carry the rook one square further.
    RookCharge,
}

impl GameMode {
    pub const ALL: [GameMode; 6] = [
        GameMode::Classic,
        GameMode::SpecialPawnPower,
        GameMode::GhostPawn,
        GameMode::HeavyKnight,
        GameMode::BishopSniper,
        GameMode::RookCharge,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            GameMode::Classic => "classic",
            GameMode::SpecialPawnPower => "special_pawn_power",
            GameMode::GhostPawn => "ghost_pawn",
            GameMode::HeavyKnight => "heavy_knight",
            GameMode::BishopSniper => "bishop_sniper",
            GameMode::RookCharge => "rook_charge",
        }
    }

    #[inline]
    pub const fn double_step_anywhere(self) -> bool {
        matches!(self, GameMode::SpecialPawnPower)
    }

    #[inline]
    pub const fn ghost_walk(self) -> bool {
        matches!(self, GameMode::GhostPawn)
    }

    #[inline]
    pub const fn heavy_knight(self) -> bool {
        matches!(self, GameMode::HeavyKnight)
    }

    #[inline]
    pub const fn bishop_sniper(self) -> bool {
        matches!(self, GameMode::BishopSniper)
    }

    #[inline]
    pub const fn rook_charge(self) -> bool {
        matches!(self, GameMode::RookCharge)
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Mode requested at reset: either a concrete mode or a random pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeChoice {
    Exact(GameMode),
    Random,
}

impl Default for ModeChoice {
    fn default() -> Self {
        ModeChoice::Exact(GameMode::Classic)
    }
}

impl From<GameMode> for ModeChoice {
    fn from(mode: GameMode) -> Self {
        ModeChoice::Exact(mode)
    }
}

impl FromStr for ModeChoice {
    type Err = ChessErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "random" {
            return Ok(ModeChoice::Random);
        }
        GameMode::ALL
            .into_iter()
            .find(|mode| mode.name() == s)
            .map(ModeChoice::Exact)
            .ok_or_else(|| ChessErrors::UnknownMode(s.to_owned()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Check,
    Checkmate,
    Stalemate,
    /// Never derived automatically; the half-move clock is only tracked.
    Draw,
}

impl GameStatus {
    /// Terminal states accept no further moves.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate | GameStatus::Stalemate | GameStatus::Draw
        )
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameStatus::Playing => "playing",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
            GameStatus::Draw => "draw",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastlingSide {
    Kingside,
    Queenside,
}

/// The slice of the previous move that en-passant generation needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LastMove {
    pub from: Position,
    pub to: Position,
    pub piece: Piece,
}

impl LastMove {
    /// True for any straight two-row pawn advance (classic, variant or ghost).
    #[inline]
    pub fn is_pawn_double_step(&self) -> bool {
        self.piece.kind == PieceKind::Pawn
            && self.from.col == self.to.col
            && (self.to.row - self.from.row).abs() == 2
    }
}

/// Everything move generation needs beyond the board itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleContext {
    pub mode: GameMode,
    pub last_move: Option<LastMove>,
}

impl RuleContext {
    #[inline]
    pub const fn new(mode: GameMode, last_move: Option<LastMove>) -> Self {
        Self { mode, last_move }
    }
}

/// A fully specified legal move as offered to opponent strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateMove {
    pub from: Position,
    pub to: Position,
    pub promotion: Option<PieceKind>,
    pub captured: Option<Piece>,
}
