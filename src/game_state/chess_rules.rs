//! Canonical rule constants.
//!
//! Static literals shared by setup, move generation and the state machine.

use crate::game_state::chess_types::{GameMode, PieceKind};

/// Back-rank layout from column 0 to column 7.
pub const BACK_RANK_ORDER: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const KING_START_COL: i8 = 4;
pub const KINGSIDE_ROOK_COL: i8 = 7;
pub const QUEENSIDE_ROOK_COL: i8 = 0;
/// Rook destination columns after castling.
pub const KINGSIDE_ROOK_TARGET_COL: i8 = 5;
pub const QUEENSIDE_ROOK_TARGET_COL: i8 = 3;

/// Modes drawn by `ModeChoice::Random` unless the full pool is enabled.
pub const LEGACY_RANDOM_POOL: [GameMode; 4] = [
    GameMode::Classic,
    GameMode::SpecialPawnPower,
    GameMode::GhostPawn,
    GameMode::HeavyKnight,
];

pub const PROMOTION_CHOICES: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Minimum straight capture distance that triggers a rook charge.
pub const ROOK_CHARGE_MIN_DISTANCE: i8 = 3;

/// Exact diagonal distance of a sniper capture.
pub const SNIPER_DISTANCE: i8 = 2;

/// Turns a heavy-knight stun lasts.
pub const HEAVY_KNIGHT_STUN_TURNS: u8 = 1;
