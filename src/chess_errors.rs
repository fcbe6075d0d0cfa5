//! Errors returned by the rules engine.
//!
//! `ChessErrors` is the single error type across the crate. Every variant is
//! recoverable: an operation that fails has not touched the game state, so a
//! caller can report the problem and carry on.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{GameStatus, PieceKind, Position};

pub type ChessResult<T> = Result<T, ChessErrors>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// Move or selection attempted on an empty square.
    NoPieceAtSource(Position),

    /// The piece on the source square belongs to the side not on move.
    NotYourPiece(Position),

    /// Destination is not in the legality-filtered move set.
    IllegalMove { from: Position, to: Position },

    /// A pawn is waiting on the given square for a promotion choice.
    PromotionRequired(Position),

    /// `promote` was called with no promotion pending.
    NoPromotionPending,

    /// Kings and pawns are not promotion targets.
    InvalidPromotionPiece(PieceKind),

    /// `undo` was called on an empty history.
    EmptyHistory,

    /// The game has reached a terminal status.
    GameOver(GameStatus),

    /// A board diagram could not be read.
    InvalidBoardDiagram(String),

    /// A mode name did not match any known mode.
    UnknownMode(String),
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::NoPieceAtSource(pos) => write!(f, "no piece at {pos}"),
            ChessErrors::NotYourPiece(pos) => {
                write!(f, "piece at {pos} belongs to the side not on move")
            }
            ChessErrors::IllegalMove { from, to } => write!(f, "illegal move {from} -> {to}"),
            ChessErrors::PromotionRequired(pos) => {
                write!(f, "pawn on {pos} is waiting for a promotion choice")
            }
            ChessErrors::NoPromotionPending => write!(f, "no promotion is pending"),
            ChessErrors::InvalidPromotionPiece(kind) => {
                write!(f, "cannot promote to {kind}")
            }
            ChessErrors::EmptyHistory => write!(f, "nothing to undo"),
            ChessErrors::GameOver(status) => write!(f, "game is over ({status})"),
            ChessErrors::InvalidBoardDiagram(msg) => write!(f, "invalid board diagram: {msg}"),
            ChessErrors::UnknownMode(name) => write!(f, "unknown game mode '{name}'"),
        }
    }
}

impl Error for ChessErrors {}
