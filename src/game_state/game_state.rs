//! Authoritative game state and its transitions.
//!
//! `GameState` owns the board, side to move, pending promotion, move history,
//! capture lists and half-move clock. It is only mutated through
//! `apply_move`, `promote`, `undo` and `reset`; each of them validates fully
//! before touching anything, so a rejected call leaves the state unchanged.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::{HEAVY_KNIGHT_STUN_TURNS, LEGACY_RANDOM_POOL};
use crate::game_state::chess_types::*;
use crate::game_state::game_config::GameConfig;
use crate::move_generation::legal_move_apply::{execute_move, revert_move, tick_stuns};
use crate::move_generation::legal_move_generator::{
    all_legal_moves, classify_status, legal_moves_from,
};
use crate::moves::knight_moves::stun_targets;

/// Result of a successful `apply_move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The turn passed; carries the status of the new side to move.
    Completed(GameStatus),
    /// A pawn reached the last rank without a promotion choice. The turn has
    /// not passed and `promote` must be called next.
    PromotionPending(Position),
}

#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    side_to_move: Color,
    status: GameStatus,
    pending_promotion: Option<Position>,
    history: MoveLog,
    /// Indexed by the color of the captured piece.
    captured: [Vec<Piece>; 2],
    halfmove_clock: u16,
    mode: GameMode,
    config: GameConfig,
    rng: StdRng,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl GameState {
    /// Fresh game in the starting position. A random mode choice is resolved
    /// here, once, with the configured RNG.
    pub fn new(config: GameConfig) -> Self {
        let mut rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let mode = resolve_mode(config.mode, config.full_random_pool, &mut rng);
        Self {
            board: Board::starting_position(),
            side_to_move: Color::White,
            status: GameStatus::Playing,
            pending_promotion: None,
            history: MoveLog::new(),
            captured: [Vec::new(), Vec::new()],
            halfmove_clock: 0,
            mode,
            config,
            rng,
        }
    }

    /// Game starting from an arbitrary board, with an empty history.
    pub fn from_position(board: Board, side_to_move: Color, mode: GameMode) -> Self {
        let mut state = Self::new(GameConfig::default().with_mode(mode).with_seed(0));
        state.board = board;
        state.side_to_move = side_to_move;
        state.status = state.evaluate_status();
        state
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn pending_promotion(&self) -> Option<Position> {
        self.pending_promotion
    }

    #[inline]
    pub fn history(&self) -> &MoveLog {
        &self.history
    }

    /// The most recent move, as seen by en-passant generation.
    #[inline]
    pub fn last_move(&self) -> Option<LastMove> {
        self.history.last().map(MoveRecord::as_last_move)
    }

    /// Pieces of `color` that have been captured, oldest first.
    #[inline]
    pub fn captured_pieces(&self, color: Color) -> &[Piece] {
        &self.captured[color.index()]
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn rule_context(&self) -> RuleContext {
        RuleContext::new(self.mode, self.last_move())
    }

    /// Legal destinations for the piece on `pos`. Empty when the square is
    /// empty, holds the opponent's piece, holds a stunned piece, or a
    /// promotion is pending.
    pub fn legal_moves_from(&self, pos: Position) -> Vec<Position> {
        if self.pending_promotion.is_some() || !self.board.is_own(pos, self.side_to_move) {
            return Vec::new();
        }
        legal_moves_from(&self.board, pos, &self.rule_context())
    }

    /// Every legal move for `color`, promotions offered as a queen.
    pub fn all_legal_moves(&self, color: Color) -> Vec<CandidateMove> {
        if self.pending_promotion.is_some() {
            return Vec::new();
        }
        all_legal_moves(&self.board, color, &self.rule_context())
    }

    pub fn apply_move(
        &mut self,
        from: Position,
        to: Position,
        promotion: Option<PieceKind>,
    ) -> ChessResult<MoveOutcome> {
        if let Some(square) = self.pending_promotion {
            return Err(ChessErrors::PromotionRequired(square));
        }
        if self.status.is_terminal() {
            return Err(ChessErrors::GameOver(self.status));
        }
        let piece = self
            .board
            .get(from)
            .ok_or(ChessErrors::NoPieceAtSource(from))?;
        if piece.color != self.side_to_move {
            return Err(ChessErrors::NotYourPiece(from));
        }
        if !self.legal_moves_from(from).contains(&to) {
            return Err(ChessErrors::IllegalMove { from, to });
        }

        let reaches_last_rank =
            piece.kind == PieceKind::Pawn && to.row == piece.color.promotion_row();
        // A promotion choice on any other move is ignored.
        let promotion = promotion.filter(|_| reaches_last_rank);
        if let Some(kind) = promotion {
            if !kind.is_promotion_target() {
                return Err(ChessErrors::InvalidPromotionPiece(kind));
            }
        }

        let record = execute_move(
            &mut self.board,
            from,
            to,
            promotion,
            self.mode,
            self.halfmove_clock,
        )
        .ok_or(ChessErrors::NoPieceAtSource(from))?;

        let stunned = if self.mode.heavy_knight() && piece.kind == PieceKind::Knight {
            stun_targets(&self.board, record.landing(), piece.color)
        } else {
            Vec::new()
        };

        if let Some(captured) = record.captured {
            self.captured[captured.color.index()].push(captured);
        }
        self.halfmove_clock = if piece.kind == PieceKind::Pawn || record.is_capture() {
            0
        } else {
            self.halfmove_clock.saturating_add(1)
        };

        debug!(
            from = %from,
            to = %record.landing(),
            piece = %piece.kind,
            captured = ?record.captured.map(|p| p.kind),
            mode = %self.mode,
            "move applied"
        );
        self.history.push(record);

        if reaches_last_rank && promotion.is_none() {
            self.pending_promotion = Some(to);
            debug!(square = %to, "promotion pending");
            return Ok(MoveOutcome::PromotionPending(to));
        }

        Ok(MoveOutcome::Completed(self.complete_turn(&stunned)))
    }

    /// Resolves a pending promotion and passes the turn.
    pub fn promote(&mut self, kind: PieceKind) -> ChessResult<GameStatus> {
        let square = self
            .pending_promotion
            .ok_or(ChessErrors::NoPromotionPending)?;
        if !kind.is_promotion_target() {
            return Err(ChessErrors::InvalidPromotionPiece(kind));
        }

        self.board.set(
            square,
            Some(Piece {
                has_moved: true,
                ..Piece::new(kind, self.side_to_move)
            }),
        );
        if let Some(record) = self.history.last_mut() {
            record.promotion = Some(kind);
        }
        self.pending_promotion = None;
        debug!(square = %square, piece = %kind, "promoted");

        Ok(self.complete_turn(&[]))
    }

    /// Reverses the most recent move exactly.
    pub fn undo(&mut self) -> ChessResult<MoveRecord> {
        let record = self.history.pop().ok_or(ChessErrors::EmptyHistory)?;

        revert_move(&mut self.board, &record);
        if record.captured.is_some() {
            let color = record.piece.color.opposite();
            self.captured[color.index()].pop();
        }
        // A move still awaiting promotion never passed the turn.
        if self.pending_promotion.take().is_none() {
            self.side_to_move = self.side_to_move.opposite();
        }
        self.halfmove_clock = record.prev_halfmove_clock;
        self.status = self.evaluate_status();

        debug!(
            from = %record.from,
            to = %record.to,
            piece = %record.piece.kind,
            status = %self.status,
            "move undone"
        );
        Ok(record)
    }

    /// Starts a new game. `None` reuses the configured mode choice.
    pub fn reset(&mut self, choice: Option<ModeChoice>) {
        let choice = choice.unwrap_or(self.config.mode);
        self.mode = resolve_mode(choice, self.config.full_random_pool, &mut self.rng);
        self.board = Board::starting_position();
        self.side_to_move = Color::White;
        self.status = GameStatus::Playing;
        self.pending_promotion = None;
        self.history = MoveLog::new();
        self.captured = [Vec::new(), Vec::new()];
        self.halfmove_clock = 0;
        info!(mode = %self.mode, "game reset");
    }

    /// Tail shared by `apply_move` and `promote`: pass the turn, let the new
    /// side recover from old stuns, place fresh stuns, re-evaluate.
    fn complete_turn(&mut self, stunned: &[Position]) -> GameStatus {
        self.side_to_move = self.side_to_move.opposite();
        tick_stuns(&mut self.board, self.side_to_move);
        for &pos in stunned {
            if let Some(piece) = self.board.get_mut(pos) {
                piece.stunned_turns = HEAVY_KNIGHT_STUN_TURNS;
            }
        }

        self.status = self.evaluate_status();
        if self.status.is_terminal() {
            info!(status = %self.status, side = %self.side_to_move, "game over");
        }
        self.status
    }

    fn evaluate_status(&self) -> GameStatus {
        classify_status(&self.board, self.side_to_move, &self.rule_context())
    }
}

fn resolve_mode(choice: ModeChoice, full_pool: bool, rng: &mut StdRng) -> GameMode {
    match choice {
        ModeChoice::Exact(mode) => mode,
        ModeChoice::Random => {
            let pool: &[GameMode] = if full_pool {
                &GameMode::ALL
            } else {
                &LEGACY_RANDOM_POOL
            };
            pool.choose(rng).copied().unwrap_or(GameMode::Classic)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Position {
        let bytes = name.as_bytes();
        Position::new(8 - (bytes[1] - b'0') as i8, (bytes[0] - b'a') as i8)
    }

    fn classic() -> GameState {
        GameState::new(GameConfig::default().with_seed(1))
    }

    #[test]
    fn pawn_push_passes_the_turn() {
        let mut game = classic();
        let outcome = game
            .apply_move(sq("e2"), sq("e4"), None)
            .expect("e2-e4 should be legal");
        assert_eq!(outcome, MoveOutcome::Completed(GameStatus::Playing));
        assert_eq!(game.side_to_move(), Color::Black);
        assert!(game.board().get(sq("e4")).is_some_and(|p| p.has_moved));
        assert!(game.board().is_empty(sq("e2")));
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn rejected_moves_leave_state_untouched() {
        let mut game = classic();
        let board = game.board().clone();

        assert_eq!(
            game.apply_move(sq("e4"), sq("e5"), None),
            Err(ChessErrors::NoPieceAtSource(sq("e4")))
        );
        assert_eq!(
            game.apply_move(sq("e7"), sq("e5"), None),
            Err(ChessErrors::NotYourPiece(sq("e7")))
        );
        assert_eq!(
            game.apply_move(sq("e2"), sq("e5"), None),
            Err(ChessErrors::IllegalMove {
                from: sq("e2"),
                to: sq("e5")
            })
        );
        assert_eq!(game.undo(), Err(ChessErrors::EmptyHistory));
        assert_eq!(game.promote(PieceKind::Queen), Err(ChessErrors::NoPromotionPending));

        assert_eq!(game.board(), &board);
        assert_eq!(game.side_to_move(), Color::White);
        assert!(game.history().is_empty());
    }

    #[test]
    fn halfmove_clock_counts_and_restores() {
        let mut game = classic();
        game.apply_move(sq("g1"), sq("f3"), None).expect("Nf3");
        game.apply_move(sq("g8"), sq("f6"), None).expect("Nf6");
        assert_eq!(game.halfmove_clock(), 2);
        game.apply_move(sq("e2"), sq("e4"), None).expect("e4");
        assert_eq!(game.halfmove_clock(), 0);
        game.undo().expect("undo e4");
        assert_eq!(game.halfmove_clock(), 2);
    }

    #[test]
    fn heavy_knight_stun_lasts_one_owner_turn() {
        let board = Board::from_ascii(&[
            "....k...", "........", "........", "....p...", "........", ".....N..", "........",
            "....K...",
        ])
        .expect("diagram should parse");
        let mut game = GameState::from_position(board, Color::White, GameMode::HeavyKnight);

        game.apply_move(sq("f3"), sq("d4"), None).expect("Nd4");
        game.apply_move(sq("e8"), sq("d8"), None).expect("Kd8");
        game.apply_move(sq("d4"), sq("d5"), None)
            .expect_err("knights do not step straight");
        game.apply_move(sq("d4"), sq("c6"), None).expect("Nc6+");
        assert_eq!(game.status(), GameStatus::Check);
        game.undo().expect("undo Nc6");

        // f5 is orthogonally adjacent to the pawn on e5.
        game.apply_move(sq("d4"), sq("f5"), None).expect("Nf5");
        let pawn = game.board().get(sq("e5")).expect("pawn on e5");
        assert_eq!(pawn.stunned_turns, 1);
        assert!(game.legal_moves_from(sq("e5")).is_empty());

        game.apply_move(sq("d8"), sq("c8"), None).expect("Kc8");
        game.apply_move(sq("e1"), sq("d1"), None).expect("Kd1");
        assert!(game.board().get(sq("e5")).is_some_and(|p| !p.is_stunned()));
        assert!(!game.legal_moves_from(sq("e5")).is_empty());
    }

    #[test]
    fn undoing_a_pending_promotion_keeps_the_side() {
        let board = Board::from_ascii(&[
            "........", "P......k", "........", "........", "........", "........", "........",
            "....K...",
        ])
        .expect("diagram should parse");
        let mut game = GameState::from_position(board.clone(), Color::White, GameMode::Classic);
        let outcome = game.apply_move(sq("a7"), sq("a8"), None).expect("a8");
        assert_eq!(outcome, MoveOutcome::PromotionPending(sq("a8")));
        assert_eq!(
            game.apply_move(sq("e1"), sq("e2"), None),
            Err(ChessErrors::PromotionRequired(sq("a8")))
        );
        assert!(game.legal_moves_from(sq("e1")).is_empty());

        game.undo().expect("undo a8");
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.pending_promotion(), None);
        assert_eq!(game.board(), &board);
    }

    #[test]
    fn promotion_choice_on_an_ordinary_move_is_ignored() {
        let mut game = classic();
        game.apply_move(sq("e2"), sq("e4"), Some(PieceKind::Queen))
            .expect("e4");
        assert_eq!(
            game.board().get(sq("e4")).map(|p| p.kind),
            Some(PieceKind::Pawn)
        );
    }

    #[test]
    fn random_mode_is_drawn_from_the_legacy_pool() {
        for seed in 0..32 {
            let game = GameState::new(
                GameConfig::default()
                    .with_mode(ModeChoice::Random)
                    .with_seed(seed),
            );
            assert!(LEGACY_RANDOM_POOL.contains(&game.mode()));
        }
        let a = GameState::new(GameConfig::default().with_mode(ModeChoice::Random).with_seed(5));
        let b = GameState::new(GameConfig::default().with_mode(ModeChoice::Random).with_seed(5));
        assert_eq!(a.mode(), b.mode());
    }

    #[test]
    fn reset_clears_history_and_switches_mode() {
        let mut game = classic();
        game.apply_move(sq("e2"), sq("e4"), None).expect("e4");
        game.reset(Some(ModeChoice::Exact(GameMode::RookCharge)));
        assert_eq!(game.mode(), GameMode::RookCharge);
        assert_eq!(game.board(), &Board::starting_position());
        assert!(game.history().is_empty());
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.status(), GameStatus::Playing);
    }
}
