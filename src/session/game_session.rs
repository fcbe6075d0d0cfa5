//! A game plus an optional computer opponent.
//!
//! `GameSession` owns the `GameState`, the opponent `Engine` and a
//! `Scheduler`. After a human move that hands the turn to the opponent, an
//! `OpponentTask` is queued; `poll` later runs due tasks. Every mutation bumps
//! an epoch counter, and a task whose epoch is stale (or whose position no
//! longer calls for an opponent move) is dropped without effect.

use std::time::Instant;

use tracing::{debug, trace, warn};

use crate::chess_errors::ChessResult;
use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::*;
use crate::game_state::game_config::GameConfig;
use crate::game_state::game_state::{GameState, MoveOutcome};
use crate::session::scheduler::{DelayedScheduler, OpponentTask, Scheduler};

pub struct GameSession {
    state: GameState,
    engine: Box<dyn Engine>,
    scheduler: Box<dyn Scheduler>,
    opponent_color: Color,
    opponent_enabled: bool,
    epoch: u64,
}

impl GameSession {
    pub fn new(config: GameConfig, engine: Box<dyn Engine>, scheduler: Box<dyn Scheduler>) -> Self {
        Self::from_game_state(GameState::new(config), engine, scheduler)
    }

    /// Opponent moves become due `config.opponent_delay` after they are
    /// queued.
    pub fn with_delayed_opponent(config: GameConfig, engine: Box<dyn Engine>) -> Self {
        let scheduler = Box::new(DelayedScheduler::new(config.opponent_delay));
        Self::new(config, engine, scheduler)
    }

    /// Wraps an existing game. The opponent side comes from its config.
    pub fn from_game_state(
        state: GameState,
        engine: Box<dyn Engine>,
        scheduler: Box<dyn Scheduler>,
    ) -> Self {
        let opponent = state.config().opponent;
        let opponent_enabled = opponent.is_some();
        let opponent_color = opponent.unwrap_or(Color::Black);
        let mut session = Self {
            state,
            engine,
            scheduler,
            opponent_color,
            opponent_enabled,
            epoch: 0,
        };
        session.queue_opponent();
        session
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }

    #[inline]
    pub fn opponent_enabled(&self) -> bool {
        self.opponent_enabled
    }

    /// Tasks waiting in the scheduler, stale ones included.
    #[inline]
    pub fn pending_tasks(&self) -> usize {
        self.scheduler.pending()
    }

    pub fn play(
        &mut self,
        from: Position,
        to: Position,
        promotion: Option<PieceKind>,
    ) -> ChessResult<MoveOutcome> {
        let outcome = self.state.apply_move(from, to, promotion)?;
        self.epoch += 1;
        self.queue_opponent();
        Ok(outcome)
    }

    pub fn promote(&mut self, kind: PieceKind) -> ChessResult<GameStatus> {
        let status = self.state.promote(kind)?;
        self.epoch += 1;
        self.queue_opponent();
        Ok(status)
    }

    /// Takes back one ply. The opponent is not re-queued, so a human can
    /// step back through its moves as well.
    pub fn undo(&mut self) -> ChessResult<MoveRecord> {
        let record = self.state.undo()?;
        self.epoch += 1;
        Ok(record)
    }

    pub fn reset(&mut self, choice: Option<ModeChoice>) {
        self.state.reset(choice);
        self.engine.new_game();
        self.epoch += 1;
        self.queue_opponent();
    }

    /// Disabling does not cancel queued tasks; their guard drops them.
    pub fn set_opponent_enabled(&mut self, enabled: bool) {
        self.opponent_enabled = enabled;
        debug!(enabled, color = %self.opponent_color, "opponent toggled");
        if enabled {
            self.queue_opponent();
        }
    }

    /// Runs every task due at `now`. Returns the opponent moves played. A
    /// move the state rejects is logged and skipped.
    pub fn poll(&mut self, now: Instant) -> Vec<CandidateMove> {
        let mut played = Vec::new();
        for task in self.scheduler.take_due(now) {
            if !self.task_is_current(task) {
                trace!(epoch = task.epoch, current = self.epoch, "dropping stale opponent task");
                continue;
            }
            let Some(mv) = self.engine.choose_move(&self.state, task.color) else {
                trace!(color = %task.color, "opponent has no move");
                continue;
            };
            debug!(engine = self.engine.name(), from = %mv.from, to = %mv.to, "opponent moves");
            match self.play(mv.from, mv.to, mv.promotion) {
                Ok(_) => played.push(mv),
                Err(err) => warn!(
                    engine = self.engine.name(),
                    from = %mv.from,
                    to = %mv.to,
                    error = %err,
                    "opponent move rejected"
                ),
            }
        }
        played
    }

    fn opponent_to_move(&self) -> bool {
        self.opponent_enabled
            && self.state.side_to_move() == self.opponent_color
            && !self.state.status().is_terminal()
            && self.state.pending_promotion().is_none()
    }

    fn task_is_current(&self, task: OpponentTask) -> bool {
        task.epoch == self.epoch && task.color == self.opponent_color && self.opponent_to_move()
    }

    fn queue_opponent(&mut self) {
        if !self.opponent_to_move() {
            return;
        }
        let task = OpponentTask {
            color: self.opponent_color,
            epoch: self.epoch,
        };
        trace!(color = %task.color, epoch = task.epoch, "opponent move scheduled");
        self.scheduler.schedule(task);
    }
}
