//! Deferred execution of opponent moves.
//!
//! A scheduler only stores tasks and hands back the ones that are due. The
//! session drains it from its own `poll`, so deferred moves run on the
//! caller's thread and never overlap with another mutation.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::game_state::chess_types::Color;

/// Request for the opponent on `color` to move, stamped with the session
/// epoch at scheduling time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpponentTask {
    pub color: Color,
    pub epoch: u64,
}

pub trait Scheduler: Send {
    fn schedule(&mut self, task: OpponentTask);

    /// Removes and returns every task due at `now`, oldest first.
    fn take_due(&mut self, now: Instant) -> Vec<OpponentTask>;

    fn pending(&self) -> usize;
}

/// Every task is due as soon as it is queued.
#[derive(Debug, Default)]
pub struct ImmediateScheduler {
    queue: VecDeque<OpponentTask>,
}

impl ImmediateScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for ImmediateScheduler {
    fn schedule(&mut self, task: OpponentTask) {
        self.queue.push_back(task);
    }

    fn take_due(&mut self, _now: Instant) -> Vec<OpponentTask> {
        self.queue.drain(..).collect()
    }

    fn pending(&self) -> usize {
        self.queue.len()
    }
}

/// Tasks become due a fixed delay after they were scheduled.
#[derive(Debug)]
pub struct DelayedScheduler {
    delay: Duration,
    queue: VecDeque<(Instant, OpponentTask)>,
}

impl DelayedScheduler {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            queue: VecDeque::new(),
        }
    }

    #[inline]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Scheduler for DelayedScheduler {
    fn schedule(&mut self, task: OpponentTask) {
        self.queue.push_back((Instant::now() + self.delay, task));
    }

    fn take_due(&mut self, now: Instant) -> Vec<OpponentTask> {
        // Deadlines are pushed in order, so the due tasks form a prefix.
        let mut due = Vec::new();
        while let Some(&(deadline, task)) = self.queue.front() {
            if deadline > now {
                break;
            }
            self.queue.pop_front();
            due.push(task);
        }
        due
    }

    fn pending(&self) -> usize {
        self.queue.len()
    }
}
