//! Progress simulator state
//!
//! `Idle -> Active -> Completing -> Idle`, with `cancel` returning to `Idle`
//! from either busy phase. The state owns the handles of its tick and hold
//! tasks so every transition that ends a phase also cancels its timer.

use crate::config::RestartPolicy;
use crate::scheduler::TaskHandle;

pub const DEFAULT_MESSAGE: &str = "Loading...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProgressPhase {
    #[default]
    Idle,
    /// Ticking towards 100%
    Active,
    /// Reached 100%, waiting out the completion hold
    Completing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    Started,
    /// A running simulation was thrown away and started over
    Restarted,
    /// A simulation was already running and the policy kept it
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    Advanced(f64),
    /// Reached 100% on this tick; the tick task has been cancelled
    Completed,
    /// Tick arrived while not active (stale timer)
    Inactive,
}

#[derive(Debug)]
pub struct ProgressState {
    phase: ProgressPhase,
    progress: f64,
    message: String,
    tick_task: Option<TaskHandle>,
    hold_task: Option<TaskHandle>,
}

impl Default for ProgressState {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressState {
    pub fn new() -> Self {
        Self {
            phase: ProgressPhase::Idle,
            progress: 0.0,
            message: DEFAULT_MESSAGE.to_string(),
            tick_task: None,
            hold_task: None,
        }
    }

    /// Reset to 0% and enter `Active` with `message`.
    ///
    /// The caller schedules the repeating tick and hands it over with
    /// [`attach_tick`](Self::attach_tick) unless the outcome is `Ignored`.
    pub fn start(&mut self, message: &str, policy: RestartPolicy) -> StartOutcome {
        let outcome = if self.is_active() {
            match policy {
                RestartPolicy::Ignore => {
                    log::debug!("Progress start ignored, already {:?}", self.phase);
                    return StartOutcome::Ignored;
                }
                RestartPolicy::Restart => StartOutcome::Restarted,
            }
        } else {
            StartOutcome::Started
        };

        self.cancel_tasks();
        self.phase = ProgressPhase::Active;
        self.progress = 0.0;
        self.message = message.to_string();
        log::debug!("Progress {:?}: {}", outcome, message);

        outcome
    }

    pub fn attach_tick(&mut self, handle: TaskHandle) {
        if let Some(previous) = self.tick_task.replace(handle) {
            previous.cancel();
        }
    }

    pub fn attach_hold(&mut self, handle: TaskHandle) {
        if let Some(previous) = self.hold_task.replace(handle) {
            previous.cancel();
        }
    }

    /// Advance by `increment` (negative values count as zero).
    ///
    /// Progress is clamped to exactly 1.0; reaching it cancels the tick task
    /// and moves to `Completing`.
    pub fn tick(&mut self, increment: f64) -> TickOutcome {
        if self.phase != ProgressPhase::Active {
            return TickOutcome::Inactive;
        }

        self.progress = (self.progress + increment.max(0.0)).min(1.0);
        if self.progress < 1.0 {
            return TickOutcome::Advanced(self.progress);
        }

        self.progress = 1.0;
        self.phase = ProgressPhase::Completing;
        if let Some(tick) = self.tick_task.take() {
            tick.cancel();
        }
        log::debug!("Progress complete: {}", self.message);
        TickOutcome::Completed
    }

    /// End the completion hold. Returns false if there was no hold to end.
    pub fn finish(&mut self) -> bool {
        if self.phase != ProgressPhase::Completing {
            return false;
        }
        self.hold_task = None;
        self.phase = ProgressPhase::Idle;
        true
    }

    /// Abort a running simulation. Returns false when already idle.
    pub fn cancel(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        self.cancel_tasks();
        self.phase = ProgressPhase::Idle;
        log::debug!("Progress cancelled at {:.2}", self.progress);
        true
    }

    fn cancel_tasks(&mut self) {
        for handle in [self.tick_task.take(), self.hold_task.take()]
            .into_iter()
            .flatten()
        {
            handle.cancel();
        }
    }

    pub fn phase(&self) -> ProgressPhase {
        self.phase
    }

    /// True while the overlay should be shown
    pub fn is_active(&self) -> bool {
        self.phase != ProgressPhase::Idle
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whole percent, rounded down
    pub fn percent(&self) -> u16 {
        (self.progress * 100.0).floor() as u16
    }

    #[cfg(test)]
    pub fn is_ticking(&self) -> bool {
        self.tick_task
            .as_ref()
            .is_some_and(|handle| !handle.is_cancelled())
    }
}

#[cfg(test)]
#[path = "progress_state_tests.rs"]
mod progress_state_tests;
