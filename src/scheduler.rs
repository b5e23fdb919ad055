//! Timed task scheduler
//!
//! Holds deferred work as plain payload values. The UI loop pops due tasks one
//! at a time and runs them, so anything a task cancels is already cancelled
//! before the next task is popped. Every task is cancellable through the
//! [`CancellationToken`] in its [`TaskHandle`].

use std::time::{Duration, Instant};

use tokio_util::sync::CancellationToken;

/// Shortest repeat interval accepted, so a repeating task can never spin
const MIN_REPEAT_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct TaskId(u64);

/// Handle to a scheduled task
#[derive(Debug, Clone)]
pub struct TaskHandle {
    token: CancellationToken,
}

impl TaskHandle {
    /// Cancel the task. Cancelling twice, or after it fired, is harmless.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

/// A task that came due
#[derive(Debug, Clone, PartialEq)]
pub struct Fired<T> {
    /// Instant the task was due at (not the instant it was popped)
    pub at: Instant,
    pub payload: T,
}

#[derive(Debug)]
struct ScheduledTask<T> {
    id: TaskId,
    due: Instant,
    repeat: Option<Duration>,
    token: CancellationToken,
    payload: T,
}

#[derive(Debug)]
pub struct Scheduler<T> {
    tasks: Vec<ScheduledTask<T>>,
    next_id: u64,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }
}

impl<T: Clone> Scheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `payload` once, `delay` after `now`
    pub fn schedule_once(&mut self, now: Instant, delay: Duration, payload: T) -> TaskHandle {
        self.insert(now + delay, None, payload)
    }

    /// Run `payload` every `interval`, first firing one interval after `now`
    pub fn schedule_repeating(
        &mut self,
        now: Instant,
        interval: Duration,
        payload: T,
    ) -> TaskHandle {
        let interval = interval.max(MIN_REPEAT_INTERVAL);
        self.insert(now + interval, Some(interval), payload)
    }

    fn insert(&mut self, due: Instant, repeat: Option<Duration>, payload: T) -> TaskHandle {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        let token = CancellationToken::new();

        self.tasks.push(ScheduledTask {
            id,
            due,
            repeat,
            token: token.clone(),
            payload,
        });

        TaskHandle { token }
    }

    /// Pop the earliest task due at or before `now`.
    ///
    /// Ties are broken by scheduling order. A repeating task is re-armed one
    /// interval after the instant it was due, so a loop over `pop_due` catches
    /// up on missed firings one at a time.
    pub fn pop_due(&mut self, now: Instant) -> Option<Fired<T>> {
        self.tasks.retain(|task| !task.token.is_cancelled());

        let index = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.due <= now)
            .min_by_key(|(_, task)| (task.due, task.id))
            .map(|(index, _)| index)?;

        let at = self.tasks[index].due;
        match self.tasks[index].repeat {
            Some(interval) => {
                let task = &mut self.tasks[index];
                task.due = at + interval;
                Some(Fired {
                    at,
                    payload: task.payload.clone(),
                })
            }
            None => {
                let task = self.tasks.swap_remove(index);
                Some(Fired {
                    at,
                    payload: task.payload,
                })
            }
        }
    }

    /// Number of tasks that are still going to fire
    pub fn pending(&self) -> usize {
        self.tasks
            .iter()
            .filter(|task| !task.token.is_cancelled())
            .count()
    }

    /// Earliest instant a live task is due at
    pub fn next_due(&self) -> Option<Instant> {
        self.tasks
            .iter()
            .filter(|task| !task.token.is_cancelled())
            .map(|task| task.due)
            .min()
    }

    /// Cancel and drop every task
    pub fn cancel_all(&mut self) {
        for task in self.tasks.drain(..) {
            task.token.cancel();
        }
    }
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod scheduler_tests;
