//! Cooperative run control for incremental enumeration.
//!
//! Enumeration never suspends implicitly: between node expansions the driver
//! calls [`Runner::checkpoint`], which evaluates the kill flag and the
//! current deadline and moves the state machine accordingly. Stop reasons
//! are observable state, never errors, and the partial enumeration left
//! behind at any checkpoint is a valid snapshot.
//!
//! States: `NotStarted → Running → {Finished, TimedOut, Stopped, Dead}`.
//! `TimedOut` and `Stopped` are resumable (a later `run*` call re-enters
//! `Running`); `Dead` is terminal until the owner is reset.

use std::time::{Duration, Instant};

/// Where the cooperative state machine currently is.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RunnerState {
    /// No enumeration has been attempted yet.
    NotStarted,
    /// Inside a `run*` call, between checkpoints.
    Running,
    /// The frontier emptied: the orbit is closed.
    Finished,
    /// The duration limit fired at a checkpoint.
    TimedOut,
    /// A caller-supplied predicate requested a stop.
    Stopped,
    /// `kill()` was observed.
    Dead,
}

/// Kill flag, deadline, and periodic-report bookkeeping for one enumeration.
#[derive(Clone, Debug)]
pub struct Runner {
    state: RunnerState,
    kill: bool,
    deadline: Option<Instant>,
    report_interval: Option<Duration>,
    last_report: Option<Instant>,
}

impl Default for Runner {
    fn default() -> Self {
        Self {
            state: RunnerState::NotStarted,
            kill: false,
            deadline: None,
            report_interval: None,
            last_report: None,
        }
    }
}

impl Runner {
    /// A fresh runner in `NotStarted`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[inline]
    pub fn state(&self) -> RunnerState {
        self.state
    }

    /// Enters `Running`, with an optional duration budget for this call.
    /// Has no effect when dead.
    pub fn start(&mut self, budget: Option<Duration>) {
        if self.state == RunnerState::Dead {
            return;
        }
        self.state = RunnerState::Running;
        self.deadline = budget.map(|d| Instant::now() + d);
        if self.report_interval.is_some() && self.last_report.is_none() {
            self.last_report = Some(Instant::now());
        }
    }

    /// Checkpoint between node expansions: observes the kill flag and the
    /// deadline. Returns `true` if the caller must stop now.
    pub fn checkpoint(&mut self) -> bool {
        if self.kill {
            self.state = RunnerState::Dead;
            return true;
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                self.state = RunnerState::TimedOut;
                return true;
            }
        }
        false
    }

    /// Records that a caller-supplied predicate requested a stop.
    pub fn stop_by_predicate(&mut self) {
        if self.state == RunnerState::Running {
            self.state = RunnerState::Stopped;
        }
    }

    /// Records that the frontier emptied.
    pub fn finish(&mut self) {
        if self.state != RunnerState::Dead {
            self.state = RunnerState::Finished;
        }
    }

    /// Moves a finished runner back to `NotStarted`; used when new seeds or
    /// generators create pending work after the orbit closed. No effect in
    /// any other state.
    pub fn reopen(&mut self) {
        if self.state == RunnerState::Finished {
            self.state = RunnerState::NotStarted;
        }
    }

    /// Requests cooperative cancellation. Observed at the next checkpoint;
    /// if no run is in progress the state moves to `Dead` immediately.
    pub fn kill(&mut self) {
        self.kill = true;
        self.state = RunnerState::Dead;
    }

    /// True once the orbit closed.
    #[inline]
    pub fn finished(&self) -> bool {
        self.state == RunnerState::Finished
    }

    /// True if the last run ended early (timeout, predicate, or kill).
    /// Finishing is not stopping.
    #[inline]
    pub fn stopped(&self) -> bool {
        matches!(
            self.state,
            RunnerState::TimedOut | RunnerState::Stopped | RunnerState::Dead
        )
    }

    /// True once killed.
    #[inline]
    pub fn dead(&self) -> bool {
        self.state == RunnerState::Dead
    }

    /// True if the last run hit its duration budget.
    #[inline]
    pub fn timed_out(&self) -> bool {
        self.state == RunnerState::TimedOut
    }

    /// Enables (or with `None`, disables) periodic progress reports at
    /// checkpoints, via the `log` facade.
    pub fn report_every(&mut self, interval: Option<Duration>) {
        self.report_interval = interval;
        self.last_report = None;
    }

    /// Emits a progress report if the report interval elapsed.
    pub fn maybe_report(&mut self, discovered: usize, frontier: usize) {
        let Some(interval) = self.report_interval else {
            return;
        };
        let now = Instant::now();
        let due = match self.last_report {
            Some(last) => now.duration_since(last) >= interval,
            None => true,
        };
        if due {
            log::info!(
                "orbit enumeration: {discovered} points discovered, {frontier} awaiting expansion"
            );
            self.last_report = Some(now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_runner_is_not_started() {
        let r = Runner::new();
        assert_eq!(r.state(), RunnerState::NotStarted);
        assert!(!r.finished());
        assert!(!r.stopped());
    }

    #[test]
    fn finish_and_stop_are_distinct() {
        let mut r = Runner::new();
        r.start(None);
        r.finish();
        assert!(r.finished());
        assert!(!r.stopped());

        let mut r = Runner::new();
        r.start(None);
        r.stop_by_predicate();
        assert!(r.stopped());
        assert!(!r.finished());
    }

    #[test]
    fn kill_is_observed_at_checkpoint_and_terminal() {
        let mut r = Runner::new();
        r.start(None);
        r.kill();
        assert!(r.checkpoint());
        assert!(r.dead());
        // Dead is terminal: start() does not resurrect.
        r.start(None);
        assert!(r.dead());
    }

    #[test]
    fn zero_budget_times_out_at_first_checkpoint() {
        let mut r = Runner::new();
        r.start(Some(Duration::from_secs(0)));
        assert!(r.checkpoint());
        assert!(r.timed_out());
        assert!(r.stopped());
        // Resumable: a later run re-enters Running.
        r.start(None);
        assert_eq!(r.state(), RunnerState::Running);
        assert!(!r.checkpoint());
    }
}
