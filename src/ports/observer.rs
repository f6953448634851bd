//! Observer port - abstraction for session observation.
//!
//! Observers allow composable data collection during a trial session
//! without coupling the harness to specific output formats.

use crate::{Result, learning::agent::Step, pipeline::session::TrialRecord};

/// Observer trait for monitoring trial sessions.
///
/// Observers can be composed to collect different kinds of data while a
/// session runs. Examples include progress bars for user feedback and
/// in-memory metrics tallies for evaluation.
///
/// # Event Sequence
///
/// 1. `on_session_start(planned_trials)` - once at the beginning
/// 2. For each trial:
///    - `on_trial_start(trial_num, testing)`
///    - `on_step(trial_num, step_num, step)` - for each tick
///    - `on_trial_end(trial_num, record)`
/// 3. `on_session_end()` - once at the end
///
/// All methods default to no-ops so observers only implement the events
/// they care about.
pub trait Observer: Send {
    /// Called when the session starts.
    ///
    /// `planned_trials` is `None` when training is tolerance-driven and the
    /// total number of trials cannot be known up front.
    fn on_session_start(&mut self, _planned_trials: Option<usize>) -> Result<()> {
        Ok(())
    }

    /// Called when a trial starts, after the agent's reset.
    fn on_trial_start(&mut self, _trial_num: usize, _testing: bool) -> Result<()> {
        Ok(())
    }

    /// Called after each completed decision tick.
    fn on_step(&mut self, _trial_num: usize, _step_num: usize, _step: &Step) -> Result<()> {
        Ok(())
    }

    /// Called when a trial reaches a terminal status.
    fn on_trial_end(&mut self, _trial_num: usize, _record: &TrialRecord) -> Result<()> {
        Ok(())
    }

    /// Called when the session completes.
    ///
    /// Use this to finalize output or display summaries.
    fn on_session_end(&mut self) -> Result<()> {
        Ok(())
    }
}
