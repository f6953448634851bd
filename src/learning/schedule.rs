//! Per-trial decay of the exploration and learning rates.

use serde::{Deserialize, Serialize};

/// Mutable learning parameters owned by a single agent instance.
///
/// Initialized once at construction; `trial_count` and the rates change
/// exactly once per trial boundary via [`DecaySchedule::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgentParameters {
    /// Exploration rate: probability of choosing a random action.
    pub epsilon: f64,
    /// Learning rate: weight given to new reward evidence.
    pub alpha: f64,
    /// Completed training trials.
    pub trial_count: u32,
    /// Whether the agent consults and updates its table at all.
    pub learning_enabled: bool,
    /// Latched once a testing reset is requested; both rates stay at zero
    /// for the remainder of the run.
    pub testing: bool,
}

impl AgentParameters {
    /// Parameters at the start of a run, before the first trial boundary.
    pub fn new(learning_enabled: bool, epsilon: f64, alpha: f64) -> Self {
        Self {
            epsilon,
            alpha,
            trial_count: 0,
            learning_enabled,
            testing: false,
        }
    }
}

/// Piecewise-linear decrement applied to epsilon at every trial boundary.
///
/// The historical schedule: 0.015 per trial while fewer than 25 trials have
/// completed, 0.025 afterwards. Alpha never decays during training. No floor
/// is applied, so epsilon eventually goes negative; a uniform draw in
/// `[0, 1)` can never be `<=` a negative number, which silently retires the
/// exploration branch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecaySchedule {
    pub early_decrement: f64,
    pub late_decrement: f64,
    /// Trial count at which the larger decrement takes over.
    pub late_threshold: u32,
}

impl Default for DecaySchedule {
    fn default() -> Self {
        Self {
            early_decrement: 0.015,
            late_decrement: 0.025,
            late_threshold: 25,
        }
    }
}

impl DecaySchedule {
    /// Advance the schedule at a trial boundary.
    ///
    /// A testing trial freezes both rates at zero, latches the testing flag,
    /// and leaves the trial count untouched. A training trial increments the
    /// trial count and then applies the decrement to epsilon.
    pub fn advance(&self, params: &mut AgentParameters, testing: bool) {
        if testing {
            params.epsilon = 0.0;
            params.alpha = 0.0;
            params.testing = true;
            return;
        }

        params.trial_count += 1;
        if params.trial_count < self.late_threshold {
            params.epsilon -= self.early_decrement;
        } else {
            params.epsilon -= self.late_decrement;
        }
    }
}
