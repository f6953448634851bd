//! Configuration for agent creation.

use crate::learning::schedule::DecaySchedule;

/// Builder-style configuration for a [`crate::LearningAgent`].
///
/// # Examples
///
/// ```
/// use gridcab::AgentConfig;
///
/// let config = AgentConfig::new()
///     .with_learning(true)
///     .with_epsilon(1.0)
///     .with_alpha(0.2)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// Whether the agent learns at all; `false` selects pure random-action
    /// mode.
    pub learning: bool,
    /// Initial exploration rate.
    pub epsilon: f64,
    /// Fixed learning rate.
    pub alpha: f64,
    /// Per-trial decay schedule for the exploration rate.
    pub schedule: DecaySchedule,
    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl AgentConfig {
    /// Create a configuration with the historical defaults:
    /// learning off, epsilon 1.0, alpha 0.5, no seed.
    pub fn new() -> Self {
        Self {
            learning: false,
            epsilon: 1.0,
            alpha: 0.5,
            schedule: DecaySchedule::default(),
            seed: None,
        }
    }

    /// Enable or disable learning.
    pub fn with_learning(mut self, learning: bool) -> Self {
        self.learning = learning;
        self
    }

    /// Set the initial exploration rate.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the learning rate.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Replace the decay schedule.
    pub fn with_schedule(mut self, schedule: DecaySchedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self::new()
    }
}
