//! Environment port - abstraction over the grid-world simulation.
//!
//! The learning core never implements traffic physics, deadlines, or
//! rendering; it consumes percepts and rewards through this boundary.

use serde::{Deserialize, Serialize};

use crate::types::{Action, Destination, Percept};

/// Terminal status of the current trial, owned by the environment.
///
/// Trial-length enforcement (deadlines, step budgets) is the environment's
/// responsibility; the core only reads the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrialStatus {
    /// The trial continues; the agent should take another tick.
    InProgress,
    /// The vehicle arrived at its assigned destination.
    ReachedDestination,
    /// The environment's deadline or step budget ran out.
    DeadlineExpired,
}

impl TrialStatus {
    /// Whether the trial has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TrialStatus::InProgress)
    }
}

/// Environment trait - the simulation boundary the agent drives against.
///
/// # Design Philosophy
///
/// This trait represents a **port** in hexagonal architecture - a boundary
/// between the learning core and the excluded grid-world simulation.
/// Simulators, replay harnesses, and test doubles are **adapters** that
/// implement this port.
///
/// # Contract
///
/// - [`valid_actions`](Environment::valid_actions) is fixed, ordered, and
///   non-empty for the whole run; the agent captures it at construction and
///   treats it as a closed set.
/// - [`act`](Environment::act) returns a reward whose sign and magnitude
///   are entirely environment-defined; the core places no constraints on it.
/// - [`sense`](Environment::sense) must be callable both before an action
///   (the Acting half of a tick) and after it (the Learning half).
pub trait Environment: Send {
    /// The fixed, ordered action set for this environment.
    fn valid_actions(&self) -> &[Action];

    /// Assign a fresh destination at a trial boundary.
    ///
    /// Returns `None` when the environment has no notion of a destination
    /// (e.g. open-ended replay). Called once per trial, before the agent's
    /// reset.
    fn assign_destination(&mut self) -> Option<Destination>;

    /// Current intersection sensor readings.
    fn sense(&self) -> Percept;

    /// Submit an action and receive the resulting reward.
    fn act(&mut self, action: Action) -> f64;

    /// The environment's verdict on the current trial.
    fn trial_status(&self) -> TrialStatus;
}
