//! Tabular Q-learning agent for grid-world driving
//!
//! This crate provides:
//! - A state encoder that compresses intersection percepts into a compact
//!   discrete key
//! - A lazily populated action-value table with a reward-only update rule
//! - Epsilon-greedy action selection with a per-trial decay schedule
//! - Ports for the environment, route planner, and session observers
//! - A trial session harness with progress and metrics observers
//!
//! The grid-world simulation itself (traffic, deadlines, rendering) and the
//! route planner's pathfinding are external collaborators reached through
//! the [`ports`] traits; the crate implements neither.

pub mod config;
pub mod error;
pub mod learning;
pub mod pipeline;
pub mod ports;
pub mod state;
pub mod types;

pub use config::AgentConfig;
pub use error::{Error, Result};
pub use learning::{AgentParameters, DecaySchedule, LearningAgent, QTable, SavedAgent, Step};
pub use state::{DrivingState, encode};
pub use types::{Action, Destination, Direction, Light, Percept};
