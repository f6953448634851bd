//! Epsilon-greedy tabular learning core.
//!
//! This module implements the decision loop of the driving agent: a lazily
//! populated action-value table, an epsilon-greedy selection policy, and a
//! per-trial decay schedule for the exploration rate.
//!
//! ## Update Rule
//!
//! The table applies a single-step, reward-only update:
//!
//! `Q(s,a) <- (1 - alpha) * Q(s,a) + alpha * r`
//!
//! The successor state's estimate never enters the target and no discount
//! parameter exists; this is a fixed property of the core, not a discount
//! factor of zero.
//!
//! ## Usage Example
//!
//! ```
//! use gridcab::{Action, AgentConfig, LearningAgent};
//!
//! let config = AgentConfig::new()
//!     .with_learning(true)
//!     .with_epsilon(1.0)
//!     .with_alpha(0.2)
//!     .with_seed(42);
//!
//! let agent = LearningAgent::new(config, &Action::ALL).unwrap();
//! assert!(agent.q_table().is_empty());
//! ```

pub mod agent;
pub mod policy;
pub mod q_table;
pub mod schedule;
pub mod serialization;

// Public re-exports
pub use agent::{LearningAgent, Step};
pub use q_table::QTable;
pub use schedule::{AgentParameters, DecaySchedule};
pub use serialization::SavedAgent;
