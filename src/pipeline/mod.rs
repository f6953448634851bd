//! Trial session harness and composable observers.
//!
//! The harness plays the role the excluded simulator's driver loop plays:
//! it assigns destinations, resets the agent at trial boundaries, and ticks
//! the decision loop until the environment declares the trial over.

pub mod observers;
pub mod session;

pub use observers::{MetricsObserver, ProgressObserver};
pub use session::{Session, SessionConfig, SessionReport, TrialRecord};
