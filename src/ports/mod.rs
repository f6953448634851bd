//! Ports (trait boundaries) for external collaborators.
//!
//! This module defines the interfaces between the learning core and the
//! excluded simulation components. Following hexagonal architecture, these
//! traits are owned by the core and implemented by adapters outside it.

pub mod environment;
pub mod observer;
pub mod planner;

pub use environment::{Environment, TrialStatus};
pub use observer::Observer;
pub use planner::RoutePlanner;
