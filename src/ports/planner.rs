//! Route planner port - abstraction over destination routing.

use crate::types::{Destination, Direction};

/// RoutePlanner trait - converts an assigned destination into per-tick
/// waypoint suggestions.
///
/// # Design Philosophy
///
/// This trait represents a **port** in hexagonal architecture. The planner
/// itself (shortest-path search over the grid) is an external collaborator;
/// the core only needs its suggested next move.
///
/// # Contract
///
/// - [`route_to`](RoutePlanner::route_to) is invoked exactly once per trial
///   reset, before any waypoint queries for that trial.
/// - [`next_waypoint`](RoutePlanner::next_waypoint) is called at both the
///   Acting and Learning halves of a tick and has no side effects visible
///   to the core beyond its return value. `None` means the vehicle is at
///   its destination.
pub trait RoutePlanner: Send {
    /// Start routing toward a new destination.
    fn route_to(&mut self, destination: Option<Destination>);

    /// The suggested next move from the current intersection.
    fn next_waypoint(&mut self) -> Option<Direction>;
}
