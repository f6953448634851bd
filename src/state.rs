//! Discrete state abstraction over raw intersection percepts.
//!
//! The encoder compresses the full percept into a four-feature state. The
//! reduction is many-to-one on purpose: distinct raw percepts may collide
//! into the same [`DrivingState`], which keeps the decision space small at
//! the cost of bounding achievable policy fidelity.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{Direction, Light, Percept};

/// Encoded, hashable snapshot of what the agent currently perceives.
///
/// Used as the lookup key for learned values. The four features are the
/// planner's suggested waypoint, the light, and the two traffic features
/// derived by [`encode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DrivingState {
    /// Planner suggestion for this intersection; `None` at the destination.
    pub waypoint: Option<Direction>,
    pub light: Light,
    /// Derived oncoming-traffic feature; only ever `None`, `Left`, or `Right`.
    pub oncoming: Option<Direction>,
    /// Derived left-traffic feature; only ever `None` or `Forward`.
    pub left: Option<Direction>,
}

impl fmt::Display for DrivingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}|{}|{}|{}",
            slot(self.waypoint),
            self.light,
            slot(self.oncoming),
            slot(self.left)
        )
    }
}

fn slot(direction: Option<Direction>) -> String {
    match direction {
        Some(d) => d.to_string(),
        None => "none".to_string(),
    }
}

/// Encode a planner waypoint and a raw percept into a [`DrivingState`].
///
/// Pure function with no side effects:
/// - the waypoint and the light pass through unchanged;
/// - oncoming traffic headed straight through the intersection encodes as
///   [`Direction::Right`] (under right-of-way rules it only conflicts with
///   a right turn); any other reading passes through;
/// - traffic on the left only matters when it is crossing straight, so a
///   forward-moving vehicle encodes as [`Direction::Forward`] and every
///   other reading collapses to `None`.
///
/// The percept's right-hand reading is dropped entirely.
pub fn encode(waypoint: Option<Direction>, percept: &Percept) -> DrivingState {
    let oncoming = match percept.oncoming {
        Some(Direction::Forward) => Some(Direction::Right),
        other => other,
    };
    let left = match percept.left {
        Some(Direction::Forward) => Some(Direction::Forward),
        _ => None,
    };
    DrivingState {
        waypoint,
        light: percept.light,
        oncoming,
        left,
    }
}
