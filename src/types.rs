//! Core vocabulary types for the grid-world driving domain.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A direction of travel relative to the vehicle's current heading.
///
/// Used both for planner waypoints ("turn left at this intersection") and
/// for the sensed intent of other vehicles at the intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Forward,
    Left,
    Right,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Forward => "forward",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        write!(f, "{s}")
    }
}

/// Traffic light state at the intersection the vehicle faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Light {
    Red,
    Green,
}

impl fmt::Display for Light {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Light::Red => "red",
            Light::Green => "green",
        };
        write!(f, "{s}")
    }
}

/// One selectable move from the fixed action set.
///
/// The action set is supplied by the environment at agent construction and
/// treated as closed and immutable for the whole run. Its slice order is the
/// stable order used for deterministic tie-breaking in value lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Stay at the intersection for this tick.
    Idle,
    Forward,
    Left,
    Right,
}

impl Action {
    /// The canonical action set in its stable selection order.
    pub const ALL: [Action; 4] = [Action::Idle, Action::Forward, Action::Left, Action::Right];
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::Idle => "idle",
            Action::Forward => "forward",
            Action::Left => "left",
            Action::Right => "right",
        };
        write!(f, "{s}")
    }
}

/// Raw intersection sensor readings delivered by the environment.
///
/// Each traffic field carries the intended move of the vehicle approaching
/// from that side, or `None` when the approach is clear. The right-hand
/// reading is sensed but deliberately absent from the encoded state; see
/// [`crate::state::encode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Percept {
    pub light: Light,
    /// Intended move of oncoming traffic, if any.
    pub oncoming: Option<Direction>,
    /// Intended move of traffic approaching from the left, if any.
    pub left: Option<Direction>,
    /// Intended move of traffic approaching from the right, if any.
    pub right: Option<Direction>,
}

impl Percept {
    /// A clear intersection with the given light.
    pub fn clear(light: Light) -> Self {
        Self {
            light,
            oncoming: None,
            left: None,
            right: None,
        }
    }
}

/// An intersection coordinate the environment routes trials toward.
///
/// Opaque to the learning core; it is handed from the environment to the
/// route planner at each trial boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Destination {
    pub x: i32,
    pub y: i32,
}

impl Destination {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_set_order_is_stable() {
        assert_eq!(
            Action::ALL,
            [Action::Idle, Action::Forward, Action::Left, Action::Right]
        );
    }

    #[test]
    fn display_labels() {
        assert_eq!(Direction::Forward.to_string(), "forward");
        assert_eq!(Light::Red.to_string(), "red");
        assert_eq!(Action::Idle.to_string(), "idle");
        assert_eq!(Destination::new(3, -1).to_string(), "(3, -1)");
    }

    #[test]
    fn percept_clear_has_no_traffic() {
        let percept = Percept::clear(Light::Green);
        assert_eq!(percept.oncoming, None);
        assert_eq!(percept.left, None);
        assert_eq!(percept.right, None);
    }
}
