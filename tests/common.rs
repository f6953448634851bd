//! Common test utilities for the gridcab test suite.
//!
//! This module provides deterministic doubles for the environment and
//! route-planner ports.

#![allow(dead_code)]

use gridcab::{
    Action, Destination, Direction, Percept,
    ports::{Environment, RoutePlanner, TrialStatus},
};

/// Environment double with a fixed percept and reward.
///
/// Every trial ends as reached after `trial_length` ticks; the harness's
/// own step limit is never the terminal condition unless set tighter.
pub struct ScriptedEnvironment {
    actions: Vec<Action>,
    percept: Percept,
    reward: f64,
    trial_length: usize,
    ticks_this_trial: usize,
    destinations_assigned: i32,
}

impl ScriptedEnvironment {
    pub fn new(percept: Percept, reward: f64, trial_length: usize) -> Self {
        Self {
            actions: Action::ALL.to_vec(),
            percept,
            reward,
            trial_length,
            ticks_this_trial: 0,
            destinations_assigned: 0,
        }
    }

    /// Replace the fixed percept mid-run (e.g. to flip the light).
    pub fn set_percept(&mut self, percept: Percept) {
        self.percept = percept;
    }

    pub fn destinations_assigned(&self) -> i32 {
        self.destinations_assigned
    }
}

impl Environment for ScriptedEnvironment {
    fn valid_actions(&self) -> &[Action] {
        &self.actions
    }

    fn assign_destination(&mut self) -> Option<Destination> {
        self.ticks_this_trial = 0;
        self.destinations_assigned += 1;
        Some(Destination::new(self.destinations_assigned, 0))
    }

    fn sense(&self) -> Percept {
        self.percept
    }

    fn act(&mut self, _action: Action) -> f64 {
        self.ticks_this_trial += 1;
        self.reward
    }

    fn trial_status(&self) -> TrialStatus {
        if self.ticks_this_trial >= self.trial_length {
            TrialStatus::ReachedDestination
        } else {
            TrialStatus::InProgress
        }
    }
}

/// Planner double that always suggests the same waypoint.
pub struct FixedRoutePlanner {
    waypoint: Option<Direction>,
    destination: Option<Destination>,
    routed: usize,
}

impl FixedRoutePlanner {
    pub fn new(waypoint: Option<Direction>) -> Self {
        Self {
            waypoint,
            destination: None,
            routed: 0,
        }
    }

    pub fn routed(&self) -> usize {
        self.routed
    }

    pub fn destination(&self) -> Option<Destination> {
        self.destination
    }
}

impl RoutePlanner for FixedRoutePlanner {
    fn route_to(&mut self, destination: Option<Destination>) {
        self.destination = destination;
        self.routed += 1;
    }

    fn next_waypoint(&mut self) -> Option<Direction> {
        self.waypoint
    }
}
