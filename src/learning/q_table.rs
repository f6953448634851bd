//! Action-value table with a reward-only update rule.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    state::DrivingState,
    types::Action,
};

/// Lazily populated mapping from encoded states to per-action value estimates.
///
/// A state is present if and only if it has been visited at least once while
/// learning was enabled. Rows are created with every action of the fixed
/// action set at `0.0`, are only ever updated in place, and are never
/// removed, so the table grows monotonically for the lifetime of the agent.
///
/// Each row stores its entries in the action-set order it was created with.
/// Maximum lookups scan in that order and keep the first maximum, which makes
/// tie-breaking deterministic across runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QTable {
    rows: HashMap<DrivingState, Vec<(Action, f64)>>,
}

impl QTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            rows: HashMap::new(),
        }
    }

    /// Insert `state` with a zero-valued entry per action unless it is
    /// already present, then return the row.
    ///
    /// Idempotent: a second call for the same state leaves previously
    /// learned values untouched.
    pub fn ensure(&mut self, state: DrivingState, actions: &[Action]) -> &[(Action, f64)] {
        self.rows
            .entry(state)
            .or_insert_with(|| actions.iter().map(|&action| (action, 0.0)).collect())
    }

    /// Whether the state has been inserted.
    pub fn contains(&self, state: &DrivingState) -> bool {
        self.rows.contains_key(state)
    }

    /// Current value estimate for a state/action pair.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownState`] if the state was never inserted;
    /// [`Error::InvalidAction`] if the action is outside the row's action set.
    pub fn value(&self, state: &DrivingState, action: Action) -> Result<f64> {
        let row = self.row(state)?;
        row.iter()
            .find(|(a, _)| *a == action)
            .map(|(_, q)| *q)
            .ok_or(Error::InvalidAction { action })
    }

    /// Maximum value estimate across the state's actions.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownState`] if the state was never inserted. Callers must
    /// `ensure` first.
    pub fn best_value(&self, state: &DrivingState) -> Result<f64> {
        let row = self.row(state)?;
        Ok(row
            .iter()
            .map(|(_, q)| *q)
            .fold(f64::NEG_INFINITY, f64::max))
    }

    /// Action achieving the maximum value for the state.
    ///
    /// Ties resolve to the first action in the row's stored order.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownState`] if the state was never inserted.
    pub fn best_action(&self, state: &DrivingState) -> Result<Action> {
        let row = self.row(state)?;
        let mut best = *row.first().ok_or(Error::EmptyActionSet)?;
        for &(action, q) in &row[1..] {
            if q > best.1 {
                best = (action, q);
            }
        }
        Ok(best.0)
    }

    /// Reward-only update: `q := (1 - alpha) * q + alpha * reward`.
    ///
    /// The successor state's estimate is deliberately absent from the
    /// target; no discount parameter exists. The update is a pure averaging
    /// step toward the immediate reward.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownState`] if the state was never inserted;
    /// [`Error::InvalidAction`] if the action is outside the row's action set.
    pub fn update(
        &mut self,
        state: &DrivingState,
        action: Action,
        reward: f64,
        alpha: f64,
    ) -> Result<()> {
        let row = self.rows.get_mut(state).ok_or_else(|| Error::UnknownState {
            state: state.to_string(),
        })?;
        let entry = row
            .iter_mut()
            .find(|(a, _)| *a == action)
            .ok_or(Error::InvalidAction { action })?;
        entry.1 = (1.0 - alpha) * entry.1 + alpha * reward;
        Ok(())
    }

    /// Number of states visited while learning.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no states yet.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn row(&self, state: &DrivingState) -> Result<&[(Action, f64)]> {
        self.rows
            .get(state)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::UnknownState {
                state: state.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        state::encode,
        types::{Light, Percept},
    };

    fn sample_state() -> DrivingState {
        encode(
            Some(crate::types::Direction::Forward),
            &Percept::clear(Light::Green),
        )
    }

    #[test]
    fn ensure_initializes_every_action_to_zero() {
        let mut table = QTable::new();
        let row: Vec<_> = table.ensure(sample_state(), &Action::ALL).to_vec();
        assert_eq!(row.len(), Action::ALL.len());
        for (i, &(action, q)) in row.iter().enumerate() {
            assert_eq!(action, Action::ALL[i]);
            assert_eq!(q, 0.0);
        }
    }

    #[test]
    fn ensure_is_idempotent() {
        let mut table = QTable::new();
        let state = sample_state();
        table.ensure(state, &Action::ALL);
        table
            .update(&state, Action::Forward, 2.0, 0.5)
            .expect("update on ensured state should succeed");

        let row: Vec<_> = table.ensure(state, &Action::ALL).to_vec();
        assert_eq!(table.len(), 1);
        assert!(row.contains(&(Action::Forward, 1.0)));
    }

    #[test]
    fn update_matches_exact_formula_and_bounds() {
        let mut table = QTable::new();
        let state = sample_state();
        table.ensure(state, &Action::ALL);

        table
            .update(&state, Action::Left, -4.0, 0.25)
            .expect("update should succeed");
        let value = table.value(&state, Action::Left).unwrap();
        assert_eq!(value, 0.75 * 0.0 + 0.25 * -4.0);
        assert!(value >= -4.0 && value <= 0.0);
    }

    #[test]
    fn best_action_breaks_ties_by_action_set_order() {
        let mut table = QTable::new();
        let state = sample_state();
        table.ensure(state, &Action::ALL);

        // All values equal: the first action in the set order wins.
        assert_eq!(table.best_action(&state).unwrap(), Action::Idle);

        table.update(&state, Action::Right, 1.0, 1.0).unwrap();
        assert_eq!(table.best_action(&state).unwrap(), Action::Right);
        assert_eq!(table.best_value(&state).unwrap(), 1.0);
    }

    #[test]
    fn unknown_state_lookup_is_an_error() {
        let table = QTable::new();
        let state = sample_state();
        assert!(matches!(
            table.best_value(&state),
            Err(Error::UnknownState { .. })
        ));
        assert!(matches!(
            table.best_action(&state),
            Err(Error::UnknownState { .. })
        ));
    }

    #[test]
    fn action_outside_the_row_is_an_error() {
        let mut table = QTable::new();
        let state = sample_state();
        table.ensure(state, &[Action::Idle, Action::Forward]);

        assert!(matches!(
            table.update(&state, Action::Left, 1.0, 0.5),
            Err(Error::InvalidAction {
                action: Action::Left
            })
        ));
        assert!(matches!(
            table.value(&state, Action::Right),
            Err(Error::InvalidAction {
                action: Action::Right
            })
        ));
    }
}
