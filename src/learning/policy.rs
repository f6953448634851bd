//! Epsilon-greedy action selection.

use rand::{Rng, seq::IndexedRandom};

use crate::{
    error::{Error, Result},
    learning::{q_table::QTable, schedule::AgentParameters},
    state::DrivingState,
    types::Action,
};

/// Select an action for `state` under the agent's current parameters.
///
/// With learning disabled the choice is uniformly random and the table is
/// never consulted. With learning enabled, one uniform draw in `[0, 1)`
/// decides between exploring (uniform choice, when the draw is `<= epsilon`)
/// and exploiting the table's best-known action. The inclusive comparison
/// means a negative epsilon never explores.
///
/// # Errors
///
/// [`Error::EmptyActionSet`] if `actions` is empty. During exploitation,
/// [`Error::UnknownState`] if `state` was never inserted into the table;
/// the agent prevents this by calling `ensure` before selecting.
pub fn select_action<R: Rng>(
    rng: &mut R,
    params: &AgentParameters,
    table: &QTable,
    state: &DrivingState,
    actions: &[Action],
) -> Result<Action> {
    if actions.is_empty() {
        return Err(Error::EmptyActionSet);
    }

    if !params.learning_enabled {
        return Ok(*actions.choose(rng).unwrap());
    }

    if rng.random::<f64>() <= params.epsilon {
        Ok(*actions.choose(rng).unwrap())
    } else {
        table.best_action(state)
    }
}
