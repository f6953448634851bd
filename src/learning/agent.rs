//! Learning agent: per-tick orchestration of sensing, action selection,
//! and the reward-only table update.

use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::{
    config::AgentConfig,
    error::{Error, Result},
    learning::{
        policy,
        q_table::QTable,
        schedule::{AgentParameters, DecaySchedule},
    },
    ports::{Environment, RoutePlanner},
    state::{self, DrivingState},
    types::{Action, Destination},
};

/// One completed decision tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub state: DrivingState,
    pub action: Action,
    pub reward: f64,
}

/// Exported agent state, used by the snapshot format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct AgentSnapshot {
    pub params: AgentParameters,
    pub schedule: DecaySchedule,
    pub q_table: QTable,
    pub actions: Vec<Action>,
    pub rng_seed: Option<u64>,
}

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// Tabular epsilon-greedy driving agent.
///
/// Owns its [`QTable`] and [`AgentParameters`] exclusively; no collaborator
/// mutates them. Each simulated tick runs two phases:
///
/// 1. **Acting** - sense the intersection, encode the state, lazily insert
///    it into the table, select an action, and submit it for a reward.
/// 2. **Learning** - when learning is enabled, re-encode the post-action
///    state and fold the reward into the estimate for the acted pair.
///
/// The update rule is a pure averaging step toward the immediate reward;
/// the successor state's estimate is looked up but never enters the target.
#[derive(Debug, Clone)]
pub struct LearningAgent {
    params: AgentParameters,
    schedule: DecaySchedule,
    q_table: QTable,
    actions: Vec<Action>,
    rng: StdRng,
    rng_seed: Option<u64>,
}

impl LearningAgent {
    /// Create an agent over the environment's fixed action set.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyActionSet`] if `actions` is empty;
    /// [`Error::InvalidConfiguration`] if a rate is not finite.
    pub fn new(config: AgentConfig, actions: &[Action]) -> Result<Self> {
        if actions.is_empty() {
            return Err(Error::EmptyActionSet);
        }
        if !config.epsilon.is_finite() {
            return Err(Error::InvalidConfiguration {
                message: format!("epsilon must be finite, got {}", config.epsilon),
            });
        }
        if !config.alpha.is_finite() {
            return Err(Error::InvalidConfiguration {
                message: format!("alpha must be finite, got {}", config.alpha),
            });
        }

        Ok(Self {
            params: AgentParameters::new(config.learning, config.epsilon, config.alpha),
            schedule: config.schedule,
            q_table: QTable::new(),
            actions: actions.to_vec(),
            rng: build_rng(config.seed),
            rng_seed: config.seed,
        })
    }

    /// Create an agent, capturing the action set from the environment.
    pub fn from_environment(config: AgentConfig, env: &dyn Environment) -> Result<Self> {
        Self::new(config, env.valid_actions())
    }

    /// Reseed the agent's random source.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self.rng_seed = Some(seed);
        self
    }

    /// Current learning parameters.
    pub fn params(&self) -> &AgentParameters {
        &self.params
    }

    /// The learned action-value table.
    pub fn q_table(&self) -> &QTable {
        &self.q_table
    }

    /// The fixed action set, in its stable selection order.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Begin a new trial: route the planner toward the assigned destination
    /// and advance the decay schedule.
    ///
    /// Called once per trial boundary, including before the first trial.
    /// Requesting `testing` latches both rates at zero for the remainder of
    /// the run.
    pub fn reset(
        &mut self,
        planner: &mut dyn RoutePlanner,
        destination: Option<Destination>,
        testing: bool,
    ) {
        planner.route_to(destination);
        self.schedule.advance(&mut self.params, testing);
    }

    /// Execute one decision tick against the environment and planner.
    ///
    /// # Errors
    ///
    /// Propagates contract violations from the table and policy; none occur
    /// under the documented sequencing.
    pub fn step(
        &mut self,
        env: &mut dyn Environment,
        planner: &mut dyn RoutePlanner,
    ) -> Result<Step> {
        // Acting: encode what the agent sees and commit to an action.
        let state = self.build_state(&*env, planner);
        if self.params.learning_enabled {
            self.q_table.ensure(state, &self.actions);
        }
        let action = policy::select_action(
            &mut self.rng,
            &self.params,
            &self.q_table,
            &state,
            &self.actions,
        )?;
        let reward = env.act(action);

        // Learning: fold the reward into the estimate for the acted pair.
        if self.params.learning_enabled {
            self.learn(&*env, planner, state, action, reward)?;
        }

        Ok(Step {
            state,
            action,
            reward,
        })
    }

    fn build_state(&self, env: &dyn Environment, planner: &mut dyn RoutePlanner) -> DrivingState {
        let waypoint = planner.next_waypoint();
        state::encode(waypoint, &env.sense())
    }

    fn learn(
        &mut self,
        env: &dyn Environment,
        planner: &mut dyn RoutePlanner,
        state: DrivingState,
        action: Action,
        reward: f64,
    ) -> Result<()> {
        // The successor estimate is observed but carries no weight in the
        // target: the update averages toward the immediate reward only.
        let next_state = self.build_state(env, planner);
        let _successor_estimate = self.q_table.best_value(&next_state).unwrap_or(0.0);

        self.q_table
            .update(&state, action, reward, self.params.alpha)
    }

    pub(crate) fn export_state(&self) -> AgentSnapshot {
        AgentSnapshot {
            params: self.params,
            schedule: self.schedule,
            q_table: self.q_table.clone(),
            actions: self.actions.clone(),
            rng_seed: self.rng_seed,
        }
    }

    pub(crate) fn from_snapshot(snapshot: AgentSnapshot) -> Result<Self> {
        if snapshot.actions.is_empty() {
            return Err(Error::EmptyActionSet);
        }
        Ok(Self {
            params: snapshot.params,
            schedule: snapshot.schedule,
            q_table: snapshot.q_table,
            actions: snapshot.actions,
            rng: build_rng(snapshot.rng_seed),
            rng_seed: snapshot.rng_seed,
        })
    }
}
