//! Trial session harness.
//!
//! Drives an agent through training trials until its exploration rate falls
//! below a tolerance, then through a fixed number of testing trials with
//! both rates frozen at zero.

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    learning::agent::LearningAgent,
    ports::{Environment, Observer, RoutePlanner, TrialStatus},
};

/// Session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Training stops once the agent's epsilon drops below this value.
    pub tolerance: f64,

    /// Number of testing trials run after training completes.
    pub test_trials: usize,

    /// Hard cap on training trials, guarding schedules that never reach the
    /// tolerance.
    pub max_training_trials: Option<usize>,

    /// Per-trial step cap applied by the harness on top of the
    /// environment's own deadline enforcement.
    pub step_limit: Option<usize>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            tolerance: 0.05,
            test_trials: 0,
            max_training_trials: Some(300),
            step_limit: Some(100),
        }
    }
}

/// Record of a single completed trial
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialRecord {
    /// Trial index across the whole session (0-based)
    pub trial_num: usize,

    /// Whether this was a testing trial
    pub testing: bool,

    /// Decision ticks taken
    pub steps: usize,

    /// Sum of rewards over the trial
    pub total_reward: f64,

    /// Terminal status reported by the environment
    pub outcome: TrialStatus,
}

/// Aggregated result of a completed session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    /// Training trials played
    pub training_trials: usize,

    /// Testing trials played
    pub testing_trials: usize,

    /// Training trials that reached the destination
    pub training_successes: usize,

    /// Testing trials that reached the destination
    pub testing_successes: usize,

    /// Exploration rate when the session ended
    pub final_epsilon: f64,

    /// Learning rate when the session ended
    pub final_alpha: f64,

    /// States present in the agent's table when the session ended
    pub states_visited: usize,

    /// Per-trial records, in play order
    pub trials: Vec<TrialRecord>,
}

impl SessionReport {
    /// Fraction of training trials that reached the destination.
    pub fn training_success_rate(&self) -> f64 {
        if self.training_trials > 0 {
            self.training_successes as f64 / self.training_trials as f64
        } else {
            0.0
        }
    }

    /// Fraction of testing trials that reached the destination.
    pub fn testing_success_rate(&self) -> f64 {
        if self.testing_trials > 0 {
            self.testing_successes as f64 / self.testing_trials as f64
        } else {
            0.0
        }
    }
}

/// Session harness for a single agent against an environment and planner
pub struct Session {
    config: SessionConfig,
    observers: Vec<Box<dyn Observer>>,
}

impl Session {
    /// Create a new session with the given configuration.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the session.
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Run the session: training trials until the tolerance (or the cap),
    /// then the configured testing trials.
    pub fn run(
        &mut self,
        agent: &mut LearningAgent,
        env: &mut dyn Environment,
        planner: &mut dyn RoutePlanner,
    ) -> Result<SessionReport> {
        let planned = self
            .config
            .max_training_trials
            .map(|cap| cap + self.config.test_trials);
        for observer in &mut self.observers {
            observer.on_session_start(planned)?;
        }

        let mut trials = Vec::new();
        let mut trial_num = 0;

        // Training phase: at least one trial, then stop once epsilon falls
        // below the tolerance.
        while self
            .config
            .max_training_trials
            .is_none_or(|cap| trial_num < cap)
        {
            let record = self.run_trial(trial_num, false, agent, env, planner)?;
            trials.push(record);
            trial_num += 1;

            if agent.params().epsilon < self.config.tolerance {
                break;
            }
        }
        let training_trials = trial_num;

        // Testing phase: rates frozen at zero for every trial.
        for _ in 0..self.config.test_trials {
            let record = self.run_trial(trial_num, true, agent, env, planner)?;
            trials.push(record);
            trial_num += 1;
        }

        for observer in &mut self.observers {
            observer.on_session_end()?;
        }

        let reached = |r: &&TrialRecord| r.outcome == TrialStatus::ReachedDestination;
        let training_successes = trials.iter().filter(|r| !r.testing).filter(reached).count();
        let testing_successes = trials.iter().filter(|r| r.testing).filter(reached).count();

        Ok(SessionReport {
            training_trials,
            testing_trials: trial_num - training_trials,
            training_successes,
            testing_successes,
            final_epsilon: agent.params().epsilon,
            final_alpha: agent.params().alpha,
            states_visited: agent.q_table().len(),
            trials,
        })
    }

    fn run_trial(
        &mut self,
        trial_num: usize,
        testing: bool,
        agent: &mut LearningAgent,
        env: &mut dyn Environment,
        planner: &mut dyn RoutePlanner,
    ) -> Result<TrialRecord> {
        let destination = env.assign_destination();
        agent.reset(planner, destination, testing);

        for observer in &mut self.observers {
            observer.on_trial_start(trial_num, testing)?;
        }

        let mut steps = 0;
        let mut total_reward = 0.0;
        let mut outcome = env.trial_status();

        while outcome == TrialStatus::InProgress {
            if self.config.step_limit.is_some_and(|limit| steps >= limit) {
                outcome = TrialStatus::DeadlineExpired;
                break;
            }

            let step = agent.step(env, planner)?;
            total_reward += step.reward;

            for observer in &mut self.observers {
                observer.on_step(trial_num, steps, &step)?;
            }

            steps += 1;
            outcome = env.trial_status();
        }

        let record = TrialRecord {
            trial_num,
            testing,
            steps,
            total_reward,
            outcome,
        };

        for observer in &mut self.observers {
            observer.on_trial_end(trial_num, &record)?;
        }

        Ok(record)
    }
}
