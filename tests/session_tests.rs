//! Integration tests for the trial session harness.

use std::sync::{Arc, Mutex};

use gridcab::{
    Action, AgentConfig, Direction, LearningAgent, Light, Percept, Result,
    pipeline::{Session, SessionConfig, TrialRecord},
    ports::{Observer, TrialStatus},
};

mod common;

use common::{FixedRoutePlanner, ScriptedEnvironment};

#[derive(Default)]
struct SessionEvents {
    sessions_started: usize,
    sessions_ended: usize,
    trial_starts: Vec<(usize, bool)>,
    steps: usize,
    records: Vec<TrialRecord>,
}

struct RecordingObserver(Arc<Mutex<SessionEvents>>);

impl Observer for RecordingObserver {
    fn on_session_start(&mut self, _planned_trials: Option<usize>) -> Result<()> {
        self.0.lock().unwrap().sessions_started += 1;
        Ok(())
    }

    fn on_trial_start(&mut self, trial_num: usize, testing: bool) -> Result<()> {
        self.0.lock().unwrap().trial_starts.push((trial_num, testing));
        Ok(())
    }

    fn on_step(&mut self, _trial_num: usize, _step_num: usize, _step: &gridcab::Step) -> Result<()> {
        self.0.lock().unwrap().steps += 1;
        Ok(())
    }

    fn on_trial_end(&mut self, _trial_num: usize, record: &TrialRecord) -> Result<()> {
        self.0.lock().unwrap().records.push(record.clone());
        Ok(())
    }

    fn on_session_end(&mut self) -> Result<()> {
        self.0.lock().unwrap().sessions_ended += 1;
        Ok(())
    }
}

fn learning_agent(seed: u64) -> LearningAgent {
    let config = AgentConfig::new()
        .with_learning(true)
        .with_epsilon(1.0)
        .with_alpha(0.5)
        .with_seed(seed);
    LearningAgent::new(config, &Action::ALL).unwrap()
}

#[test]
fn training_stops_once_epsilon_falls_below_the_tolerance() {
    let mut env = ScriptedEnvironment::new(Percept::clear(Light::Green), 1.0, 3);
    let mut planner = FixedRoutePlanner::new(Some(Direction::Forward));
    let mut agent = learning_agent(5);

    let mut session = Session::new(SessionConfig {
        tolerance: 0.05,
        test_trials: 0,
        max_training_trials: Some(300),
        step_limit: Some(50),
    });
    let report = session.run(&mut agent, &mut env, &mut planner).unwrap();

    // With the default schedule from epsilon 1.0: 24 trials at 0.015, then
    // 0.025 per trial; the 48th boundary lands at 0.04, under the 0.05
    // tolerance.
    assert_eq!(report.training_trials, 48);
    assert_eq!(report.testing_trials, 0);
    assert!((report.final_epsilon - 0.04).abs() < 1e-9);
    assert_eq!(agent.params().trial_count, 48);
    assert_eq!(report.training_successes, 48);
    assert!((report.training_success_rate() - 1.0).abs() < 1e-12);

    // One fixed percept and waypoint collapse to a single encoded state.
    assert_eq!(report.states_visited, 1);
}

#[test]
fn testing_trials_run_with_rates_frozen_at_zero() {
    let mut env = ScriptedEnvironment::new(Percept::clear(Light::Green), 1.0, 2);
    let mut planner = FixedRoutePlanner::new(Some(Direction::Left));
    let mut agent = learning_agent(7);

    let mut session = Session::new(SessionConfig {
        tolerance: 0.05,
        test_trials: 4,
        max_training_trials: Some(300),
        step_limit: Some(50),
    });
    let report = session.run(&mut agent, &mut env, &mut planner).unwrap();

    assert_eq!(report.training_trials, 48);
    assert_eq!(report.testing_trials, 4);
    assert_eq!(report.trials.len(), 52);
    assert_eq!(report.final_epsilon, 0.0);
    assert_eq!(report.final_alpha, 0.0);
    // Testing boundaries never advance the trial count.
    assert_eq!(agent.params().trial_count, 48);
    assert!(agent.params().testing);
    assert_eq!(report.testing_successes, 4);

    let testing_records: Vec<_> = report.trials.iter().filter(|r| r.testing).collect();
    assert_eq!(testing_records.len(), 4);
    for record in testing_records {
        assert_eq!(record.outcome, TrialStatus::ReachedDestination);
        assert_eq!(record.steps, 2);
    }
}

#[test]
fn harness_step_limit_expires_endless_trials() {
    // Trial length far beyond the harness cap: the step limit is the only
    // terminal condition.
    let mut env = ScriptedEnvironment::new(Percept::clear(Light::Red), -0.5, 10_000);
    let mut planner = FixedRoutePlanner::new(Some(Direction::Forward));
    let mut agent = learning_agent(9);

    let mut session = Session::new(SessionConfig {
        tolerance: 0.05,
        test_trials: 0,
        max_training_trials: Some(2),
        step_limit: Some(6),
    });
    let report = session.run(&mut agent, &mut env, &mut planner).unwrap();

    assert_eq!(report.training_trials, 2);
    assert_eq!(report.training_successes, 0);
    for record in &report.trials {
        assert_eq!(record.outcome, TrialStatus::DeadlineExpired);
        assert_eq!(record.steps, 6);
        assert!((record.total_reward - 6.0 * -0.5).abs() < 1e-12);
    }
}

#[test]
fn non_learning_agent_runs_a_session_without_touching_the_table() {
    let mut env = ScriptedEnvironment::new(Percept::clear(Light::Green), 1.0, 3);
    let mut planner = FixedRoutePlanner::new(Some(Direction::Forward));
    let config = AgentConfig::new().with_seed(13);
    let mut agent = LearningAgent::new(config, &Action::ALL).unwrap();

    let mut session = Session::new(SessionConfig {
        tolerance: 0.05,
        test_trials: 2,
        max_training_trials: Some(60),
        step_limit: Some(20),
    });
    let report = session.run(&mut agent, &mut env, &mut planner).unwrap();

    assert_eq!(report.states_visited, 0);
    assert!(agent.q_table().is_empty());
    // The decay schedule runs regardless of the learning flag.
    assert_eq!(report.training_trials, 48);
}

#[test]
fn observers_see_the_full_event_sequence() {
    let events = Arc::new(Mutex::new(SessionEvents::default()));

    let mut env = ScriptedEnvironment::new(Percept::clear(Light::Green), 1.0, 3);
    let mut planner = FixedRoutePlanner::new(Some(Direction::Right));
    let mut agent = learning_agent(17);

    let mut session = Session::new(SessionConfig {
        tolerance: 0.5,
        test_trials: 2,
        max_training_trials: Some(300),
        step_limit: Some(50),
    })
    .with_observer(Box::new(RecordingObserver(Arc::clone(&events))));

    let report = session.run(&mut agent, &mut env, &mut planner).unwrap();

    let events = events.lock().unwrap();
    assert_eq!(events.sessions_started, 1);
    assert_eq!(events.sessions_ended, 1);
    assert_eq!(events.records.len(), report.trials.len());
    assert_eq!(
        events.steps,
        report.trials.iter().map(|r| r.steps).sum::<usize>()
    );

    let (training, testing): (Vec<&(usize, bool)>, Vec<&(usize, bool)>) =
        events.trial_starts.iter().partition(|(_, t)| !*t);
    assert_eq!(training.len(), report.training_trials);
    assert_eq!(testing.len(), 2);

    // Every trial boundary assigned a fresh destination.
    assert_eq!(env.destinations_assigned() as usize, report.trials.len());
    assert_eq!(planner.routed(), report.trials.len());
}
