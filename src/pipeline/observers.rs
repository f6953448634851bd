//! Session observers: progress reporting and in-memory metrics.

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    Result,
    pipeline::session::TrialRecord,
    ports::{Observer, TrialStatus},
};

/// Progress bar observer - shows session progress
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    reached: usize,
    expired: usize,
}

impl ProgressObserver {
    /// Create a new progress observer
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            reached: 0,
            expired: 0,
        }
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_session_start(&mut self, planned_trials: Option<usize>) -> Result<()> {
        let pb = match planned_trials {
            Some(total) => {
                let pb = ProgressBar::new(total as u64);
                pb.set_style(
                    ProgressStyle::default_bar()
                        .template(
                            "[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} trials ({msg})",
                        )
                        .map_err(|e| crate::Error::ProgressBarTemplate {
                            message: e.to_string(),
                        })?
                        .progress_chars("=>-"),
                );
                pb
            }
            None => ProgressBar::new_spinner(),
        };
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_trial_end(&mut self, trial_num: usize, record: &TrialRecord) -> Result<()> {
        match record.outcome {
            TrialStatus::ReachedDestination => self.reached += 1,
            TrialStatus::DeadlineExpired => self.expired += 1,
            TrialStatus::InProgress => {}
        }

        if let Some(pb) = &self.progress_bar {
            pb.set_position(trial_num as u64 + 1);
            pb.set_message(format!("reached:{} expired:{}", self.reached, self.expired));
        }
        Ok(())
    }

    fn on_session_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(format!(
                "reached:{} expired:{}",
                self.reached, self.expired
            ));
        }
        Ok(())
    }
}

/// Metrics observer - keeps per-trial records in memory
pub struct MetricsObserver {
    records: Vec<TrialRecord>,
}

impl MetricsObserver {
    /// Create a new metrics observer
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// All trial records collected so far, in play order.
    pub fn records(&self) -> &[TrialRecord] {
        &self.records
    }

    /// Trials that reached their destination.
    pub fn reached_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.outcome == TrialStatus::ReachedDestination)
            .count()
    }

    /// Mean total reward per trial, or zero before any trial completes.
    pub fn mean_reward(&self) -> f64 {
        if self.records.is_empty() {
            return 0.0;
        }
        let total: f64 = self.records.iter().map(|r| r.total_reward).sum();
        total / self.records.len() as f64
    }
}

impl Default for MetricsObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for MetricsObserver {
    fn on_trial_end(&mut self, _trial_num: usize, record: &TrialRecord) -> Result<()> {
        self.records.push(record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(outcome: TrialStatus, total_reward: f64) -> TrialRecord {
        TrialRecord {
            trial_num: 0,
            testing: false,
            steps: 4,
            total_reward,
            outcome,
        }
    }

    #[test]
    fn metrics_observer_tallies_outcomes() {
        let mut observer = MetricsObserver::new();
        observer
            .on_trial_end(0, &record(TrialStatus::ReachedDestination, 2.0))
            .unwrap();
        observer
            .on_trial_end(1, &record(TrialStatus::DeadlineExpired, -1.0))
            .unwrap();

        assert_eq!(observer.records().len(), 2);
        assert_eq!(observer.reached_count(), 1);
        assert_eq!(observer.mean_reward(), 0.5);
    }

    #[test]
    fn metrics_observer_is_empty_safe() {
        let observer = MetricsObserver::new();
        assert_eq!(observer.mean_reward(), 0.0);
        assert_eq!(observer.reached_count(), 0);
    }
}
