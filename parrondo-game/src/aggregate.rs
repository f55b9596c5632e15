//! Trial aggregation: many independent walks tallied into win/loss counters.
use log::{debug, trace};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SEED, MAX_TRIAL_STEPS};
use crate::error::{Result, SimulationError};
use crate::mode::GameMode;
use crate::numbers::u64_to_f64;
use crate::rng::seeded_rng;
use crate::walker::{TrialOutcome, TrialRecord, run_trial_with_cap};

/// Configuration for a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub mode: GameMode,
    pub trials: u64,
    pub seed: u64,
    pub max_steps_per_trial: u64,
}

impl SimulationConfig {
    #[must_use]
    pub const fn new(mode: GameMode, trials: u64) -> Self {
        Self {
            mode,
            trials,
            seed: DEFAULT_SEED,
            max_steps_per_trial: MAX_TRIAL_STEPS,
        }
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub const fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.max_steps_per_trial = max_steps;
        self
    }

    /// Check that the configuration can run.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidConfig`] when the step cap is zero.
    pub fn validate(&self) -> Result<()> {
        if self.max_steps_per_trial == 0 {
            return Err(SimulationError::InvalidConfig(
                "max_steps_per_trial must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Win/loss tally over a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateResult {
    pub mode: GameMode,
    pub trials: u64,
    pub wins: u64,
    pub losses: u64,
    /// Transitions summed over every trial.
    pub transitions: u64,
    pub longest_trial: u64,
}

impl AggregateResult {
    #[must_use]
    pub const fn empty(mode: GameMode) -> Self {
        Self {
            mode,
            trials: 0,
            wins: 0,
            losses: 0,
            transitions: 0,
            longest_trial: 0,
        }
    }

    pub fn record(&mut self, record: TrialRecord) {
        self.trials += 1;
        match record.outcome {
            TrialOutcome::Win => self.wins += 1,
            TrialOutcome::Lose => self.losses += 1,
        }
        self.transitions += record.steps;
        self.longest_trial = self.longest_trial.max(record.steps);
    }

    /// losses / wins, or `None` when there are no wins to divide by.
    #[must_use]
    pub fn ratio(&self) -> Option<f64> {
        (self.wins > 0).then(|| u64_to_f64(self.losses) / u64_to_f64(self.wins))
    }

    #[must_use]
    pub fn win_rate(&self) -> Option<f64> {
        (self.trials > 0).then(|| u64_to_f64(self.wins) / u64_to_f64(self.trials))
    }

    #[must_use]
    pub fn mean_trial_length(&self) -> Option<f64> {
        (self.trials > 0).then(|| u64_to_f64(self.transitions) / u64_to_f64(self.trials))
    }
}

/// Run `num_trials` independent trials under the default step cap.
///
/// # Errors
///
/// Returns [`SimulationError::InvalidParameter`] for a negative trial count,
/// before any draw is consumed, and propagates walker failures.
pub fn simulate<R: Rng + ?Sized>(
    mode: GameMode,
    num_trials: i64,
    rng: &mut R,
) -> Result<AggregateResult> {
    let trials = u64::try_from(num_trials).map_err(|_| SimulationError::InvalidParameter {
        field: "num_trials",
        reason: format!("must be non-negative (got {num_trials})"),
    })?;
    simulate_with_cap(mode, trials, MAX_TRIAL_STEPS, rng)
}

/// Run `trials` trials, each limited to `max_steps` transitions.
///
/// # Errors
///
/// Propagates the first walker failure.
pub fn simulate_with_cap<R: Rng + ?Sized>(
    mode: GameMode,
    trials: u64,
    max_steps: u64,
    rng: &mut R,
) -> Result<AggregateResult> {
    debug!("simulating {trials} trials of {mode}");
    let mut result = AggregateResult::empty(mode);
    for trial in 0..trials {
        let record = run_trial_with_cap(mode, rng, max_steps)?;
        trace!(
            "trial {trial}: {} after {} steps",
            record.outcome, record.steps
        );
        result.record(record);
    }
    debug!(
        "finished {mode}: {} losses / {} wins over {} transitions",
        result.losses, result.wins, result.transitions
    );
    Ok(result)
}

/// Seed a fresh stream from `config` and run it.
///
/// # Errors
///
/// Returns config validation failures and walker failures.
pub fn run_simulation(config: &SimulationConfig) -> Result<AggregateResult> {
    config.validate()?;
    let mut rng = seeded_rng(config.seed);
    simulate_with_cap(
        config.mode,
        config.trials,
        config.max_steps_per_trial,
        &mut rng,
    )
}
