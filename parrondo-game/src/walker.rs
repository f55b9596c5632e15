//! Stochastic walker: one trial from the initial state to absorption.
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{INITIAL_STATE, LOSE_STATE, MAX_TRIAL_STEPS, WIN_STATE};
use crate::error::{Result, SimulationError};
use crate::matrix::{Row, matrix};
use crate::mode::GameMode;
use crate::selector::select_game;

/// How a trial ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrialOutcome {
    Win,
    Lose,
}

impl std::fmt::Display for TrialOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Win => write!(f, "win"),
            Self::Lose => write!(f, "lose"),
        }
    }
}

/// Outcome of a trial plus the number of transitions it took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialRecord {
    pub outcome: TrialOutcome,
    pub steps: u64,
}

/// Inverse-CDF sampling over one row.
///
/// Returns the first column whose running cumulant strictly exceeds `r`. If
/// rounding leaves `r` at or above the final cumulant, the last column with
/// positive probability is used. Returns `None` for an all-zero row.
#[must_use]
pub fn sample_next_state(row: &Row, r: f64) -> Option<usize> {
    let mut cumulant = 0.0;
    for (next, &probability) in row.iter().enumerate() {
        cumulant += probability;
        if r < cumulant {
            return Some(next);
        }
    }
    row.iter().rposition(|&p| p > 0.0)
}

/// Run one trial under the default step cap.
///
/// # Errors
///
/// Returns [`SimulationError::NonAbsorbingTrial`] if the walk exceeds
/// [`MAX_TRIAL_STEPS`] transitions.
pub fn run_trial<R: Rng + ?Sized>(mode: GameMode, rng: &mut R) -> Result<TrialOutcome> {
    run_trial_with_cap(mode, rng, MAX_TRIAL_STEPS).map(|record| record.outcome)
}

/// Run one trial, failing once more than `max_steps` transitions were needed.
///
/// Per step the selector runs first (drawing only in switching modes), then
/// exactly one draw picks the next state. Absorption is checked right after
/// each transition so the absorbing rows are never sampled.
///
/// # Errors
///
/// Returns [`SimulationError::NonAbsorbingTrial`] when the cap is hit.
pub fn run_trial_with_cap<R: Rng + ?Sized>(
    mode: GameMode,
    rng: &mut R,
    max_steps: u64,
) -> Result<TrialRecord> {
    let mut state = INITIAL_STATE;
    let mut steps: u64 = 0;
    loop {
        if steps >= max_steps {
            return Err(SimulationError::NonAbsorbingTrial { steps });
        }
        let game = select_game(mode, state, rng)?;
        let row = matrix(game).row(state)?;
        let r = rng.r#gen::<f64>();
        state = sample_next_state(row, r).ok_or(SimulationError::InvalidState(state))?;
        steps += 1;

        if state == LOSE_STATE {
            return Ok(TrialRecord {
                outcome: TrialOutcome::Lose,
                steps,
            });
        }
        if state == WIN_STATE {
            return Ok(TrialRecord {
                outcome: TrialOutcome::Win,
                steps,
            });
        }
    }
}
