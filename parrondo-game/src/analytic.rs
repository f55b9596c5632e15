//! Exact absorption analysis for each game mode.
//!
//! Each mode acts on a state like a fixed mixture of A and B, weighted by the
//! probability that the selector picks B there. Solving the transient block of
//! that mixed chain gives win probabilities and expected trial lengths without
//! any sampling. The correlated mode's reference ratio is derived here rather
//! than quoted.
use serde::{Deserialize, Serialize};

use crate::constants::{INITIAL_STATE, LOSE_STATE, NUM_STATES, WIN_STATE};
use crate::error::{Result, SimulationError};
use crate::matrix::{GAME_A, GAME_B, Row, TransitionMatrix};
use crate::mode::GameMode;
use crate::selector::order_parameter;

const TRANSIENT: usize = NUM_STATES - 2;
const PIVOT_EPSILON: f64 = 1e-12;

/// Exact probability that the selector picks game B at `state`.
///
/// For the correlated mode B is chosen when φ·u rounds to 1, i.e. when
/// u > 0.5 / φ, which is impossible for φ ≤ 0.5.
///
/// # Errors
///
/// Returns [`SimulationError::InvalidState`] for states outside the state space.
pub fn b_selection_probability(mode: GameMode, state: usize) -> Result<f64> {
    if state > WIN_STATE {
        return Err(SimulationError::InvalidState(state));
    }
    let probability = match mode {
        GameMode::FixedA => 0.0,
        GameMode::FixedB => 1.0,
        GameMode::UniformSwitch => 0.5,
        GameMode::CorrelatedSwitch => {
            let phi = order_parameter(state);
            if phi > 0.5 { 1.0 - 0.5 / phi } else { 0.0 }
        }
    };
    Ok(probability)
}

/// Single-step transition matrix a mode induces.
///
/// # Errors
///
/// Propagates [`b_selection_probability`] failures.
pub fn effective_matrix(mode: GameMode) -> Result<TransitionMatrix> {
    let mut rows = [[0.0; NUM_STATES]; NUM_STATES];
    for (state, row) in rows.iter_mut().enumerate() {
        let p_b = b_selection_probability(mode, state)?;
        let a = GAME_A.row(state)?;
        let b = GAME_B.row(state)?;
        for (next, cell) in row.iter_mut().enumerate() {
            *cell = (1.0 - p_b) * a[next] + p_b * b[next];
        }
    }
    Ok(TransitionMatrix::new(rows))
}

/// Win probability and expected transitions to absorption from every state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AbsorptionProfile {
    pub mode: GameMode,
    pub win_probability: [f64; NUM_STATES],
    pub expected_steps: [f64; NUM_STATES],
}

impl AbsorptionProfile {
    #[must_use]
    pub const fn initial_win_probability(&self) -> f64 {
        self.win_probability[INITIAL_STATE]
    }

    /// Long-run losses / wins starting from the initial state.
    #[must_use]
    pub fn loss_win_ratio(&self) -> f64 {
        let p = self.initial_win_probability();
        (1.0 - p) / p
    }

    #[must_use]
    pub const fn initial_expected_steps(&self) -> f64 {
        self.expected_steps[INITIAL_STATE]
    }
}

/// Solve the absorbing chain induced by `mode`.
///
/// # Errors
///
/// Returns [`SimulationError::InvalidParameter`] if the transient block is
/// singular, which would mean some state can never be absorbed.
pub fn absorption_profile(mode: GameMode) -> Result<AbsorptionProfile> {
    let chain = effective_matrix(mode)?;
    let rows = chain.rows();

    // (I - Q) x = rhs over the transient states 1..=3.
    let mut system = [[0.0; TRANSIENT]; TRANSIENT];
    for (i, eq) in system.iter_mut().enumerate() {
        for (j, coeff) in eq.iter_mut().enumerate() {
            let identity = if i == j { 1.0 } else { 0.0 };
            *coeff = identity - rows[i + 1][j + 1];
        }
    }
    let win_rhs = transient_column(rows, WIN_STATE);
    let step_rhs = [1.0; TRANSIENT];

    let wins = solve(system, win_rhs).ok_or_else(singular)?;
    let steps = solve(system, step_rhs).ok_or_else(singular)?;

    let mut win_probability = [0.0; NUM_STATES];
    let mut expected_steps = [0.0; NUM_STATES];
    win_probability[WIN_STATE] = 1.0;
    win_probability[LOSE_STATE] = 0.0;
    win_probability[1..=TRANSIENT].copy_from_slice(&wins);
    expected_steps[1..=TRANSIENT].copy_from_slice(&steps);

    Ok(AbsorptionProfile {
        mode,
        win_probability,
        expected_steps,
    })
}

/// Derived long-run losses / wins for `mode`.
///
/// # Errors
///
/// Propagates [`absorption_profile`] failures.
pub fn reference_ratio(mode: GameMode) -> Result<f64> {
    absorption_profile(mode).map(|profile| profile.loss_win_ratio())
}

fn transient_column(rows: &[Row; NUM_STATES], column: usize) -> [f64; TRANSIENT] {
    let mut out = [0.0; TRANSIENT];
    for (i, value) in out.iter_mut().enumerate() {
        *value = rows[i + 1][column];
    }
    out
}

fn singular() -> SimulationError {
    SimulationError::InvalidParameter {
        field: "transition matrix",
        reason: "transient block is singular".to_string(),
    }
}

/// Gaussian elimination with partial pivoting.
fn solve<const N: usize>(mut a: [[f64; N]; N], mut b: [f64; N]) -> Option<[f64; N]> {
    for col in 0..N {
        let pivot = (col..N).max_by(|&x, &y| a[x][col].abs().total_cmp(&a[y][col].abs()))?;
        if a[pivot][col].abs() < PIVOT_EPSILON {
            return None;
        }
        a.swap(col, pivot);
        b.swap(col, pivot);
        for row in col + 1..N {
            let factor = a[row][col] / a[col][col];
            for k in col..N {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }
    let mut x = [0.0; N];
    for row in (0..N).rev() {
        let tail: f64 = (row + 1..N).map(|k| a[row][k] * x[k]).sum();
        x[row] = (b[row] - tail) / a[row][row];
    }
    Some(x)
}
