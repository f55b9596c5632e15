//! Transition-matrix registry for the two Astumian games.
//!
//! Both matrices are compile-time constants. Row index is the current state,
//! column index the next state. Rows for the absorbing states are all zero and
//! must never be sampled; the walker stops before it would reach them.
use serde::{Deserialize, Serialize};

use crate::constants::{LOSE_STATE, NUM_STATES, STOCHASTIC_TOLERANCE, WIN_STATE};
use crate::error::{Result, SimulationError};

/// One row of transition probabilities.
pub type Row = [f64; NUM_STATES];

/// Identifies which game's matrix governs a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameId {
    A,
    B,
}

impl GameId {
    pub const ALL: [Self; 2] = [Self::A, Self::B];

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
        }
    }
}

impl TryFrom<usize> for GameId {
    type Error = SimulationError;

    fn try_from(value: usize) -> Result<Self> {
        match value {
            0 => Ok(Self::A),
            1 => Ok(Self::B),
            other => Err(SimulationError::InvalidGameId(other)),
        }
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
        }
    }
}

/// Fixed-size row-stochastic transition table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionMatrix {
    rows: [Row; NUM_STATES],
}

const ABSORBING: Row = [0.0; NUM_STATES];

pub const GAME_A: TransitionMatrix = TransitionMatrix::new([
    ABSORBING,
    [4.0 / 36.0, 24.0 / 36.0, 8.0 / 36.0, 0.0, 0.0],
    [0.0, 5.0 / 36.0, 29.0 / 36.0, 2.0 / 36.0, 0.0],
    [0.0, 0.0, 4.0 / 36.0, 24.0 / 36.0, 8.0 / 36.0],
    ABSORBING,
]);

pub const GAME_B: TransitionMatrix = TransitionMatrix::new([
    ABSORBING,
    [5.0 / 36.0, 29.0 / 36.0, 2.0 / 36.0, 0.0, 0.0],
    [0.0, 4.0 / 36.0, 24.0 / 36.0, 8.0 / 36.0, 0.0],
    [0.0, 0.0, 5.0 / 36.0, 29.0 / 36.0, 2.0 / 36.0],
    ABSORBING,
]);

impl TransitionMatrix {
    #[must_use]
    pub const fn new(rows: [Row; NUM_STATES]) -> Self {
        Self { rows }
    }

    /// Transition row for `state`.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidState`] when `state` is outside the state space.
    pub fn row(&self, state: usize) -> Result<&Row> {
        self.rows
            .get(state)
            .ok_or(SimulationError::InvalidState(state))
    }

    #[must_use]
    pub const fn rows(&self) -> &[Row; NUM_STATES] {
        &self.rows
    }

    /// Check non-negativity and the row-sum invariant.
    ///
    /// Transient rows must sum to 1 within [`STOCHASTIC_TOLERANCE`]; absorbing
    /// rows must sum to 0.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant, tagged with `game`.
    pub fn validate(&self, game: GameId) -> Result<()> {
        for (state, row) in self.rows.iter().enumerate() {
            if let Some((next, &value)) = row.iter().enumerate().find(|(_, p)| **p < 0.0) {
                return Err(SimulationError::NegativeEntry {
                    game,
                    state,
                    next,
                    value,
                });
            }
            let expected = if is_absorbing(state) { 0.0 } else { 1.0 };
            let sum: f64 = row.iter().sum();
            if (sum - expected).abs() > STOCHASTIC_TOLERANCE {
                return Err(SimulationError::NonStochasticRow {
                    game,
                    state,
                    sum,
                    expected,
                });
            }
        }
        Ok(())
    }
}

/// Whether a trial ends on reaching `state`.
#[must_use]
pub const fn is_absorbing(state: usize) -> bool {
    state == LOSE_STATE || state == WIN_STATE
}

/// Matrix for a game.
#[must_use]
pub fn matrix(game: GameId) -> &'static TransitionMatrix {
    match game {
        GameId::A => &GAME_A,
        GameId::B => &GAME_B,
    }
}

/// Matrix for a raw game index (0 = A, 1 = B).
///
/// # Errors
///
/// Returns [`SimulationError::InvalidGameId`] for any other index.
pub fn matrix_by_index(index: usize) -> Result<&'static TransitionMatrix> {
    GameId::try_from(index).map(matrix)
}

/// Validate every registered matrix.
///
/// # Errors
///
/// Returns the first invariant violation found.
pub fn validate_registry() -> Result<()> {
    GameId::ALL
        .iter()
        .try_for_each(|&game| matrix(game).validate(game))
}
