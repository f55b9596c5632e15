//! Error taxonomy for the simulation engine.
use thiserror::Error;

use crate::matrix::GameId;

/// Errors raised by the registry, selector, walker and aggregator.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimulationError {
    #[error("{field} is invalid: {reason}")]
    InvalidParameter {
        field: &'static str,
        reason: String,
    },
    #[error("invalid game mode {0}, expected 0, 1, 2 or 3")]
    InvalidGameMode(i64),
    #[error("invalid game id {0}, expected 0 (A) or 1 (B)")]
    InvalidGameId(usize),
    #[error("state {0} is outside the model's state space")]
    InvalidState(usize),
    #[error("trial did not reach an absorbing state within {steps} steps")]
    NonAbsorbingTrial { steps: u64 },
    #[error("game {game} row {state} sums to {sum}, expected {expected}")]
    NonStochasticRow {
        game: GameId,
        state: usize,
        sum: f64,
        expected: f64,
    },
    #[error("game {game} entry [{state}][{next}] is negative ({value})")]
    NegativeEntry {
        game: GameId,
        state: usize,
        next: usize,
        value: f64,
    },
    #[error("simulation config invalid: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, SimulationError>;
