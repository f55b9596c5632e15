//! Parrondo Game Engine
//!
//! Markov-chain simulation of Astumian's stochastic games. Two individually
//! losing games over a five-state chain win on average when alternated at
//! random, and lose even harder when the alternation is biased by the current
//! state. This crate holds the matrices, the switching policy, the walker and
//! the trial aggregator, plus an exact analytic reference for each mode.
//!
//! Every component that needs randomness takes the generator as an explicit
//! `&mut R`; a run is reproducible from its seed and draw order alone.

pub mod aggregate;
pub mod analytic;
pub mod constants;
pub mod error;
pub mod matrix;
pub mod mode;
pub mod numbers;
pub mod rng;
pub mod selector;
pub mod walker;

// Re-export commonly used types
pub use aggregate::{
    AggregateResult, SimulationConfig, run_simulation, simulate, simulate_with_cap,
};
pub use analytic::{
    AbsorptionProfile, absorption_profile, b_selection_probability, effective_matrix,
    reference_ratio,
};
pub use constants::{
    DEFAULT_SEED, INITIAL_STATE, LOSE_STATE, MAX_TRIAL_STEPS, NUM_STATES, REFERENCE_RATIO_GAME_A,
    REFERENCE_RATIO_GAME_B, REFERENCE_RATIO_UNIFORM, WIN_STATE,
};
pub use error::{Result, SimulationError};
pub use matrix::{
    GAME_A, GAME_B, GameId, TransitionMatrix, is_absorbing, matrix, matrix_by_index,
    validate_registry,
};
pub use mode::GameMode;
pub use rng::{CountingRng, seeded_rng};
pub use selector::{order_parameter, select_game};
pub use walker::{TrialOutcome, TrialRecord, run_trial, run_trial_with_cap, sample_next_state};
