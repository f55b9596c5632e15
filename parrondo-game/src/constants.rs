//! Centralized model constants for the stochastic-game engine.
//!
//! The state space, seed and reference values are fixed by the model and only
//! change through reviewed code, never through runtime input.

// State space ---------------------------------------------------------------
pub const NUM_STATES: usize = 5;
pub const LOSE_STATE: usize = 0;
pub const WIN_STATE: usize = NUM_STATES - 1;
pub const INITIAL_STATE: usize = 2;

// Randomness ----------------------------------------------------------------
pub const DEFAULT_SEED: u64 = 2358;

// Walker limits -------------------------------------------------------------
/// Default step cap applied by `run_trial`; far beyond any realistic trial.
pub const MAX_TRIAL_STEPS: u64 = 1_000_000;

// Validation ----------------------------------------------------------------
pub const STOCHASTIC_TOLERANCE: f64 = 1e-9;

// Published reference values -------------------------------------------------
pub const REFERENCE_RATIO_GAME_A: f64 = 20.0 / 16.0;
pub const REFERENCE_RATIO_GAME_B: f64 = 20.0 / 16.0;
pub const REFERENCE_RATIO_UNIFORM: f64 = 81.0 / 100.0;
