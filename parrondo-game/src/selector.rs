//! Game-selector policy.
//!
//! Switching modes collapse a continuous draw to a game index by rounding
//! half-to-even, never by comparing against a threshold.
use rand::Rng;

use crate::constants::{NUM_STATES, WIN_STATE};
use crate::error::{Result, SimulationError};
use crate::matrix::GameId;
use crate::mode::GameMode;
use crate::numbers::{round_to_i64, usize_to_f64};

/// Order parameter φ = state / 4.
#[must_use]
pub fn order_parameter(state: usize) -> f64 {
    usize_to_f64(state) / usize_to_f64(NUM_STATES - 1)
}

/// Pick the game for the next transition out of `state`.
///
/// Fixed modes never touch `rng`; switching modes consume exactly one draw.
///
/// # Errors
///
/// Returns [`SimulationError::InvalidState`] when `state` is outside the state
/// space. No draw is consumed in that case.
pub fn select_game<R: Rng + ?Sized>(mode: GameMode, state: usize, rng: &mut R) -> Result<GameId> {
    if state > WIN_STATE {
        return Err(SimulationError::InvalidState(state));
    }
    match mode {
        GameMode::FixedA => Ok(GameId::A),
        GameMode::FixedB => Ok(GameId::B),
        GameMode::UniformSwitch => game_from_rounded(rng.r#gen::<f64>()),
        GameMode::CorrelatedSwitch => {
            let phi = order_parameter(state);
            game_from_rounded(phi * rng.r#gen::<f64>())
        }
    }
}

fn game_from_rounded(value: f64) -> Result<GameId> {
    match round_to_i64(value) {
        Some(0) => Ok(GameId::A),
        Some(1) => Ok(GameId::B),
        _ => Err(SimulationError::InvalidParameter {
            field: "selection draw",
            reason: format!("{value} does not round to a game index"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{INITIAL_STATE, LOSE_STATE};
    use crate::rng::ScriptedRng;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    const SAMPLE_SIZE: u32 = 20_000;
    const TOLERANCE: f64 = 0.02;

    fn b_frequency(mode: GameMode, state: usize, seed: u64) -> f64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut picked_b = 0_u32;
        for _ in 0..SAMPLE_SIZE {
            if select_game(mode, state, &mut rng).unwrap() == GameId::B {
                picked_b += 1;
            }
        }
        f64::from(picked_b) / f64::from(SAMPLE_SIZE)
    }

    #[test]
    fn fixed_modes_consume_no_draws() {
        let mut rng = ScriptedRng::new(&[]);
        assert_eq!(select_game(GameMode::FixedA, 2, &mut rng).unwrap(), GameId::A);
        assert_eq!(select_game(GameMode::FixedB, 3, &mut rng).unwrap(), GameId::B);
        assert_eq!(rng.calls, 0);
    }

    #[test]
    fn switching_modes_consume_one_draw() {
        let mut rng = ScriptedRng::new(&[0.75, 0.25]);
        assert_eq!(
            select_game(GameMode::UniformSwitch, INITIAL_STATE, &mut rng).unwrap(),
            GameId::B
        );
        assert_eq!(rng.calls, 1);
        assert_eq!(
            select_game(GameMode::CorrelatedSwitch, 3, &mut rng).unwrap(),
            GameId::A
        );
        assert_eq!(rng.calls, 2);
    }

    #[test]
    fn uniform_midpoint_rounds_to_even() {
        let mut rng = ScriptedRng::new(&[0.5]);
        assert_eq!(
            select_game(GameMode::UniformSwitch, INITIAL_STATE, &mut rng).unwrap(),
            GameId::A
        );
    }

    #[test]
    fn correlated_scales_draw_by_order_parameter() {
        // 0.75 * 0.875 = 0.65625 rounds to 1; 0.75 * 0.625 = 0.46875 rounds to 0.
        let mut rng = ScriptedRng::new(&[0.875, 0.625]);
        assert_eq!(
            select_game(GameMode::CorrelatedSwitch, 3, &mut rng).unwrap(),
            GameId::B
        );
        assert_eq!(
            select_game(GameMode::CorrelatedSwitch, 3, &mut rng).unwrap(),
            GameId::A
        );
    }

    #[test]
    fn correlated_never_picks_b_at_or_below_midpoint() {
        for state in [LOSE_STATE, 1, INITIAL_STATE] {
            assert!(
                b_frequency(GameMode::CorrelatedSwitch, state, 0xC0FFEE).abs() < f64::EPSILON,
                "state {state} should always select A"
            );
        }
    }

    #[test]
    fn correlated_bias_at_upper_transient_state() {
        let observed = b_frequency(GameMode::CorrelatedSwitch, 3, 0xBEEF);
        let expected = 1.0 - 0.5 / order_parameter(3);
        assert!(
            (observed - expected).abs() <= TOLERANCE,
            "correlated B frequency drifted: observed {observed:.4}, expected {expected:.4}"
        );
        let uniform = b_frequency(GameMode::UniformSwitch, 3, 0xBEEF);
        assert!((uniform - 0.5).abs() <= TOLERANCE);
        assert!(observed < uniform);
    }

    #[test]
    fn out_of_range_state_is_rejected_without_drawing() {
        let mut rng = ScriptedRng::new(&[]);
        assert_eq!(
            select_game(GameMode::UniformSwitch, NUM_STATES, &mut rng).unwrap_err(),
            SimulationError::InvalidState(NUM_STATES)
        );
        assert_eq!(rng.calls, 0);
    }

    #[test]
    fn order_parameter_spans_unit_interval() {
        assert!(order_parameter(LOSE_STATE).abs() < f64::EPSILON);
        assert!((order_parameter(INITIAL_STATE) - 0.5).abs() < f64::EPSILON);
        assert!((order_parameter(WIN_STATE) - 1.0).abs() < f64::EPSILON);
    }
}
