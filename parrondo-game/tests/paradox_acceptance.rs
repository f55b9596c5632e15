use parrondo_game::{
    AggregateResult, DEFAULT_SEED, GameMode, REFERENCE_RATIO_GAME_A, REFERENCE_RATIO_GAME_B,
    REFERENCE_RATIO_UNIFORM, absorption_profile, seeded_rng, simulate,
};

const TRIALS: i64 = 100_000;
const RATIO_TOLERANCE: f64 = 0.05;
const LENGTH_TOLERANCE: f64 = 0.03;

fn run(mode: GameMode) -> AggregateResult {
    let mut rng = seeded_rng(DEFAULT_SEED);
    simulate(mode, TRIALS, &mut rng).expect("simulation runs")
}

fn ratio(result: &AggregateResult) -> f64 {
    result.ratio().expect("some trials are won")
}

fn assert_within(observed: f64, expected: f64, tolerance: f64, label: &str) {
    let drift = (observed - expected).abs() / expected;
    assert!(
        drift <= tolerance,
        "{label}: observed {observed:.4}, expected {expected:.4} (drift {drift:.4})"
    );
}

#[test]
fn game_a_alone_loses() {
    let result = run(GameMode::FixedA);
    assert_within(ratio(&result), REFERENCE_RATIO_GAME_A, RATIO_TOLERANCE, "game A");
    assert!(ratio(&result) > 1.0);
}

#[test]
fn game_b_alone_loses() {
    let result = run(GameMode::FixedB);
    assert_within(ratio(&result), REFERENCE_RATIO_GAME_B, RATIO_TOLERANCE, "game B");
    assert!(ratio(&result) > 1.0);
}

#[test]
fn uniform_switching_wins() {
    let uniform = ratio(&run(GameMode::UniformSwitch));
    assert_within(uniform, REFERENCE_RATIO_UNIFORM, RATIO_TOLERANCE, "uniform");
    assert!(uniform < 1.0);
    assert!(uniform < ratio(&run(GameMode::FixedA)));
    assert!(uniform < ratio(&run(GameMode::FixedB)));
}

#[test]
fn correlated_switching_loses_in_excess() {
    let correlated = ratio(&run(GameMode::CorrelatedSwitch));
    assert!(correlated > ratio(&run(GameMode::FixedA)));
    assert!(correlated > ratio(&run(GameMode::FixedB)));

    let derived = absorption_profile(GameMode::CorrelatedSwitch)
        .expect("chain solves")
        .loss_win_ratio();
    assert_within(correlated, derived, RATIO_TOLERANCE, "correlated");
}

#[test]
fn mean_trial_length_tracks_expected_steps() {
    for mode in GameMode::ALL {
        let result = run(mode);
        let expected = absorption_profile(mode)
            .expect("chain solves")
            .initial_expected_steps();
        let observed = result.mean_trial_length().expect("trials ran");
        assert_within(observed, expected, LENGTH_TOLERANCE, &format!("{mode} length"));
    }
}
