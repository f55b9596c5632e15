use std::process::{Command, Output};

fn run_cli(args: &[&str]) -> Output {
    let exe = env!("CARGO_BIN_EXE_parrondo");
    Command::new(exe).args(args).output().expect("run cli")
}

#[test]
fn cli_reports_counts_and_references() {
    let output = run_cli(&["2", "500"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Running game-type 2 (uniform switching)"));
    assert!(stdout.contains("Running 500 simulation trials"));
    assert!(stdout.contains("losses / wins = "));
    assert!(stdout.contains("analytic: game0 = 1.250000, game1 = 1.250000, uniform = 0.810000"));
}

#[test]
fn cli_output_is_reproducible() {
    let first = run_cli(&["3", "1000"]);
    let second = run_cli(&["3", "1000"]);
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn cli_handles_zero_trials() {
    let output = run_cli(&["0", "0"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("losses / wins = 0/0 = undefined"));
}

#[test]
fn cli_rejects_unknown_game() {
    let output = run_cli(&["5", "100"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid game mode 5"));
    assert!(stderr.contains("usage: parrondo"));
}

#[test]
fn cli_rejects_negative_trials() {
    let output = run_cli(&["1", "-1"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("must be non-negative"));
}

#[test]
fn cli_rejects_wrong_argument_count() {
    for args in [&["2"][..], &["2", "10", "7"][..], &[][..]] {
        let output = run_cli(args);
        assert_eq!(output.status.code(), Some(1), "args {args:?}");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("usage: parrondo"));
    }
}

#[test]
fn cli_emits_json_report() {
    let output = run_cli(&["1", "200", "--report", "json"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"correlated_derived\""));
    assert!(stdout.contains("\"wins\""));
}
