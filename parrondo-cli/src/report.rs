use anyhow::{Context, Result};
use parrondo_game::{
    AggregateResult, GameMode, REFERENCE_RATIO_GAME_A, REFERENCE_RATIO_GAME_B,
    REFERENCE_RATIO_UNIFORM, reference_ratio,
};
use serde::Serialize;
use std::io::Write;

/// Long-run losses/wins each mode should converge to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferenceRatios {
    pub game_a: f64,
    pub game_b: f64,
    pub uniform: f64,
    /// Not a published value; solved from the chain the correlated policy induces.
    pub correlated_derived: f64,
}

impl ReferenceRatios {
    pub fn load() -> Result<Self> {
        let correlated_derived = reference_ratio(GameMode::CorrelatedSwitch)
            .context("deriving correlated reference ratio")?;
        Ok(Self {
            game_a: REFERENCE_RATIO_GAME_A,
            game_b: REFERENCE_RATIO_GAME_B,
            uniform: REFERENCE_RATIO_UNIFORM,
            correlated_derived,
        })
    }
}

#[derive(Debug, Serialize)]
struct RunReport<'a> {
    game: i64,
    result: &'a AggregateResult,
    ratio: Option<f64>,
    reference: ReferenceRatios,
}

pub fn format_ratio(ratio: Option<f64>) -> String {
    ratio.map_or_else(|| "undefined".to_string(), |r| format!("{r:.6}"))
}

pub fn write_header(out: &mut dyn Write, mode: GameMode, trials: u64) -> Result<()> {
    writeln!(out, "Running game-type {} ({})", mode.code(), mode.label())?;
    writeln!(out, "Running {trials} simulation trials")?;
    Ok(())
}

pub fn write_console(
    out: &mut dyn Write,
    result: &AggregateResult,
    reference: &ReferenceRatios,
) -> Result<()> {
    writeln!(
        out,
        "losses / wins = {}/{} = {}",
        result.losses,
        result.wins,
        format_ratio(result.ratio())
    )?;
    writeln!(
        out,
        "analytic: game0 = {:.6}, game1 = {:.6}, uniform = {:.6}",
        reference.game_a, reference.game_b, reference.uniform
    )?;
    writeln!(
        out,
        "derived: correlated = {:.6}",
        reference.correlated_derived
    )?;
    Ok(())
}

pub fn write_json(
    out: &mut dyn Write,
    result: &AggregateResult,
    reference: &ReferenceRatios,
) -> Result<()> {
    let report = RunReport {
        game: result.mode.code(),
        result,
        ratio: result.ratio(),
        reference: *reference,
    };
    let json = serde_json::to_string_pretty(&report)?;
    writeln!(out, "{json}")?;
    Ok(())
}

pub fn write_markdown(
    out: &mut dyn Write,
    result: &AggregateResult,
    reference: &ReferenceRatios,
) -> Result<()> {
    writeln!(out, "# Parrondo Simulation Results\n")?;
    writeln!(out, "- **Game type**: {} ({})", result.mode.code(), result.mode)?;
    writeln!(out, "- **Trials**: {}\n", result.trials)?;
    writeln!(out, "| Losses | Wins | Losses / Wins | Mean trial length |")?;
    writeln!(out, "|---|---|---|---|")?;
    let mean_length = result
        .mean_trial_length()
        .map_or_else(|| "undefined".to_string(), |m| format!("{m:.3}"));
    writeln!(
        out,
        "| {} | {} | {} | {} |\n",
        result.losses,
        result.wins,
        format_ratio(result.ratio()),
        mean_length
    )?;
    writeln!(out, "## Reference ratios\n")?;
    writeln!(out, "- Game A: {:.6}", reference.game_a)?;
    writeln!(out, "- Game B: {:.6}", reference.game_b)?;
    writeln!(out, "- Uniform switching: {:.6}", reference.uniform)?;
    writeln!(
        out,
        "- Correlated switching (derived): {:.6}",
        reference.correlated_derived
    )?;
    Ok(())
}
