//! Single-throw catch probability command.

use anyhow::Result;
use clap::Parser;
use compendium_content::Compendium;
use compendium_core::{
    CaptureDevice, CatchAttempt, CatchBreakdown, CatchOutcome, CatchTables, EncounterContext,
    SpecialDevice, Target, explain_catch,
};
use console::style;
use serde::Serialize;

use super::args::{EncounterArgs, TargetArgs};
use crate::config::CliConfig;

/// Estimate the chance that one throw captures the target
#[derive(Parser, Debug)]
pub struct Catch {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Capture device name
    #[arg(short, long, default_value = EncounterContext::DEFAULT_BALL)]
    pub ball: String,

    #[command(flatten)]
    pub encounter: EncounterArgs,

    /// Show the intermediate values
    #[arg(long)]
    pub explain: bool,

    /// Print the full breakdown as JSON
    #[arg(long, conflicts_with = "explain")]
    pub json: bool,
}

#[derive(Serialize)]
struct CatchReport<'a> {
    target: Option<&'a Target>,
    encounter: &'a EncounterContext,
    #[serde(flatten)]
    breakdown: &'a CatchBreakdown,
}

impl Catch {
    pub fn execute(self, content: &Compendium, config: &CliConfig) -> Result<()> {
        let target = self.target.resolve(&content.species)?;
        let encounter = self.encounter.encounter(&self.ball);

        if is_unknown_ball(&content.tables, &self.ball) {
            tracing::warn!("Unknown ball '{}', using a neutral multiplier", self.ball);
        }
        if !content.tables.statuses.contains(&encounter.status_condition) {
            tracing::warn!(
                "Unknown status '{}', using a neutral multiplier",
                encounter.status_condition
            );
        }

        let attempt = CatchAttempt::new(target.clone(), encounter);
        let breakdown = explain_catch(&attempt, &content.tables);
        tracing::debug!(?breakdown, "Catch calculated");

        if self.json {
            println!("{}", render_json(&attempt, &breakdown)?);
            return Ok(());
        }

        println!(
            "{} with {}: {}",
            style(&target.name).cyan().bold(),
            attempt.encounter.ball_type,
            style(config.percent(breakdown.probability)).green().bold()
        );

        if self.explain {
            for line in breakdown_lines(&breakdown, config) {
                println!("  {}", line);
            }
        }

        Ok(())
    }
}

/// True when the name has neither a table row nor an encounter-dependent rule.
fn is_unknown_ball(tables: &CatchTables, ball: &str) -> bool {
    !tables.balls.contains(ball) && ball.parse::<SpecialDevice>().is_err()
}

fn render_json(attempt: &CatchAttempt, breakdown: &CatchBreakdown) -> Result<String> {
    let report = CatchReport {
        target: attempt.target.as_ref(),
        encounter: &attempt.encounter,
        breakdown,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

fn breakdown_lines(breakdown: &CatchBreakdown, config: &CliConfig) -> Vec<String> {
    let mut lines = Vec::with_capacity(6);
    if let Some(device) = breakdown.device {
        lines.push(format!("device:      {}", describe_device(device)));
    }
    lines.push(format!("ball:        x{}", breakdown.ball_multiplier));
    lines.push(format!("status:      x{}", breakdown.status_multiplier));
    lines.push(match breakdown.catch_value {
        Some(x) => format!("catch value: {:.3}", x),
        None => "catch value: -".to_string(),
    });
    lines.push(format!("outcome:     {}", describe_outcome(breakdown.outcome)));
    lines.push(format!("probability: {}", config.percent(breakdown.probability)));
    lines
}

fn describe_device(device: CaptureDevice) -> String {
    match device {
        CaptureDevice::Standard { multiplier } => format!("flat x{}", multiplier),
        CaptureDevice::Dream { turns } => format!("Dream Ball, asleep {} turn(s)", turns),
        CaptureDevice::Nest { level } => format!("Nest Ball, level {}", level),
        CaptureDevice::Timer { turns } => format!("Timer Ball, turn {}", turns),
        CaptureDevice::Repeat { captures } => format!("Repeat Ball, {} prior capture(s)", captures),
        CaptureDevice::Quick { turns, base_rate } => {
            format!("Quick Ball, turn {}, catch rate {}", turns, base_rate)
        }
    }
}

fn describe_outcome(outcome: CatchOutcome) -> &'static str {
    match outcome {
        CatchOutcome::NoTarget => "no target",
        CatchOutcome::Guaranteed => "guaranteed capture",
        CatchOutcome::Saturated => "certain (catch value above 255)",
        CatchOutcome::Impossible => "impossible (catch value not positive)",
        CatchOutcome::Chance => "chance",
    }
}
