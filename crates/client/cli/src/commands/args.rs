//! Argument groups shared by the calculation commands.

use anyhow::{Result, anyhow};
use clap::Args;
use compendium_content::SpeciesCatalog;
use compendium_core::{EncounterContext, Target};

/// Which creature is being captured.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct TargetArgs {
    /// Species name from the catalog (case-insensitive)
    #[arg(short, long)]
    pub species: Option<String>,

    /// Base catch rate of an unlisted creature
    #[arg(short = 'r', long)]
    pub catch_rate: Option<u32>,
}

impl TargetArgs {
    pub fn resolve(&self, catalog: &SpeciesCatalog) -> Result<Target> {
        if let Some(rate) = self.catch_rate {
            return Ok(Target::new("Custom", rate));
        }

        let name = self
            .species
            .as_deref()
            .ok_or_else(|| anyhow!("either --species or --catch-rate is required"))?;

        catalog
            .find(name)
            .map(|entry| entry.target())
            .ok_or_else(|| anyhow!("unknown species '{}' (try `compendium species --search`)", name))
    }
}

/// Encounter state, excluding the ball.
#[derive(Args, Debug, Clone)]
pub struct EncounterArgs {
    /// Remaining HP of the target in percent
    #[arg(long, default_value_t = 100.0, allow_negative_numbers = true)]
    pub hp: f64,

    /// Status condition name
    #[arg(long, default_value = EncounterContext::DEFAULT_STATUS)]
    pub status: String,

    /// Level of the target
    #[arg(long, default_value_t = 1)]
    pub level: u32,

    /// Turns elapsed in the encounter (first turn is 1)
    #[arg(long, default_value_t = 1)]
    pub turns: u32,

    /// Turns the target has been asleep
    #[arg(long, default_value_t = 0)]
    pub dream_turns: u32,

    /// Prior captures of this species
    #[arg(long, default_value_t = 0)]
    pub repeat_captures: u32,
}

impl EncounterArgs {
    pub fn encounter(&self, ball: &str) -> EncounterContext {
        EncounterContext::new()
            .with_ball(ball)
            .with_hp_percentage(self.hp)
            .with_status(self.status.as_str())
            .with_level(self.level)
            .with_turns_passed(self.turns)
            .with_dream_ball_turns(self.dream_turns)
            .with_repeat_captures(self.repeat_captures)
    }
}
