//! Compare every ball in the table for one encounter.

use anyhow::Result;
use clap::Parser;
use compendium_content::Compendium;
use compendium_core::{CatchAttempt, CatchTables, Target, compute_catch_probability};
use console::style;
use serde::Serialize;

use super::args::{EncounterArgs, TargetArgs};
use crate::config::CliConfig;

/// Rank all known balls for the same target and encounter
#[derive(Parser, Debug)]
pub struct Compare {
    #[command(flatten)]
    pub target: TargetArgs,

    #[command(flatten)]
    pub encounter: EncounterArgs,

    /// Only show the best N balls
    #[arg(short = 'n', long)]
    pub top: Option<usize>,

    /// Print the ranking as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BallRanking {
    pub ball: String,
    pub probability: f64,
}

impl Compare {
    pub fn execute(self, content: &Compendium, config: &CliConfig) -> Result<()> {
        let target = self.target.resolve(&content.species)?;
        let mut ranking = rank_balls(&target, &self.encounter, &content.tables);
        if let Some(top) = self.top {
            ranking.truncate(top);
        }

        if self.json {
            println!("{}", serde_json::to_string_pretty(&ranking)?);
            return Ok(());
        }

        println!(
            "{} (catch rate {})",
            style(&target.name).cyan().bold(),
            target.base_catch_rate
        );
        let width = ranking.iter().map(|r| r.ball.len()).max().unwrap_or(0);
        for entry in &ranking {
            println!(
                "  {:<width$}  {:>9}",
                entry.ball,
                config.percent(entry.probability),
                width = width
            );
        }

        Ok(())
    }
}

/// Probability for every ball in the table, best first; ties keep name order.
pub fn rank_balls(target: &Target, args: &EncounterArgs, tables: &CatchTables) -> Vec<BallRanking> {
    let mut ranking: Vec<BallRanking> = tables
        .balls
        .names()
        .map(|ball| {
            let attempt = CatchAttempt::new(target.clone(), args.encounter(ball));
            BallRanking {
                ball: ball.to_string(),
                probability: compute_catch_probability(&attempt, tables),
            }
        })
        .collect();

    ranking.sort_by(|a, b| {
        b.probability
            .total_cmp(&a.probability)
            .then_with(|| a.ball.cmp(&b.ball))
    });
    ranking
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encounter() -> EncounterArgs {
        EncounterArgs {
            hp: 100.0,
            status: "None".into(),
            level: 30,
            turns: 1,
            dream_turns: 0,
            repeat_captures: 0,
        }
    }

    #[test]
    fn master_ball_ranks_first() {
        let ranking = rank_balls(
            &Target::new("Mewtwo", 3),
            &encounter(),
            &CatchTables::standard(),
        );

        assert_eq!(ranking[0].ball, "Master Ball");
        assert_eq!(ranking[0].probability, 100.0);
        assert_eq!(ranking.last().unwrap().ball, "Beast Ball");
        assert_eq!(ranking.len(), CatchTables::standard().balls.len());
    }

    #[test]
    fn ties_are_ordered_by_name() {
        let ranking = rank_balls(
            &Target::new("Rattata", 255),
            &encounter(),
            &CatchTables::standard(),
        );
        let certain: Vec<&str> = ranking
            .iter()
            .take_while(|r| r.probability == 100.0)
            .map(|r| r.ball.as_str())
            .collect();

        let mut sorted = certain.clone();
        sorted.sort();
        assert_eq!(certain, sorted);
        assert!(certain.contains(&"Quick Ball"));
    }
}
