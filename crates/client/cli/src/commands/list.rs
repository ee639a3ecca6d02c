//! Table and catalog listings.

use anyhow::Result;
use clap::Parser;
use compendium_content::Compendium;
use compendium_core::{MultiplierTable, SpecialDevice};
use console::style;

/// List capture devices and their multipliers
#[derive(Parser, Debug)]
pub struct Balls {}

impl Balls {
    pub fn execute(self, content: &Compendium) -> Result<()> {
        print_table(&content.tables.balls, |name| {
            name.parse::<SpecialDevice>().ok().map(device_rule)
        });
        Ok(())
    }
}

/// List status conditions and their multipliers
#[derive(Parser, Debug)]
pub struct Statuses {}

impl Statuses {
    pub fn execute(self, content: &Compendium) -> Result<()> {
        print_table(&content.tables.statuses, |_| None);
        Ok(())
    }
}

/// List species and their base catch rates
#[derive(Parser, Debug)]
pub struct Species {
    /// Only show species whose name contains this text
    #[arg(short, long)]
    pub search: Option<String>,
}

impl Species {
    pub fn execute(self, content: &Compendium) -> Result<()> {
        let entries: Vec<_> = match self.search.as_deref() {
            Some(fragment) => content.species.search(fragment).collect(),
            None => content.species.iter().collect(),
        };

        if entries.is_empty() {
            println!("{}", style("No species found").dim());
            return Ok(());
        }

        for entry in entries {
            println!(
                "  #{:<4} {:<12} catch rate {:>3}",
                entry.number, entry.name, entry.base_catch_rate
            );
        }
        Ok(())
    }
}

fn print_table(table: &MultiplierTable, note: impl Fn(&str) -> Option<&'static str>) {
    if table.is_empty() {
        println!("{}", style("Table is empty").dim());
        return;
    }

    let width = table.names().map(str::len).max().unwrap_or(0);
    for entry in table.iter() {
        match note(&entry.name) {
            Some(rule) => println!(
                "  {:<width$}  {}",
                entry.name,
                style(rule).yellow(),
                width = width
            ),
            None => println!("  {:<width$}  x{}", entry.name, entry.multiplier, width = width),
        }
    }
}

fn device_rule(device: SpecialDevice) -> &'static str {
    match device {
        SpecialDevice::Dream => "x1 to x4 with sleep turns",
        SpecialDevice::Nest => "x4 up to level 16, -0.2 per level after (min x1)",
        SpecialDevice::Timer => "+0.3 per turn after the first (max x4)",
        SpecialDevice::Repeat => "+0.1 per prior capture (max x2.5)",
        SpecialDevice::Quick => "x5 on turn 1 (certain at catch rate 154+), else x1",
    }
}
