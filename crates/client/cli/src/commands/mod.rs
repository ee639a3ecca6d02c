//! Command implementations for the compendium CLI
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod args;
mod catch;
mod compare;
mod list;

pub use catch::Catch;
pub use compare::Compare;
pub use list::{Balls, Species, Statuses};
