//! Inputs of a single capture attempt.

/// Creature being captured.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Target {
    pub name: String,
    /// Species-defined difficulty constant, typically 3..=255.
    pub base_catch_rate: u32,
}

impl Target {
    pub fn new(name: impl Into<String>, base_catch_rate: u32) -> Self {
        Self {
            name: name.into(),
            base_catch_rate,
        }
    }
}

/// Encounter state supplied by the caller for each calculation.
///
/// Values are taken as given. `hp_percentage` is expected in `0..=100` but is
/// not clamped; only the final probability is.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterContext {
    /// Remaining HP of the target, in percent.
    pub hp_percentage: f64,
    /// Status condition name, looked up in the status table.
    pub status_condition: String,
    /// Capture device name, looked up in the ball table.
    pub ball_type: String,
    /// Turns the target has been asleep (Dream Ball).
    pub dream_ball_turns: u32,
    pub target_level: u32,
    /// Turns elapsed in the encounter, starting at 1.
    pub turns_passed: u32,
    /// Prior captures of the species by the capturing party.
    pub repeat_ball_captures: u32,
}

impl EncounterContext {
    pub const DEFAULT_BALL: &'static str = "Poke Ball";
    pub const DEFAULT_STATUS: &'static str = "None";

    /// A fresh encounter: full HP, no status, first turn.
    pub fn new() -> Self {
        Self {
            hp_percentage: 100.0,
            status_condition: Self::DEFAULT_STATUS.to_string(),
            ball_type: Self::DEFAULT_BALL.to_string(),
            dream_ball_turns: 0,
            target_level: 1,
            turns_passed: 1,
            repeat_ball_captures: 0,
        }
    }

    pub fn with_hp_percentage(mut self, hp_percentage: f64) -> Self {
        self.hp_percentage = hp_percentage;
        self
    }

    pub fn with_status(mut self, status_condition: impl Into<String>) -> Self {
        self.status_condition = status_condition.into();
        self
    }

    pub fn with_ball(mut self, ball_type: impl Into<String>) -> Self {
        self.ball_type = ball_type.into();
        self
    }

    pub fn with_dream_ball_turns(mut self, turns: u32) -> Self {
        self.dream_ball_turns = turns;
        self
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.target_level = level;
        self
    }

    pub fn with_turns_passed(mut self, turns: u32) -> Self {
        self.turns_passed = turns;
        self
    }

    pub fn with_repeat_captures(mut self, captures: u32) -> Self {
        self.repeat_ball_captures = captures;
        self
    }
}

impl Default for EncounterContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything the calculator reads for one throw.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatchAttempt {
    /// `None` when no creature is selected yet; the probability is then 0.
    pub target: Option<Target>,
    pub encounter: EncounterContext,
}

impl CatchAttempt {
    pub fn new(target: Target, encounter: EncounterContext) -> Self {
        Self {
            target: Some(target),
            encounter,
        }
    }

    pub fn without_target(encounter: EncounterContext) -> Self {
        Self {
            target: None,
            encounter,
        }
    }
}
