//! Capture-device multiplier rules.
//!
//! Most devices apply a flat multiplier from the ball table. A handful scale
//! with the encounter instead (sleep turns, target level, elapsed turns, prior
//! captures) and are modelled as dedicated [`CaptureDevice`] variants so every
//! rule is resolved by one exhaustive match.

use crate::config::CatchConfig;
use crate::env::TablesOracle;

use super::EncounterContext;

/// Devices whose multiplier depends on the encounter rather than the table.
///
/// Parsed from the exact ball name (case-sensitive).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpecialDevice {
    #[strum(serialize = "Dream Ball")]
    Dream,
    #[strum(serialize = "Nest Ball")]
    Nest,
    #[strum(serialize = "Timer Ball")]
    Timer,
    #[strum(serialize = "Repeat Ball")]
    Repeat,
    #[strum(serialize = "Quick Ball")]
    Quick,
}

/// A capture device with the encounter data its rule needs.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum CaptureDevice {
    /// Flat multiplier taken from the ball table.
    Standard { multiplier: f64 },
    /// Scales with the number of turns the target has been asleep.
    Dream { turns: u32 },
    /// Favors low-level targets.
    Nest { level: u32 },
    /// Grows with elapsed turns.
    Timer { turns: u32 },
    /// Grows with prior captures of the species.
    Repeat { captures: u32 },
    /// Only effective on the first turn.
    Quick { turns: u32, base_rate: u32 },
}

/// Resolved effect of a capture device.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DeviceMultiplier {
    /// Capture always succeeds; the formula is skipped.
    Guaranteed,
    Factor(f64),
}

impl DeviceMultiplier {
    /// Numeric multiplier; `Guaranteed` reports the 255 sentinel magnitude.
    pub fn value(self) -> f64 {
        match self {
            Self::Guaranteed => CatchConfig::GUARANTEED_MULTIPLIER,
            Self::Factor(factor) => factor,
        }
    }

    pub fn is_guaranteed(self) -> bool {
        matches!(self, Self::Guaranteed)
    }
}

impl CaptureDevice {
    /// Selects the device rule for `encounter.ball_type`.
    ///
    /// Unknown names become a `Standard` device with the neutral multiplier.
    pub fn from_encounter(
        encounter: &EncounterContext,
        base_rate: u32,
        tables: &(impl TablesOracle + ?Sized),
    ) -> Self {
        match encounter.ball_type.parse::<SpecialDevice>() {
            Ok(SpecialDevice::Dream) => Self::Dream {
                turns: encounter.dream_ball_turns,
            },
            Ok(SpecialDevice::Nest) => Self::Nest {
                level: encounter.target_level,
            },
            Ok(SpecialDevice::Timer) => Self::Timer {
                turns: encounter.turns_passed,
            },
            Ok(SpecialDevice::Repeat) => Self::Repeat {
                captures: encounter.repeat_ball_captures,
            },
            Ok(SpecialDevice::Quick) => Self::Quick {
                turns: encounter.turns_passed,
                base_rate,
            },
            Err(_) => Self::Standard {
                multiplier: tables
                    .ball_multiplier(&encounter.ball_type)
                    .unwrap_or(CatchConfig::DEFAULT_MULTIPLIER),
            },
        }
    }

    pub fn resolve(&self) -> DeviceMultiplier {
        match *self {
            Self::Standard { multiplier } if multiplier == CatchConfig::GUARANTEED_MULTIPLIER => {
                DeviceMultiplier::Guaranteed
            }
            Self::Standard { multiplier } => DeviceMultiplier::Factor(multiplier),
            Self::Dream { turns } => {
                let last = CatchConfig::DREAM_STEPS.len() - 1;
                let step = (turns as usize).min(last);
                DeviceMultiplier::Factor(CatchConfig::DREAM_STEPS[step])
            }
            Self::Nest { level } => {
                if level <= CatchConfig::NEST_LEVEL_THRESHOLD {
                    DeviceMultiplier::Factor(CatchConfig::NEST_MAX_MULTIPLIER)
                } else {
                    let over = (level - CatchConfig::NEST_LEVEL_THRESHOLD) as f64;
                    let factor = CatchConfig::NEST_MAX_MULTIPLIER
                        - over * CatchConfig::NEST_PENALTY_PER_LEVEL;
                    DeviceMultiplier::Factor(factor.max(CatchConfig::DEFAULT_MULTIPLIER))
                }
            }
            Self::Timer { turns } => {
                // Turn 0 is not clamped and yields 0.7.
                let factor = 1.0 + (turns as f64 - 1.0) * CatchConfig::TIMER_BONUS_PER_TURN;
                DeviceMultiplier::Factor(factor.min(CatchConfig::TIMER_MAX_MULTIPLIER))
            }
            Self::Repeat { captures } => {
                let factor = 1.0 + captures as f64 * CatchConfig::REPEAT_BONUS_PER_CAPTURE;
                DeviceMultiplier::Factor(factor.min(CatchConfig::REPEAT_MAX_MULTIPLIER))
            }
            Self::Quick {
                turns: 1,
                base_rate,
            } if base_rate >= CatchConfig::QUICK_GUARANTEE_RATE => DeviceMultiplier::Guaranteed,
            Self::Quick { turns: 1, .. } => {
                DeviceMultiplier::Factor(CatchConfig::QUICK_FIRST_TURN_MULTIPLIER)
            }
            Self::Quick { .. } => DeviceMultiplier::Factor(CatchConfig::DEFAULT_MULTIPLIER),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::CatchTables;

    fn resolve(encounter: EncounterContext, base_rate: u32) -> DeviceMultiplier {
        CaptureDevice::from_encounter(&encounter, base_rate, &CatchTables::standard()).resolve()
    }

    fn assert_factor(actual: DeviceMultiplier, expected: f64) {
        match actual {
            DeviceMultiplier::Factor(factor) => assert!(
                (factor - expected).abs() < 1e-9,
                "expected {expected}, got {factor}"
            ),
            DeviceMultiplier::Guaranteed => panic!("expected {expected}, got Guaranteed"),
        }
    }

    #[test]
    fn special_names_parse_exactly() {
        assert_eq!("Nest Ball".parse::<SpecialDevice>(), Ok(SpecialDevice::Nest));
        assert!("nest ball".parse::<SpecialDevice>().is_err());
        assert_eq!(SpecialDevice::Quick.to_string(), "Quick Ball");
    }

    #[test]
    fn dream_ball_steps_with_sleep_turns() {
        let base = EncounterContext::new().with_ball("Dream Ball");

        assert_factor(resolve(base.clone().with_dream_ball_turns(0), 45), 1.0);
        assert_factor(resolve(base.clone().with_dream_ball_turns(1), 45), 1.5);
        assert_factor(resolve(base.clone().with_dream_ball_turns(2), 45), 2.5);
        assert_factor(resolve(base.clone().with_dream_ball_turns(3), 45), 4.0);
        assert_factor(resolve(base.with_dream_ball_turns(5), 45), 4.0);
    }

    #[test]
    fn nest_ball_fades_above_level_sixteen() {
        let base = EncounterContext::new().with_ball("Nest Ball");

        assert_factor(resolve(base.clone().with_level(10), 45), 4.0);
        assert_factor(resolve(base.clone().with_level(16), 45), 4.0);
        assert_factor(resolve(base.clone().with_level(21), 45), 3.0);
        assert_factor(resolve(base.clone().with_level(26), 45), 2.0);
        assert_factor(resolve(base.with_level(80), 45), 1.0);
    }

    #[test]
    fn timer_ball_caps_at_four() {
        let base = EncounterContext::new().with_ball("Timer Ball");

        assert_factor(resolve(base.clone().with_turns_passed(1), 45), 1.0);
        assert_factor(resolve(base.clone().with_turns_passed(4), 45), 1.9);
        assert_factor(resolve(base.clone().with_turns_passed(11), 45), 4.0);
        assert_factor(resolve(base.with_turns_passed(40), 45), 4.0);
    }

    #[test]
    fn repeat_ball_caps_at_two_and_a_half() {
        let base = EncounterContext::new().with_ball("Repeat Ball");

        assert_factor(resolve(base.clone().with_repeat_captures(0), 45), 1.0);
        assert_factor(resolve(base.clone().with_repeat_captures(5), 45), 1.5);
        assert_factor(resolve(base.with_repeat_captures(20), 45), 2.5);
    }

    #[test]
    fn quick_ball_depends_on_first_turn_and_catch_rate() {
        let first_turn = EncounterContext::new().with_ball("Quick Ball");

        assert_eq!(resolve(first_turn.clone(), 200), DeviceMultiplier::Guaranteed);
        assert_eq!(resolve(first_turn.clone(), 154), DeviceMultiplier::Guaranteed);
        assert_factor(resolve(first_turn.clone(), 45), 5.0);
        assert_factor(resolve(first_turn.with_turns_passed(2), 200), 1.0);
    }

    #[test]
    fn table_sentinel_resolves_to_guaranteed() {
        let master = EncounterContext::new().with_ball("Master Ball");

        let multiplier = resolve(master, 3);
        assert!(multiplier.is_guaranteed());
        assert_eq!(multiplier.value(), 255.0);
    }

    #[test]
    fn unknown_ball_is_neutral() {
        let device = CaptureDevice::from_encounter(
            &EncounterContext::new().with_ball("Cherish Ball?"),
            45,
            &CatchTables::standard(),
        );

        assert_eq!(device, CaptureDevice::Standard { multiplier: 1.0 });
        assert_factor(device.resolve(), 1.0);
    }
}
