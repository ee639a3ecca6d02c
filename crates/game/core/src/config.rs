/// Catch formula constants and per-device tuning parameters.
///
/// The formula reproduces the in-game capture threshold, so none of these are
/// runtime-tunable; they are grouped here so every rule reads from one place.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CatchConfig;

impl CatchConfig {
    // ===== formula constants =====
    /// Maximum HP used by the formula. Current HP is derived from the percentage.
    pub const MAX_HP: f64 = 100.0;
    /// Catch values above this saturate to a certain capture.
    pub const CATCH_VALUE_CAP: f64 = 255.0;
    /// Fixed-point scale of the shake check.
    pub const FIXED_POINT_SCALE: f64 = 65536.0;
    /// Multiplier used whenever a table has no entry for a name.
    pub const DEFAULT_MULTIPLIER: f64 = 1.0;
    /// Magnitude reported for a device that always captures.
    pub const GUARANTEED_MULTIPLIER: f64 = 255.0;

    // ===== Dream Ball =====
    /// Multiplier indexed by sleeping turns; the last step holds for longer sleeps.
    pub const DREAM_STEPS: [f64; 4] = [1.0, 1.5, 2.5, 4.0];

    // ===== Nest Ball =====
    pub const NEST_MAX_MULTIPLIER: f64 = 4.0;
    /// Targets at or below this level receive the full Nest bonus.
    pub const NEST_LEVEL_THRESHOLD: u32 = 16;
    pub const NEST_PENALTY_PER_LEVEL: f64 = 0.2;

    // ===== Timer Ball =====
    pub const TIMER_BONUS_PER_TURN: f64 = 0.3;
    pub const TIMER_MAX_MULTIPLIER: f64 = 4.0;

    // ===== Repeat Ball =====
    pub const REPEAT_BONUS_PER_CAPTURE: f64 = 0.1;
    pub const REPEAT_MAX_MULTIPLIER: f64 = 2.5;

    // ===== Quick Ball =====
    pub const QUICK_FIRST_TURN_MULTIPLIER: f64 = 5.0;
    /// Base catch rate at which a first-turn Quick Ball always succeeds.
    pub const QUICK_GUARANTEE_RATE: u32 = 154;
}
