/// Pet rule constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PetConfig {
    /// Score awarded for each completed feed, sleep or vet action.
    pub action_score: i64,
}

impl PetConfig {
    // ===== stat bounds =====
    pub const STAT_MIN: u8 = 0;
    pub const STAT_MAX: u8 = 100;

    /// Extra health lost when any vital bottoms out during a transition.
    pub const NEGLECT_PENALTY: i32 = 10;

    // ===== cooldowns =====
    /// Fallback cooldown used for unknown actions and unreadable configuration.
    pub const DEFAULT_COOLDOWN_SECS: u32 = 5;

    // ===== new game =====
    pub const NEW_GAME_SCORE: i64 = 0;
    pub const NEW_GAME_HAPPINESS: u8 = 70;
    pub const NEW_GAME_HEALTH: u8 = 100;
    pub const NEW_GAME_SLEEP: u8 = 70;
    pub const NEW_GAME_HUNGER: u8 = 70;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_ACTION_SCORE: i64 = 20;

    pub fn new() -> Self {
        Self {
            action_score: Self::DEFAULT_ACTION_SCORE,
        }
    }

    pub fn with_action_score(action_score: i64) -> Self {
        Self { action_score }
    }
}

impl Default for PetConfig {
    fn default() -> Self {
        Self::new()
    }
}
