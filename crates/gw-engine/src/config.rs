//! Configuration for a game session.

/// Default number of questions before the game gives up.
pub const DEFAULT_BUDGET: u32 = 20;

/// Configuration for a game session.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Maximum number of questions (at least 1).
    pub budget: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            budget: DEFAULT_BUDGET,
        }
    }
}

impl GameConfig {
    /// Set the question budget (clamped to at least 1).
    pub fn with_budget(mut self, budget: u32) -> Self {
        self.budget = budget.max(1);
        self
    }
}
