//! Planner configuration parameters.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Planner configuration parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Wall-clock budget per planning round, in milliseconds.
    /// The planner never starts a new action past the deadline.
    pub budget_ms: u64,

    /// Seed for the rollout RNG.
    /// Same seed and state produce the same emitted turn.
    pub seed: u64,

    /// Cap on rollouts per round (0 = unlimited).
    /// Lets tests run a fixed amount of work regardless of host speed.
    pub max_rollouts: u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            budget_ms: 50,
            seed: 42,
            max_rollouts: 0,
        }
    }
}

impl PlannerConfig {
    /// The budget as a `Duration`.
    #[must_use]
    pub fn budget(&self) -> Duration {
        Duration::from_millis(self.budget_ms)
    }

    /// Override the wall-clock budget.
    #[must_use]
    pub fn with_budget_ms(mut self, budget_ms: u64) -> Self {
        self.budget_ms = budget_ms;
        self
    }

    /// Override the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Override the rollout cap.
    #[must_use]
    pub fn with_max_rollouts(mut self, max_rollouts: u32) -> Self {
        self.max_rollouts = max_rollouts;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PlannerConfig::default();
        assert_eq!(config.budget_ms, 50);
        assert_eq!(config.seed, 42);
        assert_eq!(config.max_rollouts, 0);
        assert_eq!(config.budget(), Duration::from_millis(50));
    }

    #[test]
    fn test_builder_pattern() {
        let config = PlannerConfig::default()
            .with_budget_ms(10)
            .with_seed(123)
            .with_max_rollouts(500);

        assert_eq!(config.budget_ms, 10);
        assert_eq!(config.seed, 123);
        assert_eq!(config.max_rollouts, 500);
    }

    #[test]
    fn test_serialization() {
        let config = PlannerConfig::default().with_seed(7);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: PlannerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config.seed, deserialized.seed);
        assert_eq!(config.budget_ms, deserialized.budget_ms);
    }
}
