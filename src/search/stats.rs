//! Planner run statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected over one planning round.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchStats {
    /// Completed rollouts.
    pub rollouts: u32,

    /// Actions applied across all rollouts.
    pub actions: u64,

    /// How often a rollout improved on the best turn so far.
    pub improvements: u32,

    /// Score of the emitted turn.
    pub best_score: f64,

    /// Wall time spent planning (microseconds).
    pub time_us: u64,
}

impl Default for SearchStats {
    fn default() -> Self {
        Self {
            rollouts: 0,
            actions: 0,
            improvements: 0,
            best_score: f64::NEG_INFINITY,
            time_us: 0,
        }
    }
}

impl SearchStats {
    /// New empty statistics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to the empty state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Rollouts per second over the measured round.
    #[must_use]
    pub fn rollouts_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            f64::from(self.rollouts) / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Mean rollout length in actions.
    #[must_use]
    pub fn actions_per_rollout(&self) -> f64 {
        if self.rollouts == 0 {
            0.0
        } else {
            self.actions as f64 / f64::from(self.rollouts)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = SearchStats::new();
        assert_eq!(stats.rollouts, 0);
        assert_eq!(stats.actions, 0);
        assert_eq!(stats.best_score, f64::NEG_INFINITY);
    }

    #[test]
    fn test_rollouts_per_second() {
        let stats = SearchStats {
            rollouts: 2000,
            time_us: 1_000_000,
            ..SearchStats::new()
        };
        assert_eq!(stats.rollouts_per_second(), 2000.0);
    }

    #[test]
    fn test_actions_per_rollout() {
        let stats = SearchStats {
            rollouts: 10,
            actions: 45,
            ..SearchStats::new()
        };
        assert_eq!(stats.actions_per_rollout(), 4.5);
    }

    #[test]
    fn test_reset() {
        let mut stats = SearchStats {
            rollouts: 100,
            best_score: 12.0,
            ..SearchStats::new()
        };
        stats.reset();
        assert_eq!(stats.rollouts, 0);
        assert_eq!(stats.best_score, f64::NEG_INFINITY);
    }

    #[test]
    fn test_serialization() {
        let stats = SearchStats {
            rollouts: 42,
            best_score: 7.5,
            ..SearchStats::new()
        };

        let json = serde_json::to_string(&stats).unwrap();
        let deserialized: SearchStats = serde_json::from_str(&json).unwrap();

        assert_eq!(stats.rollouts, deserialized.rollouts);
        assert_eq!(stats.best_score, deserialized.best_score);
    }
}
