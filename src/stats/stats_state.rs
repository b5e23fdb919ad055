use std::time::Duration;

use crate::random::RandomSource;

pub const STATS_REFRESH_INTERVAL: Duration = Duration::from_secs(30);

const INITIAL_APPS_GENERATED: u32 = 1247;
const INITIAL_GROWTH_PERCENTAGE: u32 = 12;

/// Growth only bumps when a 1..=10 roll is above this
const GROWTH_ROLL_THRESHOLD: u32 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsState {
    pub apps_generated_today: u32,
    pub growth_percentage: u32,
}

impl Default for StatsState {
    fn default() -> Self {
        Self {
            apps_generated_today: INITIAL_APPS_GENERATED,
            growth_percentage: INITIAL_GROWTH_PERCENTAGE,
        }
    }
}

impl StatsState {
    /// One refresh: 1..=5 more apps, and a 30% chance of 1..=3 more growth
    pub fn refresh(&mut self, rng: &mut dyn RandomSource) {
        self.apps_generated_today = self
            .apps_generated_today
            .saturating_add(rng.int_in(1, 5));

        if rng.int_in(1, 10) > GROWTH_ROLL_THRESHOLD {
            self.growth_percentage = self.growth_percentage.saturating_add(rng.int_in(1, 3));
        }
    }

    pub fn growth_label(&self) -> String {
        format!("+{}% from yesterday", self.growth_percentage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{ScriptedRandom, StdRandom};
    use proptest::prelude::*;

    #[test]
    fn test_initial_values() {
        let stats = StatsState::default();
        assert_eq!(stats.apps_generated_today, 1247);
        assert_eq!(stats.growth_percentage, 12);
        assert_eq!(stats.growth_label(), "+12% from yesterday");
    }

    #[test]
    fn test_refresh_without_growth() {
        let mut rng = ScriptedRandom::new();
        rng.push_int(3);
        rng.push_int(7);
        let mut stats = StatsState::default();

        stats.refresh(&mut rng);

        assert_eq!(stats.apps_generated_today, 1250);
        assert_eq!(stats.growth_percentage, 12);
    }

    #[test]
    fn test_refresh_with_growth() {
        let mut rng = ScriptedRandom::new();
        rng.push_int(5);
        rng.push_int(8);
        rng.push_int(2);
        let mut stats = StatsState::default();

        stats.refresh(&mut rng);

        assert_eq!(stats.apps_generated_today, 1252);
        assert_eq!(stats.growth_percentage, 14);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_refresh_bounds(seed in any::<u64>()) {
            let mut rng = StdRandom::seeded(seed);
            let mut stats = StatsState::default();
            let before = stats;

            stats.refresh(&mut rng);

            let apps_delta = stats.apps_generated_today - before.apps_generated_today;
            let growth_delta = stats.growth_percentage - before.growth_percentage;
            prop_assert!((1..=5).contains(&apps_delta));
            prop_assert!(growth_delta <= 3);
        }
    }
}
