//! Usage counters shown on the stats card

mod stats_state;

pub use stats_state::{StatsState, STATS_REFRESH_INTERVAL};
