//! Compounding engine for weekly plan projections

mod engine;
mod periods;

pub use engine::{
    CompoundingEngine, ProjectionConfig, RoundingPolicy, project_periods, final_value,
    total_profit,
};
pub use periods::{PeriodResult, Projection, PlanProjection};

// ============================================================================
// Investment Cycle
// ============================================================================
// Every plan runs for a fixed cycle of weekly compounding periods.
// - Profit of each week is reinvested into the next week's basis
// - The full value (principal + profit) is released at the end of the cycle

/// Number of weekly periods in one investment cycle
pub const DEFAULT_PERIOD_COUNT: u32 = 4;

/// Longest run accepted from callers outside the library (100 years of weeks)
pub const MAX_PERIOD_COUNT: u32 = 5_200;

/// Length of one compounding period in days
pub const DAYS_PER_PERIOD: i64 = 7;
