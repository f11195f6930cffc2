//! Compounding Engine - weekly compounding projections for tiered investment plans
//!
//! This library provides:
//! - Period-by-period compounded projections (final value, total profit)
//! - Plan eligibility rules and plan catalog loading
//! - Dashboard figures over investment positions (this week's earnings, remaining projection)
//! - Calendar schedules for weekly periods
//! - Presentation helpers for currency amounts
//! - JSON request handling for the HTTP projection endpoint

pub mod error;
pub mod plans;
pub mod projection;
pub mod portfolio;
pub mod schedule;
pub mod report;
pub mod api;

// Re-export commonly used types
pub use error::{EngineError, PlanError};
pub use plans::{Plan, Eligibility, eligible_plans, check_amount};
pub use projection::{
    CompoundingEngine, ProjectionConfig, RoundingPolicy, PeriodResult, Projection,
    project_periods, final_value, total_profit, DEFAULT_PERIOD_COUNT, MAX_PERIOD_COUNT,
};
pub use portfolio::{InvestmentPosition, InvestmentStatus, PortfolioSummary};
pub use schedule::PeriodSchedule;
