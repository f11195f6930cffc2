//! Weekly compounding engine
//!
//! Applies `value_k = value_{k-1} * (1 + rate / 100)` starting from the
//! principal. Everything here is pure: no I/O, no shared state.

use super::periods::{PeriodResult, PlanProjection, Projection};
use super::{DEFAULT_PERIOD_COUNT, MAX_PERIOD_COUNT};
use crate::error::EngineError;
use crate::plans::{eligible_plans, Plan};
use log::debug;
use serde::{Deserialize, Serialize};

/// How intermediate values are rounded while compounding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoundingPolicy {
    /// Full precision between periods; round only for display
    #[default]
    Unrounded,
    /// Round the carried value to cents after every period, as a ledger
    /// that stores weekly balances in cents would
    PerPeriodCents,
}

impl std::str::FromStr for RoundingPolicy {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unrounded" => Ok(RoundingPolicy::Unrounded),
            "per-period-cents" => Ok(RoundingPolicy::PerPeriodCents),
            other => Err(EngineError::InvalidArgument(format!(
                "unknown rounding policy '{}'",
                other
            ))),
        }
    }
}

/// Configuration for projections
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Number of weekly periods to project
    /// Default: 4 (one investment cycle)
    #[serde(default = "default_period_count")]
    pub period_count: u32,

    /// Rounding applied between periods
    #[serde(default)]
    pub rounding: RoundingPolicy,
}

fn default_period_count() -> u32 { DEFAULT_PERIOD_COUNT }

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            period_count: DEFAULT_PERIOD_COUNT,
            rounding: RoundingPolicy::Unrounded,
        }
    }
}

/// Projection engine bound to a configuration
#[derive(Debug, Clone, Default)]
pub struct CompoundingEngine {
    config: ProjectionConfig,
}

impl CompoundingEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Project a principal at a weekly rate over the configured periods
    pub fn project(&self, principal: f64, weekly_rate_percent: f64) -> Result<Projection, EngineError> {
        let periods = compound(
            principal,
            weekly_rate_percent,
            self.config.period_count,
            self.config.rounding,
        )?;
        Ok(Projection {
            principal,
            weekly_rate_percent,
            periods,
        })
    }

    /// Project a principal under a plan
    ///
    /// Fails when the plan does not accept the amount.
    pub fn project_plan(&self, principal: f64, plan: &Plan) -> Result<Projection, EngineError> {
        if !plan.accepts(principal) {
            return Err(EngineError::InvalidArgument(format!(
                "amount {:.2} is outside the range of plan '{}'",
                principal, plan.name
            )));
        }
        self.project(principal, plan.weekly_return_percentage)
    }

    /// Project an amount under every plan that accepts it, in catalog order
    pub fn compare_plans<'a>(
        &self,
        amount: f64,
        plans: &'a [Plan],
    ) -> Result<Vec<PlanProjection<'a>>, EngineError> {
        eligible_plans(amount, plans)
            .into_iter()
            .map(|plan| {
                self.project(amount, plan.weekly_return_percentage)
                    .map(|projection| PlanProjection { plan, projection })
            })
            .collect()
    }
}

/// Compounded value after each period, unrounded
pub fn project_periods(
    principal: f64,
    weekly_rate_percent: f64,
    period_count: u32,
) -> Result<Vec<PeriodResult>, EngineError> {
    compound(principal, weekly_rate_percent, period_count, RoundingPolicy::Unrounded)
}

/// Value after the last period
pub fn final_value(principal: f64, weekly_rate_percent: f64, period_count: u32) -> Result<f64, EngineError> {
    let periods = project_periods(principal, weekly_rate_percent, period_count)?;
    Ok(periods.last().map(|p| p.cumulative_value).unwrap_or(principal))
}

/// Final value less principal
pub fn total_profit(principal: f64, weekly_rate_percent: f64, period_count: u32) -> Result<f64, EngineError> {
    Ok(final_value(principal, weekly_rate_percent, period_count)? - principal)
}

fn validate(principal: f64, weekly_rate_percent: f64, period_count: u32) -> Result<(), EngineError> {
    if !principal.is_finite() || principal <= 0.0 {
        return Err(EngineError::InvalidArgument(format!(
            "principal must be a positive amount, got {}",
            principal
        )));
    }
    if !weekly_rate_percent.is_finite() || weekly_rate_percent < 0.0 {
        return Err(EngineError::InvalidArgument(format!(
            "weekly rate must be a non-negative percentage, got {}",
            weekly_rate_percent
        )));
    }
    if period_count < 1 {
        return Err(EngineError::InvalidArgument(
            "period count must be at least 1".to_string(),
        ));
    }
    Ok(())
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A cents ledger can only carry whole cents
fn validate_cents(principal: f64) -> Result<(), EngineError> {
    let cents = principal * 100.0;
    if cents < 1.0 || (cents - cents.round()).abs() > 1e-6 {
        return Err(EngineError::InvalidArgument(format!(
            "principal must be a whole number of cents under per-period rounding, got {}",
            principal
        )));
    }
    Ok(())
}

fn compound(
    principal: f64,
    weekly_rate_percent: f64,
    period_count: u32,
    rounding: RoundingPolicy,
) -> Result<Vec<PeriodResult>, EngineError> {
    validate(principal, weekly_rate_percent, period_count)?;
    if rounding == RoundingPolicy::PerPeriodCents {
        validate_cents(principal)?;
    }

    let growth = 1.0 + weekly_rate_percent / 100.0;
    let mut periods = Vec::with_capacity(period_count.min(MAX_PERIOD_COUNT) as usize);
    let mut value = principal;

    for period_index in 1..=period_count {
        let previous = value;
        let (next, profit) = match rounding {
            RoundingPolicy::Unrounded => {
                let next = previous * growth;
                (next, next - previous)
            }
            RoundingPolicy::PerPeriodCents => {
                let next = round_cents(previous * growth);
                (next, round_cents(next - previous))
            }
        };
        if !next.is_finite() {
            return Err(EngineError::InvalidArgument(format!(
                "projection overflows at period {} ({:.2} at {}% weekly)",
                period_index, principal, weekly_rate_percent
            )));
        }
        value = next;
        periods.push(PeriodResult {
            period_index,
            cumulative_value: value,
            period_profit: profit,
        });
    }

    debug!(
        "Projected {:.2} at {}% over {} periods ({:?}): final {:.2}",
        principal, weekly_rate_percent, period_count, rounding, value
    );

    Ok(periods)
}
