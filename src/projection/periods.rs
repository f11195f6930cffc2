//! Per-period results and the projection view model

use crate::plans::Plan;
use serde::Serialize;

/// State of an investment after one compounding period
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodResult {
    /// 1-based period index
    pub period_index: u32,
    /// Value after this period's compounding
    pub cumulative_value: f64,
    /// Profit earned in this period alone
    pub period_profit: f64,
}

/// Complete projection of a principal over a run of periods
///
/// Always holds at least one period; only the engine builds it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    pub principal: f64,
    pub weekly_rate_percent: f64,
    pub periods: Vec<PeriodResult>,
}

impl Projection {
    /// Value after the last period
    pub fn final_value(&self) -> f64 {
        self.periods
            .last()
            .map(|p| p.cumulative_value)
            .unwrap_or(self.principal)
    }

    /// Final value less principal
    pub fn total_profit(&self) -> f64 {
        self.final_value() - self.principal
    }

    /// Total profit as a percentage of principal (74.9 for 74.9%)
    pub fn total_return_pct(&self) -> f64 {
        self.total_profit() / self.principal * 100.0
    }

    pub fn period_count(&self) -> u32 {
        self.periods.len() as u32
    }
}

/// A projection paired with the plan it was computed for
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanProjection<'a> {
    pub plan: &'a Plan,
    pub projection: Projection,
}
