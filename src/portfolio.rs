//! Investment positions and the dashboard figures computed over them
//!
//! Positions come from the backend as-is; this module only reads them.
//! All compounding goes through the projection engine.

use crate::error::EngineError;
use crate::projection::total_profit;
use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Lifecycle state reported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvestmentStatus {
    Pending,
    Active,
    Completed,
    Rejected,
    #[serde(other)]
    Other,
}

/// Plan terms frozen on the investment when it was created
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSnapshot {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub weekly_return_percentage: f64,
}

/// An investment as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentPosition {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,

    pub amount: f64,

    /// Value after the weeks compounded so far
    #[serde(default)]
    pub current_value: Option<f64>,

    #[serde(default)]
    pub weeks_completed: u32,

    pub status: InvestmentStatus,

    #[serde(default)]
    pub plan_snapshot: PlanSnapshot,
}

impl InvestmentPosition {
    pub fn is_active(&self) -> bool {
        self.status == InvestmentStatus::Active
    }

    /// Amount the next week compounds on: current value if known, else the invested amount
    pub fn basis(&self) -> f64 {
        self.current_value
            .filter(|v| v.is_finite() && *v > 0.0)
            .unwrap_or(self.amount)
    }

    pub fn weeks_remaining(&self, period_count: u32) -> u32 {
        period_count.saturating_sub(self.weeks_completed)
    }

    /// Profit the position earns this week; zero unless active
    pub fn current_week_earnings(&self) -> f64 {
        if !self.is_active() {
            return 0.0;
        }
        self.basis() * self.plan_snapshot.weekly_return_percentage / 100.0
    }

    /// Compounded profit over the weeks left in the cycle
    pub fn remaining_profit(&self, period_count: u32) -> Result<f64, EngineError> {
        let remaining = self.weeks_remaining(period_count);
        let basis = self.basis();
        if remaining == 0 || basis <= 0.0 {
            return Ok(0.0);
        }
        total_profit(basis, self.plan_snapshot.weekly_return_percentage, remaining)
    }
}

/// Totals over the active positions of one investor
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub active_positions: usize,
    pub total_invested: f64,
    pub total_current_value: f64,
    /// Earnings of the current week across active positions
    pub week_earnings: f64,
    /// Profit still to come if every active position runs to the end of its cycle
    pub projected_remaining_profit: f64,
}

impl PortfolioSummary {
    pub fn from_positions(
        positions: &[InvestmentPosition],
        period_count: u32,
    ) -> Result<Self, EngineError> {
        let active: Vec<&InvestmentPosition> =
            positions.par_iter().filter(|p| p.is_active()).collect();

        let remaining: Vec<f64> = active
            .par_iter()
            .map(|p| p.remaining_profit(period_count))
            .collect::<Result<Vec<f64>, EngineError>>()?;

        let summary = Self {
            active_positions: active.len(),
            total_invested: active.par_iter().map(|p| p.amount).sum(),
            total_current_value: active.par_iter().map(|p| p.basis()).sum(),
            week_earnings: active.par_iter().map(|p| p.current_week_earnings()).sum(),
            projected_remaining_profit: remaining.iter().sum(),
        };

        debug!(
            "Summarized {} of {} positions: week earnings {:.2}, remaining profit {:.2}",
            summary.active_positions,
            positions.len(),
            summary.week_earnings,
            summary.projected_remaining_profit
        );

        Ok(summary)
    }

    /// Current value plus the profit still to come
    pub fn projected_final_value(&self) -> f64 {
        self.total_current_value + self.projected_remaining_profit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn position(id: &str, amount: f64, rate: f64, weeks: u32, status: InvestmentStatus) -> InvestmentPosition {
        InvestmentPosition {
            id: id.to_string(),
            amount,
            current_value: None,
            weeks_completed: weeks,
            status,
            plan_snapshot: PlanSnapshot {
                name: "Starter".to_string(),
                weekly_return_percentage: rate,
            },
        }
    }

    #[test]
    fn test_basis_prefers_current_value() {
        let mut p = position("1", 10_000.0, 15.0, 1, InvestmentStatus::Active);
        assert_eq!(p.basis(), 10_000.0);

        p.current_value = Some(11_500.0);
        assert_eq!(p.basis(), 11_500.0);

        // The backend sends 0 before the first week is credited
        p.current_value = Some(0.0);
        assert_eq!(p.basis(), 10_000.0);
    }

    #[test]
    fn test_week_earnings() {
        let mut p = position("1", 10_000.0, 15.0, 1, InvestmentStatus::Active);
        p.current_value = Some(11_500.0);
        assert_relative_eq!(p.current_week_earnings(), 1_725.0, max_relative = 1e-12);

        p.status = InvestmentStatus::Pending;
        assert_eq!(p.current_week_earnings(), 0.0);
    }

    #[test]
    fn test_remaining_profit() {
        let mut p = position("1", 10_000.0, 15.0, 2, InvestmentStatus::Active);
        p.current_value = Some(13_225.0);

        // Weeks 3 and 4 remain: 13,225 -> 17,490.0625
        assert_relative_eq!(p.remaining_profit(4).unwrap(), 4_265.0625, max_relative = 1e-12);

        p.weeks_completed = 4;
        assert_eq!(p.remaining_profit(4).unwrap(), 0.0);
        p.weeks_completed = 6;
        assert_eq!(p.weeks_remaining(4), 0);
        assert_eq!(p.remaining_profit(4).unwrap(), 0.0);
    }

    #[test]
    fn test_remaining_profit_rejects_bad_rate() {
        let p = position("1", 10_000.0, -5.0, 0, InvestmentStatus::Active);
        assert!(p.remaining_profit(4).is_err());
    }

    #[test]
    fn test_summary_counts_active_only() {
        let positions = vec![
            position("a", 10_000.0, 15.0, 0, InvestmentStatus::Active),
            position("b", 50_000.0, 20.0, 0, InvestmentStatus::Pending),
            position("c", 20_000.0, 15.0, 4, InvestmentStatus::Completed),
            position("d", 150_000.0, 25.0, 4, InvestmentStatus::Active),
        ];
        let summary = PortfolioSummary::from_positions(&positions, 4).unwrap();

        assert_eq!(summary.active_positions, 2);
        assert_relative_eq!(summary.total_invested, 160_000.0);
        assert_relative_eq!(summary.week_earnings, 1_500.0 + 37_500.0, max_relative = 1e-12);
        // Position d has finished its cycle
        assert_relative_eq!(summary.projected_remaining_profit, 7_490.0625, max_relative = 1e-12);
        assert_relative_eq!(summary.projected_final_value(), 167_490.0625, max_relative = 1e-12);
    }

    #[test]
    fn test_empty_portfolio() {
        let summary = PortfolioSummary::from_positions(&[], 4).unwrap();
        assert_eq!(summary, PortfolioSummary::default());
    }

    #[test]
    fn test_backend_document() {
        let json = r#"{
            "_id": "inv-1",
            "amount": 10000,
            "currentValue": 11500,
            "weeksCompleted": 1,
            "status": "active",
            "planSnapshot": {"name": "Starter", "weeklyReturnPercentage": 15}
        }"#;
        let p: InvestmentPosition = serde_json::from_str(json).unwrap();
        assert!(p.is_active());
        assert_eq!(p.basis(), 11_500.0);
        assert_eq!(p.weeks_remaining(4), 3);

        let unknown: InvestmentPosition =
            serde_json::from_str(r#"{"id": "x", "amount": 5, "status": "frozen"}"#).unwrap();
        assert_eq!(unknown.status, InvestmentStatus::Other);
        assert_eq!(unknown.plan_snapshot, PlanSnapshot::default());
    }
}
