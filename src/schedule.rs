//! Calendar dates of weekly compounding periods

use crate::error::EngineError;
use crate::projection::DAYS_PER_PERIOD;
use chrono::{Duration, NaiveDate};
use serde::Serialize;

/// End of period `periods` after `start`, None when it leaves chrono's date range
fn offset(start: NaiveDate, periods: u32) -> Option<NaiveDate> {
    let days = DAYS_PER_PERIOD.checked_mul(periods as i64)?;
    start.checked_add_signed(Duration::try_days(days)?)
}

/// Period end dates of one investment, starting on `start`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodSchedule {
    start: NaiveDate,
    period_count: u32,
    maturity: NaiveDate,
}

impl PeriodSchedule {
    pub fn new(start: NaiveDate, period_count: u32) -> Result<Self, EngineError> {
        if period_count < 1 {
            return Err(EngineError::InvalidArgument(
                "period count must be at least 1".to_string(),
            ));
        }
        let maturity = offset(start, period_count).ok_or_else(|| {
            EngineError::InvalidArgument(format!(
                "{} periods from {} end past the last representable date",
                period_count, start
            ))
        })?;
        Ok(Self { start, period_count, maturity })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn period_count(&self) -> u32 {
        self.period_count
    }

    /// Date period `period_index` (1-based) is credited
    pub fn period_end(&self, period_index: u32) -> Option<NaiveDate> {
        if period_index == 0 || period_index > self.period_count {
            return None;
        }
        offset(self.start, period_index)
    }

    /// End dates of every period, in order
    pub fn period_ends(&self) -> Vec<NaiveDate> {
        (1..=self.period_count)
            .filter_map(|k| self.period_end(k))
            .collect()
    }

    /// Date the full value is released
    pub fn maturity_date(&self) -> NaiveDate {
        self.maturity
    }

    /// Whole periods elapsed on `date`, capped at the period count
    pub fn weeks_completed_on(&self, date: NaiveDate) -> u32 {
        if date <= self.start {
            return 0;
        }
        let elapsed = (date - self.start).num_days() / DAYS_PER_PERIOD;
        (elapsed as u64).min(self.period_count as u64) as u32
    }

    /// Period running on `date`, None before the start or from maturity on
    pub fn period_for_date(&self, date: NaiveDate) -> Option<u32> {
        if date < self.start || date >= self.maturity {
            return None;
        }
        Some(self.weeks_completed_on(date) + 1)
    }
}
