//! JSON request handling for the HTTP projection endpoint
//!
//! Kept free of any HTTP types so the Lambda binary only moves bytes.

use crate::error::{EngineError, PlanError};
use crate::plans::{check_amount, Eligibility, Plan};
use crate::projection::{CompoundingEngine, ProjectionConfig, RoundingPolicy, MAX_PERIOD_COUNT};
use log::info;
use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Malformed request: {0}")]
    BadJson(#[from] serde_json::Error),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error("Request needs either weeklyRatePercent or plans")]
    MissingInput,

    #[error("periodCount {count} exceeds the limit of {max}")]
    PeriodCountTooLarge { count: u32, max: u32 },
}

impl ApiError {
    pub fn status(&self) -> u16 {
        match self {
            ApiError::BadJson(_)
            | ApiError::Engine(_)
            | ApiError::MissingInput
            | ApiError::PeriodCountTooLarge { .. } => 400,
            ApiError::Plan(PlanError::Invalid { .. }) => 400,
            ApiError::Plan(_) => 500,
        }
    }
}

/// Body of a projection request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionRequest {
    pub principal: f64,
    #[serde(default)]
    pub weekly_rate_percent: Option<f64>,
    #[serde(default)]
    pub period_count: Option<u32>,
    #[serde(default)]
    pub rounding: Option<RoundingPolicy>,
    #[serde(default)]
    pub plans: Option<Vec<Plan>>,
}

impl ProjectionRequest {
    fn config(&self) -> Result<ProjectionConfig, ApiError> {
        let mut config = ProjectionConfig::default();
        if let Some(period_count) = self.period_count {
            if period_count > MAX_PERIOD_COUNT {
                return Err(ApiError::PeriodCountTooLarge {
                    count: period_count,
                    max: MAX_PERIOD_COUNT,
                });
            }
            config.period_count = period_count;
        }
        if let Some(rounding) = self.rounding {
            config.rounding = rounding;
        }
        Ok(config)
    }
}

/// Answer a parsed request
///
/// A rate yields a single projection. A plan list yields the eligibility
/// outcome with one projection per eligible plan.
pub fn handle_request(request: &ProjectionRequest) -> Result<Value, ApiError> {
    let engine = CompoundingEngine::new(request.config()?);

    if let Some(rate) = request.weekly_rate_percent {
        let projection = engine.project(request.principal, rate)?;
        return Ok(json!({
            "projection": projection,
            "finalValue": projection.final_value(),
            "totalProfit": projection.total_profit(),
        }));
    }

    let plans = request.plans.as_deref().ok_or(ApiError::MissingInput)?;
    for plan in plans {
        plan.validate()?;
    }

    let outcome = check_amount(request.principal, plans);
    if let Eligibility::NoPlan { suggested_minimum, .. } = outcome {
        return Ok(json!({
            "eligible": false,
            "message": outcome.message(),
            "suggestedMinimum": suggested_minimum,
            "projections": [],
        }));
    }

    let projections = engine.compare_plans(request.principal, plans)?;
    info!(
        "Projected {:.2} under {} eligible plans",
        request.principal,
        projections.len()
    );
    Ok(json!({
        "eligible": true,
        "projections": projections,
    }))
}

/// Answer a raw request body with an HTTP status and a JSON body
pub fn respond(body: &[u8]) -> (u16, Value) {
    let result = serde_json::from_slice::<ProjectionRequest>(body)
        .map_err(ApiError::from)
        .and_then(|request| handle_request(&request));

    match result {
        Ok(value) => (200, value),
        Err(e) => (e.status(), json!({ "error": e.to_string() })),
    }
}
