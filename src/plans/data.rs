//! Plan reference data

use crate::error::PlanError;
use serde::{Deserialize, Deserializer, Serialize};

/// A named investment tier
///
/// Field names follow the backend's plan documents so a catalog fetched
/// from the API deserializes as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Percent earned per weekly period (15.0 = 15%)
    pub weekly_return_percentage: f64,

    /// Smallest accepted amount (inclusive)
    pub minimum_amount: f64,

    /// Largest accepted amount (inclusive); None means no maximum
    #[serde(default, deserialize_with = "deserialize_maximum")]
    pub maximum_amount: Option<f64>,
}

/// The backend sends `null`, `0` or nothing for uncapped plans
fn deserialize_maximum<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(value.filter(|max| *max != 0.0))
}

impl Plan {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        weekly_return_percentage: f64,
        minimum_amount: f64,
        maximum_amount: Option<f64>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            weekly_return_percentage,
            minimum_amount,
            maximum_amount,
        }
    }

    /// Check if an amount falls within this plan's bounds
    pub fn accepts(&self, amount: f64) -> bool {
        amount >= self.minimum_amount
            && self.maximum_amount.map_or(true, |max| amount <= max)
    }

    /// Check the plan is usable by the engine
    pub fn validate(&self) -> Result<(), PlanError> {
        let invalid = |reason: String| PlanError::Invalid {
            id: self.id.clone(),
            reason,
        };

        if !self.weekly_return_percentage.is_finite() || self.weekly_return_percentage < 0.0 {
            return Err(invalid(format!(
                "weekly return must be a non-negative percentage, got {}",
                self.weekly_return_percentage
            )));
        }
        if !self.minimum_amount.is_finite() || self.minimum_amount <= 0.0 {
            return Err(invalid(format!(
                "minimum amount must be positive, got {}",
                self.minimum_amount
            )));
        }
        if let Some(max) = self.maximum_amount {
            if !max.is_finite() || max < self.minimum_amount {
                return Err(invalid(format!(
                    "maximum amount {} is below minimum {}",
                    max, self.minimum_amount
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_bounds_inclusive() {
        let plan = Plan::new("growth", "Growth", 20.0, 50_000.0, Some(150_000.0));

        assert!(plan.accepts(50_000.0));
        assert!(plan.accepts(150_000.0));
        assert!(!plan.accepts(49_999.99));
        assert!(!plan.accepts(150_000.01));
    }

    #[test]
    fn test_uncapped_plan() {
        let plan = Plan::new("elite", "Elite", 50.0, 500_000.0, None);
        assert!(plan.accepts(1e12));
        assert!(!plan.accepts(f64::NAN));
    }

    #[test]
    fn test_backend_document() {
        let json = r#"{
            "_id": "65f1c0ffee",
            "name": "Starter",
            "description": "Entry tier",
            "weeklyReturnPercentage": 15,
            "minimumAmount": 10000,
            "maximumAmount": 50000
        }"#;
        let plan: Plan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.id, "65f1c0ffee");
        assert_eq!(plan.description.as_deref(), Some("Entry tier"));
        assert_eq!(plan.maximum_amount, Some(50_000.0));
    }

    #[test]
    fn test_zero_or_null_maximum_means_uncapped() {
        let zero: Plan = serde_json::from_str(
            r#"{"id": "e", "name": "Elite", "weeklyReturnPercentage": 50, "minimumAmount": 500000, "maximumAmount": 0}"#,
        )
        .unwrap();
        let null: Plan = serde_json::from_str(
            r#"{"id": "e", "name": "Elite", "weeklyReturnPercentage": 50, "minimumAmount": 500000, "maximumAmount": null}"#,
        )
        .unwrap();
        let missing: Plan = serde_json::from_str(
            r#"{"id": "e", "name": "Elite", "weeklyReturnPercentage": 50, "minimumAmount": 500000}"#,
        )
        .unwrap();

        assert_eq!(zero.maximum_amount, None);
        assert_eq!(null.maximum_amount, None);
        assert_eq!(missing.maximum_amount, None);
    }

    #[test]
    fn test_validate() {
        assert!(Plan::new("ok", "Ok", 0.0, 1.0, None).validate().is_ok());
        assert!(Plan::new("neg", "Neg", -1.0, 1.0, None).validate().is_err());
        assert!(Plan::new("min", "Min", 10.0, 0.0, None).validate().is_err());
        assert!(matches!(
            Plan::new("max", "Max", 10.0, 100.0, Some(50.0)).validate(),
            Err(PlanError::Invalid { ref id, .. }) if id == "max"
        ));
    }
}
