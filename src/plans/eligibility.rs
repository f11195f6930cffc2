//! Plan eligibility for an amount

use super::Plan;
use crate::report::format_amount;
use log::warn;

/// Plans accepting `amount`, in catalog order
///
/// An amount no plan accepts (including non-positive or NaN amounts)
/// simply yields an empty list.
pub fn eligible_plans(amount: f64, plans: &[Plan]) -> Vec<&Plan> {
    if !amount.is_finite() || amount <= 0.0 {
        return Vec::new();
    }
    plans.iter().filter(|plan| plan.accepts(amount)).collect()
}

/// Outcome of checking an amount against a catalog
#[derive(Debug, Clone, PartialEq)]
pub enum Eligibility<'a> {
    Eligible(Vec<&'a Plan>),
    /// No plan accepts the amount; `suggested_minimum` is the first
    /// (lowest) tier's minimum, None for an empty catalog
    NoPlan {
        amount: f64,
        suggested_minimum: Option<f64>,
    },
}

impl<'a> Eligibility<'a> {
    pub fn is_eligible(&self) -> bool {
        matches!(self, Eligibility::Eligible(_))
    }

    pub fn plans(&self) -> &[&'a Plan] {
        match self {
            Eligibility::Eligible(plans) => plans,
            Eligibility::NoPlan { .. } => &[],
        }
    }

    /// Form-validation text for the amount step, None when eligible
    pub fn message(&self) -> Option<String> {
        match self {
            Eligibility::Eligible(_) => None,
            Eligibility::NoPlan { amount, suggested_minimum } => {
                let mut msg = format!("No plans available for {}.", format_amount(*amount));
                if let Some(min) = suggested_minimum {
                    msg.push_str(&format!(" Minimum is {}", format_amount(*min)));
                }
                Some(msg)
            }
        }
    }
}

/// Check an amount against a catalog
pub fn check_amount(amount: f64, plans: &[Plan]) -> Eligibility<'_> {
    let eligible = eligible_plans(amount, plans);
    if eligible.is_empty() {
        let suggested_minimum = plans.first().map(|p| p.minimum_amount);
        warn!(
            "No plan accepts amount {} (catalog of {} plans)",
            amount,
            plans.len()
        );
        return Eligibility::NoPlan {
            amount,
            suggested_minimum,
        };
    }
    Eligibility::Eligible(eligible)
}
