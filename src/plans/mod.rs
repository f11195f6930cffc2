//! Investment plans: reference data, eligibility rules and catalog loading

mod data;
mod eligibility;
pub mod loader;

pub use data::Plan;
pub use eligibility::{Eligibility, eligible_plans, check_amount};
pub use loader::{load_plans, load_plans_from_csv_reader, load_plans_from_json_reader};
