//! Load plan catalogs from JSON (backend shape) or CSV files

use super::Plan;
use crate::error::PlanError;
use log::info;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// One row of a CSV plan catalog
#[derive(Debug, Deserialize)]
struct PlanRecord {
    id: String,
    name: String,
    description: Option<String>,
    weekly_return_percentage: f64,
    minimum_amount: f64,
    maximum_amount: Option<f64>,
}

impl From<PlanRecord> for Plan {
    fn from(record: PlanRecord) -> Self {
        Plan {
            id: record.id,
            name: record.name,
            description: record.description.filter(|d| !d.is_empty()),
            weekly_return_percentage: record.weekly_return_percentage,
            minimum_amount: record.minimum_amount,
            maximum_amount: record.maximum_amount.filter(|max| *max != 0.0),
        }
    }
}

fn validated(plans: Vec<Plan>) -> Result<Vec<Plan>, PlanError> {
    for plan in &plans {
        plan.validate()?;
    }
    Ok(plans)
}

/// Load plans from a JSON array of plan documents
pub fn load_plans_from_json_reader<R: Read>(reader: R) -> Result<Vec<Plan>, PlanError> {
    let plans: Vec<Plan> = serde_json::from_reader(reader)?;
    validated(plans)
}

/// Load plans from CSV with header
/// `id,name,description,weekly_return_percentage,minimum_amount,maximum_amount`
///
/// An empty `maximum_amount` means the plan has no maximum.
pub fn load_plans_from_csv_reader<R: Read>(reader: R) -> Result<Vec<Plan>, PlanError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut plans = Vec::new();
    for result in rdr.deserialize() {
        let record: PlanRecord = result?;
        plans.push(Plan::from(record));
    }
    validated(plans)
}

/// Load a plan catalog, choosing the format from the file extension
pub fn load_plans<P: AsRef<Path>>(path: P) -> Result<Vec<Plan>, PlanError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let reader = BufReader::new(File::open(path)?);
    let plans = match extension.as_str() {
        "json" => load_plans_from_json_reader(reader)?,
        "csv" => load_plans_from_csv_reader(reader)?,
        other => return Err(PlanError::UnsupportedFormat(other.to_string())),
    };

    info!("Loaded {} plans from {}", plans.len(), path.display());
    Ok(plans)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG_CSV: &str = "\
id,name,description,weekly_return_percentage,minimum_amount,maximum_amount
starter,Starter,Entry tier,15,10000,50000
growth,Growth,,20,50000,150000
premium,Premium,,25,150000,500000
elite,Elite,Uncapped,50,500000,
";

    #[test]
    fn test_csv_catalog() {
        let plans = load_plans_from_csv_reader(CATALOG_CSV.as_bytes()).unwrap();

        assert_eq!(plans.len(), 4);
        assert_eq!(plans[0].name, "Starter");
        assert_eq!(plans[0].description.as_deref(), Some("Entry tier"));
        assert_eq!(plans[1].description, None);
        assert_eq!(plans[2].weekly_return_percentage, 25.0);
        assert_eq!(plans[3].maximum_amount, None);
    }

    #[test]
    fn test_json_catalog_keeps_order() {
        let json = r#"[
            {"_id": "b", "name": "Growth", "weeklyReturnPercentage": 20, "minimumAmount": 50000, "maximumAmount": 150000},
            {"_id": "a", "name": "Starter", "weeklyReturnPercentage": 15, "minimumAmount": 10000, "maximumAmount": 50000}
        ]"#;
        let plans = load_plans_from_json_reader(json.as_bytes()).unwrap();
        let ids: Vec<&str> = plans.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_invalid_plan_rejected() {
        let csv = "\
id,name,description,weekly_return_percentage,minimum_amount,maximum_amount
bad,Bad,,-3,10000,
";
        let err = load_plans_from_csv_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, PlanError::Invalid { ref id, .. } if id == "bad"));
    }

    #[test]
    fn test_malformed_inputs() {
        assert!(matches!(
            load_plans_from_json_reader("{not json".as_bytes()),
            Err(PlanError::Json(_))
        ));
        let csv = "id,name,description,weekly_return_percentage,minimum_amount,maximum_amount\nx,X,,abc,1,\n";
        assert!(matches!(load_plans_from_csv_reader(csv.as_bytes()), Err(PlanError::Csv(_))));
    }

    #[test]
    fn test_unsupported_extension() {
        let path = std::env::temp_dir().join("compounding_engine_plans_test.yaml");
        std::fs::write(&path, "plans: []").unwrap();
        let result = load_plans(&path);
        std::fs::remove_file(&path).ok();
        assert!(matches!(result, Err(PlanError::UnsupportedFormat(ref ext)) if ext == "yaml"));
    }

    #[test]
    fn test_missing_file() {
        let result = load_plans("/nonexistent/plans.json");
        assert!(matches!(result, Err(PlanError::Io(_))));
    }
}
