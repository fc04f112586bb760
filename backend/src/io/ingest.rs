//! Tabular plan upload parsing.
//!
//! Uploads are tab-separated text with a `period	sum	category_name`
//! header; periods are written as `DD.MM.YYYY`. Parsing stops at the
//! first malformed row so a bad file never yields a partial batch.

use chrono::NaiveDate;
use serde::Deserialize;
use shared::PlanUpload;

const PERIOD_FORMAT: &str = "%d.%m.%Y";

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("Malformed upload: {0}")]
    Csv(#[from] csv::Error),
    #[error("Invalid period '{0}': expected DD.MM.YYYY")]
    InvalidPeriod(String),
}

// Raw row as it appears in the file; the period is parsed separately
// because of its non-ISO format
#[derive(Debug, Deserialize)]
struct RawPlanRow {
    period: String,
    sum: Option<f64>,
    category_name: String,
}

/// Parse an uploaded plan file into upload rows, preserving file
/// order.
pub fn parse_plan_upload(data: &[u8]) -> Result<Vec<PlanUpload>, IngestError> {
    let mut reader = csv::ReaderBuilder::new().delimiter(b'\t').from_reader(data);

    let mut rows = Vec::new();
    for record in reader.deserialize::<RawPlanRow>() {
        let raw = record?;
        let period = NaiveDate::parse_from_str(&raw.period, PERIOD_FORMAT)
            .map_err(|_| IngestError::InvalidPeriod(raw.period.clone()))?;
        rows.push(PlanUpload {
            period,
            sum: raw.sum,
            category_name: raw.category_name,
        });
    }
    Ok(rows)
}
