//! Record table loading.
//!
//! The table is the OWID layout: a header row naming at least `iso_code`,
//! `location`, `date` and `total_cases_per_million`. Other columns are
//! ignored and may appear in any order.
//!
//! # Example CSV
//! ```text
//! iso_code,continent,location,date,total_cases,total_cases_per_million
//! FRA,Europe,France,2021-01-01,2697014,41321.7
//! OWID_EUR,,Europe,2021-01-01,,
//! ```

use crate::record::Record;
use anyhow::{Context, Result};

/// Deserialize records from a CSV string.
pub fn load_records(csv_data: &str) -> Result<Vec<Record>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes());

    let mut records = Vec::new();
    let mut missing_metric = 0u32;
    for (row, result) in rdr.deserialize::<Record>().enumerate() {
        let record = result.with_context(|| format!("Failed to parse record row {}", row + 1))?;
        if record.total_cases_per_million.is_none() {
            missing_metric += 1;
        }
        records.push(record);
    }
    log::info!(
        "loader: Loaded {} records, {} without a numeric metric",
        records.len(),
        missing_metric
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_records_ignores_extra_columns() {
        let csv = "iso_code,continent,location,date,total_cases,total_cases_per_million\n\
                   FRA,Europe,France,2021-01-01,2697014,41321.7\n\
                   OWID_EUR,,Europe,2021-01-01,,\n\
                   DEU,Europe,Germany,2021-01-02,1,oops\n";
        let records = load_records(csv).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].iso_code, "FRA");
        assert_eq!(records[0].location, "France");
        assert_eq!(records[0].total_cases_per_million, Some(41321.7));
        assert!(records[1].is_aggregate());
        assert_eq!(records[1].total_cases_per_million, None);
        assert_eq!(records[2].total_cases_per_million, None);
    }

    #[test]
    fn test_load_records_missing_metric_column() {
        let csv = "iso_code,location,date\nFRA,France,2021-01-01\n";
        let records = load_records(csv).unwrap();
        assert_eq!(records[0].total_cases_per_million, None);
    }

    #[test]
    fn test_load_records_missing_required_column() {
        let csv = "iso_code,date\nFRA,2021-01-01\n";
        assert!(load_records(csv).is_err());
    }

    #[test]
    fn test_load_records_empty() {
        assert!(load_records("").unwrap().is_empty());
    }
}
