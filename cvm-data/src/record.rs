use chrono::naive::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Date format of the record table: "YYYY-MM-DD"
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Identifiers starting with this prefix are region-level aggregates
/// (continents, income groups, "World"), not countries.
pub const AGGREGATE_PREFIX: &str = "OWID";

/// One dated observation of total cases per million for a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub location: String,
    pub iso_code: String,
    /// Date as supplied. Parsed on demand, never rewritten.
    pub date: String,
    /// `None` when the source value is missing or not a finite number.
    #[serde(default, deserialize_with = "deserialize_metric")]
    pub total_cases_per_million: Option<f64>,
}

impl Record {
    pub fn new(
        location: impl Into<String>,
        iso_code: impl Into<String>,
        date: impl Into<String>,
        total_cases_per_million: Option<f64>,
    ) -> Self {
        Self {
            location: location.into(),
            iso_code: iso_code.into(),
            date: date.into(),
            total_cases_per_million: total_cases_per_million.filter(|v| v.is_finite()),
        }
    }

    /// Whether this record belongs to a region-level aggregate.
    pub fn is_aggregate(&self) -> bool {
        self.iso_code.starts_with(AGGREGATE_PREFIX)
    }

    /// The observation date, if the stored text is a valid date.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }
}

/// Parse "YYYY-MM-DD", also accepting a timestamp whose first ten
/// characters are that date ("2021-01-01T00:00:00Z").
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    let day = s.get(..10).unwrap_or(s);
    NaiveDate::parse_from_str(day, DATE_FORMAT).ok()
}

/// Parse a metric cell. Empty, non-numeric and non-finite values are absent.
pub fn parse_metric(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn deserialize_metric<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_metric))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_metric() {
        assert_eq!(parse_metric("12.5"), Some(12.5));
        assert_eq!(parse_metric(" 3 "), Some(3.0));
        assert_eq!(parse_metric(""), None);
        assert_eq!(parse_metric("n/a"), None);
        assert_eq!(parse_metric("NaN"), None);
        assert_eq!(parse_metric("inf"), None);
    }

    #[test]
    fn test_parse_date() {
        let jan1 = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
        assert_eq!(parse_date("2021-01-01"), Some(jan1));
        assert_eq!(parse_date("2021-01-01T00:00:00Z"), Some(jan1));
        assert_eq!(parse_date("yesterday"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_is_aggregate() {
        assert!(Record::new("Europe", "OWID_EUR", "2021-01-01", None).is_aggregate());
        assert!(!Record::new("France", "FRA", "2021-01-01", None).is_aggregate());
    }

    #[test]
    fn test_new_drops_non_finite_metric() {
        let r = Record::new("France", "FRA", "2021-01-01", Some(f64::NAN));
        assert_eq!(r.total_cases_per_million, None);
    }
}
