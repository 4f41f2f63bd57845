//! Record grouping and the per-country aggregate statistics used by the map.

use crate::record::Record;
use std::collections::HashMap;

/// Records split into region-level aggregates and countries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupedRecords {
    /// Aggregate entries keyed by display name ("Europe", "World", ...).
    pub aggregates: HashMap<String, Vec<Record>>,
    /// Country entries keyed by iso code.
    pub countries: HashMap<String, Vec<Record>>,
}

/// Partition records into aggregates (by location) and countries (by iso code).
/// Input order is kept within each group.
pub fn partition(records: &[Record]) -> GroupedRecords {
    let mut grouped = GroupedRecords::default();
    for record in records {
        let (map, key) = if record.is_aggregate() {
            (&mut grouped.aggregates, &record.location)
        } else {
            (&mut grouped.countries, &record.iso_code)
        };
        map.entry(key.clone()).or_default().push(record.clone());
    }
    grouped
}

/// Maximum metric per iso code, seeded at zero. Records without a numeric
/// metric are left out; an iso code with no numeric record has no entry.
pub fn max_metric_by_iso(records: &[Record]) -> HashMap<&str, f64> {
    let mut maxima: HashMap<&str, f64> = HashMap::new();
    for record in records {
        if let Some(value) = record.total_cases_per_million {
            let entry = maxima.entry(record.iso_code.as_str()).or_insert(0.0);
            *entry = entry.max(value);
        }
    }
    maxima
}

/// Display name per iso code, taken from the first record carrying it.
pub fn location_by_iso(records: &[Record]) -> HashMap<&str, &str> {
    let mut names: HashMap<&str, &str> = HashMap::new();
    for record in records {
        names
            .entry(record.iso_code.as_str())
            .or_insert(record.location.as_str());
    }
    names
}

/// Largest value of an iterator of floats, `None` when empty.
pub fn max_value(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    values.into_iter().fold(None, |acc, v| match acc {
        Some(m) if m >= v => Some(m),
        _ => Some(v),
    })
}

/// (min, max) of an iterator of ordered values, `None` when empty.
pub fn extent<T: PartialOrd + Copy>(values: impl IntoIterator<Item = T>) -> Option<(T, T)> {
    values.into_iter().fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((
            if v < lo { v } else { lo },
            if v > hi { v } else { hi },
        )),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Record> {
        vec![
            Record::new("France", "FRA", "2021-01-02", Some(20.0)),
            Record::new("Europe", "OWID_EUR", "2021-01-01", Some(5.0)),
            Record::new("France", "FRA", "2021-01-01", Some(10.0)),
            Record::new("Germany", "DEU", "2021-01-01", None),
            Record::new("World", "OWID_WRL", "2021-01-01", Some(7.0)),
            Record::new("Negative", "NEG", "2021-01-01", Some(-3.0)),
        ]
    }

    #[test]
    fn test_partition() {
        let grouped = partition(&sample());
        assert_eq!(grouped.aggregates.len(), 2);
        assert!(grouped.aggregates.contains_key("Europe"));
        assert!(grouped.aggregates.contains_key("World"));
        assert_eq!(grouped.countries.len(), 3);
        let france = &grouped.countries["FRA"];
        assert_eq!(france.len(), 2);
        // input order kept
        assert_eq!(france[0].date, "2021-01-02");
        assert!(!grouped.countries.contains_key("OWID_EUR"));
    }

    #[test]
    fn test_max_metric_by_iso() {
        let records = sample();
        let maxima = max_metric_by_iso(&records);
        assert_eq!(maxima.get("FRA"), Some(&20.0));
        assert_eq!(maxima.get("DEU"), None);
        // seeded at zero
        assert_eq!(maxima.get("NEG"), Some(&0.0));
    }

    #[test]
    fn test_location_by_iso_first_wins() {
        let mut records = sample();
        records.push(Record::new("République française", "FRA", "2021-01-03", None));
        let names = location_by_iso(&records);
        assert_eq!(names.get("FRA"), Some(&"France"));
    }

    #[test]
    fn test_max_value_and_extent() {
        assert_eq!(max_value(vec![1.0, 5.0, 3.0]), Some(5.0));
        assert_eq!(max_value(Vec::new()), None);
        assert_eq!(extent(vec![3, 1, 2]), Some((1, 3)));
        assert_eq!(extent(Vec::<i32>::new()), None);
    }
}
