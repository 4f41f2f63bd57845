//! Build script for cvm-dashboard.
//!
//! Copies the case table and country boundaries to OUT_DIR so they can be
//! embedded via `include_str!` at compile time. A missing fixture is
//! replaced by a small sample covering a few European countries.

use std::env;
use std::fs;
use std::path::Path;

/// Written when `fixtures/owid-covid-data.csv` is absent so the app still builds.
const SAMPLE_RECORDS: &str = "iso_code,continent,location,date,total_cases_per_million
FRA,Europe,France,2020-03-01,1.9
FRA,Europe,France,2020-09-01,4385.2
FRA,Europe,France,2021-03-01,56104.8
DEU,Europe,Germany,2020-03-01,1.4
DEU,Europe,Germany,2020-09-01,2934.5
DEU,Europe,Germany,2021-03-01,29272.1
ITA,Europe,Italy,2020-03-01,28.4
ITA,Europe,Italy,2020-09-01,4452.9
ITA,Europe,Italy,2021-03-01,50744.6
OWID_EUR,,Europe,2021-03-01,51276.0
";

/// Coarse outlines matching the sample records.
const SAMPLE_BOUNDARIES: &str = r#"{"type":"FeatureCollection","features":[
{"type":"Feature","id":"FRA","properties":{},"geometry":{"type":"Polygon","coordinates":[[[-4.8,48.4],[2.5,51.1],[8.2,49.0],[7.6,43.8],[3.1,42.4],[-1.8,43.4],[-4.8,48.4]]]}},
{"type":"Feature","id":"DEU","properties":{},"geometry":{"type":"Polygon","coordinates":[[[6.0,51.0],[8.7,54.9],[14.2,54.0],[15.0,51.1],[12.9,47.6],[7.6,47.6],[6.0,51.0]]]}},
{"type":"Feature","id":"ITA","properties":{},"geometry":{"type":"Polygon","coordinates":[[[7.0,44.0],[13.7,46.5],[12.4,44.2],[18.5,40.2],[15.6,38.0],[12.0,41.9],[7.0,44.0]]]}}
]}"#;

fn copy_or_sample(src_path: &str, dest: &Path, sample: &str) {
    let src = Path::new(src_path);
    if src.exists() {
        fs::copy(src, dest).unwrap_or_else(|e| {
            panic!("Failed to copy {} to {}: {}", src_path, dest.display(), e);
        });
    } else {
        fs::write(dest, sample).unwrap_or_else(|e| {
            panic!("Failed to write sample to {}: {}", dest.display(), e);
        });
        println!(
            "cargo:warning=Fixture file {} not found, using built-in sample data",
            src_path
        );
    }
    println!("cargo:rerun-if-changed={}", src_path);
}

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    copy_or_sample(
        "../fixtures/owid-covid-data.csv",
        &Path::new(&out_dir).join("owid-covid-data.csv"),
        SAMPLE_RECORDS,
    );
    copy_or_sample(
        "../fixtures/countries.geojson",
        &Path::new(&out_dir).join("countries.geojson"),
        SAMPLE_BOUNDARIES,
    );

    println!("cargo:rerun-if-changed=build.rs");
}
