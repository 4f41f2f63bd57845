//! Boundary loading from a GeoJSON FeatureCollection.
//!
//! Every polygonal feature becomes a [`BoundaryFeature`] carrying its
//! identifier and a `geo::MultiPolygon`. The identifier is taken from the
//! feature `id` member and falls back to the common ISO properties used by
//! Natural Earth derived country files.

use anyhow::{anyhow, Context, Result};
use geo::{Geometry, MultiPolygon};
use geojson::feature::Id;
use geojson::{Feature, GeoJson};

/// Property names checked, in order, when a feature has no `id` member.
pub const ID_PROPERTIES: [&str; 3] = ["iso_a3", "ISO_A3", "id"];

/// One country (or territory) outline.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryFeature {
    /// Identifier in the record iso_code space. Empty when the source has none.
    pub id: String,
    pub geometry: MultiPolygon<f64>,
}

impl BoundaryFeature {
    pub fn new(id: impl Into<String>, geometry: MultiPolygon<f64>) -> Self {
        Self {
            id: id.into(),
            geometry,
        }
    }
}

/// Parse a GeoJSON FeatureCollection into boundary features.
///
/// Features without geometry, or with non-polygonal geometry, are skipped.
pub fn load_boundaries(geojson_data: &str) -> Result<Vec<BoundaryFeature>> {
    let geojson: GeoJson = geojson_data
        .parse()
        .context("Failed to parse boundary GeoJSON")?;

    let collection = match geojson {
        GeoJson::FeatureCollection(fc) => fc,
        _ => return Err(anyhow!("Boundary GeoJSON must be a FeatureCollection")),
    };

    let mut boundaries = Vec::with_capacity(collection.features.len());
    let mut skipped = 0u32;

    for feature in collection.features {
        let id = feature_id(&feature);
        let geometry = match feature.geometry {
            Some(geometry) => {
                let converted: Geometry<f64> = geometry
                    .value
                    .try_into()
                    .map_err(|e| anyhow!("Failed to convert geometry of '{}': {:?}", id, e))?;
                match converted {
                    Geometry::MultiPolygon(mp) => mp,
                    Geometry::Polygon(p) => MultiPolygon::new(vec![p]),
                    _ => {
                        skipped += 1;
                        continue;
                    }
                }
            }
            None => {
                skipped += 1;
                continue;
            }
        };
        boundaries.push(BoundaryFeature { id, geometry });
    }

    log::info!(
        "features: Loaded {} boundaries, skipped {} non-polygonal",
        boundaries.len(),
        skipped
    );
    Ok(boundaries)
}

fn feature_id(feature: &Feature) -> String {
    match &feature.id {
        Some(Id::String(s)) => return s.clone(),
        Some(Id::Number(n)) => return n.to_string(),
        None => {}
    }
    let Some(props) = feature.properties.as_ref() else {
        return String::new();
    };
    ID_PROPERTIES
        .iter()
        .find_map(|key| match props.get(*key) {
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            Some(serde_json::Value::Number(n)) => Some(n.to_string()),
            _ => None,
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLLECTION: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "id": "FRA",
                "properties": {"name": "France"},
                "geometry": {"type": "Polygon", "coordinates": [[[0,40],[5,40],[5,45],[0,45],[0,40]]]}
            },
            {
                "type": "Feature",
                "properties": {"iso_a3": "JPN"},
                "geometry": {"type": "MultiPolygon", "coordinates": [
                    [[[130,30],[135,30],[135,35],[130,30]]],
                    [[[140,38],[142,38],[142,40],[140,38]]]
                ]}
            },
            {
                "type": "Feature",
                "id": "PIN",
                "properties": {},
                "geometry": {"type": "Point", "coordinates": [1, 2]}
            },
            {
                "type": "Feature",
                "properties": null,
                "geometry": {"type": "Polygon", "coordinates": [[[0,0],[1,0],[1,1],[0,0]]]}
            }
        ]
    }"#;

    #[test]
    fn test_load_boundaries_ids_and_geometry() {
        let boundaries = load_boundaries(COLLECTION).unwrap();
        assert_eq!(boundaries.len(), 3);
        assert_eq!(boundaries[0].id, "FRA");
        assert_eq!(boundaries[0].geometry.0.len(), 1);
        assert_eq!(boundaries[1].id, "JPN");
        assert_eq!(boundaries[1].geometry.0.len(), 2);
        // no id member and no properties
        assert_eq!(boundaries[2].id, "");
    }

    #[test]
    fn test_numeric_feature_id() {
        let data = r#"{"type":"FeatureCollection","features":[
            {"type":"Feature","id":250,"properties":{},
             "geometry":{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,0]]]}}
        ]}"#;
        let boundaries = load_boundaries(data).unwrap();
        assert_eq!(boundaries[0].id, "250");
    }

    #[test]
    fn test_rejects_non_collection() {
        let data = r#"{"type":"Point","coordinates":[0,0]}"#;
        assert!(load_boundaries(data).is_err());
        assert!(load_boundaries("not json").is_err());
    }
}
