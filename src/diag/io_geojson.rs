// Primitives for reading the municipality boundary dataset.

use std::collections::BTreeSet;
use std::fs;

use log::debug;
use serde_json::Value as JSValue;
use snafu::{OptionExt, ResultExt};

use crate::diag::*;

/// Reads the official municipality names out of a GeoJSON boundary file.
pub fn read_reference_names(path: &str) -> DiagResult<Vec<String>> {
    let contents = fs::read_to_string(path).context(OpeningFileSnafu {
        path: path.to_string(),
    })?;
    let js: JSValue = serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu {})?;
    reference_names_from_geojson(&js)
}

/// Extracts the 'name' property of every feature, trimmed, deduplicated and
/// sorted. Every feature must carry a string 'name' property.
pub fn reference_names_from_geojson(js: &JSValue) -> DiagResult<Vec<String>> {
    let features = js["features"].as_array().context(GeoJsonShapeSnafu {
        message: "missing 'features' array",
    })?;
    debug!("reference_names_from_geojson: {:?} features", features.len());
    let mut names: BTreeSet<String> = BTreeSet::new();
    for (idx, feature) in features.iter().enumerate() {
        let name = feature["properties"]["name"]
            .as_str()
            .with_context(|| GeoJsonShapeSnafu {
                message: format!("feature {} has no string 'name' property", idx),
            })?;
        names.insert(name.trim().to_string());
    }
    Ok(names.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_trimmed_sorted_unique_names() {
        let js = json!({
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {"name": " São José "}},
                {"type": "Feature", "properties": {"name": "Blumenau"}},
                {"type": "Feature", "properties": {"name": "Blumenau"}},
            ]
        });
        let names = reference_names_from_geojson(&js).unwrap();
        assert_eq!(names, vec!["Blumenau".to_string(), "São José".to_string()]);
    }

    #[test]
    fn missing_features_array_is_an_error() {
        let js = json!({"type": "FeatureCollection"});
        assert!(matches!(
            reference_names_from_geojson(&js),
            Err(DiagError::GeoJsonShape { .. })
        ));
    }

    #[test]
    fn feature_without_a_name_is_an_error() {
        let js = json!({
            "features": [
                {"type": "Feature", "properties": {"name": "Blumenau"}},
                {"type": "Feature", "properties": {"id": 42}},
            ]
        });
        let res = reference_names_from_geojson(&js);
        match res {
            Err(DiagError::GeoJsonShape { message }) => {
                assert!(message.contains("feature 1"), "message: {}", message)
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
