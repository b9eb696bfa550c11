//! County boundary feature collection.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use geo::BoundingRect;
use geojson::{Feature, FeatureCollection, GeoJson};
use kenya_elections_geography_models::{
    BoundingBox, JoinReport, names::to_geo_name, names::to_statistical_name,
};

use crate::GeoError;

/// Feature property holding the county name in the boundary document.
pub const COUNTY_PROPERTY: &str = "COUNTY";

/// The parsed boundary document, indexed by county name.
///
/// Geometry is kept as-is for the map renderer; only the per-county
/// bounding boxes are derived from it.
#[derive(Debug, Clone)]
pub struct BoundaryCollection {
    collection: FeatureCollection,
    /// geographic county name -> bounding box of its geometry
    counties: BTreeMap<String, Option<BoundingBox>>,
}

/// Reads and parses the boundary document at `path`.
///
/// # Errors
///
/// Returns [`GeoError`] if the file cannot be read, is not valid `GeoJSON`,
/// or is not a feature collection.
pub fn load_boundaries(path: &Path) -> Result<BoundaryCollection, GeoError> {
    let contents = std::fs::read_to_string(path)?;
    let collection = BoundaryCollection::from_geojson_str(&contents)?;
    log::info!(
        "Loaded {} county boundaries from {}",
        collection.len(),
        path.display()
    );
    Ok(collection)
}

impl BoundaryCollection {
    /// Parses a `GeoJSON` feature collection.
    ///
    /// Features without a string `COUNTY` property are kept in the
    /// collection but cannot be joined. `COUNTY` values are used verbatim
    /// as join keys.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError`] if the text is not `GeoJSON` or not a feature
    /// collection.
    pub fn from_geojson_str(s: &str) -> Result<Self, GeoError> {
        let GeoJson::FeatureCollection(collection) = s.parse::<GeoJson>()? else {
            return Err(GeoError::NotFeatureCollection);
        };

        let mut counties = BTreeMap::new();
        for (idx, feature) in collection.features.iter().enumerate() {
            let Some(name) = county_name(feature) else {
                log::warn!("Boundary feature {idx} has no {COUNTY_PROPERTY} property");
                continue;
            };
            if name.trim() != name {
                log::warn!("Boundary feature {idx} has padded {COUNTY_PROPERTY} {name:?}; joining verbatim");
            }
            if counties.contains_key(name) {
                log::warn!("Duplicate boundary feature for county {name}");
            }
            counties.insert(name.to_string(), feature_bounds(feature));
        }

        Ok(Self {
            collection,
            counties,
        })
    }

    /// Number of named county boundaries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counties.len()
    }

    /// Returns `true` if no feature carries a county name.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counties.is_empty()
    }

    /// Whether a boundary exists for the geographic county name.
    #[must_use]
    pub fn contains(&self, geo_name: &str) -> bool {
        self.counties.contains_key(geo_name)
    }

    /// Geographic county names, sorted.
    pub fn county_names(&self) -> impl Iterator<Item = &str> {
        self.counties.keys().map(String::as_str)
    }

    /// Bounding box of a single county.
    #[must_use]
    pub fn county_bounds(&self, geo_name: &str) -> Option<BoundingBox> {
        self.counties.get(geo_name).copied().flatten()
    }

    /// Bounding box covering every county geometry.
    #[must_use]
    pub fn bounds(&self) -> Option<BoundingBox> {
        self.counties
            .values()
            .flatten()
            .copied()
            .reduce(BoundingBox::union)
    }

    /// The underlying feature collection.
    #[must_use]
    pub const fn feature_collection(&self) -> &FeatureCollection {
        &self.collection
    }

    /// Joins statistical county names against the boundaries.
    ///
    /// Each statistical name is translated with [`to_geo_name`] before
    /// lookup; each boundary name is translated back with
    /// [`to_statistical_name`] to find boundaries nobody refers to.
    #[must_use]
    pub fn join<'a>(&self, statistical_names: impl IntoIterator<Item = &'a str>) -> JoinReport {
        let mut report = JoinReport::default();
        let mut seen = BTreeSet::new();

        for name in statistical_names {
            seen.insert(name);
            if self.contains(to_geo_name(name)) {
                report.matched += 1;
            } else {
                report.unmatched_counties.push(name.to_string());
            }
        }

        report.unmatched_boundaries = self
            .county_names()
            .filter(|geo| !seen.contains(to_statistical_name(geo)))
            .map(str::to_string)
            .collect();

        report
    }
}

fn county_name(feature: &Feature) -> Option<&str> {
    feature
        .property(COUNTY_PROPERTY)
        .and_then(serde_json::Value::as_str)
        .filter(|s| !s.is_empty())
}

fn feature_bounds(feature: &Feature) -> Option<BoundingBox> {
    let geometry = feature.geometry.clone()?;
    let geo_geom: geo::Geometry<f64> = geometry.try_into().ok()?;
    geo_geom.bounding_rect().map(|rect| {
        BoundingBox::new(rect.min().x, rect.min().y, rect.max().x, rect.max().y)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    const SAMPLE: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": { "COUNTY": "Nairobi" },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[36.6, -1.45], [37.1, -1.45], [37.1, -1.15], [36.6, -1.15], [36.6, -1.45]]]
                }
            },
            {
                "type": "Feature",
                "properties": { "COUNTY": "Keiyo-Marakwet" },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[35.3, 0.3], [35.8, 0.3], [35.8, 1.4], [35.3, 1.4], [35.3, 0.3]]]
                }
            },
            {
                "type": "Feature",
                "properties": { "COUNTY": "Lake Turkana" },
                "geometry": null
            },
            {
                "type": "Feature",
                "properties": { "NAME": "no county" },
                "geometry": null
            }
        ]
    }"#;

    #[test]
    fn indexes_features_by_county_property() {
        let boundaries = BoundaryCollection::from_geojson_str(SAMPLE).unwrap();
        assert_eq!(boundaries.len(), 3);
        assert!(boundaries.contains("Keiyo-Marakwet"));
        assert!(!boundaries.contains("Elgeyo Marakwet"));
        assert_eq!(boundaries.feature_collection().features.len(), 4);
    }

    #[test]
    fn join_applies_aliases_and_reports_leftovers() {
        let boundaries = BoundaryCollection::from_geojson_str(SAMPLE).unwrap();
        let report = boundaries.join(["Nairobi", "Elgeyo Marakwet", "Mombasa"]);
        assert_eq!(report.matched, 2);
        assert_eq!(report.unmatched_counties, vec!["Mombasa".to_string()]);
        assert_eq!(report.unmatched_boundaries, vec!["Lake Turkana".to_string()]);
        assert!(!report.is_complete());
    }

    #[test]
    fn bounds_cover_all_geometries() {
        let boundaries = BoundaryCollection::from_geojson_str(SAMPLE).unwrap();
        let bounds = boundaries.bounds().unwrap();
        assert!((bounds.west - 35.3).abs() < 1e-9);
        assert!((bounds.south - -1.45).abs() < 1e-9);
        assert!((bounds.east - 37.1).abs() < 1e-9);
        assert!((bounds.north - 1.4).abs() < 1e-9);
        assert!(boundaries.county_bounds("Lake Turkana").is_none());
    }

    #[test]
    fn county_property_is_used_verbatim() {
        let boundaries = BoundaryCollection::from_geojson_str(
            r#"{"type": "FeatureCollection", "features": [
                {"type": "Feature", "properties": {"COUNTY": " Nairobi "}, "geometry": null}
            ]}"#,
        )
        .unwrap();
        assert!(boundaries.contains(" Nairobi "));
        assert!(!boundaries.contains("Nairobi"));
        let report = boundaries.join(["Nairobi"]);
        assert_eq!(report.matched, 0);
        assert_eq!(report.unmatched_boundaries, vec![" Nairobi ".to_string()]);
    }

    #[test]
    fn rejects_non_collections() {
        let err = BoundaryCollection::from_geojson_str(
            r#"{"type": "Point", "coordinates": [36.8, -1.3]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, GeoError::NotFeatureCollection));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_boundaries(&dir.path().join("absent.geojson")).unwrap_err();
        assert!(matches!(err, GeoError::Io(_)));
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let boundaries = load_boundaries(file.path()).unwrap();
        assert!(boundaries.contains("Nairobi"));
    }
}
