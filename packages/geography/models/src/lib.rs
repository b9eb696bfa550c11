#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! County name resolution and geographic boundary types.
//!
//! The boundary document and the county statistics are maintained
//! separately and do not agree on every county name. [`names`] bridges the
//! two vocabularies; [`JoinReport`] describes what is left unmatched after
//! the bridge is applied.

pub mod names;

pub use names::{COUNTY_ALIASES, NameAlias, to_geo_name, to_statistical_name};

use serde::{Deserialize, Serialize};

/// A geographic bounding box in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    /// Western longitude.
    pub west: f64,
    /// Southern latitude.
    pub south: f64,
    /// Eastern longitude.
    pub east: f64,
    /// Northern latitude.
    pub north: f64,
}

impl BoundingBox {
    /// Creates a bounding box from its four edges.
    #[must_use]
    pub const fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self {
            west,
            south,
            east,
            north,
        }
    }

    /// Smallest box covering both `self` and `other`.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            west: self.west.min(other.west),
            south: self.south.min(other.south),
            east: self.east.max(other.east),
            north: self.north.max(other.north),
        }
    }
}

/// Result of joining statistical county names against boundary names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinReport {
    /// Number of statistical counties with a matching boundary.
    pub matched: usize,
    /// Statistical names with no boundary after alias translation.
    pub unmatched_counties: Vec<String>,
    /// Boundary names with no statistical county after alias translation.
    pub unmatched_boundaries: Vec<String>,
}

impl JoinReport {
    /// Returns `true` if every county and every boundary found a partner.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unmatched_counties.is_empty() && self.unmatched_boundaries.is_empty()
    }
}
