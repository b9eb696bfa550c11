#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the Kenya elections server.
//!
//! View results themselves are serialized straight from
//! `kenya_elections_analytics_models`; the types here cover the query
//! string, the health probe and error bodies.

use kenya_elections_analytics_models::{MapMetric, ViewId, ViewParameter, ViewRequest};
use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
    /// Whether the boundary document loaded. The interactive map is
    /// unavailable when this is `false`.
    pub boundaries_available: bool,
}

/// Error body returned with every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Human-readable message.
    pub error: String,
}

impl ApiError {
    /// Wraps `error` as a response body.
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Query parameters for `GET /api/views/{view}`.
///
/// Selectors the view does not accept are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewQueryParams {
    /// Election year for the historical results view.
    pub year: Option<u32>,
    /// Statistical county name for the county analysis view.
    pub county: Option<String>,
    /// Map metric identifier, e.g. `ruto-2022`.
    pub metric: Option<String>,
}

impl ViewQueryParams {
    /// Builds the analytics request for `view`.
    ///
    /// # Errors
    ///
    /// Returns [`strum::ParseError`] if `view` takes a metric and `metric`
    /// is not a known map metric. Views without a metric selector ignore it.
    pub fn to_request(&self, view: ViewId) -> Result<ViewRequest, strum::ParseError> {
        let metric = match view.parameter() {
            Some(ViewParameter::Metric) => self
                .metric
                .as_deref()
                .map(|m| m.trim().parse::<MapMetric>())
                .transpose()?,
            _ => None,
        };
        Ok(ViewRequest {
            view,
            year: self.year,
            county: self.county.as_ref().map(|c| c.trim().to_string()),
            metric,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_maps_to_request() {
        let params = ViewQueryParams {
            year: Some(2013),
            county: Some(" Nakuru ".to_string()),
            metric: Some("Ruto-2022".to_string()),
        };
        let request = params.to_request(ViewId::InteractiveMap).unwrap();
        assert_eq!(request.year, Some(2013));
        assert_eq!(request.county.as_deref(), Some("Nakuru"));
        assert_eq!(request.metric, Some(MapMetric::Ruto2022));
    }

    #[test]
    fn unknown_metric_is_rejected() {
        let params = ViewQueryParams {
            metric: Some("population".to_string()),
            ..ViewQueryParams::default()
        };
        assert!(params.to_request(ViewId::InteractiveMap).is_err());
    }

    #[test]
    fn metric_is_ignored_by_views_without_a_metric() {
        let params = ViewQueryParams {
            metric: Some("rainfall".to_string()),
            ..ViewQueryParams::default()
        };
        let request = params.to_request(ViewId::Overview).unwrap();
        assert_eq!(request.metric, None);
        assert!(params.to_request(ViewId::HistoricalResults).is_ok());
    }

    #[test]
    fn health_serializes_camel_case() {
        let json = serde_json::to_value(ApiHealth {
            healthy: true,
            version: "0.1.0".to_string(),
            boundaries_available: false,
        })
        .unwrap();
        assert_eq!(json["boundariesAvailable"], false);
    }

    #[test]
    fn error_body_has_single_error_field() {
        let json = serde_json::to_value(ApiError::new("Unknown view: polls")).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "Unknown view: polls" }));
    }
}
