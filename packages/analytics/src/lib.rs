#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! View selection and aggregation for the elections dashboard.
//!
//! [`select`] maps a [`ViewRequest`] to the [`ViewBuilder`] for that view;
//! each builder is a pure transform from the loaded documents to a flat
//! [`ViewResult`]. Builders only touch the documents they need, so a
//! missing boundary file affects the interactive map and nothing else.

mod context;
pub mod format;
pub mod views;

#[cfg(test)]
mod fixtures;

pub use context::ViewContext;
pub use views::{ViewBuilder, select};

use kenya_elections_analytics_models::{ViewId, ViewInfo, ViewRequest, ViewResult};
use kenya_elections_data::{DataError, DocumentStore};
use thiserror::Error;

/// Errors that can occur while building a view.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// A requested year or county is not in the loaded documents.
    #[error("{kind} not found: {key}")]
    NotFound {
        /// What was looked up (`"election year"`, `"county"`).
        kind: &'static str,
        /// The missing key.
        key: String,
    },

    /// A required document failed to load.
    #[error(transparent)]
    DocumentUnavailable(#[from] DataError),

    /// The boundary document failed to load; only the map is affected.
    #[error("County boundaries unavailable: {reason}")]
    BoundariesUnavailable {
        /// Underlying load failure.
        reason: String,
    },
}

impl AnalyticsError {
    pub(crate) fn not_found(kind: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            kind,
            key: key.to_string(),
        }
    }
}

/// Renders the view described by `request` from the documents in `store`.
///
/// # Errors
///
/// Returns [`AnalyticsError`] if a document the view needs is unavailable
/// or a requested year or county does not exist.
pub fn render_view(
    store: &DocumentStore,
    request: &ViewRequest,
) -> Result<ViewResult, AnalyticsError> {
    let builder = select(request);
    log::debug!("Rendering view {}", builder.view());
    builder.build(&ViewContext::new(store))
}

/// Navigation entries for every view.
#[must_use]
pub fn list_views() -> Vec<ViewInfo> {
    ViewId::all().iter().copied().map(ViewInfo::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn every_view_except_the_map_renders_without_boundaries() {
        let store = fixtures::store_without_boundaries();
        for view in ViewId::all() {
            let result = render_view(&store, &ViewRequest::new(*view));
            if view.requires_boundaries() {
                assert!(
                    matches!(result, Err(AnalyticsError::BoundariesUnavailable { .. })),
                    "{view} should report missing boundaries"
                );
            } else {
                let result = result.unwrap_or_else(|e| panic!("{view} failed: {e}"));
                assert_eq!(result.view(), *view);
            }
        }
    }

    #[test]
    fn every_view_renders_with_all_documents() {
        let store = fixtures::store();
        for view in ViewId::all() {
            let result = render_view(&store, &ViewRequest::new(*view))
                .unwrap_or_else(|e| panic!("{view} failed: {e}"));
            assert_eq!(result.view(), *view);
            assert!(!result.charts().is_empty(), "{view} has no chart hints");
        }
    }

    #[test]
    fn results_serialize() {
        let store = fixtures::store();
        let result = render_view(&store, &ViewRequest::new(ViewId::CountyPredictions2027)).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["view"], "county-predictions-2027");
        assert_eq!(json["data"]["summary"]["countyCount"], 47);
    }

    #[test]
    fn list_views_covers_all_views_in_order() {
        let views = list_views();
        assert_eq!(views.len(), 8);
        assert_eq!(views[0].label, "Overview");
        assert_eq!(views[7].label, "2027 National Predictions");
    }
}
