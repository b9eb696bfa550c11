use std::sync::Arc;

use kenya_elections_data::DocumentStore;
use kenya_elections_data_models::{CountyDocument, ElectionHistory};
use kenya_elections_geography::BoundaryCollection;

use crate::AnalyticsError;

/// Document access for view builders.
///
/// Documents are fetched on demand so that a builder only fails on the
/// documents it actually reads.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    store: &'a DocumentStore,
}

impl<'a> ViewContext<'a> {
    /// Wraps a document store.
    #[must_use]
    pub const fn new(store: &'a DocumentStore) -> Self {
        Self { store }
    }

    /// The national election history.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::DocumentUnavailable`] if the document
    /// failed to load.
    pub fn history(&self) -> Result<Arc<ElectionHistory>, AnalyticsError> {
        Ok(self.store.election_history()?)
    }

    /// The county statistics document.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::DocumentUnavailable`] if the document
    /// failed to load.
    pub fn counties(&self) -> Result<Arc<CountyDocument>, AnalyticsError> {
        Ok(self.store.county_data()?)
    }

    /// The county boundaries.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::BoundariesUnavailable`] if the document
    /// failed to load.
    pub fn boundaries(&self) -> Result<Arc<BoundaryCollection>, AnalyticsError> {
        self.store
            .boundaries()
            .map_err(|e| AnalyticsError::BoundariesUnavailable {
                reason: e.to_string(),
            })
    }
}
