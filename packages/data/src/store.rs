//! Process-wide memoized document access.

use std::sync::{Arc, OnceLock};

use kenya_elections_data_models::{CountyDocument, ElectionHistory};
use kenya_elections_geography::{BoundaryCollection, load_boundaries};

use crate::{DataError, DataPaths, DocumentKind, load_county_data, load_election_history};

type Memo<T> = OnceLock<Result<Arc<T>, DataError>>;

/// Read-only holder of the three documents.
///
/// Each document is loaded on first access and the result, success or
/// failure, is reused for the lifetime of the store.
#[derive(Debug, Default)]
pub struct DocumentStore {
    paths: DataPaths,
    history: Memo<ElectionHistory>,
    counties: Memo<CountyDocument>,
    boundaries: Memo<BoundaryCollection>,
}

impl DocumentStore {
    /// Creates a store that lazily loads from `paths`.
    #[must_use]
    pub fn new(paths: DataPaths) -> Self {
        Self {
            paths,
            history: OnceLock::new(),
            counties: OnceLock::new(),
            boundaries: OnceLock::new(),
        }
    }

    /// Creates a store around documents that are already in memory. A
    /// `None` boundary collection behaves like a missing boundary file.
    #[must_use]
    pub fn from_documents(
        history: ElectionHistory,
        counties: CountyDocument,
        boundaries: Option<BoundaryCollection>,
    ) -> Self {
        let paths = DataPaths::default();
        let boundaries = boundaries.map(Arc::new).ok_or_else(|| {
            DataError::unavailable(
                DocumentKind::Boundaries,
                &paths.boundaries,
                "not provided",
            )
        });
        Self {
            history: OnceLock::from(Ok(Arc::new(history))),
            counties: OnceLock::from(Ok(Arc::new(counties))),
            boundaries: OnceLock::from(boundaries),
            paths,
        }
    }

    /// The configured document locations.
    #[must_use]
    pub const fn paths(&self) -> &DataPaths {
        &self.paths
    }

    /// The national election history.
    ///
    /// # Errors
    ///
    /// Returns the (memoized) load failure if the document is unavailable.
    pub fn election_history(&self) -> Result<Arc<ElectionHistory>, DataError> {
        self.history
            .get_or_init(|| {
                load_election_history(&self.paths.election_history)
                    .inspect_err(|e| log::error!("{e}"))
                    .map(Arc::new)
            })
            .clone()
    }

    /// The county statistics document.
    ///
    /// # Errors
    ///
    /// Returns the (memoized) load failure if the document is unavailable.
    pub fn county_data(&self) -> Result<Arc<CountyDocument>, DataError> {
        self.counties
            .get_or_init(|| {
                load_county_data(&self.paths.counties)
                    .inspect_err(|e| log::error!("{e}"))
                    .map(Arc::new)
            })
            .clone()
    }

    /// The county boundaries. Callers are expected to degrade gracefully
    /// when this fails.
    ///
    /// # Errors
    ///
    /// Returns the (memoized) load failure if the document is unavailable.
    pub fn boundaries(&self) -> Result<Arc<BoundaryCollection>, DataError> {
        self.boundaries
            .get_or_init(|| {
                let path = &self.paths.boundaries;
                match load_boundaries(path) {
                    Ok(boundaries) => {
                        self.log_join_mismatches(&boundaries);
                        Ok(Arc::new(boundaries))
                    }
                    Err(e) => {
                        let err = DataError::unavailable(DocumentKind::Boundaries, path, e);
                        log::warn!("{err}; the interactive map is disabled");
                        Err(err)
                    }
                }
            })
            .clone()
    }

    /// Whether the boundary document loaded.
    #[must_use]
    pub fn boundaries_available(&self) -> bool {
        self.boundaries().is_ok()
    }

    /// Loads both required documents.
    ///
    /// # Errors
    ///
    /// Returns the first required document that failed to load.
    pub fn load_required(&self) -> Result<(), DataError> {
        self.election_history()?;
        self.county_data()?;
        Ok(())
    }

    fn log_join_mismatches(&self, boundaries: &BoundaryCollection) {
        let Ok(counties) = self.county_data() else {
            return;
        };
        let report = boundaries.join(counties.counties.keys());
        for county in &report.unmatched_counties {
            log::warn!("County {county} has no boundary feature");
        }
        for boundary in &report.unmatched_boundaries {
            log::warn!("Boundary feature {boundary} has no county record");
        }
    }
}
