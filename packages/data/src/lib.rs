#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Loading of the three static dashboard documents.
//!
//! The election history and county documents are required: without them no
//! view can render. The boundary document is optional and only feeds the
//! interactive map. [`DocumentStore`] loads each document at most once per
//! process and hands out shared read-only references.

pub mod load;
pub mod paths;
pub mod store;

pub use load::{load_county_data, load_election_history, validate_counties};
pub use paths::DataPaths;
pub use store::DocumentStore;

use std::path::{Path, PathBuf};

use strum_macros::{AsRefStr, Display};
use thiserror::Error;

/// The three input documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
pub enum DocumentKind {
    /// National election history and 2027 projection.
    #[strum(serialize = "election history")]
    ElectionHistory,
    /// Per-county statistics and regional trends.
    #[strum(serialize = "county data")]
    Counties,
    /// County boundary geometries.
    #[strum(serialize = "county boundaries")]
    Boundaries,
}

impl DocumentKind {
    /// Whether the dashboard can run without this document.
    #[must_use]
    pub const fn is_optional(self) -> bool {
        matches!(self, Self::Boundaries)
    }
}

/// Errors that can occur while loading a document.
#[derive(Debug, Clone, Error)]
pub enum DataError {
    /// The document is missing or could not be parsed.
    #[error("{document} document unavailable at {}: {reason}", .path.display())]
    DocumentUnavailable {
        /// Which document failed.
        document: DocumentKind,
        /// Where it was read from.
        path: PathBuf,
        /// Underlying I/O or parse failure.
        reason: String,
    },
}

impl DataError {
    pub(crate) fn unavailable(
        document: DocumentKind,
        path: &Path,
        reason: impl std::fmt::Display,
    ) -> Self {
        Self::DocumentUnavailable {
            document,
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    /// The document this error refers to.
    #[must_use]
    pub const fn document(&self) -> DocumentKind {
        match self {
            Self::DocumentUnavailable { document, .. } => *document,
        }
    }
}
