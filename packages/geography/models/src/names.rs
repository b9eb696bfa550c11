//! County name resolution between the statistical and geographic
//! vocabularies.
//!
//! The county statistics use one spelling per county; the boundary file
//! uses another for a handful of them. Every name not in
//! [`COUNTY_ALIASES`] is identical in both vocabularies.

use serde::Serialize;

/// A county whose name differs between the two vocabularies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameAlias {
    /// Name used in the county statistics document.
    pub statistical: &'static str,
    /// Name used by the `COUNTY` property of the boundary document.
    pub geographic: &'static str,
}

/// Known aliases. Must stay injective in both directions.
pub const COUNTY_ALIASES: &[NameAlias] = &[
    NameAlias {
        statistical: "Elgeyo Marakwet",
        geographic: "Keiyo-Marakwet",
    },
    NameAlias {
        statistical: "Tharaka Nithi",
        geographic: "Tharaka",
    },
];

/// Maps a statistical county name to its boundary-file name.
///
/// Returns the input unchanged when there is no alias.
#[must_use]
pub fn to_geo_name(statistical: &str) -> &str {
    COUNTY_ALIASES
        .iter()
        .find(|alias| alias.statistical == statistical)
        .map_or(statistical, |alias| alias.geographic)
}

/// Maps a boundary-file county name to its statistical name.
///
/// Returns the input unchanged when there is no alias.
#[must_use]
pub fn to_statistical_name(geographic: &str) -> &str {
    COUNTY_ALIASES
        .iter()
        .find(|alias| alias.geographic == geographic)
        .map_or(geographic, |alias| alias.statistical)
}
