//! Parsing of the two statistical documents.

use std::path::Path;

use kenya_elections_data_models::{CountyDocument, ElectionHistory};

use crate::{DataError, DocumentKind};

/// Reads the national election history document.
///
/// Records that omit their `year` field take it from their map key.
///
/// # Errors
///
/// Returns [`DataError::DocumentUnavailable`] if the file cannot be read or
/// parsed.
pub fn load_election_history(path: &Path) -> Result<ElectionHistory, DataError> {
    let kind = DocumentKind::ElectionHistory;
    let contents =
        std::fs::read_to_string(path).map_err(|e| DataError::unavailable(kind, path, e))?;
    let mut history: ElectionHistory =
        serde_json::from_str(&contents).map_err(|e| DataError::unavailable(kind, path, e))?;

    history.fill_years();

    log::info!(
        "Loaded {} election years from {}",
        history.elections.len(),
        path.display()
    );
    Ok(history)
}

/// Reads the county statistics document.
///
/// Out-of-range values are logged but do not fail the load.
///
/// # Errors
///
/// Returns [`DataError::DocumentUnavailable`] if the file cannot be read or
/// parsed.
pub fn load_county_data(path: &Path) -> Result<CountyDocument, DataError> {
    let kind = DocumentKind::Counties;
    let contents =
        std::fs::read_to_string(path).map_err(|e| DataError::unavailable(kind, path, e))?;
    let doc: CountyDocument =
        serde_json::from_str(&contents).map_err(|e| DataError::unavailable(kind, path, e))?;

    for problem in validate_counties(&doc) {
        log::warn!("{problem}");
    }

    log::info!(
        "Loaded {} counties and {} regional trends from {}",
        doc.counties.len(),
        doc.regional_trends.len(),
        path.display()
    );
    Ok(doc)
}

/// Checks the soft invariants of the county document: every percentage in
/// `[0, 100]` and every swing category known.
#[must_use]
pub fn validate_counties(doc: &CountyDocument) -> Vec<String> {
    let mut problems = Vec::new();

    for (name, county) in doc.counties.iter() {
        let percentages = [
            ("youth_percentage", county.youth_percentage),
            ("results_2017.Kenyatta", county.results_2017.kenyatta),
            ("results_2017.Odinga", county.results_2017.odinga),
            ("results_2017.turnout", county.results_2017.turnout),
            ("results_2022.Ruto", county.results_2022.ruto),
            ("results_2022.Odinga", county.results_2022.odinga),
            ("results_2022.turnout", county.results_2022.turnout),
            (
                "prediction_2027.likely_turnout",
                county.prediction_2027.likely_turnout,
            ),
        ];
        for (field, value) in percentages {
            if !(0.0..=100.0).contains(&value) {
                problems.push(format!("{name}: {field} = {value} is outside [0, 100]"));
            }
        }

        if !county.prediction_2027.swing_potential.is_known() {
            problems.push(format!("{name}: unknown swing potential category"));
        }
    }

    for (region, trend) in doc.regional_trends.iter() {
        for member in &trend.counties {
            if !doc.counties.contains_key(member) {
                problems.push(format!(
                    "Regional trend {region} lists unknown county {member}"
                ));
            }
        }
    }

    problems
}
