#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Source document types for the Kenya elections dashboard.
//!
//! Two static JSON documents feed every view: the national election history
//! (results per election year plus the 2027 national projection) and the
//! county document (per-county statistics, 2017/2022 results, 2027
//! projections and regional trend notes). The types here mirror those
//! documents. Every field is defaulted so a county missing part of its data
//! still loads; dependent metrics then read as zero or `"Unknown"`. A
//! `null` value reads the same as a missing one, and counts written as
//! whole floats (`95000.0`) are accepted.

mod ordered;

pub use ordered::OrderedMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// The historical presidential election years covered by the dataset.
pub const HISTORICAL_YEARS: [u32; 5] = [2002, 2007, 2013, 2017, 2022];

/// Number of counties in Kenya.
pub const COUNTY_COUNT: usize = 47;

/// Sentinel used for categorical fields that are missing from the source.
pub const UNKNOWN: &str = "Unknown";

/// Deserializes `null` the same way as a missing field.
fn default_on_null<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn unknown() -> String {
    UNKNOWN.to_string()
}

/// Deserializes `null` as [`UNKNOWN`].
fn unknown_on_null<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(|s| s.unwrap_or_else(unknown))
}

/// A count as the documents write it: an integer, or a float with no
/// fractional part such as `95000.0`.
#[derive(Deserialize)]
#[serde(untagged)]
enum Count {
    Whole(u64),
    Float(f64),
}

/// Deserializes a count field. `null` reads as zero; negative or fractional
/// values are rejected.
fn count<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + TryFrom<u64>,
{
    let whole = match Option::<Count>::deserialize(deserializer)? {
        None => return Ok(T::default()),
        Some(Count::Whole(n)) => n,
        Some(Count::Float(f)) => whole_number(f).ok_or_else(|| {
            D::Error::custom(format_args!("expected a whole non-negative count, found {f}"))
        })?,
    };
    T::try_from(whole).map_err(|_| D::Error::custom(format_args!("count {whole} out of range")))
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::float_cmp
)]
fn whole_number(value: f64) -> Option<u64> {
    (value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value < u64::MAX as f64)
        .then(|| value as u64)
}

// ── Election history document ─────────────────────────────

/// The national election history document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElectionHistory {
    /// Election records keyed by year (as a string, e.g. `"2002"`).
    #[serde(default, deserialize_with = "default_on_null")]
    pub elections: OrderedMap<ElectionYearRecord>,
    /// National 2027 projection. Opaque precomputed input.
    #[serde(default, deserialize_with = "default_on_null")]
    pub predictions_2027: NationalPrediction2027,
}

impl ElectionHistory {
    /// Returns the record for `year`, if present.
    #[must_use]
    pub fn record(&self, year: u32) -> Option<&ElectionYearRecord> {
        self.elections.get(&year.to_string())
    }

    /// All years present in the document, ascending.
    #[must_use]
    pub fn years(&self) -> Vec<u32> {
        let mut years: Vec<u32> = self
            .elections
            .keys()
            .filter_map(|k| k.parse().ok())
            .collect();
        years.sort_unstable();
        years
    }

    /// Copies each map key into its record's `year` field when the record
    /// did not carry one.
    pub fn fill_years(&mut self) {
        for (key, record) in self.elections.iter_mut() {
            if record.year == 0
                && let Ok(year) = key.parse()
            {
                record.year = year;
            }
        }
    }
}

/// Results of one presidential election.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElectionYearRecord {
    /// Election year. Filled from the map key when absent.
    #[serde(default, deserialize_with = "count")]
    pub year: u32,
    /// Number of registered voters.
    #[serde(default, deserialize_with = "count")]
    pub registered_voters: u64,
    /// Number of votes cast.
    #[serde(default, deserialize_with = "count")]
    pub votes_cast: u64,
    /// Turnout percentage.
    #[serde(default, deserialize_with = "default_on_null")]
    pub turnout: f64,
    /// Candidates in the order the source lists them.
    #[serde(default, deserialize_with = "default_on_null")]
    pub candidates: Vec<CandidateResult>,
    /// Province → candidate → vote share. Only present for 2002.
    #[serde(default)]
    pub regional: Option<OrderedMap<OrderedMap<f64>>>,
}

/// A single candidate's national result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateResult {
    /// Candidate name.
    #[serde(default, deserialize_with = "default_on_null")]
    pub name: String,
    /// Party or coalition.
    #[serde(default, deserialize_with = "default_on_null")]
    pub party: String,
    /// Votes received.
    #[serde(default, deserialize_with = "count")]
    pub votes: u64,
    /// Share of the vote.
    #[serde(default, deserialize_with = "default_on_null")]
    pub percentage: f64,
}

/// The national 2027 projection singleton.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NationalPrediction2027 {
    /// Total projected registered voters.
    #[serde(default, deserialize_with = "count")]
    pub total_projected_voters: u64,
    /// Newly registered voters expected by 2027.
    #[serde(default, deserialize_with = "count")]
    pub new_voters: u64,
    /// Share of the electorate aged 20-34.
    #[serde(default, deserialize_with = "default_on_null")]
    pub youth_percentage: f64,
    /// Turnout scenarios in source order.
    #[serde(default, deserialize_with = "default_on_null")]
    pub scenarios: Vec<Scenario>,
    /// Factors expected to drive the outcome, in source order.
    #[serde(default, deserialize_with = "default_on_null")]
    pub factors: Vec<String>,
}

/// A national turnout scenario.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Scenario name.
    #[serde(default, deserialize_with = "default_on_null")]
    pub name: String,
    /// Assumed turnout percentage.
    #[serde(default, deserialize_with = "default_on_null")]
    pub turnout: f64,
    /// Narrative description.
    #[serde(default, deserialize_with = "default_on_null")]
    pub description: String,
}

// ── County document ────────────────────────────────────────

/// The county statistics document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CountyDocument {
    /// Counties keyed by canonical statistical name, in document order.
    #[serde(default, deserialize_with = "default_on_null")]
    pub counties: OrderedMap<CountyRecord>,
    /// Regional trend notes keyed by region id (e.g. `"Mt_Kenya"`).
    #[serde(default, deserialize_with = "default_on_null")]
    pub regional_trends: OrderedMap<RegionalTrend>,
}

impl CountyDocument {
    /// Returns the record for the county with statistical name `name`.
    #[must_use]
    pub fn county(&self, name: &str) -> Option<&CountyRecord> {
        self.counties.get(name)
    }

    /// County names sorted alphabetically.
    #[must_use]
    pub fn sorted_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.counties.keys().map(str::to_string).collect();
        names.sort();
        names
    }
}

/// Statistics and projections for one county.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CountyRecord {
    /// Total population.
    #[serde(default, deserialize_with = "count")]
    pub population: u64,
    /// Registered voters as of 2022.
    #[serde(default, deserialize_with = "count")]
    pub registered_voters_2022: u64,
    /// Share of the population aged 20-34.
    #[serde(default, deserialize_with = "default_on_null")]
    pub youth_percentage: f64,
    /// 2017 presidential results.
    #[serde(default, deserialize_with = "default_on_null")]
    pub results_2017: ElectionResult2017,
    /// 2022 presidential results.
    #[serde(default, deserialize_with = "default_on_null")]
    pub results_2022: ElectionResult2022,
    /// 2027 projection. Opaque precomputed input.
    #[serde(default, deserialize_with = "default_on_null")]
    pub prediction_2027: Prediction2027,
}

/// County-level 2017 result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElectionResult2017 {
    /// Uhuru Kenyatta's share.
    #[serde(default, rename = "Kenyatta", deserialize_with = "default_on_null")]
    pub kenyatta: f64,
    /// Raila Odinga's share.
    #[serde(default, rename = "Odinga", deserialize_with = "default_on_null")]
    pub odinga: f64,
    /// Turnout percentage.
    #[serde(default, deserialize_with = "default_on_null")]
    pub turnout: f64,
}

/// County-level 2022 result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElectionResult2022 {
    /// William Ruto's share.
    #[serde(default, rename = "Ruto", deserialize_with = "default_on_null")]
    pub ruto: f64,
    /// Raila Odinga's share.
    #[serde(default, rename = "Odinga", deserialize_with = "default_on_null")]
    pub odinga: f64,
    /// Turnout percentage.
    #[serde(default, deserialize_with = "default_on_null")]
    pub turnout: f64,
}

/// County-level 2027 projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction2027 {
    /// Projected registered voters.
    #[serde(default, deserialize_with = "count")]
    pub projected_voters: u64,
    /// New voters aged 18-34 expected to register.
    #[serde(default, deserialize_with = "count")]
    pub new_youth_voters: u64,
    /// Likely turnout percentage.
    #[serde(default, deserialize_with = "default_on_null")]
    pub likely_turnout: f64,
    /// How likely the county is to shift.
    #[serde(default)]
    pub swing_potential: SwingPotential,
    /// Free-text trend description.
    #[serde(default = "unknown", deserialize_with = "unknown_on_null")]
    pub trend: String,
}

impl Default for Prediction2027 {
    fn default() -> Self {
        Self {
            projected_voters: 0,
            new_youth_voters: 0,
            likely_turnout: 0.0,
            swing_potential: SwingPotential::Unknown,
            trend: unknown(),
        }
    }
}

/// A regional trend note from the county document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionalTrend {
    /// Statistical names of member counties.
    #[serde(default, deserialize_with = "default_on_null")]
    pub counties: Vec<String>,
    /// Expected trend.
    #[serde(default, deserialize_with = "default_on_null")]
    pub trend: String,
    /// The factor that most influences the region.
    #[serde(default, deserialize_with = "default_on_null")]
    pub key_factor: String,
}

// ── Swing potential ────────────────────────────────────────

/// How likely a county's vote is to shift between elections.
///
/// Source values outside the five known labels deserialize as
/// [`SwingPotential::Unknown`] instead of failing the document.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum SwingPotential {
    /// Stronghold, unlikely to change.
    #[serde(rename = "Very Low")]
    #[strum(serialize = "Very Low")]
    VeryLow,
    /// Relatively stable, minor shifts.
    #[serde(rename = "Low")]
    #[strum(serialize = "Low")]
    Low,
    /// Some competition, but leaning.
    #[serde(rename = "Medium")]
    #[strum(serialize = "Medium")]
    Medium,
    /// Competitive with recent shifts.
    #[serde(rename = "High")]
    #[strum(serialize = "High")]
    High,
    /// Highly competitive, could go either way.
    #[serde(rename = "Very High")]
    #[strum(serialize = "Very High")]
    VeryHigh,
    /// Missing or unrecognized label.
    #[default]
    #[serde(rename = "Unknown")]
    #[strum(serialize = "Unknown")]
    Unknown,
}

impl SwingPotential {
    /// The five known categories from most to least competitive. This is
    /// the order used when grouping counties.
    pub const GROUP_ORDER: [Self; 5] = [
        Self::VeryHigh,
        Self::High,
        Self::Medium,
        Self::Low,
        Self::VeryLow,
    ];

    /// Display label, e.g. `"Very High"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryLow => "Very Low",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::VeryHigh => "Very High",
            Self::Unknown => UNKNOWN,
        }
    }

    /// Numeric level used for map coloring: Very Low = 1 … Very High = 5.
    #[must_use]
    pub const fn level(self) -> Option<u8> {
        match self {
            Self::VeryLow => Some(1),
            Self::Low => Some(2),
            Self::Medium => Some(3),
            Self::High => Some(4),
            Self::VeryHigh => Some(5),
            Self::Unknown => None,
        }
    }

    /// Whether the county counts as a battleground (High or Very High).
    #[must_use]
    pub const fn is_battleground(self) -> bool {
        matches!(self, Self::High | Self::VeryHigh)
    }

    /// Whether this is one of the five known categories.
    #[must_use]
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Legend description for this level.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::VeryHigh => "Highly competitive, could go either way",
            Self::High => "Competitive with recent shifts",
            Self::Medium => "Some competition, but leaning",
            Self::Low => "Relatively stable, minor shifts",
            Self::VeryLow => "Stronghold, unlikely to change",
            Self::Unknown => "No projection available",
        }
    }

    /// Chart color for this level.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::VeryHigh => "#e74c3c",
            Self::High => "#f39c12",
            Self::Medium => "#f1c40f",
            Self::Low => "#95a5a6",
            Self::VeryLow => "#bdc3c7",
            Self::Unknown => "#ecf0f1",
        }
    }
}

impl<'de> Deserialize<'de> for SwingPotential {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = Option::<String>::deserialize(deserializer)?;
        Ok(label
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(Self::Unknown))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn county_missing_nested_results_defaults_to_zero() {
        let doc: CountyDocument = serde_json::from_str(
            r#"{"counties": {"Lamu": {"population": 143920, "results_2022": null}}}"#,
        )
        .unwrap();
        let lamu = doc.county("Lamu").unwrap();
        assert_eq!(lamu.population, 143_920);
        assert!(lamu.results_2017.kenyatta.abs() < f64::EPSILON);
        assert!(lamu.results_2022.turnout.abs() < f64::EPSILON);
        assert_eq!(lamu.prediction_2027.swing_potential, SwingPotential::Unknown);
        assert_eq!(lamu.prediction_2027.trend, UNKNOWN);
    }

    #[test]
    fn null_scalars_read_as_missing() {
        let doc: CountyDocument = serde_json::from_str(
            r#"{"counties": {"Lamu": {
                "population": null,
                "youth_percentage": null,
                "results_2017": {"Kenyatta": null, "Odinga": 60.1, "turnout": null},
                "prediction_2027": {"projected_voters": null, "trend": null, "swing_potential": null}
            }}, "regional_trends": {"Coast": {"counties": null, "trend": null, "key_factor": null}}}"#,
        )
        .unwrap();
        let lamu = doc.county("Lamu").unwrap();
        assert_eq!(lamu.population, 0);
        assert!(lamu.youth_percentage.abs() < f64::EPSILON);
        assert!(lamu.results_2017.kenyatta.abs() < f64::EPSILON);
        assert!((lamu.results_2017.odinga - 60.1).abs() < f64::EPSILON);
        assert_eq!(lamu.prediction_2027.projected_voters, 0);
        assert_eq!(lamu.prediction_2027.trend, UNKNOWN);
        assert_eq!(lamu.prediction_2027.swing_potential, SwingPotential::Unknown);
        assert!(doc.regional_trends.get("Coast").unwrap().counties.is_empty());
    }

    #[test]
    fn whole_float_counts_are_accepted() {
        let history: ElectionHistory = serde_json::from_str(
            r#"{"elections": {"2022": {"year": 2022.0, "registered_voters": 22120458.0,
                "candidates": [{"name": "William Ruto", "votes": 7176141.0, "percentage": null}]}},
                "predictions_2027": {"total_projected_voters": 27820000.0, "new_voters": null}}"#,
        )
        .unwrap();
        let record = history.record(2022).unwrap();
        assert_eq!(record.registered_voters, 22_120_458);
        assert_eq!(record.candidates[0].votes, 7_176_141);
        assert!(record.candidates[0].percentage.abs() < f64::EPSILON);
        assert_eq!(history.predictions_2027.total_projected_voters, 27_820_000);
        assert_eq!(history.predictions_2027.new_voters, 0);

        let prediction: Prediction2027 =
            serde_json::from_str(r#"{"projected_voters": 95000.0}"#).unwrap();
        assert_eq!(prediction.projected_voters, 95_000);
    }

    #[test]
    fn fractional_or_negative_counts_are_rejected() {
        for body in [
            r#"{"population": 1200.5}"#,
            r#"{"population": -3}"#,
            r#"{"population": "many"}"#,
        ] {
            assert!(
                serde_json::from_str::<CountyRecord>(body).is_err(),
                "{body} should not parse"
            );
        }
        assert!(serde_json::from_str::<ElectionYearRecord>(r#"{"year": 5000000000}"#).is_err());
    }

    #[test]
    fn swing_potential_parses_labels() {
        for (label, expected) in [
            ("\"Very High\"", SwingPotential::VeryHigh),
            ("\"High\"", SwingPotential::High),
            ("\"Medium\"", SwingPotential::Medium),
            ("\"Low\"", SwingPotential::Low),
            ("\"very low\"", SwingPotential::VeryLow),
            ("\"Volatile\"", SwingPotential::Unknown),
            ("null", SwingPotential::Unknown),
        ] {
            let parsed: SwingPotential = serde_json::from_str(label).unwrap();
            assert_eq!(parsed, expected, "label {label}");
        }
    }

    #[test]
    fn swing_potential_serializes_display_label() {
        assert_eq!(
            serde_json::to_string(&SwingPotential::VeryHigh).unwrap(),
            "\"Very High\""
        );
        assert_eq!(SwingPotential::VeryLow.to_string(), "Very Low");
    }

    #[test]
    fn swing_levels_follow_group_order() {
        let levels: Vec<u8> = SwingPotential::GROUP_ORDER
            .iter()
            .filter_map(|s| s.level())
            .collect();
        assert_eq!(levels, vec![5, 4, 3, 2, 1]);
        assert_eq!(SwingPotential::Unknown.level(), None);
    }

    #[test]
    fn election_years_filled_from_keys() {
        let mut history: ElectionHistory = serde_json::from_str(
            r#"{"elections": {"2013": {"turnout": 85.91}, "2002": {"year": 2002, "turnout": 57.18}}}"#,
        )
        .unwrap();
        history.fill_years();
        assert_eq!(history.years(), vec![2002, 2013]);
        assert_eq!(history.record(2013).unwrap().year, 2013);
        assert!(history.record(2007).is_none());
    }
}
