#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! View identifiers, view requests and the tabular results each view
//! produces.
//!
//! A view result is a set of flat row tables plus [`ChartSpec`] hints that
//! tell a renderer which fields go on which axis. No rendering logic lives
//! here.

pub mod results;

pub use results::*;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// The eight dashboard views.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum ViewId {
    /// Executive summary.
    #[serde(rename = "overview")]
    #[strum(serialize = "overview")]
    Overview,
    /// County choropleth.
    #[serde(rename = "interactive-map")]
    #[strum(serialize = "interactive-map")]
    InteractiveMap,
    /// Candidate results for one election year.
    #[serde(rename = "historical-results")]
    #[strum(serialize = "historical-results")]
    HistoricalResults,
    /// Turnout across all historical years.
    #[serde(rename = "turnout-trends")]
    #[strum(serialize = "turnout-trends")]
    TurnoutTrends,
    /// 2002 province breakdown.
    #[serde(rename = "regional-patterns")]
    #[strum(serialize = "regional-patterns")]
    RegionalPatterns,
    /// One county, 2017 against 2022.
    #[serde(rename = "county-analysis")]
    #[strum(serialize = "county-analysis")]
    CountyAnalysis,
    /// 2027 projections for every county.
    #[serde(rename = "county-predictions-2027")]
    #[strum(serialize = "county-predictions-2027")]
    CountyPredictions2027,
    /// National 2027 projection and scenarios.
    #[serde(rename = "national-predictions-2027")]
    #[strum(serialize = "national-predictions-2027")]
    NationalPredictions2027,
}

impl ViewId {
    /// Returns all variants in navigation order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Overview,
            Self::InteractiveMap,
            Self::HistoricalResults,
            Self::TurnoutTrends,
            Self::RegionalPatterns,
            Self::CountyAnalysis,
            Self::CountyPredictions2027,
            Self::NationalPredictions2027,
        ]
    }

    /// Navigation label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::InteractiveMap => "Interactive Map",
            Self::HistoricalResults => "Historical Results",
            Self::TurnoutTrends => "Turnout Trends",
            Self::RegionalPatterns => "Regional Patterns",
            Self::CountyAnalysis => "County Analysis",
            Self::CountyPredictions2027 => "County Predictions 2027",
            Self::NationalPredictions2027 => "2027 National Predictions",
        }
    }

    /// The secondary selector the view accepts, if any.
    #[must_use]
    pub const fn parameter(self) -> Option<ViewParameter> {
        match self {
            Self::InteractiveMap => Some(ViewParameter::Metric),
            Self::HistoricalResults => Some(ViewParameter::Year),
            Self::CountyAnalysis => Some(ViewParameter::County),
            Self::Overview
            | Self::TurnoutTrends
            | Self::RegionalPatterns
            | Self::CountyPredictions2027
            | Self::NationalPredictions2027 => None,
        }
    }

    /// Whether the view needs the boundary document.
    #[must_use]
    pub const fn requires_boundaries(self) -> bool {
        matches!(self, Self::InteractiveMap)
    }
}

/// Secondary selector for parameterized views.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ViewParameter {
    /// An election year.
    Year,
    /// A statistical county name.
    County,
    /// A [`MapMetric`].
    Metric,
}

/// Navigation entry describing one view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewInfo {
    /// View identifier as used in URLs and on the command line.
    pub id: ViewId,
    /// Navigation label.
    pub label: String,
    /// Accepted secondary selector.
    pub parameter: Option<ViewParameter>,
    /// Whether the view needs the boundary document.
    pub requires_boundaries: bool,
}

impl From<ViewId> for ViewInfo {
    fn from(id: ViewId) -> Self {
        Self {
            id,
            label: id.label().to_string(),
            parameter: id.parameter(),
            requires_boundaries: id.requires_boundaries(),
        }
    }
}

/// What the interactive map colors counties by.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum MapMetric {
    /// 2027 swing potential level.
    #[default]
    #[serde(rename = "swing-potential")]
    #[strum(serialize = "swing-potential")]
    SwingPotential,
    /// William Ruto's 2022 vote share.
    #[serde(rename = "ruto-2022")]
    #[strum(serialize = "ruto-2022")]
    Ruto2022,
    /// Raila Odinga's 2022 vote share.
    #[serde(rename = "odinga-2022")]
    #[strum(serialize = "odinga-2022")]
    Odinga2022,
    /// Projected registered voters in 2027.
    #[serde(rename = "projected-voters-2027")]
    #[strum(serialize = "projected-voters-2027")]
    ProjectedVoters2027,
    /// Share of the population aged 20-34.
    #[serde(rename = "youth-percentage")]
    #[strum(serialize = "youth-percentage")]
    YouthPercentage,
    /// 2022 turnout.
    #[serde(rename = "turnout-2022")]
    #[strum(serialize = "turnout-2022")]
    Turnout2022,
}

impl MapMetric {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::SwingPotential,
            Self::Ruto2022,
            Self::Odinga2022,
            Self::ProjectedVoters2027,
            Self::YouthPercentage,
            Self::Turnout2022,
        ]
    }

    /// Selector label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SwingPotential => "2027 Swing Potential",
            Self::Ruto2022 => "2022 Election Results (Ruto %)",
            Self::Odinga2022 => "2022 Election Results (Odinga %)",
            Self::ProjectedVoters2027 => "2027 Projected Voters",
            Self::YouthPercentage => "Youth Percentage",
            Self::Turnout2022 => "2022 Turnout",
        }
    }

    /// Map title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::SwingPotential => "Kenya Counties: 2027 Swing Potential",
            Self::Ruto2022 => "2022 Election: William Ruto Vote Share by County",
            Self::Odinga2022 => "2022 Election: Raila Odinga Vote Share by County",
            Self::ProjectedVoters2027 => "2027 Projected Registered Voters by County",
            Self::YouthPercentage => "Youth Population Percentage (Ages 20-34) by County",
            Self::Turnout2022 => "2022 Election: Voter Turnout by County",
        }
    }

    /// Row field holding the colored value.
    #[must_use]
    pub const fn field(self) -> &'static str {
        match self {
            Self::SwingPotential => "swingLevel",
            Self::Ruto2022 => "ruto2022",
            Self::Odinga2022 => "odinga2022",
            Self::ProjectedVoters2027 => "projectedVoters2027",
            Self::YouthPercentage => "youthPercentage",
            Self::Turnout2022 => "turnout2022",
        }
    }

    /// Legend label for the colored value.
    #[must_use]
    pub const fn value_label(self) -> &'static str {
        match self {
            Self::SwingPotential => "Swing Level",
            Self::Ruto2022 => "Ruto %",
            Self::Odinga2022 => "Odinga %",
            Self::ProjectedVoters2027 => "Projected Voters",
            Self::YouthPercentage => "Youth %",
            Self::Turnout2022 => "Turnout %",
        }
    }

    /// Fixed color range. Projected voters scale to the data.
    #[must_use]
    pub const fn color_range(self) -> Option<ValueRange> {
        match self {
            Self::SwingPotential => Some(ValueRange::new(1.0, 5.0)),
            Self::Ruto2022 | Self::Odinga2022 => Some(ValueRange::new(0.0, 100.0)),
            Self::YouthPercentage => Some(ValueRange::new(60.0, 75.0)),
            Self::Turnout2022 => Some(ValueRange::new(35.0, 85.0)),
            Self::ProjectedVoters2027 => None,
        }
    }

    /// Continuous color scale name.
    #[must_use]
    pub const fn color_scale(self) -> &'static str {
        match self {
            Self::SwingPotential => "#95a5a6,#f1c40f,#f39c12,#e74c3c,#c0392b",
            Self::Ruto2022 => "Reds",
            Self::Odinga2022 => "Greens",
            Self::ProjectedVoters2027 => "Blues",
            Self::YouthPercentage => "Purples",
            Self::Turnout2022 => "Viridis",
        }
    }
}

/// Parameters for rendering one view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewRequest {
    /// Which view to render.
    pub view: ViewId,
    /// Election year for historical results.
    pub year: Option<u32>,
    /// County for county analysis.
    pub county: Option<String>,
    /// Metric for the interactive map.
    pub metric: Option<MapMetric>,
}

impl ViewRequest {
    /// A request with no secondary selector.
    #[must_use]
    pub const fn new(view: ViewId) -> Self {
        Self {
            view,
            year: None,
            county: None,
            metric: None,
        }
    }

    /// Sets the election year.
    #[must_use]
    pub const fn with_year(mut self, year: u32) -> Self {
        self.year = Some(year);
        self
    }

    /// Sets the county.
    #[must_use]
    pub fn with_county(mut self, county: impl Into<String>) -> Self {
        self.county = Some(county.into());
        self
    }

    /// Sets the map metric.
    #[must_use]
    pub const fn with_metric(mut self, metric: MapMetric) -> Self {
        self.metric = Some(metric);
        self
    }
}

// ── Chart hints ────────────────────────────────────────────

/// Kind of chart a table is meant for.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ChartKind {
    /// Line with markers.
    Line,
    /// Line with the area below filled.
    Area,
    /// Simple bars.
    Bar,
    /// Bars grouped side by side per category.
    GroupedBar,
    /// Bars stacked per category.
    StackedBar,
    /// Pie chart.
    Pie,
    /// Pie chart with a hole.
    Donut,
    /// Bubble scatter.
    Scatter,
    /// Region map colored by value.
    Choropleth,
}

/// Inclusive numeric range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl ValueRange {
    /// Creates a range.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Fixed color for one categorical value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorEntry {
    /// Category value.
    pub value: String,
    /// CSS color.
    pub color: String,
}

/// Rendering hint for one chart: which table fields map to which visual
/// channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    /// Chart kind.
    pub kind: ChartKind,
    /// Chart title.
    pub title: String,
    /// Field on the x axis (or slice names for pies).
    pub x: Option<String>,
    /// Field on the y axis (or slice values for pies).
    pub y: Option<String>,
    /// Field driving color.
    pub color: Option<String>,
    /// Field driving marker size.
    pub size: Option<String>,
    /// X axis title.
    pub x_label: Option<String>,
    /// Y axis title.
    pub y_label: Option<String>,
    /// Fixed value range for the y axis or color scale.
    pub range: Option<ValueRange>,
    /// Named or listed continuous color scale.
    pub color_scale: Option<String>,
    /// Fixed colors for categorical values.
    pub color_map: Vec<ColorEntry>,
}

impl ChartSpec {
    /// A chart with only a kind and title.
    #[must_use]
    pub fn new(kind: ChartKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            x: None,
            y: None,
            color: None,
            size: None,
            x_label: None,
            y_label: None,
            range: None,
            color_scale: None,
            color_map: Vec::new(),
        }
    }

    /// Sets the x and y fields.
    #[must_use]
    pub fn fields(mut self, x: &str, y: &str) -> Self {
        self.x = Some(x.to_string());
        self.y = Some(y.to_string());
        self
    }

    /// Sets the color field.
    #[must_use]
    pub fn color_by(mut self, field: &str) -> Self {
        self.color = Some(field.to_string());
        self
    }

    /// Sets the size field.
    #[must_use]
    pub fn size_by(mut self, field: &str) -> Self {
        self.size = Some(field.to_string());
        self
    }

    /// Sets both axis titles.
    #[must_use]
    pub fn labels(mut self, x: &str, y: &str) -> Self {
        self.x_label = Some(x.to_string());
        self.y_label = Some(y.to_string());
        self
    }

    /// Sets the value range.
    #[must_use]
    pub const fn range(mut self, range: Option<ValueRange>) -> Self {
        self.range = range;
        self
    }

    /// Sets the continuous color scale.
    #[must_use]
    pub fn scale(mut self, scale: &str) -> Self {
        self.color_scale = Some(scale.to_string());
        self
    }

    /// Sets fixed colors for categorical values.
    #[must_use]
    pub fn colors<'a>(mut self, entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        self.color_map = entries
            .into_iter()
            .map(|(value, color)| ColorEntry {
                value: value.to_string(),
                color: color.to_string(),
            })
            .collect();
        self
    }
}

/// A headline figure with an optional delta or caption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    /// What the figure is.
    pub label: String,
    /// Formatted value.
    pub value: String,
    /// Formatted change or caption.
    pub delta: Option<String>,
}

impl Metric {
    /// A metric without a delta.
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            delta: None,
        }
    }

    /// Attaches a delta or caption.
    #[must_use]
    pub fn with_delta(mut self, delta: impl Into<String>) -> Self {
        self.delta = Some(delta.into());
        self
    }
}
