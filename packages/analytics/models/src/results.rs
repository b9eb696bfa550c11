//! Per-view result tables.

use kenya_elections_data_models::SwingPotential;
use kenya_elections_geography_models::{BoundingBox, JoinReport};
use serde::{Deserialize, Serialize};

use crate::{ChartSpec, MapMetric, Metric, ValueRange, ViewId};

/// The output of rendering any view, tagged by view identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "view", content = "data")]
pub enum ViewResult {
    /// Executive summary.
    #[serde(rename = "overview")]
    Overview(OverviewView),
    /// County choropleth.
    #[serde(rename = "interactive-map")]
    InteractiveMap(MapView),
    /// Candidate results for one year.
    #[serde(rename = "historical-results")]
    HistoricalResults(HistoricalView),
    /// Turnout across all years.
    #[serde(rename = "turnout-trends")]
    TurnoutTrends(TurnoutView),
    /// 2002 province breakdown.
    #[serde(rename = "regional-patterns")]
    RegionalPatterns(RegionalView),
    /// One county, 2017 against 2022.
    #[serde(rename = "county-analysis")]
    CountyAnalysis(CountyAnalysisView),
    /// 2027 county projections.
    #[serde(rename = "county-predictions-2027")]
    CountyPredictions2027(CountyPredictionsView),
    /// 2027 national projection.
    #[serde(rename = "national-predictions-2027")]
    NationalPredictions2027(NationalPredictionsView),
}

impl ViewResult {
    /// The view that produced this result.
    #[must_use]
    pub const fn view(&self) -> ViewId {
        match self {
            Self::Overview(_) => ViewId::Overview,
            Self::InteractiveMap(_) => ViewId::InteractiveMap,
            Self::HistoricalResults(_) => ViewId::HistoricalResults,
            Self::TurnoutTrends(_) => ViewId::TurnoutTrends,
            Self::RegionalPatterns(_) => ViewId::RegionalPatterns,
            Self::CountyAnalysis(_) => ViewId::CountyAnalysis,
            Self::CountyPredictions2027(_) => ViewId::CountyPredictions2027,
            Self::NationalPredictions2027(_) => ViewId::NationalPredictions2027,
        }
    }

    /// Chart hints attached to the result.
    #[must_use]
    pub fn charts(&self) -> &[ChartSpec] {
        match self {
            Self::Overview(v) => &v.charts,
            Self::InteractiveMap(v) => &v.charts,
            Self::HistoricalResults(v) => &v.charts,
            Self::TurnoutTrends(v) => &v.charts,
            Self::RegionalPatterns(v) => &v.charts,
            Self::CountyAnalysis(v) => &v.charts,
            Self::CountyPredictions2027(v) => &v.charts,
            Self::NationalPredictions2027(v) => &v.charts,
        }
    }
}

/// A value observed in a given year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearValue {
    /// Election year.
    pub year: u32,
    /// Observed value.
    pub value: f64,
}

// ── Overview ───────────────────────────────────────────────

/// Executive summary across all documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewView {
    /// Headline figures.
    pub metrics: Vec<Metric>,
    /// Facts derived from the election history.
    pub key_findings: KeyFindings,
    /// Turnout per historical year.
    pub timeline: Vec<YearValue>,
    /// One row per regional trend.
    pub regions: Vec<RegionSwingRow>,
    /// Chart hints.
    pub charts: Vec<ChartSpec>,
}

/// Facts derived from the election history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyFindings {
    /// Year with the highest turnout.
    pub highest_turnout: Option<YearValue>,
    /// Year with the lowest turnout.
    pub lowest_turnout: Option<YearValue>,
    /// Year with the smallest margin between the top two candidates.
    pub closest_race: Option<ClosestRace>,
    /// Registered voter growth from the first to the latest election, in
    /// percent.
    pub voter_growth_percent: Option<f64>,
    /// Battleground counties in the 2027 projection, in document order.
    pub battlegrounds: Vec<String>,
    /// Findings rendered as sentences.
    pub lines: Vec<String>,
}

/// The tightest two-candidate race in the history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClosestRace {
    /// Election year.
    pub year: u32,
    /// Leading candidate.
    pub winner: String,
    /// Leading candidate's share.
    pub winner_percentage: f64,
    /// Second candidate.
    pub runner_up: String,
    /// Second candidate's share.
    pub runner_up_percentage: f64,
    /// Difference in percentage points.
    pub margin: f64,
}

/// Youth share and dominant swing category for one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionSwingRow {
    /// Region display name.
    pub region: String,
    /// Member counties found in the county document.
    pub county_count: usize,
    /// Mean youth percentage of those counties.
    pub youth_percentage: f64,
    /// Most frequent swing category among those counties.
    pub swing_potential: SwingPotential,
}

// ── Interactive map ────────────────────────────────────────

/// County choropleth table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapView {
    /// Selected metric.
    pub metric: MapMetric,
    /// Map title.
    pub title: String,
    /// One row per county, in document order.
    pub rows: Vec<MapRow>,
    /// Fixed color range for the metric.
    pub color_range: Option<ValueRange>,
    /// Summary figures for the selected metric.
    pub insights: Vec<Metric>,
    /// Swing level legend; empty for other metrics.
    pub legend: Vec<LegendEntry>,
    /// Counties and boundaries that found no partner.
    pub join: JoinReport,
    /// Extent of all boundary geometries.
    pub bounds: Option<BoundingBox>,
    /// Chart hints.
    pub charts: Vec<ChartSpec>,
}

/// One county on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapRow {
    /// Geographic county name, the join key against boundary features.
    pub county: String,
    /// Statistical county name, for display.
    pub display_name: String,
    /// 2027 swing category.
    pub swing_potential: SwingPotential,
    /// Swing category as 1 (Very Low) to 5 (Very High).
    pub swing_level: Option<u8>,
    /// Ruto 2022 share.
    #[serde(rename = "ruto2022")]
    pub ruto_2022: f64,
    /// Odinga 2022 share.
    #[serde(rename = "odinga2022")]
    pub odinga_2022: f64,
    /// Projected 2027 registered voters.
    #[serde(rename = "projectedVoters2027")]
    pub projected_voters_2027: u64,
    /// Youth percentage.
    pub youth_percentage: f64,
    /// 2022 turnout.
    #[serde(rename = "turnout2022")]
    pub turnout_2022: f64,
    /// 2027 trend text.
    #[serde(rename = "trend2027")]
    pub trend_2027: String,
    /// Value of the selected metric.
    pub value: Option<f64>,
    /// Whether a boundary feature carries this county's geographic name.
    pub has_boundary: bool,
}

/// One swing level in the map legend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendEntry {
    /// Category.
    pub level: SwingPotential,
    /// Numeric level.
    pub value: u8,
    /// CSS color.
    pub color: String,
    /// What the level means.
    pub description: String,
}

// ── Historical results ─────────────────────────────────────

/// Candidate results for one election year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalView {
    /// Election year.
    pub year: u32,
    /// Registered voters, votes cast, turnout.
    pub metrics: Vec<Metric>,
    /// Candidates in source order.
    pub candidates: Vec<CandidateRow>,
    /// Chart hints.
    pub charts: Vec<ChartSpec>,
}

/// One candidate's result with display strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRow {
    /// Candidate name.
    pub name: String,
    /// Party.
    pub party: String,
    /// Votes received.
    pub votes: u64,
    /// Share of the vote.
    pub percentage: f64,
    /// Votes with thousands separators.
    pub votes_display: String,
    /// Share with two decimals.
    pub percentage_display: String,
}

// ── Turnout trends ─────────────────────────────────────────

/// Turnout across the historical years.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnoutView {
    /// One row per year, ascending.
    pub rows: Vec<TurnoutRow>,
    /// Summary statistics.
    pub stats: TurnoutStats,
    /// Statistics as headline figures.
    pub metrics: Vec<Metric>,
    /// Chart hints.
    pub charts: Vec<ChartSpec>,
}

/// One election year's turnout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnoutRow {
    /// Election year.
    pub year: u32,
    /// Registered voters.
    pub registered_voters: u64,
    /// Votes cast.
    pub votes_cast: u64,
    /// Turnout percentage.
    pub turnout: f64,
    /// Turnout minus the previous year's turnout.
    pub change: Option<f64>,
    /// Registered voters with thousands separators.
    pub registered_display: String,
    /// Votes cast with thousands separators.
    pub votes_cast_display: String,
    /// Turnout with two decimals.
    pub turnout_display: String,
    /// Registered voters in millions, e.g. `10.5M`.
    pub registered_millions: String,
}

/// Turnout statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnoutStats {
    /// Unweighted mean turnout.
    pub mean: f64,
    /// Highest turnout.
    pub highest: YearValue,
    /// Lowest turnout.
    pub lowest: YearValue,
    /// Latest turnout minus the one before.
    pub latest_change: Option<f64>,
}

// ── Regional patterns ──────────────────────────────────────

/// 2002 province breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionalView {
    /// Year the breakdown belongs to.
    pub year: u32,
    /// Candidate columns.
    pub candidates: Vec<String>,
    /// One row per province, in document order. Empty when no breakdown
    /// exists.
    pub rows: Vec<ProvinceRow>,
    /// Strongest provinces per candidate.
    pub strongholds: Vec<Stronghold>,
    /// Chart hints.
    pub charts: Vec<ChartSpec>,
}

/// One province's vote shares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvinceRow {
    /// Province name.
    pub province: String,
    /// Shares aligned with [`RegionalView::candidates`]; missing entries
    /// are zero.
    pub shares: Vec<f64>,
}

/// A province and a candidate's share there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvinceShare {
    /// Province name.
    pub province: String,
    /// Vote share.
    pub share: f64,
}

/// A candidate's strongest provinces, descending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stronghold {
    /// Candidate name.
    pub candidate: String,
    /// Top provinces.
    pub provinces: Vec<ProvinceShare>,
}

// ── County analysis ────────────────────────────────────────

/// One county, 2017 against 2022.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountyAnalysisView {
    /// Selected county.
    pub county: String,
    /// All county names, sorted, for the selector.
    pub counties: Vec<String>,
    /// Headline figures.
    pub metrics: Vec<Metric>,
    /// Raw profile figures.
    pub profile: CountyProfile,
    /// Grouped comparison rows.
    pub comparison: Vec<ComparisonRow>,
    /// Turnout in 2017 and 2022.
    pub turnout: Vec<YearValue>,
    /// Shift between the two elections.
    pub shift: VoteShift,
    /// Chart hints.
    pub charts: Vec<ChartSpec>,
}

/// Demographic and turnout figures for a county.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountyProfile {
    /// Population.
    pub population: u64,
    /// Registered voters as of 2022.
    pub registered_voters_2022: u64,
    /// Youth percentage.
    pub youth_percentage: f64,
    /// 2017 turnout.
    pub turnout_2017: f64,
    /// 2022 turnout.
    pub turnout_2022: f64,
    /// 2022 turnout minus 2017 turnout.
    pub turnout_change: f64,
}

/// One bar in the 2017/2022 comparison chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    /// Election year.
    pub year: u32,
    /// Candidate bucket.
    pub candidate: String,
    /// Vote share.
    pub percentage: f64,
}

/// Change in vote share between 2017 and 2022.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteShift {
    /// Ruto 2022 minus Kenyatta 2017.
    pub government_coalition: f64,
    /// Odinga 2022 minus Odinga 2017.
    pub opposition: f64,
}

// ── County predictions ─────────────────────────────────────

/// 2027 projections for every county.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountyPredictionsView {
    /// Totals across counties.
    pub summary: PredictionSummary,
    /// Summary as headline figures.
    pub metrics: Vec<Metric>,
    /// One row per county, in document order.
    pub rows: Vec<PredictionRow>,
    /// Counties grouped by swing category, most competitive first.
    pub groups: Vec<SwingGroup>,
    /// Counties whose swing category is missing or unrecognized.
    pub unknown: Vec<String>,
    /// High and Very High counties, in document order.
    pub battlegrounds: Vec<String>,
    /// Regional trend notes.
    pub regional_trends: Vec<RegionalTrendRow>,
    /// Chart hints.
    pub charts: Vec<ChartSpec>,
}

/// Totals across all counties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionSummary {
    /// Sum of new youth voters.
    pub total_new_youth_voters: u64,
    /// Number of High and Very High counties.
    pub swing_counties: usize,
    /// Mean youth percentage.
    pub average_youth_percentage: f64,
    /// Number of counties.
    pub county_count: usize,
}

/// One county's 2027 projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRow {
    /// Statistical county name.
    pub county: String,
    /// Projected registered voters.
    pub projected_voters: u64,
    /// New youth voters.
    pub new_youth_voters: u64,
    /// Likely turnout.
    pub likely_turnout: f64,
    /// Youth percentage.
    pub youth_percentage: f64,
    /// Trend text, `"Unknown"` when missing.
    pub trend: String,
    /// Swing category.
    pub swing_potential: SwingPotential,
}

/// Counties sharing a swing category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwingGroup {
    /// Category.
    pub swing_potential: SwingPotential,
    /// Member counties in document order.
    pub counties: Vec<String>,
}

/// A regional trend note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionalTrendRow {
    /// Region id as in the document, e.g. `Mt_Kenya`.
    pub id: String,
    /// Display name, e.g. `Mt Kenya`.
    pub region: String,
    /// Member counties.
    pub counties: Vec<String>,
    /// Expected trend.
    pub trend: String,
    /// Main influence.
    pub key_factor: String,
}

// ── National predictions ───────────────────────────────────

/// National 2027 projection and turnout scenarios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NationalPredictionsView {
    /// Headline figures.
    pub metrics: Vec<Metric>,
    /// Youth against other age groups.
    pub youth_composition: Vec<CompositionSlice>,
    /// Numbered factors.
    pub factors: Vec<FactorRow>,
    /// Scenarios with projected votes.
    pub scenarios: Vec<ScenarioRow>,
    /// Registered voters per year, ending with the 2027 projection.
    pub voter_growth: Vec<VoterGrowthPoint>,
    /// Chart hints.
    pub charts: Vec<ChartSpec>,
}

/// One pie slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositionSlice {
    /// Slice name.
    pub label: String,
    /// Percentage.
    pub value: f64,
    /// CSS color.
    pub color: String,
}

/// A numbered factor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorRow {
    /// 1-based position.
    pub rank: usize,
    /// Factor text.
    pub text: String,
}

/// A turnout scenario with its projected votes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioRow {
    /// Scenario name.
    pub name: String,
    /// Assumed turnout.
    pub turnout: f64,
    /// Narrative.
    pub description: String,
    /// `floor(total_projected_voters * turnout / 100)`.
    pub projected_votes: u64,
    /// Projected votes with thousands separators.
    pub projected_votes_display: String,
}

/// Registered voters for one year, in millions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoterGrowthPoint {
    /// Election year.
    pub year: u32,
    /// Registered voters in millions.
    pub registered_voters_millions: f64,
    /// Whether this is the 2027 projection.
    pub projected: bool,
}
