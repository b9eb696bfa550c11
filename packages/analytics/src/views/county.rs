use kenya_elections_analytics_models::{
    ChartKind, ChartSpec, ComparisonRow, CountyAnalysisView, CountyProfile, Metric, ValueRange,
    ViewId, ViewResult, VoteShift, YearValue,
};
use kenya_elections_data_models::CountyRecord;

use super::ViewBuilder;
use crate::format::{percent, signed_percent, thousands};
use crate::{AnalyticsError, ViewContext};

const GOVERNMENT: &str = "Kenyatta/Ruto";
const OPPOSITION: &str = "Odinga";

/// One county's 2017 and 2022 results side by side. Defaults to the first
/// county alphabetically.
#[derive(Debug, Clone, Default)]
pub struct CountyAnalysis {
    /// Requested statistical county name.
    pub county: Option<String>,
}

impl ViewBuilder for CountyAnalysis {
    fn view(&self) -> ViewId {
        ViewId::CountyAnalysis
    }

    fn build(&self, ctx: &ViewContext<'_>) -> Result<ViewResult, AnalyticsError> {
        let doc = ctx.counties()?;
        let counties = doc.sorted_names();

        let name = match &self.county {
            Some(name) => name.clone(),
            None => counties
                .first()
                .cloned()
                .ok_or_else(|| AnalyticsError::not_found("county", "(none)"))?,
        };
        let county = doc
            .county(&name)
            .ok_or_else(|| AnalyticsError::not_found("county", &name))?;

        let profile = profile(county);
        let shift = vote_shift(county);

        Ok(ViewResult::CountyAnalysis(CountyAnalysisView {
            metrics: vec![
                Metric::new("Population", thousands(profile.population)),
                Metric::new(
                    "Registered Voters (2022)",
                    thousands(profile.registered_voters_2022),
                ),
                Metric::new("Youth Percentage", percent(profile.youth_percentage, 1)),
                Metric::new("Turnout Change", signed_percent(profile.turnout_change, 1))
                    .with_delta("2017 to 2022"),
                Metric::new(
                    "Government Coalition Shift",
                    signed_percent(shift.government_coalition, 1),
                )
                .with_delta("Kenyatta 2017 → Ruto 2022"),
                Metric::new("Opposition Shift", signed_percent(shift.opposition, 1))
                    .with_delta("Odinga 2017 → Odinga 2022"),
            ],
            comparison: comparison_rows(county),
            turnout: vec![
                YearValue {
                    year: 2017,
                    value: profile.turnout_2017,
                },
                YearValue {
                    year: 2022,
                    value: profile.turnout_2022,
                },
            ],
            charts: vec![
                ChartSpec::new(ChartKind::GroupedBar, "2017 vs 2022 Results Comparison")
                    .fields("year", "percentage")
                    .color_by("candidate")
                    .colors([
                        (GOVERNMENT, "#3498db"),
                        ("Ruto", "#3498db"),
                        (OPPOSITION, "#e74c3c"),
                    ]),
                ChartSpec::new(ChartKind::Line, "Turnout Trend")
                    .fields("year", "value")
                    .labels("Year", "Turnout (%)")
                    .range(Some(ValueRange::new(0.0, 100.0))),
            ],
            profile,
            shift,
            county: name,
            counties,
        }))
    }
}

fn profile(county: &CountyRecord) -> CountyProfile {
    let turnout_2017 = county.results_2017.turnout;
    let turnout_2022 = county.results_2022.turnout;
    CountyProfile {
        population: county.population,
        registered_voters_2022: county.registered_voters_2022,
        youth_percentage: county.youth_percentage,
        turnout_2017,
        turnout_2022,
        turnout_change: turnout_2022 - turnout_2017,
    }
}

/// Government coalition shift is Ruto 2022 minus Kenyatta 2017; opposition
/// shift is Odinga 2022 minus Odinga 2017.
fn vote_shift(county: &CountyRecord) -> VoteShift {
    VoteShift {
        government_coalition: county.results_2022.ruto - county.results_2017.kenyatta,
        opposition: county.results_2022.odinga - county.results_2017.odinga,
    }
}

fn comparison_rows(county: &CountyRecord) -> Vec<ComparisonRow> {
    let row = |year, candidate: &str, percentage| ComparisonRow {
        year,
        candidate: candidate.to_string(),
        percentage,
    };
    vec![
        row(2017, GOVERNMENT, county.results_2017.kenyatta),
        row(2017, OPPOSITION, county.results_2017.odinga),
        row(2022, "Ruto", county.results_2022.ruto),
        row(2022, OPPOSITION, county.results_2022.odinga),
    ]
}
