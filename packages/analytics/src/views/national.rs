use kenya_elections_analytics_models::{
    ChartKind, ChartSpec, CompositionSlice, FactorRow, Metric, NationalPredictionsView,
    ScenarioRow, ViewId, ViewResult, VoterGrowthPoint,
};
use kenya_elections_data_models::{ElectionHistory, HISTORICAL_YEARS};

use super::ViewBuilder;
use crate::format::{millions, percent, round_to, thousands, to_millions};
use crate::{AnalyticsError, ViewContext};

const PROJECTION_YEAR: u32 = 2027;

/// National 2027 projection, factors and turnout scenarios.
#[derive(Debug, Clone, Copy, Default)]
pub struct NationalPredictions;

impl ViewBuilder for NationalPredictions {
    fn view(&self) -> ViewId {
        ViewId::NationalPredictions2027
    }

    fn build(&self, ctx: &ViewContext<'_>) -> Result<ViewResult, AnalyticsError> {
        let history = ctx.history()?;
        let prediction = &history.predictions_2027;
        let total = prediction.total_projected_voters;

        let scenarios = prediction
            .scenarios
            .iter()
            .map(|s| {
                let projected = projected_votes(total, s.turnout);
                ScenarioRow {
                    name: s.name.clone(),
                    turnout: s.turnout,
                    description: s.description.clone(),
                    projected_votes: projected,
                    projected_votes_display: thousands(projected),
                }
            })
            .collect();

        let factors = prediction
            .factors
            .iter()
            .enumerate()
            .map(|(i, text)| FactorRow {
                rank: i + 1,
                text: text.clone(),
            })
            .collect();

        let youth = prediction.youth_percentage;

        Ok(ViewResult::NationalPredictions2027(NationalPredictionsView {
            metrics: headline_metrics(&history),
            youth_composition: vec![
                CompositionSlice {
                    label: "Youth Voters (20-34)".to_string(),
                    value: youth,
                    color: "#e74c3c".to_string(),
                },
                CompositionSlice {
                    label: "Other Age Groups".to_string(),
                    value: 100.0 - youth,
                    color: "#95a5a6".to_string(),
                },
            ],
            factors,
            scenarios,
            voter_growth: voter_growth(&history),
            charts: vec![
                ChartSpec::new(ChartKind::Donut, "Projected 2027 Voter Composition")
                    .fields("label", "value")
                    .color_by("color"),
                ChartSpec::new(ChartKind::Bar, "Projected Turnout Scenarios")
                    .fields("name", "turnout")
                    .color_by("name")
                    .labels("Scenario", "Turnout (%)"),
                ChartSpec::new(ChartKind::Line, "Registered Voter Growth (2002-2027)")
                    .fields("year", "registeredVotersMillions")
                    .labels("Election Year", "Registered Voters (Millions)"),
            ],
        }))
    }
}

/// Votes cast if `turnout` percent of `total_projected_voters` vote,
/// rounded down.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn projected_votes(total_projected_voters: u64, turnout: f64) -> u64 {
    (total_projected_voters as f64 * turnout / 100.0)
        .floor()
        .max(0.0) as u64
}

fn headline_metrics(history: &ElectionHistory) -> Vec<Metric> {
    let prediction = &history.predictions_2027;
    let latest_registered = HISTORICAL_YEARS
        .iter()
        .rev()
        .find_map(|year| history.record(*year))
        .map_or(0, |r| r.registered_voters);

    let mut new_voters = Metric::new("New Voters", millions(prediction.new_voters, 1));
    if latest_registered > 0 {
        let growth = to_millions(prediction.new_voters) / to_millions(latest_registered) * 100.0;
        new_voters = new_voters.with_delta(format!("+{growth:.1}%"));
    }

    vec![
        Metric::new(
            "Projected Voters",
            millions(prediction.total_projected_voters, 1),
        ),
        new_voters,
        Metric::new("Youth Voters", percent(prediction.youth_percentage, 1))
            .with_delta("Ages 20-34"),
    ]
}

fn voter_growth(history: &ElectionHistory) -> Vec<VoterGrowthPoint> {
    HISTORICAL_YEARS
        .iter()
        .filter_map(|year| history.record(*year))
        .map(|r| VoterGrowthPoint {
            year: r.year,
            registered_voters_millions: round_to(to_millions(r.registered_voters), 2),
            projected: false,
        })
        .chain(std::iter::once(VoterGrowthPoint {
            year: PROJECTION_YEAR,
            registered_voters_millions: round_to(
                to_millions(history.predictions_2027.total_projected_voters),
                2,
            ),
            projected: true,
        }))
        .collect()
}
