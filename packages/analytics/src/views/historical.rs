use kenya_elections_analytics_models::{
    CandidateRow, ChartKind, ChartSpec, HistoricalView, Metric, ViewId, ViewResult,
};
use kenya_elections_data_models::HISTORICAL_YEARS;

use super::ViewBuilder;
use crate::format::{percent, thousands};
use crate::{AnalyticsError, ViewContext};

/// Candidate results for one election year. Defaults to the earliest
/// historical year.
#[derive(Debug, Clone, Copy, Default)]
pub struct HistoricalResults {
    /// Requested year.
    pub year: Option<u32>,
}

impl ViewBuilder for HistoricalResults {
    fn view(&self) -> ViewId {
        ViewId::HistoricalResults
    }

    fn build(&self, ctx: &ViewContext<'_>) -> Result<ViewResult, AnalyticsError> {
        let history = ctx.history()?;
        let year = self.year.unwrap_or(HISTORICAL_YEARS[0]);
        let record = history
            .record(year)
            .ok_or_else(|| AnalyticsError::not_found("election year", year))?;

        let candidates = record
            .candidates
            .iter()
            .map(|c| CandidateRow {
                name: c.name.clone(),
                party: c.party.clone(),
                votes: c.votes,
                percentage: c.percentage,
                votes_display: thousands(c.votes),
                percentage_display: percent(c.percentage, 2),
            })
            .collect();

        Ok(ViewResult::HistoricalResults(HistoricalView {
            year,
            metrics: vec![
                Metric::new("Registered Voters", thousands(record.registered_voters)),
                Metric::new("Votes Cast", thousands(record.votes_cast)),
                Metric::new("Turnout", percent(record.turnout, 2)),
            ],
            candidates,
            charts: vec![
                ChartSpec::new(ChartKind::Bar, format!("{year} Vote Share by Candidate"))
                    .fields("name", "percentage")
                    .color_by("party")
                    .labels("Candidate", "Vote Share (%)"),
                ChartSpec::new(ChartKind::Pie, format!("{year} Vote Distribution"))
                    .fields("name", "votes"),
            ],
        }))
    }
}
