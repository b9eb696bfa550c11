use kenya_elections_analytics_models::{
    ChartKind, ChartSpec, Metric, TurnoutRow, TurnoutStats, TurnoutView, ViewId, ViewResult,
    YearValue,
};
use kenya_elections_data_models::HISTORICAL_YEARS;

use super::{ViewBuilder, first_max_by, first_min_by};
use crate::format::{mean, millions, percent, signed_percent, thousands};
use crate::{AnalyticsError, ViewContext};

/// Turnout across every historical year.
#[derive(Debug, Clone, Copy, Default)]
pub struct TurnoutTrends;

impl ViewBuilder for TurnoutTrends {
    fn view(&self) -> ViewId {
        ViewId::TurnoutTrends
    }

    fn build(&self, ctx: &ViewContext<'_>) -> Result<ViewResult, AnalyticsError> {
        let history = ctx.history()?;

        let mut rows: Vec<TurnoutRow> = Vec::with_capacity(HISTORICAL_YEARS.len());
        for year in HISTORICAL_YEARS {
            let record = history
                .record(year)
                .ok_or_else(|| AnalyticsError::not_found("election year", year))?;
            let change = rows.last().map(|prev| record.turnout - prev.turnout);
            rows.push(TurnoutRow {
                year,
                registered_voters: record.registered_voters,
                votes_cast: record.votes_cast,
                turnout: record.turnout,
                change,
                registered_display: thousands(record.registered_voters),
                votes_cast_display: thousands(record.votes_cast),
                turnout_display: percent(record.turnout, 2),
                registered_millions: millions(record.registered_voters, 1),
            });
        }

        let stats = turnout_stats(&rows);
        let metrics = stats_metrics(&stats, &rows);

        Ok(ViewResult::TurnoutTrends(TurnoutView {
            rows,
            stats,
            metrics,
            charts: vec![
                ChartSpec::new(ChartKind::Area, "Voter Turnout Trend")
                    .fields("year", "turnout")
                    .labels("Election Year", "Turnout (%)"),
                ChartSpec::new(ChartKind::Bar, "Registered Voters Growth")
                    .fields("year", "registeredVoters")
                    .labels("Election Year", "Registered Voters"),
            ],
        }))
    }
}

fn turnout_stats(rows: &[TurnoutRow]) -> TurnoutStats {
    let year_value = |r: &TurnoutRow| YearValue {
        year: r.year,
        value: r.turnout,
    };
    let empty = YearValue {
        year: 0,
        value: 0.0,
    };

    TurnoutStats {
        mean: mean(rows.iter().map(|r| r.turnout)).unwrap_or(0.0),
        highest: first_max_by(rows.iter(), |r| r.turnout).map_or(empty, year_value),
        lowest: first_min_by(rows.iter(), |r| r.turnout).map_or(empty, year_value),
        latest_change: rows.last().and_then(|r| r.change),
    }
}

fn stats_metrics(stats: &TurnoutStats, rows: &[TurnoutRow]) -> Vec<Metric> {
    let mut metrics = vec![
        Metric::new("Average Turnout", percent(stats.mean, 2)),
        Metric::new("Highest Turnout", percent(stats.highest.value, 2))
            .with_delta(stats.highest.year.to_string()),
        Metric::new("Lowest Turnout", percent(stats.lowest.value, 2))
            .with_delta(stats.lowest.year.to_string()),
    ];
    if let (Some(change), [.., previous, latest]) = (stats.latest_change, rows) {
        metrics.push(
            Metric::new(
                format!("{} vs {}", latest.year, previous.year),
                signed_percent(change, 2),
            )
            .with_delta(if change < 0.0 { "Decrease" } else { "Increase" }),
        );
    }
    metrics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use kenya_elections_data::DocumentStore;
    use kenya_elections_data_models::{CountyDocument, ElectionYearRecord};

    fn build(store: &DocumentStore) -> Result<TurnoutView, AnalyticsError> {
        match TurnoutTrends.build(&ViewContext::new(store))? {
            ViewResult::TurnoutTrends(view) => Ok(view),
            other => panic!("unexpected view {:?}", other.view()),
        }
    }

    #[test]
    fn mean_over_the_five_years() {
        let view = build(&fixtures::store()).unwrap();
        assert!((view.stats.mean - 71.32).abs() < 1e-9);
        assert_eq!(view.metrics[0].value, "71.32%");
    }

    #[test]
    fn rows_ascend_with_year_over_year_change() {
        let view = build(&fixtures::store()).unwrap();
        let years: Vec<u32> = view.rows.iter().map(|r| r.year).collect();
        assert_eq!(years, HISTORICAL_YEARS.to_vec());
        assert_eq!(view.rows[0].change, None);
        assert!((view.rows[2].change.unwrap() - 16.68).abs() < 1e-9);
        assert!((view.stats.latest_change.unwrap() - -14.74).abs() < 1e-9);
        assert_eq!(view.stats.highest.year, 2013);
        assert_eq!(view.stats.lowest.year, 2002);
        assert_eq!(view.rows[0].registered_millions, "10.5M");
        assert_eq!(view.rows[0].registered_display, "10,451,150");
        assert_eq!(view.metrics[3].label, "2022 vs 2017");
        assert_eq!(view.metrics[3].delta.as_deref(), Some("Decrease"));
    }

    #[test]
    fn mean_is_invariant_under_document_order() {
        let mut history = fixtures::history();
        let mut entries: Vec<(String, ElectionYearRecord)> = history
            .elections
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        entries.reverse();
        history.elections = entries.into_iter().collect();
        let store = DocumentStore::from_documents(history, CountyDocument::default(), None);
        let view = build(&store).unwrap();
        assert!((view.stats.mean - 71.32).abs() < 1e-9);
    }

    #[test]
    fn missing_year_is_not_found() {
        let mut history = fixtures::history();
        history.elections = history
            .elections
            .iter()
            .filter(|(k, _)| *k != "2007")
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        let store = DocumentStore::from_documents(history, CountyDocument::default(), None);
        assert!(matches!(
            build(&store),
            Err(AnalyticsError::NotFound { ref key, .. }) if key == "2007"
        ));
    }
}
