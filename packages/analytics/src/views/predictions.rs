use kenya_elections_analytics_models::{
    ChartKind, ChartSpec, CountyPredictionsView, Metric, PredictionRow, PredictionSummary,
    RegionalTrendRow, SwingGroup, ViewId, ViewResult,
};
use kenya_elections_data_models::{CountyDocument, SwingPotential};

use super::{ViewBuilder, swing_colors};
use crate::format::{mean, millions, percent};
use crate::{AnalyticsError, ViewContext};

/// 2027 projections for every county.
#[derive(Debug, Clone, Copy, Default)]
pub struct CountyPredictions;

impl ViewBuilder for CountyPredictions {
    fn view(&self) -> ViewId {
        ViewId::CountyPredictions2027
    }

    fn build(&self, ctx: &ViewContext<'_>) -> Result<ViewResult, AnalyticsError> {
        let doc = ctx.counties()?;

        let rows: Vec<PredictionRow> = doc
            .counties
            .iter()
            .map(|(name, county)| PredictionRow {
                county: name.to_string(),
                projected_voters: county.prediction_2027.projected_voters,
                new_youth_voters: county.prediction_2027.new_youth_voters,
                likely_turnout: county.prediction_2027.likely_turnout,
                youth_percentage: county.youth_percentage,
                trend: county.prediction_2027.trend.clone(),
                swing_potential: county.prediction_2027.swing_potential,
            })
            .collect();

        let summary = summary(&rows);
        let (groups, unknown) = swing_groups(&rows);
        let battlegrounds = rows
            .iter()
            .filter(|r| r.swing_potential.is_battleground())
            .map(|r| r.county.clone())
            .collect();

        Ok(ViewResult::CountyPredictions2027(CountyPredictionsView {
            metrics: vec![
                Metric::new(
                    "Total New Youth Voters",
                    millions(summary.total_new_youth_voters, 1),
                )
                .with_delta(format!("All {} counties", summary.county_count)),
                Metric::new("Swing Counties", summary.swing_counties.to_string())
                    .with_delta("High/Very High potential"),
                Metric::new("Avg Youth %", percent(summary.average_youth_percentage, 1))
                    .with_delta("All counties"),
            ],
            summary,
            rows,
            groups,
            unknown,
            battlegrounds,
            regional_trends: regional_trends(&doc),
            charts: vec![
                ChartSpec::new(
                    ChartKind::Scatter,
                    "County Swing Potential vs Youth Voters and Turnout",
                )
                .fields("newYouthVoters", "likelyTurnout")
                .size_by("projectedVoters")
                .color_by("swingPotential")
                .labels("New Youth Voters", "Likely Turnout")
                .colors(swing_colors()),
            ],
        }))
    }
}

fn summary(rows: &[PredictionRow]) -> PredictionSummary {
    PredictionSummary {
        total_new_youth_voters: rows.iter().map(|r| r.new_youth_voters).sum(),
        swing_counties: rows
            .iter()
            .filter(|r| r.swing_potential.is_battleground())
            .count(),
        average_youth_percentage: mean(rows.iter().map(|r| r.youth_percentage)).unwrap_or(0.0),
        county_count: rows.len(),
    }
}

/// Partitions counties by category in [`SwingPotential::GROUP_ORDER`],
/// keeping document order inside each group. Counties with an unknown
/// category are returned separately.
fn swing_groups(rows: &[PredictionRow]) -> (Vec<SwingGroup>, Vec<String>) {
    let groups = SwingPotential::GROUP_ORDER
        .iter()
        .map(|level| SwingGroup {
            swing_potential: *level,
            counties: rows
                .iter()
                .filter(|r| r.swing_potential == *level)
                .map(|r| r.county.clone())
                .collect(),
        })
        .collect();
    let unknown = rows
        .iter()
        .filter(|r| !r.swing_potential.is_known())
        .map(|r| r.county.clone())
        .collect();
    (groups, unknown)
}

fn regional_trends(doc: &CountyDocument) -> Vec<RegionalTrendRow> {
    doc.regional_trends
        .iter()
        .map(|(id, trend)| RegionalTrendRow {
            id: id.to_string(),
            region: id.replace('_', " "),
            counties: trend.counties.clone(),
            trend: trend.trend.clone(),
            key_factor: trend.key_factor.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use kenya_elections_data::DocumentStore;
    use kenya_elections_data_models::ElectionHistory;

    fn build(store: &DocumentStore) -> CountyPredictionsView {
        match CountyPredictions.build(&ViewContext::new(store)).unwrap() {
            ViewResult::CountyPredictions2027(view) => view,
            other => panic!("unexpected view {:?}", other.view()),
        }
    }

    #[test]
    fn groups_partition_all_counties() {
        let view = build(&fixtures::store());
        let grouped: usize = view.groups.iter().map(|g| g.counties.len()).sum();
        assert_eq!(grouped + view.unknown.len(), 47);
        assert_eq!(view.unknown, vec!["Lamu".to_string()]);

        let mut seen: Vec<&String> = view.groups.iter().flat_map(|g| &g.counties).collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), grouped);
    }

    #[test]
    fn well_formed_document_partitions_into_exactly_47() {
        let mut counties = fixtures::counties();
        for (_, county) in counties.counties.iter_mut() {
            if !county.prediction_2027.swing_potential.is_known() {
                county.prediction_2027.swing_potential = SwingPotential::Medium;
            }
        }
        let store = DocumentStore::from_documents(ElectionHistory::default(), counties, None);
        let view = build(&store);
        let grouped: usize = view.groups.iter().map(|g| g.counties.len()).sum();
        assert_eq!(grouped, 47);
        assert!(view.unknown.is_empty());
    }

    #[test]
    fn groups_follow_category_order_and_document_order() {
        let view = build(&fixtures::store());
        let order: Vec<SwingPotential> = view.groups.iter().map(|g| g.swing_potential).collect();
        assert_eq!(order, SwingPotential::GROUP_ORDER.to_vec());

        let doc_order: Vec<String> = fixtures::counties()
            .counties
            .keys()
            .map(str::to_string)
            .collect();
        for group in &view.groups {
            let positions: Vec<usize> = group
                .counties
                .iter()
                .map(|c| doc_order.iter().position(|d| d == c).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn battlegrounds_are_high_and_very_high() {
        let view = build(&fixtures::store());
        let expected = view.groups[0].counties.len() + view.groups[1].counties.len();
        assert_eq!(view.battlegrounds.len(), expected);
        assert_eq!(view.summary.swing_counties, expected);
    }

    #[test]
    fn missing_prediction_reads_as_unknown() {
        let view = build(&fixtures::store());
        let lamu = view.rows.iter().find(|r| r.county == "Lamu").unwrap();
        assert_eq!(lamu.trend, "Unknown");
        assert_eq!(lamu.projected_voters, 0);
        assert_eq!(lamu.swing_potential, SwingPotential::Unknown);
    }

    #[test]
    fn regional_trend_names_are_readable() {
        let view = build(&fixtures::store());
        let mt_kenya = view
            .regional_trends
            .iter()
            .find(|r| r.id == "Mt_Kenya")
            .unwrap();
        assert_eq!(mt_kenya.region, "Mt Kenya");
    }
}
