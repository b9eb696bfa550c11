use kenya_elections_analytics_models::{
    ChartKind, ChartSpec, LegendEntry, MapMetric, MapRow, MapView, Metric, ViewId, ViewResult,
};
use kenya_elections_data_models::{CountyRecord, SwingPotential};
use kenya_elections_geography::BoundaryCollection;
use kenya_elections_geography_models::to_geo_name;

use super::{ViewBuilder, first_max_by};
use crate::format::{mean, millions, percent, thousands};
use crate::{AnalyticsError, ViewContext};

/// County choropleth colored by one metric.
#[derive(Debug, Clone, Copy, Default)]
pub struct InteractiveMap {
    /// What to color counties by.
    pub metric: MapMetric,
}

impl ViewBuilder for InteractiveMap {
    fn view(&self) -> ViewId {
        ViewId::InteractiveMap
    }

    fn build(&self, ctx: &ViewContext<'_>) -> Result<ViewResult, AnalyticsError> {
        let boundaries = ctx.boundaries()?;
        let counties = ctx.counties()?;

        let rows: Vec<MapRow> = counties
            .counties
            .iter()
            .map(|(name, county)| map_row(name, county, self.metric, &boundaries))
            .collect();

        let join = boundaries.join(counties.counties.keys());
        let legend = if self.metric == MapMetric::SwingPotential {
            legend()
        } else {
            Vec::new()
        };

        let mut chart = ChartSpec::new(ChartKind::Choropleth, self.metric.title())
            .fields("county", self.metric.field())
            .color_by(self.metric.field())
            .range(self.metric.color_range())
            .scale(self.metric.color_scale());
        chart.y_label = Some(self.metric.value_label().to_string());

        Ok(ViewResult::InteractiveMap(MapView {
            metric: self.metric,
            title: self.metric.title().to_string(),
            insights: insights(self.metric, &rows),
            rows,
            color_range: self.metric.color_range(),
            legend,
            join,
            bounds: boundaries.bounds(),
            charts: vec![chart],
        }))
    }
}

#[allow(clippy::cast_precision_loss)]
fn map_row(
    name: &str,
    county: &CountyRecord,
    metric: MapMetric,
    boundaries: &BoundaryCollection,
) -> MapRow {
    let geo_name = to_geo_name(name);
    let prediction = &county.prediction_2027;
    let swing_level = prediction.swing_potential.level();

    let value = match metric {
        MapMetric::SwingPotential => swing_level.map(f64::from),
        MapMetric::Ruto2022 => Some(county.results_2022.ruto),
        MapMetric::Odinga2022 => Some(county.results_2022.odinga),
        MapMetric::ProjectedVoters2027 => Some(prediction.projected_voters as f64),
        MapMetric::YouthPercentage => Some(county.youth_percentage),
        MapMetric::Turnout2022 => Some(county.results_2022.turnout),
    };

    MapRow {
        county: geo_name.to_string(),
        display_name: name.to_string(),
        swing_potential: prediction.swing_potential,
        swing_level,
        ruto_2022: county.results_2022.ruto,
        odinga_2022: county.results_2022.odinga,
        projected_voters_2027: prediction.projected_voters,
        youth_percentage: county.youth_percentage,
        turnout_2022: county.results_2022.turnout,
        trend_2027: prediction.trend.clone(),
        value,
        has_boundary: boundaries.contains(geo_name),
    }
}

fn legend() -> Vec<LegendEntry> {
    SwingPotential::GROUP_ORDER
        .iter()
        .filter_map(|level| {
            level.level().map(|value| LegendEntry {
                level: *level,
                value,
                color: level.color().to_string(),
                description: level.description().to_string(),
            })
        })
        .collect()
}

fn insights(metric: MapMetric, rows: &[MapRow]) -> Vec<Metric> {
    let count = |pred: &dyn Fn(&MapRow) -> bool| rows.iter().filter(|&r| pred(r)).count();

    match metric {
        MapMetric::SwingPotential => {
            let very_high = count(&|r: &MapRow| r.swing_potential == SwingPotential::VeryHigh);
            let high = count(&|r: &MapRow| r.swing_potential == SwingPotential::High);
            let competitive = very_high + high;
            vec![
                Metric::new("Very High Swing Counties", very_high.to_string()),
                Metric::new("High Swing Counties", high.to_string()),
                Metric::new("Competitive Counties", competitive.to_string()).with_delta(format!(
                    "{} relatively stable",
                    rows.len().saturating_sub(competitive)
                )),
            ]
        }
        MapMetric::Ruto2022 => vote_share_insights("Ruto", rows, |r| r.ruto_2022),
        MapMetric::Odinga2022 => vote_share_insights("Odinga", rows, |r| r.odinga_2022),
        MapMetric::ProjectedVoters2027 => {
            let total: u64 = rows.iter().map(|r| r.projected_voters_2027).sum();
            let mut insights = vec![Metric::new("Total Projected Voters", millions(total, 1))];
            if let Some(largest) = first_max_by(rows.iter(), |r| r.value.unwrap_or(0.0)) {
                insights.push(
                    Metric::new("Largest County", largest.display_name.clone())
                        .with_delta(thousands(largest.projected_voters_2027)),
                );
            }
            insights
        }
        MapMetric::YouthPercentage => {
            average_and_highest("Average Youth %", "Highest Youth %", rows, |r| {
                r.youth_percentage
            })
        }
        MapMetric::Turnout2022 => {
            average_and_highest("Average Turnout", "Highest Turnout", rows, |r| r.turnout_2022)
        }
    }
}

fn vote_share_insights(candidate: &str, rows: &[MapRow], share: fn(&MapRow) -> f64) -> Vec<Metric> {
    let mut insights =
        average_and_highest(&format!("Average {candidate} %"), "Highest", rows, share);
    let won = rows.iter().filter(|r| share(r) > 50.0).count();
    insights.push(Metric::new(
        format!("Counties Won by {candidate}"),
        won.to_string(),
    ));
    insights
}

fn average_and_highest(
    average_label: &str,
    highest_label: &str,
    rows: &[MapRow],
    value: fn(&MapRow) -> f64,
) -> Vec<Metric> {
    let mut insights = Vec::new();
    if let Some(avg) = mean(rows.iter().map(value)) {
        insights.push(Metric::new(average_label, percent(avg, 1)));
    }
    if let Some(top) = first_max_by(rows.iter(), |r| value(r)) {
        insights.push(
            Metric::new(highest_label, top.display_name.clone())
                .with_delta(percent(value(top), 1)),
        );
    }
    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn build(metric: MapMetric) -> MapView {
        let store = fixtures::store();
        match (InteractiveMap { metric })
            .build(&ViewContext::new(&store))
            .unwrap()
        {
            ViewResult::InteractiveMap(view) => view,
            other => panic!("unexpected view {:?}", other.view()),
        }
    }

    #[test]
    fn rows_use_geographic_names_as_join_key() {
        let view = build(MapMetric::SwingPotential);
        assert_eq!(view.rows.len(), 47);
        let elgeyo = view
            .rows
            .iter()
            .find(|r| r.display_name == "Elgeyo Marakwet")
            .unwrap();
        assert_eq!(elgeyo.county, "Keiyo-Marakwet");
        assert!(elgeyo.has_boundary);
        let nairobi = view.rows.iter().find(|r| r.county == "Nairobi").unwrap();
        assert_eq!(nairobi.display_name, "Nairobi");
    }

    #[test]
    fn unmatched_boundaries_are_reported_not_fatal() {
        let view = build(MapMetric::Turnout2022);
        assert_eq!(view.join.unmatched_counties, vec!["Lamu".to_string()]);
        assert_eq!(
            view.join.unmatched_boundaries,
            vec!["Lake Victoria".to_string()]
        );
        let lamu = view.rows.iter().find(|r| r.county == "Lamu").unwrap();
        assert!(!lamu.has_boundary);
        assert!(view.bounds.is_some());
    }

    #[test]
    fn swing_metric_values_and_legend() {
        let view = build(MapMetric::SwingPotential);
        assert_eq!(view.legend.len(), 5);
        assert_eq!(view.legend[0].level, SwingPotential::VeryHigh);
        for row in &view.rows {
            assert_eq!(row.value, row.swing_level.map(f64::from));
        }
        let competitive = view
            .rows
            .iter()
            .filter(|r| r.swing_potential.is_battleground())
            .count();
        assert_eq!(view.insights[2].value, competitive.to_string());
    }

    #[test]
    fn stable_count_is_relative_to_loaded_counties() {
        let county = |swing_potential| CountyRecord {
            prediction_2027: kenya_elections_data_models::Prediction2027 {
                swing_potential,
                ..Default::default()
            },
            ..CountyRecord::default()
        };
        let counties = kenya_elections_data_models::CountyDocument {
            counties: [
                ("Nakuru", county(SwingPotential::VeryHigh)),
                ("Kisumu", county(SwingPotential::Low)),
                ("Nyeri", county(SwingPotential::VeryLow)),
            ]
            .into_iter()
            .collect(),
            ..Default::default()
        };
        let store = kenya_elections_data::DocumentStore::from_documents(
            fixtures::history(),
            counties,
            Some(fixtures::boundaries()),
        );
        let ViewResult::InteractiveMap(view) = (InteractiveMap {
            metric: MapMetric::SwingPotential,
        })
        .build(&ViewContext::new(&store))
        .unwrap() else {
            panic!("expected the interactive map");
        };
        assert_eq!(view.insights[2].value, "1");
        assert_eq!(view.insights[2].delta.as_deref(), Some("2 relatively stable"));
    }

    #[test]
    fn vote_share_metric_has_fixed_range_and_no_legend() {
        let view = build(MapMetric::Ruto2022);
        assert!(view.legend.is_empty());
        let range = view.color_range.unwrap();
        assert!((range.max - 100.0).abs() < f64::EPSILON);
        assert_eq!(view.insights[0].label, "Average Ruto %");
        assert_eq!(view.charts[0].color.as_deref(), Some("ruto2022"));
    }

    #[test]
    fn projected_voters_total_in_millions() {
        let view = build(MapMetric::ProjectedVoters2027);
        let total: u64 = view.rows.iter().map(|r| r.projected_voters_2027).sum();
        assert_eq!(view.insights[0].value, millions(total, 1));
        assert!(view.color_range.is_none());
    }
}
