use kenya_elections_analytics_models::{
    ChartKind, ChartSpec, ClosestRace, KeyFindings, Metric, OverviewView, RegionSwingRow,
    ViewId, ViewResult, YearValue,
};
use kenya_elections_data_models::{
    COUNTY_COUNT, CountyDocument, ElectionHistory, ElectionYearRecord, HISTORICAL_YEARS,
    NationalPrediction2027, RegionalTrend, SwingPotential,
};

use super::{ViewBuilder, first_max_by, first_min_by, swing_colors};
use crate::format::{mean, millions, percent, signed_percent};
use crate::{AnalyticsError, ViewContext};

/// Executive summary.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overview;

impl ViewBuilder for Overview {
    fn view(&self) -> ViewId {
        ViewId::Overview
    }

    fn build(&self, ctx: &ViewContext<'_>) -> Result<ViewResult, AnalyticsError> {
        let history = ctx.history()?;
        let counties = ctx.counties()?;

        let records: Vec<&ElectionYearRecord> = HISTORICAL_YEARS
            .iter()
            .filter_map(|year| history.record(*year))
            .collect();

        let timeline: Vec<YearValue> = records
            .iter()
            .map(|r| YearValue {
                year: r.year,
                value: r.turnout,
            })
            .collect();

        let key_findings = key_findings(&records, &counties, &history.predictions_2027);
        let regions = region_rows(&counties);

        Ok(ViewResult::Overview(OverviewView {
            metrics: summary_metrics(&records, &counties, &history),
            key_findings,
            timeline,
            regions,
            charts: vec![
                ChartSpec::new(ChartKind::Line, "Voter Turnout Trend (2002-2022)")
                    .fields("year", "value")
                    .labels("Election Year", "Turnout (%)"),
                ChartSpec::new(
                    ChartKind::Bar,
                    "Youth Population and Swing Potential by Region",
                )
                .fields("region", "youthPercentage")
                .color_by("swingPotential")
                .labels("Region", "Youth %")
                .colors(swing_colors()),
            ],
        }))
    }
}

fn summary_metrics(
    records: &[&ElectionYearRecord],
    counties: &CountyDocument,
    history: &ElectionHistory,
) -> Vec<Metric> {
    let mut metrics = Vec::new();

    let mut analyzed = Metric::new("Elections Analyzed", records.len().to_string());
    if let (Some(first), Some(last)) = (records.first(), records.last()) {
        analyzed = analyzed.with_delta(format!("{}-{}", first.year, last.year));
    }
    metrics.push(analyzed);

    if let Some((latest, earlier)) = records.split_last() {
        let mut turnout = Metric::new(
            format!("{} Turnout", latest.year),
            percent(latest.turnout, 2),
        );
        if let Some(previous) = earlier.last() {
            turnout = turnout.with_delta(signed_percent(latest.turnout - previous.turnout, 2));
        }
        metrics.push(turnout);
    }

    let tracked = counties.counties.len();
    metrics.push(
        Metric::new("Counties Tracked", tracked.to_string()).with_delta(
            if tracked == COUNTY_COUNT {
                "Complete coverage".to_string()
            } else {
                format!("of {COUNTY_COUNT}")
            },
        ),
    );

    let prediction = &history.predictions_2027;
    metrics.push(
        Metric::new(
            "Projected 2027 Voters",
            millions(prediction.total_projected_voters, 1),
        )
        .with_delta(format!("+{}", millions(prediction.new_voters, 1))),
    );

    metrics
}

fn key_findings(
    records: &[&ElectionYearRecord],
    counties: &CountyDocument,
    prediction: &NationalPrediction2027,
) -> KeyFindings {
    let highest_turnout = first_max_by(records.iter(), |r| r.turnout).map(|r| YearValue {
        year: r.year,
        value: r.turnout,
    });
    let lowest_turnout = first_min_by(records.iter(), |r| r.turnout).map(|r| YearValue {
        year: r.year,
        value: r.turnout,
    });
    let closest_race = first_min_by(records.iter().filter_map(|r| race(r)), |r| r.margin);
    let voter_growth_percent = match (records.first(), records.last()) {
        (Some(first), Some(last)) if first.registered_voters > 0 && records.len() > 1 => {
            Some(growth_percent(first.registered_voters, last.registered_voters))
        }
        _ => None,
    };
    let battlegrounds: Vec<String> = counties
        .counties
        .iter()
        .filter(|(_, c)| c.prediction_2027.swing_potential.is_battleground())
        .map(|(name, _)| name.to_string())
        .collect();

    let mut lines = Vec::new();
    if let Some(high) = highest_turnout {
        lines.push(format!(
            "Highest Turnout: {} with {}",
            high.year,
            percent(high.value, 2)
        ));
    }
    if let Some(low) = lowest_turnout {
        lines.push(format!(
            "Lowest Turnout: {} with {}",
            low.year,
            percent(low.value, 2)
        ));
    }
    if let Some(race) = &closest_race {
        lines.push(format!(
            "Closest Race: {} ({} {} vs {} {})",
            race.year,
            surname(&race.winner),
            percent(race.winner_percentage, 2),
            surname(&race.runner_up),
            percent(race.runner_up_percentage, 2)
        ));
    }
    if let (Some(growth), Some(first), Some(last)) =
        (voter_growth_percent, records.first(), records.last())
    {
        lines.push(format!(
            "Voter Growth: {growth:.0}% increase from {} to {}",
            first.year, last.year
        ));
    }
    if prediction.new_voters > 0 {
        lines.push(format!(
            "2027 Game Changer: {} new voters, youth {} of the electorate",
            millions(prediction.new_voters, 1),
            percent(prediction.youth_percentage, 0)
        ));
    }
    lines.push(format!(
        "Counties Covered: {} of {COUNTY_COUNT} with 2027 projections",
        counties.counties.len()
    ));
    if !battlegrounds.is_empty() {
        lines.push(format!("Key Battlegrounds: {}", battlegrounds.join(", ")));
    }

    KeyFindings {
        highest_turnout,
        lowest_turnout,
        closest_race,
        voter_growth_percent,
        battlegrounds,
        lines,
    }
}

/// The top two candidates of a record by share.
fn race(record: &ElectionYearRecord) -> Option<ClosestRace> {
    let mut candidates: Vec<_> = record.candidates.iter().collect();
    candidates.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
    let [winner, runner_up, ..] = candidates.as_slice() else {
        return None;
    };
    Some(ClosestRace {
        year: record.year,
        winner: winner.name.clone(),
        winner_percentage: winner.percentage,
        runner_up: runner_up.name.clone(),
        runner_up_percentage: runner_up.percentage,
        margin: winner.percentage - runner_up.percentage,
    })
}

#[allow(clippy::cast_precision_loss)]
fn growth_percent(from: u64, to: u64) -> f64 {
    (to as f64 - from as f64) / from as f64 * 100.0
}

fn surname(name: &str) -> &str {
    name.rsplit(' ').next().unwrap_or(name)
}

fn region_rows(counties: &CountyDocument) -> Vec<RegionSwingRow> {
    counties
        .regional_trends
        .iter()
        .map(|(id, trend)| region_row(id, trend, counties))
        .collect()
}

fn region_row(id: &str, trend: &RegionalTrend, counties: &CountyDocument) -> RegionSwingRow {
    let members: Vec<_> = trend
        .counties
        .iter()
        .filter_map(|name| counties.county(name))
        .collect();

    RegionSwingRow {
        region: id.replace('_', " "),
        county_count: members.len(),
        youth_percentage: mean(members.iter().map(|c| c.youth_percentage)).unwrap_or(0.0),
        swing_potential: dominant_swing(
            members.iter().map(|c| c.prediction_2027.swing_potential),
        ),
    }
}

/// The most frequent known category. Ties go to the more competitive
/// category; no known categories gives `Unknown`.
fn dominant_swing(values: impl Iterator<Item = SwingPotential>) -> SwingPotential {
    let values: Vec<SwingPotential> = values.collect();
    let mut best = (SwingPotential::Unknown, 0);
    for level in SwingPotential::GROUP_ORDER {
        let count = values.iter().filter(|v| **v == level).count();
        if count > best.1 {
            best = (level, count);
        }
    }
    best.0
}
