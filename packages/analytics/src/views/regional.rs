use kenya_elections_analytics_models::{
    ChartKind, ChartSpec, ProvinceRow, ProvinceShare, RegionalView, Stronghold, ViewId,
    ViewResult,
};
use kenya_elections_data_models::{HISTORICAL_YEARS, OrderedMap};

use super::ViewBuilder;
use crate::{AnalyticsError, ViewContext};

/// Provinces listed per candidate in the strongholds table.
const STRONGHOLD_COUNT: usize = 4;

/// 2002 results by province. A missing breakdown gives an empty table.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegionalPatterns;

impl ViewBuilder for RegionalPatterns {
    fn view(&self) -> ViewId {
        ViewId::RegionalPatterns
    }

    fn build(&self, ctx: &ViewContext<'_>) -> Result<ViewResult, AnalyticsError> {
        let history = ctx.history()?;
        let year = HISTORICAL_YEARS[0];

        let empty = OrderedMap::new();
        let regional = history
            .record(year)
            .and_then(|r| r.regional.as_ref())
            .unwrap_or(&empty);
        if regional.is_empty() {
            log::debug!("No regional breakdown for {year}");
        }

        let candidates = candidate_columns(regional);
        let rows: Vec<ProvinceRow> = regional
            .iter()
            .map(|(province, shares)| ProvinceRow {
                province: province.to_string(),
                shares: candidates
                    .iter()
                    .map(|c| shares.get(c).copied().unwrap_or(0.0))
                    .collect(),
            })
            .collect();

        let strongholds = candidates
            .iter()
            .enumerate()
            .map(|(idx, candidate)| stronghold(candidate, idx, &rows))
            .collect();

        Ok(ViewResult::RegionalPatterns(RegionalView {
            year,
            candidates,
            rows,
            strongholds,
            charts: vec![
                ChartSpec::new(ChartKind::StackedBar, format!("{year} Election Results by Province"))
                    .fields("province", "shares")
                    .color_by("candidates")
                    .labels("Province", "Vote Share (%)"),
            ],
        }))
    }
}

/// Candidates of the first province in order, then any new names from
/// later provinces.
fn candidate_columns(regional: &OrderedMap<OrderedMap<f64>>) -> Vec<String> {
    let mut candidates: Vec<String> = Vec::new();
    for shares in regional.values() {
        for name in shares.keys() {
            if !candidates.iter().any(|c| c == name) {
                candidates.push(name.to_string());
            }
        }
    }
    candidates
}

fn stronghold(candidate: &str, idx: usize, rows: &[ProvinceRow]) -> Stronghold {
    let mut provinces: Vec<ProvinceShare> = rows
        .iter()
        .map(|row| ProvinceShare {
            province: row.province.clone(),
            share: row.shares[idx],
        })
        .collect();
    provinces.sort_by(|a, b| b.share.total_cmp(&a.share));
    provinces.truncate(STRONGHOLD_COUNT);

    Stronghold {
        candidate: candidate.to_string(),
        provinces,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use kenya_elections_data::DocumentStore;
    use kenya_elections_data_models::CountyDocument;

    fn build(store: &DocumentStore) -> RegionalView {
        match RegionalPatterns.build(&ViewContext::new(store)).unwrap() {
            ViewResult::RegionalPatterns(view) => view,
            other => panic!("unexpected view {:?}", other.view()),
        }
    }

    #[test]
    fn provinces_in_document_order_with_candidate_columns() {
        let view = build(&fixtures::store());
        assert_eq!(view.candidates, vec!["Kibaki", "Kenyatta", "Nyachae"]);
        let provinces: Vec<&str> = view.rows.iter().map(|r| r.province.as_str()).collect();
        assert_eq!(provinces[0], "Central");
        assert_eq!(provinces.len(), 8);
        // North Eastern has no Nyachae entry
        let north_eastern = view.rows.iter().find(|r| r.province == "North Eastern").unwrap();
        assert!(north_eastern.shares[2].abs() < f64::EPSILON);
    }

    #[test]
    fn strongholds_are_top_four_descending() {
        let view = build(&fixtures::store());
        let kibaki = &view.strongholds[0];
        assert_eq!(kibaki.candidate, "Kibaki");
        assert_eq!(kibaki.provinces.len(), 4);
        assert_eq!(kibaki.provinces[0].province, "Central");
        assert!(
            kibaki
                .provinces
                .windows(2)
                .all(|w| w[0].share >= w[1].share)
        );
    }

    #[test]
    fn missing_breakdown_is_empty_not_an_error() {
        let mut history = fixtures::history();
        for (_, record) in history.elections.iter_mut() {
            record.regional = None;
        }
        let store = DocumentStore::from_documents(history, CountyDocument::default(), None);
        let view = build(&store);
        assert!(view.rows.is_empty());
        assert!(view.candidates.is_empty());
        assert!(view.strongholds.is_empty());
    }
}
