//! One builder per dashboard view.

mod county;
mod historical;
mod map;
mod national;
mod overview;
mod predictions;
mod regional;
mod turnout;

pub use county::CountyAnalysis;
pub use historical::HistoricalResults;
pub use map::InteractiveMap;
pub use national::{NationalPredictions, projected_votes};
pub use overview::Overview;
pub use predictions::CountyPredictions;
pub use regional::RegionalPatterns;
pub use turnout::TurnoutTrends;

use kenya_elections_analytics_models::{ViewId, ViewRequest, ViewResult};
use kenya_elections_data_models::SwingPotential;

use crate::{AnalyticsError, ViewContext};

/// Produces the table and chart hints for one view.
pub trait ViewBuilder: Send + Sync {
    /// The view this builder produces.
    fn view(&self) -> ViewId;

    /// Builds the view from the documents behind `ctx`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError`] if a needed document is unavailable or a
    /// requested key does not exist.
    fn build(&self, ctx: &ViewContext<'_>) -> Result<ViewResult, AnalyticsError>;
}

/// Maps a request to the builder for its view, carrying over the secondary
/// selector the view accepts. Selectors meant for other views are ignored.
#[must_use]
pub fn select(request: &ViewRequest) -> Box<dyn ViewBuilder> {
    match request.view {
        ViewId::Overview => Box::new(Overview),
        ViewId::InteractiveMap => Box::new(InteractiveMap {
            metric: request.metric.unwrap_or_default(),
        }),
        ViewId::HistoricalResults => Box::new(HistoricalResults { year: request.year }),
        ViewId::TurnoutTrends => Box::new(TurnoutTrends),
        ViewId::RegionalPatterns => Box::new(RegionalPatterns),
        ViewId::CountyAnalysis => Box::new(CountyAnalysis {
            county: request.county.clone(),
        }),
        ViewId::CountyPredictions2027 => Box::new(CountyPredictions),
        ViewId::NationalPredictions2027 => Box::new(NationalPredictions),
    }
}

/// Category → color pairs for the five known swing categories, most
/// competitive first.
fn swing_colors() -> Vec<(&'static str, &'static str)> {
    SwingPotential::GROUP_ORDER
        .iter()
        .map(|s| (s.label(), s.color()))
        .collect()
}

/// The first element with the largest key. Later ties do not replace an
/// earlier maximum.
fn first_max_by<T>(items: impl IntoIterator<Item = T>, key: impl Fn(&T) -> f64) -> Option<T> {
    items.into_iter().fold(None, |best, item| match best {
        Some(b) if key(&b) >= key(&item) => Some(b),
        _ => Some(item),
    })
}

/// The first element with the smallest key.
fn first_min_by<T>(items: impl IntoIterator<Item = T>, key: impl Fn(&T) -> f64) -> Option<T> {
    first_max_by(items, |item| -key(item))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kenya_elections_analytics_models::MapMetric;

    #[test]
    fn select_dispatches_every_view() {
        for view in ViewId::all() {
            assert_eq!(select(&ViewRequest::new(*view)).view(), *view);
        }
    }

    #[test]
    fn select_ignores_foreign_selectors() {
        let request = ViewRequest::new(ViewId::TurnoutTrends)
            .with_year(2013)
            .with_metric(MapMetric::Ruto2022);
        assert_eq!(select(&request).view(), ViewId::TurnoutTrends);
    }

    #[test]
    fn first_max_keeps_earliest_tie() {
        let items = [("a", 1.0), ("b", 3.0), ("c", 3.0), ("d", 2.0)];
        assert_eq!(first_max_by(items, |i| i.1).unwrap().0, "b");
        assert_eq!(first_min_by(items, |i| i.1).unwrap().0, "a");
        assert!(first_max_by(Vec::<(&str, f64)>::new(), |i| i.1).is_none());
    }
}
