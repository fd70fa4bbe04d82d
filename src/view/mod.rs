//! Revivo View Models
//!
//! Turns a [`VitalsDataset`] and a selected [`Category`] into
//! presentation-ready values:
//!
//! - **cards**: five "latest value" summary cards
//! - **chart**: named, colored line descriptors for the time-series chart
//! - **palette**: color tokens shared by both
//!
//! [`build_view`] is a pure function of its inputs; switching category and
//! back yields an identical view.

pub mod cards;
pub mod chart;
pub mod palette;

pub use cards::{summary_cards, SummaryCardViewModel, MISSING_VALUE};
pub use chart::{chart_series, chart_title, ChartSeriesDescriptor};
pub use palette::SoftColor;

use serde::{Deserialize, Serialize};

use crate::vitals::{Category, VitalsDataset};

/// Everything the dashboard shows for one category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardView {
    pub category: Category,
    /// Chart heading
    pub title: String,
    pub cards: Vec<SummaryCardViewModel>,
    pub series: Vec<ChartSeriesDescriptor>,
}

/// Derive cards and chart lines for `category`
pub fn build_view(dataset: &VitalsDataset, category: Category) -> DashboardView {
    DashboardView {
        category,
        title: chart_title(dataset.len()),
        cards: summary_cards(dataset, category),
        series: chart_series(category),
    }
}

/// Parse a category token and derive its view, failing fast on unknown tokens
pub fn build_view_for_token(
    dataset: &VitalsDataset,
    token: &str,
) -> crate::vitals::VitalsResult<DashboardView> {
    let category = token.parse::<Category>()?;
    Ok(build_view(dataset, category))
}
