//! Chart Series
//!
//! Describes which lines the time-series chart draws for a category.
//! Body lines use their own fixed colors; mind lines reuse the card
//! mapping so a card and its line always share a color.

use serde::{Deserialize, Serialize};

use super::cards::MIND_CARDS;
use super::palette::SoftColor;
use crate::vitals::{Category, MetricKey};

/// One line on the chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChartSeriesDescriptor {
    /// Record field plotted on the Y axis
    pub key: MetricKey,
    /// Legend label
    pub name: String,
    pub color: SoftColor,
}

impl ChartSeriesDescriptor {
    fn new(key: MetricKey, name: &str, color: SoftColor) -> Self {
        Self {
            key,
            name: name.to_string(),
            color,
        }
    }
}

/// Ordered chart lines for a category
pub fn chart_series(category: Category) -> Vec<ChartSeriesDescriptor> {
    match category {
        Category::Body => vec![
            ChartSeriesDescriptor::new(
                MetricKey::BloodPressureSystolic,
                "Blood Pressure (Systolic)",
                SoftColor::Red,
            ),
            ChartSeriesDescriptor::new(
                MetricKey::BloodPressureDiastolic,
                "Blood Pressure (Diastolic)",
                SoftColor::Orange,
            ),
            ChartSeriesDescriptor::new(MetricKey::HeartRate, "Heart Rate", SoftColor::Pink),
            ChartSeriesDescriptor::new(MetricKey::BodyFatPercent, "Body Fat", SoftColor::Orange),
            ChartSeriesDescriptor::new(
                MetricKey::SkeletalMusclePercent,
                "Skeletal Muscle",
                SoftColor::Green,
            ),
            ChartSeriesDescriptor::new(
                MetricKey::BloodDiagnosticsScore,
                "Blood Diagnostics",
                SoftColor::Blue,
            ),
        ],
        Category::Mind => MIND_CARDS
            .iter()
            .map(|card| ChartSeriesDescriptor::new(card.key, card.title, card.color))
            .collect(),
    }
}

/// Chart heading for a series of `days` days
pub fn chart_title(days: usize) -> String {
    format!("Metrics Over Time (Last {} Days)", days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::cards::summary_cards;
    use crate::vitals::{DayCount, MockDataGenerator};
    use chrono::NaiveDate;

    #[test]
    fn test_body_series() {
        let series = chart_series(Category::Body);
        let keys: Vec<_> = series.iter().map(|s| s.key).collect();

        assert_eq!(
            keys,
            vec![
                MetricKey::BloodPressureSystolic,
                MetricKey::BloodPressureDiastolic,
                MetricKey::HeartRate,
                MetricKey::BodyFatPercent,
                MetricKey::SkeletalMusclePercent,
                MetricKey::BloodDiagnosticsScore,
            ]
        );
        assert_eq!(series[1].name, "Blood Pressure (Diastolic)");
        assert_eq!(series[1].color, SoftColor::Orange);
        assert_eq!(series[3].color, SoftColor::Orange);
    }

    #[test]
    fn test_mind_series_match_cards() {
        let dataset = MockDataGenerator::seeded(8)
            .generate(DayCount::default(), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        let cards = summary_cards(&dataset, Category::Mind);
        let series = chart_series(Category::Mind);

        assert_eq!(series.len(), 5);
        for (card, line) in cards.iter().zip(&series) {
            assert_eq!(card.key, line.key);
            assert_eq!(card.title, line.name);
            assert_eq!(card.color, line.color);
        }
    }

    #[test]
    fn test_chart_title() {
        assert_eq!(chart_title(14), "Metrics Over Time (Last 14 Days)");
        assert_eq!(chart_title(30), "Metrics Over Time (Last 30 Days)");
    }
}
