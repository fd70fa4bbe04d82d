//! Summary Cards
//!
//! One card per headline metric, showing the value of the most recent day.
//! Titles, colors and value formats are fixed per category.

use serde::{Deserialize, Serialize};

use super::palette::SoftColor;
use crate::vitals::{Category, DailyMindRecord, DailyPhysicalRecord, MetricKey, VitalsDataset};

/// Shown in place of a value when the series is empty
pub const MISSING_VALUE: &str = "—";

/// Presentation-ready summary card
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummaryCardViewModel {
    pub title: String,
    /// Pre-formatted value, e.g. "72 bpm"
    pub value: String,
    pub color: SoftColor,
    /// Field the card summarises
    pub key: MetricKey,
}

/// Static description of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSpec {
    pub title: &'static str,
    pub key: MetricKey,
    pub color: SoftColor,
}

const fn spec(title: &'static str, key: MetricKey, color: SoftColor) -> CardSpec {
    CardSpec { title, key, color }
}

pub const BODY_CARDS: [CardSpec; 5] = [
    spec("Blood Pressure", MetricKey::BloodPressureSystolic, SoftColor::Red),
    spec("Heart Rate", MetricKey::HeartRate, SoftColor::Pink),
    spec("Body Fat", MetricKey::BodyFatPercent, SoftColor::Orange),
    spec("Skeletal Muscle", MetricKey::SkeletalMusclePercent, SoftColor::Green),
    spec("Blood Diagnostics", MetricKey::BloodDiagnosticsScore, SoftColor::Blue),
];

pub const MIND_CARDS: [CardSpec; 5] = [
    spec("Sleep Quality", MetricKey::SleepQuality, SoftColor::Indigo),
    spec("Cognitive Score", MetricKey::CognitiveScore, SoftColor::Purple),
    spec("Meditation", MetricKey::MeditationMinutes, SoftColor::Teal),
    spec("Stress Level", MetricKey::StressLevel, SoftColor::Pink),
    spec("Mood", MetricKey::Mood, SoftColor::Green),
];

/// Card layout for a category
pub fn card_specs(category: Category) -> &'static [CardSpec; 5] {
    match category {
        Category::Body => &BODY_CARDS,
        Category::Mind => &MIND_CARDS,
    }
}

/// Build the five cards of a category from the last record of its series
pub fn summary_cards(dataset: &VitalsDataset, category: Category) -> Vec<SummaryCardViewModel> {
    card_specs(category)
        .iter()
        .map(|spec| {
            let value = match category {
                Category::Body => dataset.latest_body().map(|r| format_body(r, spec.key)),
                Category::Mind => dataset.latest_mind().map(|r| format_mind(r, spec.key)),
            };

            SummaryCardViewModel {
                title: spec.title.to_string(),
                value: value.unwrap_or_else(|| MISSING_VALUE.to_string()),
                color: spec.color,
                key: spec.key,
            }
        })
        .collect()
}

fn format_body(record: &DailyPhysicalRecord, key: MetricKey) -> String {
    match key {
        MetricKey::BloodPressureSystolic | MetricKey::BloodPressureDiastolic => {
            record.blood_pressure_display.clone()
        }
        MetricKey::HeartRate => format!("{} bpm", record.heart_rate),
        MetricKey::BodyFatPercent => format!("{:.1}%", record.body_fat_percent),
        MetricKey::SkeletalMusclePercent => format!("{:.1}%", record.skeletal_muscle_percent),
        MetricKey::BloodDiagnosticsScore => format!("{}/100", record.blood_diagnostics_score),
        _ => MISSING_VALUE.to_string(),
    }
}

fn format_mind(record: &DailyMindRecord, key: MetricKey) -> String {
    match key {
        MetricKey::SleepQuality => format!("{}/10", record.sleep_quality),
        MetricKey::CognitiveScore => format!("{}/100", record.cognitive_score),
        MetricKey::MeditationMinutes => format!("{} min", record.meditation_minutes),
        MetricKey::StressLevel => format!("{}/10", record.stress_level),
        MetricKey::Mood => format!("{}/10", record.mood),
        _ => MISSING_VALUE.to_string(),
    }
}
