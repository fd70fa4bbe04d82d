//! Core data types for the Revivo vitals model
//!
//! This module defines the fundamental types shared by the generator and the
//! view layer:
//! - `DailyPhysicalRecord` / `DailyMindRecord`: one day of synthetic metrics
//! - `Category`: the BODY / MIND selection token
//! - `MetricKey`: the closed set of chartable fields
//! - `DayCount`: validated series length

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::{VitalsError, VitalsResult};

/// One day of physical ("body") metrics
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyPhysicalRecord {
    /// Calendar day this record belongs to
    pub date: NaiveDate,
    /// Systolic pressure, mmHg
    pub blood_pressure_systolic: u32,
    /// Diastolic pressure, mmHg
    pub blood_pressure_diastolic: u32,
    /// `"{systolic}/{diastolic}"`
    pub blood_pressure_display: String,
    /// Beats per minute
    pub heart_rate: u32,
    /// Percentage with one decimal place
    pub body_fat_percent: f64,
    /// Percentage with one decimal place
    pub skeletal_muscle_percent: f64,
    /// Score out of 100
    pub blood_diagnostics_score: u32,
}

impl DailyPhysicalRecord {
    /// Build a record, deriving the display string from both pressure components
    pub fn new(
        date: NaiveDate,
        systolic: u32,
        diastolic: u32,
        heart_rate: u32,
        body_fat_percent: f64,
        skeletal_muscle_percent: f64,
        blood_diagnostics_score: u32,
    ) -> Self {
        Self {
            date,
            blood_pressure_systolic: systolic,
            blood_pressure_diastolic: diastolic,
            blood_pressure_display: format!("{}/{}", systolic, diastolic),
            heart_rate,
            body_fat_percent,
            skeletal_muscle_percent,
            blood_diagnostics_score,
        }
    }

    /// Read a chartable field by key. Returns `None` for mind keys.
    pub fn value(&self, key: MetricKey) -> Option<f64> {
        Some(match key {
            MetricKey::BloodPressureSystolic => f64::from(self.blood_pressure_systolic),
            MetricKey::BloodPressureDiastolic => f64::from(self.blood_pressure_diastolic),
            MetricKey::HeartRate => f64::from(self.heart_rate),
            MetricKey::BodyFatPercent => self.body_fat_percent,
            MetricKey::SkeletalMusclePercent => self.skeletal_muscle_percent,
            MetricKey::BloodDiagnosticsScore => f64::from(self.blood_diagnostics_score),
            _ => return None,
        })
    }
}

/// One day of mental ("mind") metrics
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DailyMindRecord {
    pub date: NaiveDate,
    /// 1-10 scale
    pub sleep_quality: u32,
    /// Score out of 100
    pub cognitive_score: u32,
    pub meditation_minutes: u32,
    /// 1-10 scale
    pub stress_level: u32,
    /// 1-10 scale
    pub mood: u32,
}

impl DailyMindRecord {
    /// Read a chartable field by key. Returns `None` for body keys.
    pub fn value(&self, key: MetricKey) -> Option<f64> {
        let raw = match key {
            MetricKey::SleepQuality => self.sleep_quality,
            MetricKey::CognitiveScore => self.cognitive_score,
            MetricKey::MeditationMinutes => self.meditation_minutes,
            MetricKey::StressLevel => self.stress_level,
            MetricKey::Mood => self.mood,
            _ => return None,
        };
        Some(f64::from(raw))
    }
}

/// Dashboard category selected by the user
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    /// Physical metrics
    #[default]
    Body,
    /// Mental metrics
    Mind,
}

impl Category {
    /// Get all categories for iteration
    pub fn all() -> &'static [Category] {
        &[Category::Body, Category::Mind]
    }

    /// Token form used in the UI and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Body => "BODY",
            Category::Mind => "MIND",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = VitalsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BODY" => Ok(Category::Body),
            "MIND" => Ok(Category::Mind),
            _ => Err(VitalsError::UnknownCategory(s.to_string())),
        }
    }
}

/// Field key of a chartable metric
///
/// The string form matches the serialized field name on the record, so a
/// charting widget can look values up by key.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum MetricKey {
    BloodPressureSystolic,
    BloodPressureDiastolic,
    HeartRate,
    BodyFatPercent,
    SkeletalMusclePercent,
    BloodDiagnosticsScore,
    SleepQuality,
    CognitiveScore,
    MeditationMinutes,
    StressLevel,
    Mood,
}

impl MetricKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKey::BloodPressureSystolic => "bloodPressureSystolic",
            MetricKey::BloodPressureDiastolic => "bloodPressureDiastolic",
            MetricKey::HeartRate => "heartRate",
            MetricKey::BodyFatPercent => "bodyFatPercent",
            MetricKey::SkeletalMusclePercent => "skeletalMusclePercent",
            MetricKey::BloodDiagnosticsScore => "bloodDiagnosticsScore",
            MetricKey::SleepQuality => "sleepQuality",
            MetricKey::CognitiveScore => "cognitiveScore",
            MetricKey::MeditationMinutes => "meditationMinutes",
            MetricKey::StressLevel => "stressLevel",
            MetricKey::Mood => "mood",
        }
    }

    /// Which series this field lives in
    pub fn category(&self) -> Category {
        match self {
            MetricKey::SleepQuality
            | MetricKey::CognitiveScore
            | MetricKey::MeditationMinutes
            | MetricKey::StressLevel
            | MetricKey::Mood => Category::Mind,
            _ => Category::Body,
        }
    }

    /// Percentage metrics, shown with one decimal place
    pub fn is_percent(&self) -> bool {
        matches!(self, MetricKey::BodyFatPercent | MetricKey::SkeletalMusclePercent)
    }

    /// Plain numeric text for a value of this metric, without units
    pub fn format_value(&self, value: f64) -> String {
        if self.is_percent() {
            format!("{:.1}", value)
        } else {
            format!("{:.0}", value)
        }
    }
}

impl std::fmt::Display for MetricKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number of days in a generated series
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayCount(usize);

impl DayCount {
    /// Length used by the dashboard when nothing else is configured
    pub const DEFAULT: DayCount = DayCount(14);

    /// Longest series the generator accepts (about a century of days)
    pub const MAX: usize = 36_500;

    pub fn new(days: usize) -> VitalsResult<Self> {
        if days > Self::MAX {
            return Err(VitalsError::DayCountTooLarge {
                days: days as u64,
                max: Self::MAX,
            });
        }
        Ok(Self(days))
    }

    /// Accept a signed count from user input, rejecting negatives
    pub fn from_signed(days: i64) -> VitalsResult<Self> {
        let days = usize::try_from(days).map_err(|_| VitalsError::NegativeDayCount(days))?;
        Self::new(days)
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

impl Default for DayCount {
    fn default() -> Self {
        Self::DEFAULT
    }
}
