//! In-memory vitals dataset
//!
//! Holds the two date-aligned series produced by the generator. The dataset
//! is immutable once built; a reload produces a new one.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::types::{Category, DailyMindRecord, DailyPhysicalRecord, MetricKey};

/// Two parallel, chronologically ascending series
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VitalsDataset {
    /// Day the series was generated; the last record is dated this day
    generated_on: NaiveDate,
    body: Vec<DailyPhysicalRecord>,
    mind: Vec<DailyMindRecord>,
}

impl VitalsDataset {
    pub(crate) fn new(
        generated_on: NaiveDate,
        body: Vec<DailyPhysicalRecord>,
        mind: Vec<DailyMindRecord>,
    ) -> Self {
        debug_assert_eq!(body.len(), mind.len());
        Self {
            generated_on,
            body,
            mind,
        }
    }

    pub fn generated_on(&self) -> NaiveDate {
        self.generated_on
    }

    pub fn body(&self) -> &[DailyPhysicalRecord] {
        &self.body
    }

    pub fn mind(&self) -> &[DailyMindRecord] {
        &self.mind
    }

    /// Number of days covered (both series have this length)
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Most recent physical record (last element of the ascending series)
    pub fn latest_body(&self) -> Option<&DailyPhysicalRecord> {
        self.body.last()
    }

    /// Most recent mind record (last element of the ascending series)
    pub fn latest_mind(&self) -> Option<&DailyMindRecord> {
        self.mind.last()
    }

    /// Dates of the series in ascending order
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.body.iter().map(|r| r.date)
    }

    /// Latest value of a metric, looked up in the series the key belongs to
    pub fn latest_value(&self, key: MetricKey) -> Option<f64> {
        match key.category() {
            Category::Body => self.latest_body()?.value(key),
            Category::Mind => self.latest_mind()?.value(key),
        }
    }

    /// `(date, value)` pairs of one metric across the whole series
    pub fn points(&self, key: MetricKey) -> Vec<(NaiveDate, f64)> {
        match key.category() {
            Category::Body => self
                .body
                .iter()
                .filter_map(|r| r.value(key).map(|v| (r.date, v)))
                .collect(),
            Category::Mind => self
                .mind
                .iter()
                .filter_map(|r| r.value(key).map(|v| (r.date, v)))
                .collect(),
        }
    }

    /// Check that both series share the same gap-free ascending dates ending
    /// at the generation day
    pub fn is_aligned(&self) -> bool {
        if self.body.len() != self.mind.len() {
            return false;
        }

        let same_dates = self
            .body
            .iter()
            .zip(&self.mind)
            .all(|(b, m)| b.date == m.date);
        let consecutive = self
            .body
            .windows(2)
            .all(|w| w[0].date.succ_opt() == Some(w[1].date));
        let ends_today = self
            .latest_body()
            .map(|r| r.date == self.generated_on)
            .unwrap_or(true);

        same_dates && consecutive && ends_today
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn mind(d: u32, mood: u32) -> DailyMindRecord {
        DailyMindRecord {
            date: date(d),
            sleep_quality: 6,
            cognitive_score: 85,
            meditation_minutes: 10,
            stress_level: 4,
            mood,
        }
    }

    fn sample() -> VitalsDataset {
        VitalsDataset::new(
            date(3),
            vec![
                DailyPhysicalRecord::new(date(1), 112, 71, 61, 19.0, 36.0, 81),
                DailyPhysicalRecord::new(date(2), 118, 75, 66, 20.5, 40.1, 90),
                DailyPhysicalRecord::new(date(3), 125, 80, 72, 22.2, 41.3, 95),
            ],
            vec![mind(1, 5), mind(2, 6), mind(3, 9)],
        )
    }

    #[test]
    fn test_latest_is_last_element() {
        let dataset = sample();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.latest_body().unwrap().heart_rate, 72);
        assert_eq!(dataset.latest_mind().unwrap().mood, 9);
        assert_eq!(dataset.latest_value(MetricKey::BodyFatPercent), Some(22.2));
        assert_eq!(dataset.latest_value(MetricKey::Mood), Some(9.0));
    }

    #[test]
    fn test_points() {
        let dataset = sample();
        let points = dataset.points(MetricKey::BloodPressureDiastolic);
        assert_eq!(
            points,
            vec![(date(1), 71.0), (date(2), 75.0), (date(3), 80.0)]
        );
        assert_eq!(dataset.points(MetricKey::Mood).len(), 3);
    }

    #[test]
    fn test_alignment() {
        assert!(sample().is_aligned());

        let gap = VitalsDataset {
            generated_on: date(4),
            body: vec![
                DailyPhysicalRecord::new(date(1), 112, 71, 61, 19.0, 36.0, 81),
                DailyPhysicalRecord::new(date(4), 118, 75, 66, 20.5, 40.1, 90),
            ],
            mind: vec![mind(1, 5), mind(4, 6)],
        };
        assert!(!gap.is_aligned());

        let stale = VitalsDataset {
            generated_on: date(5),
            ..sample()
        };
        assert!(!stale.is_aligned());
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = VitalsDataset::new(date(1), Vec::new(), Vec::new());
        assert!(dataset.is_empty());
        assert!(dataset.latest_body().is_none());
        assert_eq!(dataset.latest_value(MetricKey::HeartRate), None);
        assert!(dataset.is_aligned());
    }
}
