//! Mock Vitals Generator
//!
//! Produces synthetic daily body and mind records. Every metric of every day
//! is an independent uniform draw over a realistic half-open range; there is
//! no smoothing or trend between days.
//!
//! The random source is injected so callers can pick between OS entropy,
//! a reproducible seed, or a fixed test source.

use chrono::{Duration, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;

use super::dataset::VitalsDataset;
use super::types::{DailyMindRecord, DailyPhysicalRecord, DayCount};

pub const SYSTOLIC_RANGE: Range<u32> = 110..130;
pub const DIASTOLIC_RANGE: Range<u32> = 70..85;
pub const HEART_RATE_RANGE: Range<u32> = 60..80;
/// Body fat in tenths of a percent
pub const BODY_FAT_TENTHS: Range<u32> = 180..250;
/// Skeletal muscle in tenths of a percent
pub const SKELETAL_MUSCLE_TENTHS: Range<u32> = 350..450;
pub const BLOOD_DIAGNOSTICS_RANGE: Range<u32> = 80..100;

pub const SLEEP_QUALITY_RANGE: Range<u32> = 5..10;
pub const COGNITIVE_SCORE_RANGE: Range<u32> = 80..100;
pub const MEDITATION_MINUTES_RANGE: Range<u32> = 5..30;
pub const STRESS_LEVEL_RANGE: Range<u32> = 1..10;
pub const MOOD_RANGE: Range<u32> = 5..10;

/// Synthetic data generator over an injected random source
#[derive(Debug)]
pub struct MockDataGenerator<R> {
    rng: R,
}

impl MockDataGenerator<StdRng> {
    /// Reproducible generator: the same seed yields the same dataset
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Generator seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> MockDataGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate `days` records per series ending at the current UTC date
    pub fn generate_today(&mut self, days: DayCount) -> VitalsDataset {
        self.generate(days, Utc::now().date_naive())
    }

    /// Generate `days` records per series, ascending, the last one dated `today`
    pub fn generate(&mut self, days: DayCount, today: NaiveDate) -> VitalsDataset {
        let n = days.get();
        let mut body = Vec::with_capacity(n);
        let mut mind = Vec::with_capacity(n);

        for offset in (0..n).rev() {
            let date = today - Duration::days(offset as i64);
            body.push(self.physical_record(date));
            mind.push(self.mind_record(date));
        }

        tracing::debug!(
            days = n,
            generated_on = %today,
            "Generated mock vitals dataset"
        );

        VitalsDataset::new(today, body, mind)
    }

    fn physical_record(&mut self, date: NaiveDate) -> DailyPhysicalRecord {
        let systolic = self.rng.gen_range(SYSTOLIC_RANGE);
        let diastolic = self.rng.gen_range(DIASTOLIC_RANGE);
        let heart_rate = self.rng.gen_range(HEART_RATE_RANGE);
        let body_fat = self.tenths(BODY_FAT_TENTHS);
        let skeletal_muscle = self.tenths(SKELETAL_MUSCLE_TENTHS);
        let diagnostics = self.rng.gen_range(BLOOD_DIAGNOSTICS_RANGE);

        DailyPhysicalRecord::new(
            date,
            systolic,
            diastolic,
            heart_rate,
            body_fat,
            skeletal_muscle,
            diagnostics,
        )
    }

    fn mind_record(&mut self, date: NaiveDate) -> DailyMindRecord {
        DailyMindRecord {
            date,
            sleep_quality: self.rng.gen_range(SLEEP_QUALITY_RANGE),
            cognitive_score: self.rng.gen_range(COGNITIVE_SCORE_RANGE),
            meditation_minutes: self.rng.gen_range(MEDITATION_MINUTES_RANGE),
            stress_level: self.rng.gen_range(STRESS_LEVEL_RANGE),
            mood: self.rng.gen_range(MOOD_RANGE),
        }
    }

    // Whole tenths keep exactly one decimal digit and the exclusive upper bound.
    fn tenths(&mut self, range: Range<u32>) -> f64 {
        f64::from(self.rng.gen_range(range)) / 10.0
    }
}
