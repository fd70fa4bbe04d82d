//! Revivo Vitals Model
//!
//! This module provides the synthetic health data behind the dashboard:
//!
//! - **types**: Records, category token, metric keys
//! - **generator**: Seedable mock data generator
//! - **dataset**: The immutable pair of date-aligned series
//! - **reference**: Static appointments, medications and patient header
//! - **error**: Error types
//!
//! # Example
//!
//! ```rust
//! use revivo::vitals::{DayCount, MockDataGenerator};
//!
//! let dataset = MockDataGenerator::seeded(42).generate_today(DayCount::default());
//! assert_eq!(dataset.len(), 14);
//! assert!(dataset.is_aligned());
//! ```

pub mod dataset;
pub mod error;
pub mod generator;
pub mod reference;
pub mod types;

// Re-export commonly used types
pub use dataset::VitalsDataset;
pub use error::{VitalsError, VitalsResult};
pub use generator::MockDataGenerator;
pub use reference::{AppointmentEntry, MedicationEntry, PatientProfile, ReferenceData};
pub use types::{Category, DailyMindRecord, DailyPhysicalRecord, DayCount, MetricKey};
