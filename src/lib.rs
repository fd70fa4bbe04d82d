//! # Revivo
//!
//! Vitality tracker core: synthetic "body" and "mind" health data shaped into
//! dashboard view models.
//!
//! ## Features
//!
//! - **Mock data**: seedable generator of date-aligned daily body and mind series
//! - **View models**: latest-value summary cards and colored chart series per category
//! - **Session**: explicit category selection with pure view recomputation
//! - **Reports**: table, JSON and CSV renderings for the CLI
//!
//! ## Modules
//!
//! - [`vitals`]: records, generator and dataset
//! - [`view`]: card and chart view models
//! - [`session`]: dashboard session state
//! - [`report`]: output rendering
//! - [`config`]: TOML and environment configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use revivo::vitals::{Category, DayCount};
//! use revivo::DashboardSession;
//!
//! let mut session = DashboardSession::load(DayCount::default(), Some(7));
//!
//! let body = session.view();
//! assert_eq!(body.cards.len(), 5);
//! assert_eq!(body.series.len(), 6);
//!
//! let mind = session.select(Category::Mind);
//! assert_eq!(mind.series.len(), 5);
//! ```

pub mod config;
pub mod report;
pub mod session;
pub mod view;
pub mod vitals;

// Re-export top-level types for convenience
pub use vitals::{
    AppointmentEntry, Category, DailyMindRecord, DailyPhysicalRecord, DayCount, MedicationEntry,
    MetricKey, MockDataGenerator, PatientProfile, ReferenceData, VitalsDataset, VitalsError,
    VitalsResult,
};

pub use view::{
    build_view, ChartSeriesDescriptor, DashboardView, SoftColor, SummaryCardViewModel,
};

pub use session::DashboardSession;

pub use report::{render, DashboardReport, ReportError, ReportFormat};

pub use config::{Config, ConfigError, GeneratorConfig, LoggingConfig, ProfileConfig};
