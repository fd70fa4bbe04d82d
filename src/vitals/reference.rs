//! Static reference data shown next to the vitals: upcoming appointments,
//! the medication schedule and the patient header.

use serde::{Deserialize, Serialize};

/// A scheduled visit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentEntry {
    /// ISO 8601 date
    pub date: String,
    /// Display time, e.g. "10:00 AM"
    pub time: String,
    pub provider: String,
    pub visit_type: String,
}

impl AppointmentEntry {
    pub fn new(
        date: impl Into<String>,
        time: impl Into<String>,
        provider: impl Into<String>,
        visit_type: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            provider: provider.into(),
            visit_type: visit_type.into(),
        }
    }
}

/// A medication taken on a schedule
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MedicationEntry {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
}

impl MedicationEntry {
    pub fn new(
        name: impl Into<String>,
        dosage: impl Into<String>,
        frequency: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            dosage: dosage.into(),
            frequency: frequency.into(),
        }
    }
}

/// Person the dashboard belongs to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PatientProfile {
    pub name: String,
    pub age: u32,
}

impl Default for PatientProfile {
    fn default() -> Self {
        Self {
            name: "John Doe".to_string(),
            age: 35,
        }
    }
}

impl std::fmt::Display for PatientProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.name, self.age)
    }
}

/// The static lists rendered below the chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceData {
    pub profile: PatientProfile,
    pub appointments: Vec<AppointmentEntry>,
    pub medications: Vec<MedicationEntry>,
}

impl ReferenceData {
    /// Replace the patient header, keeping the lists
    pub fn with_profile(mut self, profile: PatientProfile) -> Self {
        self.profile = profile;
        self
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self {
            profile: PatientProfile::default(),
            appointments: vec![
                AppointmentEntry::new("2023-08-15", "10:00 AM", "Dr. Smith", "Annual Checkup"),
                AppointmentEntry::new("2023-09-01", "2:00 PM", "Dr. Johnson", "Dental Cleaning"),
            ],
            medications: vec![
                MedicationEntry::new("Vitamin D", "1000 IU", "Daily"),
                MedicationEntry::new("Omega-3", "1000 mg", "Twice daily"),
            ],
        }
    }
}
