//! Dashboard Reports
//!
//! Renders a [`DashboardSession`] for the terminal or for other tools:
//! - `table`: human-readable cards, chart rows and reference lists
//! - `json`: the full view model plus the selected series
//! - `csv`: one row per day with a column per chart line

use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;
use thiserror::Error;

use crate::session::DashboardSession;
use crate::view::{DashboardView, SoftColor};
use crate::vitals::{
    AppointmentEntry, Category, DailyMindRecord, DailyPhysicalRecord, MedicationEntry,
    PatientProfile,
};

/// Subtitle shown under the patient header
pub const TRACKER_NAME: &str = "Revivo Vitality Tracker";

/// Output format for `revivo show`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    #[default]
    Table,
    Json,
    Csv,
}

/// Errors that can occur while writing a report
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type ReportResult<T> = Result<T, ReportError>;

/// Series records of the selected category
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SeriesRecords<'a> {
    Body(&'a [DailyPhysicalRecord]),
    Mind(&'a [DailyMindRecord]),
}

/// JSON document describing the whole dashboard
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport<'a> {
    pub profile: &'a PatientProfile,
    pub tracker: &'static str,
    pub generated_on: chrono::NaiveDate,
    pub view: DashboardView,
    /// Hex value of every color token used by the view
    pub palette: BTreeMap<SoftColor, &'static str>,
    pub records: SeriesRecords<'a>,
    pub appointments: &'a [AppointmentEntry],
    pub medications: &'a [MedicationEntry],
}

impl<'a> DashboardReport<'a> {
    pub fn from_session(session: &'a DashboardSession) -> Self {
        let dataset = session.dataset();
        let reference = session.reference();
        let records = match session.selected() {
            Category::Body => SeriesRecords::Body(dataset.body()),
            Category::Mind => SeriesRecords::Mind(dataset.mind()),
        };

        let view = session.view();
        let palette = view
            .cards
            .iter()
            .map(|c| c.color)
            .chain(view.series.iter().map(|s| s.color))
            .map(|color| (color, color.hex()))
            .collect();

        Self {
            profile: &reference.profile,
            tracker: TRACKER_NAME,
            generated_on: dataset.generated_on(),
            view,
            palette,
            records,
            appointments: &reference.appointments,
            medications: &reference.medications,
        }
    }
}

/// Write the session in the requested format
pub fn render<W: Write>(
    session: &DashboardSession,
    format: ReportFormat,
    out: &mut W,
) -> ReportResult<()> {
    match format {
        ReportFormat::Table => write_table(session, out),
        ReportFormat::Json => write_json(session, out),
        ReportFormat::Csv => write_csv(session, out),
    }
}

pub fn write_json<W: Write>(session: &DashboardSession, out: &mut W) -> ReportResult<()> {
    let report = DashboardReport::from_session(session);
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_csv<W: Write>(session: &DashboardSession, out: &mut W) -> ReportResult<()> {
    let view = session.view();
    let dataset = session.dataset();
    let mut writer = csv::Writer::from_writer(out);

    let mut header = vec!["date".to_string()];
    header.extend(view.series.iter().map(|s| s.key.to_string()));
    writer.write_record(&header)?;

    let columns: Vec<_> = view
        .series
        .iter()
        .map(|s| (s.key, dataset.points(s.key)))
        .collect();
    for (row, date) in dataset.dates().enumerate() {
        let mut record = vec![date.to_string()];
        record.extend(columns.iter().map(|(key, points)| {
            points
                .get(row)
                .map(|(_, v)| key.format_value(*v))
                .unwrap_or_default()
        }));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

pub fn write_table<W: Write>(session: &DashboardSession, out: &mut W) -> ReportResult<()> {
    let view = session.view();
    let dataset = session.dataset();
    let reference = session.reference();

    writeln!(out, "{}", reference.profile)?;
    writeln!(out, "{}  [{}]", TRACKER_NAME, view.category)?;
    writeln!(out)?;

    // Cards
    for card in &view.cards {
        writeln!(
            out,
            "  {:<20} {:>10}   ({} {})",
            card.title,
            card.value,
            card.color,
            card.color.hex()
        )?;
    }
    writeln!(out)?;

    // Chart rows
    writeln!(out, "{}", view.title)?;
    if dataset.is_empty() {
        writeln!(out, "No data for the selected range")?;
    } else {
        let widths: Vec<usize> = view.series.iter().map(|s| s.name.len().max(6)).collect();

        write!(out, "{:<12}", "Date")?;
        for (series, width) in view.series.iter().zip(&widths) {
            write!(out, " | {:<w$}", series.name, w = width)?;
        }
        writeln!(out)?;
        writeln!(out, "{}", "-".repeat(12 + widths.iter().map(|w| w + 3).sum::<usize>()))?;

        let columns: Vec<_> = view
            .series
            .iter()
            .map(|s| (s.key, dataset.points(s.key)))
            .collect();
        for (row, date) in dataset.dates().enumerate() {
            write!(out, "{:<12}", date.to_string())?;
            for ((key, points), width) in columns.iter().zip(&widths) {
                let val = points
                    .get(row)
                    .map(|(_, v)| key.format_value(*v))
                    .unwrap_or_else(|| "-".to_string());
                write!(out, " | {:<w$}", val, w = width)?;
            }
            writeln!(out)?;
        }
    }
    writeln!(out)?;

    writeln!(out, "Upcoming Appointments")?;
    for apt in &reference.appointments {
        writeln!(out, "  {} - {}", apt.date, apt.time)?;
        writeln!(out, "  {} - {}", apt.provider, apt.visit_type)?;
    }
    writeln!(out)?;

    writeln!(out, "Medication Schedule")?;
    for med in &reference.medications {
        writeln!(out, "  {}", med.name)?;
        writeln!(out, "  {} - {}", med.dosage, med.frequency)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vitals::{DayCount, MockDataGenerator};
    use chrono::NaiveDate;
    use rand::rngs::mock::StepRng;

    fn session(days: usize) -> DashboardSession {
        let today = NaiveDate::from_ymd_opt(2024, 4, 10).unwrap();
        DashboardSession::new(MockDataGenerator::seeded(13).generate(DayCount::new(days).unwrap(), today))
    }

    fn rendered(session: &DashboardSession, format: ReportFormat) -> String {
        let mut buf = Vec::new();
        render(session, format, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_table_output() {
        let session = session(3);
        let text = rendered(&session, ReportFormat::Table);

        assert!(text.starts_with("John Doe, 35\n"));
        assert!(text.contains("Revivo Vitality Tracker  [BODY]"));
        assert!(text.contains("Metrics Over Time (Last 3 Days)"));
        assert!(text.contains("2024-04-10"));
        assert!(text.contains("Dr. Johnson - Dental Cleaning"));
        assert!(text.contains("1000 mg - Twice daily"));

        let heart_rate = session.dataset().latest_body().unwrap().heart_rate;
        assert!(text.contains(&format!("{} bpm", heart_rate)));
    }

    #[test]
    fn test_table_with_empty_dataset() {
        let text = rendered(&session(0), ReportFormat::Table);
        assert!(text.contains("No data for the selected range"));
        assert!(text.contains("—"));
    }

    #[test]
    fn test_json_output() {
        let mut session = session(5);
        session.select(Category::Mind);
        let text = rendered(&session, ReportFormat::Json);
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(json["tracker"], TRACKER_NAME);
        assert_eq!(json["generatedOn"], "2024-04-10");
        assert_eq!(json["view"]["category"], "MIND");
        assert_eq!(json["records"].as_array().unwrap().len(), 5);
        assert!(json["records"][0].get("mood").is_some());
        assert_eq!(json["appointments"][0]["provider"], "Dr. Smith");
    }

    #[test]
    fn test_csv_output() {
        let session = session(4);
        let text = rendered(&session, ReportFormat::Csv);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(
            lines[0],
            "date,bloodPressureSystolic,bloodPressureDiastolic,heartRate,bodyFatPercent,skeletalMusclePercent,bloodDiagnosticsScore"
        );

        let last = session.dataset().latest_body().unwrap();
        let fields: Vec<&str> = lines[4].split(',').collect();
        assert_eq!(fields[0], "2024-04-10");
        assert_eq!(fields[1], last.blood_pressure_systolic.to_string());
        assert_eq!(fields[4], format!("{:.1}", last.body_fat_percent));
        assert_eq!(fields[5], format!("{:.1}", last.skeletal_muscle_percent));
    }

    #[test]
    fn test_csv_keeps_decimal_on_whole_percentages() {
        let today = NaiveDate::from_ymd_opt(2024, 4, 10).unwrap();
        let dataset = MockDataGenerator::new(StepRng::new(0, 0)).generate(DayCount::new(2).unwrap(), today);
        let last = dataset.latest_body().unwrap().clone();
        assert_eq!(last.body_fat_percent, 18.0);

        let text = rendered(&DashboardSession::new(dataset), ReportFormat::Csv);
        let row: Vec<&str> = text.lines().last().unwrap().split(',').collect();
        assert_eq!(row[3], last.heart_rate.to_string());
        assert_eq!(row[4], "18.0");
        assert_eq!(row[5], "35.0");
    }

    #[test]
    fn test_color_hex_in_output() {
        let session = session(2);
        let table = rendered(&session, ReportFormat::Table);
        assert!(table.contains("(blue #63B3ED)"));

        let json: serde_json::Value =
            serde_json::from_str(&rendered(&session, ReportFormat::Json)).unwrap();
        assert_eq!(json["palette"]["blue"], "#63B3ED");
        for card in json["view"]["cards"].as_array().unwrap() {
            let token = card["color"].as_str().unwrap();
            assert!(json["palette"][token].as_str().unwrap().starts_with('#'));
        }
    }
}
