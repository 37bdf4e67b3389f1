use std::io::{Read, Write};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{Lead, Platform, Urgency};

/// Separator placed between signals inside the single `Signals` column.
pub const SIGNAL_SEPARATOR: &str = "; ";

/// Flat record written for each exported lead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRow {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Score")]
    pub score: u8,
    #[serde(rename = "Urgency")]
    pub urgency: Urgency,
    #[serde(rename = "Signals")]
    pub signals: String,
    #[serde(rename = "Platform")]
    pub platform: Platform,
    #[serde(rename = "Date")]
    pub date: DateTime<Utc>,
}

impl ExportRow {
    pub fn signal_list(&self) -> Vec<String> {
        if self.signals.is_empty() {
            return Vec::new();
        }
        self.signals
            .split(SIGNAL_SEPARATOR)
            .map(str::to_string)
            .collect()
    }
}

impl From<&Lead> for ExportRow {
    fn from(lead: &Lead) -> Self {
        Self {
            name: lead.name.clone(),
            email: lead.email.clone(),
            location: lead.location.clone(),
            score: lead.score,
            urgency: lead.urgency,
            signals: lead.signals.join(SIGNAL_SEPARATOR),
            platform: lead.platform,
            date: lead.timestamp,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("invalid lead CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to write lead export: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes `leads` as CSV with a header row.
pub fn export_csv<W: Write>(leads: &[Lead], writer: W) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for lead in leads {
        csv_writer.serialize(ExportRow::from(lead))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Reads back rows produced by [`export_csv`].
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<ExportRow>, ExportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);
    let mut rows = Vec::new();
    for row in csv_reader.deserialize::<ExportRow>() {
        rows.push(row?);
    }
    Ok(rows)
}

pub fn export_filename(date: NaiveDate) -> String {
    format!("moving-leads-{}.csv", date.format("%Y-%m-%d"))
}
