//! Attendance Log

use chrono::NaiveDateTime;
use serde::Serialize;

use super::catalog;

/// Status recorded for every check-in while location checks are simulated
pub const DEMO_STATUS: &str = "Demo Mode: You are not at the event location (demo mode).";

/// A single check-in
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceEntry {
    /// The id that was checked in, even when the venue fell back to a default
    pub event_id: u32,
    pub event_name: String,
    pub location: String,
    pub marked_at: NaiveDateTime,
    pub status: String,
}

impl AttendanceEntry {
    pub fn new(event_id: u32, marked_at: NaiveDateTime) -> Self {
        let venue = catalog::venue(event_id);
        Self {
            event_id,
            event_name: venue.name.to_string(),
            location: venue.location.to_string(),
            marked_at,
            status: DEMO_STATUS.to_string(),
        }
    }

    pub fn date(&self) -> String {
        self.marked_at.format("%Y-%m-%d").to_string()
    }

    pub fn time(&self) -> String {
        self.marked_at.format("%H:%M:%S").to_string()
    }

    /// Multi-line confirmation shown after checking in
    pub fn confirmation(&self) -> String {
        format!(
            "Attendance marked for {}!\nLocation: {}\nStatus: {}",
            self.event_name, self.location, self.status
        )
    }
}

/// Check-ins, newest first
#[derive(Debug, Clone, Default, Serialize)]
pub struct AttendanceLog {
    entries: Vec<AttendanceEntry>,
}

impl AttendanceLog {
    pub fn record(&mut self, entry: AttendanceEntry) -> &AttendanceEntry {
        self.entries.insert(0, entry);
        &self.entries[0]
    }

    pub fn entries(&self) -> &[AttendanceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
