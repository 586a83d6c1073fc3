//! Timesheet CSV Export Utility Library
//!
//! This library renders timesheet and configuration records into a
//! semicolon-delimited text format for spreadsheets and archival.
//! Team membership and category assignments are resolved through an
//! injected [`ConfigLookup`] so the exporter stays a pure formatter.

pub mod helpers;
pub mod models;
pub mod service;

pub use helpers::csv::{CsvTimesheetExporter, format_duration, quote};

// Re-export key types for convenience
pub use models::config::{ApprovedUser, Config};
pub use models::timesheet::{Category, Team, Timesheet, TimesheetEntry};
pub use service::{ConfigLookup, InMemoryConfigLookup, TeamRole};
