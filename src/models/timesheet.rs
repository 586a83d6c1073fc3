use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single user's timesheet: target hour bookkeeping plus the recorded
/// work entries. All fields arrive materialized from the surrounding
/// application; this crate only reads them.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Timesheet {
    pub user_key: String,
    pub target_hours_practice: i32,
    pub target_hours_theory: i32,
    pub target_hours_completed: i32,
    pub target_hours_removed: i32,
    pub target_hours: i32,
    /// Free-text penalty note shown in the export's "Penalty Text" column.
    pub reason: String,
    pub ects: i32,
    pub lectures: String,
    pub entries: Vec<TimesheetEntry>,
}

impl Timesheet {
    /// Hours still owed. May be negative when more hours were completed
    /// than targeted; not clamped.
    pub fn remaining_hours(&self) -> i32 {
        self.target_hours - self.target_hours_completed
    }
}

impl fmt::Display for Timesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Timesheet for {}:", self.user_key)?;
        writeln!(f, "  Practical Hours: {}", self.target_hours_practice)?;
        writeln!(f, "  Theory Hours: {}", self.target_hours_theory)?;
        writeln!(f, "  Hours Done: {}", self.target_hours_completed)?;
        writeln!(f, "  Subtracted Hours: {}", self.target_hours_removed)?;
        writeln!(f, "  Total Hours: {}", self.target_hours)?;
        writeln!(f, "  Remaining Hours: {}", self.remaining_hours())?;
        writeln!(f, "  ECTS: {}", self.ects)?;
        writeln!(f, "  Entry Count: {}", self.entries.len())?;

        for (i, entry) in self.entries.iter().enumerate() {
            writeln!(f, "\n=========== Entry #{} ===========", i + 1)?;
            writeln!(f, "  Begin: {}", entry.begin_date)?;
            writeln!(f, "  End: {}", entry.end_date)?;
            writeln!(f, "  Pause Minutes: {}", entry.pause_minutes)?;
            writeln!(f, "  Duration Minutes: {}", entry.duration_minutes)?;
            writeln!(f, "  Team: {}", entry.team.team_name)?;
            writeln!(f, "  Category: {}", entry.category.name)?;
            writeln!(f, "  Description: {}", entry.description)?;
        }
        Ok(())
    }
}

/// One recorded block of work inside a timesheet.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TimesheetEntry {
    pub begin_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub pause_minutes: u32,
    pub duration_minutes: u32,
    pub team: Team,
    pub category: Category,
    pub description: String,
}

/// Team an entry is booked against. `team_name` doubles as the lookup key
/// for role and category resolution, so it must be unique among teams.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Team {
    pub team_name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Category {
    pub name: String,
}
