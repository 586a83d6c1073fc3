use chrono::Local;
use tracing::info;

use crate::models::config::Config;
use crate::models::timesheet::Timesheet;
use crate::service::{ConfigLookup, TeamRole};

/// Field separator. Fixed; existing consumers parse on it.
pub const DELIMITER: &str = ";";
/// Record separator. A bare newline, not the platform line ending.
pub const NEW_LINE: &str = "\n";

const TIMESHEET_COLUMNS: [&str; 10] = [
    "Username",
    "Practical Hours",
    "Theory Hours",
    "Hours Done",
    "Substracted Hours",
    "Total Hours",
    "Remaining Hours",
    "Penalty Text",
    "ECTS",
    "Lecture",
];

const ENTRY_COLUMNS: [&str; 7] = [
    "Begin Date",
    "End Date",
    "Pause Minutes",
    "Duration Minutes",
    "Team",
    "Category",
    "Description",
];

/// Quote a free-text field for the delimited output.
///
/// Absent, empty and all-whitespace input all render as the empty quoted
/// field `""`. Anything else is HTML-unescaped first (stored text arrives
/// entity-encoded from the web UI), then embedded quotes are doubled and
/// the whole value is wrapped in quotes. The decode runs before the
/// doubling, so `&quot;` ends up doubled like a literal quote.
pub fn quote(field: Option<&str>) -> String {
    match field {
        Some(text) if !text.trim().is_empty() => {
            let decoded = html_escape::decode_html_entities(text);
            format!("\"{}\"", decoded.replace('"', "\"\""))
        }
        _ => "\"\"".to_string(),
    }
}

/// Render a minute count as `hours:minutes` without zero-padding,
/// e.g. 125 -> `2:5`.
pub fn format_duration(duration_minutes: u32) -> String {
    let hours = duration_minutes / 60;
    let minutes = duration_minutes % 60;
    format!("{hours}:{minutes}")
}

/// Renders timesheets and configuration into semicolon-delimited text.
///
/// Holds no state besides the injected [`ConfigLookup`], which resolves
/// team membership and category assignments during configuration export.
pub struct CsvTimesheetExporter<L> {
    lookup: L,
}

impl<L: ConfigLookup> CsvTimesheetExporter<L> {
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    /// Export the administration settings, one labelled block per concern.
    ///
    /// Approved user names and the mail-from pair are written raw, while
    /// team, member and category names and all template text go through
    /// [`quote`]. Consumers rely on that exact split; keep it.
    pub fn export_config(&self, config: &Config) -> String {
        info!(
            "Exporting configuration with {} approved user(s) and {} team(s)",
            config.approved_users.len(),
            config.teams.len()
        );
        let mut out = String::new();

        out.push_str("Date");
        out.push_str(DELIMITER);
        out.push_str(&Local::now().to_string());
        out.push_str(NEW_LINE);

        // approved users
        out.push_str("Approved Users");
        out.push_str(DELIMITER);
        for approved_user in &config.approved_users {
            out.push_str(&approved_user.user_name);
            out.push_str(DELIMITER);
        }
        out.push_str(NEW_LINE);

        // email notifications
        out.push_str("Email Settings General");
        out.push_str(DELIMITER);
        out.push_str(NEW_LINE);
        out.push_str("Email From Name");
        out.push_str(DELIMITER);
        out.push_str(&config.mail_from_name);
        out.push_str(DELIMITER);
        out.push_str("Email From Mail-Address");
        out.push_str(DELIMITER);
        out.push_str(&config.mail_from);
        out.push_str(DELIMITER);
        out.push_str(NEW_LINE);

        push_template_block(
            &mut out,
            "Email Out of Time",
            "Email Out Of Time Subject",
            config.mail_subject_time.as_deref(),
            "Email Out Of Time Body",
            config.mail_body_time.as_deref(),
        );
        push_template_block(
            &mut out,
            "Email Inactive",
            "Email Inactive Subject",
            config.mail_subject_inactive.as_deref(),
            "Email Inactive Body",
            config.mail_body_inactive.as_deref(),
        );
        push_template_block(
            &mut out,
            "Email Admin Changed Entry",
            "Email Admin Changed Entry Subject",
            config.mail_subject_entry.as_deref(),
            "Email Admin Changed Entry Body",
            config.mail_body_entry.as_deref(),
        );

        // teams
        out.push_str("Teams");
        out.push_str(NEW_LINE);
        for team in &config.teams {
            out.push_str(NEW_LINE);
            out.push_str("Team Name");
            out.push_str(DELIMITER);
            out.push_str(&quote(Some(&team.team_name)));
            out.push_str(DELIMITER);
            out.push_str(NEW_LINE);

            push_quoted_names(
                &mut out,
                "Assigned Coordinators",
                &self
                    .lookup
                    .user_names_for_role(&team.team_name, TeamRole::Coordinator),
            );
            push_quoted_names(
                &mut out,
                "Assigned Users",
                &self
                    .lookup
                    .user_names_for_role(&team.team_name, TeamRole::Developer),
            );
            push_quoted_names(
                &mut out,
                "Assigned Categories",
                &self.lookup.category_names_for_team(&team.team_name),
            );
        }
        out
    }

    /// Export a single timesheet: a ten-column summary block, then a
    /// seven-column header/data pair per entry, then one blank record.
    ///
    /// The summary data row is written raw; entry rows are fully quoted,
    /// including the two minute counts.
    pub fn export_timesheet(&self, timesheet: &Timesheet) -> String {
        info!(
            "Exporting timesheet for user {} with {} entries",
            timesheet.user_key,
            timesheet.entries.len()
        );
        let mut out = String::new();

        out.push_str(&TIMESHEET_COLUMNS.join(DELIMITER));
        out.push_str(NEW_LINE);

        let summary_row = [
            timesheet.user_key.clone(),
            timesheet.target_hours_practice.to_string(),
            timesheet.target_hours_theory.to_string(),
            timesheet.target_hours_completed.to_string(),
            timesheet.target_hours_removed.to_string(),
            timesheet.target_hours.to_string(),
            timesheet.remaining_hours().to_string(),
            timesheet.reason.clone(),
            timesheet.ects.to_string(),
            timesheet.lectures.clone(),
        ];
        out.push_str(&summary_row.join(DELIMITER));
        out.push_str(NEW_LINE);

        // header repeats per entry
        for entry in &timesheet.entries {
            out.push_str(&ENTRY_COLUMNS.join(DELIMITER));
            out.push_str(NEW_LINE);

            let entry_row = [
                quote(Some(&entry.begin_date.to_string())),
                quote(Some(&entry.end_date.to_string())),
                quote(Some(&entry.pause_minutes.to_string())),
                quote(Some(&format_duration(entry.duration_minutes))),
                quote(Some(&entry.team.team_name)),
                quote(Some(&entry.category.name)),
                quote(Some(&entry.description)),
            ];
            out.push_str(&entry_row.join(DELIMITER));
            out.push_str(NEW_LINE);
        }
        out.push_str(NEW_LINE);

        out
    }

    /// Export several timesheets back to back, in input order.
    pub fn export_timesheets(&self, timesheets: &[Timesheet]) -> String {
        info!("Exporting {} timesheet(s)", timesheets.len());
        timesheets
            .iter()
            .map(|timesheet| self.export_timesheet(timesheet))
            .collect()
    }
}

fn push_template_block(
    out: &mut String,
    header: &str,
    subject_label: &str,
    subject: Option<&str>,
    body_label: &str,
    body: Option<&str>,
) {
    out.push_str(header);
    out.push_str(DELIMITER);
    out.push_str(NEW_LINE);
    out.push_str(subject_label);
    out.push_str(DELIMITER);
    out.push_str(&quote(subject));
    out.push_str(DELIMITER);
    out.push_str(body_label);
    out.push_str(DELIMITER);
    out.push_str(&quote(body));
    out.push_str(DELIMITER);
    out.push_str(NEW_LINE);
}

fn push_quoted_names(out: &mut String, label: &str, names: &[String]) {
    out.push_str(label);
    out.push_str(DELIMITER);
    for name in names {
        out.push_str(&quote(Some(name)));
        out.push_str(DELIMITER);
    }
    out.push_str(NEW_LINE);
}
