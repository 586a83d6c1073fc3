use anyhow::Result;
use tracing::info;

use timesheet_csv_util::{
    ApprovedUser, Config, CsvTimesheetExporter, InMemoryConfigLookup, Team, TeamRole, Timesheet,
};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting timesheet CSV export example");

    // Team membership and categories (in a real app these come from the
    // administration backend)
    let mut lookup = InMemoryConfigLookup::new();
    lookup.assign_role("Web Team", TeamRole::Coordinator, ["carol"]);
    lookup.assign_role("Web Team", TeamRole::Developer, ["dave", "erin"]);
    lookup.assign_categories("Web Team", ["Programming", "Meeting", "Research"]);

    let config = Config {
        approved_users: vec![
            ApprovedUser {
                user_name: "alice".to_string(),
            },
            ApprovedUser {
                user_name: "bob".to_string(),
            },
        ],
        mail_from_name: "Timesheet Admin".to_string(),
        mail_from: "admin@example.org".to_string(),
        mail_subject_time: Some("[Timesheet] Time limit exceeded".to_string()),
        mail_body_time: Some("You have exceeded your target hours.".to_string()),
        mail_subject_inactive: None,
        mail_body_inactive: None,
        mail_subject_entry: Some("[Timesheet] An admin changed your entry".to_string()),
        mail_body_entry: Some("Please review the changed entry.".to_string()),
        teams: vec![Team {
            team_name: "Web Team".to_string(),
        }],
    };

    // A timesheet as the surrounding application would hand it over,
    // here decoded from its JSON representation
    let timesheet: Timesheet = serde_json::from_value(serde_json::json!({
        "user_key": "jdoe",
        "target_hours_practice": 20,
        "target_hours_theory": 10,
        "target_hours_completed": 25,
        "target_hours_removed": 0,
        "target_hours": 30,
        "reason": "",
        "ects": 3,
        "lectures": "SE Lecture WS16",
        "entries": [{
            "begin_date": "2016-03-01T09:00:00",
            "end_date": "2016-03-01T11:05:00",
            "pause_minutes": 15,
            "duration_minutes": 125,
            "team": { "team_name": "Web Team" },
            "category": { "name": "Programming" },
            "description": "worked on the export dialog"
        }]
    }))?;

    println!("{timesheet}");

    let exporter = CsvTimesheetExporter::new(&lookup);

    let timesheet_csv = exporter.export_timesheet(&timesheet);
    std::fs::write("timesheet.csv", &timesheet_csv)?;
    info!(
        "Wrote timesheet.csv ({} bytes) for user {}",
        timesheet_csv.len(),
        timesheet.user_key
    );

    let all_csv = exporter.export_timesheets(std::slice::from_ref(&timesheet));
    std::fs::write("timesheets.csv", &all_csv)?;
    info!("Wrote timesheets.csv ({} bytes)", all_csv.len());

    let config_csv = exporter.export_config(&config);
    std::fs::write("config.csv", &config_csv)?;
    info!("Wrote config.csv ({} bytes)", config_csv.len());

    Ok(())
}

/*
Export flavors produced by this example:

1. timesheet.csv
   - Ten-column summary block for one user, then one header/data pair
     per recorded entry

2. timesheets.csv
   - The same blocks concatenated for a list of timesheets

3. config.csv
   - Approved users, mail sender settings, the three notification
     templates and per-team membership/category blocks

Field separator is ';', record separator is a bare newline. Free-text
fields are HTML-unescaped, quote-doubled and wrapped in quotes; see
helpers::csv::quote for the exact rule.
*/
