use serde::{Deserialize, Serialize};

use crate::models::timesheet::Team;

/// Administration settings as exported alongside timesheets: the approved
/// user list, the mail sender identity, the three notification templates
/// and the configured teams.
///
/// Template subject/body pairs are optional; an unset one is rendered as
/// an empty quoted field.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Config {
    pub approved_users: Vec<ApprovedUser>,
    pub mail_from_name: String,
    pub mail_from: String,
    pub mail_subject_time: Option<String>,
    pub mail_body_time: Option<String>,
    pub mail_subject_inactive: Option<String>,
    pub mail_body_inactive: Option<String>,
    pub mail_subject_entry: Option<String>,
    pub mail_body_entry: Option<String>,
    pub teams: Vec<Team>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApprovedUser {
    pub user_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserializes_with_absent_templates() {
        let config: Config = serde_json::from_value(serde_json::json!({
            "approved_users": [{ "user_name": "alice" }],
            "mail_from_name": "Timesheet Admin",
            "mail_from": "admin@example.org",
            "mail_subject_time": "Time limit exceeded",
            "mail_body_time": null,
            "mail_subject_inactive": null,
            "mail_body_inactive": null,
            "mail_subject_entry": null,
            "mail_body_entry": null,
            "teams": [{ "team_name": "Web" }]
        }))
        .expect("config should deserialize");

        assert_eq!(config.approved_users.len(), 1);
        assert_eq!(config.mail_subject_time.as_deref(), Some("Time limit exceeded"));
        assert!(config.mail_body_time.is_none());
        assert_eq!(config.teams[0].team_name, "Web");
    }
}
