use std::collections::HashMap;
use tracing::info;

/// Role a user holds within a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TeamRole {
    Coordinator,
    Developer,
}

/// Read-only lookup of team membership and category assignments.
///
/// The exporter takes this as an injected collaborator instead of walking
/// the configuration itself, which keeps the formatter pure and lets tests
/// supply a canned implementation. Implementations must return names in a
/// stable order; the export reproduces that order verbatim.
pub trait ConfigLookup {
    /// User names holding `role` in the named team, in configured order.
    fn user_names_for_role(&self, team_name: &str, role: TeamRole) -> Vec<String>;

    /// Category names attached to the named team, in configured order.
    fn category_names_for_team(&self, team_name: &str) -> Vec<String>;
}

impl<L: ConfigLookup + ?Sized> ConfigLookup for &L {
    fn user_names_for_role(&self, team_name: &str, role: TeamRole) -> Vec<String> {
        (**self).user_names_for_role(team_name, role)
    }

    fn category_names_for_team(&self, team_name: &str) -> Vec<String> {
        (**self).category_names_for_team(team_name)
    }
}

/// Map-backed [`ConfigLookup`] holding the assignments in memory.
///
/// Unknown teams resolve to empty lists; assignment order is preserved.
#[derive(Debug, Clone, Default)]
pub struct InMemoryConfigLookup {
    roles: HashMap<(String, TeamRole), Vec<String>>,
    categories: HashMap<String, Vec<String>>,
}

impl InMemoryConfigLookup {
    pub fn new() -> Self {
        info!("Creating new InMemoryConfigLookup instance");
        Self::default()
    }

    /// Assign the given user names to a role within a team, replacing any
    /// previous assignment for that (team, role) pair.
    pub fn assign_role<I, S>(&mut self, team_name: &str, role: TeamRole, user_names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let user_names: Vec<String> = user_names.into_iter().map(Into::into).collect();
        info!(
            "Assigning {} user(s) to role {:?} for team: {}",
            user_names.len(),
            role,
            team_name
        );
        self.roles.insert((team_name.to_string(), role), user_names);
    }

    /// Attach the given category names to a team, replacing any previous
    /// assignment.
    pub fn assign_categories<I, S>(&mut self, team_name: &str, category_names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let category_names: Vec<String> = category_names.into_iter().map(Into::into).collect();
        info!(
            "Assigning {} categories to team: {}",
            category_names.len(),
            team_name
        );
        self.categories
            .insert(team_name.to_string(), category_names);
    }
}

impl ConfigLookup for InMemoryConfigLookup {
    fn user_names_for_role(&self, team_name: &str, role: TeamRole) -> Vec<String> {
        self.roles
            .get(&(team_name.to_string(), role))
            .cloned()
            .unwrap_or_default()
    }

    fn category_names_for_team(&self, team_name: &str) -> Vec<String> {
        self.categories.get(team_name).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_team_resolves_to_empty() {
        let lookup = InMemoryConfigLookup::new();
        assert!(
            lookup
                .user_names_for_role("nope", TeamRole::Coordinator)
                .is_empty()
        );
        assert!(lookup.category_names_for_team("nope").is_empty());
    }

    #[test]
    fn test_assignment_order_is_preserved() {
        let mut lookup = InMemoryConfigLookup::new();
        lookup.assign_role("Web", TeamRole::Developer, ["dave", "erin", "amir"]);
        assert_eq!(
            lookup.user_names_for_role("Web", TeamRole::Developer),
            vec!["dave", "erin", "amir"]
        );
    }

    #[test]
    fn test_roles_are_tracked_separately() {
        let mut lookup = InMemoryConfigLookup::new();
        lookup.assign_role("Web", TeamRole::Coordinator, ["carol"]);
        lookup.assign_role("Web", TeamRole::Developer, ["dave"]);
        assert_eq!(
            lookup.user_names_for_role("Web", TeamRole::Coordinator),
            vec!["carol"]
        );
        assert_eq!(
            lookup.user_names_for_role("Web", TeamRole::Developer),
            vec!["dave"]
        );
    }

    #[test]
    fn test_reassignment_replaces_previous_names() {
        let mut lookup = InMemoryConfigLookup::new();
        lookup.assign_categories("Web", ["Programming", "Meeting"]);
        lookup.assign_categories("Web", ["Research"]);
        assert_eq!(lookup.category_names_for_team("Web"), vec!["Research"]);
    }

    #[test]
    fn test_borrowed_lookup_delegates() {
        let mut lookup = InMemoryConfigLookup::new();
        lookup.assign_categories("Web", ["Programming"]);
        let borrowed: &InMemoryConfigLookup = &lookup;
        assert_eq!(
            borrowed.category_names_for_team("Web"),
            vec!["Programming"]
        );
    }
}
