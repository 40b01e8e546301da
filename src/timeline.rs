//! Chronological "repository created" event sequence for one account.
//! Pure transform; no I/O and no failure modes of its own.

use crate::contract::{Account, Repository};

#[derive(Debug, Clone)]
pub struct Timeline {
    pub events: Vec<TimelineEvent>,
    /// The account creation date, the earliest point on the timeline.
    pub first_contribution: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEvent {
    pub date: String,
    pub title: String,
    pub description: String,
    pub language: Option<String>,
    pub stars: u64,
    pub forks: u64,
}

/// Order repositories ascending by creation date and map each to an event.
/// The provider's RFC 3339 timestamps compare correctly as strings.
pub fn compose(account: &Account, mut repositories: Vec<Repository>) -> Timeline {
    repositories.sort_by(|a, b| a.created_at.cmp(&b.created_at));
    let events = repositories
        .into_iter()
        .map(|repo| TimelineEvent {
            date: repo.created_at,
            title: format!("Created {}", repo.name),
            description: repo
                .description
                .unwrap_or_else(|| String::from("No description provided")),
            language: repo.language,
            stars: repo.stargazers_count,
            forks: repo.forks_count,
        })
        .collect();

    Timeline {
        events,
        first_contribution: account.created_at.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> Account {
        Account {
            login: "acme".into(),
            name: "Acme".into(),
            avatar_url: "https://avatars.example/acme".into(),
            bio: String::new(),
            followers: 10,
            following: 2,
            public_repos: 3,
            html_url: "https://github.com/acme".into(),
            created_at: "2015-01-01T00:00:00Z".into(),
        }
    }

    fn repository(name: &str, created_at: &str, description: Option<&str>) -> Repository {
        Repository {
            id: 1,
            name: name.into(),
            description: description.map(str::to_owned),
            html_url: format!("https://github.com/acme/{name}"),
            stargazers_count: 7,
            forks_count: 3,
            language: Some("Rust".into()),
            updated_at: created_at.into(),
            created_at: created_at.into(),
            default_branch: Some("main".into()),
        }
    }

    #[test]
    fn events_are_ordered_ascending_by_creation_date() {
        let repos = vec![
            repository("newest", "2023-06-01T00:00:00Z", None),
            repository("oldest", "2016-02-01T00:00:00Z", None),
            repository("middle", "2019-09-01T00:00:00Z", None),
        ];
        let timeline = compose(&account(), repos);
        let titles: Vec<&str> = timeline.events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Created oldest", "Created middle", "Created newest"]);
        assert_eq!(timeline.first_contribution, "2015-01-01T00:00:00Z");
    }

    #[test]
    fn missing_description_is_substituted() {
        let timeline = compose(
            &account(),
            vec![repository("bare", "2020-01-01T00:00:00Z", None)],
        );
        assert_eq!(timeline.events[0].description, "No description provided");
    }

    #[test]
    fn event_carries_repository_metadata() {
        let timeline = compose(
            &account(),
            vec![repository("tool", "2020-01-01T00:00:00Z", Some("A tool."))],
        );
        let event = &timeline.events[0];
        assert_eq!(event.description, "A tool.");
        assert_eq!(event.language.as_deref(), Some("Rust"));
        assert_eq!(event.stars, 7);
        assert_eq!(event.forks, 3);
    }

    #[test]
    fn empty_repository_list_yields_no_events() {
        let timeline = compose(&account(), Vec::new());
        assert!(timeline.events.is_empty());
    }
}
