use octolens::contract::{
    Account, Branch, BranchTip, MockCodeHost, MockGenerator, RankedContributor, Repository,
};
use octolens::error::ApiError;
use octolens::explore::AccountExplorer;

fn account(login: &str) -> Account {
    Account {
        login: login.to_string(),
        name: login.to_string(),
        avatar_url: format!("https://avatars.example/{login}"),
        bio: String::new(),
        followers: 1,
        following: 1,
        public_repos: 2,
        html_url: format!("https://github.com/{login}"),
        created_at: "2014-05-01T00:00:00Z".to_string(),
    }
}

fn repository(name: &str, created_at: &str) -> Repository {
    Repository {
        id: 7,
        name: name.to_string(),
        description: None,
        html_url: format!("https://github.com/acme/{name}"),
        stargazers_count: 0,
        forks_count: 0,
        language: None,
        updated_at: created_at.to_string(),
        created_at: created_at.to_string(),
        default_branch: Some("main".to_string()),
    }
}

#[tokio::test]
async fn account_fetch_returns_the_profile() {
    let mut host = MockCodeHost::new();
    host.expect_account()
        .returning(|login| Ok(account(login)));

    let explorer = AccountExplorer::new(host, MockGenerator::new());
    let profile = explorer.account("acme").await.expect("profile should load");
    assert_eq!(profile.login, "acme");
}

#[tokio::test]
async fn authentication_failure_surfaces_unchanged() {
    let mut host = MockCodeHost::new();
    host.expect_account()
        .returning(|_| Err(ApiError::AuthenticationFailed));

    let explorer = AccountExplorer::new(host, MockGenerator::new());
    let result = explorer.account("acme").await;
    assert!(matches!(result, Err(ApiError::AuthenticationFailed)));
}

#[tokio::test]
async fn missing_account_surfaces_not_found() {
    let mut host = MockCodeHost::new();
    host.expect_account().returning(|_| Err(ApiError::NotFound));

    let explorer = AccountExplorer::new(host, MockGenerator::new());
    let result = explorer.account("nobody").await;
    assert!(matches!(result, Err(ApiError::NotFound)));
}

#[tokio::test]
async fn timeline_joins_profile_and_repositories() {
    let mut host = MockCodeHost::new();
    host.expect_account().returning(|login| Ok(account(login)));
    host.expect_repositories().returning(|_| {
        Ok(vec![
            repository("later", "2022-01-01T00:00:00Z"),
            repository("earlier", "2018-01-01T00:00:00Z"),
        ])
    });

    let explorer = AccountExplorer::new(host, MockGenerator::new());
    let timeline = explorer.timeline("acme").await.expect("timeline should compose");

    assert_eq!(timeline.first_contribution, "2014-05-01T00:00:00Z");
    let titles: Vec<&str> = timeline.events.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Created earlier", "Created later"]);
}

#[tokio::test]
async fn timeline_fails_when_either_fetch_fails() {
    let mut host = MockCodeHost::new();
    host.expect_account().returning(|login| Ok(account(login)));
    host.expect_repositories()
        .returning(|_| Err(ApiError::RateLimited));

    let explorer = AccountExplorer::new(host, MockGenerator::new());
    let result = explorer.timeline("acme").await;
    assert!(matches!(result, Err(ApiError::RateLimited)));
}

#[tokio::test]
async fn contributors_flow_through_reconciliation() {
    let mut host = MockCodeHost::new();
    host.expect_branches().returning(|_, _| {
        Ok(vec![Branch {
            name: "main".to_string(),
            commit: BranchTip {
                sha: "main-tip".to_string(),
            },
        }])
    });
    host.expect_contributors().returning(|_, _| {
        Ok(vec![RankedContributor {
            login: "alice".to_string(),
            avatar_url: "https://avatars.example/alice".to_string(),
            html_url: "https://github.com/alice".to_string(),
            contributions: 3,
        }])
    });
    host.expect_branch_commits().returning(|_, _, _| Ok(vec![]));

    let explorer = AccountExplorer::new(host, MockGenerator::new());
    let contributors = explorer
        .contributors("acme", "widget")
        .await
        .expect("reconciliation should succeed");
    assert_eq!(contributors.len(), 1);
    assert_eq!(contributors[0].total_commits, 3);
}

#[tokio::test]
async fn repository_summary_returns_generator_output() {
    let mut host = MockCodeHost::new();
    host.expect_repositories()
        .returning(|_| Ok(vec![repository("widget", "2020-01-01T00:00:00Z")]));
    host.expect_languages()
        .returning(|_, _| Ok(Default::default()));
    host.expect_readme().returning(|_, _, _| String::new());

    let mut generator = MockGenerator::new();
    generator
        .expect_generate()
        .returning(|_| Ok("A widget for everyone.".to_string()));

    let explorer = AccountExplorer::new(host, generator);
    let summary = explorer.repository_summary("acme", "widget").await;
    assert_eq!(summary, "A widget for everyone.");
}
