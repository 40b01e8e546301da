use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::contract::CodeHost;
use crate::explore::AccountExplorer;
use crate::gemini::GeminiClient;
use crate::github::GithubClient;

/// CLI for octolens: unified views over a public GitHub account.
#[derive(Parser)]
#[clap(
    name = "octolens",
    version,
    about = "Explore a GitHub account: profile, reconciled contributors, timeline and generated repository summaries"
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the account profile
    User { login: String },
    /// List the most recently updated repositories (up to 100)
    Repos { login: String },
    /// Reconcile contributors for one repository across all branches
    Contributors { login: String, repo: String },
    /// Generate a natural-language summary for one repository
    Summary { login: String, repo: String },
    /// Show the chronological repository-creation timeline
    Timeline { login: String },
    /// Show the weekly commit-activity histogram for one repository
    Activity { login: String, repo: String },
}

/// Extracted async CLI logic entrypoint for integration tests and main()
pub async fn run(cli: Cli) -> Result<()> {
    let config = Config::from_env()?;
    let host = GithubClient::with_base_url(&config.github_api_url, &config.github_token);
    let generator =
        GeminiClient::with_endpoint(&config.gemini_api_url, config.gemini_api_key.clone());
    let explorer = AccountExplorer::new(host.clone(), generator);

    match cli.command {
        Commands::User { login } => {
            let account = explorer.account(&login).await?;
            println!("{account:#?}");
        }
        Commands::Repos { login } => {
            let repositories = explorer.repositories(&login).await?;
            println!("{repositories:#?}");
        }
        Commands::Contributors { login, repo } => {
            let contributors = explorer.contributors(&login, &repo).await?;
            println!("{contributors:#?}");
        }
        Commands::Summary { login, repo } => {
            let summary = explorer.repository_summary(&login, &repo).await;
            println!("{summary}");
        }
        Commands::Timeline { login } => {
            let timeline = explorer.timeline(&login).await?;
            println!("{timeline:#?}");
        }
        Commands::Activity { login, repo } => {
            let weeks = host.commit_activity(&login, &repo).await;
            println!("{weeks:#?}");
        }
    }

    Ok(())
}
