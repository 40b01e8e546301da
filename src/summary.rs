//! # summary: bounded-prompt repository summarization pipeline
//!
//! Resolves one repository, gathers its language breakdown and README,
//! composes a size-bounded instruction and submits it to the text
//! generator. Summaries are advisory: every failure anywhere in the
//! pipeline collapses into [`SUMMARY_FALLBACK`], never an error.

use tracing::{info, warn};

use crate::contract::{CodeHost, Generator};
use crate::error::ApiError;

/// Returned whenever any step of the pipeline fails.
pub const SUMMARY_FALLBACK: &str = "Failed to generate summary. Please try again later.";

/// Hard README cutoff, in characters; bounds generation request size.
pub const README_CHAR_LIMIT: usize = 1500;

/// Conventional branch used when a repository record names none.
const DEFAULT_BRANCH: &str = "main";

/// Compose the generation instruction for one repository.
///
/// The README is cut hard at [`README_CHAR_LIMIT`] characters, no
/// word-boundary adjustment; language names are embedded in the order the
/// breakdown returned them.
pub fn build_prompt(name: &str, description: &str, languages: &[&str], readme: &str) -> String {
    let trimmed = truncate_readme(readme);
    format!(
        "Please provide a concise, human-friendly summary of this GitHub repository:\n\n\
         Repository Name: {name}\n\
         Description: {description}\n\
         Primary Languages: {language_list}\n\n\
         README Content:\n{trimmed}\n\n\
         Create a 5-10 line summary that:\n\
         1. Explains the project's purpose in simple terms\n\
         2. Highlights key features and technologies\n\
         3. Describes potential use cases\n\
         4. Makes technical concepts accessible to non-developers\n\n\
         Format the response in clear, concise paragraphs.",
        language_list = languages.join(", "),
    )
}

fn truncate_readme(readme: &str) -> &str {
    match readme.char_indices().nth(README_CHAR_LIMIT) {
        Some((cutoff, _)) => &readme[..cutoff],
        None => readme,
    }
}

/// Produce a natural-language summary for `repo_name` under `login`.
///
/// Never fails: any error (missing repository, provider failure, missing
/// generation credential, absent candidate) is absorbed into
/// [`SUMMARY_FALLBACK`] so the caller's view cannot break on a decorative
/// feature.
pub async fn summarise<H, G>(host: &H, generator: &G, login: &str, repo_name: &str) -> String
where
    H: CodeHost + ?Sized,
    G: Generator + ?Sized,
{
    match try_summarise(host, generator, login, repo_name).await {
        Ok(summary) => summary,
        Err(error) => {
            warn!(error = %error, login, repo = repo_name, "summary generation failed, returning fallback");
            SUMMARY_FALLBACK.to_string()
        }
    }
}

async fn try_summarise<H, G>(
    host: &H,
    generator: &G,
    login: &str,
    repo_name: &str,
) -> Result<String, Box<dyn std::error::Error + Send + Sync>>
where
    H: CodeHost + ?Sized,
    G: Generator + ?Sized,
{
    let repositories = host.repositories(login).await?;
    let repository = repositories
        .into_iter()
        .find(|repo| repo.name == repo_name)
        .ok_or(ApiError::NotFound)?;

    let branch = repository.default_branch.as_deref().unwrap_or(DEFAULT_BRANCH);

    // Independent inputs, fetched together. The README side absorbs its own
    // failures, so only the language fetch can fail the join.
    let (languages, readme) = tokio::join!(
        host.languages(login, repo_name),
        host.readme(login, repo_name, branch),
    );
    let languages = languages?;

    let names: Vec<&str> = languages.names().collect();
    let prompt = build_prompt(
        &repository.name,
        repository.description.as_deref().unwrap_or(""),
        &names,
        &readme,
    );
    info!(
        login,
        repo = repo_name,
        branch,
        languages = names.len(),
        prompt_chars = prompt.chars().count(),
        "submitting repository summary prompt"
    );

    let text = generator.generate(&prompt).await?;
    Ok(text.trim().to_string())
}
