//! # contributors: branch-aware contributor reconciliation
//!
//! The provider's contributors endpoint ranks by default-branch history
//! only. Reconciliation produces a more accurate set by also walking every
//! branch's commit log and merging the two differently-keyed sources into
//! one deduplicated list keyed by login.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::contract::{CodeHost, Contributor};
use crate::error::ApiError;

/// Base used to synthesize a profile URL for contributors that only appear
/// in branch history, never in the baseline ranking.
const PROFILE_URL_BASE: &str = "https://github.com";

/// Merge the provider's baseline contributor ranking with per-branch commit
/// counts into one deduplicated, ranked list.
///
/// Branches are walked one at a time: each commit fetch completes before
/// the next begins, which bounds concurrent load on the provider and keeps
/// the accumulation map single-writer. A failed branch-list, baseline or
/// per-branch commit fetch aborts the whole operation; there is no partial
/// result.
///
/// The output is sorted descending by `total_commits`, ties broken
/// ascending by login so equal counts still order deterministically.
pub async fn reconcile<H>(host: &H, owner: &str, repo: &str) -> Result<Vec<Contributor>, ApiError>
where
    H: CodeHost + ?Sized,
{
    let branches = host.branches(owner, repo).await?;
    let baseline = host.contributors(owner, repo).await?;
    info!(
        owner,
        repo,
        branches = branches.len(),
        baseline = baseline.len(),
        "reconciling contributors across branches"
    );

    let mut by_login: HashMap<String, Contributor> = HashMap::with_capacity(baseline.len());
    for ranked in baseline {
        by_login.insert(
            ranked.login.clone(),
            Contributor {
                total_commits: ranked.contributions,
                contributions: ranked.contributions,
                login: ranked.login,
                avatar_url: ranked.avatar_url,
                html_url: ranked.html_url,
            },
        );
    }

    for branch in &branches {
        let commits = host.branch_commits(owner, repo, &branch.name).await?;
        debug!(branch = %branch.name, commits = commits.len(), "counting branch commits");
        for commit in commits {
            // Unattributed commits carry no resolved identity and count for nobody.
            let Some(author) = commit.author else {
                continue;
            };
            match by_login.get_mut(&author.login) {
                Some(entry) => entry.total_commits += 1,
                None => {
                    by_login.insert(
                        author.login.clone(),
                        Contributor {
                            html_url: format!("{PROFILE_URL_BASE}/{}", author.login),
                            login: author.login,
                            avatar_url: author.avatar_url,
                            contributions: 0,
                            total_commits: 1,
                        },
                    );
                }
            }
        }
    }

    let mut contributors: Vec<Contributor> = by_login.into_values().collect();
    contributors.sort_by(|a, b| {
        b.total_commits
            .cmp(&a.total_commits)
            .then_with(|| a.login.cmp(&b.login))
    });

    info!(owner, repo, reconciled = contributors.len(), "contributor reconciliation complete");
    Ok(contributors)
}
