//! # explore: the produced in-process interface
//!
//! One facade over a [`CodeHost`] and a [`Generator`] exposing the derived
//! datasets a dashboard needs: account profile, repository list, reconciled
//! contributors, generated repository summary, and the account timeline.
//! Fetch errors propagate per the taxonomy in [`crate::error`]; only the
//! summary operation is infallible by contract.

use futures::try_join;
use tracing::info;

use crate::contract::{Account, CodeHost, Contributor, Generator, Repository};
use crate::contributors;
use crate::error::ApiError;
use crate::summary;
use crate::timeline::{self, Timeline};

pub struct AccountExplorer<H, G> {
    host: H,
    generator: G,
}

impl<H, G> AccountExplorer<H, G>
where
    H: CodeHost,
    G: Generator,
{
    pub fn new(host: H, generator: G) -> Self {
        AccountExplorer { host, generator }
    }

    /// Fetch the account profile snapshot.
    pub async fn account(&self, login: &str) -> Result<Account, ApiError> {
        self.host.account(login).await
    }

    /// Fetch up to 100 most-recently-updated repositories.
    pub async fn repositories(&self, login: &str) -> Result<Vec<Repository>, ApiError> {
        self.host.repositories(login).await
    }

    /// Reconcile the provider's contributor ranking with per-branch commit
    /// history into one deduplicated, ranked list.
    pub async fn contributors(
        &self,
        login: &str,
        repo: &str,
    ) -> Result<Vec<Contributor>, ApiError> {
        contributors::reconcile(&self.host, login, repo).await
    }

    /// Generate a natural-language summary for one repository. Always
    /// returns a string; failures yield the fixed fallback text.
    pub async fn repository_summary(&self, login: &str, repo: &str) -> String {
        summary::summarise(&self.host, &self.generator, login, repo).await
    }

    /// Compose the chronological repository-creation timeline. Profile and
    /// repository list are fetched concurrently; the first failure wins and
    /// the other result is discarded.
    pub async fn timeline(&self, login: &str) -> Result<Timeline, ApiError> {
        let (account, repositories) =
            try_join!(self.host.account(login), self.host.repositories(login))?;
        info!(login, repositories = repositories.len(), "composing account timeline");
        Ok(timeline::compose(&account, repositories))
    }
}
