//! # contract: entity shapes and the seams every pipeline is built against
//!
//! The loosely-typed JSON the providers return is mapped into the fixed
//! shapes below at the client boundary; downstream code never touches raw
//! payloads. Two traits define the external world:
//!
//! - [`CodeHost`]: the hosting provider's per-resource fetch operations.
//! - [`Generator`]: a single-shot text-generation call.
//!
//! Both traits are annotated for `mockall` so the reconciliation and
//! summarization pipelines can be driven deterministically in tests.

use async_trait::async_trait;
use mockall::automock;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::error::ApiError;

/// Immutable account profile snapshot, normalized at the client boundary:
/// a missing display name falls back to the login, a missing bio becomes
/// an empty string.
#[derive(Debug, Clone)]
pub struct Account {
    pub login: String,
    pub name: String,
    pub avatar_url: String,
    pub bio: String,
    pub followers: u64,
    pub following: u64,
    pub public_repos: u64,
    pub html_url: String,
    pub created_at: String,
}

/// Read-only projection of one repository as the provider reports it.
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub language: Option<String>,
    pub updated_at: String,
    pub created_at: String,
    pub default_branch: Option<String>,
}

/// One week of the commit-activity histogram.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WeeklyActivity {
    pub total: u64,
    pub week: i64,
    pub days: Vec<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Branch {
    pub name: String,
    pub commit: BranchTip,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BranchTip {
    pub sha: String,
}

/// A commit from a branch listing. `author` is the resolved provider
/// identity and is absent for unattributed commits.
#[derive(Debug, Clone, Deserialize)]
pub struct Commit {
    pub sha: String,
    pub author: Option<CommitAuthor>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommitAuthor {
    pub login: String,
    pub avatar_url: String,
}

/// A contributor as ranked by the provider's own contributors endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RankedContributor {
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
    pub contributions: u64,
}

/// A reconciled contributor: the provider baseline plus the commit count
/// accumulated by walking every branch. `total_commits` never drops below
/// `contributions`, and no two entries in a reconciled set share a login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contributor {
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
    pub contributions: u64,
    pub total_commits: u64,
}

/// Language name → byte count for one repository, in the order the
/// provider returned the keys. Only the key set is consumed downstream,
/// so the order must survive deserialization.
#[derive(Debug, Clone, Default)]
pub struct LanguageBreakdown(Vec<(String, u64)>);

impl LanguageBreakdown {
    pub fn new(entries: Vec<(String, u64)>) -> Self {
        LanguageBreakdown(entries)
    }

    /// Language names in provider order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for LanguageBreakdown {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BreakdownVisitor;

        impl<'de> Visitor<'de> for BreakdownVisitor {
            type Value = Vec<(String, u64)>;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a map of language name to byte count")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, bytes)) = map.next_entry::<String, u64>()? {
                    entries.push((name, bytes));
                }
                Ok(entries)
            }
        }

        deserializer
            .deserialize_map(BreakdownVisitor)
            .map(LanguageBreakdown)
    }
}

/// Per-resource fetch operations against the hosting provider.
///
/// Most operations propagate [`ApiError`] unchanged to the caller. The two
/// decorative inputs — commit activity and README — absorb failures locally
/// and hand back an empty result instead, which is why their signatures
/// carry no `Result`.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait CodeHost: Send + Sync {
    /// Fetch the account profile for a login.
    async fn account(&self, login: &str) -> Result<Account, ApiError>;

    /// Fetch up to 100 most-recently-updated repositories for a login.
    /// Single page; no further pagination is attempted.
    async fn repositories(&self, login: &str) -> Result<Vec<Repository>, ApiError>;

    /// Fetch the per-week commit-activity histogram for a repository.
    /// Best effort: any failure yields an empty histogram.
    async fn commit_activity(&self, owner: &str, repo: &str) -> Vec<WeeklyActivity>;

    /// Fetch the language breakdown for a repository.
    async fn languages(&self, owner: &str, repo: &str) -> Result<LanguageBreakdown, ApiError>;

    /// Fetch the branch list for a repository.
    async fn branches(&self, owner: &str, repo: &str) -> Result<Vec<Branch>, ApiError>;

    /// Fetch up to 100 commits reachable from a branch.
    async fn branch_commits(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
    ) -> Result<Vec<Commit>, ApiError>;

    /// Fetch the raw README text for a branch reference.
    /// Best effort: a missing file or any failure yields an empty string.
    async fn readme(&self, owner: &str, repo: &str, reference: &str) -> String;

    /// Fetch the contributor list as ranked by the provider.
    async fn contributors(&self, owner: &str, repo: &str)
        -> Result<Vec<RankedContributor>, ApiError>;
}

/// Single-shot text generation. One prompt in, the first candidate's text
/// out; no retry, no streaming.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait Generator: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;
}
