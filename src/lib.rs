#![doc = "octolens: aggregation and reconciliation layer for exploring a public GitHub account."]

//! This crate pulls together scattered per-resource GitHub data (profile,
//! repositories, branches, commits, languages, README) into unified derived
//! views: a ranked reconciled contributor list, a chronological account
//! timeline, and a generated natural-language repository summary.
//!
//! All remote access goes through the [`contract::CodeHost`] and
//! [`contract::Generator`] seams so every pipeline can be driven against
//! mocks in tests. The rendering of these views is the caller's concern;
//! this crate only produces the data.

pub mod cli;
pub mod config;
pub mod contract;
pub mod contributors;
pub mod error;
pub mod explore;
pub mod gemini;
pub mod github;
pub mod summary;
pub mod timeline;

pub use error::ApiError;
pub use explore::AccountExplorer;
