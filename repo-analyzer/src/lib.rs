//! Repository analysis for GitHub-compatible REST APIs.
//!
//! The library fetches repository metadata, the language breakdown, recent
//! commits and top contributors, and renders each as an aligned text table.
//! [`analyze`] runs the whole pipeline; the [`Table`] and [`Renderer`] types
//! are usable on their own for any tabular text output.

mod analyzer;
mod client;
mod config;
mod error;
pub mod logging;
mod models;
mod render;
mod table;
mod target;

pub use analyzer::{
    Analyzer, COMMITS_TITLE, CONTRIBUTORS_TITLE, LANGUAGES_TITLE, METADATA_TITLE, analyze,
    commits_table, contributors_table, language_table, metadata_table,
};
pub use client::{
    ACCEPT_MEDIA_TYPE, ResourceClient, commits_endpoint, contributors_endpoint, languages_endpoint,
    repository_endpoint,
};
pub use config::{AnalyzerConfig, DEFAULT_API_URL, DEFAULT_PAGE_SIZE, OutputStyle};
pub use error::Error;
pub use models::{
    CommitDetail, CommitEntry, CommitSignature, Contributor, LanguageBreakdown, LanguageShare,
    NO_DESCRIPTION, RepositoryMetadata, format_percentage,
};
pub use render::{BANNER_RULE_WIDTH, PlainRenderer, Renderer, StyledRenderer, renderer_for};
pub use table::Table;
pub use target::{RepositoryTarget, USAGE_MESSAGE};
