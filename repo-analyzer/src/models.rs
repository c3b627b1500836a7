// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Response models for the repository endpoints.
//!
//! Only the fields the analyzer renders are decoded; everything else in the
//! API payloads is ignored.

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{
    Deserialize, Deserializer,
    de::{MapAccess, Visitor},
};

/// Text rendered when a repository has no description.
pub const NO_DESCRIPTION: &str = "No description";

/// Repository metadata from `GET /repos/{owner}/{repo}`.
#[derive(Debug, Clone, Deserialize,)]
pub struct RepositoryMetadata
{
    #[serde(default)]
    pub description:       Option<String,>,
    pub stargazers_count:  u64,
    pub forks_count:       u64,
    pub open_issues_count: u64,
    pub created_at:        DateTime<FixedOffset,>,
    pub updated_at:        DateTime<FixedOffset,>,
}

impl RepositoryMetadata
{
    /// Description text, or [`NO_DESCRIPTION`] when missing or empty.
    pub fn description_text(&self,) -> &str
    {
        self.description.as_deref().filter(|text| !text.is_empty(),).unwrap_or(NO_DESCRIPTION,)
    }
}

/// One element of `GET /repos/{owner}/{repo}/commits`.
#[derive(Debug, Clone, Deserialize,)]
pub struct CommitEntry
{
    pub commit: CommitDetail,
}

/// Git-level commit data.
#[derive(Debug, Clone, Deserialize,)]
pub struct CommitDetail
{
    pub author:  CommitSignature,
    pub message: String,
}

/// Author signature recorded in the commit object.
#[derive(Debug, Clone, Deserialize,)]
pub struct CommitSignature
{
    pub name: String,
    pub date: DateTime<FixedOffset,>,
}

impl CommitEntry
{
    /// Text of the commit message up to the first newline.
    pub fn summary(&self,) -> &str
    {
        self.commit.message.split('\n',).next().unwrap_or_default()
    }
}

/// One element of `GET /repos/{owner}/{repo}/contributors`.
#[derive(Debug, Clone, Deserialize,)]
pub struct Contributor
{
    pub login:         String,
    pub contributions: u64,
}

/// Bytes of code written in one language.
#[derive(Debug, Clone, PartialEq, Eq,)]
pub struct LanguageShare
{
    pub language: String,
    pub bytes:    u64,
}

/// Language breakdown from `GET /repos/{owner}/{repo}/languages`.
///
/// Entries keep the order in which the API listed them until
/// [`sorted_by_bytes`](Self::sorted_by_bytes) is called.
#[derive(Debug, Clone, Default, PartialEq, Eq,)]
pub struct LanguageBreakdown
{
    entries: Vec<LanguageShare,>,
}

impl LanguageBreakdown
{
    /// Builds a breakdown from `(language, bytes)` pairs in API order.
    pub fn from_pairs<I, S,>(pairs: I,) -> Self
    where
        I: IntoIterator<Item = (S, u64,),>,
        S: Into<String,>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(language, bytes,)| LanguageShare {
                    language: language.into(), bytes,
                },)
                .collect(),
        }
    }

    /// Entries in their current order.
    pub fn entries(&self,) -> &[LanguageShare]
    {
        &self.entries
    }

    /// Returns `true` when the repository reported no languages.
    pub fn is_empty(&self,) -> bool
    {
        self.entries.is_empty()
    }

    /// Sum of all byte counts.
    pub fn total_bytes(&self,) -> u64
    {
        self.entries.iter().map(|entry| entry.bytes,).sum()
    }

    /// Share of `bytes` in the total, in percent. Zero when the total is zero.
    pub fn percentage(&self, bytes: u64,) -> f64
    {
        let total = self.total_bytes();
        if total == 0 {
            return 0.0;
        }
        bytes as f64 / total as f64 * 100.0
    }

    /// Returns the entries ordered by byte count, largest first. Languages
    /// with equal counts keep their relative API order.
    pub fn sorted_by_bytes(&self,) -> Vec<LanguageShare,>
    {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|left, right| right.bytes.cmp(&left.bytes,),);
        sorted
    }
}

/// Formats a percentage with one decimal place, e.g. `40.0%`.
pub fn format_percentage(value: f64,) -> String
{
    format!("{value:.1}%")
}

impl<'de,> Deserialize<'de,> for LanguageBreakdown
{
    fn deserialize<D,>(deserializer: D,) -> Result<Self, D::Error,>
    where
        D: Deserializer<'de,>,
    {
        struct BreakdownVisitor;

        impl<'de,> Visitor<'de,> for BreakdownVisitor
        {
            type Value = LanguageBreakdown;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_,>,) -> fmt::Result
            {
                formatter.write_str("a map from language name to byte count",)
            }

            fn visit_map<A,>(self, mut map: A,) -> Result<Self::Value, A::Error,>
            where
                A: MapAccess<'de,>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0,),);
                while let Some((language, bytes,),) = map.next_entry::<String, u64>()? {
                    entries.push(LanguageShare {
                        language,
                        bytes,
                    },);
                }
                Ok(LanguageBreakdown {
                    entries,
                },)
            }
        }

        deserializer.deserialize_map(BreakdownVisitor,)
    }
}
