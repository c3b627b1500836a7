// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Parsing of the `owner/name` repository argument.
//!
//! A target is valid only when the trimmed input splits on `/` into exactly
//! two non-empty parts. Parsing happens before any request is issued.

use std::{fmt, str::FromStr};

use crate::error::Error;

/// Message reported when the repository argument is malformed.
pub const USAGE_MESSAGE: &str = "Repository must be in format: owner/name";

/// Repository identified by its owner and name.
#[derive(Debug, Clone, PartialEq, Eq,)]
pub struct RepositoryTarget
{
    owner: String,
    name:  String,
}

impl RepositoryTarget
{
    /// Parses an `owner/name` string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Usage`] when the input does not contain exactly one
    /// separator or when either side of it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use repo_analyzer::RepositoryTarget;
    ///
    /// let target = RepositoryTarget::parse("octocat/Hello-World",)?;
    /// assert_eq!(target.owner(), "octocat");
    /// assert_eq!(target.name(), "Hello-World");
    /// assert!(RepositoryTarget::parse("invalidformat").is_err());
    /// # Ok::<(), repo_analyzer::Error>(())
    /// ```
    pub fn parse(input: &str,) -> Result<Self, Error,>
    {
        let mut parts = input.trim().split('/',);

        match (parts.next(), parts.next(), parts.next(),) {
            (Some(owner,), Some(name,), None,) if !owner.is_empty() && !name.is_empty() => {
                Ok(Self {
                    owner: owner.to_owned(), name: name.to_owned(),
                },)
            }
            _ => Err(Error::usage(USAGE_MESSAGE,),),
        }
    }

    /// Account or organization that owns the repository.
    pub fn owner(&self,) -> &str
    {
        &self.owner
    }

    /// Repository name.
    pub fn name(&self,) -> &str
    {
        &self.name
    }
}

impl FromStr for RepositoryTarget
{
    type Err = Error;

    fn from_str(input: &str,) -> Result<Self, Self::Err,>
    {
        Self::parse(input,)
    }
}

impl fmt::Display for RepositoryTarget
{
    fn fmt(&self, f: &mut fmt::Formatter<'_,>,) -> fmt::Result
    {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
