// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! GET access to the repository endpoints of a GitHub-compatible REST API.
//!
//! Every call is a single attempt: the transport's automatic retries are
//! switched off and non-success responses are surfaced as [`Error::Api`] with
//! the raw body text.

use http::header::ACCEPT;
use octocrab::{Octocrab, service::middleware::retry::RetryConfig};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::{config::AnalyzerConfig, error::Error, target::RepositoryTarget};

/// Media type requested for every response.
pub const ACCEPT_MEDIA_TYPE: &str = "application/vnd.github.v3+json";

/// Thin wrapper around an [`Octocrab`] instance bound to one API root.
#[derive(Clone,)]
pub struct ResourceClient
{
    octocrab: Octocrab,
}

impl ResourceClient
{
    /// Builds a client for `config.base_url`.
    ///
    /// The authorization header is only configured when `config.token` is
    /// present; anonymous clients send none.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] when the base URL cannot be parsed or the
    /// HTTP stack fails to initialize.
    pub fn new(config: &AnalyzerConfig,) -> Result<Self, Error,>
    {
        let mut builder = Octocrab::builder()
            .base_uri(config.base_url.as_str(),)?
            .add_header(ACCEPT, ACCEPT_MEDIA_TYPE.to_owned(),)
            .add_retry_config(RetryConfig::None,);

        if let Some(token,) = &config.token {
            builder = builder.personal_token(token.clone(),);
        }

        let octocrab = builder.build()?;
        debug!(
            base_url = %config.base_url,
            authenticated = config.token.is_some(),
            "initialized API client"
        );

        Ok(Self {
            octocrab,
        },)
    }

    /// Issues `GET {base_url}{endpoint}` and returns the decoded JSON body.
    ///
    /// # Errors
    ///
    /// * [`Error::Transport`] when the request cannot be sent or the body
    ///   cannot be read.
    /// * [`Error::Api`] for any non-2xx status, carrying the raw body.
    /// * [`Error::Decode`] when a successful body is not valid JSON.
    pub async fn fetch(&self, endpoint: &str,) -> Result<Value, Error,>
    {
        debug!(endpoint, "GET");

        let response = self.octocrab._get(endpoint,).await?;
        let status = response.status();
        let body = self.octocrab.body_to_string(response,).await?;

        if !status.is_success() {
            debug!(endpoint, status = status.as_u16(), "request rejected");
            return Err(Error::Api {
                status: status.as_u16(), body,
            },);
        }

        serde_json::from_str(&body,).map_err(|e| Error::decode(endpoint, e.to_string(),),)
    }

    /// Fetches `endpoint` and decodes it into `T`.
    ///
    /// # Errors
    ///
    /// Propagates [`fetch`](Self::fetch) errors and returns [`Error::Decode`]
    /// when the JSON does not match `T`.
    pub async fn fetch_as<T,>(&self, endpoint: &str,) -> Result<T, Error,>
    where
        T: DeserializeOwned,
    {
        let value = self.fetch(endpoint,).await?;
        serde_json::from_value(value,).map_err(|e| Error::decode(endpoint, e.to_string(),),)
    }
}

/// Path of the repository metadata resource.
pub fn repository_endpoint(target: &RepositoryTarget,) -> String
{
    format!("/repos/{}/{}", target.owner(), target.name())
}

/// Path of the language breakdown resource.
pub fn languages_endpoint(target: &RepositoryTarget,) -> String
{
    format!("{}/languages", repository_endpoint(target,))
}

/// Path of the most recent commits, limited to `per_page` entries.
pub fn commits_endpoint(target: &RepositoryTarget, per_page: u8,) -> String
{
    format!("{}/commits?per_page={per_page}", repository_endpoint(target,))
}

/// Path of the top contributors, limited to `per_page` entries.
pub fn contributors_endpoint(target: &RepositoryTarget, per_page: u8,) -> String
{
    format!("{}/contributors?per_page={per_page}", repository_endpoint(target,))
}
