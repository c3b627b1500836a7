// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Fetch-then-render pipeline for one repository.
//!
//! Stages run strictly in order and share [`Error`]; the first failure stops
//! the run. Each section is written and flushed as soon as its table is built,
//! so sections printed before a failure stay on the output.

use std::io::Write;

use tracing::info;

use crate::{
    client::{
        ResourceClient, commits_endpoint, contributors_endpoint, languages_endpoint,
        repository_endpoint,
    },
    config::AnalyzerConfig,
    error::Error,
    models::{CommitEntry, Contributor, LanguageBreakdown, RepositoryMetadata, format_percentage},
    render::{Renderer, renderer_for},
    table::Table,
    target::RepositoryTarget,
};

/// Label of the metadata section.
pub const METADATA_TITLE: &str = "Repository Information";
/// Label of the language section.
pub const LANGUAGES_TITLE: &str = "Language Statistics";
/// Label of the commit section.
pub const COMMITS_TITLE: &str = "Recent Commits";
/// Label of the contributor section.
pub const CONTRIBUTORS_TITLE: &str = "Top Contributors";

/// Parses `input`, then fetches and prints every section for that repository.
///
/// The target is validated before the client is created, so a malformed
/// argument never reaches the network.
///
/// # Errors
///
/// Returns the first [`Error`] raised by any stage.
///
/// # Example
///
/// ```no_run
/// use repo_analyzer::{AnalyzerConfig, analyze};
///
/// # async fn example() -> Result<(), repo_analyzer::Error> {
/// let config = AnalyzerConfig::default();
/// let mut stdout = std::io::stdout().lock();
/// analyze(&config, "octocat/Hello-World", &mut stdout,).await?;
/// # Ok(())
/// # }
/// ```
pub async fn analyze<W,>(config: &AnalyzerConfig, input: &str, out: &mut W,) -> Result<(), Error,>
where
    W: Write,
{
    let target = RepositoryTarget::parse(input,)?;
    let client = ResourceClient::new(config,)?;
    let renderer = renderer_for(config.style,);

    Analyzer::new(&client, renderer.as_ref(), out, config.page_size,).run(&target,).await
}

/// Runs the stages against one client, renderer and output stream.
pub struct Analyzer<'a, W,>
{
    client:    &'a ResourceClient,
    renderer:  &'a dyn Renderer,
    out:       &'a mut W,
    page_size: u8,
}

impl<'a, W,> Analyzer<'a, W,>
where
    W: Write,
{
    /// Creates an analyzer writing to `out`.
    pub fn new(
        client: &'a ResourceClient,
        renderer: &'a dyn Renderer,
        out: &'a mut W,
        page_size: u8,
    ) -> Self
    {
        Self {
            client,
            renderer,
            out,
            page_size,
        }
    }

    /// Executes the metadata, language, commit and contributor stages.
    ///
    /// # Errors
    ///
    /// Returns the first [`Error`] raised by a fetch, a table or a write.
    pub async fn run(&mut self, target: &RepositoryTarget,) -> Result<(), Error,>
    {
        info!(%target, "analyzing repository");

        let metadata: RepositoryMetadata =
            self.client.fetch_as(&repository_endpoint(target,),).await?;
        self.write_banner(target,)?;
        self.write_section(METADATA_TITLE, &metadata_table(&metadata,)?,)?;

        let languages: LanguageBreakdown =
            self.client.fetch_as(&languages_endpoint(target,),).await?;
        match language_table(&languages,)? {
            Some(table,) => self.write_section(LANGUAGES_TITLE, &table,)?,
            None => info!(%target, "no language statistics reported"),
        }

        let commits: Vec<CommitEntry,> =
            self.client.fetch_as(&commits_endpoint(target, self.page_size,),).await?;
        self.write_section(COMMITS_TITLE, &commits_table(&commits,)?,)?;

        let contributors: Vec<Contributor,> =
            self.client.fetch_as(&contributors_endpoint(target, self.page_size,),).await?;
        self.write_section(CONTRIBUTORS_TITLE, &contributors_table(&contributors,)?,)?;

        info!(%target, "analysis complete");
        Ok((),)
    }

    fn write_banner(&mut self, target: &RepositoryTarget,) -> Result<(), Error,>
    {
        write!(self.out, "\n{}\n", self.renderer.banner(target,))?;
        self.out.flush()?;
        Ok((),)
    }

    fn write_section(&mut self, title: &str, table: &Table,) -> Result<(), Error,>
    {
        info!(section = title, rows = table.rows().len(), "rendering section");
        write!(
            self.out,
            "\n{}\n{}\n",
            self.renderer.section_title(title,),
            self.renderer.render_table(table,)
        )?;
        self.out.flush()?;
        Ok((),)
    }
}

/// Metric/Value table with the six fixed metadata rows.
///
/// # Errors
///
/// Never fails for well-formed input; row shape errors are propagated.
pub fn metadata_table(metadata: &RepositoryMetadata,) -> Result<Table, Error,>
{
    let created = metadata.created_at.date_naive();
    let updated = metadata.updated_at.date_naive();

    let mut table = Table::new(["Metric", "Value",],);
    table.add_row(&[&"Description", &metadata.description_text(),],)?;
    table.add_row(&[&"Stars", &metadata.stargazers_count,],)?;
    table.add_row(&[&"Forks", &metadata.forks_count,],)?;
    table.add_row(&[&"Open Issues", &metadata.open_issues_count,],)?;
    table.add_row(&[&"Created", &created,],)?;
    table.add_row(&[&"Last Updated", &updated,],)?;
    Ok(table,)
}

/// Language/Bytes/Percentage table sorted by bytes, or `None` when the
/// repository reports no languages.
pub fn language_table(languages: &LanguageBreakdown,) -> Result<Option<Table,>, Error,>
{
    if languages.is_empty() {
        return Ok(None,);
    }

    let mut table = Table::new(["Language", "Bytes", "Percentage",],);
    for share in languages.sorted_by_bytes() {
        let percentage = format_percentage(languages.percentage(share.bytes,),);
        table.add_row(&[&share.language, &share.bytes, &percentage,],)?;
    }
    Ok(Some(table,),)
}

/// Date/Author/Message table in API order.
pub fn commits_table(commits: &[CommitEntry],) -> Result<Table, Error,>
{
    let mut table = Table::new(["Date", "Author", "Message",],);
    for entry in commits {
        let date = entry.commit.author.date.date_naive();
        table.add_row(&[&date, &entry.commit.author.name, &entry.summary(),],)?;
    }
    Ok(table,)
}

/// Username/Contributions table in API order.
pub fn contributors_table(contributors: &[Contributor],) -> Result<Table, Error,>
{
    let mut table = Table::new(["Username", "Contributions",],);
    for contributor in contributors {
        table.add_row(&[&contributor.login, &contributor.contributions,],)?;
    }
    Ok(table,)
}
