// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Presentation skins for analysis output.
//!
//! Both renderers share the layout produced by [`Table`]; the styled skin only
//! wraps already padded text in ANSI sequences, so removing the escapes from
//! its output gives back the plain rendering.

use colored::Colorize;

use crate::{
    config::OutputStyle,
    table::{Table, pad},
    target::RepositoryTarget,
};

/// Width of the rule printed under the analysis banner.
pub const BANNER_RULE_WIDTH: usize = 50;

/// Turns tables and section labels into text ready for the terminal.
pub trait Renderer
{
    /// Renders a complete table without a trailing newline.
    fn render_table(&self, table: &Table,) -> String;

    /// Renders the label printed above a table, e.g. `Recent Commits:`.
    fn section_title(&self, title: &str,) -> String;

    /// Renders the two-line banner naming the analyzed repository.
    fn banner(&self, target: &RepositoryTarget,) -> String;
}

/// Returns the renderer implementing `style`.
pub fn renderer_for(style: OutputStyle,) -> Box<dyn Renderer,>
{
    match style {
        OutputStyle::Plain => Box::new(PlainRenderer,),
        OutputStyle::Styled => Box::new(StyledRenderer,),
    }
}

/// Undecorated text output.
#[derive(Debug, Clone, Copy, Default,)]
pub struct PlainRenderer;

impl Renderer for PlainRenderer
{
    fn render_table(&self, table: &Table,) -> String
    {
        table.render()
    }

    fn section_title(&self, title: &str,) -> String
    {
        format!("{title}:")
    }

    fn banner(&self, target: &RepositoryTarget,) -> String
    {
        format!("Analyzing repository: {target}\n{}", "=".repeat(BANNER_RULE_WIDTH,))
    }
}

/// ANSI-decorated output: dimmed borders, bold headers and titles.
#[derive(Debug, Clone, Copy, Default,)]
pub struct StyledRenderer;

impl StyledRenderer
{
    fn content_line(table: &Table, cells: &[String], header: bool,) -> String
    {
        let mut line = "|".dimmed().to_string();
        for (cell, width,) in cells.iter().zip(table.widths(),) {
            let padded = pad(cell, *width,);
            let styled = if header { padded.bold().cyan() } else { padded.normal() };
            line.push_str(&format!(" {styled} {}", "|".dimmed()),);
        }
        line
    }
}

impl Renderer for StyledRenderer
{
    fn render_table(&self, table: &Table,) -> String
    {
        let border = table.border().dimmed().to_string();
        let mut lines = Vec::with_capacity(table.rows().len() + 4,);

        lines.push(border.clone(),);
        lines.push(Self::content_line(table, table.headers(), true,),);
        lines.push(border.clone(),);
        for row in table.rows() {
            lines.push(Self::content_line(table, row, false,),);
        }
        lines.push(border,);

        lines.join("\n",)
    }

    fn section_title(&self, title: &str,) -> String
    {
        format!("{title}:").bold().to_string()
    }

    fn banner(&self, target: &RepositoryTarget,) -> String
    {
        format!(
            "{} {}\n{}",
            "Analyzing repository:".bold(),
            target.to_string().green(),
            "=".repeat(BANNER_RULE_WIDTH,).dimmed()
        )
    }
}
