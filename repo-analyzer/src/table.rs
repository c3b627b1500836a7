// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Aligned, bordered text tables.
//!
//! A [`Table`] owns a fixed header row and an ordered list of data rows. Every
//! cell is stringified through [`Display`](fmt::Display) when the row is
//! added, and the width of each column tracks the longest printable value seen
//! so far, header included. Rendering is pure: identical input always yields
//! identical text.

use std::fmt;

use crate::error::Error;

/// Text table with left-justified columns.
///
/// # Examples
///
/// ```
/// use repo_analyzer::Table;
///
/// let mut table = Table::new(["Metric", "Value",],);
/// table.add_row(&[&"Stars", &42,],)?;
/// assert_eq!(
///     table.render(),
///     "+--------+-------+\n\
///      | Metric | Value |\n\
///      +--------+-------+\n\
///      | Stars  | 42    |\n\
///      +--------+-------+"
/// );
/// # Ok::<(), repo_analyzer::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq,)]
pub struct Table
{
    headers: Vec<String,>,
    rows:    Vec<Vec<String,>,>,
    widths:  Vec<usize,>,
}

impl Table
{
    /// Creates an empty table with the provided column headers.
    pub fn new<I, H,>(headers: I,) -> Self
    where
        I: IntoIterator<Item = H,>,
        H: Into<String,>,
    {
        let headers: Vec<String,> = headers.into_iter().map(Into::into,).collect();
        let widths = headers.iter().map(|header| display_width(header,),).collect();

        Self {
            headers,
            rows: Vec::new(),
            widths,
        }
    }

    /// Appends one row and widens columns that the new cells overflow.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RowShape`] when the row does not have exactly one value
    /// per header. The table is left untouched in that case.
    pub fn add_row(&mut self, values: &[&dyn fmt::Display],) -> Result<(), Error,>
    {
        if values.len() != self.headers.len() {
            return Err(Error::RowShape {
                expected: self.headers.len(), actual: values.len(),
            },);
        }

        let cells: Vec<String,> = values.iter().map(|value| value.to_string(),).collect();
        for (width, cell,) in self.widths.iter_mut().zip(&cells,) {
            *width = (*width).max(display_width(cell,),);
        }
        self.rows.push(cells,);

        Ok((),)
    }

    /// Column headers in display order.
    pub fn headers(&self,) -> &[String]
    {
        &self.headers
    }

    /// Data rows in insertion order.
    pub fn rows(&self,) -> &[Vec<String,>]
    {
        &self.rows
    }

    /// Current width of every column.
    pub fn widths(&self,) -> &[usize]
    {
        &self.widths
    }

    /// Returns `true` when no data row has been added.
    pub fn is_empty(&self,) -> bool
    {
        self.rows.is_empty()
    }

    /// Renders the table as plain text without a trailing newline.
    pub fn render(&self,) -> String
    {
        let border = self.border();
        let mut lines = Vec::with_capacity(self.rows.len() + 4,);

        lines.push(border.clone(),);
        lines.push(self.content_line(&self.headers,),);
        lines.push(border.clone(),);
        for row in &self.rows {
            lines.push(self.content_line(row,),);
        }
        lines.push(border,);

        lines.join("\n",)
    }

    /// Border line, e.g. `+-------+----+`.
    pub(crate) fn border(&self,) -> String
    {
        let mut line = String::from("+",);
        for width in &self.widths {
            line.push_str(&"-".repeat(width + 2,),);
            line.push('+',);
        }
        line
    }

    /// Content line for `cells`, each padded to its column width. Cells
    /// beyond the last column are ignored.
    pub(crate) fn content_line(&self, cells: &[String],) -> String
    {
        let mut line = String::from("|",);
        for (cell, width,) in cells.iter().zip(&self.widths,) {
            line.push(' ',);
            line.push_str(&pad(cell, *width,),);
            line.push_str(" |",);
        }
        line
    }
}

impl fmt::Display for Table
{
    fn fmt(&self, f: &mut fmt::Formatter<'_,>,) -> fmt::Result
    {
        f.write_str(&self.render(),)
    }
}

/// Number of printable characters in `value`.
pub fn display_width(value: &str,) -> usize
{
    value.chars().count()
}

/// Left-justifies `value` to `width` printable characters.
pub fn pad(value: &str, width: usize,) -> String
{
    format!("{value:<width$}")
}
