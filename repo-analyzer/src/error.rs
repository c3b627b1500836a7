#![allow(non_shorthand_field_patterns)]
#![doc = "Error type shared by the client, the renderer and the analyzer."]
// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! The derive emitted by [`masterror::Error`] expands pattern matches that
//! trigger the `non_shorthand_field_patterns` lint, so the lint is disabled
//! for this module.

/// Unified error type returned by every stage of an analysis run.
///
/// No variant is recovered from internally: the binary prints the display
/// string and exits with status 1.
#[derive(Debug, masterror::Error)]
pub enum Error {
    /// The repository argument is not of the form `owner/name`.
    #[error("{message}")]
    Usage {
        /// Human readable description of the expected input.
        message: String
    },
    /// The API answered with a non-success status code.
    #[error("API Error: {status} - {body}")]
    Api {
        /// Numeric HTTP status code.
        status: u16,
        /// Raw response body text.
        body:   String
    },
    /// The API could not be reached or the client could not be built.
    #[error("transport error: {message}")]
    Transport {
        /// Message reported by the HTTP stack.
        message: String
    },
    /// A successful response did not have the expected shape.
    #[error("failed to decode response from {endpoint}: {message}")]
    Decode {
        /// Endpoint whose body failed to decode.
        endpoint: String,
        /// Underlying decoding failure.
        message:  String
    },
    /// A table row does not have one cell per header.
    #[error("table row has {actual} cells but the table has {expected} columns")]
    RowShape {
        /// Number of headers in the table.
        expected: usize,
        /// Number of cells in the rejected row.
        actual:   usize
    },
    /// The diagnostic subscriber could not be installed.
    #[error("failed to initialize logging: {message}")]
    Logging {
        /// Message reported by the subscriber registry.
        message: String
    },
    /// Writing rendered output failed.
    #[error("failed to write output: {source}")]
    Output {
        /// Underlying I/O error.
        source: std::io::Error
    }
}

impl Error {
    /// Constructs a usage error from the provided message.
    pub fn usage<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Usage {
            message: message.into()
        }
    }

    /// Constructs a transport error from the provided message.
    pub fn transport<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Transport {
            message: message.into()
        }
    }

    /// Constructs a decode error for `endpoint`.
    ///
    /// # Parameters
    ///
    /// * `endpoint` - Relative path of the request whose body was rejected.
    /// * `message` - Description of the decoding failure.
    pub fn decode<E, M>(endpoint: E, message: M) -> Self
    where
        E: Into<String>,
        M: Into<String>
    {
        Self::Decode {
            endpoint: endpoint.into(),
            message:  message.into()
        }
    }

    /// Returns the HTTP status carried by [`Error::Api`], if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api {
                status, ..
            } => Some(*status),
            _ => None
        }
    }

    /// Formats the error for diagnostics without the variant name.
    ///
    /// The returned string matches the [`std::fmt::Display`] implementation.
    pub fn to_display_string(&self) -> String {
        format!("{self}")
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Self::Output {
            source
        }
    }
}

impl From<octocrab::Error> for Error {
    fn from(error: octocrab::Error) -> Self {
        Self::Transport {
            message: error_chain(&error)
        }
    }
}

/// Joins the messages of `error` and every nested source with `": "`.
///
/// Sources whose text is already part of the accumulated message are skipped,
/// so wrappers that embed their cause are not repeated.
pub(crate) fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut current = error.source();

    while let Some(source) = current {
        let text = source.to_string();
        if !text.is_empty() && !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        current = source.source();
    }

    message
}
