//! Runtime configuration for an analysis run.
//!
//! The CLI maps its arguments into an [`AnalyzerConfig`] value. The credential
//! is an explicit optional field: when it is `None` no authorization header is
//! attached to requests at all.

use clap::ValueEnum;

/// Public GitHub REST API root.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Number of commits and contributors requested per run.
pub const DEFAULT_PAGE_SIZE: u8 = 5;

/// Presentation skin used for rendered output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum,)]
pub enum OutputStyle
{
    /// Undecorated text, byte-for-byte stable.
    #[default]
    Plain,
    /// ANSI-colored text with the same layout.
    Styled,
}

/// Settings shared by the client and the analyzer.
///
/// # Examples
///
/// ```
/// use repo_analyzer::{AnalyzerConfig, OutputStyle};
///
/// let config = AnalyzerConfig::default().with_token(Some("ghp_example".to_owned(),),);
/// assert_eq!(config.base_url, "https://api.github.com");
/// assert_eq!(config.page_size, 5);
/// assert_eq!(config.style, OutputStyle::Plain);
/// assert!(config.token.is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq,)]
pub struct AnalyzerConfig
{
    /// API root that relative endpoints are resolved against.
    pub base_url:  String,
    /// Personal access token; `None` means anonymous requests.
    pub token:     Option<String,>,
    /// Page size for the commit and contributor listings.
    pub page_size: u8,
    /// Output skin.
    pub style:     OutputStyle,
}

impl Default for AnalyzerConfig
{
    fn default() -> Self
    {
        Self {
            base_url:  DEFAULT_API_URL.to_owned(),
            token:     None,
            page_size: DEFAULT_PAGE_SIZE,
            style:     OutputStyle::default(),
        }
    }
}

impl AnalyzerConfig
{
    /// Replaces the API root. Trailing slashes are dropped so endpoints can be
    /// appended verbatim.
    pub fn with_base_url<U,>(mut self, base_url: U,) -> Self
    where
        U: Into<String,>,
    {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/',).to_owned();
        self
    }

    /// Sets the credential. Empty or blank tokens are treated as absent.
    pub fn with_token(mut self, token: Option<String,>,) -> Self
    {
        self.token = token.map(|value| value.trim().to_owned(),).filter(|value| !value.is_empty(),);
        self
    }

    /// Sets the output skin.
    pub fn with_style(mut self, style: OutputStyle,) -> Self
    {
        self.style = style;
        self
    }
}
