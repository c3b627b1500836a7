//! Command-line interface for the repository analyzer.
//!
//! The binary takes one `owner/name` argument, queries the API and prints the
//! metadata, language, commit and contributor tables to standard output.

use std::{io, process};

use clap::{ArgAction, Parser};
use repo_analyzer::{AnalyzerConfig, DEFAULT_API_URL, Error, OutputStyle, analyze, logging};

/// Analyze GitHub repositories and display detailed statistics.
#[derive(Debug, Parser,)]
#[command(name = "repo-analyzer", version, about)]
struct Cli
{
    /// Repository in format: owner/name
    repo: String,

    /// GitHub API token (optional)
    #[arg(long = "token", value_name = "TOKEN")]
    token: Option<String,>,

    /// Root URL of the REST API.
    #[arg(long = "api-url", value_name = "URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Output skin.
    #[arg(long = "style", value_enum, default_value_t = OutputStyle::Plain)]
    style: OutputStyle,

    /// Increase diagnostic output on stderr (repeatable).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

impl Cli
{
    fn config(&self,) -> AnalyzerConfig
    {
        AnalyzerConfig::default()
            .with_base_url(self.api_url.as_str(),)
            .with_token(self.token.clone(),)
            .with_style(self.style,)
    }
}

/// Entry point that reports errors and sets the appropriate exit status.
#[tokio::main(flavor = "current_thread")]
async fn main()
{
    let cli = Cli::parse();

    if let Err(error,) = logging::init(cli.verbose,) {
        eprintln!("{}", error.to_display_string());
    }

    if let Err(error,) = run(&cli,).await {
        eprintln!("Error: {}", error.to_display_string());
        process::exit(1,);
    }
}

/// Runs the analysis for the parsed arguments.
///
/// # Errors
///
/// Propagates the first error raised while parsing the target, fetching or
/// writing output.
async fn run(cli: &Cli,) -> Result<(), Error,>
{
    let config = cli.config();
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    analyze(&config, &cli.repo, &mut handle,).await
}
