use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use newscheck_engine::{ClassifySettings, DEFAULT_BASE_URL};
use url::Url;

use crate::platform::logging::LogDestination;

#[derive(Debug, Parser)]
#[command(
    name = "newscheck",
    version,
    about = "Ask a fake news classification service about an article"
)]
pub struct Cli {
    /// Root URL of the prediction service.
    #[arg(long, env = "NEWSCHECK_API_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub api_url: Url,

    /// Directory holding the stored preferences.
    #[arg(long, default_value = ".", global = true)]
    pub state_dir: PathBuf,

    /// Whole-request timeout in seconds.
    #[arg(long, default_value_t = 30, global = true)]
    pub timeout_secs: u64,

    /// Where log output goes.
    #[arg(long, value_enum, default_value_t = LogDestination::File, global = true)]
    pub log: LogDestination,

    /// Log at debug level.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    pub fn level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    pub fn classify_settings(&self) -> ClassifySettings {
        ClassifySettings {
            request_timeout: Duration::from_secs(self.timeout_secs),
            ..ClassifySettings::new(self.api_url.clone())
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze one article and print the verdict.
    Analyze(AnalyzeArgs),
    /// Edit and analyze articles in a line-oriented session (the default).
    Interactive,
    /// Show or change the stored color theme.
    Theme {
        #[arg(value_enum)]
        choice: Option<ThemeChoice>,
    },
    /// Ask the service whether it is up and has its model loaded.
    Health,
}

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Article title.
    #[arg(long)]
    pub title: String,

    /// Article body text.
    #[arg(long, required_unless_present = "text_file", conflicts_with = "text_file")]
    pub text: Option<String>,

    /// Read the article body from a file.
    #[arg(long)]
    pub text_file: Option<PathBuf>,

    /// Website or publication name.
    #[arg(long)]
    pub source: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeChoice {
    Light,
    Dark,
    Toggle,
}
