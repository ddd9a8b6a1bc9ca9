//! Terminal front end: session loop, effect execution, logging and stored
//! preferences.
mod app;
mod effects;
pub mod logging;
mod persistence;
mod ui;

use std::fs;
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use newscheck_core::Theme;
use newscheck_engine::{ClassifySettings, EngineEvent, EngineHandle};

use crate::cli::{AnalyzeArgs, Cli, Command, ThemeChoice};

pub fn run(cli: Cli) -> Result<ExitCode> {
    let config = app::SessionConfig {
        settings: cli.classify_settings(),
        state_dir: cli.state_dir.clone(),
        color: !cli.no_color && io::stdout().is_terminal(),
    };

    match cli.command {
        None | Some(Command::Interactive) => app::run_interactive(config),
        Some(Command::Analyze(args)) => run_analyze(config, args),
        Some(Command::Theme { choice }) => run_theme(&cli.state_dir, choice),
        Some(Command::Health) => run_health(config.settings),
    }
}

fn run_analyze(config: app::SessionConfig, args: AnalyzeArgs) -> Result<ExitCode> {
    let text = match (args.text, args.text_file) {
        (Some(text), _) => text,
        (None, Some(path)) => fs::read_to_string(&path)
            .with_context(|| format!("reading article text from {}", path.display()))?,
        (None, None) => bail!("either --text or --text-file is required"),
    };
    app::run_analyze(config, &args.title, &text, &args.source)
}

fn run_theme(state_dir: &std::path::Path, choice: Option<ThemeChoice>) -> Result<ExitCode> {
    let current = persistence::load_theme(state_dir);
    let next = match choice {
        None => {
            println!("{current}");
            return Ok(ExitCode::SUCCESS);
        }
        Some(ThemeChoice::Light) => Theme::Light,
        Some(ThemeChoice::Dark) => Theme::Dark,
        Some(ThemeChoice::Toggle) => current.toggled(),
    };
    persistence::save_theme(state_dir, next).context("storing the theme preference")?;
    println!("{next}");
    Ok(ExitCode::SUCCESS)
}

fn run_health(settings: ClassifySettings) -> Result<ExitCode> {
    let wait = settings.request_timeout + Duration::from_secs(5);
    let engine = EngineHandle::new(settings).context("starting the request engine")?;
    engine.check_health();

    match engine.recv_timeout(wait) {
        Some(EngineEvent::HealthChecked { result: Ok(health) }) => {
            println!("status: {}", health.status);
            println!("model:  {}", health.model_status);
            Ok(if health.model_status == "loaded" {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Some(EngineEvent::HealthChecked { result: Err(err) }) => {
            bail!("health check failed: {err}")
        }
        _ => bail!("no answer from the health check within {wait:?}"),
    }
}
