use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use newscheck_core::{update, AppState, AppViewModel, Field, Msg, Phase};
use newscheck_engine::ClassifySettings;
use newscheck_logging::{nc_info, nc_warn};

use super::effects::EffectRunner;
use super::persistence;
use super::ui::input::{InputAction, InputParser, HELP};
use super::ui::palette::Palette;
use super::ui::render::{render, render_report};

/// Everything the session loop reacts to, in arrival order.
pub enum AppEvent {
    Line(String),
    InputClosed,
    Msg(Msg),
}

pub struct SessionConfig {
    pub settings: ClassifySettings,
    pub state_dir: PathBuf,
    pub color: bool,
}

struct App<W: Write> {
    state: AppState,
    effects: EffectRunner,
    out: W,
    color: bool,
    render_on_change: bool,
}

impl<W: Write> App<W> {
    /// Loads the stored theme and starts the engine; completions arrive on
    /// the channel behind `event_tx`.
    fn start(config: SessionConfig, out: W, event_tx: mpsc::Sender<AppEvent>) -> Result<Self> {
        let theme = persistence::load_theme(&config.state_dir);
        nc_info!("Session starting with theme {}", theme);

        let effects = EffectRunner::new(config.settings, config.state_dir, event_tx)
            .context("starting the request engine")?;
        Ok(Self {
            state: AppState::new(theme),
            effects,
            out,
            color: config.color,
            render_on_change: true,
        })
    }

    fn dispatch(&mut self, msg: Msg) -> io::Result<()> {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let view = state.view();
        let was_dirty = state.consume_dirty();
        self.state = state;

        self.effects.run(effects);
        if was_dirty && self.render_on_change {
            self.render(&view)?;
        }
        Ok(())
    }

    fn render(&mut self, view: &AppViewModel) -> io::Result<()> {
        let palette = Palette::for_theme(view.theme, self.color);
        writeln!(self.out)?;
        write!(self.out, "{}", render(view, &palette))?;
        self.out.flush()
    }

    fn show(&mut self) -> io::Result<()> {
        let view = self.state.view();
        self.render(&view)
    }
}

/// Line-oriented session: reads commands from stdin until `quit` or EOF.
pub fn run_interactive(config: SessionConfig) -> Result<ExitCode> {
    let (event_tx, event_rx) = mpsc::channel();
    let mut app = App::start(config, io::stdout(), event_tx.clone())?;
    spawn_stdin_reader(event_tx);

    writeln!(app.out, "newscheck: type `help` for commands.")?;
    app.show()?;

    let mut parser = InputParser::new();
    let mut input_closed = false;
    while let Ok(event) = event_rx.recv() {
        match event {
            AppEvent::Msg(msg) => app.dispatch(msg)?,
            AppEvent::InputClosed => {
                input_closed = true;
                if parser.in_multiline() {
                    nc_warn!("Input ended inside multi-line text; it was not applied");
                }
            }
            AppEvent::Line(line) => match parser.feed(&line) {
                InputAction::Msg(msg) => {
                    let locked = matches!(msg, Msg::FieldEdited { .. })
                        && app.state.phase() == Phase::Submitting;
                    let theme_change = matches!(msg, Msg::ThemeToggled);
                    app.dispatch(msg)?;
                    if locked {
                        writeln!(app.out, "Inputs are locked while the article is analyzed.")?;
                    }
                    if theme_change {
                        writeln!(app.out, "Theme: {}", app.state.theme())?;
                    }
                }
                InputAction::Show => app.show()?,
                InputAction::Help => writeln!(app.out, "{HELP}")?,
                InputAction::Quit => break,
                InputAction::Continue => {}
                InputAction::Invalid(message) => writeln!(app.out, "{message}")?,
            },
        }

        // Piped input may end before the last answer arrives.
        if input_closed && app.state.phase() != Phase::Submitting {
            break;
        }
    }

    nc_info!("Session finished");
    Ok(ExitCode::SUCCESS)
}

/// Submits one article and prints the verdict or the error.
///
/// Exit status: 0 on a verdict, 1 on a failed analysis, 2 when the article
/// does not meet the submission rules.
pub fn run_analyze(
    config: SessionConfig,
    title: &str,
    text: &str,
    source: &str,
) -> Result<ExitCode> {
    let wait = config.settings.request_timeout + Duration::from_secs(5);
    let (event_tx, event_rx) = mpsc::channel();
    let mut app = App::start(config, io::stdout(), event_tx)?;
    app.render_on_change = false;

    let fields = [
        (Field::Title, title),
        (Field::Text, text),
        (Field::Source, source),
    ];
    for (field, value) in fields {
        if value.chars().count() > field.max_chars() {
            nc_warn!(
                "{} exceeds {} characters and was shortened",
                field.name(),
                field.max_chars()
            );
            eprintln!(
                "Note: the {} is limited to {} characters; the rest was dropped.",
                field.name(),
                field.max_chars()
            );
        }
        app.dispatch(Msg::FieldEdited {
            field,
            value: value.to_string(),
        })?;
    }

    if !app.state.draft().is_submittable() {
        app.show()?;
        return Ok(ExitCode::from(2));
    }

    app.dispatch(Msg::SubmitClicked)?;
    while app.state.phase() == Phase::Submitting {
        match event_rx.recv_timeout(wait) {
            Ok(AppEvent::Msg(msg)) => app.dispatch(msg)?,
            Ok(_) => {}
            Err(_) => bail!("no answer from the prediction service within {wait:?}"),
        }
    }

    let view = app.state.view();
    let palette = Palette::for_theme(view.theme, app.color);
    write!(app.out, "{}", render_report(&view, &palette))?;
    app.out.flush()?;

    Ok(match view.phase {
        Phase::Succeeded => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    })
}

fn spawn_stdin_reader(event_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if event_tx.send(AppEvent::Line(line)).is_err() {
                        return;
                    }
                }
                Err(err) => {
                    nc_warn!("Failed to read stdin: {}", err);
                    break;
                }
            }
        }
        let _ = event_tx.send(AppEvent::InputClosed);
    });
}
