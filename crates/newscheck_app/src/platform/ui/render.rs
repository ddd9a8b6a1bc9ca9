use std::fmt::Write as _;

use newscheck_core::{
    AppViewModel, DisplayModel, DraftView, Panel, Phase, SOURCE_MAX_CHARS, TEXT_MAX_CHARS,
    TEXT_MIN_CHARS, TITLE_MAX_CHARS,
};

use super::palette::{Palette, Role};

pub const DISCLAIMER: &str = "Disclaimer: This tool uses machine learning to provide predictions \
and should not be the sole basis for determining news authenticity. Always verify information \
from multiple credible sources and use critical thinking.";

const BAR_WIDTH: usize = 20;

/// Renders the interactive screen: the form while it is editable, then the
/// status panel with hints for the next step.
pub fn render(view: &AppViewModel, palette: &Palette) -> String {
    let mut out = String::new();
    if matches!(view.panel, Panel::Gate { .. } | Panel::ErrorBanner { .. }) {
        render_draft(&mut out, &view.draft, palette);
    }
    render_panel(&mut out, &view.panel, view.submit_enabled, palette);
    if view.phase == Phase::Succeeded {
        let _ = writeln!(
            out,
            "{}",
            palette.paint("Type `reset` to analyze another article.", Role::Muted)
        );
    }
    out
}

/// Renders only the status panel, for one-shot output.
pub fn render_report(view: &AppViewModel, palette: &Palette) -> String {
    let mut out = String::new();
    render_panel(&mut out, &view.panel, false, palette);
    out
}

fn render_draft(out: &mut String, draft: &DraftView, palette: &Palette) {
    let _ = writeln!(out, "{}", palette.paint("Article", Role::Heading));
    let _ = writeln!(
        out,
        "  Title:  {} {}",
        preview(&draft.title),
        palette.paint(
            &format!("({}/{} characters)", draft.title_chars, TITLE_MAX_CHARS),
            Role::Muted
        )
    );
    let mut counter = format!("({}/{} characters", draft.text_chars, TEXT_MAX_CHARS);
    if draft.text_below_minimum {
        let _ = write!(counter, ", minimum {TEXT_MIN_CHARS} required");
    }
    counter.push(')');
    let _ = writeln!(
        out,
        "  Text:   {} {}",
        preview(&draft.text),
        palette.paint(&counter, Role::Muted)
    );
    let _ = writeln!(
        out,
        "  Source: {} {}",
        preview(&draft.source),
        palette.paint(
            &format!("({}/{} characters)", draft.source_chars, SOURCE_MAX_CHARS),
            Role::Muted
        )
    );
}

fn render_panel(out: &mut String, panel: &Panel, hints: bool, palette: &Palette) {
    match panel {
        Panel::Gate { missing } if missing.is_empty() => {
            if hints {
                let _ = writeln!(
                    out,
                    "{}",
                    palette.paint("Ready: type `submit` to analyze the article.", Role::Success)
                );
            }
        }
        Panel::Gate { missing } => {
            let needs: Vec<_> = missing.iter().map(|req| req.describe()).collect();
            let _ = writeln!(
                out,
                "{}",
                palette.paint(&format!("Still needed: {}.", needs.join(", ")), Role::Muted)
            );
        }
        Panel::Loading => {
            let _ = writeln!(out, "{}", palette.paint("Analyzing article...", Role::Accent));
        }
        Panel::ErrorBanner { message } => {
            let _ = writeln!(
                out,
                "{} {}",
                palette.paint("Error:", Role::Warning),
                message
            );
            if hints {
                let _ = writeln!(
                    out,
                    "{}",
                    palette.paint("Edit the article and `submit` again, or `reset`.", Role::Muted)
                );
            }
        }
        Panel::Result(display) => render_result(out, display, palette),
    }
}

fn render_result(out: &mut String, display: &DisplayModel, palette: &Palette) {
    let role = Role::from(display.tone);
    let marker = if display.is_fake { "!!" } else { "OK" };
    let _ = writeln!(
        out,
        "{}",
        palette.paint(&format!("[{marker}] {}", display.headline), role)
    );
    let _ = writeln!(out, "     {}", display.confidence_line);
    let _ = writeln!(
        out,
        "     {}",
        palette.paint(&confidence_bar(display.confidence_percent), role)
    );
    let _ = writeln!(out, "     0%{:>w$}50%{:>w$}100%", "", "", w = BAR_WIDTH / 2 - 3);

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", palette.paint("Analysis", Role::Heading));
    let _ = writeln!(out, "  {}", display.explanation);

    if let Some(features) = &display.features {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", palette.paint("Article Features", Role::Heading));
        for (caption, value, badge) in features.rows() {
            let value = match badge {
                Some(badge) => palette.paint(value, Role::from(badge.tone)),
                None => value.to_string(),
            };
            let _ = writeln!(out, "  {:<18} {}", format!("{caption}:"), value);
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", palette.paint(DISCLAIMER, Role::Muted));
}

/// Fixed-width bar; out-of-range percentages are pinned to the ends.
fn confidence_bar(percent: f64) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!(
        "[{}{}] {:.1}%",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        percent
    )
}

fn preview(value: &str) -> String {
    const MAX: usize = 60;
    let flat = value.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.is_empty() {
        return "<empty>".to_string();
    }
    if flat.chars().count() <= MAX {
        return flat;
    }
    let cut: String = flat.chars().take(MAX - 3).collect();
    format!("{cut}...")
}
