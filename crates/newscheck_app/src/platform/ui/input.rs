//! Line commands for the interactive session.

use newscheck_core::{Field, Msg};

pub const HELP: &str = "\
Commands:
  title <text>     set the article title
  source <text>    set the source (e.g. nytimes.com, bbc.co.uk)
  text <text>      set the article text on one line
  text             start multi-line text; finish with a line holding only `.`
  submit           analyze the article
  reset            clear the form and any result
  theme            switch between light and dark theme
  show             print the current screen again
  help             show this help
  quit             leave the session";

#[derive(Debug, Clone, PartialEq)]
pub enum InputAction {
    Msg(Msg),
    Show,
    Help,
    Quit,
    /// Nothing to do yet (blank line, or multi-line text in progress).
    Continue,
    Invalid(String),
}

/// Turns input lines into actions, buffering multi-line article text.
#[derive(Debug, Default)]
pub struct InputParser {
    pending_text: Option<Vec<String>>,
}

impl InputParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_multiline(&self) -> bool {
        self.pending_text.is_some()
    }

    pub fn feed(&mut self, line: &str) -> InputAction {
        let line = line.trim_end_matches(['\r', '\n']);

        if let Some(lines) = self.pending_text.as_mut() {
            if line.trim() == "." {
                let text = lines.join("\n");
                self.pending_text = None;
                return edit(Field::Text, text);
            }
            lines.push(line.to_string());
            return InputAction::Continue;
        }

        let trimmed = line.trim_start();
        let (command, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (trimmed.trim_end(), ""),
        };

        match command {
            "" => InputAction::Continue,
            "title" => edit(Field::Title, rest.to_string()),
            "source" => edit(Field::Source, rest.to_string()),
            "text" if rest.is_empty() => {
                self.pending_text = Some(Vec::new());
                InputAction::Continue
            }
            "text" => edit(Field::Text, rest.to_string()),
            "submit" => InputAction::Msg(Msg::SubmitClicked),
            "reset" | "clear" => InputAction::Msg(Msg::ResetClicked),
            "theme" => InputAction::Msg(Msg::ThemeToggled),
            "show" => InputAction::Show,
            "help" | "?" => InputAction::Help,
            "quit" | "exit" => InputAction::Quit,
            other => InputAction::Invalid(format!(
                "unknown command `{other}` (type `help` for a list)"
            )),
        }
    }
}

fn edit(field: Field, value: String) -> InputAction {
    InputAction::Msg(Msg::FieldEdited { field, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line_fields() {
        let mut parser = InputParser::new();
        assert_eq!(
            parser.feed("title   Breaking: markets rally  "),
            edit(Field::Title, "Breaking: markets rally".to_string())
        );
        assert_eq!(
            parser.feed("source bbc.co.uk\n"),
            edit(Field::Source, "bbc.co.uk".to_string())
        );
        assert_eq!(
            parser.feed("text Stocks rose sharply on Monday."),
            edit(Field::Text, "Stocks rose sharply on Monday.".to_string())
        );
    }

    #[test]
    fn multiline_text_ends_at_dot() {
        let mut parser = InputParser::new();
        assert_eq!(parser.feed("text"), InputAction::Continue);
        assert!(parser.in_multiline());
        assert_eq!(parser.feed("First paragraph."), InputAction::Continue);
        assert_eq!(parser.feed(""), InputAction::Continue);
        assert_eq!(parser.feed("submit"), InputAction::Continue);
        assert_eq!(
            parser.feed("."),
            edit(Field::Text, "First paragraph.\n\nsubmit".to_string())
        );
        assert!(!parser.in_multiline());
        assert_eq!(parser.feed("submit"), InputAction::Msg(Msg::SubmitClicked));
    }

    #[test]
    fn control_commands() {
        let mut parser = InputParser::new();
        assert_eq!(parser.feed("reset"), InputAction::Msg(Msg::ResetClicked));
        assert_eq!(parser.feed("clear"), InputAction::Msg(Msg::ResetClicked));
        assert_eq!(parser.feed("theme"), InputAction::Msg(Msg::ThemeToggled));
        assert_eq!(parser.feed("  show "), InputAction::Show);
        assert_eq!(parser.feed("help"), InputAction::Help);
        assert_eq!(parser.feed("quit"), InputAction::Quit);
        assert_eq!(parser.feed("   "), InputAction::Continue);
        assert!(matches!(parser.feed("analyze"), InputAction::Invalid(_)));
    }

    #[test]
    fn bare_field_command_clears_it() {
        let mut parser = InputParser::new();
        assert_eq!(parser.feed("source"), edit(Field::Source, String::new()));
    }
}
