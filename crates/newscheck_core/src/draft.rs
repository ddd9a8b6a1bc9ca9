/// Input ceilings, applied when text is admitted into the draft.
pub const TITLE_MAX_CHARS: usize = 500;
pub const TEXT_MAX_CHARS: usize = 10_000;
pub const SOURCE_MAX_CHARS: usize = 200;

/// Minimum trimmed article body length, inclusive.
pub const TEXT_MIN_CHARS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Text,
    Source,
}

impl Field {
    pub fn max_chars(self) -> usize {
        match self {
            Field::Title => TITLE_MAX_CHARS,
            Field::Text => TEXT_MAX_CHARS,
            Field::Source => SOURCE_MAX_CHARS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Text => "text",
            Field::Source => "source",
        }
    }
}

/// The article as the user is currently describing it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DraftSubmission {
    pub title: String,
    pub text: String,
    pub source: String,
}

impl DraftSubmission {
    /// Builds a draft through the input boundary, so ceilings apply.
    pub fn from_input(title: &str, text: &str, source: &str) -> Self {
        let mut draft = Self::default();
        draft.set_field(Field::Title, title);
        draft.set_field(Field::Text, text);
        draft.set_field(Field::Source, source);
        draft
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Text => &self.text,
            Field::Source => &self.source,
        }
    }

    /// Replaces a field, dropping characters beyond the field's ceiling.
    ///
    /// Returns `true` when the stored value changed.
    pub fn set_field(&mut self, field: Field, value: &str) -> bool {
        let admitted = admit(value, field.max_chars());
        let slot = match field {
            Field::Title => &mut self.title,
            Field::Text => &mut self.text,
            Field::Source => &mut self.source,
        };
        if slot.as_str() == admitted {
            return false;
        }
        slot.clear();
        slot.push_str(admitted);
        true
    }

    pub fn is_submittable(&self) -> bool {
        is_submittable(self)
    }
}

fn admit(value: &str, max_chars: usize) -> &str {
    match value.char_indices().nth(max_chars) {
        Some((cut, _)) => &value[..cut],
        None => value,
    }
}

/// Whether the draft may be sent for analysis.
pub fn is_submittable(draft: &DraftSubmission) -> bool {
    !draft.title.trim().is_empty()
        && draft.text.trim().chars().count() >= TEXT_MIN_CHARS
        && !draft.source.trim().is_empty()
}

/// A single unmet submission rule, used to explain a disabled submit action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Title,
    TextMinimum,
    Source,
}

impl Requirement {
    pub fn describe(self) -> &'static str {
        match self {
            Requirement::Title => "a title",
            Requirement::TextMinimum => "article text of at least 10 characters",
            Requirement::Source => "a source",
        }
    }
}

/// Lists the rules the draft does not meet yet, in form order.
pub fn missing_requirements(draft: &DraftSubmission) -> Vec<Requirement> {
    let mut missing = Vec::new();
    if draft.title.trim().is_empty() {
        missing.push(Requirement::Title);
    }
    if draft.text.trim().chars().count() < TEXT_MIN_CHARS {
        missing.push(Requirement::TextMinimum);
    }
    if draft.source.trim().is_empty() {
        missing.push(Requirement::Source);
    }
    missing
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admit_cuts_on_char_boundary() {
        assert_eq!(admit("héllo", 2), "hé");
        assert_eq!(admit("abc", 3), "abc");
        assert_eq!(admit("", 5), "");
    }

    #[test]
    fn set_field_reports_change() {
        let mut draft = DraftSubmission::default();
        assert!(draft.set_field(Field::Source, "bbc.co.uk"));
        assert!(!draft.set_field(Field::Source, "bbc.co.uk"));
        assert_eq!(draft.field(Field::Source), "bbc.co.uk");
    }
}
