use newscheck_core::{
    is_submittable, missing_requirements, DraftSubmission, Field, Requirement, SOURCE_MAX_CHARS,
    TEXT_MAX_CHARS, TITLE_MAX_CHARS,
};

fn draft(title: &str, text: &str, source: &str) -> DraftSubmission {
    DraftSubmission {
        title: title.to_string(),
        text: text.to_string(),
        source: source.to_string(),
    }
}

#[test]
fn complete_draft_is_submittable() {
    let d = draft(
        "Senate passes budget",
        "The senate passed the budget on Tuesday.",
        "reuters.com",
    );
    assert!(is_submittable(&d));
    assert!(missing_requirements(&d).is_empty());
}

#[test]
fn whitespace_only_fields_count_as_empty() {
    assert!(!is_submittable(&draft("   ", "ten chars!!", "bbc.co.uk")));
    assert!(!is_submittable(&draft("Title", "\t\n  \n", "bbc.co.uk")));
    assert!(!is_submittable(&draft("Title", "ten chars!!", " \t ")));
}

#[test]
fn text_minimum_is_inclusive_after_trimming() {
    // Exactly ten characters once surrounding whitespace is dropped.
    let exact = draft("Title", "   0123456789   ", "source");
    assert!(is_submittable(&exact));

    let short = draft("Title", "   012345678   ", "source");
    assert!(!is_submittable(&short));
    assert_eq!(missing_requirements(&short), vec![Requirement::TextMinimum]);
}

#[test]
fn text_length_counts_characters_not_bytes() {
    // Nine characters, but more than ten bytes.
    let d = draft("Title", "ééééééééé", "source");
    assert!(!is_submittable(&d));

    let d = draft("Title", "éééééééééé", "source");
    assert!(is_submittable(&d));
}

#[test]
fn missing_requirements_follow_form_order() {
    let empty = DraftSubmission::default();
    assert!(!is_submittable(&empty));
    assert_eq!(
        missing_requirements(&empty),
        vec![
            Requirement::Title,
            Requirement::TextMinimum,
            Requirement::Source
        ]
    );
}

#[test]
fn input_boundary_drops_characters_past_ceiling() {
    let long_title = "t".repeat(TITLE_MAX_CHARS + 25);
    let long_text = "x".repeat(TEXT_MAX_CHARS + 1);
    let long_source = "s".repeat(SOURCE_MAX_CHARS * 2);

    let d = DraftSubmission::from_input(&long_title, &long_text, &long_source);
    assert_eq!(d.title.chars().count(), TITLE_MAX_CHARS);
    assert_eq!(d.text.chars().count(), TEXT_MAX_CHARS);
    assert_eq!(d.source.chars().count(), SOURCE_MAX_CHARS);

    let mut d = DraftSubmission::default();
    d.set_field(Field::Title, "short title");
    assert_eq!(d.title, "short title");
}

#[test]
fn validator_does_not_apply_ceilings() {
    // Ceilings belong to the input boundary; an oversized draft still validates.
    let d = draft(
        &"t".repeat(TITLE_MAX_CHARS + 1),
        &"x".repeat(TEXT_MAX_CHARS + 1),
        "source",
    );
    assert!(is_submittable(&d));
}
