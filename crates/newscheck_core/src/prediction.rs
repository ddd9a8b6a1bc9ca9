use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Real,
    Fake,
}

impl Label {
    pub fn as_str(self) -> &'static str {
        match self {
            Label::Real => "Real",
            Label::Fake => "Fake",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification returned by the prediction service for one draft.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    pub label: Label,
    /// Probability of the predicted label, in `[0, 1]`.
    pub probability: f64,
    pub confidence: String,
    pub explanation: String,
    pub features: Option<ArticleFeatures>,
}

/// Article statistics the service reports alongside a verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleFeatures {
    pub title_length: u64,
    pub word_count: u64,
    pub text_length: u64,
    pub source: String,
    pub has_sensational_title: bool,
    pub title_has_caps: bool,
}
