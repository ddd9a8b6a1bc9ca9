//! Projection of a prediction into what the result card shows.

use crate::{Label, PredictionResult};

/// Visual class of a verdict or badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
}

/// Yes/No indicator for a boolean article feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub text: &'static str,
    pub tone: Tone,
}

impl Badge {
    /// A raised flag is a warning sign; an absent one is reassuring.
    pub fn flag(raised: bool) -> Self {
        if raised {
            Self {
                text: "Yes",
                tone: Tone::Warning,
            }
        } else {
            Self {
                text: "No",
                tone: Tone::Success,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureBreakdown {
    pub title_length: String,
    pub word_count: String,
    pub text_length: String,
    pub source: String,
    pub sensational_title: Badge,
    pub title_caps: Badge,
}

impl FeatureBreakdown {
    /// Rows in display order as `(caption, value, badge)`.
    pub fn rows(&self) -> [(&'static str, &str, Option<Badge>); 6] {
        [
            ("Title Length", self.title_length.as_str(), None),
            ("Word Count", self.word_count.as_str(), None),
            ("Text Length", self.text_length.as_str(), None),
            ("Source", self.source.as_str(), None),
            (
                "Sensational Title",
                self.sensational_title.text,
                Some(self.sensational_title),
            ),
            ("All Caps Title", self.title_caps.text, Some(self.title_caps)),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayModel {
    pub label: Label,
    pub is_fake: bool,
    pub tone: Tone,
    /// "Fake News" or "Real News".
    pub headline: String,
    pub confidence: String,
    pub confidence_percent: f64,
    /// e.g. "High Confidence (87.3%)".
    pub confidence_line: String,
    pub explanation: String,
    pub features: Option<FeatureBreakdown>,
}

/// Probability as a percentage rounded to one decimal place.
pub fn confidence_percent(probability: f64) -> f64 {
    (probability * 1000.0).round() / 10.0
}

pub fn to_view_model(result: &PredictionResult) -> DisplayModel {
    let is_fake = result.label == Label::Fake;
    let percent = confidence_percent(result.probability);

    let features = result.features.as_ref().map(|features| FeatureBreakdown {
        title_length: format!("{} chars", features.title_length),
        word_count: format!("{} words", features.word_count),
        text_length: format!("{} chars", features.text_length),
        source: features.source.clone(),
        sensational_title: Badge::flag(features.has_sensational_title),
        title_caps: Badge::flag(features.title_has_caps),
    });

    DisplayModel {
        label: result.label,
        is_fake,
        tone: if is_fake { Tone::Warning } else { Tone::Success },
        headline: format!("{} News", result.label),
        confidence: result.confidence.clone(),
        confidence_percent: percent,
        confidence_line: format!("{} Confidence ({:.1}%)", result.confidence, percent),
        explanation: result.explanation.clone(),
        features,
    }
}
