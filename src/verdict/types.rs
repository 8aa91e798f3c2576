//! Core types for the verdict pipeline.

use std::fmt;

use serde::Serialize;

use crate::features::LexicalFeatures;

/// The classification label for an analyzed URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Safe,
    Scam,
}

impl Label {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Safe => "safe",
            Label::Scam => "scam",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "safe" => Some(Label::Safe),
            "scam" => Some(Label::Scam),
            _ => None,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Source of the verdict decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerdictSource {
    /// The external model classified the URL
    Model,
    /// The deterministic lexical scorer classified the URL
    Fallback,
}

impl VerdictSource {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            VerdictSource::Model => "model",
            VerdictSource::Fallback => "fallback",
        }
    }
}

/// Verdict for one analyzed URL.
///
/// Serializes to the wire shape
/// `{verdict, confidence, features, explanation}`; the source is kept for
/// logging only.
#[derive(Debug, Clone, Serialize)]
pub struct Verdict {
    /// The classification label
    #[serde(rename = "verdict")]
    pub label: Label,
    /// Confidence score (0.0 to 1.0)
    pub confidence: f32,
    /// The lexical features the decision was based on
    pub features: LexicalFeatures,
    /// Human-readable rationale
    pub explanation: String,
    /// Which side of the pipeline decided
    #[serde(skip)]
    pub source: VerdictSource,
}
