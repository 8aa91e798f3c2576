//! Deterministic lexical fallback scorer.
//!
//! Used whenever the model backend is unreachable or returns output that
//! cannot be parsed. Scoring is additive over independent risk signals, so
//! the raw score can reach 1.2; the confidence cap keeps the reported value
//! below certainty.

use crate::features::LexicalFeatures;

use super::types::{Label, Verdict, VerdictSource};

/// Maximum confidence the heuristic will ever report.
const CONFIDENCE_CAP: f32 = 0.95;

/// Score features into a verdict, deterministically.
///
/// A URL is `scam` iff the raw risk score exceeds 0.5; a score of exactly
/// 0.5 stays `safe`.
pub fn score(features: LexicalFeatures) -> Verdict {
    let mut risk: f32 = 0.0;

    if features.url_length > 75 {
        risk += 0.2;
    }
    if features.special_char_count > 10 {
        risk += 0.2;
    }
    if !features.has_https {
        risk += 0.3;
    }
    if features.subdomain_count > 2 {
        risk += 0.2;
    }
    if !features.suspicious_keywords.is_empty() {
        risk += 0.3;
    }

    let label = if risk > 0.5 { Label::Scam } else { Label::Safe };
    let confidence = match label {
        Label::Scam => risk,
        Label::Safe => 1.0 - risk,
    }
    .min(CONFIDENCE_CAP);

    let explanation = format!(
        "Based on lexical analysis: {} suspicious keywords, {}HTTPS, {} subdomains. \
This URL appears {}.",
        features.suspicious_keywords.len(),
        if features.has_https { "" } else { "no " },
        features.subdomain_count,
        match label {
            Label::Safe => "legitimate",
            Label::Scam => "suspicious",
        },
    );

    Verdict {
        label,
        confidence,
        features,
        explanation,
        source: VerdictSource::Fallback,
    }
}
