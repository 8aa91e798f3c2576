//! URL verdict pipeline.
//!
//! The pipeline runs the primary model classifier and falls back to the
//! deterministic lexical scorer whenever the model is unreachable or its
//! reply cannot be parsed. A valid URL therefore always gets a verdict;
//! only an empty input is an error.
//!
//! # Example
//!
//! ```no_run
//! use safeurl::config::Config;
//! use safeurl::verdict::{ChatClassifier, VerdictService};
//!
//! # async fn run() -> Result<(), safeurl::Error> {
//! let config = Config::from_env()?;
//! let classifier = ChatClassifier::new(&config)?;
//! let service = VerdictService::new(Box::new(classifier));
//!
//! let verdict = service.analyze("https://example.com/login").await?;
//! println!("{} ({:.2})", verdict.label, verdict.confidence);
//! # Ok(())
//! # }
//! ```

mod classifier;
pub mod fallback;
mod model;
mod types;

pub use classifier::{build_prompt, Classifier, Prompt};
pub use model::{parse_model_verdict, ChatClassifier, ModelVerdict};
pub use types::{Label, Verdict, VerdictSource};

use crate::features;
use crate::Error;

/// Orchestrates feature extraction, model classification and fallback
/// scoring for one URL at a time.
pub struct VerdictService {
    classifier: Box<dyn Classifier>,
}

impl VerdictService {
    /// Create a service around the given classifier backend.
    pub fn new(classifier: Box<dyn Classifier>) -> Self {
        Self { classifier }
    }

    /// Analyze a URL and produce a verdict.
    ///
    /// Fails only with [`Error::MissingInput`] when the URL is empty.
    /// Classifier-side failures, transport and parse alike, are absorbed
    /// by the fallback scorer.
    pub async fn analyze(&self, raw_url: &str) -> Result<Verdict, Error> {
        if raw_url.is_empty() {
            return Err(Error::MissingInput);
        }

        tracing::info!(url = raw_url, "analyzing URL");
        let features = features::extract(raw_url);
        tracing::debug!(?features, "extracted features");

        let prompt = classifier::build_prompt(raw_url, &features);
        let verdict = match self.classifier.classify(&prompt).await {
            Ok(reply) => {
                tracing::debug!(reply = reply.as_str(), "classifier reply");
                match model::parse_model_verdict(&reply) {
                    Ok(parsed) => Verdict {
                        label: parsed.label,
                        confidence: parsed.confidence,
                        features,
                        explanation: parsed.explanation,
                        source: VerdictSource::Model,
                    },
                    Err(e) => {
                        tracing::warn!(
                            classifier = self.classifier.name(),
                            error = %e,
                            "classifier reply unusable, using lexical fallback"
                        );
                        fallback::score(features)
                    }
                }
            }
            Err(e) => {
                tracing::warn!(
                    classifier = self.classifier.name(),
                    error = %e,
                    "classifier call failed, using lexical fallback"
                );
                fallback::score(features)
            }
        };

        tracing::info!(
            verdict = verdict.label.as_str(),
            confidence = verdict.confidence,
            source = verdict.source.as_str(),
            "analysis complete"
        );
        Ok(verdict)
    }
}
