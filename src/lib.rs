//! safeurl - AI-assisted phishing URL analysis
//!
//! Classifies a submitted URL as `safe` or `scam` using lexical features
//! and an external chat-completion model, with a deterministic heuristic
//! fallback when the model is unavailable or unparsable.
//!
//! # Architecture
//!
//! 1. Feature extraction (pure, never fails): length, character
//!    composition, protocol, subdomain depth, suspicious keywords
//! 2. Model classification: the features and URL are sent to a
//!    chat-completion endpoint asking for a strict-JSON verdict
//! 3. Lexical fallback: an additive risk score over the same features,
//!    used whenever step 2 fails in any way
//!
//! # Example
//!
//! ```
//! use safeurl::features;
//! use safeurl::verdict::fallback;
//!
//! let feats = features::extract("http://login.example.com");
//! let verdict = fallback::score(feats);
//!
//! println!("{} ({:.2})", verdict.label, verdict.confidence);
//! println!("{}", verdict.explanation);
//! ```

pub use error::Error;

// Injected runtime configuration
pub mod config;

// Lexical feature extraction
pub mod features;

// HTTP endpoint
pub mod server;

// Classification pipeline
pub mod verdict;

mod error {
    use std::fmt;

    /// Errors surfaced by the analysis pipeline.
    ///
    /// Only `MissingInput` and `Configuration` ever cross the service
    /// boundary; `Transport` and `Parse` are absorbed by the lexical
    /// fallback scorer.
    #[derive(Debug)]
    pub enum Error {
        /// The request carried no URL
        MissingInput,
        /// Required configuration is absent or unusable
        Configuration(String),
        /// The classifier endpoint was unreachable or answered abnormally
        Transport(String),
        /// The classifier reply held no usable verdict
        Parse(String),
    }

    impl fmt::Display for Error {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Error::MissingInput => write!(f, "URL is required"),
                Error::Configuration(e) => write!(f, "Configuration error: {}", e),
                Error::Transport(e) => write!(f, "Transport error: {}", e),
                Error::Parse(e) => write!(f, "Parse error: {}", e),
            }
        }
    }

    impl std::error::Error for Error {}

    impl From<reqwest::Error> for Error {
        fn from(e: reqwest::Error) -> Self {
            Error::Transport(e.to_string())
        }
    }
}
