//! Classifier trait and prompt construction.

use async_trait::async_trait;

use crate::features::LexicalFeatures;
use crate::Error;

/// System and user messages for a classification request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    /// Fixed instruction describing the lexical signals
    pub system: String,
    /// The URL and its computed features
    pub user: String,
}

/// A classification backend for the verdict pipeline.
///
/// Implementations return the model's raw textual output; parsing and
/// validation happen in the service so that any backend failure, transport
/// or content, can be absorbed by the deterministic fallback.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// The name of this classifier (for logging).
    fn name(&self) -> &'static str;

    /// Classify the prompt, returning the raw response text.
    ///
    /// Fails with [`Error::Transport`] when the backend is unreachable or
    /// answers with a non-success status.
    async fn classify(&self, prompt: &Prompt) -> Result<String, Error>;
}

/// Build the classification prompt for a URL and its features.
pub fn build_prompt(raw_url: &str, features: &LexicalFeatures) -> Prompt {
    let system = "You are a cybersecurity expert specializing in phishing URL detection. \
Analyze the provided URL and its lexical features to determine if it's a phishing attempt.

Lexical features to consider:
1. URL length (longer URLs are often suspicious)
2. Number of special characters (high count suggests obfuscation)
3. HTTPS protocol presence (lack of HTTPS is a red flag)
4. Number of subdomains (excessive subdomains are suspicious)
5. Presence of suspicious keywords (login, secure, verify, update, account, etc.)

Provide a classification and confidence score based on these features."
        .to_string();

    let keywords = if features.suspicious_keywords.is_empty() {
        "None".to_string()
    } else {
        features.suspicious_keywords.join(", ")
    };

    let user = format!(
        "Analyze this URL for phishing:

URL: {}

Lexical Features:
- Length: {} characters
- Special Characters: {}
- HTTPS: {}
- Subdomains: {}
- Suspicious Keywords: {}

Based on these features, classify this URL as \"safe\" or \"scam\" and provide:
1. Your verdict (safe or scam)
2. Confidence level (0-1)
3. A brief explanation

Respond in JSON format:
{{
  \"verdict\": \"safe\" or \"scam\",
  \"confidence\": number between 0 and 1,
  \"explanation\": \"your explanation\"
}}",
        raw_url,
        features.url_length,
        features.special_char_count,
        if features.has_https { "Yes" } else { "No" },
        features.subdomain_count,
        keywords,
    );

    Prompt { system, user }
}
