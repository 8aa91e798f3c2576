//! Lexical feature extraction from raw URL strings.
//!
//! Features are purely structural (length, character composition, keyword
//! presence) and never require a network lookup. Extraction is total: even
//! a string that fails URL parsing produces a best-effort feature set.

use serde::Serialize;
use url::Url;

/// Keywords whose presence in a URL is a phishing signal.
///
/// Order matters: matched keywords are reported in this order.
pub const SUSPICIOUS_KEYWORDS: &[&str] = &[
    "login",
    "signin",
    "account",
    "verify",
    "secure",
    "update",
    "confirm",
    "banking",
    "paypal",
    "password",
    "suspended",
    "locked",
    "unusual",
    "click",
    "urgent",
    "immediately",
    "expire",
];

/// Lexical features derived from a single URL string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LexicalFeatures {
    /// Character count of the raw input string
    pub url_length: usize,
    /// Count of characters outside `[A-Za-z0-9]`
    pub special_char_count: usize,
    /// Whether the string starts with `https://` (case-insensitive)
    pub has_https: bool,
    /// Dot-separated labels in the hostname beyond domain + TLD, floored at 0
    pub subdomain_count: usize,
    /// Matched entries from [`SUSPICIOUS_KEYWORDS`], in list order
    pub suspicious_keywords: Vec<&'static str>,
}

/// Extract lexical features from a raw URL string.
///
/// Never fails. If the string does not parse as a URL, the whole string
/// stands in for the hostname and the subdomain count degrades to counting
/// labels across it.
pub fn extract(raw_url: &str) -> LexicalFeatures {
    let url_length = raw_url.chars().count();

    let special_char_count = raw_url
        .chars()
        .filter(|c| !c.is_ascii_alphanumeric())
        .count();

    let has_https = raw_url
        .get(..8)
        .map_or(false, |prefix| prefix.eq_ignore_ascii_case("https://"));

    let hostname = match Url::parse(raw_url) {
        Ok(parsed) => parsed.host_str().unwrap_or("").to_string(),
        // Invalid URL: analyze the whole string instead
        Err(_) => raw_url.to_string(),
    };
    let subdomain_count = hostname.split('.').count().saturating_sub(2);

    let lowered = raw_url.to_lowercase();
    let suspicious_keywords = SUSPICIOUS_KEYWORDS
        .iter()
        .copied()
        .filter(|keyword| lowered.contains(keyword))
        .collect();

    LexicalFeatures {
        url_length,
        special_char_count,
        has_https,
        subdomain_count,
        suspicious_keywords,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_length_matches_input() {
        for input in ["", "a", "https://example.com", "not a url at all"] {
            assert_eq!(extract(input).url_length, input.chars().count());
        }
    }

    #[test]
    fn test_special_char_count() {
        let features = extract("https://example.com/a?b=1");
        // : / / . / ? =
        assert_eq!(features.special_char_count, 7);
    }

    #[test]
    fn test_https_prefix() {
        assert!(extract("https://example.com").has_https);
        assert!(extract("HTTPS://EXAMPLE.COM").has_https);
        assert!(!extract("http://example.com").has_https);
        assert!(!extract("ftp://example.com").has_https);
        assert!(!extract("example.com").has_https);
    }

    #[test]
    fn test_subdomain_count_bare_domain() {
        assert_eq!(extract("https://example.com").subdomain_count, 0);
    }

    #[test]
    fn test_subdomain_count_nested() {
        assert_eq!(extract("https://a.b.example.com").subdomain_count, 2);
        assert_eq!(extract("https://www.example.com").subdomain_count, 1);
    }

    #[test]
    fn test_subdomain_count_unparsable_input() {
        // Degraded mode: the raw string stands in for the hostname
        assert_eq!(extract("just.some.dotted.words").subdomain_count, 2);
        assert_eq!(extract("no dots here").subdomain_count, 0);
    }

    #[test]
    fn test_keyword_single_match() {
        let features = extract("http://a.b.example.com/login");
        assert_eq!(features.subdomain_count, 2);
        assert_eq!(features.suspicious_keywords, vec!["login"]);
    }

    #[test]
    fn test_keywords_preserve_list_order() {
        let features = extract("https://paypal-secure-login.verify-account.com/update");
        assert_eq!(
            features.suspicious_keywords,
            vec!["login", "account", "verify", "secure", "update", "paypal"]
        );
    }

    #[test]
    fn test_keywords_case_insensitive() {
        let features = extract("https://example.com/LOGIN");
        assert_eq!(features.suspicious_keywords, vec!["login"]);
    }

    #[test]
    fn test_keywords_substring_match() {
        // "signin" matches inside "signing"
        let features = extract("https://example.com/signing");
        assert_eq!(features.suspicious_keywords, vec!["signin"]);
    }

    #[test]
    fn test_no_keywords() {
        assert!(extract("https://openai.com").suspicious_keywords.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let features = extract("");
        assert_eq!(features.url_length, 0);
        assert_eq!(features.special_char_count, 0);
        assert!(!features.has_https);
        assert_eq!(features.subdomain_count, 0);
        assert!(features.suspicious_keywords.is_empty());
    }

    #[test]
    fn test_deterministic() {
        let input = "https://secure-login.example.com";
        assert_eq!(extract(input), extract(input));
    }

    #[test]
    fn test_wire_field_names() {
        let json = serde_json::to_value(extract("https://example.com")).unwrap();
        let object = json.as_object().unwrap();
        for key in [
            "urlLength",
            "specialCharCount",
            "hasHttps",
            "subdomainCount",
            "suspiciousKeywords",
        ] {
            assert!(object.contains_key(key), "missing field {}", key);
        }
    }
}
