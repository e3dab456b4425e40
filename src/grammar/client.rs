//! HTTP client for the grammar service.

use serde::Deserialize;

use crate::config::GrammarConfig;
use crate::error::Result;

/// One suggested replacement inside a match.
#[derive(Debug, Clone, Deserialize)]
pub struct GrammarReplacement {
    /// Replacement text.
    pub value: String,
}

/// One match reported by the service.
#[derive(Debug, Clone, Deserialize)]
pub struct GrammarMatch {
    /// Character offset of the flagged window.
    pub offset: usize,
    /// Character length of the flagged window.
    pub length: usize,
    /// Suggested replacements, best first. May be empty.
    #[serde(default)]
    pub replacements: Vec<GrammarReplacement>,
}

/// Wire shape of the check response. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct CheckResponse {
    #[serde(default)]
    matches: Vec<GrammarMatch>,
}

/// Client for a LanguageTool-style check endpoint.
#[derive(Debug, Clone)]
pub struct GrammarClient {
    client: reqwest::Client,
    endpoint: String,
    language: String,
}

impl GrammarClient {
    /// Create a client from the grammar configuration.
    pub fn new(config: &GrammarConfig) -> Self {
        GrammarClient {
            client: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
            language: config.language.clone(),
        }
    }

    /// Send `text` to the service and apply its suggestions.
    ///
    /// The request body is `language=<lang>&text=<urlencoded>`. The response
    /// body is parsed as JSON regardless of HTTP status, matching the
    /// reference behavior of treating an error page as a parse failure.
    pub async fn check(&self, text: &str) -> Result<String> {
        let form = [
            ("language", self.language.as_str()),
            ("text", text),
        ];
        let response = self
            .client
            .post(&self.endpoint)
            .form(&form)
            .send()
            .await?;
        let body = response.text().await?;
        let parsed: CheckResponse = serde_json::from_str(&body)?;

        Ok(apply_matches(text, &parsed.matches))
    }
}

/// Splice the first replacement of each match into `text`.
///
/// Matches apply strictly in response order on the progressively-updated
/// text, with no re-sorting and no overlap resolution: when an earlier splice
/// shifts offsets, later matches land wherever their stale offsets point.
/// Offsets are character offsets; windows past the end of the current text
/// are clamped instead of panicking.
pub fn apply_matches(text: &str, matches: &[GrammarMatch]) -> String {
    let mut updated = text.to_string();

    for m in matches {
        let Some(replacement) = m.replacements.first() else {
            continue;
        };

        let chars: Vec<char> = updated.chars().collect();
        let start = m.offset.min(chars.len());
        let end = m.offset.saturating_add(m.length).min(chars.len());

        let mut next: String = chars[..start].iter().collect();
        next.push_str(&replacement.value);
        next.extend(&chars[end..]);
        updated = next;
    }

    updated
}
