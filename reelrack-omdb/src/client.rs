use std::time::Duration;

use log::debug;

use crate::error::LookupError;
use crate::types::{MovieInfo, OmdbPayload};

const BASE_URL: &str = "http://www.omdbapi.com/";
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const READ_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the OMDb API.
pub struct OmdbClient {
    http: reqwest::Client,
    api_key: String,
}

impl OmdbClient {
    /// Create a new client with separate connect and read timeouts.
    pub fn new(api_key: String) -> Result<Self, LookupError> {
        let http = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(READ_TIMEOUT)
            .build()?;
        Ok(Self { http, api_key })
    }

    /// Look up a movie by free-text title.
    ///
    /// Returns a complete [`MovieInfo`] or an explicit error; a timeout is
    /// reported as [`LookupError::Timeout`] so callers can surface
    /// "provider unavailable" instead of crashing.
    pub async fn lookup(&self, title: &str) -> Result<MovieInfo, LookupError> {
        let resp = self
            .http
            .get(BASE_URL)
            .query(&[("t", title), ("apikey", self.api_key.as_str())])
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(LookupError::InvalidKey);
        }

        let text = resp.text().await.map_err(map_transport_error)?;
        debug!("OMDb answered {} bytes for '{}'", text.len(), title);

        let payload: OmdbPayload = serde_json::from_str(&text).map_err(|e| {
            LookupError::Api(format!(
                "Failed to parse response: {e}. Body: {}",
                truncate(&text, 200)
            ))
        })?;

        MovieInfo::from_payload(title, payload)
    }
}

fn map_transport_error(err: reqwest::Error) -> LookupError {
    if err.is_timeout() {
        LookupError::Timeout
    } else {
        LookupError::Http(err)
    }
}

/// Truncate to at most `max` bytes without splitting a UTF-8 character.
fn truncate(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

#[cfg(test)]
mod tests {
    use super::truncate;

    #[test]
    fn truncate_backs_off_to_a_char_boundary() {
        // A euro sign straddling the cut point must not split the slice.
        let mut body = "x".repeat(199);
        body.push('\u{20AC}');
        body.push_str(" trailing garbage that is not json");

        let cut = truncate(&body, 200);
        assert_eq!(cut.len(), 199);
        assert!(cut.chars().all(|c| c == 'x'));
    }

    #[test]
    fn truncate_keeps_short_text_intact() {
        assert_eq!(truncate("not json", 200), "not json");
    }

    #[test]
    fn truncate_cuts_exactly_on_an_ascii_boundary() {
        let body = "y".repeat(300);
        assert_eq!(truncate(&body, 200).len(), 200);
    }
}
