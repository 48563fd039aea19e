use serde::Deserialize;

use crate::error::LookupError;

/// Raw response body from the OMDb `?t=` endpoint.
///
/// OMDb always answers HTTP 200 and signals not-found through
/// `Response: "False"` plus an `Error` string.
#[derive(Debug, Deserialize)]
pub struct OmdbPayload {
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
    #[serde(rename = "Title", default)]
    pub title: Option<String>,
    #[serde(rename = "Released", default)]
    pub released: Option<String>,
    #[serde(rename = "Ratings", default)]
    pub ratings: Vec<OmdbRating>,
    #[serde(rename = "Poster", default)]
    pub poster: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct OmdbRating {
    #[serde(rename = "Source")]
    pub source: String,
    /// e.g. "8.1/10" for the IMDb entry.
    #[serde(rename = "Value")]
    pub value: String,
}

/// Successful lookup result: always a complete tuple.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieInfo {
    pub title: String,
    pub year: i32,
    /// Rounded to one decimal.
    pub rating: f64,
    pub poster_url: Option<String>,
}

impl MovieInfo {
    /// Extract a complete record from an OMDb payload.
    ///
    /// `queried_title` is only used for the not-found error message.
    pub fn from_payload(queried_title: &str, payload: OmdbPayload) -> Result<Self, LookupError> {
        if !payload.response.eq_ignore_ascii_case("true") {
            let reason = payload.error.unwrap_or_default();
            if reason.contains("not found") {
                return Err(LookupError::NotFound {
                    title: queried_title.to_string(),
                });
            }
            return Err(LookupError::Api(reason));
        }

        let title = payload
            .title
            .ok_or_else(|| LookupError::Api("response has no title".to_string()))?;

        // Release year is the trailing four characters of "Released",
        // e.g. "18 May 2004".
        let released = payload
            .released
            .ok_or_else(|| LookupError::Api("response has no release date".to_string()))?;
        let year: i32 = released
            .get(released.len().saturating_sub(4)..)
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| LookupError::Api(format!("unparseable release date '{released}'")))?;

        // The first ratings entry is the IMDb score, formatted "x.y/10".
        let raw = payload
            .ratings
            .first()
            .map(|r| r.value.as_str())
            .ok_or_else(|| LookupError::Api("response has no ratings".to_string()))?;
        let rating: f64 = raw
            .split('/')
            .next()
            .and_then(|s| s.trim().parse().ok())
            .ok_or_else(|| LookupError::Api(format!("unparseable rating '{raw}'")))?;
        let rating = (rating * 10.0).round() / 10.0;

        let poster_url = payload.poster.filter(|p| !p.is_empty() && p != "N/A");

        Ok(Self {
            title,
            year,
            rating,
            poster_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> OmdbPayload {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn full_payload_extracts_all_fields() {
        let payload = parse(
            r#"{
                "Title": "Troy",
                "Released": "14 May 2004",
                "Ratings": [
                    {"Source": "Internet Movie Database", "Value": "7.3/10"},
                    {"Source": "Metacritic", "Value": "56/100"}
                ],
                "Poster": "https://m.media-amazon.com/troy.jpg",
                "Response": "True"
            }"#,
        );
        let info = MovieInfo::from_payload("troy", payload).unwrap();
        assert_eq!(info.title, "Troy");
        assert_eq!(info.year, 2004);
        assert_eq!(info.rating, 7.3);
        assert_eq!(
            info.poster_url.as_deref(),
            Some("https://m.media-amazon.com/troy.jpg")
        );
    }

    #[test]
    fn not_found_maps_to_not_found_error() {
        let payload = parse(r#"{"Response": "False", "Error": "Movie not found!"}"#);
        let err = MovieInfo::from_payload("1jk1ejlk21j21", payload).unwrap_err();
        assert!(matches!(err, LookupError::NotFound { ref title } if title == "1jk1ejlk21j21"));
    }

    #[test]
    fn other_api_errors_are_not_not_found() {
        let payload = parse(r#"{"Response": "False", "Error": "Invalid API key!"}"#);
        let err = MovieInfo::from_payload("Troy", payload).unwrap_err();
        assert!(matches!(err, LookupError::Api(_)));
    }

    #[test]
    fn na_poster_maps_to_none() {
        let payload = parse(
            r#"{
                "Title": "Obscure",
                "Released": "01 Jan 1950",
                "Ratings": [{"Source": "Internet Movie Database", "Value": "6.0/10"}],
                "Poster": "N/A",
                "Response": "True"
            }"#,
        );
        let info = MovieInfo::from_payload("Obscure", payload).unwrap();
        assert_eq!(info.poster_url, None);
    }

    #[test]
    fn missing_ratings_is_an_api_error() {
        let payload = parse(
            r#"{
                "Title": "Unrated",
                "Released": "01 Jan 1990",
                "Ratings": [],
                "Poster": "N/A",
                "Response": "True"
            }"#,
        );
        assert!(matches!(
            MovieInfo::from_payload("Unrated", payload),
            Err(LookupError::Api(_))
        ));
    }

    #[test]
    fn rating_is_rounded_to_one_decimal() {
        let payload = parse(
            r#"{
                "Title": "Odd",
                "Released": "01 Jan 2000",
                "Ratings": [{"Source": "Internet Movie Database", "Value": "8.55/10"}],
                "Poster": "N/A",
                "Response": "True"
            }"#,
        );
        let info = MovieInfo::from_payload("Odd", payload).unwrap();
        assert_eq!(info.rating, 8.6);
    }
}
