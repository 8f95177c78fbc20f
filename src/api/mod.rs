//! Client for the weather lookup endpoint.
//!
//! One call does everything the page needs: [`fetch_weather`] validates
//! the city input, issues `GET /api/weather?city=...` and decodes the
//! envelope. Backend error bodies (`{"error", "code"}`) are surfaced as
//! [`FetchError::Api`] so the page can show the server's own message.

pub mod types;

use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::api::types::{ApiErrorBody, WeatherEnvelope};
use crate::consts::{CITY_MAX_CHARS, WEATHER_ENDPOINT};

/// Why a lookup produced no envelope.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum FetchError {
	/// Input rejected before any request was made.
	#[error("{0}")]
	InvalidCity(String),
	/// The request never completed.
	#[error("network error: {0}")]
	Network(String),
	/// The backend refused the request and said why.
	#[error("{message}")]
	Api {
		/// Stable machine code, e.g. `CITY_NOT_FOUND`.
		code: String,
		/// Message from the error body.
		message: String,
		/// HTTP status.
		status: u16,
	},
	/// Non-2xx response without a usable error body.
	#[error("unexpected response (HTTP {0})")]
	Status(u16),
	/// 2xx response that did not decode as an envelope.
	#[error("malformed response: {0}")]
	Decode(String),
}

/// Client-side precheck for the city input, mirroring the backend's
/// sanitizer. Trims surrounding whitespace and returns the trimmed
/// name. The backend stays the authority on anything this lets
/// through.
pub fn validate_city(raw: &str) -> Result<&str, FetchError> {
	let city = raw.trim();
	if city.is_empty() {
		return Err(FetchError::InvalidCity("Please enter a city name.".into()));
	}
	if city.chars().count() > CITY_MAX_CHARS {
		return Err(FetchError::InvalidCity(format!(
			"City names are limited to {} characters.",
			CITY_MAX_CHARS
		)));
	}
	let allowed = city
		.chars()
		.all(|c| c.is_alphabetic() || c.is_whitespace() || matches!(c, '-' | '\'' | ',' | '.'));
	if !allowed {
		return Err(FetchError::InvalidCity(
			"City names may only use letters, spaces, hyphens, apostrophes, commas and periods.".into(),
		));
	}
	Ok(city)
}

/// Look up a city and decode the full response envelope.
pub async fn fetch_weather(city: &str) -> Result<WeatherEnvelope, FetchError> {
	let city = validate_city(city)?;
	let query = String::from(js_sys::encode_uri_component(city));
	let url = format!("{}?city={}", WEATHER_ENDPOINT, query);

	let window =
		web_sys::window().ok_or_else(|| FetchError::Network("window not available".into()))?;
	let response = JsFuture::from(window.fetch_with_str(&url))
		.await
		.map_err(|e| FetchError::Network(format!("fetch failed: {:?}", e)))?;
	let response: Response = response
		.dyn_into()
		.map_err(|_| FetchError::Network("fetch did not return a Response".into()))?;

	let status = response.status();
	let text_promise = response
		.text()
		.map_err(|e| FetchError::Network(format!("response.text() failed: {:?}", e)))?;
	let text = JsFuture::from(text_promise)
		.await
		.map_err(|e| FetchError::Network(format!("reading response body failed: {:?}", e)))?
		.as_string()
		.ok_or_else(|| FetchError::Network("response body was not text".into()))?;

	if !response.ok() {
		return Err(match serde_json::from_str::<ApiErrorBody>(&text) {
			Ok(body) if !body.error.is_empty() => FetchError::Api {
				code: body.code,
				message: body.error,
				status,
			},
			_ => FetchError::Status(status),
		});
	}

	serde_json::from_str(&text).map_err(|e| FetchError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn trims_and_accepts_plain_names() {
		assert_eq!(validate_city("  Lisbon  "), Ok("Lisbon"));
		assert_eq!(validate_city("New York"), Ok("New York"));
	}

	#[test]
	fn accepts_accents_and_punctuation() {
		assert_eq!(validate_city("São Paulo"), Ok("São Paulo"));
		assert_eq!(validate_city("Val-d'Or"), Ok("Val-d'Or"));
		assert_eq!(validate_city("St. John's"), Ok("St. John's"));
		assert_eq!(validate_city("Washington, D.C."), Ok("Washington, D.C."));
	}

	#[test]
	fn rejects_empty_input() {
		assert!(matches!(validate_city("   "), Err(FetchError::InvalidCity(_))));
		assert!(matches!(validate_city(""), Err(FetchError::InvalidCity(_))));
	}

	#[test]
	fn rejects_overlong_input() {
		let long = "a".repeat(CITY_MAX_CHARS + 1);
		assert!(matches!(validate_city(&long), Err(FetchError::InvalidCity(_))));
		let exact = "a".repeat(CITY_MAX_CHARS);
		assert_eq!(validate_city(&exact), Ok(exact.as_str()));
	}

	#[test]
	fn rejects_digits_and_symbols() {
		assert!(validate_city("Area 51").is_err());
		assert!(validate_city("london; drop table").is_err());
		assert!(validate_city("<script>").is_err());
	}

	#[test]
	fn api_error_displays_backend_message() {
		let err = FetchError::Api {
			code: "CITY_NOT_FOUND".into(),
			message: "City not found".into(),
			status: 404,
		};
		assert_eq!(err.to_string(), "City not found");
		assert_eq!(FetchError::Status(502).to_string(), "unexpected response (HTTP 502)");
	}
}
