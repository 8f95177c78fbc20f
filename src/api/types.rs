//! Payload types for `GET /api/weather`.
//!
//! The backend aggregates several upstream services into one envelope.
//! Only the `weather` section is guaranteed on success; the others
//! degrade independently (`ml` collapses to an `{"error": ...}` stub,
//! `risks` to `{}`, `products` to `[]`, `city_content` to an empty
//! shell), so every optional container here defaults missing fields
//! and a partial payload still decodes.

use serde::Deserialize;

/// Top-level envelope for a successful lookup.
#[derive(Clone, Debug, Deserialize)]
pub struct WeatherEnvelope {
	/// Always `"success"` on 2xx responses.
	#[serde(default)]
	pub status: String,
	/// Aggregated payload sections.
	pub data: WeatherData,
	/// Request metadata.
	#[serde(default)]
	pub meta: ResponseMeta,
}

/// Error body carried by non-2xx responses.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiErrorBody {
	/// Human-readable message.
	#[serde(default)]
	pub error: String,
	/// Stable machine code, e.g. `CITY_NOT_FOUND` or `RATE_LIMITED`.
	#[serde(default)]
	pub code: String,
}

/// Request metadata attached to every successful envelope.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ResponseMeta {
	/// ISO-8601 timestamp of the upstream fetch.
	pub fetched_at: String,
	/// City name as resolved by the backend.
	pub city: String,
	/// Seconds until the cached payload expires.
	pub cache_expires_in: u64,
}

/// The payload sections. `weather` is required; the rest degrade.
#[derive(Clone, Debug, Deserialize)]
pub struct WeatherData {
	/// Location, current conditions, hourly series, daily forecast.
	pub weather: WeatherReport,
	/// Temperature analysis. Check [`MlReport::is_available`] before use.
	#[serde(default)]
	pub ml: MlReport,
	/// Heat, cold and humidity risk assessments.
	#[serde(default)]
	pub risks: RiskSet,
	/// Clothing product suggestions matched to the conditions.
	#[serde(default)]
	pub products: Vec<Product>,
	/// Destination guide for the resolved city.
	#[serde(default)]
	pub city_content: CityContent,
}

/// Core weather section.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct WeatherReport {
	/// Resolved location.
	pub city: CityInfo,
	/// Conditions right now.
	pub current: CurrentConditions,
	/// Next 24 hours as parallel arrays.
	pub hourly_24h: HourlySeries,
	/// Seven-day outlook.
	pub daily_forecast: Vec<DailyEntry>,
	/// ISO-8601 timestamp of the upstream fetch.
	pub fetched_at: String,
}

/// Geocoded location details.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct CityInfo {
	/// Display name.
	pub name: String,
	/// Country name.
	pub country: String,
	/// Two-letter country code.
	pub country_code: String,
	/// Administrative region, may be empty.
	pub region: String,
	/// Decimal degrees north.
	pub latitude: f64,
	/// Decimal degrees east.
	pub longitude: f64,
	/// IANA timezone name.
	pub timezone: String,
}

/// Instantaneous conditions.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct CurrentConditions {
	/// Air temperature in degrees Celsius.
	pub temperature: f64,
	/// Apparent temperature in degrees Celsius.
	pub feels_like: f64,
	/// Relative humidity, percent.
	pub humidity: f64,
	/// Wind speed in km/h.
	pub wind_speed: f64,
	/// Wind direction in degrees, 0 = north.
	pub wind_direction: f64,
	/// WMO weather code.
	pub weather_code: i64,
	/// Human-readable condition, e.g. "Light rain".
	pub description: String,
	/// Icon selector, e.g. "rain" or "clear-night".
	pub icon_key: String,
	/// Surface pressure in hPa.
	pub pressure: f64,
	/// Visibility in km.
	pub visibility: f64,
	/// UV index.
	pub uv_index: f64,
	/// Cloud cover, percent.
	pub cloud_cover: f64,
	/// 1 during daylight, 0 at night.
	pub is_day: u8,
	/// Precipitation in the current hour, mm.
	pub precipitation: f64,
}

/// Hour-by-hour series for the next 24 hours. All vectors are aligned.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct HourlySeries {
	/// ISO-8601 local timestamps.
	pub times: Vec<String>,
	/// Air temperatures, degrees Celsius.
	pub temperatures: Vec<f64>,
	/// Relative humidity, percent.
	pub humidity: Vec<f64>,
	/// Wind speeds, km/h.
	pub wind_speeds: Vec<f64>,
	/// Precipitation probability, percent.
	pub precipitation_probability: Vec<f64>,
	/// Apparent temperatures, degrees Celsius.
	pub apparent_temperatures: Vec<f64>,
}

/// One day of the forecast strip.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct DailyEntry {
	/// ISO date, `YYYY-MM-DD`.
	pub date: String,
	/// Daily maximum, degrees Celsius.
	pub temp_max: f64,
	/// Daily minimum, degrees Celsius.
	pub temp_min: f64,
	/// WMO weather code.
	pub weather_code: i64,
	/// Human-readable condition.
	pub description: String,
	/// Icon selector.
	pub icon_key: String,
	/// Total precipitation, mm.
	pub precipitation_sum: f64,
	/// Peak wind speed, km/h.
	pub wind_max: f64,
}

/// Temperature analysis section.
///
/// When the backend analysis fails this arrives as `{"error": ...}`
/// with everything else defaulted, so callers must gate rendering on
/// [`MlReport::is_available`].
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct MlReport {
	/// Set when the analysis failed server-side.
	pub error: Option<String>,
	/// Predicted temperature for the near term, degrees Celsius.
	pub predicted_temp: f64,
	/// Regression over recent and upcoming hours. May be empty.
	pub trend: TrendReport,
	/// Clothing recommendation.
	pub clothing: ClothingAdvice,
	/// Temperature band classification.
	pub category: TempCategory,
	/// Climate cluster assignment.
	pub cluster: ClimateCluster,
	/// Overall confidence, 0 to 100.
	pub prediction_confidence: f64,
	/// Flattened numbers for the summary row.
	pub summary: MlSummary,
}

impl MlReport {
	/// Whether the analysis succeeded server-side.
	pub fn is_available(&self) -> bool {
		self.error.is_none()
	}
}

/// Smoothed temperature trend and short-term projection.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct TrendReport {
	/// Recent observed temperatures, oldest first.
	pub historical_temps: Vec<f64>,
	/// Moving-average of the observations.
	pub smoothed_temps: Vec<f64>,
	/// Projected temperatures for the next hours.
	pub predicted_temps: Vec<f64>,
	/// Regression slope, degrees per hour.
	pub slope: f64,
	/// One of `rising`, `falling`, `stable`.
	pub trend_direction: String,
	/// Fit confidence, 0 to 100.
	pub confidence: f64,
	/// Mean of the next six projected hours.
	pub next_6h_avg: f64,
	/// Mean of the next twelve projected hours.
	pub next_12h_avg: f64,
}

impl TrendReport {
	/// Whether there is anything to chart.
	pub fn has_series(&self) -> bool {
		!self.historical_temps.is_empty() || !self.predicted_temps.is_empty()
	}
}

/// What to wear, per the classifier and the rule table.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ClothingAdvice {
	/// Raw classifier output.
	pub ml_prediction: String,
	/// Headline recommendation, e.g. "Light jacket".
	pub primary: String,
	/// Itemized suggestions.
	pub items: Vec<String>,
	/// Classifier confidence, 0 to 100.
	pub confidence: f64,
}

/// Temperature band, e.g. `hot` / "Hot".
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct TempCategory {
	/// Machine key, underscore style (`extreme_cold` .. `extreme_hot`).
	pub key: String,
	/// Display label.
	pub label: String,
}

/// K-means climate cluster assignment.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ClimateCluster {
	/// Cluster index.
	pub cluster_id: u32,
	/// Display label, e.g. "Dry Heat" or "Mild Pleasant".
	pub cluster_type: String,
	/// Assignment confidence, 0 to 100.
	pub confidence: f64,
}

/// Flattened figures for the analysis summary row.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct MlSummary {
	/// Current temperature, degrees Celsius.
	pub current_temp: f64,
	/// Apparent temperature, degrees Celsius.
	pub feels_like: f64,
	/// Relative humidity, percent.
	pub humidity: f64,
	/// Wind speed, km/h.
	pub wind_speed: f64,
	/// Band label, e.g. "Warm".
	pub category: String,
	/// Cluster label, e.g. "Humid Heat".
	pub cluster_type: String,
	/// One of `rising`, `falling`, `stable`.
	pub trend_direction: String,
}

/// The three weather-risk assessments. Degrades to `{}`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RiskSet {
	/// Heat stress.
	pub heatstroke: Option<RiskEntry>,
	/// Cold stress.
	pub cold_exposure: Option<RiskEntry>,
	/// Muggy-air discomfort.
	pub humidity_discomfort: Option<RiskEntry>,
}

impl RiskSet {
	/// Whether any assessment is present.
	pub fn is_empty(&self) -> bool {
		self.heatstroke.is_none() && self.cold_exposure.is_none() && self.humidity_discomfort.is_none()
	}
}

/// One risk meter.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RiskEntry {
	/// Severity score, 0 to 100.
	pub score: f64,
	/// Machine level, e.g. `moderate`.
	pub level: String,
	/// Display label, e.g. "Moderate".
	pub label: String,
	/// CSS color for the meter fill.
	pub color: String,
	/// One-line advice.
	pub tip: String,
	/// Heat index, degrees Celsius. Heatstroke only.
	pub heat_index: Option<f64>,
	/// Wind chill, degrees Celsius. Cold exposure only.
	pub wind_chill: Option<f64>,
	/// Humidex value. Humidity discomfort only.
	pub humidex: Option<f64>,
	/// Dew point, degrees Celsius. Humidity discomfort only.
	pub dew_point: Option<f64>,
}

/// A suggested clothing product.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Product {
	/// Product name.
	pub name: String,
	/// Display price, e.g. "$69.90" or "Check Price".
	pub price: String,
	/// Image URL.
	pub image: String,
	/// Store URL.
	pub link: String,
	/// Brand name.
	pub brand: String,
	/// Badge text, e.g. "Best Seller".
	pub tag: String,
}

/// Destination guide. Degrades to name plus empty collections.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct CityContent {
	/// City name.
	pub name: String,
	/// Country name, may be empty.
	pub country: String,
	/// A few sentences about the city.
	pub description: String,
	/// Skyline and landmark photos.
	pub images: Vec<CityImage>,
	/// Notable places to visit.
	pub tourist_spots: Vec<String>,
}

impl CityContent {
	/// Whether the guide degraded to an empty shell.
	pub fn is_empty(&self) -> bool {
		self.description.is_empty() && self.images.is_empty() && self.tourist_spots.is_empty()
	}
}

/// One destination photo.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct CityImage {
	/// Image URL.
	pub url: String,
	/// Alt text.
	pub alt: String,
	/// Attribution.
	pub credit: String,
}

#[cfg(test)]
mod tests {
	use super::*;

	const FULL_ENVELOPE: &str = r##"{
		"status": "success",
		"data": {
			"weather": {
				"city": {
					"name": "Lisbon", "country": "Portugal", "country_code": "PT",
					"region": "Lisboa", "latitude": 38.72, "longitude": -9.14,
					"timezone": "Europe/Lisbon"
				},
				"current": {
					"temperature": 24.3, "feels_like": 25.1, "humidity": 58,
					"wind_speed": 14.2, "wind_direction": 310, "weather_code": 1,
					"description": "Mainly clear", "icon_key": "sunny",
					"pressure": 1017.0, "visibility": 32.4, "uv_index": 6.2,
					"cloud_cover": 12, "is_day": 1, "precipitation": 0.0
				},
				"hourly_24h": {
					"times": ["2025-07-01T12:00", "2025-07-01T13:00"],
					"temperatures": [24.3, 25.0],
					"humidity": [58, 55],
					"wind_speeds": [14.2, 15.8],
					"precipitation_probability": [5, 5],
					"apparent_temperatures": [25.1, 25.9]
				},
				"daily_forecast": [{
					"date": "2025-07-01", "temp_max": 27.5, "temp_min": 18.1,
					"weather_code": 1, "description": "Mainly clear",
					"icon_key": "sunny", "precipitation_sum": 0.0, "wind_max": 22.0
				}],
				"fetched_at": "2025-07-01T12:04:31.512345"
			},
			"ml": {
				"predicted_temp": 25.4,
				"trend": {
					"historical_temps": [22.0, 23.1, 24.3],
					"smoothed_temps": [22.0, 22.6, 23.3],
					"predicted_temps": [24.8, 25.2, 25.6],
					"slope": 0.42, "trend_direction": "rising",
					"confidence": 81.5, "next_6h_avg": 25.4, "next_12h_avg": 25.9
				},
				"clothing": {
					"ml_prediction": "tshirt", "primary": "T-shirt and jeans",
					"items": ["Cotton t-shirt", "Light trousers"], "confidence": 88.0
				},
				"category": { "key": "warm", "label": "Warm" },
				"cluster": { "cluster_id": 3, "cluster_type": "Mild Pleasant", "confidence": 74.0 },
				"prediction_confidence": 79.2,
				"summary": {
					"current_temp": 24.3, "feels_like": 25.1, "humidity": 58,
					"wind_speed": 14.2, "category": "Warm",
					"cluster_type": "Mild Pleasant", "trend_direction": "rising"
				}
			},
			"risks": {
				"heatstroke": {
					"score": 35, "level": "low", "label": "Low", "color": "#84cc16",
					"heat_index": 25.8, "tip": "Stay hydrated during outdoor activity."
				},
				"cold_exposure": {
					"score": 0, "level": "none", "label": "Minimal", "color": "#22c55e",
					"wind_chill": 24.3, "tip": "No cold risk at these temperatures."
				},
				"humidity_discomfort": {
					"score": 22, "level": "comfortable", "label": "Comfortable",
					"color": "#22c55e", "humidex": 26.4, "dew_point": 15.6,
					"tip": "Humidity is in the comfort range."
				}
			},
			"products": [{
				"name": "Breathable Cotton T-Shirt", "price": "$24.99",
				"image": "https://example.test/shirt.jpg",
				"link": "https://example.test/shop", "brand": "H&M", "tag": "Everyday"
			}],
			"city_content": {
				"name": "Lisbon", "country": "Portugal",
				"description": "Lisbon is the capital of Portugal.",
				"images": [{ "url": "https://example.test/lisbon.jpg", "alt": "Lisbon skyline", "credit": "Unsplash" }],
				"tourist_spots": ["Belém Tower", "Alfama"]
			}
		},
		"meta": { "fetched_at": "2025-07-01T12:04:31.512345", "city": "Lisbon", "cache_expires_in": 600 }
	}"##;

	#[test]
	fn full_envelope_decodes() {
		let env: WeatherEnvelope = serde_json::from_str(FULL_ENVELOPE).unwrap();
		assert_eq!(env.status, "success");
		assert_eq!(env.data.weather.city.name, "Lisbon");
		assert_eq!(env.data.weather.current.icon_key, "sunny");
		assert_eq!(env.data.weather.daily_forecast.len(), 1);
		assert!(env.data.ml.is_available());
		assert_eq!(env.data.ml.category.key, "warm");
		assert!(env.data.ml.trend.has_series());
		assert_eq!(env.data.ml.trend.predicted_temps.len(), 3);
		assert!(!env.data.risks.is_empty());
		assert_eq!(env.data.risks.heatstroke.as_ref().unwrap().score, 35.0);
		assert_eq!(env.data.risks.humidity_discomfort.as_ref().unwrap().dew_point, Some(15.6));
		assert_eq!(env.data.products.len(), 1);
		assert_eq!(env.data.city_content.tourist_spots.len(), 2);
		assert_eq!(env.meta.cache_expires_in, 600);
	}

	#[test]
	fn degraded_sections_decode() {
		// Everything optional collapsed, the way the backend degrades.
		let body = r#"{
			"status": "success",
			"data": {
				"weather": {
					"city": { "name": "Nowhere" },
					"current": { "temperature": 3.0, "description": "Fog", "icon_key": "fog" },
					"hourly_24h": {},
					"daily_forecast": [],
					"fetched_at": ""
				},
				"ml": { "error": "ML analysis unavailable" },
				"risks": {},
				"products": [],
				"city_content": { "name": "Nowhere", "description": "", "images": [], "tourist_spots": [] }
			},
			"meta": { "fetched_at": "", "city": "Nowhere", "cache_expires_in": 600 }
		}"#;
		let env: WeatherEnvelope = serde_json::from_str(body).unwrap();
		assert!(!env.data.ml.is_available());
		assert_eq!(env.data.ml.error.as_deref(), Some("ML analysis unavailable"));
		assert!(!env.data.ml.trend.has_series());
		assert!(env.data.risks.is_empty());
		assert!(env.data.products.is_empty());
		assert!(env.data.city_content.is_empty());
		assert!(env.data.city_content.images.is_empty());
		assert_eq!(env.data.weather.current.description, "Fog");
		assert_eq!(env.data.weather.city.country, "");
	}

	#[test]
	fn error_body_decodes() {
		let body = r#"{ "error": "City not found", "code": "CITY_NOT_FOUND" }"#;
		let err: ApiErrorBody = serde_json::from_str(body).unwrap();
		assert_eq!(err.code, "CITY_NOT_FOUND");
		assert_eq!(err.error, "City not found");
	}

	#[test]
	fn unknown_fields_are_ignored() {
		// The backend also ships a server-rendered theme block; the client
		// derives its own palette and skips it.
		let body = r##"{ "key": "warm", "label": "Warm", "gradient": ["#fff", "#000"] }"##;
		let cat: TempCategory = serde_json::from_str(body).unwrap();
		assert_eq!(cat.key, "warm");
	}
}
