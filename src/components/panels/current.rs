//! Current conditions panel: headline temperature, condition glyph and
//! a stat grid, with a freshness line derived from the report metadata.

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use super::icons;
use crate::api::types::{ResponseMeta, WeatherReport};

/// Sixteen-wind compass label for a direction in degrees.
pub(super) fn compass(degrees: f64) -> &'static str {
	const POINTS: [&str; 16] = [
		"N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW",
		"NW", "NNW",
	];
	let wrapped = degrees.rem_euclid(360.0);
	let index = ((wrapped / 22.5) + 0.5) as usize % 16;
	POINTS[index]
}

/// Human line for how stale the report is.
pub(super) fn freshness_label(elapsed_minutes: f64) -> String {
	if elapsed_minutes < 1.0 {
		"Updated just now".into()
	} else if elapsed_minutes < 60.0 {
		let minutes = elapsed_minutes.floor() as i64;
		if minutes == 1 {
			"Updated 1 minute ago".into()
		} else {
			format!("Updated {} minutes ago", minutes)
		}
	} else {
		let hours = (elapsed_minutes / 60.0).floor() as i64;
		if hours == 1 {
			"Updated 1 hour ago".into()
		} else {
			format!("Updated {} hours ago", hours)
		}
	}
}

/// The backend's timestamps are naive UTC; pin a zone marker on so the
/// host's date parser does not read them as local time.
pub(super) fn pin_utc(stamp: &str) -> String {
	let time_part = stamp.find('T').map(|i| &stamp[i + 1..]).unwrap_or("");
	if stamp.ends_with('Z') || time_part.contains(['+', '-']) {
		stamp.to_string()
	} else {
		format!("{}Z", stamp)
	}
}

fn minutes_since(stamp: &str) -> Option<f64> {
	if stamp.is_empty() {
		return None;
	}
	let parsed = js_sys::Date::new(&JsValue::from_str(&pin_utc(stamp))).get_time();
	if parsed.is_nan() {
		return None;
	}
	Some(((js_sys::Date::now() - parsed) / 60_000.0).max(0.0))
}

/// Headline conditions for the resolved city.
#[component]
pub fn CurrentPanel(
	/// Core weather section of the report.
	weather: WeatherReport,
	/// Envelope metadata, source of the freshness line.
	meta: ResponseMeta,
) -> impl IntoView {
	let place = if weather.city.country.is_empty() {
		weather.city.name.clone()
	} else {
		format!("{}, {}", weather.city.name, weather.city.country)
	};
	let region = (!weather.city.region.is_empty() && weather.city.region != weather.city.name)
		.then(|| weather.city.region.clone());

	let current = weather.current;
	let icon = icons::glyph(&current.icon_key);
	let temp = format!("{:.0}\u{b0}C", current.temperature);
	let feels = format!("Feels like {:.0}\u{b0}C", current.feels_like);
	let stats = vec![
		("Humidity", format!("{:.0}%", current.humidity)),
		(
			"Wind",
			format!("{:.0} km/h {}", current.wind_speed, compass(current.wind_direction)),
		),
		("Pressure", format!("{:.0} hPa", current.pressure)),
		("Visibility", format!("{:.0} km", current.visibility)),
		("UV index", format!("{:.1}", current.uv_index)),
		("Cloud cover", format!("{:.0}%", current.cloud_cover)),
		("Precipitation", format!("{:.1} mm", current.precipitation)),
	];
	let stats = stats
		.into_iter()
		.map(|(label, value)| {
			view! {
				<div class="stat">
					<dt>{label}</dt>
					<dd>{value}</dd>
				</div>
			}
		})
		.collect_view();

	let freshness = minutes_since(&meta.fetched_at).map(freshness_label);

	view! {
		<section class="panel current-panel">
			<header class="panel-head">
				<h2>{place}</h2>
				{region.map(|r| view! { <span class="panel-sub">{r}</span> })}
			</header>
			<div class="current-main">
				<span class="current-icon">{icon}</span>
				<div class="current-readout">
					<span class="current-temp">{temp}</span>
					<span class="current-desc">{current.description}</span>
					<span class="current-feels">{feels}</span>
				</div>
			</div>
			<dl class="stat-grid">{stats}</dl>
			{freshness.map(|line| view! { <p class="freshness">{line}</p> })}
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn compass_hits_cardinal_points() {
		assert_eq!(compass(0.0), "N");
		assert_eq!(compass(90.0), "E");
		assert_eq!(compass(180.0), "S");
		assert_eq!(compass(270.0), "W");
	}

	#[test]
	fn compass_rounds_to_nearest_point() {
		assert_eq!(compass(349.0), "N");
		assert_eq!(compass(11.0), "N");
		assert_eq!(compass(12.0), "NNE");
		assert_eq!(compass(310.0), "NW");
	}

	#[test]
	fn compass_wraps_out_of_range_directions() {
		assert_eq!(compass(360.0), "N");
		assert_eq!(compass(-90.0), "W");
		assert_eq!(compass(720.0 + 45.0), "NE");
	}

	#[test]
	fn freshness_buckets() {
		assert_eq!(freshness_label(0.2), "Updated just now");
		assert_eq!(freshness_label(1.4), "Updated 1 minute ago");
		assert_eq!(freshness_label(12.0), "Updated 12 minutes ago");
		assert_eq!(freshness_label(61.0), "Updated 1 hour ago");
		assert_eq!(freshness_label(150.0), "Updated 2 hours ago");
	}

	#[test]
	fn naive_timestamps_get_pinned() {
		assert_eq!(pin_utc("2025-07-01T12:04:31.512345"), "2025-07-01T12:04:31.512345Z");
		assert_eq!(pin_utc("2025-07-01T12:04:31Z"), "2025-07-01T12:04:31Z");
		assert_eq!(pin_utc("2025-07-01T12:04:31+02:00"), "2025-07-01T12:04:31+02:00");
	}
}
