//! Seven-day forecast strip.

use leptos::prelude::*;

use super::icons;
use crate::api::types::DailyEntry;

/// Short weekday for an ISO `YYYY-MM-DD` date. Sakamoto's method, so
/// no date crate is needed for one label.
pub(super) fn weekday_short(date: &str) -> Option<&'static str> {
	const NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
	const OFFSETS: [i32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

	let mut parts = date.splitn(3, '-');
	let year: i32 = parts.next()?.parse().ok()?;
	let month: u32 = parts.next()?.parse().ok()?;
	let day: u32 = parts.next()?.parse().ok()?;
	if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
		return None;
	}

	let y = if month < 3 { year - 1 } else { year };
	let index = (y + y / 4 - y / 100 + y / 400 + OFFSETS[(month - 1) as usize] + day as i32)
		.rem_euclid(7);
	NAMES.get(index as usize).copied()
}

/// One card per forecast day.
#[component]
pub fn ForecastPanel(
	/// The `daily_forecast` entries, today first.
	days: Vec<DailyEntry>,
) -> impl IntoView {
	let cards = days
		.into_iter()
		.enumerate()
		.map(|(i, day)| {
			let label = if i == 0 {
				"Today".to_string()
			} else {
				weekday_short(&day.date)
					.map(str::to_string)
					.unwrap_or_else(|| day.date.clone())
			};
			let icon = icons::glyph(&day.icon_key);
			let range = format!("{:.0}\u{b0} / {:.0}\u{b0}", day.temp_max, day.temp_min);
			let rain = format!("{:.1} mm", day.precipitation_sum);
			view! {
				<div class="forecast-card" title=day.description>
					<span class="forecast-day">{label}</span>
					<span class="forecast-icon">{icon}</span>
					<span class="forecast-range">{range}</span>
					<span class="forecast-rain">{rain}</span>
				</div>
			}
		})
		.collect_view();

	view! {
		<section class="panel forecast-panel">
			<h2>"Next seven days"</h2>
			<div class="forecast-strip">{cards}</div>
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn weekdays_for_known_dates() {
		assert_eq!(weekday_short("2025-07-01"), Some("Tue"));
		assert_eq!(weekday_short("2024-02-29"), Some("Thu"));
		assert_eq!(weekday_short("2000-01-01"), Some("Sat"));
		assert_eq!(weekday_short("2026-08-23"), Some("Sun"));
	}

	#[test]
	fn malformed_dates_are_rejected() {
		assert_eq!(weekday_short("not-a-date"), None);
		assert_eq!(weekday_short("2025-13-01"), None);
		assert_eq!(weekday_short("2025-00-10"), None);
		assert_eq!(weekday_short(""), None);
	}
}
