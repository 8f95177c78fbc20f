//! Risk meter panel: one score bar per assessment, tinted with the
//! color the backend picked for the severity level.

use leptos::prelude::*;

use crate::api::types::{RiskEntry, RiskSet};

/// Fill style for a 0-100 score bar.
pub(super) fn meter_style(score: f64, color: &str) -> String {
	format!("width: {:.0}%; background: {};", score.clamp(0.0, 100.0), color)
}

/// The assessment's headline metric, when it carries one.
pub(super) fn metric_line(entry: &RiskEntry) -> Option<String> {
	if let Some(v) = entry.heat_index {
		return Some(format!("Heat index {:.1}\u{b0}C", v));
	}
	if let Some(v) = entry.wind_chill {
		return Some(format!("Wind chill {:.1}\u{b0}C", v));
	}
	if let Some(h) = entry.humidex {
		return Some(match entry.dew_point {
			Some(d) => format!("Humidex {:.1}, dew point {:.1}\u{b0}C", h, d),
			None => format!("Humidex {:.1}", h),
		});
	}
	entry.dew_point.map(|d| format!("Dew point {:.1}\u{b0}C", d))
}

/// Weather risk meters for heat, cold and humidity.
#[component]
pub fn RisksPanel(
	/// Risk section of the report.
	risks: RiskSet,
) -> impl IntoView {
	let mut entries = Vec::new();
	if let Some(entry) = risks.heatstroke {
		entries.push(("Heatstroke", entry));
	}
	if let Some(entry) = risks.cold_exposure {
		entries.push(("Cold exposure", entry));
	}
	if let Some(entry) = risks.humidity_discomfort {
		entries.push(("Humidity", entry));
	}

	let meters = entries
		.into_iter()
		.map(|(title, entry)| {
			let fill = meter_style(entry.score, &entry.color);
			let score = format!("{:.0}", entry.score);
			let metric = metric_line(&entry);
			view! {
				<div class="risk-meter">
					<div class="risk-head">
						<span class="risk-title">{title}</span>
						<span class="risk-level">{entry.label}</span>
					</div>
					<div class="risk-track">
						<div class="risk-fill" style=fill></div>
					</div>
					<div class="risk-detail">
						<span class="risk-score">{score}</span>
						{metric.map(|m| view! { <span class="risk-metric">{m}</span> })}
					</div>
					<p class="risk-tip">{entry.tip}</p>
				</div>
			}
		})
		.collect_view();

	view! {
		<section class="panel risks-panel">
			<h2>"Weather risks"</h2>
			<div class="risk-list">{meters}</div>
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn meter_clamps_out_of_range_scores() {
		assert_eq!(meter_style(140.0, "#f00"), "width: 100%; background: #f00;");
		assert_eq!(meter_style(-5.0, "#0f0"), "width: 0%; background: #0f0;");
		assert_eq!(meter_style(62.4, "#abc"), "width: 62%; background: #abc;");
	}

	#[test]
	fn metric_prefers_the_risks_own_headline() {
		let heat = RiskEntry {
			heat_index: Some(38.2),
			..RiskEntry::default()
		};
		assert_eq!(metric_line(&heat).unwrap(), "Heat index 38.2\u{b0}C");

		let humid = RiskEntry {
			humidex: Some(41.0),
			dew_point: Some(24.5),
			..RiskEntry::default()
		};
		assert_eq!(metric_line(&humid).unwrap(), "Humidex 41.0, dew point 24.5\u{b0}C");

		assert_eq!(metric_line(&RiskEntry::default()), None);
	}
}
