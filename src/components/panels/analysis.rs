//! Analysis summary panel: temperature band, climate cluster, trend
//! direction, the near-term prediction and the clothing call.

use leptos::prelude::*;

use super::trend::trend_arrow;
use crate::api::types::MlReport;

/// Summary of the backend's temperature analysis. Renders the server's
/// own notice when the analysis degraded.
#[component]
pub fn AnalysisPanel(
	/// Analysis section of the report.
	ml: MlReport,
) -> impl IntoView {
	if !ml.is_available() {
		let note = ml.error.unwrap_or_else(|| "Analysis unavailable".into());
		return view! {
			<section class="panel analysis-panel">
				<h2>"Analysis"</h2>
				<p class="panel-empty">{note}</p>
			</section>
		}
		.into_any();
	}

	let arrow = trend_arrow(&ml.summary.trend_direction);
	let predicted = format!("{:.1}\u{b0}C", ml.predicted_temp);
	let confidence = ml.prediction_confidence.clamp(0.0, 100.0);
	let confidence_style = format!("width: {:.0}%;", confidence);
	let confidence_label = format!("{:.0}% confidence", confidence);

	let clothing = ml.clothing;
	let items = clothing
		.items
		.into_iter()
		.map(|item| view! { <li>{item}</li> })
		.collect_view();
	let model_pick = (!clothing.ml_prediction.is_empty())
		.then(|| format!("Model pick: {}", clothing.ml_prediction));

	view! {
		<section class="panel analysis-panel">
			<header class="panel-head">
				<h2>"Analysis"</h2>
				<div class="chip-row">
					<span class="chip chip-category">{ml.category.label}</span>
					<span class="chip chip-cluster">{ml.cluster.cluster_type}</span>
					<span class="chip chip-trend">{arrow} " " {ml.summary.trend_direction}</span>
				</div>
			</header>
			<div class="analysis-predicted">
				<span class="analysis-label">"Next 6 hours"</span>
				<span class="analysis-value">{predicted}</span>
			</div>
			<div class="confidence">
				<div class="confidence-track">
					<div class="confidence-fill" style=confidence_style></div>
				</div>
				<span class="confidence-label">{confidence_label}</span>
			</div>
			<div class="clothing">
				<span class="clothing-primary">{clothing.primary}</span>
				<ul class="clothing-items">{items}</ul>
				{model_pick.map(|note| view! { <p class="clothing-model">{note}</p> })}
			</div>
		</section>
	}
	.into_any()
}
