//! skycast: client-side weather intelligence page.
//!
//! A Leptos CSR application that looks up a city through the backend's
//! `GET /api/weather` endpoint and renders the full report: current
//! conditions, temperature analysis with a trend chart, comfort risk
//! meters, a seven-day forecast, outfit suggestions and a city guide.
//! The resolved weather category also drives a CSS theme and a canvas
//! particle backdrop.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::*;
use log::{Level, info, warn};
use web_sys::SubmitEvent;

pub mod api;
pub mod components;
pub mod theme;

pub use components::atmosphere::AtmosphereCanvas;
pub use theme::WeatherTheme;

use api::types::WeatherEnvelope;
use components::panels::{
	AnalysisPanel, CityPanel, CurrentPanel, ForecastPanel, ProductsPanel, RisksPanel, TrendPanel,
};

/// Page configuration constants.
pub mod consts {
	/// Weather lookup endpoint, relative to the page origin.
	pub const WEATHER_ENDPOINT: &str = "/api/weather";
	/// Longest accepted city input, in characters.
	pub const CITY_MAX_CHARS: usize = 80;

	/// Nominal frame interval the animation timestep is measured against.
	pub const FRAME_INTERVAL_MS: f64 = 1000.0 / 60.0;
	/// Upper clamp on the per-frame step multiplier, so a backgrounded
	/// tab resumes without particles teleporting.
	pub const MAX_FRAME_SCALE: f64 = 3.0;

	/// Shortest wait between lightning flashes.
	pub const LIGHTNING_GAP_MIN_MS: f64 = 3000.0;
	/// Upper bound (exclusive) on the redrawn flash gap.
	pub const LIGHTNING_GAP_MAX_MS: f64 = 8000.0;
}

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("skycast: logging initialized");
}

/// Main application component: search form, themed particle backdrop,
/// and the report panels for the last successful lookup.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let city_input = RwSignal::new(String::new());
	let busy = RwSignal::new(false);
	let error = RwSignal::new(None::<String>);
	let report = RwSignal::new(None::<WeatherEnvelope>);
	let category = RwSignal::new(None::<String>);

	let run_search = move || {
		if busy.get_untracked() {
			return;
		}
		let raw = city_input.get_untracked();
		busy.set(true);
		error.set(None);
		spawn_local(async move {
			match api::fetch_weather(&raw).await {
				Ok(envelope) => {
					let key = theme::resolve_category(
						&envelope.data.ml.category.key,
						&envelope.data.weather.current.icon_key,
					);
					info!("skycast: report for {} ({})", envelope.meta.city, key);
					theme::WeatherTheme::for_category(key).apply();
					category.set(Some(key.to_string()));
					report.set(Some(envelope));
				}
				Err(err) => {
					warn!("skycast: lookup failed: {}", err);
					error.set(Some(err.to_string()));
				}
			}
			busy.set(false);
		});
	};

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		run_search();
	};

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Skycast" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<AtmosphereCanvas category=category />

		<div class="page">
			<header class="hero">
				<h1>"Skycast"</h1>
				<p class="tagline">"City weather with a feel for the sky"</p>
				<form class="search-form" on:submit=on_submit>
					<input
						class="search-input"
						type="text"
						placeholder="Search any city"
						prop:value=move || city_input.get()
						on:input=move |ev| city_input.set(event_target_value(&ev))
					/>
					<button class="search-button" type="submit" disabled=move || busy.get()>
						{move || if busy.get() { "Searching\u{2026}" } else { "Search" }}
					</button>
				</form>
				{move || {
					error.get().map(|message| {
						view! {
							<div class="error-banner">
								<span>{message}</span>
								<button
									class="error-dismiss"
									type="button"
									on:click=move |_| error.set(None)
								>
									"\u{d7}"
								</button>
							</div>
						}
					})
				}}
			</header>

			{move || {
				report.get().map(|env| {
					let weather = env.data.weather.clone();
					let days = weather.daily_forecast.clone();
					let meta = env.meta.clone();
					let ml = env.data.ml.clone();
					let show_trend = ml.is_available() && ml.trend.has_series();
					let trend = ml.trend.clone();
					let risks = env.data.risks.clone();
					let products = env.data.products.clone();
					let city_content = env.data.city_content.clone();
					view! {
						<main class="report">
							<CurrentPanel weather=weather meta=meta />
							<AnalysisPanel ml=ml />
							{(!risks.is_empty()).then(|| view! { <RisksPanel risks=risks /> })}
							{show_trend.then(|| view! { <TrendPanel trend=trend /> })}
							{(!days.is_empty()).then(|| view! { <ForecastPanel days=days /> })}
							{(!products.is_empty())
								.then(|| view! { <ProductsPanel products=products /> })}
							{(!city_content.is_empty())
								.then(|| view! { <CityPanel content=city_content /> })}
						</main>
					}
				})
			}}
		</div>
	}
}
