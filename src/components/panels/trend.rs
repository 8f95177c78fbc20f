//! Temperature trend chart: observed series over a soft area fill,
//! smoothed overlay, projected series as a dashed continuation.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::api::types::TrendReport;
use crate::theme::Color;

const CHART_WIDTH: f64 = 640.0;
const CHART_HEIGHT: f64 = 240.0;
const MARGIN_LEFT: f64 = 42.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 22.0;
const GRID_ROWS: usize = 4;

const OBSERVED: Color = Color::rgb(125, 211, 252);
const SMOOTHED: Color = Color::rgba(125, 211, 252, 0.45);
const PROJECTED: Color = Color::rgb(253, 186, 116);
const GRID: Color = Color::rgba(235, 244, 255, 0.08);
const LABEL: Color = Color::rgba(235, 244, 255, 0.7);

/// Arrow glyph for a trend direction key.
pub(super) fn trend_arrow(direction: &str) -> &'static str {
	match direction {
		"rising" => "\u{2191}",
		"falling" => "\u{2193}",
		_ => "\u{2192}",
	}
}

/// Pixel projection for the plot area. A flat series is padded by a
/// degree on each side so it draws mid-chart instead of on the frame.
#[derive(Clone, Copy, Debug)]
struct ChartScale {
	min: f64,
	max: f64,
	samples: usize,
}

impl ChartScale {
	fn new(min: f64, max: f64, samples: usize) -> Self {
		let (min, max) = if max - min < 1.0 {
			(min - 1.0, max + 1.0)
		} else {
			(min, max)
		};
		Self { min, max, samples }
	}

	fn x(&self, index: usize) -> f64 {
		let plot = CHART_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
		if self.samples <= 1 {
			return MARGIN_LEFT + plot / 2.0;
		}
		MARGIN_LEFT + plot * index as f64 / (self.samples - 1) as f64
	}

	fn y(&self, value: f64) -> f64 {
		let plot = CHART_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
		let t = ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0);
		MARGIN_TOP + plot * (1.0 - t)
	}
}

/// Min and max across every series in the trend block.
fn series_bounds(trend: &TrendReport) -> Option<(f64, f64)> {
	let mut min = f64::INFINITY;
	let mut max = f64::NEG_INFINITY;
	let all = trend
		.historical_temps
		.iter()
		.chain(&trend.smoothed_temps)
		.chain(&trend.predicted_temps);
	for v in all {
		min = min.min(*v);
		max = max.max(*v);
	}
	(min.is_finite() && max.is_finite()).then_some((min, max))
}

fn draw_chart(trend: &TrendReport, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, CHART_WIDTH, CHART_HEIGHT);
	let Some((min, max)) = series_bounds(trend) else {
		return;
	};
	let observed = &trend.historical_temps;
	let projected = &trend.predicted_temps;
	let scale = ChartScale::new(min, max, observed.len() + projected.len());

	draw_grid(ctx);
	draw_area(ctx, &scale, observed);
	draw_series(ctx, &scale, &trend.smoothed_temps, SMOOTHED, 1.5);
	draw_series(ctx, &scale, observed, OBSERVED, 2.0);
	draw_projection(ctx, &scale, observed, projected);
	draw_labels(ctx, &scale);
}

fn draw_grid(ctx: &CanvasRenderingContext2d) {
	ctx.set_stroke_style_str(&GRID.to_css());
	ctx.set_line_width(1.0);
	let plot = CHART_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
	for row in 0..=GRID_ROWS {
		let y = MARGIN_TOP + plot * row as f64 / GRID_ROWS as f64;
		ctx.begin_path();
		ctx.move_to(MARGIN_LEFT, y);
		ctx.line_to(CHART_WIDTH - MARGIN_RIGHT, y);
		ctx.stroke();
	}
}

fn draw_area(ctx: &CanvasRenderingContext2d, scale: &ChartScale, observed: &[f64]) {
	if observed.len() < 2 {
		return;
	}
	let bottom = CHART_HEIGHT - MARGIN_BOTTOM;
	let gradient = ctx.create_linear_gradient(0.0, MARGIN_TOP, 0.0, bottom);
	gradient
		.add_color_stop(0.0, &OBSERVED.with_alpha(0.25).to_css())
		.unwrap();
	gradient
		.add_color_stop(1.0, &OBSERVED.with_alpha(0.0).to_css())
		.unwrap();

	ctx.begin_path();
	ctx.move_to(scale.x(0), bottom);
	for (i, v) in observed.iter().enumerate() {
		ctx.line_to(scale.x(i), scale.y(*v));
	}
	ctx.line_to(scale.x(observed.len() - 1), bottom);
	ctx.close_path();
	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill();
}

fn draw_series(
	ctx: &CanvasRenderingContext2d,
	scale: &ChartScale,
	values: &[f64],
	color: Color,
	width: f64,
) {
	if values.len() < 2 {
		return;
	}
	ctx.set_stroke_style_str(&color.to_css());
	ctx.set_line_width(width);
	ctx.begin_path();
	for (i, v) in values.iter().enumerate() {
		let x = scale.x(i);
		let y = scale.y(*v);
		if i == 0 {
			ctx.move_to(x, y);
		} else {
			ctx.line_to(x, y);
		}
	}
	ctx.stroke();
}

fn draw_projection(
	ctx: &CanvasRenderingContext2d,
	scale: &ChartScale,
	observed: &[f64],
	projected: &[f64],
) {
	if projected.is_empty() {
		return;
	}
	ctx.set_stroke_style_str(&PROJECTED.to_css());
	ctx.set_line_width(2.0);
	let _ = ctx.set_line_dash(&js_sys::Array::of2(
		&JsValue::from_f64(6.0),
		&JsValue::from_f64(5.0),
	));

	ctx.begin_path();
	let mut started = false;
	if let Some(last) = observed.last() {
		ctx.move_to(scale.x(observed.len() - 1), scale.y(*last));
		started = true;
	}
	for (i, v) in projected.iter().enumerate() {
		let x = scale.x(observed.len() + i);
		let y = scale.y(*v);
		if started {
			ctx.line_to(x, y);
		} else {
			ctx.move_to(x, y);
			started = true;
		}
	}
	ctx.stroke();
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn draw_labels(ctx: &CanvasRenderingContext2d, scale: &ChartScale) {
	ctx.set_fill_style_str(&LABEL.to_css());
	ctx.set_font("11px system-ui, sans-serif");
	let _ = ctx.fill_text(&format!("{:.0}\u{b0}", scale.max), 6.0, MARGIN_TOP + 4.0);
	let _ = ctx.fill_text(
		&format!("{:.0}\u{b0}", scale.min),
		6.0,
		CHART_HEIGHT - MARGIN_BOTTOM + 4.0,
	);
}

/// Canvas chart of the analysis trend block. Drawn once per report;
/// there is no animation loop here.
#[component]
pub fn TrendPanel(
	/// Trend block of the analysis section.
	trend: TrendReport,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

	let arrow = trend_arrow(&trend.trend_direction);
	let direction = trend.trend_direction.clone();
	let caption = format!(
		"{} observed hours, {} projected, slope {:+.2}\u{b0}C/h, confidence {:.0}%",
		trend.historical_temps.len(),
		trend.predicted_temps.len(),
		trend.slope,
		trend.confidence
	);

	let chart = trend;
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Ok(Some(raw)) = canvas.get_context("2d") else {
			return;
		};
		let Ok(ctx) = raw.dyn_into::<CanvasRenderingContext2d>() else {
			return;
		};
		draw_chart(&chart, &ctx);
	});

	view! {
		<section class="panel trend-panel">
			<header class="panel-head">
				<h2>"Temperature trend"</h2>
				<span class="trend-direction">{arrow} " " {direction}</span>
			</header>
			<canvas node_ref=canvas_ref class="trend-canvas" width="640" height="240"></canvas>
			<p class="trend-caption">{caption}</p>
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn flat_series_pads_the_range() {
		let scale = ChartScale::new(20.0, 20.0, 5);
		assert_eq!(scale.min, 19.0);
		assert_eq!(scale.max, 21.0);
		let mid = MARGIN_TOP + (CHART_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM) / 2.0;
		assert!((scale.y(20.0) - mid).abs() < 1e-9);
	}

	#[test]
	fn y_maps_extremes_to_plot_edges() {
		let scale = ChartScale::new(10.0, 30.0, 10);
		assert!((scale.y(30.0) - MARGIN_TOP).abs() < 1e-9);
		assert!((scale.y(10.0) - (CHART_HEIGHT - MARGIN_BOTTOM)).abs() < 1e-9);
		assert!(scale.y(15.0) > scale.y(25.0));
	}

	#[test]
	fn y_clamps_outliers_to_the_plot() {
		let scale = ChartScale::new(10.0, 30.0, 10);
		assert_eq!(scale.y(100.0), scale.y(30.0));
		assert_eq!(scale.y(-40.0), scale.y(10.0));
	}

	#[test]
	fn x_spans_the_plot_area() {
		let scale = ChartScale::new(0.0, 10.0, 4);
		assert!((scale.x(0) - MARGIN_LEFT).abs() < 1e-9);
		assert!((scale.x(3) - (CHART_WIDTH - MARGIN_RIGHT)).abs() < 1e-9);
	}

	#[test]
	fn single_sample_centers() {
		let scale = ChartScale::new(0.0, 10.0, 1);
		let mid = MARGIN_LEFT + (CHART_WIDTH - MARGIN_LEFT - MARGIN_RIGHT) / 2.0;
		assert!((scale.x(0) - mid).abs() < 1e-9);
	}

	#[test]
	fn bounds_cover_every_series() {
		let trend = TrendReport {
			historical_temps: vec![12.0, 14.0],
			smoothed_temps: vec![11.5, 13.0],
			predicted_temps: vec![15.5],
			..TrendReport::default()
		};
		assert_eq!(series_bounds(&trend), Some((11.5, 15.5)));
	}

	#[test]
	fn empty_trend_has_no_bounds() {
		assert_eq!(series_bounds(&TrendReport::default()), None);
	}

	#[test]
	fn arrows_match_directions() {
		assert_eq!(trend_arrow("rising"), "\u{2191}");
		assert_eq!(trend_arrow("falling"), "\u{2193}");
		assert_eq!(trend_arrow("stable"), "\u{2192}");
		assert_eq!(trend_arrow("sideways"), "\u{2192}");
	}
}
