//! Weather theming for the page.
//!
//! Each weather category owns a fixed palette. Applying a theme writes CSS
//! custom properties on the document root, so the stylesheet (sky gradient,
//! panels, accents) follows the weather without any per-element updates.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Blend toward another color, `t` in 0..=1.
	pub fn lerp(self, other: Color, t: f64) -> Self {
		let t = t.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 * (1.0 - t) + other.r as f64 * t) as u8,
			g: (self.g as f64 * (1.0 - t) + other.g as f64 * t) as u8,
			b: (self.b as f64 * (1.0 - t) + other.b as f64 * t) as u8,
			a: self.a * (1.0 - t) + other.a * t,
		}
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Complete palette for one weather category.
#[derive(Clone, Debug)]
pub struct WeatherTheme {
	pub key: &'static str,
	pub label: &'static str,
	/// Top of the page's sky gradient.
	pub sky_top: Color,
	/// Bottom of the page's sky gradient.
	pub sky_bottom: Color,
	/// Accent for headings, buttons, and meter fills.
	pub accent: Color,
	/// Translucent panel background.
	pub panel: Color,
	/// Primary text color.
	pub ink: Color,
	/// Secondary text color.
	pub ink_muted: Color,
}

impl WeatherTheme {
	/// Deep polar blues for extreme cold.
	pub fn frost() -> Self {
		Self {
			key: "extreme-cold",
			label: "Extreme cold",
			sky_top: Color::rgb(11, 29, 51),
			sky_bottom: Color::rgb(29, 58, 95),
			accent: Color::rgb(143, 208, 255),
			panel: Color::rgba(14, 30, 50, 0.78),
			ink: Color::rgb(232, 240, 248),
			ink_muted: Color::rgb(150, 172, 196),
		}
	}

	/// Brisk steel blues for cold, windy days.
	pub fn chill() -> Self {
		Self {
			key: "cold",
			label: "Cold",
			sky_top: Color::rgb(20, 40, 62),
			sky_bottom: Color::rgb(43, 74, 102),
			accent: Color::rgb(127, 184, 230),
			panel: Color::rgba(18, 36, 56, 0.78),
			ink: Color::rgb(230, 238, 246),
			ink_muted: Color::rgb(148, 170, 192),
		}
	}

	/// Fresh sea-green over blue for pleasant weather.
	pub fn mild() -> Self {
		Self {
			key: "normal",
			label: "Mild",
			sky_top: Color::rgb(22, 50, 74),
			sky_bottom: Color::rgb(61, 102, 135),
			accent: Color::rgb(134, 209, 180),
			panel: Color::rgba(20, 42, 62, 0.76),
			ink: Color::rgb(234, 242, 246),
			ink_muted: Color::rgb(156, 178, 194),
		}
	}

	/// Golden dusk tones for warm evenings.
	pub fn balmy() -> Self {
		Self {
			key: "warm",
			label: "Warm",
			sky_top: Color::rgb(43, 42, 68),
			sky_bottom: Color::rgb(110, 84, 96),
			accent: Color::rgb(255, 205, 134),
			panel: Color::rgba(40, 34, 52, 0.76),
			ink: Color::rgb(246, 240, 234),
			ink_muted: Color::rgb(186, 170, 164),
		}
	}

	/// Dry ember reds for hot afternoons.
	pub fn swelter() -> Self {
		Self {
			key: "hot",
			label: "Hot",
			sky_top: Color::rgb(58, 36, 48),
			sky_bottom: Color::rgb(122, 74, 58),
			accent: Color::rgb(255, 158, 100),
			panel: Color::rgba(52, 32, 38, 0.78),
			ink: Color::rgb(248, 238, 230),
			ink_muted: Color::rgb(196, 168, 152),
		}
	}

	/// Scorched oranges for dangerous heat.
	pub fn furnace() -> Self {
		Self {
			key: "extreme-hot",
			label: "Extreme heat",
			sky_top: Color::rgb(64, 31, 36),
			sky_bottom: Color::rgb(138, 60, 42),
			accent: Color::rgb(255, 120, 71),
			panel: Color::rgba(58, 28, 28, 0.8),
			ink: Color::rgb(250, 236, 226),
			ink_muted: Color::rgb(204, 162, 142),
		}
	}

	/// Slate grays washed with blue for rain.
	pub fn rainfall() -> Self {
		Self {
			key: "rain",
			label: "Rain",
			sky_top: Color::rgb(26, 38, 51),
			sky_bottom: Color::rgb(51, 72, 92),
			accent: Color::rgb(111, 168, 220),
			panel: Color::rgba(22, 34, 46, 0.8),
			ink: Color::rgb(228, 236, 242),
			ink_muted: Color::rgb(144, 164, 182),
		}
	}

	/// Soft white-blues for snowfall.
	pub fn snowfall() -> Self {
		Self {
			key: "snow",
			label: "Snow",
			sky_top: Color::rgb(34, 51, 68),
			sky_bottom: Color::rgb(70, 88, 108),
			accent: Color::rgb(207, 226, 243),
			panel: Color::rgba(30, 44, 60, 0.76),
			ink: Color::rgb(238, 244, 250),
			ink_muted: Color::rgb(164, 182, 200),
		}
	}

	/// Bruised violet darkness for thunderstorms.
	pub fn thunder() -> Self {
		Self {
			key: "storm",
			label: "Storm",
			sky_top: Color::rgb(20, 18, 31),
			sky_bottom: Color::rgb(47, 42, 69),
			accent: Color::rgb(179, 157, 219),
			panel: Color::rgba(20, 17, 32, 0.82),
			ink: Color::rgb(234, 230, 244),
			ink_muted: Color::rgb(158, 150, 184),
		}
	}

	/// Flat desaturated grays for fog.
	pub fn mist() -> Self {
		Self {
			key: "fog",
			label: "Fog",
			sky_top: Color::rgb(35, 40, 48),
			sky_bottom: Color::rgb(73, 80, 92),
			accent: Color::rgb(170, 180, 192),
			panel: Color::rgba(32, 36, 44, 0.78),
			ink: Color::rgb(230, 234, 240),
			ink_muted: Color::rgb(154, 164, 176),
		}
	}

	/// Neutral blue fallback when no category is known.
	pub fn default_theme() -> Self {
		Self {
			key: "default",
			label: "Skycast",
			sky_top: Color::rgb(24, 36, 48),
			sky_bottom: Color::rgb(54, 72, 90),
			accent: Color::rgb(138, 180, 216),
			panel: Color::rgba(20, 30, 42, 0.78),
			ink: Color::rgb(230, 238, 244),
			ink_muted: Color::rgb(150, 168, 184),
		}
	}

	/// Look up the palette for a category key; unknown keys get the
	/// neutral fallback.
	pub fn for_category(key: &str) -> Self {
		match key {
			"extreme-cold" => Self::frost(),
			"cold" => Self::chill(),
			"normal" => Self::mild(),
			"warm" => Self::balmy(),
			"hot" => Self::swelter(),
			"extreme-hot" => Self::furnace(),
			"rain" => Self::rainfall(),
			"snow" => Self::snowfall(),
			"storm" => Self::thunder(),
			"fog" => Self::mist(),
			_ => Self::default_theme(),
		}
	}

	/// Write the palette onto the document root as CSS custom properties
	/// and tag the body with the category key. Missing document pieces are
	/// skipped quietly; theming is never load-bearing.
	pub fn apply(&self) {
		let Some(document) = web_sys::window().and_then(|w| w.document()) else {
			return;
		};
		if let Some(root) = document.document_element() {
			if let Ok(root) = root.dyn_into::<HtmlElement>() {
				let style = root.style();
				let _ = style.set_property("--sky-top", &self.sky_top.to_css());
				let _ = style.set_property("--sky-bottom", &self.sky_bottom.to_css());
				let _ = style.set_property("--accent", &self.accent.to_css());
				let _ = style.set_property("--panel", &self.panel.to_css());
				let _ = style.set_property("--ink", &self.ink.to_css());
				let _ = style.set_property("--ink-muted", &self.ink_muted.to_css());
			}
		}
		if let Some(body) = document.body() {
			let _ = body.set_attribute("data-weather", self.key);
		}
	}
}

impl Default for WeatherTheme {
	fn default() -> Self {
		Self::default_theme()
	}
}

/// Pick the effective weather category from the analysis temperature band
/// and the current condition icon. Severe conditions outrank the band, and
/// the API's underscore band keys are normalized to the page's hyphenated
/// category keys.
pub fn resolve_category(band_key: &str, icon_key: &str) -> &'static str {
	match icon_key {
		"thunderstorm" => "storm",
		"rain" => "rain",
		"snow" => "snow",
		"fog" => "fog",
		_ => match band_key {
			"extreme_cold" | "extreme-cold" => "extreme-cold",
			"cold" => "cold",
			"normal" => "normal",
			"warm" => "warm",
			"hot" => "hot",
			"extreme_hot" | "extreme-hot" => "extreme-hot",
			_ => "default",
		},
	}
}
