//! Glyphs for the backend's fixed `icon_key` vocabulary.

/// Map an icon key to a display glyph. Unknown keys get the overcast
/// glyph, matching the backend's own fallback.
pub fn glyph(icon_key: &str) -> &'static str {
	match icon_key {
		"sunny" => "\u{2600}\u{fe0f}",
		"clear-night" => "\u{1f319}",
		"partly-cloudy" => "\u{26c5}",
		"cloudy" => "\u{2601}\u{fe0f}",
		"fog" => "\u{1f32b}\u{fe0f}",
		"rain" => "\u{1f327}\u{fe0f}",
		"snow" => "\u{2744}\u{fe0f}",
		"thunderstorm" => "\u{26c8}\u{fe0f}",
		_ => "\u{2601}\u{fe0f}",
	}
}
