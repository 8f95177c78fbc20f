//! Mode registry and per-frame population state for the atmosphere canvas.
//!
//! [`Atmosphere`] owns the population and the frame clock but nothing
//! DOM-shaped: the component layer feeds it real animation-frame timestamps
//! and hands the result to `render`, while tests drive `advance` with
//! synthetic clocks. Created once per canvas, mutated every frame.

use log::debug;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::particle::{
	FLOAT_INITIAL, FLOAT_TARGET, GLOW_INITIAL, GLOW_TARGET, GlowOrb, HEAT_LINES, HeatLine,
	LightningFlash, Mote, Particle, RAIN_INITIAL, RAIN_TARGET, Raindrop, SHIMMER_INITIAL,
	SHIMMER_TARGET, SNOW_INITIAL, SNOW_TARGET, ShimmerPatch, Snowflake, WIND_INITIAL,
	WIND_TARGET, WindStreak,
};
use crate::consts::{
	FRAME_INTERVAL_MS, LIGHTNING_GAP_MAX_MS, LIGHTNING_GAP_MIN_MS, MAX_FRAME_SCALE,
};

/// Active particle kind, or [`Mode::Off`] for no effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
	Off,
	Snow,
	Rain,
	Wind,
	Float,
	Glow,
	Shimmer,
	Heatwave,
	Lightning,
}

/// Fixed weather-category → mode table. Unrecognized keys get the quiet
/// default effect rather than an error.
pub fn mode_for_category(key: &str) -> Mode {
	match key {
		"extreme-cold" | "snow" => Mode::Snow,
		"cold" => Mode::Wind,
		"rain" => Mode::Rain,
		"warm" => Mode::Glow,
		"hot" => Mode::Shimmer,
		"extreme-hot" => Mode::Heatwave,
		"storm" => Mode::Lightning,
		"normal" | "fog" | "default" => Mode::Float,
		_ => Mode::Float,
	}
}

/// Particle population plus the clocks that drive it.
///
/// All randomness flows through the seeded [`Pcg32`], so two instances
/// constructed with the same seed and fed the same timestamps evolve
/// identically.
pub struct Atmosphere {
	mode: Mode,
	particles: Vec<Particle>,
	width: f64,
	height: f64,
	rng: Pcg32,
	/// Timestamp of the previous `advance`, for the elapsed-time step.
	last_frame: Option<f64>,
	/// Timestamp of the last lightning flash (or of entering the mode).
	last_flash: Option<f64>,
	/// Current randomly drawn gap until the next flash, in ms.
	flash_gap: f64,
}

impl Atmosphere {
	pub fn new(width: f64, height: f64, seed: u64) -> Self {
		let mut rng = Pcg32::seed_from_u64(seed);
		let flash_gap = rng.random_range(LIGHTNING_GAP_MIN_MS..LIGHTNING_GAP_MAX_MS);
		Self {
			mode: Mode::Off,
			particles: Vec::new(),
			width,
			height,
			rng,
			last_frame: None,
			last_flash: None,
			flash_gap,
		}
	}

	pub fn mode(&self) -> Mode {
		self.mode
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	pub fn size(&self) -> (f64, f64) {
		(self.width, self.height)
	}

	/// Switch the active effect. A no-op when `mode` is already active;
	/// otherwise the population is discarded, the frame clock reset, and
	/// the new kind's initial batch spawned (lightning starts empty and
	/// waits for its first trigger).
	pub fn set_mode(&mut self, mode: Mode) {
		if mode == self.mode {
			return;
		}
		debug!("atmosphere mode {:?} -> {:?}", self.mode, mode);
		self.mode = mode;
		self.particles.clear();
		self.last_frame = None;
		self.last_flash = None;
		self.flash_gap = self.rng.random_range(LIGHTNING_GAP_MIN_MS..LIGHTNING_GAP_MAX_MS);
		self.seed_initial();
	}

	/// Map a weather-category key through [`mode_for_category`].
	pub fn apply_category(&mut self, key: &str) {
		self.set_mode(mode_for_category(key));
	}

	/// Resynchronize with the viewport. Existing particles keep their
	/// positions; update wrapping and future spawns use the new bounds.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	/// Advance one frame at the given timestamp (ms). The elapsed time is
	/// expressed as a multiple of the nominal frame interval and clamped,
	/// so a backgrounded tab resumes without position jumps.
	pub fn advance(&mut self, now_ms: f64) {
		if self.mode == Mode::Off {
			return;
		}
		let step = match self.last_frame {
			None => 1.0,
			Some(prev) => ((now_ms - prev) / FRAME_INTERVAL_MS).clamp(0.0, MAX_FRAME_SCALE),
		};
		self.last_frame = Some(now_ms);

		let (width, height) = (self.width, self.height);
		for p in &mut self.particles {
			p.update(step, width, height);
		}
		self.particles.retain(Particle::is_alive);

		if self.mode == Mode::Lightning {
			self.tick_flash(now_ms);
		} else {
			self.top_up();
		}
	}

	fn seed_initial(&mut self) {
		match self.mode {
			Mode::Off | Mode::Lightning => {}
			Mode::Snow => self.push_snow(SNOW_INITIAL, true),
			Mode::Rain => self.push_rain(RAIN_INITIAL, true),
			Mode::Wind => self.push_wind(WIND_INITIAL),
			Mode::Float => self.push_float(FLOAT_INITIAL, true),
			Mode::Glow => self.push_glow(GLOW_INITIAL),
			Mode::Shimmer => self.push_shimmer(SHIMMER_INITIAL),
			Mode::Heatwave => {
				self.push_shimmer(SHIMMER_INITIAL);
				self.push_heat_lines(HEAT_LINES);
			}
		}
	}

	/// Respawn toward each kind's steady-state target at its entry edge.
	fn top_up(&mut self) {
		match self.mode {
			Mode::Off | Mode::Lightning => {}
			Mode::Snow => {
				let missing = SNOW_TARGET.saturating_sub(self.particles.len());
				self.push_snow(missing, false);
			}
			Mode::Rain => {
				let missing = RAIN_TARGET.saturating_sub(self.particles.len());
				self.push_rain(missing, false);
			}
			Mode::Wind => {
				let missing = WIND_TARGET.saturating_sub(self.particles.len());
				self.push_wind(missing);
			}
			Mode::Float => {
				let missing = FLOAT_TARGET.saturating_sub(self.particles.len());
				self.push_float(missing, false);
			}
			Mode::Glow => {
				let missing = GLOW_TARGET.saturating_sub(self.particles.len());
				self.push_glow(missing);
			}
			Mode::Shimmer => {
				let missing = SHIMMER_TARGET.saturating_sub(self.particles.len());
				self.push_shimmer(missing);
			}
			Mode::Heatwave => {
				let patches = self
					.particles
					.iter()
					.filter(|p| matches!(p, Particle::Shimmer(_)))
					.count();
				let lines = self.particles.len() - patches;
				self.push_shimmer(SHIMMER_TARGET.saturating_sub(patches));
				self.push_heat_lines(HEAT_LINES.saturating_sub(lines));
			}
		}
	}

	/// Spawn a flash once the elapsed real time since the last one clears
	/// the current randomly drawn threshold, then redraw the threshold.
	fn tick_flash(&mut self, now_ms: f64) {
		let since = match self.last_flash {
			Some(t) => now_ms - t,
			None => {
				// Mode just started; count from this frame.
				self.last_flash = Some(now_ms);
				return;
			}
		};
		if since >= self.flash_gap {
			let flash = LightningFlash::spawn(&mut self.rng);
			self.particles.push(Particle::Flash(flash));
			self.last_flash = Some(now_ms);
			self.flash_gap = self.rng.random_range(LIGHTNING_GAP_MIN_MS..LIGHTNING_GAP_MAX_MS);
		}
	}

	fn push_snow(&mut self, n: usize, scatter: bool) {
		for _ in 0..n {
			let p = Snowflake::spawn(&mut self.rng, self.width, self.height, scatter);
			self.particles.push(Particle::Snow(p));
		}
	}

	fn push_rain(&mut self, n: usize, scatter: bool) {
		for _ in 0..n {
			let p = Raindrop::spawn(&mut self.rng, self.width, self.height, scatter);
			self.particles.push(Particle::Rain(p));
		}
	}

	fn push_wind(&mut self, n: usize) {
		for _ in 0..n {
			let p = WindStreak::spawn(&mut self.rng, self.height);
			self.particles.push(Particle::Wind(p));
		}
	}

	fn push_float(&mut self, n: usize, scatter: bool) {
		for _ in 0..n {
			let p = Mote::spawn(&mut self.rng, self.width, self.height, scatter);
			self.particles.push(Particle::Float(p));
		}
	}

	fn push_glow(&mut self, n: usize) {
		for _ in 0..n {
			let p = GlowOrb::spawn(&mut self.rng, self.width, self.height);
			self.particles.push(Particle::Glow(p));
		}
	}

	fn push_shimmer(&mut self, n: usize) {
		for _ in 0..n {
			let p = ShimmerPatch::spawn(&mut self.rng, self.width, self.height);
			self.particles.push(Particle::Shimmer(p));
		}
	}

	fn push_heat_lines(&mut self, n: usize) {
		for _ in 0..n {
			let p = HeatLine::spawn(&mut self.rng, self.height);
			self.particles.push(Particle::HeatLine(p));
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn engine() -> Atmosphere {
		Atmosphere::new(800.0, 600.0, 42)
	}

	fn first_snow_xy(a: &Atmosphere) -> (f64, f64) {
		match &a.particles()[0] {
			Particle::Snow(f) => (f.x, f.y),
			other => panic!("expected a snowflake, got {other:?}"),
		}
	}

	#[test]
	fn initial_batch_matches_documented_counts() {
		let cases = [
			(Mode::Snow, SNOW_INITIAL),
			(Mode::Rain, RAIN_INITIAL),
			(Mode::Wind, WIND_INITIAL),
			(Mode::Float, FLOAT_INITIAL),
			(Mode::Glow, GLOW_INITIAL),
			(Mode::Shimmer, SHIMMER_INITIAL),
			(Mode::Lightning, 0),
		];
		for (mode, expected) in cases {
			let mut a = engine();
			a.set_mode(mode);
			assert_eq!(a.particles().len(), expected, "initial count for {mode:?}");
		}
	}

	#[test]
	fn heatwave_mixes_shimmer_patches_and_heat_lines() {
		let mut a = engine();
		a.set_mode(Mode::Heatwave);
		let patches = a
			.particles()
			.iter()
			.filter(|p| matches!(p, Particle::Shimmer(_)))
			.count();
		let lines = a
			.particles()
			.iter()
			.filter(|p| matches!(p, Particle::HeatLine(_)))
			.count();
		assert_eq!(patches, SHIMMER_INITIAL);
		assert_eq!(lines, HEAT_LINES);
		assert_eq!(a.particles().len(), SHIMMER_INITIAL + HEAT_LINES);
	}

	#[test]
	fn repeating_the_active_mode_changes_nothing() {
		let mut a = engine();
		a.set_mode(Mode::Snow);
		a.advance(0.0);
		a.advance(16.0);
		let len = a.particles().len();
		let snapshot = first_snow_xy(&a);

		a.set_mode(Mode::Snow);
		assert_eq!(a.particles().len(), len);
		assert_eq!(first_snow_xy(&a), snapshot);
	}

	#[test]
	fn switching_modes_discards_the_old_population() {
		let mut a = engine();
		a.set_mode(Mode::Snow);
		a.advance(0.0);
		a.set_mode(Mode::Rain);
		assert_eq!(a.particles().len(), RAIN_INITIAL);
		assert!(a.particles().iter().all(|p| matches!(p, Particle::Rain(_))));
	}

	#[test]
	fn off_mode_empties_and_stays_empty() {
		let mut a = engine();
		a.set_mode(Mode::Snow);
		a.set_mode(Mode::Off);
		assert!(a.particles().is_empty());
		a.advance(16.0);
		a.advance(32.0);
		assert!(a.particles().is_empty());
	}

	#[test]
	fn top_up_reaches_steady_state_target() {
		let mut a = engine();
		a.set_mode(Mode::Snow);
		a.advance(0.0);
		assert_eq!(a.particles().len(), SNOW_TARGET);

		let mut a = engine();
		a.set_mode(Mode::Wind);
		a.advance(0.0);
		assert_eq!(a.particles().len(), WIND_TARGET);
	}

	#[test]
	fn frame_step_is_clamped_after_a_stall() {
		let mut a = engine();
		a.set_mode(Mode::Float);
		a.advance(0.0);
		// A 100 s stall must advance life by at most three nominal frames.
		a.advance(100_000.0);
		match &a.particles()[0] {
			Particle::Float(m) => assert!((m.life - 4.0).abs() < 1e-9),
			other => panic!("expected a mote, got {other:?}"),
		}
	}

	#[test]
	fn first_frame_after_mode_change_uses_unit_step() {
		let mut a = engine();
		a.set_mode(Mode::Float);
		// Large timestamp, but no previous frame to measure against.
		a.advance(500_000.0);
		match &a.particles()[0] {
			Particle::Float(m) => assert!((m.life - 1.0).abs() < 1e-9),
			other => panic!("expected a mote, got {other:?}"),
		}
	}

	#[test]
	fn lightning_flash_spacing_honors_the_gap_window() {
		let mut a = engine();
		a.set_mode(Mode::Lightning);

		let mut spawn_times = Vec::new();
		let mut prev_len = 0;
		let mut now = 0.0;
		while now <= 120_000.0 {
			a.advance(now);
			if a.particles().len() > prev_len {
				spawn_times.push(now);
			}
			prev_len = a.particles().len();
			now += 16.0;
		}

		assert!(spawn_times.len() >= 10, "too few flashes: {}", spawn_times.len());
		for pair in spawn_times.windows(2) {
			let gap = pair[1] - pair[0];
			assert!(gap >= LIGHTNING_GAP_MIN_MS, "flashes {gap} ms apart");
			assert!(gap <= LIGHTNING_GAP_MAX_MS + 16.0, "flash overdue by {gap} ms");
		}
	}

	#[test]
	fn category_keys_map_to_the_documented_modes() {
		let cases = [
			("extreme-cold", Mode::Snow),
			("cold", Mode::Wind),
			("normal", Mode::Float),
			("warm", Mode::Glow),
			("hot", Mode::Shimmer),
			("extreme-hot", Mode::Heatwave),
			("rain", Mode::Rain),
			("snow", Mode::Snow),
			("storm", Mode::Lightning),
			("fog", Mode::Float),
			("default", Mode::Float),
			("blizzard", Mode::Float),
			("", Mode::Float),
		];
		for (key, expected) in cases {
			assert_eq!(mode_for_category(key), expected, "category {key:?}");
			let mut a = engine();
			a.apply_category(key);
			assert_eq!(a.mode(), expected);
		}
	}

	#[test]
	fn mode_lifecycle_runs_snow_off_heatwave() {
		let mut a = engine();

		a.set_mode(Mode::Snow);
		assert_eq!(a.particles().len(), SNOW_INITIAL);

		a.set_mode(Mode::Snow);
		assert_eq!(a.particles().len(), SNOW_INITIAL);

		a.set_mode(Mode::Off);
		assert!(a.particles().is_empty());

		a.apply_category("extreme-hot");
		assert_eq!(a.mode(), Mode::Heatwave);
		let patches = a
			.particles()
			.iter()
			.filter(|p| matches!(p, Particle::Shimmer(_)))
			.count();
		let lines = a
			.particles()
			.iter()
			.filter(|p| matches!(p, Particle::HeatLine(_)))
			.count();
		assert_eq!((patches, lines), (SHIMMER_INITIAL, HEAT_LINES));
		assert_eq!(a.particles().len(), 28);
	}

	#[test]
	fn resize_applies_to_wrapping_and_new_spawns() {
		let mut a = engine();
		a.set_mode(Mode::Snow);
		a.resize(100.0, 50.0);
		a.advance(0.0);
		for p in a.particles() {
			if let Particle::Snow(f) = p {
				assert!(f.x <= 110.0, "flake at x={} after shrink", f.x);
			}
		}
	}

	#[test]
	fn seeded_engines_evolve_identically() {
		let mut a = engine();
		let mut b = engine();
		a.set_mode(Mode::Snow);
		b.set_mode(Mode::Snow);
		for now in [0.0, 16.0, 33.0, 50.0] {
			a.advance(now);
			b.advance(now);
		}
		assert_eq!(a.particles().len(), b.particles().len());
		assert_eq!(first_snow_xy(&a), first_snow_xy(&b));
	}
}
