//! Weather particle kinds and their per-frame kinematics.
//!
//! Each kind is a plain struct with a `spawn` and an `update`; [`Particle`]
//! is the sum type the engine stores, so one population can mix kinds (the
//! heatwave mode runs shimmer patches and heat lines together). Draw code
//! lives in `render`; nothing here touches the DOM, which keeps every kind
//! testable on the host.

use std::f64::consts::{PI, TAU};

use rand::Rng;
use rand_pcg::Pcg32;

/// Margin (px) past an edge before an exiting particle is retired, so
/// nothing visibly pops out of existence at the boundary.
pub(crate) const EDGE_MARGIN: f64 = 10.0;

/// Lifetime of a lightning flash, in nominal frames.
pub(crate) const FLASH_LIFE: f64 = 8.0;

/// Fraction of a float mote's life spent fading in.
pub(crate) const FLOAT_RISE: f64 = 0.2;

/// Fraction of glow/shimmer life spent fading in.
pub(crate) const PULSE_RISE: f64 = 0.3;

// Initial batch sizes and steady-state targets per kind.
pub(crate) const SNOW_INITIAL: usize = 100;
pub(crate) const SNOW_TARGET: usize = 120;
pub(crate) const RAIN_INITIAL: usize = 180;
pub(crate) const RAIN_TARGET: usize = 200;
pub(crate) const WIND_INITIAL: usize = 40;
pub(crate) const WIND_TARGET: usize = 60;
pub(crate) const FLOAT_INITIAL: usize = 40;
pub(crate) const FLOAT_TARGET: usize = 50;
pub(crate) const GLOW_INITIAL: usize = 30;
pub(crate) const GLOW_TARGET: usize = 40;
pub(crate) const SHIMMER_INITIAL: usize = 20;
pub(crate) const SHIMMER_TARGET: usize = 30;
pub(crate) const HEAT_LINES: usize = 8;

/// Rise-then-fall opacity envelope over a particle's life.
///
/// `progress` is life divided by maximum life; `rise` is the fraction of
/// life spent ramping up. Returns 0 at both ends and 1 at the breakpoint,
/// linear on each side.
pub(crate) fn envelope(progress: f64, rise: f64) -> f64 {
	if progress <= 0.0 || progress >= 1.0 {
		0.0
	} else if progress < rise {
		progress / rise
	} else {
		(1.0 - progress) / (1.0 - rise)
	}
}

/// Lightning flash envelope: ramp up over the first 30% of life, hold flat
/// to 60%, then fall to zero.
pub(crate) fn flash_envelope(progress: f64) -> f64 {
	if progress <= 0.0 || progress >= 1.0 {
		0.0
	} else if progress < 0.3 {
		progress / 0.3
	} else if progress < 0.6 {
		1.0
	} else {
		(1.0 - progress) / 0.4
	}
}

/// Falling snowflake with a sinusoidal horizontal wobble.
#[derive(Clone, Debug)]
pub struct Snowflake {
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	pub fall: f64,
	pub drift: f64,
	pub sway: f64,
	pub phase: f64,
	pub phase_rate: f64,
	pub alpha: f64,
	pub alive: bool,
}

impl Snowflake {
	pub fn spawn(rng: &mut Pcg32, width: f64, height: f64, scatter: bool) -> Self {
		let radius = rng.random_range(1.0..3.2);
		Self {
			x: rng.random_range(0.0..width.max(1.0)),
			y: if scatter {
				rng.random_range(0.0..height.max(1.0))
			} else {
				-radius - rng.random_range(0.0..20.0)
			},
			radius,
			fall: rng.random_range(0.7..2.2),
			drift: rng.random_range(-0.4..0.6),
			sway: rng.random_range(0.2..0.9),
			phase: rng.random_range(0.0..TAU),
			phase_rate: rng.random_range(0.02..0.06),
			alpha: rng.random_range(0.4..0.95),
			alive: true,
		}
	}

	pub fn update(&mut self, step: f64, width: f64, height: f64) {
		self.phase += self.phase_rate * step;
		self.x += (self.drift + self.phase.sin() * self.sway) * step;
		self.y += self.fall * step;

		// Wrap sideways drift so flakes stay in play until they land.
		if self.x < -EDGE_MARGIN {
			self.x = width + EDGE_MARGIN;
		} else if self.x > width + EDGE_MARGIN {
			self.x = -EDGE_MARGIN;
		}
		if self.y > height + EDGE_MARGIN {
			self.alive = false;
		}
	}
}

/// Fast-falling raindrop, drawn as a short angled streak.
#[derive(Clone, Debug)]
pub struct Raindrop {
	pub x: f64,
	pub y: f64,
	pub length: f64,
	pub fall: f64,
	pub drift: f64,
	pub alpha: f64,
	pub alive: bool,
}

impl Raindrop {
	pub fn spawn(rng: &mut Pcg32, width: f64, height: f64, scatter: bool) -> Self {
		let length = rng.random_range(12.0..24.0);
		Self {
			x: rng.random_range(0.0..width.max(1.0)),
			y: if scatter {
				rng.random_range(0.0..height.max(1.0))
			} else {
				-length - rng.random_range(0.0..40.0)
			},
			length,
			fall: rng.random_range(11.0..19.0),
			drift: rng.random_range(1.0..2.6),
			alpha: rng.random_range(0.25..0.6),
			alive: true,
		}
	}

	pub fn update(&mut self, step: f64, width: f64, height: f64) {
		self.x += self.drift * step;
		self.y += self.fall * step;
		if self.x > width + EDGE_MARGIN {
			self.x = -EDGE_MARGIN;
		}
		// Gone once the streak's tail clears the bottom edge.
		if self.y - self.length > height {
			self.alive = false;
		}
	}
}

/// Horizontal wind streak crossing left to right.
#[derive(Clone, Debug)]
pub struct WindStreak {
	pub x: f64,
	pub y: f64,
	pub length: f64,
	pub speed: f64,
	pub thickness: f64,
	pub alpha: f64,
	pub alive: bool,
}

impl WindStreak {
	pub fn spawn(rng: &mut Pcg32, height: f64) -> Self {
		let length = rng.random_range(30.0..90.0);
		Self {
			// Longer streaks read as nearer, so they move faster.
			x: -length,
			y: rng.random_range(0.0..height.max(1.0)),
			length,
			speed: 2.0 + length * 0.05,
			thickness: rng.random_range(1.0..2.5),
			alpha: rng.random_range(0.15..0.45),
			alive: true,
		}
	}

	pub fn update(&mut self, step: f64, width: f64) {
		self.x += self.speed * step;
		if self.x > width {
			self.alive = false;
		}
	}
}

/// Slowly rising mote with an envelope-driven opacity.
#[derive(Clone, Debug)]
pub struct Mote {
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	pub rise: f64,
	pub drift: f64,
	pub life: f64,
	pub span: f64,
	pub peak: f64,
	pub alpha: f64,
	pub alive: bool,
}

impl Mote {
	pub fn spawn(rng: &mut Pcg32, width: f64, height: f64, scatter: bool) -> Self {
		Self {
			x: rng.random_range(0.0..width.max(1.0)),
			y: if scatter {
				rng.random_range(0.0..height.max(1.0))
			} else {
				height - rng.random_range(0.0..30.0)
			},
			radius: rng.random_range(1.5..4.0),
			rise: rng.random_range(0.25..0.8),
			drift: rng.random_range(-0.3..0.3),
			life: 0.0,
			span: rng.random_range(240.0..480.0),
			peak: rng.random_range(0.3..0.8),
			alpha: 0.0,
			alive: true,
		}
	}

	pub fn update(&mut self, step: f64, width: f64) {
		self.life += step;
		if self.life >= self.span {
			self.alive = false;
			return;
		}
		self.y -= self.rise * step;
		self.x += self.drift * step;
		if self.x < -EDGE_MARGIN {
			self.x = width + EDGE_MARGIN;
		} else if self.x > width + EDGE_MARGIN {
			self.x = -EDGE_MARGIN;
		}
		if self.y < -EDGE_MARGIN {
			self.alive = false;
		}
		self.alpha = self.peak * envelope(self.life / self.span, FLOAT_RISE);
	}
}

/// Stationary soft radial glow.
#[derive(Clone, Debug)]
pub struct GlowOrb {
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	pub life: f64,
	pub span: f64,
	pub peak: f64,
	pub alpha: f64,
	pub alive: bool,
}

impl GlowOrb {
	pub fn spawn(rng: &mut Pcg32, width: f64, height: f64) -> Self {
		Self {
			x: rng.random_range(0.0..width.max(1.0)),
			y: rng.random_range(0.0..height.max(1.0)),
			radius: rng.random_range(18.0..55.0),
			life: 0.0,
			span: rng.random_range(200.0..380.0),
			peak: rng.random_range(0.12..0.35),
			alpha: 0.0,
			alive: true,
		}
	}

	pub fn update(&mut self, step: f64) {
		self.life += step;
		if self.life >= self.span {
			self.alive = false;
			return;
		}
		self.alpha = self.peak * envelope(self.life / self.span, PULSE_RISE);
	}
}

/// Blurred heat-shimmer patch rising out of the lower half of the surface.
#[derive(Clone, Debug)]
pub struct ShimmerPatch {
	pub x: f64,
	pub y: f64,
	pub radius_x: f64,
	pub radius_y: f64,
	pub rise: f64,
	pub life: f64,
	pub span: f64,
	pub peak: f64,
	pub alpha: f64,
	pub alive: bool,
}

impl ShimmerPatch {
	pub fn spawn(rng: &mut Pcg32, width: f64, height: f64) -> Self {
		let height = height.max(1.0);
		Self {
			x: rng.random_range(0.0..width.max(1.0)),
			y: rng.random_range(height * 0.5..height),
			radius_x: rng.random_range(20.0..55.0),
			radius_y: rng.random_range(5.0..13.0),
			rise: rng.random_range(0.1..0.45),
			life: 0.0,
			span: rng.random_range(200.0..380.0),
			peak: rng.random_range(0.08..0.28),
			alpha: 0.0,
			alive: true,
		}
	}

	pub fn update(&mut self, step: f64) {
		self.life += step;
		if self.life >= self.span {
			self.alive = false;
			return;
		}
		self.y -= self.rise * step;
		self.alpha = self.peak * envelope(self.life / self.span, PULSE_RISE);
	}
}

/// Full-width heat-distortion line pulsing once over its life.
#[derive(Clone, Debug)]
pub struct HeatLine {
	pub y: f64,
	pub thickness: f64,
	pub life: f64,
	pub span: f64,
	pub peak: f64,
	pub alpha: f64,
	pub alive: bool,
}

impl HeatLine {
	pub fn spawn(rng: &mut Pcg32, height: f64) -> Self {
		let height = height.max(1.0);
		Self {
			// Confined to the lower 40% where the ground haze sits.
			y: rng.random_range(height * 0.6..height),
			thickness: rng.random_range(1.0..3.0),
			life: 0.0,
			span: rng.random_range(140.0..320.0),
			peak: rng.random_range(0.15..0.4),
			alpha: 0.0,
			alive: true,
		}
	}

	pub fn update(&mut self, step: f64) {
		self.life += step;
		if self.life >= self.span {
			self.alive = false;
			return;
		}
		self.alpha = self.peak * (PI * self.life / self.span).sin();
	}
}

/// Full-surface lightning flash overlay.
#[derive(Clone, Debug)]
pub struct LightningFlash {
	pub life: f64,
	pub peak: f64,
	pub alpha: f64,
	pub alive: bool,
}

impl LightningFlash {
	pub fn spawn(rng: &mut Pcg32) -> Self {
		Self {
			life: 0.0,
			peak: rng.random_range(0.25..0.5),
			alpha: 0.0,
			alive: true,
		}
	}

	pub fn update(&mut self, step: f64) {
		self.life += step;
		if self.life >= FLASH_LIFE {
			self.alive = false;
			return;
		}
		self.alpha = self.peak * flash_envelope(self.life / FLASH_LIFE);
	}
}

/// Sum of all weather particle kinds.
#[derive(Clone, Debug)]
pub enum Particle {
	Snow(Snowflake),
	Rain(Raindrop),
	Wind(WindStreak),
	Float(Mote),
	Glow(GlowOrb),
	Shimmer(ShimmerPatch),
	HeatLine(HeatLine),
	Flash(LightningFlash),
}

impl Particle {
	/// Advance one frame; `step` is the clamped nominal-frame multiplier.
	pub fn update(&mut self, step: f64, width: f64, height: f64) {
		match self {
			Particle::Snow(p) => p.update(step, width, height),
			Particle::Rain(p) => p.update(step, width, height),
			Particle::Wind(p) => p.update(step, width),
			Particle::Float(p) => p.update(step, width),
			Particle::Glow(p) => p.update(step),
			Particle::Shimmer(p) => p.update(step),
			Particle::HeatLine(p) => p.update(step),
			Particle::Flash(p) => p.update(step),
		}
	}

	pub fn is_alive(&self) -> bool {
		match self {
			Particle::Snow(p) => p.alive,
			Particle::Rain(p) => p.alive,
			Particle::Wind(p) => p.alive,
			Particle::Float(p) => p.alive,
			Particle::Glow(p) => p.alive,
			Particle::Shimmer(p) => p.alive,
			Particle::HeatLine(p) => p.alive,
			Particle::Flash(p) => p.alive,
		}
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;

	use super::*;

	fn rng() -> Pcg32 {
		Pcg32::seed_from_u64(7)
	}

	#[test]
	fn envelope_is_zero_at_both_ends_and_peaks_at_breakpoint() {
		for rise in [FLOAT_RISE, PULSE_RISE] {
			assert_eq!(envelope(0.0, rise), 0.0);
			assert_eq!(envelope(1.0, rise), 0.0);
			assert!((envelope(rise, rise) - 1.0).abs() < 1e-9);
		}
	}

	#[test]
	fn envelope_rises_then_falls_monotonically() {
		let rise = FLOAT_RISE;
		let mut prev = 0.0;
		for i in 1..=20 {
			let p = rise * i as f64 / 20.0;
			let v = envelope(p, rise);
			assert!(v >= prev, "rising segment dipped at progress {p}");
			prev = v;
		}
		for i in 1..=20 {
			let p = rise + (1.0 - rise) * i as f64 / 20.0;
			let v = envelope(p, rise);
			assert!(v <= prev, "falling segment rose at progress {p}");
			prev = v;
		}
		assert_eq!(prev, 0.0);
	}

	#[test]
	fn flash_envelope_ramps_holds_then_falls() {
		assert_eq!(flash_envelope(0.0), 0.0);
		assert!((flash_envelope(0.15) - 0.5).abs() < 1e-9);
		assert_eq!(flash_envelope(0.3), 1.0);
		assert_eq!(flash_envelope(0.45), 1.0);
		assert!((flash_envelope(0.8) - 0.5).abs() < 1e-9);
		assert_eq!(flash_envelope(1.0), 0.0);
	}

	#[test]
	fn snowflake_dies_past_bottom_margin() {
		let mut rng = rng();
		let mut flake = Snowflake::spawn(&mut rng, 800.0, 600.0, true);
		flake.y = 609.0;
		flake.fall = 2.0;
		flake.update(1.0, 800.0, 600.0);
		assert!(flake.y > 610.0);
		assert!(!flake.alive);
	}

	#[test]
	fn snowflake_survives_inside_bottom_margin() {
		let mut rng = rng();
		let mut flake = Snowflake::spawn(&mut rng, 800.0, 600.0, true);
		flake.y = 605.0;
		flake.fall = 1.0;
		flake.update(1.0, 800.0, 600.0);
		assert!(flake.alive);
	}

	#[test]
	fn raindrop_exits_when_tail_clears_bottom() {
		let mut rng = rng();
		let mut drop = Raindrop::spawn(&mut rng, 800.0, 600.0, true);
		drop.y = 600.0 + drop.length - 1.0;
		drop.update(1.0, 800.0, 600.0);
		assert!(!drop.alive);
	}

	#[test]
	fn wind_streak_enters_left_and_dies_past_right_edge() {
		let mut rng = rng();
		let mut streak = WindStreak::spawn(&mut rng, 600.0);
		assert_eq!(streak.x, -streak.length);
		streak.x = 799.0;
		streak.update(40.0 / streak.speed, 800.0);
		assert!(!streak.alive);
	}

	#[test]
	fn mote_opacity_follows_envelope_over_life() {
		let mut rng = rng();
		let mut mote = Mote::spawn(&mut rng, 800.0, 600.0, false);
		assert_eq!(mote.alpha, 0.0);

		let peak_life = mote.span * FLOAT_RISE;
		let mut max_seen: f64 = 0.0;
		let mut steps = 0;
		while mote.alive {
			mote.update(1.0, 800.0);
			max_seen = max_seen.max(mote.alpha);
			steps += 1;
			assert!(steps < 1_000, "mote never expired");
		}
		assert!((max_seen - mote.peak).abs() < mote.peak / peak_life + 1e-9);
	}

	#[test]
	fn heat_line_pulses_once_and_expires() {
		let mut rng = rng();
		let mut line = HeatLine::spawn(&mut rng, 600.0);
		assert!(line.y >= 360.0 && line.y <= 600.0);

		line.update(line.span / 2.0);
		assert!((line.alpha - line.peak).abs() < 1e-6);
		line.update(line.span);
		assert!(!line.alive);
	}

	#[test]
	fn flash_expires_after_eight_ticks() {
		let mut rng = rng();
		let mut flash = LightningFlash::spawn(&mut rng);
		for _ in 0..7 {
			flash.update(1.0);
			assert!(flash.alive);
		}
		flash.update(1.0);
		assert!(!flash.alive);
	}

	#[test]
	fn spawn_tolerates_zero_sized_surface() {
		let mut rng = rng();
		let flake = Snowflake::spawn(&mut rng, 0.0, 0.0, true);
		assert!(flake.alive);
		let patch = ShimmerPatch::spawn(&mut rng, 0.0, 0.0);
		assert!(patch.alive);
	}
}
