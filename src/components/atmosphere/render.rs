//! Canvas drawing for the atmosphere population.
//!
//! One pass per frame: clear the surface, then draw every live particle in
//! population order. Per-particle opacity is computed by the update step,
//! so drawing only reads state. Kind colors are fixed; the page palette
//! underneath the (transparent) canvas carries the weather mood.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::engine::Atmosphere;
use super::particle::{
	GlowOrb, HeatLine, LightningFlash, Mote, Particle, Raindrop, ShimmerPatch, Snowflake,
	WindStreak,
};
use crate::theme::Color;

const SNOW_COLOR: Color = Color::rgb(255, 255, 255);
const RAIN_COLOR: Color = Color::rgb(173, 204, 255);
const WIND_COLOR: Color = Color::rgb(210, 230, 245);
const MOTE_COLOR: Color = Color::rgb(240, 244, 250);
const GLOW_COLOR: Color = Color::rgb(255, 214, 140);
const SHIMMER_COLOR: Color = Color::rgb(255, 176, 120);
const HEAT_COLOR: Color = Color::rgb(255, 150, 90);
const FLASH_COLOR: Color = Color::rgb(235, 240, 255);

/// Draw the whole population for the current frame.
pub fn draw(state: &Atmosphere, ctx: &CanvasRenderingContext2d) {
	let (width, height) = state.size();
	ctx.clear_rect(0.0, 0.0, width, height);

	for p in state.particles() {
		match p {
			Particle::Snow(f) => draw_snowflake(ctx, f),
			Particle::Rain(d) => draw_raindrop(ctx, d),
			Particle::Wind(s) => draw_wind_streak(ctx, s),
			Particle::Float(m) => draw_mote(ctx, m),
			Particle::Glow(o) => draw_glow_orb(ctx, o),
			Particle::Shimmer(s) => draw_shimmer_patch(ctx, s),
			Particle::HeatLine(l) => draw_heat_line(ctx, l, width),
			Particle::Flash(f) => draw_flash(ctx, f, width, height),
		}
	}
}

fn draw_snowflake(ctx: &CanvasRenderingContext2d, flake: &Snowflake) {
	ctx.set_fill_style_str(&SNOW_COLOR.with_alpha(flake.alpha).to_css());
	ctx.begin_path();
	let _ = ctx.arc(flake.x, flake.y, flake.radius, 0.0, PI * 2.0);
	ctx.fill();
}

fn draw_raindrop(ctx: &CanvasRenderingContext2d, drop: &Raindrop) {
	// Tail trails the head along the velocity vector.
	let tail_x = drop.x - drop.drift * (drop.length / drop.fall);
	let tail_y = drop.y - drop.length;

	ctx.set_stroke_style_str(&RAIN_COLOR.with_alpha(drop.alpha).to_css());
	ctx.set_line_width(1.4);
	ctx.begin_path();
	ctx.move_to(tail_x, tail_y);
	ctx.line_to(drop.x, drop.y);
	ctx.stroke();
}

fn draw_wind_streak(ctx: &CanvasRenderingContext2d, streak: &WindStreak) {
	ctx.set_stroke_style_str(&WIND_COLOR.with_alpha(streak.alpha).to_css());
	ctx.set_line_width(streak.thickness);
	ctx.begin_path();
	ctx.move_to(streak.x, streak.y);
	ctx.line_to(streak.x + streak.length, streak.y);
	ctx.stroke();
}

fn draw_mote(ctx: &CanvasRenderingContext2d, mote: &Mote) {
	ctx.set_fill_style_str(&MOTE_COLOR.with_alpha(mote.alpha).to_css());
	ctx.begin_path();
	let _ = ctx.arc(mote.x, mote.y, mote.radius, 0.0, PI * 2.0);
	ctx.fill();
}

fn draw_glow_orb(ctx: &CanvasRenderingContext2d, orb: &GlowOrb) {
	let gradient = ctx
		.create_radial_gradient(orb.x, orb.y, 0.0, orb.x, orb.y, orb.radius)
		.unwrap();

	// White-hot core fading out through the base glow color.
	let core = Color::rgb(255, 255, 255).lerp(GLOW_COLOR, 0.5);
	gradient
		.add_color_stop(0.0, &core.with_alpha(orb.alpha).to_css())
		.unwrap();
	gradient
		.add_color_stop(0.6, &GLOW_COLOR.with_alpha(orb.alpha * 0.35).to_css())
		.unwrap();
	gradient
		.add_color_stop(1.0, &GLOW_COLOR.with_alpha(0.0).to_css())
		.unwrap();

	ctx.begin_path();
	let _ = ctx.arc(orb.x, orb.y, orb.radius, 0.0, PI * 2.0);
	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill();
}

fn draw_shimmer_patch(ctx: &CanvasRenderingContext2d, patch: &ShimmerPatch) {
	ctx.set_filter("blur(3px)");
	ctx.set_fill_style_str(&SHIMMER_COLOR.with_alpha(patch.alpha).to_css());
	ctx.begin_path();
	let _ = ctx.ellipse(
		patch.x,
		patch.y,
		patch.radius_x,
		patch.radius_y,
		0.0,
		0.0,
		PI * 2.0,
	);
	ctx.fill();
	ctx.set_filter("none");
}

fn draw_heat_line(ctx: &CanvasRenderingContext2d, line: &HeatLine, width: f64) {
	ctx.set_fill_style_str(&HEAT_COLOR.with_alpha(line.alpha).to_css());
	ctx.fill_rect(0.0, line.y, width, line.thickness);
}

fn draw_flash(ctx: &CanvasRenderingContext2d, flash: &LightningFlash, width: f64, height: f64) {
	ctx.set_fill_style_str(&FLASH_COLOR.with_alpha(flash.alpha).to_css());
	ctx.fill_rect(0.0, 0.0, width, height);
}
