//! Decorative weather particle layer.
//!
//! A full-viewport canvas behind the page content that animates one of the
//! weather particle kinds:
//! - snow, rain, and wind streaks with simple kinematics
//! - float motes, glow orbs, and heat shimmer with lifetime envelopes
//! - a heatwave mix and event-driven lightning flashes
//!
//! The engine itself is DOM-free and deterministic for a given seed; the
//! component layer owns the canvas, the animation-frame schedule, and the
//! viewport resize listener.
//!
//! # Example
//!
//! ```ignore
//! use skycast::components::atmosphere::AtmosphereCanvas;
//!
//! let (category, _) = signal(Some("snow".to_string()));
//! view! { <AtmosphereCanvas category=category /> }
//! ```

mod component;
mod engine;
mod particle;
mod render;

pub use component::AtmosphereCanvas;
