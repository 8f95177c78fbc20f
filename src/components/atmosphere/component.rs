//! Leptos component wrapping the atmosphere canvas.
//!
//! The component owns a full-viewport canvas and the engine driving it. An
//! animation loop runs via `requestAnimationFrame`, feeding real frame
//! timestamps into the engine; a window resize listener keeps the surface
//! in sync with the viewport. If the 2d context cannot be acquired the
//! component stays inert and the rest of the page is unaffected.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::engine::{Atmosphere, Mode, mode_for_category};
use super::render;

/// Bundles the particle engine with its acquired drawing context.
struct Scene {
	engine: Atmosphere,
	ctx: CanvasRenderingContext2d,
}

fn viewport_size(window: &Window) -> (f64, f64) {
	let w = window
		.inner_width()
		.ok()
		.and_then(|v| v.as_f64())
		.unwrap_or(800.0);
	let h = window
		.inner_height()
		.ok()
		.and_then(|v| v.as_f64())
		.unwrap_or(600.0);
	(w, h)
}

/// Full-viewport decorative particle layer behind the page content.
///
/// `category` carries the resolved weather category; `None` (no search yet,
/// or a failed one) turns the effect off. Mode changes cancel any pending
/// frame before starting the new loop, so at most one callback is in
/// flight per component instance.
#[component]
pub fn AtmosphereCanvas(#[prop(into)] category: Signal<Option<String>>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let scene: Rc<RefCell<Option<Scene>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
	let (scene_init, animate_init, resize_cb_init, raf_init) = (
		scene.clone(),
		animate.clone(),
		resize_cb.clone(),
		raf_id.clone(),
	);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = viewport_size(&window);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		// No 2d context means no effects; the engine is never built and
		// every later call lands in a no-op branch.
		let Ok(Some(raw)) = canvas.get_context("2d") else {
			return;
		};
		let Ok(ctx) = raw.dyn_into::<CanvasRenderingContext2d>() else {
			return;
		};

		let seed = js_sys::Date::now() as u64;
		*scene_init.borrow_mut() = Some(Scene {
			engine: Atmosphere::new(w, h, seed),
			ctx,
		});

		let (scene_resize, canvas_resize) = (scene_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let (nw, nh) = viewport_size(&win);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut s) = *scene_resize.borrow_mut() {
				s.engine.resize(nw, nh);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ =
				window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (scene_anim, animate_inner, raf_anim) =
			(scene_init.clone(), animate_init.clone(), raf_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move |now: f64| {
			raf_anim.set(None);
			let mut running = false;
			if let Some(ref mut s) = *scene_anim.borrow_mut() {
				s.engine.advance(now);
				render::draw(&s.engine, &s.ctx);
				running = s.engine.mode() != Mode::Off;
			}
			if running {
				if let Some(ref cb) = *animate_inner.borrow() {
					if let Some(win) = web_sys::window() {
						raf_anim
							.set(win.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
					}
				}
			}
		}));
	});

	let (scene_mode, animate_mode, raf_mode) = (scene.clone(), animate.clone(), raf_id.clone());
	Effect::new(move |_| {
		let key = category.get();
		if canvas_ref.get().is_none() {
			return;
		}
		let mut scene_ref = scene_mode.borrow_mut();
		let Some(s) = scene_ref.as_mut() else {
			return;
		};
		let Some(window) = web_sys::window() else {
			return;
		};

		let target = match key.as_deref() {
			Some(k) => mode_for_category(k),
			None => Mode::Off,
		};
		if s.engine.mode() == target {
			// Same effect as before; leave the running loop untouched.
			if target != Mode::Off && raf_mode.get().is_none() {
				if let Some(ref cb) = *animate_mode.borrow() {
					raf_mode
						.set(window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
				}
			}
			return;
		}

		if let Some(id) = raf_mode.take() {
			let _ = window.cancel_animation_frame(id);
		}
		s.engine.set_mode(target);
		let (w, h) = s.engine.size();
		s.ctx.clear_rect(0.0, 0.0, w, h);
		if target != Mode::Off {
			if let Some(ref cb) = *animate_mode.borrow() {
				raf_mode.set(window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
			}
		}
	});

	let (raf_cleanup, resize_cleanup) = (raf_id.clone(), resize_cb.clone());
	// `Closure` handles are !Send; SendWrapper satisfies on_cleanup's
	// Send + Sync bound and is a no-op on the single-threaded wasm target.
	let cleanup = SendWrapper::new(move || {
		if let Some(win) = web_sys::window() {
			if let Some(id) = raf_cleanup.take() {
				let _ = win.cancel_animation_frame(id);
			}
			if let Some(ref cb) = *resize_cleanup.borrow() {
				let _ =
					win.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}
	});
	on_cleanup(move || cleanup.take()());

	view! { <canvas node_ref=canvas_ref class="atmosphere-canvas" /> }
}
