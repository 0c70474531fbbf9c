//! Leptos component wrapping the particle field canvas.
//!
//! The component creates an HTML canvas element and wires up mouse handlers
//! that feed the pointer into the field. An animation loop runs via
//! `requestAnimationFrame`, stepping the simulation and redrawing each frame.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{error, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::render;
use super::state::FieldState;
use super::theme::Theme;
use super::types::{FieldConfig, Pointer};

/// Bundles field state with the theme it is drawn in.
struct FieldContext {
	state: FieldState,
	theme: Theme,
}

/// Seed for fields that do not pin one in their config.
fn entropy_seed() -> u64 {
	(js_sys::Math::random() * u64::MAX as f64) as u64
}

fn viewport_size(window: &Window) -> Option<(f64, f64)> {
	let w = window.inner_width().ok()?.as_f64()?;
	let h = window.inner_height().ok()?.as_f64()?;
	Some((w, h))
}

/// Canvas-relative pointer position for a mouse event.
fn pointer_from_event(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> Pointer {
	let rect = canvas.get_bounding_client_rect();
	Pointer::new(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

/// Renders the animated particle field on a canvas element.
///
/// The component fills the viewport and rebuilds the field whenever the window
/// is resized. Set `fullscreen = false` to size it to its parent container
/// instead; in that mode explicit `width`/`height` override the container size.
/// In fullscreen mode `width`/`height` are ignored.
#[component]
pub fn ParticleFieldCanvas(
	/// Field configuration, read once at mount.
	#[prop(into)]
	config: Signal<FieldConfig>,
	/// Fill the viewport and follow window resizes.
	#[prop(default = true)]
	fullscreen: bool,
	/// Fixed canvas width when not fullscreen.
	#[prop(default = None)]
	width: Option<f64>,
	/// Fixed canvas height when not fullscreen.
	#[prop(default = None)]
	height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<FieldContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (context_init, animate_init, resize_cb_init) =
		(context.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			error!("particle-field: no window available");
			return;
		};

		let (w, h) = if fullscreen {
			viewport_size(&window).unwrap_or((800.0, 600.0))
		} else {
			(
				width.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_width() as f64)
						.unwrap_or(800.0)
				}),
				height.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_height() as f64)
						.unwrap_or(600.0)
				}),
			)
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			error!("particle-field: could not get 2d canvas context");
			return;
		};

		let config = config.get_untracked();
		let seed = config.seed.unwrap_or_else(entropy_seed);
		let theme = Theme::by_name(&config.theme);
		let state = match FieldState::new(config, w, h, seed) {
			Ok(state) => state,
			Err(e) => {
				error!("particle-field: {}", e);
				return;
			}
		};
		info!(
			"particle-field: {} particles, theme '{}'",
			state.particles.len(),
			theme.name
		);
		*context_init.borrow_mut() = Some(FieldContext { state, theme });

		if fullscreen {
			let (context_resize, canvas_resize) = (context_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let Some((nw, nh)) = web_sys::window().as_ref().and_then(viewport_size) else {
					return;
				};
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				if let Some(ref mut c) = *context_resize.borrow_mut() {
					if let Err(e) = c.state.resize(nw, nh) {
						warn!("particle-field: keeping previous field: {}", e);
					}
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		let (context_anim, animate_inner) = (context_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				c.state.tick();
				render::render(&c.state, &ctx, &c.theme);
			}
			if let (Some(cb), Some(win)) = (&*animate_inner.borrow(), web_sys::window()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let context_mm = context.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let pointer = pointer_from_event(&canvas, &ev);
		if let Some(ref mut c) = *context_mm.borrow_mut() {
			c.state.set_pointer(Some(pointer));
		}
	};

	let context_ml = context.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_ml.borrow_mut() {
			c.state.set_pointer(None);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-field-canvas"
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
			style="display: block;"
		/>
	}
}
