//! particle-field: mouse-reactive particle background for web pages.
//!
//! This crate provides a WASM canvas component that animates drifting
//! particles, pulls them toward the pointer, and joins nearby pairs with lines.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod error;

pub use components::particle_field::{
	Attraction, FieldConfig, FieldState, Particle, ParticleFieldCanvas, ParticleSet, Pointer,
	SpawnRanges, Theme,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("particle-field: logging initialized");
}

/// Load the field config from a script element with id="particle-config".
/// Expected format: JSON object, every field optional (see [`FieldConfig`]).
fn load_field_config() -> Option<FieldConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("particle-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match FieldConfig::from_json(&json_text) {
		Ok(config) => {
			info!(
				"particle-field: loaded config ({} particles, link distance {})",
				config.particle_count, config.max_connect_distance
			);
			Some(config)
		}
		Err(e) => {
			warn!("particle-field: ignoring config block: {}", e);
			None
		}
	}
}

/// Main application component.
/// Loads the field config from the DOM and mounts a fullscreen particle background.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_field_config().unwrap_or_default();
	let config_signal = Signal::derive(move || config.clone());

	view! {
		<Title text="Particle Field" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="particle-background">
			<ParticleFieldCanvas config=config_signal fullscreen=true />
		</div>
	}
}
