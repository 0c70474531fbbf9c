//! Animated particle field with proximity lines.
//!
//! Renders a field of drifting particles on an HTML canvas with:
//! - Edge bouncing by velocity reflection
//! - Gentle attraction toward the mouse pointer
//! - Lines between every pair of particles closer than a threshold
//! - Full respawn over the new bounds when the window is resized
//!
//! The simulation core ([`ParticleSet`]) has no canvas dependency and can be
//! driven by any host that supplies drawing callbacks.
//!
//! # Example
//!
//! ```ignore
//! use particle_field::{FieldConfig, ParticleFieldCanvas};
//!
//! let config = FieldConfig { particle_count: 120, ..FieldConfig::default() };
//! view! { <ParticleFieldCanvas config=Signal::derive(move || config.clone()) /> }
//! ```

mod component;
mod particles;
mod render;
mod state;
pub mod theme;
mod types;

pub use component::ParticleFieldCanvas;
pub use particles::{Particle, ParticleSet};
pub use state::FieldState;
pub use theme::Theme;
pub use types::{Attraction, FieldConfig, Pointer, SpawnRanges};
