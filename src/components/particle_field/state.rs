//! Field state driven by the animation loop.
//!
//! Bundles the particle set with the configuration it was built from, the
//! current surface size and pointer, and the seeded RNG used to rebuild the
//! set whenever the surface is resized.

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::particles::ParticleSet;
use super::types::{Attraction, FieldConfig, Pointer};
use crate::error::Result;

/// Everything one canvas needs between frames.
///
/// Created once when the component mounts, then mutated by the event
/// handlers (`set_pointer`, `resize`) and by `tick` once per frame.
pub struct FieldState {
	/// Current particle set, replaced on every resize.
	pub particles: ParticleSet,
	/// Validated configuration the field was built from.
	pub config: FieldConfig,
	/// Surface width in pixels.
	pub width: f64,
	/// Surface height in pixels.
	pub height: f64,
	/// Pointer fed to the next `tick`, if any.
	pub pointer: Option<Pointer>,
	/// Frames simulated since the field was created.
	pub frame: u64,
	attraction: Attraction,
	rng: StdRng,
}

impl FieldState {
	/// Validate `config` and spawn the first set over `width × height`.
	pub fn new(config: FieldConfig, width: f64, height: f64, seed: u64) -> Result<Self> {
		config.validate()?;
		let mut rng = StdRng::seed_from_u64(seed);
		let particles = ParticleSet::initialize(
			config.particle_count,
			width,
			height,
			&config.spawn_ranges(),
			&mut rng,
		)?;
		debug!(
			"particle-field: spawned {} particles on {}x{} (seed {})",
			particles.len(),
			width,
			height,
			seed
		);

		Ok(Self {
			particles,
			attraction: config.attraction(),
			config,
			width,
			height,
			pointer: None,
			frame: 0,
			rng,
		})
	}

	/// Adopt a new surface size and respawn the whole set over it.
	///
	/// The new set is built before anything is replaced, so a rejected size
	/// leaves the previous field untouched.
	pub fn resize(&mut self, width: f64, height: f64) -> Result<()> {
		let particles = ParticleSet::initialize(
			self.config.particle_count,
			width,
			height,
			&self.config.spawn_ranges(),
			&mut self.rng,
		)?;
		debug!("particle-field: resized to {}x{}", width, height);

		self.particles = particles;
		self.width = width;
		self.height = height;
		Ok(())
	}

	/// Replace the stored pointer; `None` when the mouse leaves the canvas.
	pub fn set_pointer(&mut self, pointer: Option<Pointer>) {
		self.pointer = pointer;
	}

	/// Advance the field by one frame.
	pub fn tick(&mut self) {
		self.particles
			.step(self.pointer, self.width, self.height, &self.attraction);
		self.frame += 1;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::Error;

	fn small_config() -> FieldConfig {
		FieldConfig {
			particle_count: 24,
			..FieldConfig::default()
		}
	}

	#[test]
	fn new_spawns_configured_count() -> Result<()> {
		let state = FieldState::new(small_config(), 320.0, 240.0, 5)?;
		assert_eq!(state.particles.len(), 24);
		assert_eq!(state.pointer, None);
		assert_eq!(state.frame, 0);
		Ok(())
	}

	#[test]
	fn new_rejects_invalid_config() {
		let config = FieldConfig {
			size_range: (3.0, 1.0),
			..small_config()
		};
		let err = FieldState::new(config, 320.0, 240.0, 5).err().unwrap();
		assert!(matches!(err, Error::InvalidParam(_)));
	}

	#[test]
	fn same_seed_same_field() -> Result<()> {
		let a = FieldState::new(small_config(), 320.0, 240.0, 11)?;
		let b = FieldState::new(small_config(), 320.0, 240.0, 11)?;
		assert_eq!(a.particles.as_slice(), b.particles.as_slice());
		Ok(())
	}

	#[test]
	fn resize_respawns_within_new_bounds() -> Result<()> {
		let mut state = FieldState::new(small_config(), 1920.0, 1080.0, 3)?;
		let before = state.particles.as_slice().to_vec();

		state.resize(200.0, 100.0)?;

		assert_eq!((state.width, state.height), (200.0, 100.0));
		assert_eq!(state.particles.len(), 24);
		assert_ne!(state.particles.as_slice(), before.as_slice());
		for p in state.particles.iter() {
			assert!((0.0..200.0).contains(&p.x));
			assert!((0.0..100.0).contains(&p.y));
		}
		Ok(())
	}

	#[test]
	fn rejected_resize_keeps_previous_field() -> Result<()> {
		let mut state = FieldState::new(small_config(), 300.0, 300.0, 3)?;
		let before = state.particles.as_slice().to_vec();

		assert!(state.resize(0.0, 300.0).is_err());
		assert_eq!((state.width, state.height), (300.0, 300.0));
		assert_eq!(state.particles.as_slice(), before.as_slice());
		Ok(())
	}

	#[test]
	fn tick_uses_stored_pointer() -> Result<()> {
		let config = FieldConfig {
			particle_count: 1,
			speed_range: (-1e-9, 1e-9),
			..FieldConfig::default()
		};
		let mut state = FieldState::new(config, 400.0, 400.0, 8)?;
		let start = state.particles.as_slice()[0].clone();
		let pointer = Pointer::new(start.x + 20.0, start.y);

		state.set_pointer(Some(pointer));
		state.tick();
		let pulled = state.particles.as_slice()[0].clone();
		assert!(pulled.x > start.x + 0.19);
		assert_eq!(state.frame, 1);

		state.set_pointer(None);
		state.tick();
		let drifted = &state.particles.as_slice()[0];
		assert!((drifted.x - pulled.x).abs() < 1e-6);
		assert_eq!(state.frame, 2);
		Ok(())
	}
}
