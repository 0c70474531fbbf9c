//! Particle simulation core: spawning, per-frame motion and proximity links.
//!
//! Everything here is pure Rust with no canvas state. The host drives it once
//! per animation frame with [`ParticleSet::step`] followed by
//! [`ParticleSet::render`], handing in the drawing callbacks.

use rand::Rng;

use super::types::{Attraction, Pointer, SpawnRanges};
use crate::error::{Error, Result};

/// A single drifting dot.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Horizontal position in pixels.
	pub x: f64,
	/// Vertical position in pixels.
	pub y: f64,
	/// Horizontal velocity in pixels per frame.
	pub vx: f64,
	/// Vertical velocity in pixels per frame.
	pub vy: f64,
	/// Dot radius, fixed at creation.
	pub size: f64,
}

impl Particle {
	/// Particle at `(x, y)` moving with `(vx, vy)`.
	pub const fn new(x: f64, y: f64, vx: f64, vy: f64, size: f64) -> Self {
		Self { x, y, vx, vy, size }
	}

	/// Euclidean distance between the two centres.
	#[inline]
	pub fn distance_to(&self, other: &Particle) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}

	/// Integrate one frame and bounce off the surface edges.
	///
	/// Only the velocity sign flips; the position is left where it landed, so a
	/// particle can sit outside the surface for a frame before coming back.
	fn advance(&mut self, width: f64, height: f64) {
		self.x += self.vx;
		self.y += self.vy;

		if self.x > width || self.x < 0.0 {
			self.vx = -self.vx;
		}
		if self.y > height || self.y < 0.0 {
			self.vy = -self.vy;
		}
	}

	fn attract(&mut self, pointer: Pointer, attraction: &Attraction) {
		let (dx, dy) = (pointer.x - self.x, pointer.y - self.y);
		if (dx * dx + dy * dy).sqrt() < attraction.radius {
			self.x += dx * attraction.gain;
			self.y += dy * attraction.gain;
		}
	}
}

/// The fixed-size batch of particles owned by a field.
///
/// Built wholesale by [`ParticleSet::initialize`] and replaced wholesale when
/// the surface changes size; individual particles are never added or removed.
#[derive(Clone, Debug, Default)]
pub struct ParticleSet {
	particles: Vec<Particle>,
}

impl ParticleSet {
	/// Spawn `count` particles spread uniformly over `[0, width) × [0, height)`.
	///
	/// Sizes and velocity components are drawn from `ranges`. The result depends
	/// only on the state of `rng`, so a seeded generator reproduces the set.
	///
	/// Errors:
	/// - `Error::InvalidParam` if either dimension is non-finite or not > 0, or
	///   if `ranges` fails validation.
	pub fn initialize<R: Rng>(
		count: usize,
		width: f64,
		height: f64,
		ranges: &SpawnRanges,
		rng: &mut R,
	) -> Result<Self> {
		check_dimension("width", width)?;
		check_dimension("height", height)?;
		ranges.validate()?;

		let (size_min, size_max) = ranges.size;
		let (speed_min, speed_max) = ranges.speed;
		let particles = (0..count)
			.map(|_| Particle {
				x: rng.random_range(0.0..width),
				y: rng.random_range(0.0..height),
				size: rng.random_range(size_min..size_max),
				vx: rng.random_range(speed_min..speed_max),
				vy: rng.random_range(speed_min..speed_max),
			})
			.collect();

		Ok(Self { particles })
	}

	/// Wrap an explicit list of particles, e.g. a hand-built scene.
	pub fn from_particles(particles: Vec<Particle>) -> Self {
		Self { particles }
	}

	/// Number of particles.
	pub fn len(&self) -> usize {
		self.particles.len()
	}

	/// True for a set spawned with a count of zero.
	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	/// Particles in spawn order.
	pub fn iter(&self) -> impl Iterator<Item = &Particle> {
		self.particles.iter()
	}

	/// Particles in spawn order; indices match [`ParticleSet::connections`].
	pub fn as_slice(&self) -> &[Particle] {
		&self.particles
	}

	/// Advance every particle by one frame.
	///
	/// Each particle moves by its velocity, reflects off the surface edges, and
	/// is then pulled toward `pointer` when strictly inside the attraction radius.
	pub fn step(
		&mut self,
		pointer: Option<Pointer>,
		width: f64,
		height: f64,
		attraction: &Attraction,
	) {
		for p in &mut self.particles {
			p.advance(width, height);
			if let Some(pointer) = pointer {
				p.attract(pointer, attraction);
			}
		}
	}

	/// Index pairs `(a, b)` with `a < b` whose distance is strictly below `max_distance`.
	///
	/// Full pairwise scan, O(n²). Fine for the hundred-or-so particles a page
	/// background uses; a spatial grid would be needed for much larger sets.
	pub fn connections(&self, max_distance: f64) -> impl Iterator<Item = (usize, usize)> + '_ {
		let ps = &self.particles;
		(0..ps.len()).flat_map(move |a| {
			((a + 1)..ps.len())
				.filter(move |&b| ps[a].distance_to(&ps[b]) < max_distance)
				.map(move |b| (a, b))
		})
	}

	/// Emit one `draw_particle(x, y, size)` per particle, then one
	/// `draw_edge(x1, y1, x2, y2)` per connected pair.
	pub fn render<P, E>(&self, max_connect_distance: f64, mut draw_particle: P, mut draw_edge: E)
	where
		P: FnMut(f64, f64, f64),
		E: FnMut(f64, f64, f64, f64),
	{
		for p in &self.particles {
			draw_particle(p.x, p.y, p.size);
		}
		for (a, b) in self.connections(max_connect_distance) {
			let (pa, pb) = (&self.particles[a], &self.particles[b]);
			draw_edge(pa.x, pa.y, pb.x, pb.y);
		}
	}
}

fn check_dimension(name: &str, value: f64) -> Result<()> {
	if !value.is_finite() || value <= 0.0 {
		return Err(Error::InvalidParam(format!(
			"{name} must be finite and > 0, got {value}"
		)));
	}
	Ok(())
}
