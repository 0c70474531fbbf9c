//! Plain data types shared by the simulator, the field state and the host.

use serde::Deserialize;

use crate::error::{Error, Result};

/// Current pointer position in canvas pixels.
///
/// Presence is modelled as `Option<Pointer>`: both coordinates exist or neither does.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
	/// Horizontal offset from the canvas' left edge.
	pub x: f64,
	/// Vertical offset from the canvas' top edge.
	pub y: f64,
}

impl Pointer {
	/// Pointer at canvas coordinates `(x, y)`.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

/// Sampling ranges used when a particle set is (re)built.
///
/// Both ranges are half-open `[min, max)`. The speed range is symmetric
/// about zero so the field has no net drift.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnRanges {
	/// Dot radius range; `min` must be > 0.
	pub size: (f64, f64),
	/// Range for each velocity component, in pixels per frame; `min == -max`.
	pub speed: (f64, f64),
}

impl Default for SpawnRanges {
	fn default() -> Self {
		Self {
			size: (0.5, 3.0),
			speed: (-0.75, 0.75),
		}
	}
}

impl SpawnRanges {
	/// Check both ranges are finite and non-empty, sizes positive, speeds symmetric.
	pub fn validate(&self) -> Result<()> {
		check_range("size_range", self.size)?;
		if self.size.0 <= 0.0 {
			return Err(Error::InvalidParam("size_range minimum must be > 0".into()));
		}
		check_range("speed_range", self.speed)?;
		let (min, max) = self.speed;
		if min != -max {
			return Err(Error::InvalidParam(format!(
				"speed_range must be symmetric about 0, got [{min}, {max}]"
			)));
		}
		Ok(())
	}
}

/// Pointer pull applied during `step`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Attraction {
	/// Particles strictly closer than this to the pointer are pulled.
	pub radius: f64,
	/// Fraction of the pointer displacement added to the position each step.
	/// Kept in `(0, 1)` so a pulled particle never passes the pointer.
	pub gain: f64,
}

impl Default for Attraction {
	fn default() -> Self {
		Self {
			radius: 250.0,
			gain: 0.01,
		}
	}
}

impl Attraction {
	/// Check the radius is finite and non-negative and `0 < gain < 1`.
	pub fn validate(&self) -> Result<()> {
		check_non_negative("mouse_radius", self.radius)?;
		if !(self.gain > 0.0 && self.gain < 1.0) {
			return Err(Error::InvalidParam(format!(
				"attraction_gain must be in (0, 1), got {}",
				self.gain
			)));
		}
		Ok(())
	}
}

/// Field configuration, usually read from a JSON block on the host page.
///
/// Every field is optional in the JSON; missing fields take the defaults below.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FieldConfig {
	/// Number of particles per set.
	pub particle_count: usize,
	/// Pairs strictly closer than this are joined by a line.
	pub max_connect_distance: f64,
	/// Pointer attraction radius in pixels.
	pub mouse_radius: f64,
	/// Pointer attraction gain, in `(0, 1)`.
	pub attraction_gain: f64,
	/// Dot radius range `[min, max)`.
	pub size_range: (f64, f64),
	/// Velocity component range `[-v, v)`.
	pub speed_range: (f64, f64),
	/// Fixed RNG seed. When absent the host picks one at mount time.
	pub seed: Option<u64>,
	/// Theme preset name, see [`Theme::by_name`](super::theme::Theme::by_name).
	pub theme: String,
}

impl Default for FieldConfig {
	fn default() -> Self {
		let spawn = SpawnRanges::default();
		let attraction = Attraction::default();
		Self {
			particle_count: 100,
			max_connect_distance: 180.0,
			mouse_radius: attraction.radius,
			attraction_gain: attraction.gain,
			size_range: spawn.size,
			speed_range: spawn.speed,
			seed: None,
			theme: "neon".to_string(),
		}
	}
}

impl FieldConfig {
	/// Parse and validate a JSON config block.
	pub fn from_json(text: &str) -> Result<Self> {
		let config: Self = serde_json::from_str(text)?;
		config.validate()?;
		Ok(config)
	}

	/// Check every field, see [`SpawnRanges::validate`] and [`Attraction::validate`].
	pub fn validate(&self) -> Result<()> {
		check_non_negative("max_connect_distance", self.max_connect_distance)?;
		self.spawn_ranges().validate()?;
		self.attraction().validate()
	}

	/// Sampling ranges for [`ParticleSet::initialize`](super::ParticleSet::initialize).
	pub fn spawn_ranges(&self) -> SpawnRanges {
		SpawnRanges {
			size: self.size_range,
			speed: self.speed_range,
		}
	}

	/// Pointer pull parameters for `step`.
	pub fn attraction(&self) -> Attraction {
		Attraction {
			radius: self.mouse_radius,
			gain: self.attraction_gain,
		}
	}
}

fn check_range(name: &str, (min, max): (f64, f64)) -> Result<()> {
	if !min.is_finite() || !max.is_finite() {
		return Err(Error::InvalidParam(format!("{name} bounds must be finite")));
	}
	if min >= max {
		return Err(Error::InvalidParam(format!(
			"{name} must satisfy min < max, got [{min}, {max}]"
		)));
	}
	Ok(())
}

fn check_non_negative(name: &str, value: f64) -> Result<()> {
	if !value.is_finite() || value < 0.0 {
		return Err(Error::InvalidParam(format!(
			"{name} must be finite and >= 0, got {value}"
		)));
	}
	Ok(())
}
