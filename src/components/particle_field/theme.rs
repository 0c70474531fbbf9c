//! Visual theming for the particle field.

use log::warn;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel
	pub r: u8,
	/// Green channel
	pub g: u8,
	/// Blue channel
	pub b: u8,
	/// Opacity in `[0, 1]`
	pub a: f64,
}

impl Color {
	/// Color from channels and opacity.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// CSS `rgba(...)` string for canvas fill/stroke styles.
	pub fn to_css(self) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// Complete visual theme.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
	/// Preset name, as accepted by [`Theme::by_name`]
	pub name: &'static str,
	/// Fill for particle dots
	pub particle_color: Color,
	/// Stroke for proximity lines
	pub line_color: Color,
	/// Proximity line width in pixels
	pub line_width: f64,
}

impl Theme {
	/// Green dots joined by violet lines (default)
	pub fn neon() -> Self {
		Self {
			name: "neon",
			particle_color: Color::rgba(0, 255, 136, 0.6),
			line_color: Color::rgba(168, 85, 247, 0.3),
			line_width: 0.8,
		}
	}

	/// Pale blue on blue, for light page backgrounds
	pub fn frost() -> Self {
		Self {
			name: "frost",
			particle_color: Color::rgba(70, 110, 140, 0.7),
			line_color: Color::rgba(90, 130, 160, 0.25),
			line_width: 0.8,
		}
	}

	/// Warm amber dots with rust lines
	pub fn ember() -> Self {
		Self {
			name: "ember",
			particle_color: Color::rgba(255, 170, 80, 0.65),
			line_color: Color::rgba(165, 115, 90, 0.3),
			line_width: 1.0,
		}
	}

	/// Look up a preset by name, falling back to the default.
	pub fn by_name(name: &str) -> Self {
		match name {
			"neon" => Self::neon(),
			"frost" => Self::frost(),
			"ember" => Self::ember(),
			other => {
				warn!("particle-field: unknown theme '{}', using default", other);
				Self::default()
			}
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::neon()
	}
}
