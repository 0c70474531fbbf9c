//! Crate-wide error type.

use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building or configuring a particle field.
///
/// The per-frame path (`step`, `render`) is infallible; everything that can
/// fail happens up front when a field is created, resized or configured.
#[derive(Debug, Error)]
pub enum Error {
	/// Invalid caller-supplied parameter (surface size, ranges, radii).
	#[error("invalid parameter: {0}")]
	InvalidParam(String),

	/// The configuration block could not be parsed.
	#[error("malformed field config: {0}")]
	Config(#[from] serde_json::Error),
}
