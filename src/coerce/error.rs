use std::fmt;

use thiserror::Error;

use crate::coerce::{HookError, Kind};

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, CoerceError>;

/// Errors produced while resolving destinations and converting text.
#[derive(Debug, Error)]
pub enum CoerceError {
	/// Indirection stripping ended at a location that cannot be written.
	#[error("destination is not addressable")]
	Unaddressable,
	/// A destination hook rejected the input; the hook's own error is
	/// carried through unchanged.
	#[error("hook: {0}")]
	Hook(HookError),
	/// A custom destination exposed none of its decoding hooks.
	#[error("custom destination exposes no decoding hook")]
	HookMissing,
	/// Scalar literal text did not parse for the resolved kind.
	#[error("cannot convert {text:?} to {kind}: {reason}")]
	Parse {
		/// Kind the destination resolved to.
		kind: Kind,
		/// Offending input text.
		text: String,
		/// Parser failure classification.
		reason: ParseFailure,
	},
	/// Structured fallback decode failed.
	#[error("structured decode: {0}")]
	Decode(#[from] serde_json::Error),
}

/// Why a scalar literal failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseFailure {
	/// Malformed literal text.
	Syntax,
	/// Well-formed literal whose value does not fit the destination width.
	Range,
}

impl fmt::Display for ParseFailure {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ParseFailure::Syntax => f.write_str("invalid syntax"),
			ParseFailure::Range => f.write_str("value out of range"),
		}
	}
}
