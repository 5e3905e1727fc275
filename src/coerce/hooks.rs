/// Opaque error type hooks report their own failures with.
pub type HookError = Box<dyn std::error::Error + Send + Sync>;

/// Destination that parses raw text itself, overriding every other strategy.
pub trait Settable {
	/// Populate the destination from the unmodified input text.
	fn set(&mut self, text: &str) -> Result<(), HookError>;
}

/// Destination that decodes a textual byte representation of itself.
pub trait TextDecodable {
	/// Populate the destination from the input text's bytes.
	fn decode_text(&mut self, bytes: &[u8]) -> Result<(), HookError>;
}

/// Destination that decodes a binary byte representation of itself.
pub trait BinaryDecodable {
	/// Populate the destination from the input text's bytes.
	fn decode_binary(&mut self, bytes: &[u8]) -> Result<(), HookError>;
}

/// Probe surface for destinations that carry their own decoding hooks.
///
/// A custom destination overrides the accessor for each hook it implements.
/// The dispatcher consults the accessors in the order they are declared here
/// and runs exactly one hook, so [`Settable`] shadows [`TextDecodable`],
/// which shadows [`BinaryDecodable`]. A destination that overrides none of
/// them fails with [`CoerceError::HookMissing`](crate::coerce::CoerceError).
pub trait Custom {
	/// Expose the [`Settable`] hook, if implemented.
	fn as_settable(&mut self) -> Option<&mut dyn Settable> {
		None
	}

	/// Expose the [`TextDecodable`] hook, if implemented.
	fn as_text_decodable(&mut self) -> Option<&mut dyn TextDecodable> {
		None
	}

	/// Expose the [`BinaryDecodable`] hook, if implemented.
	fn as_binary_decodable(&mut self) -> Option<&mut dyn BinaryDecodable> {
		None
	}
}
