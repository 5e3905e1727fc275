use std::any::Any;

use serde::de::DeserializeOwned;

use crate::coerce::Custom;

/// Concrete storage location produced by stripping a destination's
/// indirection layers.
///
/// Each variant selects exactly one conversion strategy; see
/// [`assign`](crate::coerce::assign) for the dispatch rules.
pub enum Slot<'a> {
	/// Destination carrying its own decoding hooks; probed before any
	/// kind-directed strategy.
	Custom(&'a mut dyn Custom),
	/// Owned string storage; input text is stored verbatim.
	Str(&'a mut String),
	/// Boolean storage.
	Bool(&'a mut bool),
	/// 8-bit signed integer storage.
	I8(&'a mut i8),
	/// 16-bit signed integer storage.
	I16(&'a mut i16),
	/// 32-bit signed integer storage.
	I32(&'a mut i32),
	/// 64-bit signed integer storage.
	I64(&'a mut i64),
	/// Pointer-width signed integer storage.
	Isize(&'a mut isize),
	/// 8-bit unsigned integer storage.
	U8(&'a mut u8),
	/// 16-bit unsigned integer storage.
	U16(&'a mut u16),
	/// 32-bit unsigned integer storage.
	U32(&'a mut u32),
	/// 64-bit unsigned integer storage.
	U64(&'a mut u64),
	/// Pointer-width unsigned integer storage.
	Usize(&'a mut usize),
	/// Single-precision float storage.
	F32(&'a mut f32),
	/// Double-precision float storage.
	F64(&'a mut f64),
	/// Non-scalar storage served by the byte fast path or the structured
	/// fallback decode.
	Composite(&'a mut dyn Composite),
}

/// Fallback surface for non-scalar destinations.
///
/// Blanket-implemented for every deserializable `'static` type, so sequence,
/// map, and record destinations all reach the dispatcher through one trait
/// object.
pub trait Composite {
	/// Expose the destination as a byte vector when it is exactly `Vec<u8>`.
	///
	/// Wrapper element types around `u8` do not qualify; those sequences take
	/// the structured decode path like any other.
	fn as_byte_vec(&mut self) -> Option<&mut Vec<u8>>;

	/// Decode a structured text literal into the destination, replacing its
	/// previous contents.
	fn decode_json(&mut self, text: &str) -> Result<(), serde_json::Error>;
}

impl<T: DeserializeOwned + Any> Composite for T {
	fn as_byte_vec(&mut self) -> Option<&mut Vec<u8>> {
		(self as &mut dyn Any).downcast_mut::<Vec<u8>>()
	}

	fn decode_json(&mut self, text: &str) -> Result<(), serde_json::Error> {
		*self = serde_json::from_str(text)?;
		Ok(())
	}
}
