use std::fmt;

use crate::coerce::Target;

/// Classification of a destination once every indirection layer is stripped.
///
/// Byte vectors report [`Kind::Seq`] like any other sequence; their special
/// treatment happens at conversion time, not at classification time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
	/// Owned string storage.
	Str,
	/// Boolean storage.
	Bool,
	/// 8-bit signed integer storage.
	I8,
	/// 16-bit signed integer storage.
	I16,
	/// 32-bit signed integer storage.
	I32,
	/// 64-bit signed integer storage.
	I64,
	/// Pointer-width signed integer storage.
	Isize,
	/// 8-bit unsigned integer storage.
	U8,
	/// 16-bit unsigned integer storage.
	U16,
	/// 32-bit unsigned integer storage.
	U32,
	/// 64-bit unsigned integer storage.
	U64,
	/// Pointer-width unsigned integer storage.
	Usize,
	/// Single-precision float storage.
	F32,
	/// Double-precision float storage.
	F64,
	/// Sequence storage (vectors, including byte vectors).
	Seq,
	/// Key-value map storage.
	Map,
	/// Record storage decoded field-by-field.
	Struct,
}

impl Kind {
	/// Short lowercase name used in error messages.
	pub const fn name(self) -> &'static str {
		match self {
			Kind::Str => "string",
			Kind::Bool => "bool",
			Kind::I8 => "i8",
			Kind::I16 => "i16",
			Kind::I32 => "i32",
			Kind::I64 => "i64",
			Kind::Isize => "isize",
			Kind::U8 => "u8",
			Kind::U16 => "u16",
			Kind::U32 => "u32",
			Kind::U64 => "u64",
			Kind::Usize => "usize",
			Kind::F32 => "f32",
			Kind::F64 => "f64",
			Kind::Seq => "sequence",
			Kind::Map => "map",
			Kind::Struct => "struct",
		}
	}
}

impl fmt::Display for Kind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Kind the destination resolves to, or `None` when it is terminally
/// unaddressable (a shared reference at the end of the indirection chain).
///
/// Classification is static: absent optional layers are not allocated.
pub fn kind_of<T: Target>(_value: &T) -> Option<Kind> {
	T::kind()
}

/// Report whether the destination resolves to string storage.
pub fn is_string<T: Target>(value: &T) -> bool {
	kind_of(value) == Some(Kind::Str)
}

/// Report whether the destination resolves to boolean storage.
pub fn is_bool<T: Target>(value: &T) -> bool {
	kind_of(value) == Some(Kind::Bool)
}

/// Report whether the destination resolves to `i8` storage.
pub fn is_i8<T: Target>(value: &T) -> bool {
	kind_of(value) == Some(Kind::I8)
}

/// Report whether the destination resolves to `i16` storage.
pub fn is_i16<T: Target>(value: &T) -> bool {
	kind_of(value) == Some(Kind::I16)
}

/// Report whether the destination resolves to `i32` storage.
pub fn is_i32<T: Target>(value: &T) -> bool {
	kind_of(value) == Some(Kind::I32)
}

/// Report whether the destination resolves to `i64` storage.
pub fn is_i64<T: Target>(value: &T) -> bool {
	kind_of(value) == Some(Kind::I64)
}

/// Report whether the destination resolves to `isize` storage.
pub fn is_isize<T: Target>(value: &T) -> bool {
	kind_of(value) == Some(Kind::Isize)
}

/// Report whether the destination resolves to `u8` storage.
pub fn is_u8<T: Target>(value: &T) -> bool {
	kind_of(value) == Some(Kind::U8)
}

/// Report whether the destination resolves to `u16` storage.
pub fn is_u16<T: Target>(value: &T) -> bool {
	kind_of(value) == Some(Kind::U16)
}

/// Report whether the destination resolves to `u32` storage.
pub fn is_u32<T: Target>(value: &T) -> bool {
	kind_of(value) == Some(Kind::U32)
}

/// Report whether the destination resolves to `u64` storage.
pub fn is_u64<T: Target>(value: &T) -> bool {
	kind_of(value) == Some(Kind::U64)
}

/// Report whether the destination resolves to `usize` storage.
pub fn is_usize<T: Target>(value: &T) -> bool {
	kind_of(value) == Some(Kind::Usize)
}

/// Report whether the destination resolves to `f32` storage.
pub fn is_f32<T: Target>(value: &T) -> bool {
	kind_of(value) == Some(Kind::F32)
}

/// Report whether the destination resolves to `f64` storage.
pub fn is_f64<T: Target>(value: &T) -> bool {
	kind_of(value) == Some(Kind::F64)
}

/// Report whether the destination resolves to sequence storage.
pub fn is_seq<T: Target>(value: &T) -> bool {
	kind_of(value) == Some(Kind::Seq)
}

/// Report whether the destination resolves to map storage.
pub fn is_map<T: Target>(value: &T) -> bool {
	kind_of(value) == Some(Kind::Map)
}

/// Report whether the destination resolves to record storage.
pub fn is_struct<T: Target>(value: &T) -> bool {
	kind_of(value) == Some(Kind::Struct)
}
