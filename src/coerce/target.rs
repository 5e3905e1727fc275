use std::any::Any;
use std::collections::{BTreeMap, HashMap};

use serde::de::DeserializeOwned;

use crate::coerce::{CoerceError, Kind, Result, Slot};

/// Destination a conversion can write into.
///
/// Implementations either peel one indirection layer (`Option`, `Box`,
/// `&mut`) and delegate inward, or surface the concrete storage as a
/// [`Slot`]. Shared references implement the trait as terminally
/// unaddressable so that read-only views can still be classified.
pub trait Target {
	/// Kind the destination resolves to after stripping indirection, or
	/// `None` when it is terminally unaddressable.
	///
	/// Classification is static; no layers are allocated to answer it.
	fn kind() -> Option<Kind>;

	/// Strip indirection down to the concrete storage slot, allocating any
	/// absent optional layer passed through on the way.
	fn resolve(&mut self) -> Result<Slot<'_>>;
}

/// Absent optional layers are allocated with the inner default and resolution
/// continues into the freshly stored value. Layers allocated this way stay
/// allocated even when the conversion afterwards fails.
impl<T: Target + Default> Target for Option<T> {
	fn kind() -> Option<Kind> {
		T::kind()
	}

	fn resolve(&mut self) -> Result<Slot<'_>> {
		self.get_or_insert_with(T::default).resolve()
	}
}

impl<T: Target> Target for Box<T> {
	fn kind() -> Option<Kind> {
		T::kind()
	}

	fn resolve(&mut self) -> Result<Slot<'_>> {
		(**self).resolve()
	}
}

impl<T: Target> Target for &mut T {
	fn kind() -> Option<Kind> {
		T::kind()
	}

	fn resolve(&mut self) -> Result<Slot<'_>> {
		(**self).resolve()
	}
}

/// A shared reference is the terminally unaddressable destination: it can be
/// classified but never written, whatever it points at.
impl<T: ?Sized> Target for &T {
	fn kind() -> Option<Kind> {
		None
	}

	fn resolve(&mut self) -> Result<Slot<'_>> {
		Err(CoerceError::Unaddressable)
	}
}

macro_rules! scalar_target {
	($($ty:ty => $variant:ident),* $(,)?) => {$(
		impl Target for $ty {
			fn kind() -> Option<Kind> {
				Some(Kind::$variant)
			}

			fn resolve(&mut self) -> Result<Slot<'_>> {
				Ok(Slot::$variant(self))
			}
		}
	)*};
}

scalar_target! {
	String => Str,
	bool => Bool,
	i8 => I8,
	i16 => I16,
	i32 => I32,
	i64 => I64,
	isize => Isize,
	u8 => U8,
	u16 => U16,
	u32 => U32,
	u64 => U64,
	usize => Usize,
	f32 => F32,
	f64 => F64,
}

impl<T> Target for Vec<T>
where
	Vec<T>: DeserializeOwned + Any,
{
	fn kind() -> Option<Kind> {
		Some(Kind::Seq)
	}

	fn resolve(&mut self) -> Result<Slot<'_>> {
		Ok(Slot::Composite(self))
	}
}

impl<K, V, S> Target for HashMap<K, V, S>
where
	HashMap<K, V, S>: DeserializeOwned + Any,
{
	fn kind() -> Option<Kind> {
		Some(Kind::Map)
	}

	fn resolve(&mut self) -> Result<Slot<'_>> {
		Ok(Slot::Composite(self))
	}
}

impl<K, V> Target for BTreeMap<K, V>
where
	BTreeMap<K, V>: DeserializeOwned + Any,
{
	fn kind() -> Option<Kind> {
		Some(Kind::Map)
	}

	fn resolve(&mut self) -> Result<Slot<'_>> {
		Ok(Slot::Composite(self))
	}
}

/// Implement [`Target`](crate::coerce::Target) for record types decoded by
/// the structured fallback.
///
/// Each listed type must implement `serde::Deserialize`; it resolves with
/// kind `struct` and is populated from a structured text literal.
#[macro_export]
macro_rules! struct_target {
	($($ty:ty),+ $(,)?) => {$(
		impl $crate::coerce::Target for $ty {
			fn kind() -> ::core::option::Option<$crate::coerce::Kind> {
				::core::option::Option::Some($crate::coerce::Kind::Struct)
			}

			fn resolve(&mut self) -> $crate::coerce::Result<$crate::coerce::Slot<'_>> {
				::core::result::Result::Ok($crate::coerce::Slot::Composite(self))
			}
		}
	)+};
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn scalars_resolve_to_their_slot() {
		let mut value = 0_u32;
		assert!(matches!(value.resolve(), Ok(Slot::U32(_))));
		let mut text = String::new();
		assert!(matches!(text.resolve(), Ok(Slot::Str(_))));
	}

	#[test]
	fn resolve_allocates_absent_layers() {
		let mut nested: Option<Option<u8>> = None;
		assert!(matches!(nested.resolve(), Ok(Slot::U8(_))));
		assert_eq!(nested, Some(Some(0)));
	}

	#[test]
	fn resolve_reuses_present_layers() {
		let mut present = Some(Box::new(41_i16));
		if let Ok(Slot::I16(slot)) = present.resolve() {
			*slot += 1;
		} else {
			panic!("expected an i16 slot");
		}
		assert_eq!(present, Some(Box::new(42)));
	}

	#[test]
	fn shared_reference_is_unaddressable() {
		let mut view = &7_i32;
		assert!(matches!(view.resolve(), Err(CoerceError::Unaddressable)));
	}

	#[test]
	fn containers_resolve_to_composite() {
		let mut seq: Vec<i64> = Vec::new();
		assert!(matches!(seq.resolve(), Ok(Slot::Composite(_))));
		let mut map: BTreeMap<String, i64> = BTreeMap::new();
		assert!(matches!(map.resolve(), Ok(Slot::Composite(_))));
	}
}
