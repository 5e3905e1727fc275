mod assign;
mod error;
mod hooks;
mod kind;
mod literal;
mod slot;
mod target;

/// Conversion entry point.
pub use assign::assign;
/// Error and result aliases.
pub use error::{CoerceError, ParseFailure, Result};
/// Custom decoding hooks and their probe surface.
pub use hooks::{BinaryDecodable, Custom, HookError, Settable, TextDecodable};
/// Kind classification and introspection predicates.
pub use kind::{
	Kind, is_bool, is_f32, is_f64, is_i8, is_i16, is_i32, is_i64, is_isize, is_map, is_seq, is_string, is_struct,
	is_u8, is_u16, is_u32, is_u64, is_usize, kind_of,
};
/// Resolved destination slots and the structured fallback surface.
pub use slot::{Composite, Slot};
/// Destination resolution trait.
pub use target::Target;
