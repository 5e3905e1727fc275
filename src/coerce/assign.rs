use crate::coerce::{CoerceError, Custom, Kind, ParseFailure, Result, Slot, Target, literal};

/// Convert `text` into the destination's resolved type and write it in place.
///
/// Exactly one strategy runs per call. Custom destinations get their own
/// hooks, probed in [`Settable`](crate::coerce::Settable),
/// [`TextDecodable`](crate::coerce::TextDecodable),
/// [`BinaryDecodable`](crate::coerce::BinaryDecodable) order; the first hook
/// found decides the outcome alone. Scalar destinations parse `text` under
/// the grammar of their resolved kind. Byte vectors take `text`'s raw bytes
/// verbatim. Every other sequence, map, and record destination decodes
/// `text` as a structured literal.
///
/// Absent optional layers are allocated while resolving and stay allocated
/// even when the conversion afterwards fails; the failed destination keeps
/// its prior (or freshly defaulted) value.
pub fn assign<T: Target>(dest: &mut T, text: &str) -> Result<()> {
	match dest.resolve()? {
		Slot::Custom(custom) => run_hook(custom, text),
		Slot::Str(slot) => {
			*slot = text.to_owned();
			Ok(())
		}
		Slot::Bool(slot) => {
			*slot = literal::parse_bool(text).map_err(|reason| parse_error(Kind::Bool, text, reason))?;
			Ok(())
		}
		Slot::I8(slot) => store_signed(slot, Kind::I8, text),
		Slot::I16(slot) => store_signed(slot, Kind::I16, text),
		Slot::I32(slot) => store_signed(slot, Kind::I32, text),
		Slot::I64(slot) => store_signed(slot, Kind::I64, text),
		Slot::Isize(slot) => store_signed(slot, Kind::Isize, text),
		Slot::U8(slot) => store_unsigned(slot, Kind::U8, text),
		Slot::U16(slot) => store_unsigned(slot, Kind::U16, text),
		Slot::U32(slot) => store_unsigned(slot, Kind::U32, text),
		Slot::U64(slot) => store_unsigned(slot, Kind::U64, text),
		Slot::Usize(slot) => store_unsigned(slot, Kind::Usize, text),
		Slot::F32(slot) => {
			*slot = literal::parse_f32(text).map_err(|reason| parse_error(Kind::F32, text, reason))?;
			Ok(())
		}
		Slot::F64(slot) => {
			*slot = literal::parse_f64(text).map_err(|reason| parse_error(Kind::F64, text, reason))?;
			Ok(())
		}
		Slot::Composite(slot) => {
			if let Some(bytes) = slot.as_byte_vec() {
				*bytes = text.as_bytes().to_vec();
				return Ok(());
			}
			slot.decode_json(text)?;
			Ok(())
		}
	}
}

fn run_hook(custom: &mut dyn Custom, text: &str) -> Result<()> {
	if let Some(hook) = custom.as_settable() {
		return hook.set(text).map_err(CoerceError::Hook);
	}
	if let Some(hook) = custom.as_text_decodable() {
		return hook.decode_text(text.as_bytes()).map_err(CoerceError::Hook);
	}
	if let Some(hook) = custom.as_binary_decodable() {
		return hook.decode_binary(text.as_bytes()).map_err(CoerceError::Hook);
	}
	Err(CoerceError::HookMissing)
}

fn store_signed<N: TryFrom<i64>>(slot: &mut N, kind: Kind, text: &str) -> Result<()> {
	let wide = literal::parse_i64(text).map_err(|reason| parse_error(kind, text, reason))?;
	*slot = N::try_from(wide).map_err(|_| parse_error(kind, text, ParseFailure::Range))?;
	Ok(())
}

fn store_unsigned<N: TryFrom<u64>>(slot: &mut N, kind: Kind, text: &str) -> Result<()> {
	let wide = literal::parse_u64(text).map_err(|reason| parse_error(kind, text, reason))?;
	*slot = N::try_from(wide).map_err(|_| parse_error(kind, text, ParseFailure::Range))?;
	Ok(())
}

fn parse_error(kind: Kind, text: &str, reason: ParseFailure) -> CoerceError {
	CoerceError::Parse {
		kind,
		text: text.to_owned(),
		reason,
	}
}
