//! Scalar literal grammars.
//!
//! Integer literals accept an optional sign, `0b`/`0o`/`0x` base prefixes, a
//! bare leading `0` meaning octal, and digit-grouping underscores. Parsers
//! here report only a [`ParseFailure`]; the dispatcher attaches the resolved
//! kind and offending text.

use crate::coerce::ParseFailure;

const I64_MIN_MAGNITUDE: u64 = 1 << 63;

/// Parse the exact boolean literal set: `1 t T true True TRUE` for true and
/// `0 f F false False FALSE` for false. Nothing else matches.
pub(crate) fn parse_bool(text: &str) -> Result<bool, ParseFailure> {
	match text {
		"1" | "t" | "T" | "true" | "True" | "TRUE" => Ok(true),
		"0" | "f" | "F" | "false" | "False" | "FALSE" => Ok(false),
		_ => Err(ParseFailure::Syntax),
	}
}

/// Parse a signed integer literal at full width.
pub(crate) fn parse_i64(text: &str) -> Result<i64, ParseFailure> {
	check_underscores(text)?;
	let (negative, rest) = split_sign(text);
	let magnitude = parse_magnitude(rest)?;
	if negative {
		if magnitude > I64_MIN_MAGNITUDE {
			return Err(ParseFailure::Range);
		}
		if magnitude == I64_MIN_MAGNITUDE {
			return Ok(i64::MIN);
		}
		return Ok(-(magnitude as i64));
	}
	if magnitude > i64::MAX as u64 {
		return Err(ParseFailure::Range);
	}
	Ok(magnitude as i64)
}

/// Parse an unsigned integer literal at full width; sign prefixes are
/// rejected outright.
pub(crate) fn parse_u64(text: &str) -> Result<u64, ParseFailure> {
	if text.starts_with('+') || text.starts_with('-') {
		return Err(ParseFailure::Syntax);
	}
	check_underscores(text)?;
	parse_magnitude(text)
}

/// Parse a float literal at single precision.
pub(crate) fn parse_f32(text: &str) -> Result<f32, ParseFailure> {
	let value: f32 = text.parse().map_err(|_| ParseFailure::Syntax)?;
	if value.is_infinite() && !is_infinite_literal(text) {
		return Err(ParseFailure::Range);
	}
	Ok(value)
}

/// Parse a float literal at double precision.
pub(crate) fn parse_f64(text: &str) -> Result<f64, ParseFailure> {
	let value: f64 = text.parse().map_err(|_| ParseFailure::Syntax)?;
	if value.is_infinite() && !is_infinite_literal(text) {
		return Err(ParseFailure::Range);
	}
	Ok(value)
}

fn is_infinite_literal(text: &str) -> bool {
	let rest = text.strip_prefix(['+', '-']).unwrap_or(text);
	rest.eq_ignore_ascii_case("inf") || rest.eq_ignore_ascii_case("infinity")
}

fn split_sign(text: &str) -> (bool, &str) {
	if let Some(rest) = text.strip_prefix('-') {
		return (true, rest);
	}
	if let Some(rest) = text.strip_prefix('+') {
		return (false, rest);
	}
	(false, text)
}

/// Split the base prefix off an unsigned digit string. A lone `0` stays base
/// ten; `0` followed by anything other than a `b`/`o`/`x` marker is the
/// legacy octal form.
fn split_base(text: &str) -> (u32, &str) {
	let bytes = text.as_bytes();
	if bytes.len() >= 3 && bytes[0] == b'0' {
		match bytes[1].to_ascii_lowercase() {
			b'b' => return (2, &text[2..]),
			b'o' => return (8, &text[2..]),
			b'x' => return (16, &text[2..]),
			_ => {}
		}
	}
	if bytes.len() >= 2 && bytes[0] == b'0' {
		return (8, &text[1..]);
	}
	(10, text)
}

fn parse_magnitude(text: &str) -> Result<u64, ParseFailure> {
	let (base, digits) = split_base(text);
	if digits.is_empty() {
		return Err(ParseFailure::Syntax);
	}
	let mut value = 0_u64;
	for ch in digits.chars() {
		if ch == '_' {
			continue;
		}
		let digit = ch.to_digit(base).ok_or(ParseFailure::Syntax)?;
		value = value
			.checked_mul(u64::from(base))
			.and_then(|shifted| shifted.checked_add(u64::from(digit)))
			.ok_or(ParseFailure::Range)?;
	}
	Ok(value)
}

/// Validate digit-grouping underscores: each `_` must sit between a digit or
/// base prefix on its left and a digit on its right. Literals without
/// underscores pass untouched.
fn check_underscores(text: &str) -> Result<(), ParseFailure> {
	if !text.contains('_') {
		return Ok(());
	}
	let bytes = text.as_bytes();
	let mut idx = 0;
	if matches!(bytes.first(), Some(b'-' | b'+')) {
		idx = 1;
	}
	// `saw` tracks the previous character class: '^' start, '0' digit, '_'
	// underscore, '!' anything else. The base prefix counts as a digit.
	let mut saw = b'^';
	let mut hex = false;
	if bytes.len() - idx >= 2
		&& bytes[idx] == b'0'
		&& matches!(bytes[idx + 1].to_ascii_lowercase(), b'b' | b'o' | b'x')
	{
		hex = bytes[idx + 1].to_ascii_lowercase() == b'x';
		saw = b'0';
		idx += 2;
	}
	for &byte in &bytes[idx..] {
		if byte.is_ascii_digit() || (hex && byte.to_ascii_lowercase().is_ascii_hexdigit()) {
			saw = b'0';
			continue;
		}
		if byte == b'_' {
			if saw != b'0' {
				return Err(ParseFailure::Syntax);
			}
			saw = b'_';
			continue;
		}
		if saw == b'_' {
			return Err(ParseFailure::Syntax);
		}
		saw = b'!';
	}
	if saw == b'_' {
		return Err(ParseFailure::Syntax);
	}
	Ok(())
}
