#![allow(missing_docs)]

use textval::coerce::{CoerceError, Kind, ParseFailure, assign};

#[test]
fn string_destination_stores_text_verbatim() {
	let mut value = String::from("old");
	assign(&mut value, "abc").expect("string assigns");
	assert_eq!(value, "abc");

	assign(&mut value, "  spaced  \n").expect("whitespace is preserved");
	assert_eq!(value, "  spaced  \n");
}

#[test]
fn bool_accepts_the_exact_literal_set() {
	let mut flag = false;
	for text in ["1", "t", "T", "true", "True", "TRUE"] {
		flag = false;
		assign(&mut flag, text).expect("true literal parses");
		assert!(flag, "{text} should set true");
	}
	for text in ["0", "f", "F", "false", "False", "FALSE"] {
		flag = true;
		assign(&mut flag, text).expect("false literal parses");
		assert!(!flag, "{text} should set false");
	}
}

#[test]
fn bool_rejects_anything_outside_the_set() {
	let mut flag = true;
	for text in ["TRuE", "yes", "on", "2", ""] {
		let err = assign(&mut flag, text).expect_err("literal outside the set fails");
		assert!(matches!(
			err,
			CoerceError::Parse {
				kind: Kind::Bool,
				reason: ParseFailure::Syntax,
				..
			}
		));
	}
	assert!(flag, "failed conversions must not clobber the destination");
}

#[test]
fn integers_parse_decimal_and_prefixed_bases() {
	let mut number = 0_i64;
	assign(&mut number, "5").expect("decimal parses");
	assert_eq!(number, 5);
	assign(&mut number, "-17").expect("negative decimal parses");
	assert_eq!(number, -17);
	assign(&mut number, "0x1F").expect("hex parses");
	assert_eq!(number, 31);
	assign(&mut number, "0b101").expect("binary parses");
	assert_eq!(number, 5);
	assign(&mut number, "0o17").expect("octal parses");
	assert_eq!(number, 15);
	assign(&mut number, "0700").expect("legacy octal parses");
	assert_eq!(number, 448);
	assign(&mut number, "1_000_000").expect("grouped digits parse");
	assert_eq!(number, 1_000_000);
}

#[test]
fn integer_rejects_trailing_garbage() {
	let mut number = 9_i64;
	let err = assign(&mut number, "a1").expect_err("letters fail");
	assert!(matches!(
		err,
		CoerceError::Parse {
			kind: Kind::I64,
			reason: ParseFailure::Syntax,
			..
		}
	));
	assert_eq!(number, 9);

	let err = assign(&mut number, "5 ").expect_err("trailing space fails");
	assert!(matches!(err, CoerceError::Parse { .. }));
}

#[test]
fn unsigned_widths_reject_signs_and_overflow() {
	let mut count = 0_u16;
	assign(&mut count, "65535").expect("max fits");
	assert_eq!(count, 65535);

	let err = assign(&mut count, "65536").expect_err("one past max fails");
	assert!(matches!(
		err,
		CoerceError::Parse {
			kind: Kind::U16,
			reason: ParseFailure::Range,
			..
		}
	));

	let err = assign(&mut count, "-3").expect_err("negative fails");
	assert!(matches!(
		err,
		CoerceError::Parse {
			kind: Kind::U16,
			reason: ParseFailure::Syntax,
			..
		}
	));
}

#[test]
fn floats_parse_scientific_and_special_forms() {
	let mut ratio = 0.0_f64;
	assign(&mut ratio, "1.5").expect("plain decimal parses");
	assert_eq!(ratio, 1.5);
	assign(&mut ratio, "-2e3").expect("scientific parses");
	assert_eq!(ratio, -2000.0);
	assign(&mut ratio, "5").expect("integer literal parses as float");
	assert_eq!(ratio, 5.0);
	assign(&mut ratio, "inf").expect("explicit infinity is allowed");
	assert!(ratio.is_infinite());
	assign(&mut ratio, "NaN").expect("nan is allowed");
	assert!(ratio.is_nan());

	let err = assign(&mut ratio, "a1.1").expect_err("malformed float fails");
	assert!(matches!(
		err,
		CoerceError::Parse {
			kind: Kind::F64,
			reason: ParseFailure::Syntax,
			..
		}
	));
}

#[test]
fn float_overflow_reports_range_at_destination_width() {
	let mut single = 0.0_f32;
	let err = assign(&mut single, "3.5e38").expect_err("overflows f32");
	assert!(matches!(
		err,
		CoerceError::Parse {
			kind: Kind::F32,
			reason: ParseFailure::Range,
			..
		}
	));

	let mut double = 0.0_f64;
	assign(&mut double, "3.5e38").expect("fits f64");
	assert_eq!(double, 3.5e38);
}

#[test]
fn parse_error_message_names_kind_text_and_reason() {
	let mut number = 0_i32;
	let err = assign(&mut number, "abc").expect_err("parse fails");
	assert_eq!(err.to_string(), "cannot convert \"abc\" to i32: invalid syntax");

	let mut byte = 0_u8;
	let err = assign(&mut byte, "300").expect_err("range fails");
	assert_eq!(err.to_string(), "cannot convert \"300\" to u8: value out of range");
}
