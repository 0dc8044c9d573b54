//! Assigns a `Value` variant to numbers reported by a generic format.
//!
//! A numeric literal can usually be read both as an integer and as a float.
//! The attempts below run in a fixed order: integer first, then floating
//! point. Anything the format reports as an integer that fits an `i64`
//! becomes `Value::Int`. Floats stay floats even when their fractional part
//! is zero, and integers outside the `i64` range are only representable as
//! `Value::Double`, losing precision.

use serde_content::Number;

use crate::Value;

pub(crate) fn number(number: Number) -> Option<Value> {
	if let Some(v) = as_int(&number) {
		return Some(Value::Int(v));
	}
	if let Some(v) = as_float(&number) {
		return Some(Value::Double(v));
	}
	None
}

fn as_int(number: &Number) -> Option<i64> {
	match *number {
		Number::I8(v) => Some(v.into()),
		Number::U8(v) => Some(v.into()),
		Number::I16(v) => Some(v.into()),
		Number::U16(v) => Some(v.into()),
		Number::I32(v) => Some(v.into()),
		Number::U32(v) => Some(v.into()),
		Number::I64(v) => Some(v),
		Number::U64(v) => i64::try_from(v).ok(),
		Number::I128(v) => i64::try_from(v).ok(),
		Number::U128(v) => i64::try_from(v).ok(),
		_ => None,
	}
}

fn as_float(number: &Number) -> Option<f64> {
	match *number {
		Number::F32(v) => Some(v.into()),
		Number::F64(v) => Some(v),
		Number::U64(v) => Some(v as f64),
		Number::I128(v) => Some(v as f64),
		Number::U128(v) => Some(v as f64),
		_ => None,
	}
}

/// Byte buffers have no variant of their own and travel as arrays of integers
pub(crate) fn bytes(v: &[u8]) -> Value {
	Value::Array(v.iter().map(|b| Value::Int((*b).into())).collect())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn integers_in_range() {
		assert_eq!(number(Number::U8(7)), Some(Value::Int(7)));
		assert_eq!(number(Number::I32(-3)), Some(Value::Int(-3)));
		assert_eq!(number(Number::U64(10)), Some(Value::Int(10)));
		assert_eq!(number(Number::I128(-10)), Some(Value::Int(-10)));
	}

	#[test]
	fn integers_out_of_range() {
		assert_eq!(number(Number::U64(u64::MAX)), Some(Value::Double(u64::MAX as f64)));
		assert_eq!(number(Number::I128(i128::MIN)), Some(Value::Double(i128::MIN as f64)));
	}

	#[test]
	fn floats() {
		assert_eq!(number(Number::F64(2.0)), Some(Value::Double(2.0)));
		assert_eq!(number(Number::F32(0.5)), Some(Value::Double(0.5)));
	}
}
