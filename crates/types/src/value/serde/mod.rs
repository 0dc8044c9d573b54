//! Conversions between typed values and [`Value`], and the untyped wire
//! encoding of [`Value`] itself.
//!
//! Typed values are rendered into `serde_content`, the generic structured form
//! every `Serialize` type can be rendered into, and read back by walking the
//! [`Value`] directly. Whenever a generic value has
//! to be assigned a `Value` variant the same ordered precedence is applied:
//! null, boolean, integer, floating point, string, array, object.

pub(crate) mod classify;
mod de;
mod ser;

use std::fmt;

use serde::de::{Deserialize, Deserializer, Error as _, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};
use serde_content::Number;

pub use self::de::from_value;
pub use self::ser::to_value;
use crate::{Object, Value};

impl Serialize for Value {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		match self {
			Value::Null => serializer.serialize_unit(),
			Value::Bool(v) => serializer.serialize_bool(*v),
			Value::Int(v) => serializer.serialize_i64(*v),
			Value::Double(v) => serializer.serialize_f64(*v),
			Value::String(v) => serializer.serialize_str(v),
			Value::Array(v) => serializer.collect_seq(v),
			Value::Object(v) => serializer.collect_map(v),
		}
	}
}

impl<'de> Deserialize<'de> for Value {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_any(ValueVisitor)
	}
}

struct ValueVisitor;

impl ValueVisitor {
	fn number<E: serde::de::Error>(number: Number) -> Result<Value, E> {
		classify::number(number).ok_or_else(|| E::custom("unsupported number"))
	}
}

impl<'de> Visitor<'de> for ValueVisitor {
	type Value = Value;

	fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("any value")
	}

	fn visit_unit<E>(self) -> Result<Value, E> {
		Ok(Value::Null)
	}

	fn visit_none<E>(self) -> Result<Value, E> {
		Ok(Value::Null)
	}

	fn visit_some<D>(self, deserializer: D) -> Result<Value, D::Error>
	where
		D: Deserializer<'de>,
	{
		Value::deserialize(deserializer)
	}

	fn visit_bool<E>(self, v: bool) -> Result<Value, E> {
		Ok(Value::Bool(v))
	}

	fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Value, E> {
		Self::number(Number::I64(v))
	}

	fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Value, E> {
		Self::number(Number::U64(v))
	}

	fn visit_i128<E: serde::de::Error>(self, v: i128) -> Result<Value, E> {
		Self::number(Number::I128(v))
	}

	fn visit_u128<E: serde::de::Error>(self, v: u128) -> Result<Value, E> {
		Self::number(Number::U128(v))
	}

	fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<Value, E> {
		Self::number(Number::F64(v))
	}

	fn visit_str<E>(self, v: &str) -> Result<Value, E> {
		Ok(Value::String(v.to_owned()))
	}

	fn visit_string<E>(self, v: String) -> Result<Value, E> {
		Ok(Value::String(v))
	}

	fn visit_bytes<E>(self, v: &[u8]) -> Result<Value, E> {
		Ok(classify::bytes(v))
	}

	fn visit_seq<A>(self, mut seq: A) -> Result<Value, A::Error>
	where
		A: SeqAccess<'de>,
	{
		let mut items = Vec::with_capacity(seq.size_hint().unwrap_or_default());
		while let Some(item) = seq.next_element()? {
			items.push(item);
		}
		Ok(Value::Array(items))
	}

	fn visit_map<A>(self, mut map: A) -> Result<Value, A::Error>
	where
		A: MapAccess<'de>,
	{
		let mut object = Object::new();
		while let Some((key, value)) = map.next_entry::<String, Value>()? {
			if object.contains_key(&key) {
				return Err(A::Error::custom(format!("duplicate key `{key}`")));
			}
			object.insert(key, value);
		}
		Ok(Value::Object(object))
	}
}
