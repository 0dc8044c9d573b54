use serde_json::{Map, Number as JsonNumber, Value as JsonValue};
use serde_content::Number;

use super::serde::classify;
use crate::{Object, Value};

impl Value {
	/// Converts the value into a json representation of the value.
	pub fn into_json(self) -> JsonValue {
		match self {
			Value::Null => JsonValue::Null,
			Value::Bool(boolean) => JsonValue::Bool(boolean),
			Value::Int(int) => JsonValue::Number(JsonNumber::from(int)),
			// This is replicating serde_json::to_string default behavior.
			// f64 will convert to null if it is either NaN or infinity.
			Value::Double(float) => match JsonNumber::from_f64(float) {
				Some(number) => JsonValue::Number(number),
				None => JsonValue::Null,
			},
			Value::String(strand) => JsonValue::String(strand),
			Value::Array(array) => JsonValue::Array(array.into_iter().map(Value::into_json).collect()),
			Value::Object(object) => {
				let mut map = Map::with_capacity(object.len());
				for (k, v) in object {
					map.insert(k, v.into_json());
				}
				JsonValue::Object(map)
			}
		}
	}

	/// Classifies a json value as a `Value`.
	pub fn from_json(json: JsonValue) -> Self {
		match json {
			JsonValue::Null => Value::Null,
			JsonValue::Bool(boolean) => Value::Bool(boolean),
			JsonValue::Number(number) => json_number(&number),
			JsonValue::String(strand) => Value::String(strand),
			JsonValue::Array(array) => Value::Array(array.into_iter().map(Value::from_json).collect()),
			JsonValue::Object(map) => {
				let object: Object = map.into_iter().map(|(k, v)| (k, Value::from_json(v))).collect();
				Value::Object(object)
			}
		}
	}
}

fn json_number(number: &JsonNumber) -> Value {
	let number = if let Some(v) = number.as_i64() {
		Number::I64(v)
	} else if let Some(v) = number.as_u64() {
		Number::U64(v)
	} else {
		Number::F64(number.as_f64().unwrap_or(f64::NAN))
	};
	classify::number(number).unwrap_or(Value::Null)
}

impl From<JsonValue> for Value {
	fn from(json: JsonValue) -> Self {
		Value::from_json(json)
	}
}

impl From<Value> for JsonValue {
	fn from(value: Value) -> Self {
		value.into_json()
	}
}
