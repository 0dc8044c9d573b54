/// Conversions between `Value` and `serde_json::Value`
pub mod into_json;
/// Object value types
pub mod object;
/// Record identifier value types
pub mod record_id;
/// Typed conversions and the wire encoding of `Value`
pub mod serde;

use std::collections::BTreeMap;
use std::fmt::{self, Display};

pub use self::object::Object;
pub use self::record_id::RecordId;

/// Represents any value which can travel over the RPC wire
///
/// Every request parameter and every response result is expressed as a
/// `Value`. Application types are converted into and out of this form with
/// [`to_value`](crate::to_value) and [`from_value`](crate::from_value).
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
	/// A null value
	#[default]
	Null,
	/// A boolean value (true or false)
	Bool(bool),
	/// A signed 64-bit integer
	Int(i64),
	/// A 64-bit floating point number
	Double(f64),
	/// A string value
	String(String),
	/// An ordered list of values
	Array(Vec<Value>),
	/// A collection of uniquely keyed values
	Object(Object),
}

impl Value {
	/// Returns the name of this value's variant
	pub fn kind(&self) -> &'static str {
		match self {
			Value::Null => "null",
			Value::Bool(_) => "bool",
			Value::Int(_) => "int",
			Value::Double(_) => "double",
			Value::String(_) => "string",
			Value::Array(_) => "array",
			Value::Object(_) => "object",
		}
	}

	/// Check if this Value is NULL
	pub fn is_null(&self) -> bool {
		matches!(self, Value::Null)
	}

	/// Returns the boolean if this is a `Value::Bool`
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Value::Bool(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the integer if this is a `Value::Int`
	pub fn as_i64(&self) -> Option<i64> {
		match self {
			Value::Int(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the number as a float, widening integers
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Value::Int(v) => Some(*v as f64),
			Value::Double(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the string slice if this is a `Value::String`
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Value::String(v) => Some(v),
			_ => None,
		}
	}

	/// Returns the items if this is a `Value::Array`
	pub fn as_array(&self) -> Option<&[Value]> {
		match self {
			Value::Array(v) => Some(v),
			_ => None,
		}
	}

	/// Returns the object if this is a `Value::Object`
	pub fn as_object(&self) -> Option<&Object> {
		match self {
			Value::Object(v) => Some(v),
			_ => None,
		}
	}

	/// Accesses the value found at a certain field if an object, and a
	/// certain index if an array.
	///
	/// Navigation is exploratory, so this never errs: a missing key, an out
	/// of range index or a value of the wrong kind all yield `None`.
	pub fn get<Idx>(&self, index: Idx) -> Option<&Value>
	where
		Value: Indexable<Idx>,
	{
		Indexable::get(self, index)
	}
}

/// Trait for values that can be indexed
pub trait Indexable<Idx> {
	/// Get the value at the given index, if there is one.
	fn get(&self, index: Idx) -> Option<&Value>;
}

impl Indexable<usize> for Value {
	fn get(&self, index: usize) -> Option<&Value> {
		match self {
			Value::Array(arr) => arr.get(index),
			_ => None,
		}
	}
}

impl Indexable<&str> for Value {
	fn get(&self, index: &str) -> Option<&Value> {
		match self {
			Value::Object(obj) => obj.get(index),
			_ => None,
		}
	}
}

impl Display for Value {
	/// Formats the value as compact JSON text
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
		f.write_str(&text)
	}
}

impl From<bool> for Value {
	fn from(v: bool) -> Self {
		Value::Bool(v)
	}
}

macro_rules! from_int {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for Value {
				fn from(v: $ty) -> Self {
					Value::Int(i64::from(v))
				}
			}
		)*
	};
}

from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
	fn from(v: f32) -> Self {
		Value::Double(f64::from(v))
	}
}

impl From<f64> for Value {
	fn from(v: f64) -> Self {
		Value::Double(v)
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Value::String(v.to_owned())
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		Value::String(v)
	}
}

impl From<Object> for Value {
	fn from(v: Object) -> Self {
		Value::Object(v)
	}
}

impl From<BTreeMap<String, Value>> for Value {
	fn from(v: BTreeMap<String, Value>) -> Self {
		Value::Object(Object::from(v))
	}
}

impl From<RecordId> for Value {
	fn from(v: RecordId) -> Self {
		Value::String(v.to_string())
	}
}

impl<T: Into<Value>> From<Vec<T>> for Value {
	fn from(v: Vec<T>) -> Self {
		Value::Array(v.into_iter().map(Into::into).collect())
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(v: Option<T>) -> Self {
		match v {
			Some(v) => v.into(),
			None => Value::Null,
		}
	}
}

impl FromIterator<Value> for Value {
	fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
		Value::Array(iter.into_iter().collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample() -> Value {
		let mut user = Object::new();
		user.insert("name", "John");
		user.insert("tags", vec!["admin", "staff"]);
		Value::from(vec![Value::from(user), Value::Null])
	}

	#[test]
	fn get_navigates_arrays_and_objects() {
		let value = sample();
		let name = value.get(0).and_then(|user| user.get("name"));
		assert_eq!(name, Some(&Value::from("John")));
		let tag = value.get(0).and_then(|user| user.get("tags")).and_then(|tags| tags.get(1));
		assert_eq!(tag.and_then(Value::as_str), Some("staff"));
	}

	#[test]
	fn get_fails_closed() {
		let value = sample();
		// Out of range
		assert_eq!(value.get(5), None);
		// Wrong variant
		assert_eq!(value.get("name"), None);
		assert_eq!(value.get(1).and_then(|v| v.get(0)), None);
		// Missing key
		assert_eq!(value.get(0).and_then(|user| user.get("email")), None);
		assert_eq!(Value::Int(3).get(0), None);
	}

	#[test]
	fn kinds() {
		assert_eq!(Value::Null.kind(), "null");
		assert_eq!(Value::from(true).kind(), "bool");
		assert_eq!(Value::from(1).kind(), "int");
		assert_eq!(Value::from(1.5).kind(), "double");
		assert_eq!(Value::from("a").kind(), "string");
		assert_eq!(Value::from(Vec::<Value>::new()).kind(), "array");
		assert_eq!(Value::from(Object::new()).kind(), "object");
	}

	#[test]
	fn accessors() {
		assert_eq!(Value::Int(2).as_f64(), Some(2.0));
		assert_eq!(Value::Double(2.5).as_i64(), None);
		assert_eq!(Value::from(None::<i64>), Value::Null);
		assert_eq!(Value::from(Some("x")).as_str(), Some("x"));
		assert!(Value::default().is_null());
	}

	#[test]
	fn display_is_json() {
		let value = sample();
		assert_eq!(value.to_string(), r#"[{"name":"John","tags":["admin","staff"]},null]"#);
	}
}
