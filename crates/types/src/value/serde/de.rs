use std::any::type_name;

use serde::de::value::{MapDeserializer, SeqDeserializer, StringDeserializer};
use serde::de::{
	DeserializeOwned, DeserializeSeed, Deserializer as _, EnumAccess, Error as _, IntoDeserializer,
	Unexpected, VariantAccess, Visitor,
};
use serde::forward_to_deserialize_any;
use serde_content::Number;

use crate::{Error, Object, Result, Value};

type DeError = serde_content::Error;

/// Converts a [`Value`] into a deserializable type `T`.
///
/// Fails with [`Error::Deserialization`] naming the expected type and the kind
/// of value which was supplied when the shapes do not match.
pub fn from_value<T: DeserializeOwned>(value: Value) -> Result<T> {
	let found = value.kind();
	T::deserialize(ValueDeserializer(value)).map_err(|error| Error::Deserialization {
		expected: type_name::<T>().to_owned(),
		found,
		message: error.to_string(),
	})
}

/// Drives a `Deserialize` implementation directly from a [`Value`].
///
/// `Null` stands in for every empty shape (`()`, unit structs, `None`) and a
/// single character string satisfies a `char`. Numbers are handed to
/// `serde_content` so integers and floats coerce into whichever numeric type
/// is requested.
pub struct ValueDeserializer(Value);

fn number<'de>(n: Number) -> serde_content::Deserializer<'de> {
	serde_content::Deserializer::new(serde_content::Value::Number(n)).coerce_numbers()
}

fn unexpected(value: &Value) -> Unexpected<'_> {
	match value {
		Value::Null => Unexpected::Unit,
		Value::Bool(v) => Unexpected::Bool(*v),
		Value::Int(v) => Unexpected::Signed(*v),
		Value::Double(v) => Unexpected::Float(*v),
		Value::String(v) => Unexpected::Str(v),
		Value::Array(_) => Unexpected::Seq,
		Value::Object(_) => Unexpected::Map,
	}
}

fn visit_array<'de, V>(values: Vec<Value>, visitor: V) -> std::result::Result<V::Value, DeError>
where
	V: Visitor<'de>,
{
	let mut seq: SeqDeserializer<_, DeError> = SeqDeserializer::new(values.into_iter());
	let value = visitor.visit_seq(&mut seq)?;
	seq.end()?;
	Ok(value)
}

fn visit_object<'de, V>(object: Object, visitor: V) -> std::result::Result<V::Value, DeError>
where
	V: Visitor<'de>,
{
	let mut map: MapDeserializer<'de, _, DeError> = MapDeserializer::new(object.into_iter());
	let value = visitor.visit_map(&mut map)?;
	map.end()?;
	Ok(value)
}

macro_rules! deserialize_number {
	($($method:ident)*) => {$(
		fn $method<V>(self, visitor: V) -> std::result::Result<V::Value, DeError>
		where
			V: Visitor<'de>,
		{
			match self.0 {
				Value::Int(v) => number(Number::I64(v)).$method(visitor),
				Value::Double(v) => number(Number::F64(v)).$method(visitor),
				other => ValueDeserializer(other).deserialize_any(visitor),
			}
		}
	)*};
}

impl<'de> serde::Deserializer<'de> for ValueDeserializer {
	type Error = DeError;

	fn deserialize_any<V>(self, visitor: V) -> std::result::Result<V::Value, DeError>
	where
		V: Visitor<'de>,
	{
		match self.0 {
			Value::Null => visitor.visit_unit(),
			Value::Bool(v) => visitor.visit_bool(v),
			Value::Int(v) => visitor.visit_i64(v),
			Value::Double(v) => visitor.visit_f64(v),
			Value::String(v) => visitor.visit_string(v),
			Value::Array(v) => visit_array(v, visitor),
			Value::Object(v) => visit_object(v, visitor),
		}
	}

	deserialize_number! {
		deserialize_i8 deserialize_i16 deserialize_i32 deserialize_i64 deserialize_i128
		deserialize_u8 deserialize_u16 deserialize_u32 deserialize_u64 deserialize_u128
		deserialize_f32 deserialize_f64
	}

	fn deserialize_char<V>(self, visitor: V) -> std::result::Result<V::Value, DeError>
	where
		V: Visitor<'de>,
	{
		if let Value::String(v) = &self.0 {
			let mut chars = v.chars();
			if let (Some(c), None) = (chars.next(), chars.next()) {
				return visitor.visit_char(c);
			}
		}
		Err(DeError::invalid_type(unexpected(&self.0), &"a single character"))
	}

	fn deserialize_option<V>(self, visitor: V) -> std::result::Result<V::Value, DeError>
	where
		V: Visitor<'de>,
	{
		match self.0 {
			Value::Null => visitor.visit_none(),
			_ => visitor.visit_some(self),
		}
	}

	fn deserialize_unit<V>(self, visitor: V) -> std::result::Result<V::Value, DeError>
	where
		V: Visitor<'de>,
	{
		match self.0 {
			Value::Null => visitor.visit_unit(),
			other => Err(DeError::invalid_type(unexpected(&other), &"null")),
		}
	}

	fn deserialize_unit_struct<V>(
		self,
		_name: &'static str,
		visitor: V,
	) -> std::result::Result<V::Value, DeError>
	where
		V: Visitor<'de>,
	{
		self.deserialize_unit(visitor)
	}

	fn deserialize_newtype_struct<V>(
		self,
		_name: &'static str,
		visitor: V,
	) -> std::result::Result<V::Value, DeError>
	where
		V: Visitor<'de>,
	{
		visitor.visit_newtype_struct(self)
	}

	fn deserialize_enum<V>(
		self,
		_name: &'static str,
		_variants: &'static [&'static str],
		visitor: V,
	) -> std::result::Result<V::Value, DeError>
	where
		V: Visitor<'de>,
	{
		match self.0 {
			Value::String(variant) => visitor.visit_enum(StringDeserializer::<DeError>::new(variant)),
			Value::Object(object) if object.len() == 1 => {
				let mut entries = object.into_iter();
				match entries.next() {
					Some((variant, value)) => visitor.visit_enum(VariantDeserializer {
						variant,
						value,
					}),
					None => Err(DeError::invalid_length(0, &"a single variant")),
				}
			}
			other => Err(DeError::invalid_type(unexpected(&other), &"an enum variant")),
		}
	}

	forward_to_deserialize_any! {
		bool str string bytes byte_buf seq tuple tuple_struct map struct identifier ignored_any
	}
}

impl<'de> IntoDeserializer<'de, DeError> for Value {
	type Deserializer = ValueDeserializer;

	fn into_deserializer(self) -> Self::Deserializer {
		ValueDeserializer(self)
	}
}

/// An externally tagged enum variant, `{ "Variant": value }`
struct VariantDeserializer {
	variant: String,
	value: Value,
}

impl<'de> EnumAccess<'de> for VariantDeserializer {
	type Error = DeError;
	type Variant = ValueDeserializer;

	fn variant_seed<S>(self, seed: S) -> std::result::Result<(S::Value, Self::Variant), DeError>
	where
		S: DeserializeSeed<'de>,
	{
		let variant = seed.deserialize(StringDeserializer::<DeError>::new(self.variant))?;
		Ok((variant, ValueDeserializer(self.value)))
	}
}

impl<'de> VariantAccess<'de> for ValueDeserializer {
	type Error = DeError;

	fn unit_variant(self) -> std::result::Result<(), DeError> {
		match self.0 {
			Value::Null => Ok(()),
			other => Err(DeError::invalid_type(unexpected(&other), &"a unit variant")),
		}
	}

	fn newtype_variant_seed<S>(self, seed: S) -> std::result::Result<S::Value, DeError>
	where
		S: DeserializeSeed<'de>,
	{
		seed.deserialize(self)
	}

	fn tuple_variant<V>(self, _len: usize, visitor: V) -> std::result::Result<V::Value, DeError>
	where
		V: Visitor<'de>,
	{
		self.deserialize_seq(visitor)
	}

	fn struct_variant<V>(
		self,
		_fields: &'static [&'static str],
		visitor: V,
	) -> std::result::Result<V::Value, DeError>
	where
		V: Visitor<'de>,
	{
		self.deserialize_map(visitor)
	}
}
