use std::borrow::Cow;

use serde::ser::Serialize;
use serde_content::{Data, Expected, Serializer, Unexpected};

use super::classify;
use crate::{Error, Object, Result, Value};

type Content = serde_content::Value<'static>;

/// Convert a `T` into a [`Value`].
///
/// The value is rendered into the generic `serde_content` form first, which is
/// then reinterpreted as a `Value`. Types which cannot be represented, such as
/// maps with non-string keys, fail with [`Error::Serialization`].
pub fn to_value<T>(value: T) -> Result<Value>
where
	T: Serialize,
{
	Serializer::new().serialize(value)?.try_into()
}

impl TryFrom<Content> for Value {
	type Error = Error;

	fn try_from(content: Content) -> Result<Self> {
		match content {
			Content::Unit => Ok(Value::Null),
			Content::Option(v) => match v {
				Some(v) => (*v).try_into(),
				None => Ok(Value::Null),
			},
			Content::Bool(v) => Ok(Value::Bool(v)),
			Content::Number(v) => classify::number(v)
				.ok_or_else(|| Error::Serialization("unsupported number".to_owned())),
			Content::Char(v) => Ok(Value::String(v.to_string())),
			Content::String(v) => Ok(Value::String(v.into_owned())),
			Content::Bytes(v) => Ok(classify::bytes(&v)),
			Content::Seq(v) | Content::Tuple(v) => v.try_into(),
			Content::Map(v) => v.try_into(),
			Content::Struct(v) => data_into_value(v.data),
			Content::Enum(v) => {
				let variant = v.variant.into_owned();
				match v.data {
					Data::Unit => Ok(Value::String(variant)),
					data => {
						let mut object = Object::new();
						object.insert(variant, data_into_value(data)?);
						Ok(Value::Object(object))
					}
				}
			}
		}
	}
}

fn data_into_value(data: Data<'static>) -> Result<Value> {
	match data {
		Data::Unit => Ok(Value::Null),
		Data::NewType {
			value,
		} => value.try_into(),
		Data::Tuple {
			values,
		} => values.try_into(),
		Data::Struct {
			fields,
		} => fields.try_into(),
	}
}

impl TryFrom<Vec<Content>> for Value {
	type Error = Error;

	fn try_from(v: Vec<Content>) -> Result<Self> {
		let mut vec = Vec::with_capacity(v.len());
		for content in v {
			vec.push(content.try_into()?);
		}
		Ok(Self::Array(vec))
	}
}

impl TryFrom<Vec<(Content, Content)>> for Value {
	type Error = Error;

	fn try_from(v: Vec<(Content, Content)>) -> Result<Self> {
		let mut object = Object::new();
		for (key, value) in v {
			let key = match key {
				Content::String(v) => v.into_owned(),
				Content::Char(v) => v.to_string(),
				content => {
					let unexpected = content.unexpected(Expected::String);
					let message = format!("object keys must be strings: {unexpected}");
					return Err(Error::Serialization(message));
				}
			};
			object.insert(key, Value::try_from(value)?);
		}
		Ok(Self::Object(object))
	}
}

impl TryFrom<Vec<(Cow<'static, str>, Content)>> for Value {
	type Error = Error;

	fn try_from(v: Vec<(Cow<'static, str>, Content)>) -> Result<Self> {
		let mut object = Object::new();
		for (key, value) in v {
			object.insert(key.into_owned(), Value::try_from(value)?);
		}
		Ok(Self::Object(object))
	}
}
