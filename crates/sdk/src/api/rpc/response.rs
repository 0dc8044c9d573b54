use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use surrealdb_client_types::Value;

use crate::api::Result;
use crate::api::err::Error;

/// The answer to a single [`Request`](super::Request)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
	#[serde(deserialize_with = "request_id")]
	pub id: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub result: Option<Value>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub error: Option<Failure>,
}

/// The error envelope of a failed request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Failure {
	pub code: i64,
	pub message: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub data: Option<Value>,
}

impl Response {
	/// A successful response
	pub fn ok(id: impl Into<String>, result: impl Into<Value>) -> Self {
		Self {
			id: id.into(),
			result: Some(result.into()),
			error: None,
		}
	}

	/// A failed response
	pub fn err(id: impl Into<String>, code: i64, message: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			result: None,
			error: Some(Failure {
				code,
				message: message.into(),
				data: None,
			}),
		}
	}

	/// Resolves the envelope into the value the caller is waiting for
	///
	/// An error envelope takes precedence over any result. A response with
	/// neither is a success carrying `Null`.
	pub fn into_result(self) -> Result<Value> {
		match self.error {
			Some(failure) => Err(Error::from(failure)),
			None => Ok(self.result.unwrap_or_default()),
		}
	}
}

// Servers may echo the id as a number when the request used one
fn request_id<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	struct IdVisitor;

	impl Visitor<'_> for IdVisitor {
		type Value = String;

		fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
			f.write_str("a string or integer request id")
		}

		fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<String, E> {
			Ok(v.to_owned())
		}

		fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<String, E> {
			Ok(v)
		}

		fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<String, E> {
			Ok(v.to_string())
		}

		fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<String, E> {
			Ok(v.to_string())
		}
	}

	deserializer.deserialize_any(IdVisitor)
}
