use std::fmt::Display;

use thiserror::Error;

/// A specialized `Result` type for value conversions and record id parsing
pub type Result<T> = std::result::Result<T, Error>;

/// An error raised while parsing a record id or converting between a typed
/// value and a [`Value`](crate::Value)
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
	/// The text could not be parsed as a `table:id` record id
	#[error("Invalid record id `{original}`: {reason}")]
	InvalidRecordId {
		reason: String,
		original: String,
	},

	/// The typed value cannot be represented as a `Value`
	#[error("failed to serialize to a Value: {0}")]
	Serialization(String),

	/// The `Value` does not have the shape the target type expects
	#[error("failed to deserialize `{expected}` from a Value of kind `{found}`: {message}")]
	Deserialization {
		expected: String,
		found: &'static str,
		message: String,
	},
}

impl Error {
	pub(crate) fn invalid_record_id(reason: impl Into<String>, original: &str) -> Self {
		Self::InvalidRecordId {
			reason: reason.into(),
			original: original.to_owned(),
		}
	}
}

impl serde::ser::Error for Error {
	fn custom<T>(msg: T) -> Self
	where
		T: Display,
	{
		Self::Serialization(msg.to_string())
	}
}

impl From<serde_content::Error> for Error {
	fn from(error: serde_content::Error) -> Self {
		Self::Serialization(error.to_string())
	}
}
