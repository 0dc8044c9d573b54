use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use surrealdb_client_types::{Value, from_value};

use crate::api::Result;

/// The action that caused a live query notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
	#[serde(alias = "create")]
	Create,
	#[serde(alias = "update")]
	Update,
	#[serde(alias = "delete")]
	Delete,
	/// The live query was terminated, no further notifications follow
	#[serde(alias = "close", alias = "KILLED", alias = "killed")]
	Close,
}

impl Action {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Create => "CREATE",
			Self::Update => "UPDATE",
			Self::Delete => "DELETE",
			Self::Close => "CLOSE",
		}
	}
}

impl fmt::Display for Action {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A change pushed by the server for a live query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
	#[serde(rename = "queryId", alias = "id")]
	pub query_id: String,
	pub action: Action,
	#[serde(default)]
	pub result: Value,
}

impl Notification {
	pub fn new(query_id: impl Into<String>, action: Action, result: impl Into<Value>) -> Self {
		Self {
			query_id: query_id.into(),
			action,
			result: result.into(),
		}
	}

	/// Whether this notification terminates its subscription
	pub fn is_close(&self) -> bool {
		self.action == Action::Close
	}

	/// Decodes the payload into an application type
	pub fn data_as<R>(&self) -> Result<R>
	where
		R: DeserializeOwned,
	{
		Ok(from_value(self.result.clone())?)
	}
}
