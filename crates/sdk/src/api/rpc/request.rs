use serde::Serialize;
use surrealdb_client_types::Value;

use crate::api::Result;

/// An outgoing call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Request {
	/// Unique for the lifetime of the session that issued it
	pub id: String,
	pub method: String,
	pub params: Vec<Value>,
}

impl Request {
	pub fn new(id: impl Into<String>, method: impl Into<String>, params: Vec<Value>) -> Self {
		Self {
			id: id.into(),
			method: method.into(),
			params,
		}
	}

	/// Encodes the request as a JSON text frame
	pub fn to_json(&self) -> Result<String> {
		Ok(serde_json::to_string(self)?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn encodes_envelope() {
		let request = Request::new("7", "select", vec![Value::from("users:john")]);
		assert_eq!(
			request.to_json().unwrap(),
			r#"{"id":"7","method":"select","params":["users:john"]}"#
		);
	}
}
