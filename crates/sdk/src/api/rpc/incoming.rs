use serde_json::Value as JsonValue;

use super::{Notification, Response};
use crate::api::Result;
use crate::api::err::Error;

/// A decoded frame received from the server
#[derive(Debug, Clone, PartialEq)]
pub enum Incoming {
	/// The answer to a request, correlated by id
	Response(Response),
	/// A live query notification, correlated by query id
	Notification(Notification),
}

impl Incoming {
	/// Decodes and classifies a JSON text frame
	pub fn from_json(text: &str) -> Result<Self> {
		Self::classify(serde_json::from_str(text)?)
	}

	/// Decodes and classifies a JSON binary frame
	pub fn from_slice(bytes: &[u8]) -> Result<Self> {
		Self::classify(serde_json::from_slice(bytes)?)
	}

	fn classify(frame: JsonValue) -> Result<Self> {
		let JsonValue::Object(map) = &frame else {
			return Err(Error::Json(format!("expected an object frame, found `{frame}`")));
		};
		// A top level query id always marks a notification
		if map.contains_key("queryId") {
			return Ok(Self::Notification(serde_json::from_value(frame)?));
		}
		if map.get("id").is_some_and(|id| !id.is_null()) {
			return Ok(Self::Response(serde_json::from_value(frame)?));
		}
		// Without a request id the payload may wrap a notification
		match map.get("result") {
			Some(result) if is_notification(result) => {
				Ok(Self::Notification(serde_json::from_value(result.clone())?))
			}
			_ => Err(Error::Json("frame has neither a request id nor a notification".to_owned())),
		}
	}
}

fn is_notification(result: &JsonValue) -> bool {
	let JsonValue::Object(map) = result else {
		return false;
	};
	(map.contains_key("id") || map.contains_key("queryId")) && map.contains_key("action")
}

#[cfg(test)]
mod tests {
	use surrealdb_client_types::Value;

	use super::*;
	use crate::rpc::Action;

	#[test]
	fn response_frames() {
		let frame = Incoming::from_json(r#"{"id":"3","result":{"name":"John"}}"#).unwrap();
		let Incoming::Response(response) = frame else {
			panic!("expected a response");
		};
		assert_eq!(response.id, "3");
		assert_eq!(
			response.into_result().unwrap().get("name"),
			Some(&Value::String("John".to_owned()))
		);
	}

	#[test]
	fn flat_notification_frames() {
		let frame =
			Incoming::from_slice(br#"{"queryId":"q1","action":"CREATE","result":{"n":1}}"#)
				.unwrap();
		assert_eq!(
			frame,
			Incoming::Notification(Notification::new(
				"q1",
				Action::Create,
				Value::Object([("n", 1)].into_iter().collect()),
			))
		);
	}

	#[test]
	fn nested_notification_frames() {
		let frame = Incoming::from_json(
			r#"{"id":null,"result":{"id":"q2","action":"DELETE","result":{"n":1}}}"#,
		)
		.unwrap();
		let Incoming::Notification(notification) = frame else {
			panic!("expected a notification");
		};
		assert_eq!(notification.query_id, "q2");
		assert_eq!(notification.action, Action::Delete);
	}

	#[test]
	fn unroutable_frames() {
		assert!(matches!(Incoming::from_json(r#"{"result":true}"#), Err(Error::Json(_))));
		assert!(matches!(Incoming::from_json("[1, 2]"), Err(Error::Json(_))));
		assert!(matches!(Incoming::from_json("{"), Err(Error::Json(_))));
	}
}
