mod common;

use common::{MockTransport, TIMEOUT};
use futures::StreamExt;
use surrealdb_client::rpc::{Action, Notification};
use surrealdb_client::{Error, Surreal, Value};

#[test_log::test(tokio::test)]
async fn pending_calls_fail_and_subscriptions_finish() {
	let transport = MockTransport::echo();
	transport.hold(true);
	let db = Surreal::new(transport.clone());
	db.connect().await.unwrap();
	let mut stream = db.subscribe("q1").unwrap();
	let call = tokio::spawn({
		let db = db.clone();
		async move { db.call("echo", vec![Value::Int(1)]).await }
	});
	transport.wait_for_held(1).await;
	db.disconnect().await.unwrap();
	let result = tokio::time::timeout(TIMEOUT, call).await.unwrap().unwrap();
	assert_eq!(result, Err(Error::Connection("disconnected".to_owned())));
	// No synthetic close notification is produced
	assert_eq!(tokio::time::timeout(TIMEOUT, stream.next()).await.unwrap(), None);
	assert_eq!(db.pending(), 0);
	assert!(!db.is_subscribed("q1"));
	assert!(!db.is_connected());
}

#[test_log::test(tokio::test)]
async fn calls_fail_after_disconnecting() {
	let db = Surreal::new(MockTransport::echo());
	db.connect().await.unwrap();
	db.disconnect().await.unwrap();
	let err = db.call("echo", Vec::new()).await.unwrap_err();
	assert!(matches!(err, Error::Connection(_)), "{err:?}");
}

#[test_log::test(tokio::test)]
async fn reconnecting_resumes_routing() {
	let transport = MockTransport::echo();
	let db = Surreal::new(transport.clone());
	db.connect().await.unwrap();
	db.disconnect().await.unwrap();
	db.connect().await.unwrap();
	let mut stream = db.subscribe("q1").unwrap();
	transport.notify(Notification::new("q1", Action::Create, Value::Int(1)));
	let notification = tokio::time::timeout(TIMEOUT, stream.next()).await.unwrap().unwrap();
	assert_eq!(notification.result, Value::Int(1));
	assert_eq!(db.call("echo", Vec::new()).await.unwrap(), Value::Array(Vec::new()));
}
