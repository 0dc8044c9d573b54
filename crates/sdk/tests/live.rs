mod common;

use common::{MockTransport, TIMEOUT};
use futures::StreamExt;
use surrealdb_client::method::Stream;
use surrealdb_client::opt::{Config, IntoEndpoint};
use surrealdb_client::rpc::{Action, Notification, Response};
use surrealdb_client::{Error, Surreal, Value};

fn live_server() -> MockTransport {
	MockTransport::new(|request| match request.method.as_str() {
		"live" => Response::ok(&request.id, "q9"),
		"kill" => Response::ok(&request.id, Value::Null),
		_ => Response::ok(&request.id, Value::Int(42)),
	})
}

async fn collect(stream: Stream) -> Vec<Notification> {
	tokio::time::timeout(TIMEOUT, stream.collect()).await.unwrap()
}

async fn next(stream: &mut Stream) -> Option<Notification> {
	tokio::time::timeout(TIMEOUT, stream.next()).await.unwrap()
}

#[test_log::test(tokio::test)]
async fn close_is_the_last_notification() {
	let transport = live_server();
	let db = Surreal::new(transport.clone());
	db.connect().await.unwrap();
	let stream = db.subscribe("q1").unwrap();
	assert_eq!(stream.id(), "q1");
	transport.notify(Notification::new("q1", Action::Create, Value::Int(1)));
	transport.notify(Notification::new("q1", Action::Close, Value::Null));
	let received = collect(stream).await;
	let actions: Vec<_> = received.iter().map(|n| n.action).collect();
	assert_eq!(actions, [Action::Create, Action::Close]);
	assert!(!db.is_subscribed("q1"));
}

#[test_log::test(tokio::test)]
async fn subscriptions_are_isolated() {
	let transport = live_server();
	let db = Surreal::new(transport.clone());
	db.connect().await.unwrap();
	let a = db.subscribe("a").unwrap();
	let b = db.subscribe("b").unwrap();
	transport.notify(Notification::new("a", Action::Create, Value::Int(1)));
	transport.notify(Notification::new("b", Action::Create, Value::Int(2)));
	transport.notify(Notification::new("c", Action::Create, Value::Int(3)));
	transport.notify(Notification::new("a", Action::Update, Value::Int(4)));
	transport.notify(Notification::new("b", Action::Close, Value::Null));
	transport.notify(Notification::new("a", Action::Close, Value::Null));
	let a: Vec<_> = collect(a).await.into_iter().map(|n| n.result).collect();
	let b: Vec<_> = collect(b).await.into_iter().map(|n| n.result).collect();
	assert_eq!(a, [Value::Int(1), Value::Int(4), Value::Null]);
	assert_eq!(b, [Value::Int(2), Value::Null]);
}

#[test_log::test(tokio::test)]
async fn duplicate_subscriptions_are_rejected() {
	let db = Surreal::new(live_server());
	db.connect().await.unwrap();
	let _first = db.subscribe("q1").unwrap();
	let err = db.subscribe("q1").unwrap_err();
	assert_eq!(err, Error::DuplicateSubscription("q1".to_owned()));
}

#[test_log::test(tokio::test)]
async fn live_and_kill() {
	let transport = live_server();
	let db = Surreal::new(transport.clone());
	db.connect().await.unwrap();
	let mut stream = db.live("person", false).await.unwrap();
	assert_eq!(stream.id(), "q9");
	transport.notify(Notification::new("q9", Action::Delete, Value::from("person:one")));
	let notification = next(&mut stream).await.unwrap();
	assert_eq!(notification.action, Action::Delete);
	assert_eq!(notification.data_as::<String>().unwrap(), "person:one");
	db.kill("q9").await.unwrap();
	assert_eq!(next(&mut stream).await, None);
	let requests = transport.requests();
	assert_eq!(requests[0].method, "live");
	assert_eq!(requests[0].params, vec![Value::from("person"), Value::Bool(false)]);
	assert_eq!(requests[1].method, "kill");
	assert_eq!(requests[1].params, vec![Value::from("q9")]);
}

#[test_log::test(tokio::test)]
async fn live_requires_a_query_id() {
	let transport = MockTransport::new(|request| Response::ok(&request.id, Value::Int(7)));
	let db = Surreal::new(transport);
	db.connect().await.unwrap();
	let err = db.live("person", true).await.unwrap_err();
	assert!(matches!(err, Error::InvalidResponse(_)), "{err:?}");
}

#[test_log::test(tokio::test)]
async fn bounded_streams_keep_order() {
	let endpoint = ("memory:8000", Config::new().capacity(1)).into_endpoint().unwrap();
	let transport = MockTransport::with_endpoint(endpoint, |request| {
		Response::ok(&request.id, Value::Null)
	});
	let db = Surreal::new(transport.clone());
	db.connect().await.unwrap();
	let stream = db.subscribe("q1").unwrap();
	for n in 0..10i64 {
		transport.notify(Notification::new("q1", Action::Update, Value::Int(n)));
	}
	transport.notify(Notification::new("q1", Action::Close, Value::Null));
	let received: Vec<_> = collect(stream).await.into_iter().map(|n| n.result).collect();
	let mut expected: Vec<_> = (0..10i64).map(Value::Int).collect();
	expected.push(Value::Null);
	assert_eq!(received, expected);
}

#[test_log::test(tokio::test)]
async fn dropped_streams_can_be_resubscribed() {
	let transport = live_server();
	let db = Surreal::new(transport.clone());
	db.connect().await.unwrap();
	drop(db.subscribe("q1").unwrap());
	assert!(!db.is_subscribed("q1"));
	let mut stream = db.subscribe("q1").unwrap();
	transport.notify(Notification::new("q1", Action::Create, Value::Int(1)));
	assert_eq!(next(&mut stream).await.map(|n| n.result), Some(Value::Int(1)));
}
