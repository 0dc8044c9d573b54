#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_channel::{Receiver, Sender};
use futures::StreamExt;
use futures::future::BoxFuture;
use futures::stream::BoxStream;
use parking_lot::Mutex;
use surrealdb_client::engine::Transport;
use surrealdb_client::opt::{Endpoint, IntoEndpoint};
use surrealdb_client::rpc::{Notification, Request, Response};
use surrealdb_client::{Error, Result, Value};

pub const TIMEOUT: Duration = Duration::from_secs(5);

type Responder = dyn Fn(&Request) -> Response + Send + Sync;

/// An in-memory transport answering requests from a script
#[derive(Clone)]
pub struct MockTransport {
	inner: Arc<Inner>,
}

struct Inner {
	endpoint: Endpoint,
	connected: AtomicBool,
	hold: AtomicBool,
	responder: Box<Responder>,
	held: Mutex<Vec<(Request, Sender<Response>)>>,
	requests: Mutex<Vec<Request>>,
	failure: Mutex<Option<Error>>,
	notifications: (Sender<Notification>, Receiver<Notification>),
}

impl MockTransport {
	/// Answers every request with the response built by `responder`
	pub fn new<F>(responder: F) -> Self
	where
		F: Fn(&Request) -> Response + Send + Sync + 'static,
	{
		Self::with_endpoint("memory:8000".into_endpoint().unwrap(), responder)
	}

	pub fn with_endpoint<F>(endpoint: Endpoint, responder: F) -> Self
	where
		F: Fn(&Request) -> Response + Send + Sync + 'static,
	{
		Self {
			inner: Arc::new(Inner {
				endpoint,
				connected: AtomicBool::new(false),
				hold: AtomicBool::new(false),
				responder: Box::new(responder),
				held: Mutex::default(),
				requests: Mutex::default(),
				failure: Mutex::default(),
				notifications: async_channel::unbounded(),
			}),
		}
	}

	/// Echoes the parameters of every request back as its result
	pub fn echo() -> Self {
		Self::new(|request| Response::ok(&request.id, Value::Array(request.params.clone())))
	}

	/// Parks requests until they are released instead of answering them
	pub fn hold(&self, hold: bool) {
		self.inner.hold.store(hold, Ordering::SeqCst);
	}

	pub fn held(&self) -> usize {
		self.inner.held.lock().len()
	}

	/// Waits until `count` requests are parked
	pub async fn wait_for_held(&self, count: usize) {
		tokio::time::timeout(TIMEOUT, async {
			while self.held() < count {
				tokio::time::sleep(Duration::from_millis(1)).await;
			}
		})
		.await
		.unwrap();
	}

	/// Answers the parked requests, most recent first
	pub async fn release_reversed(&self) {
		let held: Vec<_> = self.inner.held.lock().drain(..).collect();
		for (request, responder) in held.into_iter().rev() {
			let response = (self.inner.responder)(&request);
			responder.send(response).await.unwrap();
		}
	}

	/// Makes every following send fail with `error`, while staying connected
	pub fn fail_sends(&self, error: Option<Error>) {
		*self.inner.failure.lock() = error;
	}

	/// Pushes a notification as if the server had sent it
	pub fn notify(&self, notification: Notification) {
		self.inner.notifications.0.try_send(notification).unwrap();
	}

	/// The requests sent so far, in order
	pub fn requests(&self) -> Vec<Request> {
		self.inner.requests.lock().clone()
	}
}

impl Transport for MockTransport {
	fn endpoint(&self) -> &Endpoint {
		&self.inner.endpoint
	}

	fn connect(&self) -> BoxFuture<'_, Result<()>> {
		Box::pin(async move {
			self.inner.connected.store(true, Ordering::SeqCst);
			Ok(())
		})
	}

	fn disconnect(&self) -> BoxFuture<'_, Result<()>> {
		Box::pin(async move {
			self.inner.connected.store(false, Ordering::SeqCst);
			// Parked requests never get an answer
			self.inner.held.lock().clear();
			Ok(())
		})
	}

	fn send(&self, request: Request) -> BoxFuture<'_, Result<Response>> {
		Box::pin(async move {
			if !self.is_connected() {
				return Err(Error::Connection("connection closed".to_owned()));
			}
			self.inner.requests.lock().push(request.clone());
			if let Some(error) = self.inner.failure.lock().clone() {
				return Err(error);
			}
			if !self.inner.hold.load(Ordering::SeqCst) {
				return Ok((self.inner.responder)(&request));
			}
			let (sender, receiver) = async_channel::bounded(1);
			self.inner.held.lock().push((request, sender));
			receiver.recv().await.map_err(|_| Error::Connection("connection closed".to_owned()))
		})
	}

	fn is_connected(&self) -> bool {
		self.inner.connected.load(Ordering::SeqCst)
	}

	fn notifications(&self) -> BoxStream<'static, Notification> {
		self.inner.notifications.1.clone().boxed()
	}
}

/// Waits for a condition that is reached by a background task
pub async fn eventually(mut condition: impl FnMut() -> bool) {
	tokio::time::timeout(TIMEOUT, async {
		while !condition() {
			tokio::time::sleep(Duration::from_millis(1)).await;
		}
	})
	.await
	.unwrap();
}
