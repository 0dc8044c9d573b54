//! Functionality for connecting to a server and calling its methods

pub mod engine;
pub mod err;
pub mod method;
pub mod opt;
pub mod rpc;

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;
use serde::de::DeserializeOwned;
use surrealdb_client_types::Value;
use tokio_util::sync::CancellationToken;

use self::engine::Transport;
use self::engine::session::Session;
use self::engine::subscriptions::Subscriptions;
use self::method::Stream;

/// A specialized `Result` type
pub type Result<T> = std::result::Result<T, err::Error>;

/// A client for a SurrealDB server
///
/// The handle is cheap to clone and every clone shares the same session, so
/// calls can be issued concurrently from many tasks.
pub struct Surreal<T> {
	inner: Arc<Inner<T>>,
}

struct Inner<T> {
	transport: Arc<T>,
	session: Session<T>,
	subscriptions: Arc<Subscriptions>,
	pump: Mutex<Option<CancellationToken>>,
}

impl<T> Clone for Surreal<T> {
	fn clone(&self) -> Self {
		Self {
			inner: self.inner.clone(),
		}
	}
}

impl<T> fmt::Debug for Surreal<T>
where
	T: Transport,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Surreal")
			.field("endpoint", &self.inner.transport.endpoint().url.as_str())
			.field("connected", &self.inner.transport.is_connected())
			.field("pending", &self.inner.session.pending())
			.field("subscriptions", &self.inner.subscriptions.len())
			.finish()
	}
}

impl<T> Surreal<T>
where
	T: Transport,
{
	/// Wraps a transport, which is not connected yet
	pub fn new(transport: T) -> Self {
		let transport = Arc::new(transport);
		let capacity = transport.endpoint().config().get_capacity();
		Self {
			inner: Arc::new(Inner {
				session: Session::new(transport.clone()),
				subscriptions: Arc::new(Subscriptions::new(capacity)),
				pump: Mutex::new(None),
				transport,
			}),
		}
	}

	/// Connects the transport and starts routing live query notifications
	pub async fn connect(&self) -> Result<()> {
		let transport = &self.inner.transport;
		debug!("Connecting to {}", transport.endpoint().url);
		transport.connect().await?;
		let canceller = CancellationToken::new();
		if let Some(previous) = self.inner.pump.lock().replace(canceller.clone()) {
			previous.cancel();
		}
		engine::pump::spawn(
			transport.notifications(),
			self.inner.subscriptions.clone(),
			canceller,
		);
		Ok(())
	}

	/// Disconnects the transport
	///
	/// Every pending call fails with a connection error and every live query
	/// stream is finished. This local teardown happens even if the transport
	/// reports an error, which is then returned.
	pub async fn disconnect(&self) -> Result<()> {
		if let Some(canceller) = self.inner.pump.lock().take() {
			canceller.cancel();
		}
		self.inner.session.fail_all();
		self.inner.subscriptions.finish_all();
		debug!("Disconnecting from {}", self.inner.transport.endpoint().url);
		self.inner.transport.disconnect().await
	}

	pub fn is_connected(&self) -> bool {
		self.inner.transport.is_connected()
	}

	/// Calls a remote method with dynamic parameters
	pub async fn call(&self, method: &str, params: Vec<Value>) -> Result<Value> {
		self.inner.session.call(method, params).await
	}

	/// Calls a remote method converting parameters and result through serde
	///
	/// See [`Session::call_as`] for how parameters are laid out.
	pub async fn call_as<P, R>(&self, method: &str, params: P) -> Result<R>
	where
		P: Serialize,
		R: DeserializeOwned,
	{
		self.inner.session.call_as(method, params).await
	}

	/// Subscribes to the notifications of a live query started elsewhere
	pub fn subscribe(&self, query_id: impl Into<String>) -> Result<Stream> {
		self.inner.subscriptions.subscribe(query_id)
	}

	/// Finishes the stream of a live query without contacting the server
	pub fn unsubscribe(&self, query_id: &str) -> bool {
		self.inner.subscriptions.unsubscribe(query_id)
	}

	/// Whether a live query currently has a subscriber
	pub fn is_subscribed(&self, query_id: &str) -> bool {
		self.inner.subscriptions.contains(query_id)
	}

	/// The number of calls still waiting for a response
	pub fn pending(&self) -> usize {
		self.inner.session.pending()
	}
}
