//! The session engine and the transport capability it drives

pub(crate) mod pump;
pub mod session;
pub mod subscriptions;

use futures::future::BoxFuture;
use futures::stream::BoxStream;

use crate::api::Result;
use crate::opt::Endpoint;
use crate::rpc::{Notification, Request, Response};

/// A bidirectional message channel to the server
///
/// Implementations own the socket. They correlate every response with the
/// request carrying the same id, and surface server pushed live query
/// notifications on a separate stream.
pub trait Transport: Send + Sync + 'static {
	/// The address and configuration this transport was built with
	fn endpoint(&self) -> &Endpoint;

	/// Establishes the channel
	fn connect(&self) -> BoxFuture<'_, Result<()>>;

	/// Tears the channel down, after which sends must fail
	fn disconnect(&self) -> BoxFuture<'_, Result<()>>;

	/// Sends a request and resolves with the response for its id
	///
	/// This may be called concurrently and responses may arrive in any order.
	fn send(&self, request: Request) -> BoxFuture<'_, Result<Response>>;

	fn is_connected(&self) -> bool;

	/// The live query notifications pushed by the server
	///
	/// This is drained by a single task for as long as the client is connected.
	fn notifications(&self) -> BoxStream<'static, Notification>;
}
