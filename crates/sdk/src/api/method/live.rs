use std::pin::Pin;
use std::sync::Weak;
use std::task::{Context, Poll};

use async_channel::Receiver;
use futures::StreamExt;
use surrealdb_client_types::Value;

use crate::api::err::Error;
use crate::api::{Result, Surreal};
use crate::api::engine::subscriptions::Subscriptions;
use crate::engine::Transport;
use crate::rpc::{Method, Notification};

/// A stream of live query notifications
///
/// The stream ends after a `Close` notification, when the live query is
/// unsubscribed or killed, or when the client disconnects. Dropping it
/// unregisters the subscription, the live query keeps running on the server
/// until it is killed.
#[derive(Debug)]
#[must_use = "streams do nothing unless you poll them"]
pub struct Stream {
	id: String,
	rx: Pin<Box<Receiver<Notification>>>,
	router: Weak<Subscriptions>,
}

impl Stream {
	pub(crate) fn new(id: String, rx: Receiver<Notification>, router: Weak<Subscriptions>) -> Self {
		Self {
			id,
			rx: Box::pin(rx),
			router,
		}
	}

	/// The id of the live query feeding this stream
	pub fn id(&self) -> &str {
		&self.id
	}
}

impl futures::Stream for Stream {
	type Item = Notification;

	fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
		self.rx.poll_next_unpin(cx)
	}
}

impl Drop for Stream {
	fn drop(&mut self) {
		self.rx.close();
		if let Some(router) = self.router.upgrade() {
			router.release(&self.id);
		}
	}
}

impl<T> Surreal<T>
where
	T: Transport,
{
	/// Starts a live query on a table and subscribes to its notifications
	///
	/// With `diff` set, the server sends JSON patches instead of full records.
	pub async fn live(&self, table: &str, diff: bool) -> Result<Stream> {
		let params = vec![Value::from(table), Value::Bool(diff)];
		match self.call(Method::Live.as_str(), params).await? {
			Value::String(query_id) => self.subscribe(query_id),
			value => Err(Error::InvalidResponse(format!(
				"expected a live query id, found {}",
				value.kind()
			))),
		}
	}

	/// Stops a live query
	///
	/// The local stream is finished before the server is asked to kill the query,
	/// so no further notifications are delivered even if the request fails.
	pub async fn kill(&self, query_id: &str) -> Result<()> {
		self.unsubscribe(query_id);
		self.call(Method::Kill.as_str(), vec![Value::from(query_id)]).await?;
		Ok(())
	}
}
