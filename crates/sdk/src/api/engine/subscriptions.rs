//! Routing of live query notifications to their subscribers

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use async_channel::Sender;
use parking_lot::Mutex;

use crate::api::Result;
use crate::api::err::Error;
use crate::method::Stream;
use crate::rpc::Notification;

/// The live queries with a registered consumer, keyed by query id
///
/// Notifications are only ever delivered to the consumer registered for
/// their query id.
#[derive(Debug, Default)]
pub struct Subscriptions {
	capacity: usize,
	sinks: Mutex<HashMap<String, Sender<Notification>>>,
}

impl Subscriptions {
	/// Creates an empty router whose streams buffer `capacity` notifications
	///
	/// A capacity of `0` leaves the streams unbounded.
	pub fn new(capacity: usize) -> Self {
		Self {
			capacity,
			sinks: Mutex::default(),
		}
	}

	/// Registers a consumer for a live query
	///
	/// A registration whose stream has already been dropped does not count as
	/// a consumer and is replaced.
	pub fn subscribe(self: &Arc<Self>, query_id: impl Into<String>) -> Result<Stream> {
		let query_id = query_id.into();
		let (sender, receiver) = match self.capacity {
			0 => async_channel::unbounded(),
			capacity => async_channel::bounded(capacity),
		};
		match self.sinks.lock().entry(query_id.clone()) {
			Entry::Vacant(entry) => {
				entry.insert(sender);
			}
			Entry::Occupied(mut entry) if entry.get().is_closed() => {
				entry.insert(sender);
			}
			Entry::Occupied(..) => return Err(Error::DuplicateSubscription(query_id)),
		}
		trace!("Subscribed to live query {query_id}");
		Ok(Stream::new(query_id, receiver, Arc::downgrade(self)))
	}

	/// Finishes the stream of a live query and forgets about it
	///
	/// Returns whether a subscription was registered.
	pub fn unsubscribe(&self, query_id: &str) -> bool {
		match self.sinks.lock().remove(query_id) {
			Some(sender) => {
				sender.close();
				trace!("Unsubscribed from live query {query_id}");
				true
			}
			None => false,
		}
	}

	/// Delivers a notification to the consumer of its live query
	///
	/// A `Close` notification is delivered, after which the stream finishes
	/// and the subscription is removed.
	pub async fn route(&self, notification: Notification) {
		let query_id = notification.query_id.clone();
		let close = notification.is_close();
		let sender = self.sinks.lock().get(&query_id).cloned();
		let Some(sender) = sender else {
			trace!("Dropping notification for unknown live query {query_id}");
			return;
		};
		if sender.send(notification).await.is_err() {
			trace!("Receiver dropped for live query {query_id}");
			self.remove(&query_id, &sender);
			return;
		}
		if close {
			self.remove(&query_id, &sender);
			sender.close();
			trace!("Live query {query_id} was closed");
		}
	}

	// Only removes the registration if it still belongs to `sender`
	fn remove(&self, query_id: &str, sender: &Sender<Notification>) {
		let mut sinks = self.sinks.lock();
		if sinks.get(query_id).is_some_and(|current| current.same_channel(sender)) {
			sinks.remove(query_id);
		}
	}

	/// Forgets a live query whose stream was dropped
	pub(crate) fn release(&self, query_id: &str) {
		let mut sinks = self.sinks.lock();
		if sinks.get(query_id).is_some_and(Sender::is_closed) {
			sinks.remove(query_id);
			trace!("Stream dropped for live query {query_id}");
		}
	}

	/// Finishes every stream, without a final notification
	pub fn finish_all(&self) {
		let drained: Vec<_> = self.sinks.lock().drain().collect();
		if !drained.is_empty() {
			debug!("Finishing {} live query streams", drained.len());
		}
		for (_, sender) in drained {
			sender.close();
		}
	}

	pub fn contains(&self, query_id: &str) -> bool {
		self.sinks.lock().contains_key(query_id)
	}

	pub fn len(&self) -> usize {
		self.sinks.lock().len()
	}

	pub fn is_empty(&self) -> bool {
		self.sinks.lock().is_empty()
	}
}
