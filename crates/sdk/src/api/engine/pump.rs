use std::sync::Arc;

use futures::StreamExt;
use futures::stream::BoxStream;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::subscriptions::Subscriptions;
use crate::rpc::Notification;

/// Spawns the task feeding transport notifications into the router
///
/// The task runs until the transport stream ends or the token is cancelled.
pub(crate) fn spawn(
	mut notifications: BoxStream<'static, Notification>,
	subscriptions: Arc<Subscriptions>,
	canceller: CancellationToken,
) -> JoinHandle<()> {
	tokio::spawn(async move {
		trace!("Routing live query notifications");
		loop {
			tokio::select! {
				biased;
				// Check if this has shutdown
				_ = canceller.cancelled() => break,
				// Receive a notification from the transport
				notification = notifications.next() => match notification {
					Some(notification) => subscriptions.route(notification).await,
					None => {
						trace!("Transport notification stream ended");
						break;
					}
				}
			}
		}
		trace!("Stopped routing live query notifications");
	})
}
