use std::time::Duration;

/// Configuration for a server connection, including: query_timeout, reconnect_interval, capacity
///
/// Timeouts and reconnection are handled by the transport. The session core
/// only reads the capacity of live query streams.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
	pub(crate) query_timeout: Option<Duration>,
	pub(crate) reconnect_interval: Option<Duration>,
	pub(crate) capacity: usize,
}

impl Config {
	///Create a default config that can be modified to configure a connection
	pub fn new() -> Self {
		Default::default()
	}

	///Set the query timeout of the config
	pub fn query_timeout(mut self, timeout: impl Into<Option<Duration>>) -> Self {
		self.query_timeout = timeout.into();
		self
	}

	///Set the interval between reconnection attempts
	pub fn reconnect_interval(mut self, interval: impl Into<Option<Duration>>) -> Self {
		self.reconnect_interval = interval.into();
		self
	}

	/// Set how many notifications a live query stream buffers
	///
	/// A capacity of `0`, the default, leaves the streams unbounded.
	pub fn capacity(mut self, capacity: usize) -> Self {
		self.capacity = capacity;
		self
	}

	pub fn get_query_timeout(&self) -> Option<Duration> {
		self.query_timeout
	}

	pub fn get_reconnect_interval(&self) -> Option<Duration> {
		self.reconnect_interval
	}

	pub fn get_capacity(&self) -> usize {
		self.capacity
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn builder() {
		let config = Config::new()
			.query_timeout(Duration::from_secs(5))
			.reconnect_interval(None)
			.capacity(16);
		assert_eq!(config.get_query_timeout(), Some(Duration::from_secs(5)));
		assert_eq!(config.get_reconnect_interval(), None);
		assert_eq!(config.get_capacity(), 16);
		assert_eq!(Config::default().get_capacity(), 0);
	}
}
