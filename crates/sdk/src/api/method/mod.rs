//! Methods to use when interacting with a SurrealDB instance

mod live;

pub use live::Stream;
use surrealdb_client_types::Value;

use crate::api::{Result, Surreal};
use crate::engine::Transport;
use crate::rpc::Method;

impl<T> Surreal<T>
where
	T: Transport,
{
	/// Checks that the server is reachable
	pub async fn ping(&self) -> Result<()> {
		self.call(Method::Ping.as_str(), Vec::new()).await?;
		Ok(())
	}

	/// Retrieves the version of the server
	pub async fn version(&self) -> Result<String> {
		self.call_as(Method::Version.as_str(), ()).await
	}

	/// Switches to a specific namespace and database
	pub async fn use_ns_db(&self, ns: &str, db: &str) -> Result<()> {
		let params = vec![Value::from(ns), Value::from(db)];
		self.call(Method::Use.as_str(), params).await?;
		Ok(())
	}
}
