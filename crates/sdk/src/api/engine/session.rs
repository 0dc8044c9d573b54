//! Request/response correlation over a shared transport

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use async_channel::Sender;
use parking_lot::Mutex;
use serde::Serialize;
use serde::de::DeserializeOwned;
use surrealdb_client_types::{Value, from_value, to_value};

use super::Transport;
use crate::api::Result;
use crate::api::err::Error;
use crate::rpc::Request;

type Completion = Sender<Result<Value>>;
type Pending = Arc<Mutex<HashMap<String, Completion>>>;

pub(crate) const DISCONNECTED: &str = "disconnected";

/// Multiplexes concurrent calls over one transport
///
/// Every call is assigned an id that is unique for the lifetime of the
/// session. The response carrying that id resolves the call, whatever order
/// responses arrive in.
#[derive(Debug)]
pub struct Session<T> {
	transport: Arc<T>,
	last_id: AtomicI64,
	pending: Pending,
}

impl<T> Session<T>
where
	T: Transport,
{
	pub fn new(transport: Arc<T>) -> Self {
		Self {
			transport,
			last_id: AtomicI64::new(1),
			pending: Arc::default(),
		}
	}

	fn next_id(&self) -> String {
		self.last_id.fetch_add(1, Ordering::SeqCst).to_string()
	}

	/// Calls a remote method and waits for its result
	///
	/// The exchange runs on a background task, so dropping the returned future
	/// does not leave a stale entry behind. The late response is discarded
	/// when it arrives.
	pub async fn call(&self, method: &str, params: Vec<Value>) -> Result<Value> {
		if !self.transport.is_connected() {
			return Err(Error::Connection("not connected".to_owned()));
		}
		let id = self.next_id();
		let (sender, receiver) = async_channel::bounded(1);
		match self.pending.lock().entry(id.clone()) {
			Entry::Vacant(entry) => {
				entry.insert(sender);
			}
			Entry::Occupied(..) => return Err(Error::DuplicateRequestId(id)),
		}
		let request = Request::new(id.clone(), method, params);
		trace!("Request {request:?}");
		let transport = self.transport.clone();
		let pending = self.pending.clone();
		tokio::spawn(async move {
			let result = match transport.send(request).await {
				Ok(response) if response.id == id => response.into_result(),
				Ok(response) => Err(Error::InvalidResponse(format!(
					"expected a response to request `{id}`, received one for `{}`",
					response.id
				))),
				Err(error @ Error::Connection(..)) => Err(error),
				Err(error) => Err(Error::Connection(error.to_string())),
			};
			resolve(&pending, &id, result);
		});
		match receiver.recv().await {
			Ok(result) => result,
			// The completion was dropped without an answer
			Err(..) => Err(Error::Connection(DISCONNECTED.to_owned())),
		}
	}

	/// Calls a remote method converting parameters and result through serde
	///
	/// Parameters that serialize to an array are sent as the parameter list,
	/// a null value (such as `()`) sends no parameters, and any other value is
	/// sent as the only parameter.
	pub async fn call_as<P, R>(&self, method: &str, params: P) -> Result<R>
	where
		P: Serialize,
		R: DeserializeOwned,
	{
		let params = match to_value(params)? {
			Value::Array(params) => params,
			Value::Null => Vec::new(),
			param => vec![param],
		};
		let value = self.call(method, params).await?;
		Ok(from_value(value)?)
	}

	/// Fails every in-flight call with a connection error
	pub fn fail_all(&self) {
		let drained: Vec<_> = self.pending.lock().drain().collect();
		if !drained.is_empty() {
			debug!("Failing {} pending requests", drained.len());
		}
		for (id, completion) in drained {
			let error = Error::Connection(DISCONNECTED.to_owned());
			if completion.try_send(Err(error)).is_err() {
				trace!("Receiver dropped for request {id}");
			}
		}
	}

	/// The number of calls still waiting for a response
	pub fn pending(&self) -> usize {
		self.pending.lock().len()
	}
}

fn resolve(pending: &Mutex<HashMap<String, Completion>>, id: &str, result: Result<Value>) {
	let Some(completion) = pending.lock().remove(id) else {
		trace!("Discarding response to request {id} which is no longer pending");
		return;
	};
	if completion.try_send(result).is_err() {
		trace!("Receiver dropped for request {id}");
	}
}
