//! This library provides the session core of a client for [SurrealDB](https://surrealdb.com),
//! the ultimate cloud database for tomorrow's applications.
//!
//! A [`Surreal`] handle multiplexes concurrent RPC calls over a single
//! [`Transport`](engine::Transport), correlating every response with the call
//! that issued it, and routes server-initiated live query notifications to
//! the subscriber registered for each query.
//!
//! The transport itself (WebSocket, HTTP, an in-memory channel) is supplied by
//! the caller. This crate only depends on the request/response and
//! notification contract described in [`engine::Transport`].

#![doc(html_favicon_url = "https://surrealdb.s3.amazonaws.com/favicon.png")]
#![doc(html_logo_url = "https://surrealdb.s3.amazonaws.com/icon.png")]

#[macro_use]
extern crate tracing;

mod api;

/// Channels used for completions and live query streams
#[doc(hidden)]
pub mod channel {
	pub use async_channel::{Receiver, Sender, bounded, unbounded};
}

/// Different error types of the client
pub mod error {
	pub use crate::api::err::{Error as Api, RpcErrorKind};
	pub use surrealdb_client_types::Error as Value;
}

#[doc(inline)]
pub use crate::api::{
	Result, Surreal, engine,
	err::{Error, RpcErrorKind},
	method, opt, rpc,
};
#[doc(inline)]
pub use surrealdb_client_types::{Object, RecordId, Value, from_value, to_value};

/// The dynamic value model shared with the wire codec
pub mod types {
	pub use surrealdb_client_types::*;
}
