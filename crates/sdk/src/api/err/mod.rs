use std::fmt;

use surrealdb_client_types::Value;
use thiserror::Error;

use crate::rpc::Failure;

/// An error originating from the client
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
	/// A value could not be parsed or converted
	#[error("{0}")]
	Value(#[from] surrealdb_client_types::Error),

	/// The transport is unavailable or was torn down
	#[error("Connection error: {0}")]
	Connection(String),

	/// The server failed to execute a specific request
	#[error("RPC error {code}: {message}")]
	Rpc {
		code: i64,
		message: String,
		data: Option<Value>,
	},

	/// Tried to register a request with an id that is still in flight
	#[error("Duplicate request ID: {0}")]
	DuplicateRequestId(String),

	/// Tried to subscribe to a live query that already has a subscriber
	#[error("Live query `{0}` already has a subscriber")]
	DuplicateSubscription(String),

	/// A wire frame could not be encoded or decoded
	#[error("Malformed wire frame: {0}")]
	Json(String),

	/// The server answered with a result of an unexpected shape
	#[error("Invalid response: {0}")]
	InvalidResponse(String),

	/// The endpoint address could not be parsed
	#[error("Invalid URL: {0}")]
	InvalidUrl(String),

	/// The method name is not one the client knows about
	#[error("Unknown RPC method `{0}`")]
	UnknownMethod(String),
}

impl Error {
	/// Classifies the code of an [`Error::Rpc`]
	///
	/// Returns `None` for every other kind of error.
	pub fn rpc_kind(&self) -> Option<RpcErrorKind> {
		match self {
			Self::Rpc {
				code,
				..
			} => Some(RpcErrorKind::from(*code)),
			_ => None,
		}
	}
}

/// The reserved JSON-RPC error codes, plus anything the server defines itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum RpcErrorKind {
	ParseError,
	InvalidRequest,
	MethodNotFound,
	InvalidParams,
	InternalError,
	/// A server or application specific code
	Server(i64),
}

impl From<i64> for RpcErrorKind {
	fn from(code: i64) -> Self {
		match code {
			-32700 => Self::ParseError,
			-32600 => Self::InvalidRequest,
			-32601 => Self::MethodNotFound,
			-32602 => Self::InvalidParams,
			-32603 => Self::InternalError,
			code => Self::Server(code),
		}
	}
}

impl fmt::Display for RpcErrorKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::ParseError => f.write_str("parse error"),
			Self::InvalidRequest => f.write_str("invalid request"),
			Self::MethodNotFound => f.write_str("method not found"),
			Self::InvalidParams => f.write_str("invalid params"),
			Self::InternalError => f.write_str("internal error"),
			Self::Server(code) => write!(f, "server error {code}"),
		}
	}
}

impl From<Failure> for Error {
	fn from(failure: Failure) -> Self {
		Self::Rpc {
			code: failure.code,
			message: failure.message,
			data: failure.data,
		}
	}
}

impl From<serde_json::Error> for Error {
	fn from(error: serde_json::Error) -> Self {
		Self::Json(error.to_string())
	}
}

impl From<url::ParseError> for Error {
	fn from(error: url::ParseError) -> Self {
		Self::InvalidUrl(error.to_string())
	}
}
