use std::fmt;
use std::str::FromStr;

use crate::api::err::Error;

/// The RPC methods understood by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Method {
	Ping,
	Info,
	Use,
	Signin,
	Signup,
	Authenticate,
	Invalidate,
	Let,
	Unset,
	Live,
	Kill,
	Query,
	Select,
	Create,
	Insert,
	Update,
	Upsert,
	Merge,
	Patch,
	Delete,
	Relate,
	Run,
	Version,
}

impl Method {
	pub const ALL: [Method; 23] = [
		Method::Ping,
		Method::Info,
		Method::Use,
		Method::Signin,
		Method::Signup,
		Method::Authenticate,
		Method::Invalidate,
		Method::Let,
		Method::Unset,
		Method::Live,
		Method::Kill,
		Method::Query,
		Method::Select,
		Method::Create,
		Method::Insert,
		Method::Update,
		Method::Upsert,
		Method::Merge,
		Method::Patch,
		Method::Delete,
		Method::Relate,
		Method::Run,
		Method::Version,
	];

	/// The name of the method as sent on the wire
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Ping => "ping",
			Self::Info => "info",
			Self::Use => "use",
			Self::Signin => "signin",
			Self::Signup => "signup",
			Self::Authenticate => "authenticate",
			Self::Invalidate => "invalidate",
			Self::Let => "let",
			Self::Unset => "unset",
			Self::Live => "live",
			Self::Kill => "kill",
			Self::Query => "query",
			Self::Select => "select",
			Self::Create => "create",
			Self::Insert => "insert",
			Self::Update => "update",
			Self::Upsert => "upsert",
			Self::Merge => "merge",
			Self::Patch => "patch",
			Self::Delete => "delete",
			Self::Relate => "relate",
			Self::Run => "run",
			Self::Version => "version",
		}
	}
}

impl fmt::Display for Method {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Method {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|method| method.as_str().eq_ignore_ascii_case(s))
			.ok_or_else(|| Error::UnknownMethod(s.to_owned()))
	}
}

impl AsRef<str> for Method {
	fn as_ref(&self) -> &str {
		self.as_str()
	}
}
