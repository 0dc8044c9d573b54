use url::Url;

use super::Config;
use crate::api::Result;

const DEFAULT_SCHEME: &str = "ws";

/// A server address used to connect to the server
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
	#[doc(hidden)]
	pub url: Url,
	pub(crate) config: Config,
}

impl Endpoint {
	pub fn new(url: Url) -> Self {
		Self {
			url,
			config: Config::default(),
		}
	}

	pub fn with_config(mut self, config: Config) -> Self {
		self.config = config;
		self
	}

	pub fn config(&self) -> &Config {
		&self.config
	}
}

/// A trait for converting inputs to a server address object
pub trait IntoEndpoint {
	/// Converts an input into a server address object
	fn into_endpoint(self) -> Result<Endpoint>;
}

impl IntoEndpoint for Endpoint {
	fn into_endpoint(self) -> Result<Endpoint> {
		Ok(self)
	}
}

impl IntoEndpoint for Url {
	fn into_endpoint(self) -> Result<Endpoint> {
		Ok(Endpoint::new(self))
	}
}

impl IntoEndpoint for &str {
	fn into_endpoint(self) -> Result<Endpoint> {
		// Bare `host:port` addresses would otherwise parse with the host as the scheme
		let url = if self.contains("://") {
			Url::parse(self)?
		} else {
			Url::parse(&format!("{DEFAULT_SCHEME}://{self}"))?
		};
		Ok(Endpoint::new(url))
	}
}

impl IntoEndpoint for &String {
	fn into_endpoint(self) -> Result<Endpoint> {
		self.as_str().into_endpoint()
	}
}

impl IntoEndpoint for String {
	fn into_endpoint(self) -> Result<Endpoint> {
		self.as_str().into_endpoint()
	}
}

impl<T> IntoEndpoint for (T, Config)
where
	T: IntoEndpoint,
{
	fn into_endpoint(self) -> Result<Endpoint> {
		let (address, config) = self;
		Ok(address.into_endpoint()?.with_config(config))
	}
}
