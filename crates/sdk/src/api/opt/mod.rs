//! The different options and types for use in API functions

mod config;
mod endpoint;

pub use config::Config;
pub use endpoint::{Endpoint, IntoEndpoint};
