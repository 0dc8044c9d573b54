//! Value types shared by the SurrealDB RPC client.
//!
//! This crate holds the dynamic [`Value`] that every request parameter and
//! response result is expressed in, the [`RecordId`] identifier, and the
//! [`to_value`] / [`from_value`] bridge between statically typed application
//! data and `Value`.

#![doc(html_favicon_url = "https://surrealdb.s3.amazonaws.com/favicon.png")]
#![doc(html_logo_url = "https://surrealdb.s3.amazonaws.com/icon.png")]

mod error;
/// Dynamic value types
pub mod value;

pub use error::{Error, Result};
pub use value::record_id::RecordId;
pub use value::serde::{from_value, to_value};
pub use value::{Indexable, Object, Value};
