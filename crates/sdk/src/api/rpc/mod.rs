//! Wire envelopes exchanged with the server

mod incoming;
mod method;
mod notification;
mod request;
mod response;

pub use incoming::Incoming;
pub use method::Method;
pub use notification::{Action, Notification};
pub use request::Request;
pub use response::{Failure, Response};
