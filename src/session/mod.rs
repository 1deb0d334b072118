//! Server-side login sessions
//!
//! A session is created on successful login and located again through the
//! session cookie on later requests.

pub mod store;

pub use store::{Session, SessionStore};
