//! TCP accept loop
//!
//! Each accepted socket gets its own task running a
//! [`Connection`](crate::http::connection::Connection).

pub mod listener;
