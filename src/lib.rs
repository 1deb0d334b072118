//! Wicket - minimal HTTP/1.1 server with cookie sessions
//!
//! Core library: wire parsing and serialization, the session store, and the
//! per-connection request cycle.

pub mod app;
pub mod config;
pub mod http;
pub mod server;
pub mod service;
pub mod session;
