//! HTTP/1.1 wire handling.
//!
//! One request and one response per connection: no keep-alive, no chunked
//! transfer encoding.
//!
//! # Architecture
//!
//! - **`connection`**: The per-connection state machine
//! - **`parser`**: Parses a buffered request and defines [`ParseError`](parser::ParseError)
//! - **`request`**: Request line, method and the parsed request
//! - **`path`**: Splits a request target into route, extension and query
//! - **`headers`**: Case-sensitive, insertion-ordered header table
//! - **`cookie`**: `Cookie` header parsing
//! - **`response`**: Status codes and the response under assembly
//! - **`writer`**: Serializes and writes responses to the client
//! - **`mime`**: MIME type detection based on file extensions
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Buffer until one full request parses
//!        └──────┬──────┘
//!               │ Request parsed
//!               ▼
//!        ┌──────────────────┐
//!        │     Routing      │ ← Look up (method, path) in the route table
//!        └──────┬───────────┘
//!               ▼
//!        ┌──────────────────┐
//!        │ BuildingResponse │ ← Run the handler, consult the session store
//!        └──────┬───────────┘
//!               ▼
//!        ┌──────────────────┐
//!        │     Writing      │ ← Send response to client
//!        └──────┬───────────┘
//!               ▼
//!             Done            (Failed on any parse or I/O error)
//! ```
//!
//! The socket is shut down and dropped when the machine stops, in either
//! terminal state.

pub mod connection;
pub mod cookie;
mod form;
pub mod headers;
pub mod mime;
pub mod parser;
pub mod path;
pub mod request;
pub mod response;
pub mod writer;
