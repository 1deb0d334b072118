//! Collaborators the request handlers depend on
//!
//! Account storage and static resource lookup sit behind traits so the
//! routing logic can be exercised against in-memory fakes.

pub mod resources;
pub mod users;

pub use resources::{ResourceError, ResourceResolver, StaticFiles};
pub use users::{InMemoryUserRepository, User, UserRepository};
