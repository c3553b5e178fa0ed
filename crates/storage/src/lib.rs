#![forbid(unsafe_code)]

pub mod repository;
pub mod session;
pub mod sqlite;

pub use repository::{InMemorySessionStore, SessionStore, Storage, StorageError};
pub use session::SessionStorage;
