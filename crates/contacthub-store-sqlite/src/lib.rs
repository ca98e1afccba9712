//! SQLite backend for the Contact Hub store.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated thread
//! without blocking the async runtime. The single connection thread also
//! serialises every write.

mod encode;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::{IN_MEMORY, SqliteStore};

#[cfg(test)]
mod tests;
