//! Service layer owning the in-memory post collection.
//! - Encapsulates the shared state behind a store object with a writer lock.
//! - Reuses input validation and parameter parsing from the `models` crate.
//! - Provides clear error types for the HTTP layer to map.

pub mod errors;
pub mod store;
