//! In-memory [`RateStore`](roost_core::store::RateStore) backend.
//!
//! The reference backend for the engine's integration tests, and a usable
//! store for embedding the engine without a database. Each store method is
//! individually atomic; callers needing a wider transaction boundary must
//! bring their own backend.

mod error;
mod store;


pub use error::{Error, Result};
pub use store::MemStore;
