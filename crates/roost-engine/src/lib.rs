//! The interval-consistency engine for bungalow rate timelines.
//!
//! Works against any [`roost_core::store::RateStore`]. Introducing a rate
//! runs validation, splits the active rules it displaces, persists it, and
//! compacts the resulting timeline, so that a unit's active rules always
//! partition calendar time without overlap. Pricing queries read the
//! persisted timeline directly and never mutate it.
//!
//! The engine performs no locking or retrying of its own: each operation is
//! expected to run inside one atomic transaction supplied by the backend,
//! and concurrent mutations of the same unit must be serialized by the
//! caller.

pub mod merge;
pub mod price;
pub mod service;
pub mod split;
pub mod validate;


pub use roost_core::{Error, Result, ValidationError};
pub use service::RateService;
