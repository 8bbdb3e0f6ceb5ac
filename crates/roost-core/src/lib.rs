//! Core types and trait definitions for the roost rate timeline.
//!
//! This crate is deliberately free of any storage backend or transport
//! dependency. The engine and every store backend depend on it; it depends
//! on nothing proprietary.

pub mod error;
pub mod rate;
pub mod store;

pub use error::{Error, Result, ValidationError};
