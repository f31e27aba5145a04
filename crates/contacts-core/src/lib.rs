//! Core types and trait definitions for the contacts service.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! The storage backend and the JSON API both depend on it.

pub mod contact;
pub mod error;
pub mod store;

pub use error::{Error, Result};
