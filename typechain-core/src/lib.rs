//! # typechain-core
//!
//! Core value model and dispatch chain for typechain.
//!
//! This crate has minimal dependencies and is meant to be imported by crates
//! that provide their own links without pulling in the standard set from
//! `typechain-std`.
//!
//! # Building Blocks
//!
//! - [`Value`]: the dynamically-typed value being routed, with its [`Kind`].
//! - [`Link`]: a type predicate plus a forwarding flag. Extensions implement
//!   only this trait.
//! - [`Chain`]: the ordered, append-only list of links that owns the bound
//!   callbacks and runs dispatch.
//!
//! # Error Types
//!
//! - [`ChainError`] - Strict binding and conversion errors
//! - [`BoxError`] - The error argument type handed to callbacks

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod chain;
mod error;
#[cfg(feature = "json")]
mod json;
mod kind;
mod link;
mod value;

// Re-exports
pub use chain::{Callback, Chain, Dispatch};
pub use error::{BoxError, ChainError};
pub use kind::Kind;
pub use link::Link;
pub use value::{Map, Value};
