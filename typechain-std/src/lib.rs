//! # typechain-std
//!
//! Standard implementations for the typechain type-dispatch library.
//!
//! This crate provides:
//! - **Built-in links**: one per value category, plus [`KindLink`],
//!   [`PredicateLink`] and [`AnyLink`]
//! - **Preset chain**: [`TypeChain`] and its [`ChainOptions`]
//! - **Standard callbacks**: Logging
//! - **Testing utilities**: recording and counting callbacks
//!
//! [`KindLink`]: links::KindLink
//! [`PredicateLink`]: links::PredicateLink
//! [`AnyLink`]: links::AnyLink

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use typechain_core;

// Modules
pub mod callbacks;
pub mod facade;
pub mod links;
pub mod testing;

pub use facade::{ChainOptions, TypeChain};
