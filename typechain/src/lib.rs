//! # typechain - Type-Dispatch Chains
//!
//! `typechain` routes a dynamically-typed [`Value`] to the first link in an
//! ordered chain whose type predicate matches it. Callbacks are bound to a
//! link by probing the chain with a sample value, then any number of values of
//! that shape can be streamed through.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use typechain::{TypeChain, Value};
//!
//! let mut chain = TypeChain::new(false);
//! chain.set_callback(&Value::Undefined, |_, _| println!("nothing here"));
//! chain.set_callback(&Value::from(0), |_, n| println!("got number {n}"));
//!
//! chain.handle(&Value::from(5));     // got number 5
//! chain.handle(&Value::Undefined);   // nothing here
//! chain.handle(&Value::from("text")); // no callback bound, dropped
//! ```
//!
//! ## Custom Links
//!
//! Implement [`Link`] (or use `#[type_link]` with the `macros` feature) and
//! append it to any chain:
//!
//! ```rust,ignore
//! use typechain::{Link, NumberLink, Value};
//!
//! struct Ipv4Link;
//!
//! impl Link for Ipv4Link {
//!     fn is_type_of(&self, value: &Value) -> bool {
//!         value.as_str().is_some_and(|s| s.parse::<std::net::Ipv4Addr>().is_ok())
//!     }
//! }
//!
//! let mut chain = NumberLink::new(false).then(Ipv4Link);
//! chain.set_callback(&Value::from("127.0.0.1"), |_, ip| println!("ip {ip}"));
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use typechain_core::{
    // Errors
    BoxError,
    // Chain
    Callback,
    Chain,
    ChainError,
    Dispatch,
    // Value model
    Kind,
    // Link
    Link,
    Map,
    Value,
};

// Preset chain
pub use typechain_std::facade::{ChainOptions, TypeChain};

// Built-in links
pub use typechain_std::links::{
    AnyLink, ArrayLink, BooleanLink, KindLink, NullLink, NumberLink, ObjectLink, PredicateLink,
    StringLink, UndefinedLink,
};

/// Standard link implementations.
pub mod links {
    #![allow(clippy::wildcard_imports)]
    pub use typechain_std::links::*;
}

/// Standard callback implementations.
pub mod callbacks {
    #![allow(clippy::wildcard_imports)]
    pub use typechain_std::callbacks::*;
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use typechain_std::testing::*;
}

/// Prelude module - common imports for typechain.
///
/// # Usage
///
/// ```rust,ignore
/// use typechain::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Errors
        BoxError,
        // Chain
        Chain,
        ChainError,
        ChainOptions,
        Dispatch,
        Kind,
        // Core trait
        Link,
        TypeChain,
        // Value model
        Value,
    };
}

#[cfg(feature = "macros")]
pub use typechain_macros::type_link;
