//! # Preset Type Chain
//!
//! [`TypeChain`] is a chain pre-wired with one link per built-in category,
//! in this fixed order:
//!
//! | # | Link            | Matches                 |
//! |---|-----------------|-------------------------|
//! | 0 | [`UndefinedLink`] | `Value::Undefined`    |
//! | 1 | [`NullLink`]      | `Value::Null`         |
//! | 2 | [`BooleanLink`]   | `Value::Bool`         |
//! | 3 | [`NumberLink`]    | `Value::Number`       |
//! | 4 | [`StringLink`]    | `Value::String`       |
//! | 5 | [`ArrayLink`]     | `Value::Array`        |
//! | 6 | [`ObjectLink`]    | `Value::Object`, `Value::Array` |
//!
//! Arrays are checked before objects, so with forwarding disabled an array
//! only ever reaches the array link. With forwarding enabled it reaches both.
//! `Value::Bytes` matches none of them.
//!
//! # Example
//!
//! ```rust,ignore
//! use typechain_std::TypeChain;
//! use typechain_core::Value;
//!
//! let mut chain = TypeChain::new(false);
//! chain.set_callback(&Value::from(0), |_, n| println!("number {n}"));
//! chain.set_callback(&Value::from(""), |_, s| println!("string {s}"));
//!
//! chain.handle(&Value::from(42));
//! chain.handle(&Value::from("hello"));
//! ```

use crate::links::{
    ArrayLink, BooleanLink, NullLink, NumberLink, ObjectLink, StringLink, UndefinedLink,
};
use typechain_core::{BoxError, Chain, ChainError, Dispatch, Value};

/// Construction options for [`TypeChain`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChainOptions {
    /// Whether a built-in link that matches still forwards the value to the
    /// rest of the chain.
    pub forward_on_success: bool,
}

impl ChainOptions {
    /// Create the default options (no forwarding).
    pub const fn new() -> Self {
        Self {
            forward_on_success: false,
        }
    }

    /// Set the forwarding flag applied to every built-in link.
    pub const fn forward_on_success(mut self, forward: bool) -> Self {
        self.forward_on_success = forward;
        self
    }
}

/// A chain seeded with the seven built-in category links.
///
/// The forwarding flag applies to the built-ins only. Links appended with
/// [`TypeChain::add`] keep whatever flag they were constructed with.
#[derive(Debug)]
pub struct TypeChain {
    root: Chain,
}

impl TypeChain {
    /// Create a preset chain.
    pub fn new(forward_on_success: bool) -> Self {
        Self::with_options(ChainOptions::new().forward_on_success(forward_on_success))
    }

    /// Create a preset chain from options.
    pub fn with_options(options: ChainOptions) -> Self {
        let forward = options.forward_on_success;
        let mut root = Chain::new(UndefinedLink::new(forward));
        root.add(NullLink::new(forward));
        root.add(BooleanLink::new(forward));
        root.add(NumberLink::new(forward));
        root.add(StringLink::new(forward));
        root.add(ArrayLink::new(forward));
        root.add(ObjectLink::new(forward));
        Self { root }
    }

    /// Append a link (or a whole chain) at the tail.
    pub fn add(&mut self, link: impl Into<Chain>) {
        self.root.add(link);
    }

    /// Dispatch `value` through the chain.
    pub fn handle(&self, value: &Value) -> Dispatch {
        self.root.handle(value)
    }

    /// Bind `callback` to the first link matching `probe`; no-op on a miss.
    pub fn set_callback<F>(&mut self, probe: &Value, callback: F)
    where
        F: Fn(Option<&BoxError>, &Value) + Send + Sync + 'static,
    {
        self.root.set_callback(probe, callback);
    }

    /// Bind `callback` to the first link matching `probe`, reporting a miss.
    pub fn try_set_callback<F>(&mut self, probe: &Value, callback: F) -> Result<(), ChainError>
    where
        F: Fn(Option<&BoxError>, &Value) + Send + Sync + 'static,
    {
        self.root.try_set_callback(probe, callback)
    }

    /// The underlying chain.
    pub fn as_chain(&self) -> &Chain {
        &self.root
    }

    /// Consume the preset and return the underlying chain.
    pub fn into_inner(self) -> Chain {
        self.root
    }
}

impl Default for TypeChain {
    fn default() -> Self {
        Self::new(false)
    }
}

impl From<TypeChain> for Chain {
    fn from(chain: TypeChain) -> Self {
        chain.into_inner()
    }
}
