//! # Link
//!
//! A link is one node of type-dispatch logic: it answers "does this value
//! have my shape" and declares whether a successful match lets the value
//! continue down the chain.
//!
//! Links carry no traversal or callback logic of their own. Those live in
//! [`Chain`], which owns the links and the callbacks bound to them, so an
//! extension only has to supply a predicate.
//!
//! # Example
//!
//! ```rust,ignore
//! use typechain_core::{Link, Value};
//!
//! struct PortLink;
//!
//! impl Link for PortLink {
//!     fn is_type_of(&self, value: &Value) -> bool {
//!         value.as_f64().is_some_and(|n| n.fract() == 0.0 && (1.0..=65535.0).contains(&n))
//!     }
//! }
//!
//! let mut chain = PortLink.chain();
//! chain.set_callback(&8080.into(), |_, port| println!("port {port}"));
//! chain.handle(&443.into());
//! ```

use crate::{chain::Chain, value::Value};

/// A type predicate that participates in a [`Chain`].
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Link`",
    label = "missing `Link` implementation",
    note = "Links must implement `is_type_of` to take part in dispatch."
)]
pub trait Link: Send + Sync + 'static {
    /// Whether this link handles `value`.
    ///
    /// The default matches nothing, so a link that does not override it
    /// always passes values on.
    fn is_type_of(&self, value: &Value) -> bool {
        let _ = value;
        false
    }

    /// Whether a value matched by this link continues to the rest of the chain.
    fn forward_on_match(&self) -> bool {
        false
    }

    /// Name used in diagnostics.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Wraps this link in a chain of its own.
    fn chain(self) -> Chain
    where
        Self: Sized,
    {
        Chain::new(self)
    }

    /// Builds a chain with this link followed by `next`.
    fn then<Next>(self, next: Next) -> Chain
    where
        Self: Sized,
        Next: Into<Chain>,
    {
        let mut chain = Chain::new(self);
        chain.add(next);
        chain
    }
}

impl Link for Box<dyn Link> {
    fn is_type_of(&self, value: &Value) -> bool {
        (**self).is_type_of(value)
    }

    fn forward_on_match(&self) -> bool {
        (**self).forward_on_match()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
