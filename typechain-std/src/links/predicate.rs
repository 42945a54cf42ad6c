//! Closure-backed links.

use typechain_core::{Link, Value};

/// A link whose predicate is a closure.
///
/// # Example
///
/// ```rust,ignore
/// use typechain_std::links::PredicateLink;
///
/// let even = PredicateLink::new(
///     |value: &Value| value.as_f64().is_some_and(|n| n % 2.0 == 0.0),
///     false,
/// )
/// .named("even");
/// ```
pub struct PredicateLink<F> {
    predicate: F,
    forward_on_success: bool,
    name: &'static str,
}

impl<F> PredicateLink<F>
where
    F: Fn(&Value) -> bool + Send + Sync + 'static,
{
    /// Create a new predicate link.
    pub fn new(predicate: F, forward_on_success: bool) -> Self {
        Self {
            predicate,
            forward_on_success,
            name: "predicate",
        }
    }

    /// Set the name reported in diagnostics.
    pub fn named(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }
}

impl<F> Link for PredicateLink<F>
where
    F: Fn(&Value) -> bool + Send + Sync + 'static,
{
    fn is_type_of(&self, value: &Value) -> bool {
        (self.predicate)(value)
    }

    fn forward_on_match(&self) -> bool {
        self.forward_on_success
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

/// A link that matches every value.
///
/// Placed at the head of a chain with forwarding enabled, it observes each
/// dispatched value before the rest of the chain sees it.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyLink {
    forward_on_success: bool,
}

impl AnyLink {
    /// Create a new catch-all link.
    pub const fn new(forward_on_success: bool) -> Self {
        Self { forward_on_success }
    }
}

impl Link for AnyLink {
    fn is_type_of(&self, _value: &Value) -> bool {
        true
    }

    fn forward_on_match(&self) -> bool {
        self.forward_on_success
    }

    fn name(&self) -> &'static str {
        "any"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicate_link_uses_closure() {
        let link = PredicateLink::new(|v: &Value| v.as_str() == Some("yes"), true).named("yes");
        assert!(link.is_type_of(&Value::from("yes")));
        assert!(!link.is_type_of(&Value::from("no")));
        assert!(link.forward_on_match());
        assert_eq!(link.name(), "yes");
    }

    #[test]
    fn test_any_link_matches_everything() {
        let link = AnyLink::new(true);
        assert!(link.is_type_of(&Value::Undefined));
        assert!(link.is_type_of(&Value::bytes(b"")));
        assert!(link.forward_on_match());
    }
}
