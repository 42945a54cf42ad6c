//! Logging callback - Observability for dispatched values.

use typechain_core::{BoxError, Value};

/// A callback that logs every value it receives.
///
/// It uses the `tracing` crate when the `tracing` feature is enabled and is
/// a no-op otherwise.
///
/// # Example
///
/// ```rust,ignore
/// use typechain_std::{callbacks::LoggingCallback, links::AnyLink, TypeChain};
/// use typechain_core::{Link, Value};
///
/// // Tap every value before the preset chain routes it.
/// let mut chain = AnyLink::new(true).chain();
/// chain.add(TypeChain::new(false));
/// chain.set_callback(&Value::Undefined, LoggingCallback::named("ingress").callback());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LoggingCallback {
    name: &'static str,
}

impl LoggingCallback {
    /// Create a new `LoggingCallback` with a default name.
    pub fn new() -> Self {
        Self { name: "value" }
    }

    /// Create a new `LoggingCallback` with a custom name.
    ///
    /// The name identifies the chain stage in log output.
    pub fn named(name: &'static str) -> Self {
        Self { name }
    }

    /// The name used in log output.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Turn this into a callback that can be bound to a link.
    pub fn callback(self) -> impl Fn(Option<&BoxError>, &Value) + Send + Sync + 'static {
        move |error, value| self.log(error, value)
    }

    fn log(&self, error: Option<&BoxError>, value: &Value) {
        #[cfg(feature = "tracing")]
        {
            match error {
                Some(error) => tracing::warn!(name = %self.name, %error, %value, "dispatch error"),
                None => tracing::debug!(name = %self.name, kind = %value.kind(), %value, "dispatched value"),
            }
        }

        #[cfg(not(feature = "tracing"))]
        {
            let _ = (self.name, error, value);
        }
    }
}

impl Default for LoggingCallback {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_callback_accepts_values() {
        let callback = LoggingCallback::named("probe").callback();
        callback(None, &Value::from(1));
        callback(None, &Value::bytes(b"raw"));
    }

    #[test]
    fn test_logging_callback_named() {
        assert_eq!(LoggingCallback::named("ingress").name(), "ingress");
        assert_eq!(LoggingCallback::default().name(), "value");
    }
}
