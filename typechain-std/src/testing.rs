//! Testing utilities for typechain.
//!
//! This module provides callbacks that make dispatch observable in tests.
//!
//! # Features
//!
//! - [`RecordingCallback`]: records every value it receives
//! - [`CountingCallback`]: counts invocations

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};
use typechain_core::{BoxError, Value};

// ============================================================================
// Recording Callback
// ============================================================================

/// A callback handle that records all values it receives.
///
/// Clones share the same record, so keep one clone for assertions and bind
/// another.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingCallback::new();
/// chain.set_callback(&Value::from(0), recorder.callback());
///
/// chain.handle(&Value::from(5));
///
/// assert_eq!(recorder.values(), vec![Value::from(5)]);
/// ```
#[derive(Clone, Default)]
pub struct RecordingCallback {
    values: Arc<Mutex<Vec<Value>>>,
}

impl RecordingCallback {
    /// Create a new, empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// A callback that appends to this recorder.
    pub fn callback(&self) -> impl Fn(Option<&BoxError>, &Value) + Send + Sync + use<> {
        let values = Arc::clone(&self.values);
        move |_error, value| values.lock().unwrap().push(value.clone())
    }

    /// Get a clone of the recorded values.
    pub fn values(&self) -> Vec<Value> {
        self.values.lock().unwrap().clone()
    }

    /// Get the number of recorded values.
    pub fn count(&self) -> usize {
        self.values.lock().unwrap().len()
    }

    /// Clear all recorded values.
    pub fn clear(&self) {
        self.values.lock().unwrap().clear();
    }
}

// ============================================================================
// Counting Callback
// ============================================================================

/// A callback handle that counts invocations.
///
/// # Example
///
/// ```rust,ignore
/// let counter = CountingCallback::new();
/// chain.set_callback(&Value::array(), counter.callback());
///
/// chain.handle(&Value::array());
///
/// assert_eq!(counter.count(), 1);
/// ```
#[derive(Clone, Default)]
pub struct CountingCallback {
    count: Arc<AtomicUsize>,
}

impl CountingCallback {
    /// Create a new counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// A callback that increments this counter.
    pub fn callback(&self) -> impl Fn(Option<&BoxError>, &Value) + Send + Sync + use<> {
        let count = Arc::clone(&self.count);
        move |_error, _value| {
            count.fetch_add(1, Ordering::SeqCst);
        }
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}
