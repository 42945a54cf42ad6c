//! # Dispatch Chain
//!
//! A [`Chain`] is an append-only, ordered list of [`Link`]s, each paired with
//! at most one bound callback.
//!
//! # Dispatch
//!
//! [`Chain::handle`] walks the links from the head:
//!
//! - a link whose predicate matches invokes its callback (if one is bound),
//!   then either stops the walk or, when its `forward_on_match` flag is set,
//!   lets the value continue;
//! - a link that does not match always lets the value continue.
//!
//! A value that reaches the end without a match is dropped silently.
//!
//! # Binding
//!
//! [`Chain::set_callback`] takes a *probe* value, finds the first link that
//! matches it and replaces that link's callback. The probe only selects the
//! link; the callback is not invoked.

use crate::{
    error::{BoxError, ChainError},
    link::Link,
    value::Value,
};
use std::fmt;

/// A callback bound to a link: `(error, value)`.
///
/// The chain never synthesizes errors, so the first argument is always `None`
/// when invoked by dispatch.
pub type Callback = Box<dyn Fn(Option<&BoxError>, &Value) + Send + Sync + 'static>;

struct Slot {
    link: Box<dyn Link>,
    callback: Option<Callback>,
}

/// Summary of a single [`Chain::handle`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dispatch {
    /// Number of links whose predicate matched the value.
    pub matched: usize,
    /// Number of callbacks invoked.
    pub invoked: usize,
    /// Whether a matching link without forwarding ended the walk.
    pub stopped: bool,
}

impl Dispatch {
    /// Whether no link accepted the value.
    pub const fn is_unmatched(&self) -> bool {
        self.matched == 0
    }
}

/// An ordered chain of links.
pub struct Chain {
    slots: Vec<Slot>,
}

impl Chain {
    /// Creates a chain whose head is `link`.
    pub fn new<L: Link>(link: L) -> Self {
        Self {
            slots: vec![Slot {
                link: Box::new(link),
                callback: None,
            }],
        }
    }

    /// Appends `link` at the tail.
    ///
    /// Passing a whole chain grafts all of its links, with their bound
    /// callbacks, onto the tail in their existing order.
    pub fn add(&mut self, link: impl Into<Chain>) {
        self.slots.extend(link.into().slots);
    }

    /// Dispatches `value` through the chain.
    pub fn handle(&self, value: &Value) -> Dispatch {
        let mut dispatch = Dispatch::default();

        for slot in &self.slots {
            if !slot.link.is_type_of(value) {
                continue;
            }
            dispatch.matched += 1;

            #[cfg(feature = "tracing")]
            tracing::trace!(
                link = slot.link.name(),
                kind = %value.kind(),
                bound = slot.callback.is_some(),
                "link matched"
            );

            if let Some(callback) = &slot.callback {
                callback(None, value);
                dispatch.invoked += 1;
            }
            if !slot.link.forward_on_match() {
                dispatch.stopped = true;
                break;
            }
        }

        #[cfg(feature = "tracing")]
        {
            if dispatch.is_unmatched() {
                tracing::debug!(%value, "value fell off the chain unmatched");
            }
        }

        dispatch
    }

    /// Binds `callback` to the first link matching `probe`.
    ///
    /// Replaces any callback already bound to that link. Does nothing when no
    /// link matches; see [`Chain::try_set_callback`] for a checked variant.
    pub fn set_callback<F>(&mut self, probe: &Value, callback: F)
    where
        F: Fn(Option<&BoxError>, &Value) + Send + Sync + 'static,
    {
        let _ = self.try_set_callback(probe, callback);
    }

    /// Binds `callback` to the first link matching `probe`, reporting a miss.
    pub fn try_set_callback<F>(&mut self, probe: &Value, callback: F) -> Result<(), ChainError>
    where
        F: Fn(Option<&BoxError>, &Value) + Send + Sync + 'static,
    {
        let Some(slot) = self.slots.iter_mut().find(|slot| slot.link.is_type_of(probe)) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(kind = %probe.kind(), "no link matches probe");
            return Err(ChainError::NoMatchingLink { kind: probe.kind() });
        };

        let _replaced = slot.callback.replace(Box::new(callback)).is_some();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            link = slot.link.name(),
            replaced = _replaced,
            "callback bound"
        );

        Ok(())
    }

    /// Index of the link `probe` would bind to.
    pub fn position(&self, probe: &Value) -> Option<usize> {
        self.slots.iter().position(|slot| slot.link.is_type_of(probe))
    }

    /// Whether the link `probe` would bind to already has a callback.
    pub fn has_callback(&self, probe: &Value) -> bool {
        self.position(probe)
            .is_some_and(|i| self.slots[i].callback.is_some())
    }

    /// Number of links in the chain.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Names of the links, head first.
    pub fn link_names(&self) -> Vec<&'static str> {
        self.slots.iter().map(|slot| slot.link.name()).collect()
    }
}

impl<L: Link> From<L> for Chain {
    fn from(link: L) -> Self {
        Chain::new(link)
    }
}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.slots.iter().map(|slot| {
                (
                    slot.link.name(),
                    slot.link.forward_on_match(),
                    slot.callback.is_some(),
                )
            }))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::Kind;
    use std::sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    struct KindOf {
        kinds: Kind,
        forward: bool,
    }

    impl Link for KindOf {
        fn is_type_of(&self, value: &Value) -> bool {
            self.kinds.intersects(value.kind())
        }

        fn forward_on_match(&self) -> bool {
            self.forward
        }
    }

    fn link(kinds: Kind, forward: bool) -> KindOf {
        KindOf { kinds, forward }
    }

    struct NoPredicate;

    impl Link for NoPredicate {}

    fn counter() -> (Arc<AtomicUsize>, impl Fn(Option<&BoxError>, &Value) + Send + Sync + 'static)
    {
        let count = Arc::new(AtomicUsize::new(0));
        let handle = Arc::clone(&count);
        (count, move |_: Option<&BoxError>, _: &Value| {
            handle.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn test_add_appends_at_tail() {
        let mut chain = Chain::new(link(Kind::NUMBER, false));
        chain.add(link(Kind::STRING, false));
        chain.add(link(Kind::BOOLEAN, false));

        assert_eq!(chain.len(), 3);
        assert_eq!(chain.position(&Value::from(true)), Some(2));
    }

    #[test]
    fn test_add_grafts_subchain_with_callbacks() {
        let (count, callback) = counter();
        let mut tail = Chain::new(link(Kind::STRING, false));
        tail.add(link(Kind::BOOLEAN, false));
        tail.set_callback(&Value::from(false), callback);

        let mut chain = Chain::new(link(Kind::NUMBER, false));
        chain.add(tail);

        assert_eq!(chain.len(), 3);
        chain.handle(&Value::from(true));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_first_match_stops_without_forwarding() {
        let (first, first_cb) = counter();
        let (second, second_cb) = counter();
        let mut chain = Chain::new(link(Kind::NUMBER, false));
        chain.add(link(Kind::NUMBER | Kind::STRING, false));
        chain.set_callback(&Value::from(1), first_cb);
        chain.set_callback(&Value::from("s"), second_cb);

        let dispatch = chain.handle(&Value::from(7));

        assert_eq!(first.load(Ordering::SeqCst), 1);
        assert_eq!(second.load(Ordering::SeqCst), 0);
        assert_eq!(
            dispatch,
            Dispatch {
                matched: 1,
                invoked: 1,
                stopped: true
            }
        );
    }

    #[test]
    fn test_forwarding_link_passes_value_on() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let mut chain = Chain::new(link(Kind::NUMBER, true));
        chain.add(link(Kind::NUMBER | Kind::STRING, false));

        let o = Arc::clone(&order);
        chain.set_callback(&Value::from(0), move |_, _| o.lock().unwrap().push(1));
        let o = Arc::clone(&order);
        chain.set_callback(&Value::from(""), move |_, _| o.lock().unwrap().push(2));

        let dispatch = chain.handle(&Value::from(3));

        assert_eq!(*order.lock().unwrap(), vec![1, 2]);
        assert_eq!(dispatch.matched, 2);
    }

    #[test]
    fn test_forwarding_is_decided_by_the_matching_link_only() {
        let (mid, mid_cb) = counter();
        let (tail, tail_cb) = counter();
        // The head forwards on match but never matches numbers, so its flag
        // is irrelevant here; the matching middle link stops the walk.
        let mut chain = Chain::new(link(Kind::STRING, true));
        chain.add(link(Kind::NUMBER, false));
        chain.add(link(Kind::NUMBER | Kind::BYTES, false));
        chain.set_callback(&Value::from(0), mid_cb);
        chain.set_callback(&Value::bytes(b""), tail_cb);

        chain.handle(&Value::from(1));

        assert_eq!(mid.load(Ordering::SeqCst), 1);
        assert_eq!(tail.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_rebind_replaces_callback() {
        let (first, first_cb) = counter();
        let (second, second_cb) = counter();
        let mut chain = Chain::new(link(Kind::NUMBER, false));
        chain.set_callback(&Value::from(0), first_cb);
        chain.set_callback(&Value::from(99), second_cb);

        chain.handle(&Value::from(5));

        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_probe_does_not_invoke_callback() {
        let (count, callback) = counter();
        let mut chain = Chain::new(link(Kind::NUMBER, false));
        chain.set_callback(&Value::from(0), callback);
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert!(chain.has_callback(&Value::from(1)));
    }

    #[test]
    fn test_unmatched_value_is_dropped() {
        let (count, callback) = counter();
        let mut chain = Chain::new(link(Kind::NUMBER, false));
        chain.set_callback(&Value::from(0), callback);

        let dispatch = chain.handle(&Value::from("nope"));

        assert!(dispatch.is_unmatched());
        assert!(!dispatch.stopped);
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_unmatched_probe_is_a_no_op() {
        let mut chain = Chain::new(link(Kind::NUMBER, false));
        chain.set_callback(&Value::from("nope"), |_, _| panic!("never bound"));
        assert!(!chain.has_callback(&Value::from(0)));

        let err = chain
            .try_set_callback(&Value::from("nope"), |_, _| {})
            .unwrap_err();
        assert_eq!(err, ChainError::NoMatchingLink { kind: Kind::STRING });
    }

    #[test]
    fn test_link_without_predicate_matches_nothing() {
        let (count, callback) = counter();
        let mut chain = Chain::new(NoPredicate);
        chain.add(link(Kind::NUMBER, false));
        chain.set_callback(&Value::from(0), callback);

        assert_eq!(chain.position(&Value::from(0)), Some(1));
        chain.handle(&Value::from(0));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_callback_receives_no_error() {
        let mut chain = Chain::new(link(Kind::STRING, false));
        let seen = Arc::new(Mutex::new(None));
        let s = Arc::clone(&seen);
        chain.set_callback(&Value::from(""), move |err, value| {
            assert!(err.is_none());
            *s.lock().unwrap() = Some(value.clone());
        });

        chain.handle(&Value::from("payload"));
        assert_eq!(*seen.lock().unwrap(), Some(Value::from("payload")));
    }

    #[test]
    fn test_link_combinators() {
        let chain = link(Kind::NUMBER, false).then(link(Kind::STRING, false));
        assert_eq!(chain.len(), 2);
        assert_eq!(link(Kind::NULL, false).chain().len(), 1);
    }
}
