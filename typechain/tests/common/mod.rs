#![allow(dead_code)]

use std::{collections::BTreeMap, net::Ipv4Addr};
use typechain::{Link, Value};

// ============================================================================
// Sample Values
// ============================================================================

/// One representative per built-in category, in chain order.
pub fn category_samples() -> Vec<Value> {
    vec![
        Value::Undefined,
        Value::Null,
        Value::from(false),
        Value::from(0),
        Value::from("hello world"),
        Value::from(vec![Value::from("abc"), Value::from(1)]),
        Value::object(),
    ]
}

/// A second, differently shaped value per category, in chain order.
pub fn category_variants() -> Vec<Value> {
    let nested = BTreeMap::from([
        ("id".to_string(), Value::from(7)),
        ("tags".to_string(), Value::from(vec!["a", "b"])),
        (
            "parent".to_string(),
            Value::from(BTreeMap::from([("x".to_string(), 1)])),
        ),
    ]);
    vec![
        Value::default(),
        Value::from(None::<bool>),
        Value::from(true),
        Value::from(f64::NEG_INFINITY),
        Value::from(""),
        Value::from(vec![Value::array(), Value::object()]),
        Value::from(nested),
    ]
}

/// Every sample from both sets, paired with its category index.
pub fn all_category_values() -> Vec<(usize, Value)> {
    category_samples()
        .into_iter()
        .enumerate()
        .chain(category_variants().into_iter().enumerate())
        .collect()
}

// ============================================================================
// Custom Links
// ============================================================================

/// Matches strings holding a dotted-quad IPv4 address.
pub struct Ipv4Link {
    pub forward: bool,
}

impl Link for Ipv4Link {
    fn is_type_of(&self, value: &Value) -> bool {
        value
            .as_str()
            .is_some_and(|s| s.parse::<Ipv4Addr>().is_ok())
    }

    fn forward_on_match(&self) -> bool {
        self.forward
    }

    fn name(&self) -> &'static str {
        "ipv4"
    }
}

/// Matches integral numbers in `[min, max]`.
pub struct RangeLink {
    pub min: f64,
    pub max: f64,
}

impl Link for RangeLink {
    fn is_type_of(&self, value: &Value) -> bool {
        value
            .as_f64()
            .is_some_and(|n| n.fract() == 0.0 && n >= self.min && n <= self.max)
    }
}
