//! Standard link implementations.

pub mod kind;
pub mod predicate;

pub use kind::{
    ArrayLink, BooleanLink, KindLink, NullLink, NumberLink, ObjectLink, StringLink, UndefinedLink,
};
pub use predicate::{AnyLink, PredicateLink};
