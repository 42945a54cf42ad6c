//! Procedural macros for typechain.
//!
//! These are re-exported by the `typechain` crate behind the `macros` feature
//! and expand to paths under `::typechain`.

use proc_macro::TokenStream;
use syn::{ItemFn, parse_macro_input};

mod link;

/// Turns a predicate function into a link type.
///
/// The function must have the shape `fn(value: &Value) -> bool`. It is
/// replaced by a struct (named `<CamelCaseFnName>Link` unless `name = "..."`
/// is given) with a `new(forward_on_success)` constructor and a `Link` impl
/// whose `is_type_of` is the function body.
///
/// ```rust,ignore
/// #[typechain::type_link]
/// fn ipv4(value: &Value) -> bool {
///     value.as_str().is_some_and(|s| s.parse::<std::net::Ipv4Addr>().is_ok())
/// }
///
/// let mut chain = NumberLink::new(false).then(Ipv4Link::new(false));
/// ```
#[proc_macro_attribute]
pub fn type_link(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as link::LinkArgs);
    let input = parse_macro_input!(item as ItemFn);
    link::link_impl(args, input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
