//! Link-related macros.
//!
//! This module contains:
//! - `#[type_link]` - Attribute macro for creating Link implementations from predicate functions

use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    FnArg, Ident, ItemFn, LitStr, ReturnType, Token, Type,
    parse::{Parse, ParseStream},
};

/// Arguments for the `#[type_link]` macro.
pub(crate) struct LinkArgs {
    pub name: Option<String>,
}

impl Parse for LinkArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut name = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "name" => {
                    let lit: LitStr = input.parse()?;
                    name = Some(lit.value());
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute: {}", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(LinkArgs { name })
    }
}

/// `ipv4_address` -> `Ipv4AddressLink`
fn struct_name_for(fn_name: &Ident) -> Ident {
    let camel: String = fn_name
        .to_string()
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect();
    Ident::new(&format!("{}Link", camel), fn_name.span())
}

/// Implementation of the `#[type_link]` macro.
pub(crate) fn link_impl(args: LinkArgs, input: ItemFn) -> syn::Result<TokenStream> {
    let fn_name = &input.sig.ident;
    let fn_vis = &input.vis;
    let fn_block = &input.block;
    let docs: Vec<_> = input
        .attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .collect();

    if let Some(asyncness) = &input.sig.asyncness {
        return Err(syn::Error::new_spanned(
            asyncness,
            "Link predicates must not be async",
        ));
    }

    if !input.sig.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.sig.generics,
            "Link predicates cannot be generic",
        ));
    }

    match &input.sig.output {
        ReturnType::Default => {
            return Err(syn::Error::new_spanned(
                &input.sig,
                "Link predicates must return bool: fn(value: &Value) -> bool",
            ));
        }
        ReturnType::Type(_, ty) if !is_bool(ty) => {
            return Err(syn::Error::new_spanned(
                ty,
                "Link predicates must return bool: fn(value: &Value) -> bool",
            ));
        }
        ReturnType::Type(..) => {}
    }

    let inputs = &input.sig.inputs;
    if inputs.len() != 1 {
        return Err(syn::Error::new_spanned(
            inputs,
            "Link predicates take exactly one argument: fn(value: &Value) -> bool",
        ));
    }

    let value_pat = match inputs.first() {
        Some(FnArg::Typed(pat_type)) => {
            if let Type::Reference(_) = &*pat_type.ty {
                &pat_type.pat
            } else {
                return Err(syn::Error::new_spanned(
                    &pat_type.ty,
                    "Link predicate argument must be a reference (&Value)",
                ));
            }
        }
        _ => {
            return Err(syn::Error::new_spanned(
                inputs,
                "Link predicates cannot take self",
            ));
        }
    };

    let struct_name = match args.name {
        Some(ref custom_name) => Ident::new(custom_name, fn_name.span()),
        None => struct_name_for(fn_name),
    };

    Ok(quote! {
        #(#docs)*
        #[doc = concat!("Auto-generated Link from `#[typechain::type_link]` on `", stringify!(#fn_name), "`")]
        #[derive(Clone, Copy, Debug, Default)]
        #fn_vis struct #struct_name {
            forward_on_success: bool,
        }

        impl #struct_name {
            /// Create the link with the given forwarding flag.
            pub const fn new(forward_on_success: bool) -> Self {
                Self { forward_on_success }
            }
        }

        impl ::typechain::Link for #struct_name {
            fn is_type_of(&self, #value_pat: &::typechain::Value) -> bool #fn_block

            fn forward_on_match(&self) -> bool {
                self.forward_on_success
            }

            fn name(&self) -> &'static str {
                stringify!(#fn_name)
            }
        }
    })
}

fn is_bool(ty: &Type) -> bool {
    match ty {
        Type::Path(path) => path.qself.is_none() && path.path.is_ident("bool"),
        Type::Paren(inner) => is_bool(&inner.elem),
        _ => false,
    }
}
