//! Shared expansion for the capability derives.

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Error, Fields};

#[derive(Clone, Copy)]
pub enum Capability {
    Addable,
    EqualityComparable,
    Orderable,
    Hashable,
}

/// Emit the marker impl(s) for one capability, after checking the target is
/// a marker-shaped tag.
pub fn expand_capability(input: DeriveInput, cap: Capability) -> TokenStream2 {
    if let Err(err) = check_tag_shape(&input) {
        return err.to_compile_error();
    }

    let ident = &input.ident;
    match cap {
        Capability::Addable => quote! {
            impl ::named_caps::Addable for #ident {}
        },
        Capability::EqualityComparable => quote! {
            impl ::named_caps::EqualityComparable for #ident {}
        },
        // Ordering implies equality; emit both so a lone #[derive(Orderable)]
        // satisfies the supertrait.
        Capability::Orderable => quote! {
            impl ::named_caps::EqualityComparable for #ident {}
            impl ::named_caps::Orderable for #ident {}
        },
        Capability::Hashable => quote! {
            impl ::named_caps::Hashable for #ident {}
        },
    }
}

/// Tags are compile-time markers: a unit struct or an empty enum, no
/// generics. Reject anything that could hold data at runtime.
fn check_tag_shape(input: &DeriveInput) -> Result<(), Error> {
    if !input.generics.params.is_empty() {
        return Err(Error::new(
            input.generics.params.span(),
            "capability tags cannot be generic; declare one concrete tag per named type",
        ));
    }

    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Unit => Ok(()),
            fields => Err(Error::new(
                fields.span(),
                "capability tags must not carry data; use a unit struct or an empty enum",
            )),
        },
        Data::Enum(data) => {
            if data.variants.is_empty() {
                Ok(())
            } else {
                Err(Error::new(
                    data.variants.span(),
                    "capability tags must not have variants; use an empty enum",
                ))
            }
        }
        Data::Union(data) => Err(Error::new(
            data.union_token.span(),
            "capability tags must be a unit struct or an empty enum, not a union",
        )),
    }
}
