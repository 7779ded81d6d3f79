//! Capability derives for the named-caps strong typedef builder.
//!
//! One derive per capability, applied to a hand-written tag type:
//!
//! | Derive | Marker impl emitted |
//! |--------|---------------------|
//! | `#[derive(Addable)]` | `Addable` |
//! | `#[derive(EqualityComparable)]` | `EqualityComparable` |
//! | `#[derive(Orderable)]` | `Orderable` + `EqualityComparable` |
//! | `#[derive(Hashable)]` | `Hashable` |
//!
//! ```ignore
//! use named_caps::{Addable, NamedValue, Orderable};
//!
//! #[derive(Addable, Orderable)]
//! enum SpeedTag {}
//! type Speed = NamedValue<f64, SpeedTag>;
//! ```
//!
//! Tags must be markers: a unit struct or an empty enum, without generics.
//! Anything that carries data is rejected at the derive site.

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod expand;

/// Opt the tag into `+` / `+=` on its named values.
#[proc_macro_derive(Addable)]
pub fn derive_addable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    expand::expand_capability(input, expand::Capability::Addable).into()
}

/// Opt the tag into `==` / `!=` on its named values.
#[proc_macro_derive(EqualityComparable)]
pub fn derive_equality_comparable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    expand::expand_capability(input, expand::Capability::EqualityComparable).into()
}

/// Opt the tag into the comparison operators. Implies `EqualityComparable`;
/// do not combine the two derives on one tag.
#[proc_macro_derive(Orderable)]
pub fn derive_orderable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    expand::expand_capability(input, expand::Capability::Orderable).into()
}

/// Opt the tag into hashing on its named values.
#[proc_macro_derive(Hashable)]
pub fn derive_hashable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    expand::expand_capability(input, expand::Capability::Hashable).into()
}
