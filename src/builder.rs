//! The strong type builder macro.
//!
//! `named_type!` turns one line per type into the full composition: an
//! uninstantiable tag enum, the selected capability impls on that tag, and a
//! type alias for the wrapper. The capability list names the
//! operator sets the type opts into:
//!
//! ```
//! use named_caps::named_type;
//!
//! named_type! {
//!     /// Messages acknowledged by the peer.
//!     pub type ReceiptNum = u32: EqualityComparable, Hashable;
//!
//!     /// Monotonic frame counter.
//!     pub type Frame = u64: Addable, Orderable;
//!
//!     /// Opaque token; no operators at all.
//!     pub type Cookie = u32;
//! }
//!
//! assert_eq!((Frame::new(2) + Frame::new(3)).into_inner(), 5);
//! assert!(ReceiptNum::new(7) == ReceiptNum::new(7));
//! ```
//!
//! `Orderable` selects `EqualityComparable` as well; listing both is a
//! duplicate-impl error. Unknown capability names fail with a
//! `compile_error!` naming the offender.

/// Declare one or more named types.
///
/// Each declaration
///
/// ```text
/// $(#[doc])* vis type Name = Underlying $(: Cap, Cap, ...)? ;
/// ```
///
/// expands to `vis enum NameTag {}`, one capability marker impl per listed
/// capability, and `vis type Name = NamedValue<Underlying, NameTag>;`. The
/// tag enum is empty and can never be constructed; it exists only to keep
/// same-representation types apart.
#[macro_export]
macro_rules! named_type {
    (
        $(#[$meta:meta])*
        $vis:vis type $name:ident = $ty:ty : $($cap:ident),+ ;
        $($rest:tt)*
    ) => {
        $crate::paste::paste! {
            #[doc = concat!("Marker tag for [`", stringify!($name), "`]. Never instantiated.")]
            $vis enum [<$name Tag>] {}

            $(#[$meta])*
            $vis type $name = $crate::NamedValue<$ty, [<$name Tag>]>;
        }
        $($crate::__impl_cap!($name, $cap);)+
        $crate::named_type! { $($rest)* }
    };
    (
        $(#[$meta:meta])*
        $vis:vis type $name:ident = $ty:ty ;
        $($rest:tt)*
    ) => {
        $crate::paste::paste! {
            #[doc = concat!("Marker tag for [`", stringify!($name), "`]. Never instantiated.")]
            $vis enum [<$name Tag>] {}

            $(#[$meta])*
            $vis type $name = $crate::NamedValue<$ty, [<$name Tag>]>;
        }
        $crate::named_type! { $($rest)* }
    };
    () => {};
}

/// Bridge from a capability ident to its marker impl on the tag - DO NOT USE
/// DIRECTLY. Use [`named_type!`] or the capability derives instead.
#[macro_export]
#[doc(hidden)]
macro_rules! __impl_cap {
    ($name:ident, Addable) => {
        $crate::paste::paste! {
            impl $crate::Addable for [<$name Tag>] {}
        }
    };
    ($name:ident, EqualityComparable) => {
        $crate::paste::paste! {
            impl $crate::EqualityComparable for [<$name Tag>] {}
        }
    };
    // Orderable implies EqualityComparable; selecting it selects both.
    ($name:ident, Orderable) => {
        $crate::paste::paste! {
            impl $crate::EqualityComparable for [<$name Tag>] {}
            impl $crate::Orderable for [<$name Tag>] {}
        }
    };
    ($name:ident, Hashable) => {
        $crate::paste::paste! {
            impl $crate::Hashable for [<$name Tag>] {}
        }
    };
    ($name:ident, $other:ident) => {
        compile_error!(concat!(
            "unknown capability `",
            stringify!($other),
            "`; expected Addable, EqualityComparable, Orderable, or Hashable"
        ));
    };
}
