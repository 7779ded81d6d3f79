#![cfg_attr(not(feature = "std"), no_std)]

//! # named-caps
//!
//! Strong typedefs with compile-time capability selection.
//!
//! A named type is composed from three ingredients:
//!
//! ```text
//! Underlying type  +  Tag (phantom marker)  +  Capability selection
//!        |                    |                        |
//!     storage          nominal identity        which operators exist
//! ```
//!
//! `NamedValue<u32, FrameTag>` and `NamedValue<u32, LineTag>` store the same
//! bytes but are unrelated types: one cannot be passed, compared, or added
//! where the other is expected. Operators themselves are opt-in. Each
//! capability is a marker trait on the tag, and the corresponding operator
//! impl on the wrapper is bounded by that marker:
//!
//! - [`Addable`]: `+` and `+=` over the underlying values
//! - [`EqualityComparable`]: `==` / `!=`
//! - [`Orderable`]: `<`, `>`, `<=`, `>=` (implies [`EqualityComparable`])
//! - [`Hashable`]: `Hash` plus seeded hashing ([`hash`])
//!
//! Selection happens once, when the type is declared. There is no runtime
//! dispatch and no runtime cost: the wrapper is `#[repr(transparent)]`, and
//! using an operator that was not selected fails to compile.
//!
//! ## Quick start
//!
//! ```
//! use named_caps::prelude::*;
//!
//! named_type! {
//!     /// Frames rendered since startup.
//!     pub type Frame = u64: Addable, Orderable;
//!
//!     /// Stable user identifier; only identity operations.
//!     pub type UserId = u64: EqualityComparable, Hashable;
//! }
//!
//! let total = Frame::new(2) + Frame::new(3);
//! assert_eq!(*total.get(), 5);
//! assert!(Frame::new(2) < Frame::new(3));
//!
//! // Frame + UserId, UserId < UserId, Frame::new(1) == 1: all type errors.
//! ```
//!
//! Hand-written tags work too, with the capability derives:
//!
//! ```
//! use named_caps::{Addable, NamedValue, Orderable};
//!
//! #[derive(Addable, Orderable)]
//! enum BudgetTag {}
//! type Budget = NamedValue<i64, BudgetTag>;
//!
//! let left = Budget::new(40) + Budget::new(2);
//! assert!(left > Budget::new(41));
//! ```

// Allow `::named_caps` paths to resolve inside the crate itself, so macro
// expansions work both here and downstream.
extern crate self as named_caps;

// Re-export for the named_type! expansion.
#[doc(hidden)]
pub use paste;

// =============================================================================
// Layer 0: Value wrapper
// =============================================================================
pub mod named;

// =============================================================================
// Layer 1: Capability markers and gated operators
// =============================================================================
pub mod caps;

// =============================================================================
// Layer 2: Seeded hashing (Hashable integration)
// =============================================================================
pub mod hash;

// Builder macro (named_type! and its __impl_cap! bridge).
mod builder;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use caps::{Addable, EqualityComparable, Hashable, Orderable};
pub use hash::{SeededHasher, SeededState, seeded_hash};
pub use named::NamedValue;

// Capability derives for hand-written tags. Same names as the marker traits,
// serde-style: the derive lives in the macro namespace, the trait in the
// type namespace.
pub use macros::{Addable, EqualityComparable, Hashable, Orderable};

/// Everything needed to declare and use named types.
pub mod prelude {
    // Imports both namespaces per name: the marker trait and the derive.
    pub use crate::{Addable, EqualityComparable, Hashable, Orderable};
    pub use crate::hash::{SeededState, seeded_hash};
    pub use crate::named::NamedValue;
    pub use crate::named_type;
}
