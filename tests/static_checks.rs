//! Compile-time guarantees, stated as static assertions: selected
//! capabilities are present, unselected ones are absent, and tags keep
//! same-representation types apart.

#![allow(dead_code)]

use core::hash::Hash;
use core::ops::{Add, AddAssign};

use named_caps::named_type;
use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_ne_all};

named_type! {
    /// Fully loaded: every capability selected.
    pub type Count = u32: Addable, Orderable, Hashable;

    /// Identity-only representation of the same u32.
    pub type ReceiptNum = u32: EqualityComparable;

    /// No capabilities at all.
    pub type Opaque = u32;
}

// Selected capabilities are there.
assert_impl_all!(Count: Add<Count>, AddAssign<Count>, PartialEq, Eq, PartialOrd, Ord, Hash);
assert_impl_all!(ReceiptNum: PartialEq, Eq);

// Unselected capabilities are not.
assert_not_impl_any!(ReceiptNum: Add<ReceiptNum>, AddAssign<ReceiptNum>, PartialOrd, Ord, Hash);
assert_not_impl_any!(Opaque: Add<Opaque>, PartialEq, PartialOrd, Hash);

// Same underlying type, same capability set, different tags: still three
// distinct, non-interchangeable types.
named_type! {
    type WidthA = u32: Addable, Orderable;
    type WidthB = u32: Addable, Orderable;
}
assert_type_ne_all!(WidthA, WidthB, u32);
assert_type_ne_all!(Count, ReceiptNum, Opaque);

// No blanket escape hatch back from the raw primitive.
assert_not_impl_any!(Count: From<u32>, Into<u32>);

// Auto traits and the unconditional surface depend on T alone, never on the
// tag (tags are empty enums and implement nothing).
assert_impl_all!(Count: Send, Sync, Copy, Clone, Default, Unpin);

// A selected capability still needs support from the underlying type:
// f32 is not Eq/Ord/Hash, so the wrapper only gets the partial forms.
named_type! {
    type Ratio = f32: Orderable, Hashable;
}
assert_impl_all!(Ratio: PartialEq, PartialOrd);
assert_not_impl_any!(Ratio: Eq, Ord, Hash);

// Zero-cost claim: the wrapper is exactly its underlying value.
const _: () = assert!(size_of::<Count>() == size_of::<u32>());
const _: () = assert!(align_of::<Count>() == align_of::<u32>());

#[test]
fn static_checks_compile() {}
