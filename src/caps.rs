//! Capability markers and the operator impls they unlock.
//!
//! Each capability is a marker trait implemented on a *tag* type, never on
//! the wrapper. A blanket impl on [`NamedValue`] is bounded by the marker, so
//! an operator exists exactly when the tag opted in. Everything resolves at
//! compile time; using an operator whose capability was not selected is a
//! type error, not a runtime failure.
//!
//! | Capability | Unlocks on `NamedValue<T, Tag>` | Needs from `T` |
//! |---|---|---|
//! | [`Addable`] | `+`, `+=` | `Add<Output = T>`, `AddAssign` |
//! | [`EqualityComparable`] | `==`, `!=` | `PartialEq` (`Eq` if available) |
//! | [`Orderable`] | `<`, `>`, `<=`, `>=` | `PartialOrd` (`Ord` if available) |
//! | [`Hashable`] | `Hash` + seeded hashing ([`crate::hash`]) | `Hash` |

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};
use core::ops::{Add, AddAssign};

use crate::named::NamedValue;

// =============================================================================
// Capability markers (implemented on tags)
// =============================================================================

/// Tags opting in get `+` (and `+=`) summing the underlying values.
pub trait Addable {}

/// Tags opting in get `==`/`!=` delegating to the underlying values.
pub trait EqualityComparable {}

/// Tags opting in get the full comparison operators. Ordering implies
/// equality, so this requires [`EqualityComparable`]; selecting `Orderable`
/// through [`named_type!`](crate::named_type) or `#[derive(Orderable)]`
/// selects both.
///
/// The ordering is total only if `T`'s is (`Ord` on the wrapper needs `Ord`
/// on `T`).
pub trait Orderable: EqualityComparable {}

/// Tags opting in get `Hash` plus the seeded entry points in
/// [`crate::hash`], making the named value usable as a map or set key.
pub trait Hashable {}

// =============================================================================
// Gated operator impls
// =============================================================================

impl<T, Tag> Add for NamedValue<T, Tag>
where
    T: Add<Output = T>,
    Tag: Addable,
{
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.into_inner() + rhs.into_inner())
    }
}

impl<T, Tag> AddAssign for NamedValue<T, Tag>
where
    T: AddAssign,
    Tag: Addable,
{
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self.get_mut() += rhs.into_inner();
    }
}

impl<T, Tag> PartialEq for NamedValue<T, Tag>
where
    T: PartialEq,
    Tag: EqualityComparable,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl<T, Tag> Eq for NamedValue<T, Tag>
where
    T: Eq,
    Tag: EqualityComparable,
{
}

impl<T, Tag> PartialOrd for NamedValue<T, Tag>
where
    T: PartialOrd,
    Tag: Orderable,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.get().partial_cmp(other.get())
    }
}

impl<T, Tag> Ord for NamedValue<T, Tag>
where
    T: Ord,
    Tag: Orderable,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.get().cmp(other.get())
    }
}

impl<T, Tag> Hash for NamedValue<T, Tag>
where
    T: Hash,
    Tag: Hashable,
{
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.get().hash(state);
    }
}
