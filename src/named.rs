//! The value wrapper at the heart of every strong typedef.
//!
//! `NamedValue<T, Tag>` holds exactly one `T`. The `Tag` parameter carries no
//! data; it only makes `NamedValue<u32, FrameTag>` and `NamedValue<u32, LineTag>`
//! distinct types. Operators are not defined here; they come from the
//! capability markers in [`crate::caps`], selected per tag.

use core::any::type_name;
use core::fmt;
use core::marker::PhantomData;

/// A single `T` wrapped in a tag-distinguished nominal type.
///
/// Construction from the raw underlying type goes through [`NamedValue::new`]
/// only. There is deliberately no `From<T>` impl: a blanket conversion would
/// let a bare primitive flow into a named parameter through `.into()`, which
/// is the call-site mixing this type exists to rule out.
///
/// The phantom is `fn() -> Tag` rather than `Tag` so that `Send`, `Sync`,
/// and variance depend on `T` alone. Tags are typically empty enums and are
/// never instantiated.
///
/// # Example
///
/// ```
/// use named_caps::named_type;
///
/// named_type! {
///     /// Monotonic frame counter.
///     pub type Frame = u64: Addable, Orderable;
/// }
///
/// let a = Frame::new(2);
/// let b = Frame::new(3);
/// assert_eq!((a + b).into_inner(), 5);
/// assert!(a < b);
/// ```
#[repr(transparent)]
pub struct NamedValue<T, Tag> {
    value: T,
    _tag: PhantomData<fn() -> Tag>,
}

impl<T, Tag> NamedValue<T, Tag> {
    /// Wrap a raw underlying value. The only crossing from `T` into the
    /// named type.
    #[inline(always)]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            _tag: PhantomData,
        }
    }

    /// Shared access to the held value.
    #[inline(always)]
    pub const fn get(&self) -> &T {
        &self.value
    }

    /// Mutable access to the held value.
    #[inline(always)]
    pub const fn get_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Unwrap back into the underlying type.
    #[inline(always)]
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Apply a function to the held value, staying inside the same named
    /// type.
    #[inline]
    pub fn map(self, f: impl FnOnce(T) -> T) -> Self {
        Self::new(f(self.value))
    }
}

// The std-trait surface below is hand-written instead of derived: a derive
// would put bounds on `Tag`, and tags (empty enums) implement nothing.

impl<T: Clone, Tag> Clone for NamedValue<T, Tag> {
    #[inline]
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<T: Copy, Tag> Copy for NamedValue<T, Tag> {}

impl<T: Default, Tag> Default for NamedValue<T, Tag> {
    /// A named value holding `T::default()`.
    #[inline]
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug, Tag> fmt::Debug for NamedValue<T, Tag> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(short_tag_name::<Tag>()).field(&self.value).finish()
    }
}

impl<T: fmt::Display, Tag> fmt::Display for NamedValue<T, Tag> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

/// Last path segment of the tag's type name, for `Debug` output.
fn short_tag_name<Tag>() -> &'static str {
    let full = type_name::<Tag>();
    full.rsplit("::").next().unwrap_or(full)
}
