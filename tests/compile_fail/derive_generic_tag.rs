//! Tags must be concrete markers, not generic types.

use core::marker::PhantomData;
use named_caps::Hashable;

#[derive(Hashable)]
struct KeyTag<T>(PhantomData<T>);

fn main() {}
