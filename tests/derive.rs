//! The derive path: hand-written tags with capability derives behave the
//! same as tags generated by `named_type!`.

use named_caps::prelude::*;

// Unit-struct tag.
#[derive(Addable, Orderable)]
struct SpeedTag;
type Speed = NamedValue<u32, SpeedTag>;

// Empty-enum tag, matching what named_type! generates.
#[derive(EqualityComparable, Hashable)]
enum SessionTag {}
type Session = NamedValue<u64, SessionTag>;

#[test]
fn derived_addable_and_orderable() {
    let s = Speed::new(30) + Speed::new(12);
    assert_eq!(*s.get(), 42);
    assert!(Speed::new(30) < s);
    // Orderable implies equality without a separate derive.
    assert_eq!(s, Speed::new(42));
}

#[test]
fn derived_hashable_keys_a_set() {
    let mut seen = std::collections::HashSet::new();
    assert!(seen.insert(Session::new(1)));
    assert!(seen.contains(&Session::new(1)));
}

#[test]
fn derive_path_matches_builder_path() {
    named_type! {
        type BuiltSpeed = u32: Addable, Orderable;
    }
    let derived = Speed::new(2) + Speed::new(3);
    let built = BuiltSpeed::new(2) + BuiltSpeed::new(3);
    assert_eq!(derived.into_inner(), built.into_inner());
}
