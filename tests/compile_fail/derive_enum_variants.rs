//! Tags must be empty enums; variants would make them constructible.

use named_caps::EqualityComparable;

#[derive(EqualityComparable)]
enum StateTag { Idle }

fn main() {}
