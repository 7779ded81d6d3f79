//! Capability names outside the fixed set are rejected at expansion time.

use named_caps::named_type;

named_type! { type Distance = u32: Subtractable; }

fn main() {}
