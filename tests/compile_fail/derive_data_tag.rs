//! Tags carrying data are rejected by the capability derives.

use named_caps::Addable;

#[derive(Addable)]
struct CountTag(u32);

fn main() {}
