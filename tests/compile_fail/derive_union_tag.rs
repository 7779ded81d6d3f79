//! Unions cannot be capability tags.

use named_caps::Orderable;

#[derive(Orderable)]
union RawTag {
    bits: u32,
}

fn main() {}
