//! Compile-fail coverage for the builder macro and the capability derives.
//!
//! These verify that misuse is rejected at compile time with the intended
//! diagnostics: unknown capability names in `named_type!`, and tag shapes
//! the derives refuse (data-carrying, generic, non-empty enum, union).

#[test]
fn capability_compile_fail_tests() {
    let test_cases = trybuild::TestCases::new();
    test_cases.compile_fail("tests/compile_fail/*.rs");
}
