//! Property-based tests

mod float_property_tests;
mod roundtrip_property_tests;
