//! Syntax tests
//!
//! Tests for:
//! - Canonical serialization
//! - Round-tripping through the parser

pub mod tests_serialize;
