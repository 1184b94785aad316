//! Tests for the playfield model
//!
//! These tests verify that every mutation keeps the mirror invariant and the
//! register overrides intact, and that malformed input is rejected without
//! touching the playfield.

mod serialization;
mod validation;
