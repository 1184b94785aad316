//! Tests for the editor session
//!
//! Pointer input is fed in device coordinates with a 10x10 cell size; the
//! helpers convert grid cells to the device coordinate of the cell center.

mod shapes;
