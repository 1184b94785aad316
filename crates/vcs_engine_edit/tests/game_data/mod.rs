//! Tests for the palette/map collection, its commands and state storage

mod commands;
mod palette;
