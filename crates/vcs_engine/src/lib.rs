#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_lossless,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::module_name_repetitions
)]
//! Playfield model for the Atari VCS playfield editor.
//!
//! A playfield is a 40 column wide binary bitmap. The right half always
//! mirrors the left half (either repeated or reflected, matching the two
//! hardware modes of the TIA), and each of the three playfield registers
//! (PF0, PF1, PF2) can force its columns to a constant value.

mod error;
pub use error::{EngineError, Result};

mod position;
pub use position::Position;

pub mod playfield;
pub use playfield::{Playfield, PlayfieldId, PlayfieldMode, RegisterMode, PLAYFIELD_HALF_WIDTH, PLAYFIELD_WIDTH, REGISTER_COUNT};
