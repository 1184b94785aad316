#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_lossless,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions
)]
//! Editing layer on top of `vcs_engine`: shape drawing, strokes, undo,
//! the playfield/map collection, persistence and register export.

pub mod brushes;
pub mod editor;
pub mod undo_stack;

mod commands;
pub use commands::EditorCommand;

mod events;
pub use events::EditorEvent;

mod game_data;
pub use game_data::GameData;

mod storage;
pub use storage::StateStorage;

mod export;
pub use export::{row_registers, AsmExporter};

pub use brushes::DrawMode;
pub use editor::{CellSize, EditorSession, PointerButtons, SessionState};
pub use undo_stack::{UndoHistory, UndoState};
