//! Text rendering of playfields and collections for the terminal.

use std::fmt::Write;

use vcs_engine::{Playfield, PLAYFIELD_HALF_WIDTH};
use vcs_engine_edit::{EditorEvent, GameData};

const SET: char = '#';
const UNSET: char = '.';

/// One line per row, the halves separated by `|`
pub fn render_playfield(playfield: &Playfield) -> String {
    let mut out = String::with_capacity(playfield.height() * (playfield.width() + 2));
    for row in playfield.rows() {
        for (x, &value) in row.iter().enumerate() {
            if x == PLAYFIELD_HALF_WIDTH {
                out.push('|');
            }
            out.push(if value == 0 { UNSET } else { SET });
        }
        out.push('\n');
    }
    out
}

/// One line summary of a playfield
pub fn describe_playfield(playfield: &Playfield) -> String {
    let registers: Vec<&str> = playfield.register_modes().iter().map(|m| m.name()).collect();
    format!(
        "{} {} rows, {}, registers {}, {} cells set",
        playfield.id(),
        playfield.height(),
        playfield.mode(),
        registers.join("/"),
        playfield.count_set()
    )
}

pub fn describe_game_data(game_data: &GameData) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "palette ({} playfields):", game_data.playfields().len());
    for playfield in game_data.playfields() {
        let marker = if game_data.selected_playfield() == Some(playfield.id()) { '*' } else { ' ' };
        let _ = writeln!(out, "{marker} {}", describe_playfield(playfield));
    }
    let map: Vec<String> = game_data.map().iter().map(ToString::to_string).collect();
    let _ = writeln!(out, "map: [{}]", map.join(", "));
    if let Some(idx) = game_data.selected_map_idx() {
        let _ = writeln!(out, "selected map entry: {idx}");
    }
    out
}

pub fn describe_event(event: &EditorEvent) -> String {
    match event {
        EditorEvent::MapAdded { id, idx } => format!("map: inserted {id} at {idx}"),
        EditorEvent::MapDeleted { idx } => format!("map: removed entry {idx}"),
        EditorEvent::MapMoved { from_idx, to_idx } => format!("map: moved entry {from_idx} to {to_idx}"),
        EditorEvent::MapSelected { idx } => format!("map: selected entry {idx}"),
        EditorEvent::PlayfieldAdded { id } => format!("added playfield {id}"),
        EditorEvent::PlayfieldDeleted { id } => format!("deleted playfield {id}"),
        EditorEvent::PlayfieldDataChanged { id, data } => {
            let set = data.iter().flatten().filter(|&&v| v != 0).count();
            format!("playfield {id} changed, {set} cells set")
        }
        EditorEvent::PlayfieldStateChanged { id, mode, register_modes } => {
            let registers: Vec<&str> = register_modes.iter().map(|m| m.name()).collect();
            format!("playfield {id} is now {mode}, registers {}", registers.join("/"))
        }
        EditorEvent::PlayfieldSelected { id } => format!("selected playfield {id}"),
        EditorEvent::StateLoaded { name } => format!("loaded state {name}"),
        EditorEvent::StateSaved { name } => format!("saved state {name}"),
        EditorEvent::StateSet => "state replaced".to_string(),
    }
}
