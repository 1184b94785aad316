//! On-disk shape of a playfield.
//!
//! Loading goes through [`Playfield::from_parts`] so a hand edited or
//! truncated state file is validated the same way as API input.

use serde::{Deserialize, Serialize};

use super::{Playfield, PlayfieldId, PlayfieldMode, RegisterMode};
use crate::EngineError;

#[derive(Serialize, Deserialize)]
pub struct PersistedPlayfield {
    #[serde(default)]
    id: PlayfieldId,
    height: usize,
    #[serde(default)]
    mode: PlayfieldMode,
    #[serde(default = "default_register_modes")]
    register_modes: Vec<RegisterMode>,
    data: Vec<Vec<u8>>,
}

fn default_register_modes() -> Vec<RegisterMode> {
    vec![RegisterMode::Draw; super::REGISTER_COUNT]
}

impl TryFrom<PersistedPlayfield> for Playfield {
    type Error = EngineError;

    fn try_from(value: PersistedPlayfield) -> Result<Self, Self::Error> {
        let playfield = Playfield::from_parts(value.height, value.mode, Some(value.data.as_slice()), Some(value.register_modes.as_slice()))?;
        Ok(playfield.with_id(value.id))
    }
}

impl From<Playfield> for PersistedPlayfield {
    fn from(playfield: Playfield) -> Self {
        Self {
            id: playfield.id,
            height: playfield.height(),
            mode: playfield.mode,
            register_modes: playfield.register_modes.to_vec(),
            data: playfield.data(),
        }
    }
}
