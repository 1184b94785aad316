use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{PLAYFIELD_HALF_WIDTH, PLAYFIELD_WIDTH};
use crate::EngineError;

/// How the right half of the playfield is derived from the left half.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayfieldMode {
    /// Right half repeats the left half.
    #[default]
    Normal,
    /// Right half is the left half flipped horizontally.
    Reflected,
}

impl PlayfieldMode {
    /// Column paired with `x` under this mode.
    ///
    /// `x` must be in `0..PLAYFIELD_WIDTH`.
    pub fn mirror(self, x: usize) -> usize {
        match self {
            PlayfieldMode::Normal => (x + PLAYFIELD_HALF_WIDTH) % PLAYFIELD_WIDTH,
            PlayfieldMode::Reflected => PLAYFIELD_WIDTH - 1 - x,
        }
    }

    /// Left-half column representing `x`.
    pub fn left_half(self, x: usize) -> usize {
        if x < PLAYFIELD_HALF_WIDTH {
            x
        } else {
            self.mirror(x)
        }
    }

    /// Register zone (0 = PF0, 1 = PF1, 2 = PF2) that owns column `x`.
    pub fn register_zone(self, x: usize) -> usize {
        match self.left_half(x) {
            0..=3 => 0,
            4..=11 => 1,
            _ => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PlayfieldMode::Normal => "normal",
            PlayfieldMode::Reflected => "reflected",
        }
    }
}

impl fmt::Display for PlayfieldMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PlayfieldMode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(PlayfieldMode::Normal),
            "reflected" => Ok(PlayfieldMode::Reflected),
            _ => Err(EngineError::UnknownPlayfieldMode { value: s.to_string() }),
        }
    }
}

/// Numeric encoding used by saved states (0 = normal, 1 = reflected).
impl TryFrom<u8> for PlayfieldMode {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(PlayfieldMode::Normal),
            1 => Ok(PlayfieldMode::Reflected),
            _ => Err(EngineError::UnknownPlayfieldMode { value: value.to_string() }),
        }
    }
}

impl From<PlayfieldMode> for u8 {
    fn from(mode: PlayfieldMode) -> Self {
        match mode {
            PlayfieldMode::Normal => 0,
            PlayfieldMode::Reflected => 1,
        }
    }
}

/// Override applied to every column of one register zone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RegisterMode {
    /// Pixels keep whatever value is drawn.
    #[default]
    Draw,
    /// Pixels are forced on.
    Fill,
    /// Pixels are forced off.
    Clear,
}

impl RegisterMode {
    /// Value actually stored when `value` is written into a zone in this mode.
    pub fn filter(self, value: u8) -> u8 {
        match self {
            RegisterMode::Draw => value,
            RegisterMode::Fill => 1,
            RegisterMode::Clear => 0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RegisterMode::Draw => "DRAW",
            RegisterMode::Fill => "FILL",
            RegisterMode::Clear => "CLEAR",
        }
    }
}

impl fmt::Display for RegisterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RegisterMode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DRAW" => Ok(RegisterMode::Draw),
            "FILL" => Ok(RegisterMode::Fill),
            "CLEAR" => Ok(RegisterMode::Clear),
            _ => Err(EngineError::UnknownRegisterMode { value: s.to_string() }),
        }
    }
}
