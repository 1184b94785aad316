use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{EngineError, Result};

/// Stable identifier of a playfield inside a collection.
///
/// Ids are handed out by the owning collection, increase monotonically and
/// are never reused. `PlayfieldId::default()` (0) marks a playfield that has
/// not been adopted by a collection yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayfieldId(u32);

impl PlayfieldId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// The id issued after this one.
    ///
    /// Fails once `u32::MAX` has been issued; wrapping would hand out an id
    /// that was already used.
    pub fn next(self) -> Result<Self> {
        self.0.checked_add(1).map(Self).ok_or(EngineError::IdSpaceExhausted { last: self })
    }
}

impl fmt::Display for PlayfieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for PlayfieldId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}
