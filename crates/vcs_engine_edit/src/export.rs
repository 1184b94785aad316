//! Playfield register export as 6502 assembler data.
//!
//! The TIA draws the left half of a scanline from three registers with
//! different bit orders:
//!
//! | register | columns | bit of column x |
//! |----------|---------|-----------------|
//! | PF0      | 0..=3   | x + 4           |
//! | PF1      | 4..=11  | 7 - (x - 4)     |
//! | PF2      | 12..=19 | x - 12          |
//!
//! Only the left half is exported; the right half is what the hardware
//! derives from the same registers.

use std::fmt::Write;

use vcs_engine::{EngineError, Playfield, Result, PLAYFIELD_HALF_WIDTH, REGISTER_COUNT};

/// Register byte values for one row, indexed by register
pub fn row_registers(row: &[u8]) -> [u8; REGISTER_COUNT] {
    let mut registers = [0u8; REGISTER_COUNT];
    for (x, _) in row.iter().take(PLAYFIELD_HALF_WIDTH).enumerate().filter(|&(_, &v)| v != 0) {
        match x {
            0..=3 => registers[0] |= 1 << (x + 4),
            4..=11 => registers[1] |= 1 << (7 - (x - 4)),
            _ => registers[2] |= 1 << (x - 12),
        }
    }
    registers
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AsmExporter {
    include_registers: [bool; REGISTER_COUNT],
}

impl Default for AsmExporter {
    fn default() -> Self {
        Self {
            include_registers: [true; REGISTER_COUNT],
        }
    }
}

impl AsmExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn include_registers(&self) -> [bool; REGISTER_COUNT] {
        self.include_registers
    }

    pub fn set_include_register(&mut self, register: usize, include: bool) -> Result<()> {
        if register >= REGISTER_COUNT {
            return Err(EngineError::InvalidRegister { register });
        }
        self.include_registers[register] = include;
        Ok(())
    }

    /// One `.byte` line per row, listing the included registers in order
    ///
    /// Returns an empty string when no register is included.
    pub fn export(&self, playfield: &Playfield) -> String {
        if !self.include_registers.contains(&true) {
            return String::new();
        }
        let mut out = String::new();
        for row in playfield.rows() {
            let registers = row_registers(row);
            let bytes: Vec<String> = registers
                .iter()
                .zip(self.include_registers)
                .filter(|(_, include)| *include)
                .map(|(value, _)| format!("#%{value:08b}"))
                .collect();
            let _ = writeln!(out, ".byte {}", bytes.join(", "));
        }
        out
    }
}
