//! Four-character codes and raw chunk records.

use std::fmt;

use serde::Serialize;

/// A RIFF four-character code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FourCc(pub [u8; 4]);

/// The `RIFF` container tag.
pub const RIFF: FourCc = FourCc(*b"RIFF");

/// The `WAVE` form type tag.
pub const WAVE: FourCc = FourCc(*b"WAVE");

/// The format chunk tag (note the trailing space).
pub const FMT: FourCc = FourCc(*b"fmt ");

/// The sample data chunk tag.
pub const DATA: FourCc = FourCc(*b"data");

/// The sampler (loop point) chunk tag.
pub const SMPL: FourCc = FourCc(*b"smpl");

/// The instrument chunk tag.
pub const INST: FourCc = FourCc(*b"inst");

impl FourCc {
    /// Returns the raw tag bytes.
    pub fn bytes(&self) -> [u8; 4] {
        self.0
    }
}

impl fmt::Display for FourCc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            // Non-ASCII tag bytes render as escapes rather than garbage.
            if b.is_ascii_graphic() || b == b' ' {
                write!(f, "{}", b as char)?;
            } else {
                write!(f, "\\x{b:02x}")?;
            }
        }
        Ok(())
    }
}

impl From<[u8; 4]> for FourCc {
    fn from(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }
}

/// One chunk encountered during a container scan.
///
/// Records every chunk in file order, including unknown types, which are
/// indexed by position and length only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChunkRecord {
    /// Chunk tag.
    pub id: FourCc,
    /// Offset of the id field itself (not the payload).
    pub start: u64,
    /// Declared payload length in bytes.
    pub length: u32,
}

impl ChunkRecord {
    /// Offset of the first payload byte (past the 8-byte chunk header).
    pub fn payload_start(&self) -> u64 {
        self.start + 8
    }
}
