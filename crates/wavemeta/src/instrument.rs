//! Parsed `inst` chunk fields.

use serde::Serialize;

/// Instrument metadata from the `inst` chunk.
///
/// Seven single-byte fields; fine tune and gain are signed, the rest
/// unsigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InstrumentChunk {
    /// MIDI note at which the sample plays unshifted (0-127). Should match
    /// the sampler chunk's unity note, but files disagree in practice.
    pub unshifted_note: u8,
    /// Fine tune in cents (-50 to +50).
    pub fine_tune: i8,
    /// Gain in dB.
    pub gain: i8,
    /// Low end of the key range (0-127).
    pub low_note: u8,
    /// High end of the key range (0-127).
    pub high_note: u8,
    /// Low end of the velocity range (0-127).
    pub low_velocity: u8,
    /// High end of the velocity range (0-127).
    pub high_velocity: u8,
}
