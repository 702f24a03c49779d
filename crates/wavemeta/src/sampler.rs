//! Parsed `smpl` chunk: sampler header and loop table.

use serde::Serialize;

/// One loop record from the `smpl` chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SampleLoop {
    /// Cue point this loop corresponds to.
    pub cue_point_id: u32,
    /// Loop type (0 = forward, 1 = ping-pong, 2 = backward).
    pub loop_type: u32,
    /// First frame of the loop region.
    pub start: u32,
    /// Last frame of the loop region.
    pub end: u32,
    /// Fractional tuning of the loop point.
    pub fraction: u32,
    /// Times to play the loop (0 = infinite sustain).
    pub play_count: u32,
}

impl SampleLoop {
    /// Loop span in frames. A record whose end precedes its start has no
    /// meaningful span and reports zero.
    pub fn length(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }
}

/// Sampler metadata from the `smpl` chunk.
///
/// An absent chunk is `None` at the container level, which is distinct
/// from a present chunk with `loop_count == 0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SamplerChunk {
    /// MMA manufacturer id of the intended sampler.
    pub manufacturer: u32,
    /// Product id of the intended sampler.
    pub product: u32,
    /// Sample period in nanoseconds.
    pub sample_period: u32,
    /// MIDI note at which the sample plays at its original pitch.
    pub midi_unity_note: u32,
    /// Fraction of a semitone above the unity note, as a 32-bit
    /// fixed-point value. See [`crate::tuning::pitch_fraction_to_cents`].
    pub midi_pitch_fraction: u32,
    /// SMPTE time format.
    pub smpte_format: u32,
    /// SMPTE offset for synchronization.
    pub smpte_offset: u32,
    /// Declared number of loop records.
    pub loop_count: u32,
    /// Bytes of sampler-specific data following the loop records.
    pub sampler_data_size: u32,
    /// Loop records, exactly `loop_count` entries, in chunk order.
    pub loops: Vec<SampleLoop>,
}

impl SamplerChunk {
    /// The first loop, which is reported as the canonical loop region.
    pub fn first_loop(&self) -> Option<&SampleLoop> {
        self.loops.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loop_length() {
        let lp = SampleLoop {
            cue_point_id: 0,
            loop_type: 0,
            start: 1000,
            end: 9000,
            fraction: 0,
            play_count: 0,
        };
        assert_eq!(lp.length(), 8000);
    }

    #[test]
    fn test_loop_length_end_before_start_is_zero() {
        let lp = SampleLoop {
            cue_point_id: 0,
            loop_type: 0,
            start: 9000,
            end: 1000,
            fraction: 0,
            play_count: 0,
        };
        assert_eq!(lp.length(), 0);
    }

    #[test]
    fn test_first_loop_empty_table() {
        let chunk = SamplerChunk {
            manufacturer: 0,
            product: 0,
            sample_period: 22675,
            midi_unity_note: 60,
            midi_pitch_fraction: 0,
            smpte_format: 0,
            smpte_offset: 0,
            loop_count: 0,
            sampler_data_size: 0,
            loops: vec![],
        };
        assert!(chunk.first_loop().is_none());
    }
}
