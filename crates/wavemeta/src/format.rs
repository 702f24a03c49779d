//! Parsed `fmt ` chunk fields.

use serde::Serialize;

/// Format tag value for integer PCM.
pub const FORMAT_TAG_PCM: u16 = 1;

/// Format tag value for IEEE float.
pub const FORMAT_TAG_IEEE_FLOAT: u16 = 3;

/// PCM format parameters from the `fmt ` chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormatInfo {
    /// Codec tag (1 = integer PCM, 3 = IEEE float). Inspected, not decoded.
    pub format_tag: u16,
    /// Number of channels (1 = mono, 2 = stereo, ...).
    pub channels: u16,
    /// Sample rate in Hz (e.g. 44100, 48000).
    pub sample_rate: u32,
    /// Average data rate: sample_rate * frame size.
    pub avg_bytes_per_sec: u32,
    /// Bytes per multi-channel frame: channels * bits_per_sample / 8.
    pub block_align: u16,
    /// Bit depth (8, 16, 24, 32).
    pub bits_per_sample: u16,
    /// Size of the fmt chunk extension. Zero when the chunk declares fewer
    /// than 18 payload bytes; 32-bit float files usually declare 18.
    pub ext_size: u16,
}

impl FormatInfo {
    /// True if the format tag declares integer PCM.
    pub fn is_pcm(&self) -> bool {
        self.format_tag == FORMAT_TAG_PCM
    }

    /// True if the format tag declares IEEE float.
    pub fn is_float(&self) -> bool {
        self.format_tag == FORMAT_TAG_IEEE_FLOAT
    }

    /// Bytes per multi-channel frame, derived from bit depth and channel
    /// count rather than the declared block alignment.
    pub fn frame_size(&self) -> u32 {
        u32::from(self.bits_per_sample / 8) * u32::from(self.channels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stereo_16bit() -> FormatInfo {
        FormatInfo {
            format_tag: FORMAT_TAG_PCM,
            channels: 2,
            sample_rate: 44100,
            avg_bytes_per_sec: 176400,
            block_align: 4,
            bits_per_sample: 16,
            ext_size: 0,
        }
    }

    #[test]
    fn test_frame_size_stereo_16bit() {
        assert_eq!(stereo_16bit().frame_size(), 4);
    }

    #[test]
    fn test_frame_size_mono_24bit() {
        let format = FormatInfo {
            channels: 1,
            bits_per_sample: 24,
            block_align: 3,
            ..stereo_16bit()
        };
        assert_eq!(format.frame_size(), 3);
    }

    #[test]
    fn test_format_tag_helpers() {
        assert!(stereo_16bit().is_pcm());
        assert!(!stereo_16bit().is_float());

        let float = FormatInfo {
            format_tag: FORMAT_TAG_IEEE_FLOAT,
            bits_per_sample: 32,
            ..stereo_16bit()
        };
        assert!(float.is_float());
        assert!(!float.is_pcm());
    }
}
