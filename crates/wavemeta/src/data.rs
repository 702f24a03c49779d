//! `data` chunk location and frame arithmetic.

use serde::Serialize;

use crate::error::{ScanError, ScanResult};
use crate::format::FormatInfo;

/// Location of the sample data within the container.
///
/// Sample bytes themselves are never read; only the position and size of
/// the chunk are recorded so callers can seek to the payload later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DataRegion {
    /// Offset of the `data` chunk header (the id field).
    pub start: u64,
    /// Payload size in bytes.
    pub size: u32,
    /// Number of multi-channel frames in the payload.
    pub frames: u64,
}

impl DataRegion {
    /// Derives the region from the chunk header and the already-parsed
    /// format fields.
    pub fn derive(start: u64, size: u32, format: &FormatInfo) -> ScanResult<Self> {
        let frame_size = format.frame_size();
        if frame_size == 0 {
            return Err(ScanError::format(
                "'fmt ' chunk declares a zero-byte frame",
            ));
        }
        Ok(Self {
            start,
            size,
            frames: u64::from(size) / u64::from(frame_size),
        })
    }

    /// Offset of the first sample byte. Seek here for data.
    pub fn payload_start(&self) -> u64 {
        self.start + 8
    }
}
