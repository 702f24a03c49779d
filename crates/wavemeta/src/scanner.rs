//! Single-pass RIFF/WAVE chunk scanner.
//!
//! The scanner walks the container once, records every chunk it meets, and
//! parses the four known chunk types (`fmt `, `data`, `smpl`, `inst`) into
//! typed metadata. Sample data is never read into memory; only its position
//! and size are recorded.

use std::fs::File;
use std::io::{self, BufReader, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use byteorder::{LittleEndian, ReadBytesExt};
use serde::Serialize;

use crate::chunk::{self, ChunkRecord, FourCc};
use crate::data::DataRegion;
use crate::error::{ScanError, ScanResult};
use crate::format::FormatInfo;
use crate::instrument::InstrumentChunk;
use crate::sampler::{SampleLoop, SamplerChunk};
use crate::tuning;

/// Fully parsed metadata for one RIFF/WAVE container.
///
/// Constructed only by [`scan`]; immutable afterwards. Scanning either
/// yields a complete view or an error, never a partially populated one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaveInfo {
    /// True byte length on disk, measured by seeking to the end. The
    /// declared RIFF length is never trusted for this.
    pub file_size: u64,
    /// Declared RIFF body length (total file length minus 8). Recorded
    /// for inspection but never used to bound the scan.
    pub declared_length: u32,
    /// RIFF form type; always `WAVE` for a successfully scanned file.
    pub form_type: FourCc,
    /// Every chunk encountered, in file order, unknown types included.
    pub chunks: Vec<ChunkRecord>,
    /// First `fmt ` chunk, if any.
    pub format: Option<FormatInfo>,
    /// First `data` chunk, if any.
    pub data: Option<DataRegion>,
    /// First `smpl` chunk, if any. `None` is distinct from a present
    /// chunk with zero loops.
    pub sampler: Option<SamplerChunk>,
    /// First `inst` chunk, if any.
    pub instrument: Option<InstrumentChunk>,
}

impl WaveInfo {
    /// Number of multi-channel frames in the data chunk.
    pub fn frame_count(&self) -> Option<u64> {
        self.data.map(|d| d.frames)
    }

    /// Offset of the first raw sample byte. Seek here for data.
    pub fn data_start(&self) -> Option<u64> {
        self.data.map(|d| d.payload_start())
    }

    /// First frame of the canonical (first) loop region.
    pub fn loop_start(&self) -> Option<u32> {
        self.first_loop().map(|lp| lp.start)
    }

    /// Last frame of the canonical (first) loop region.
    pub fn loop_end(&self) -> Option<u32> {
        self.first_loop().map(|lp| lp.end)
    }

    /// Span of the canonical (first) loop region in frames.
    pub fn loop_length(&self) -> Option<u32> {
        self.first_loop().map(|lp| lp.length())
    }

    /// MIDI root note reconciled from the `smpl` and `inst` chunks.
    pub fn root_note(&self) -> Option<u32> {
        tuning::resolve_root_note(
            self.sampler.as_ref().map(|s| s.midi_unity_note),
            self.instrument.map(|i| i.unshifted_note),
        )
    }

    /// Fine-tune in cents reconciled from the `smpl` and `inst` chunks.
    pub fn fine_tune(&self) -> Option<i32> {
        tuning::resolve_fine_tune(
            self.sampler.as_ref().map(|s| s.midi_pitch_fraction),
            self.instrument.map(|i| i.fine_tune),
        )
    }

    fn first_loop(&self) -> Option<&SampleLoop> {
        self.sampler.as_ref().and_then(|s| s.first_loop())
    }
}

/// Scans a seekable byte source positioned anywhere and returns the parsed
/// metadata view.
///
/// The source is measured with a seek to the end, then walked from offset 0
/// chunk by chunk until the measured end is reached. Typed readers consume
/// fields from inside a chunk, but the walk always reseeks to the next
/// chunk boundary afterwards, so a misdeclared chunk cannot desynchronize
/// the scan.
pub fn scan<R: Read + Seek>(mut reader: R) -> ScanResult<WaveInfo> {
    let file_size = reader.seek(SeekFrom::End(0))?;
    reader.seek(SeekFrom::Start(0))?;

    let group_id = read_tag(&mut reader, 0)?;
    if group_id != chunk::RIFF {
        return Err(ScanError::format(format!(
            "'RIFF' chunk ID not found (got '{group_id}')"
        )));
    }
    let declared_length = read_u32(&mut reader, 4)?;
    let form_type = read_tag(&mut reader, 8)?;
    if form_type != chunk::WAVE {
        return Err(ScanError::format(format!(
            "'WAVE' RIFF type not found (got '{form_type}')"
        )));
    }

    let mut chunks = Vec::new();
    let mut format: Option<FormatInfo> = None;
    let mut data: Option<DataRegion> = None;
    let mut sampler: Option<SamplerChunk> = None;
    let mut instrument: Option<InstrumentChunk> = None;

    let mut offset = 12u64;
    while offset != file_size {
        let start = offset;
        let id = read_tag(&mut reader, start)?;
        let length = read_u32(&mut reader, start + 4)?;

        let payload_end = start + 8 + u64::from(length);
        if payload_end > file_size {
            return Err(ScanError::Truncated { offset: start });
        }

        // First occurrence wins; later duplicates stay in the chunk list
        // but are not re-parsed.
        match id {
            chunk::FMT if format.is_none() => {
                format = Some(read_format(&mut reader, start, length)?);
            }
            chunk::DATA if data.is_none() => {
                let fmt = format.as_ref().ok_or_else(|| {
                    ScanError::chunk_order("'data' chunk before 'fmt ' chunk")
                })?;
                data = Some(DataRegion::derive(start, length, fmt)?);
            }
            chunk::SMPL if sampler.is_none() => {
                sampler = Some(read_sampler(&mut reader, start, length)?);
            }
            chunk::INST if instrument.is_none() => {
                instrument = Some(read_instrument(&mut reader, start)?);
            }
            _ => {}
        }

        // Reseek unconditionally to the declared boundary.
        reader.seek(SeekFrom::Start(payload_end))?;
        offset = payload_end;

        chunks.push(ChunkRecord { id, start, length });
    }

    Ok(WaveInfo {
        file_size,
        declared_length,
        form_type,
        chunks,
        format,
        data,
        sampler,
        instrument,
    })
}

fn read_format<R: Read>(reader: &mut R, start: u64, length: u32) -> ScanResult<FormatInfo> {
    let format_tag = read_u16(reader, start + 8)?;
    let channels = read_u16(reader, start + 10)?;
    let sample_rate = read_u32(reader, start + 12)?;
    let avg_bytes_per_sec = read_u32(reader, start + 16)?;
    let block_align = read_u16(reader, start + 20)?;
    let bits_per_sample = read_u16(reader, start + 22)?;
    // 32-bit float files usually declare 18 bytes and carry the extension
    // size field; plain PCM declares 16 and does not.
    let ext_size = if length >= 18 {
        read_u16(reader, start + 24)?
    } else {
        0
    };
    Ok(FormatInfo {
        format_tag,
        channels,
        sample_rate,
        avg_bytes_per_sec,
        block_align,
        bits_per_sample,
        ext_size,
    })
}

/// Bytes of fixed header fields in a `smpl` chunk (9 x u32).
const SMPL_HEADER_SIZE: u32 = 36;

/// Bytes per `smpl` loop record (6 x u32).
const SMPL_LOOP_RECORD_SIZE: u32 = 24;

fn read_sampler<R: Read>(reader: &mut R, start: u64, length: u32) -> ScanResult<SamplerChunk> {
    let mut at = start + 8;
    let mut next_u32 = |reader: &mut R| {
        let value = read_u32(reader, at);
        at += 4;
        value
    };

    let manufacturer = next_u32(reader)?;
    let product = next_u32(reader)?;
    let sample_period = next_u32(reader)?;
    let midi_unity_note = next_u32(reader)?;
    let midi_pitch_fraction = next_u32(reader)?;
    let smpte_format = next_u32(reader)?;
    let smpte_offset = next_u32(reader)?;
    let loop_count = next_u32(reader)?;
    let sampler_data_size = next_u32(reader)?;

    // The on-disk loop count is untrusted until the records are actually
    // read; pre-size only for what the declared chunk length can hold, so
    // a hostile count cannot demand an enormous allocation.
    let record_capacity = length.saturating_sub(SMPL_HEADER_SIZE) / SMPL_LOOP_RECORD_SIZE;
    let mut loops = Vec::with_capacity(loop_count.min(record_capacity) as usize);
    for _ in 0..loop_count {
        loops.push(SampleLoop {
            cue_point_id: next_u32(reader)?,
            loop_type: next_u32(reader)?,
            start: next_u32(reader)?,
            end: next_u32(reader)?,
            fraction: next_u32(reader)?,
            play_count: next_u32(reader)?,
        });
    }

    Ok(SamplerChunk {
        manufacturer,
        product,
        sample_period,
        midi_unity_note,
        midi_pitch_fraction,
        smpte_format,
        smpte_offset,
        loop_count,
        sampler_data_size,
        loops,
    })
}

fn read_instrument<R: Read>(reader: &mut R, start: u64) -> ScanResult<InstrumentChunk> {
    let mut buf = [0u8; 7];
    reader
        .read_exact(&mut buf)
        .map_err(|e| map_eof(e, start + 8))?;
    Ok(InstrumentChunk {
        unshifted_note: buf[0],
        fine_tune: buf[1] as i8,
        gain: buf[2] as i8,
        low_note: buf[3],
        high_note: buf[4],
        low_velocity: buf[5],
        high_velocity: buf[6],
    })
}

fn read_tag<R: Read>(reader: &mut R, offset: u64) -> ScanResult<FourCc> {
    let mut buf = [0u8; 4];
    reader
        .read_exact(&mut buf)
        .map_err(|e| map_eof(e, offset))?;
    Ok(FourCc(buf))
}

fn read_u32<R: Read>(reader: &mut R, offset: u64) -> ScanResult<u32> {
    reader
        .read_u32::<LittleEndian>()
        .map_err(|e| map_eof(e, offset))
}

fn read_u16<R: Read>(reader: &mut R, offset: u64) -> ScanResult<u16> {
    reader
        .read_u16::<LittleEndian>()
        .map_err(|e| map_eof(e, offset))
}

// Short reads during fixed-field decode are a truncation of the container,
// not a transport failure.
fn map_eof(err: io::Error, offset: u64) -> ScanError {
    if err.kind() == io::ErrorKind::UnexpectedEof {
        ScanError::Truncated { offset }
    } else {
        ScanError::Io(err)
    }
}

/// A WAVE file on disk together with its parsed metadata.
///
/// Scans once at open time. The metadata view is a snapshot; callers that
/// need to observe on-disk changes made after [`WaveFile::open`] request a
/// fresh scan with [`WaveFile::rescan`], which fully replaces the view.
#[derive(Debug, Clone)]
pub struct WaveFile {
    path: PathBuf,
    info: WaveInfo,
}

impl WaveFile {
    /// Opens and scans the file at `path`.
    pub fn open(path: impl Into<PathBuf>) -> ScanResult<Self> {
        let path = path.into();
        let info = Self::scan_path(&path)?;
        Ok(Self { path, info })
    }

    /// Re-reads the file and replaces the metadata view.
    pub fn rescan(&mut self) -> ScanResult<()> {
        self.info = Self::scan_path(&self.path)?;
        Ok(())
    }

    /// Full path of the scanned file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name component of the scanned file.
    pub fn file_name(&self) -> Option<&str> {
        self.path.file_name().and_then(|n| n.to_str())
    }

    /// The parsed metadata view.
    pub fn info(&self) -> &WaveInfo {
        &self.info
    }

    fn scan_path(path: &Path) -> ScanResult<WaveInfo> {
        let file = File::open(path)?;
        scan(BufReader::new(file))
    }
}
