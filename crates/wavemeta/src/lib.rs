//! WAVE Metadata Scanner
//!
//! This crate extracts structural metadata from RIFF/WAVE audio files
//! without loading sample data into memory:
//!
//! - **Container layout** - every chunk's id, offset, and declared length
//! - **Format parameters** - channels, sample rate, bit depth (`fmt `)
//! - **Data location** - where the raw sample bytes live, and how many
//!   frames they hold (`data`)
//! - **Loop points** - sampler loop regions (`smpl`)
//! - **Tuning hints** - root note and fine-tune, reconciled across the
//!   `smpl` and `inst` chunks when the two disagree
//!
//! # Overview
//!
//! The container is walked exactly once. Each chunk is recorded in file
//! order; the four known chunk types are additionally parsed into typed,
//! immutable metadata. Scanning either returns a complete [`WaveInfo`] or
//! a typed [`ScanError`], never a partially populated view. Unknown chunk
//! types are indexed by position and length only.
//!
//! # Example
//!
//! ```ignore
//! use wavemeta::WaveFile;
//!
//! let wave = WaveFile::open("piano_c4.wav")?;
//! let info = wave.info();
//!
//! if let Some(format) = &info.format {
//!     println!("{} Hz, {} channels", format.sample_rate, format.channels);
//! }
//! if let Some(note) = info.root_note() {
//!     println!("root note: MIDI {note}");
//! }
//! ```
//!
//! # Crate Structure
//!
//! - [`scanner`] - the single-pass chunk scanner and [`WaveFile`] wrapper
//! - [`chunk`] - four-character codes and raw chunk records
//! - [`format`] - parsed `fmt ` fields
//! - [`data`] - `data` chunk location and frame arithmetic
//! - [`sampler`] - parsed `smpl` chunk (loop table)
//! - [`instrument`] - parsed `inst` chunk
//! - [`tuning`] - pure root-note / fine-tune resolution
//! - [`error`] - typed scan errors

pub mod chunk;
pub mod data;
pub mod error;
pub mod format;
pub mod instrument;
pub mod sampler;
pub mod scanner;
pub mod tuning;

// Re-export main types at crate root
pub use chunk::{ChunkRecord, FourCc};
pub use data::DataRegion;
pub use error::{ScanError, ScanResult};
pub use format::FormatInfo;
pub use instrument::InstrumentChunk;
pub use sampler::{SampleLoop, SamplerChunk};
pub use scanner::{scan, WaveFile, WaveInfo};
