//! End-to-end tests for the file-based scanning API.

use std::fs;

use byteorder::{LittleEndian, WriteBytesExt};
use pretty_assertions::assert_eq;
use wavemeta::{ScanError, WaveFile};

/// Assembles a minimal WAVE file: fmt + data, optionally smpl and inst.
fn wave_bytes(channels: u16, bits_per_sample: u16, data: &[u8], extra: &[(&[u8; 4], Vec<u8>)]) -> Vec<u8> {
    let block_align = channels * bits_per_sample / 8;

    let mut body = Vec::new();
    body.extend_from_slice(b"fmt ");
    body.write_u32::<LittleEndian>(16).unwrap();
    body.write_u16::<LittleEndian>(1).unwrap(); // PCM
    body.write_u16::<LittleEndian>(channels).unwrap();
    body.write_u32::<LittleEndian>(44100).unwrap();
    body.write_u32::<LittleEndian>(44100 * u32::from(block_align))
        .unwrap();
    body.write_u16::<LittleEndian>(block_align).unwrap();
    body.write_u16::<LittleEndian>(bits_per_sample).unwrap();

    body.extend_from_slice(b"data");
    body.write_u32::<LittleEndian>(data.len() as u32).unwrap();
    body.extend_from_slice(data);

    for (id, payload) in extra {
        body.extend_from_slice(*id);
        body.write_u32::<LittleEndian>(payload.len() as u32).unwrap();
        body.extend_from_slice(payload);
    }

    let mut out = Vec::new();
    out.extend_from_slice(b"RIFF");
    out.write_u32::<LittleEndian>(body.len() as u32 + 4).unwrap();
    out.extend_from_slice(b"WAVE");
    out.extend_from_slice(&body);
    out
}

fn smpl_payload(unity_note: u32, loops: &[(u32, u32)]) -> Vec<u8> {
    let mut out = Vec::new();
    for field in [0, 0, 22675, unity_note, 0, 0, 0, loops.len() as u32, 0] {
        out.write_u32::<LittleEndian>(field).unwrap();
    }
    for &(start, end) in loops {
        for field in [0, 0, start, end, 0, 0] {
            out.write_u32::<LittleEndian>(field).unwrap();
        }
    }
    out
}

#[test]
fn open_scans_and_exposes_metadata() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("piano_c4.wav");
    fs::write(
        &path,
        wave_bytes(2, 16, &[0u8; 40], &[(b"smpl", smpl_payload(60, &[(2, 8)]))]),
    )
    .expect("write fixture");

    let wave = WaveFile::open(&path).expect("open should succeed");

    assert_eq!(wave.path(), path.as_path());
    assert_eq!(wave.file_name(), Some("piano_c4.wav"));

    let info = wave.info();
    assert_eq!(info.file_size, fs::metadata(&path).unwrap().len());
    assert_eq!(info.frame_count(), Some(10)); // 40 bytes / 4 per frame
    assert_eq!(info.data_start(), Some(44));
    assert_eq!(info.loop_start(), Some(2));
    assert_eq!(info.loop_length(), Some(6));
    assert_eq!(info.root_note(), Some(60));
}

#[test]
fn rescan_reflects_on_disk_changes() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("evolving.wav");
    fs::write(&path, wave_bytes(1, 16, &[0u8; 20], &[])).expect("write fixture");

    let mut wave = WaveFile::open(&path).expect("open should succeed");
    assert_eq!(wave.info().frame_count(), Some(10));
    assert!(wave.info().sampler.is_none());

    // Rewrite the file with more data and a sampler chunk; the snapshot
    // must not change until the caller asks for a rescan.
    fs::write(
        &path,
        wave_bytes(1, 16, &[0u8; 60], &[(b"smpl", smpl_payload(72, &[]))]),
    )
    .expect("rewrite fixture");
    assert_eq!(wave.info().frame_count(), Some(10));

    wave.rescan().expect("rescan should succeed");
    assert_eq!(wave.info().frame_count(), Some(30));
    assert_eq!(wave.info().root_note(), Some(72));
}

#[test]
fn open_rejects_non_wave_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("notes.txt");
    fs::write(&path, b"this is not a RIFF container").expect("write fixture");

    let err = WaveFile::open(&path).unwrap_err();
    assert!(matches!(err, ScanError::Format { .. }));
}

#[test]
fn open_propagates_io_error_for_missing_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("does_not_exist.wav");

    let err = WaveFile::open(&path).unwrap_err();
    assert!(matches!(err, ScanError::Io(_)));
}

#[test]
fn truncated_file_yields_no_partial_metadata() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("cut_short.wav");
    let mut bytes = wave_bytes(2, 16, &[0u8; 100], &[]);
    bytes.truncate(bytes.len() - 50);
    fs::write(&path, bytes).expect("write fixture");

    let err = WaveFile::open(&path).unwrap_err();
    assert!(matches!(err, ScanError::Truncated { .. }));
}
