//! Root note and fine-tune resolution.
//!
//! The `smpl` and `inst` chunks each carry their own idea of the sample's
//! pitch, and real-world files populate them independently. These functions
//! reconcile the two sources into a single root note and fine-tune value.

/// Pitch-fraction units per cent: 2^27 / 50. Dividing a `smpl` pitch
/// fraction by this yields cents.
const PITCH_FRACTION_PER_CENT: f64 = 0x0800_0000 as f64 / 50.0;

/// Converts a `smpl` MIDI pitch fraction to cents, truncating toward zero
/// (not rounding; the truncation is load-bearing for compatibility).
pub fn pitch_fraction_to_cents(fraction: u32) -> i32 {
    (f64::from(fraction) / PITCH_FRACTION_PER_CENT) as i32
}

/// Resolves a single MIDI root note from the two optional sources.
///
/// When both chunks are present and disagree, the higher note number wins.
/// That tie-break is a compatibility choice inherited from existing
/// tooling, kept exactly as-is.
pub fn resolve_root_note(smpl_unity: Option<u32>, inst_unshifted: Option<u8>) -> Option<u32> {
    match (smpl_unity, inst_unshifted) {
        (Some(smpl), Some(inst)) => Some(smpl.max(u32::from(inst))),
        (Some(smpl), None) => Some(smpl),
        (None, Some(inst)) => Some(u32::from(inst)),
        (None, None) => None,
    }
}

/// Resolves a fine-tune value in cents from the two optional sources.
///
/// When both are present and disagree, a nonzero value beats a zero one
/// (zero usually means "field never filled in" rather than "tuned dead
/// on"); when both are nonzero the `inst` chunk wins.
pub fn resolve_fine_tune(pitch_fraction: Option<u32>, inst_fine_tune: Option<i8>) -> Option<i32> {
    let smpl_cents = pitch_fraction.map(pitch_fraction_to_cents);
    match (smpl_cents, inst_fine_tune) {
        (Some(cents), Some(inst)) => {
            let inst = i32::from(inst);
            if cents == inst {
                Some(cents)
            } else if cents == 0 && inst != 0 {
                Some(inst)
            } else if cents != 0 && inst == 0 {
                Some(cents)
            } else {
                Some(inst)
            }
        }
        (Some(cents), None) => Some(cents),
        (None, Some(inst)) => Some(i32::from(inst)),
        (None, None) => None,
    }
}
