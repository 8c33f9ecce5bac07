use adxlink_core::FrameReader;
use adxlink_decode::{
    decode_raw, decode_single_axis, Accel, SINGLE_AXIS_FRAME_LEN, TRIAXIAL_FRAME_LEN,
};
use anyhow::Result;
use std::io::{Read, Write};

const COLUMN_WIDTH: usize = 10;
const RULE_WIDTH: usize = 36;

pub fn header() -> String {
    format!(
        "{:>w$} | {:>w$} | {:>w$}",
        "X (g)",
        "Y (g)",
        "Z (g)",
        w = COLUMN_WIDTH
    )
}

pub fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

pub fn row(sample: Accel<f64>) -> String {
    format!(
        "{:>w$.3} | {:>w$.3} | {:>w$.3}",
        sample.x,
        sample.y,
        sample.z,
        w = COLUMN_WIDTH
    )
}

/// Prints the header once, then one row per tri-axial frame.
///
/// Rows carry raw counts, not g. Only returns on a read or write failure,
/// including the device going away.
pub fn print_triaxial<S: Read, W: Write>(
    reader: &mut FrameReader<S, TRIAXIAL_FRAME_LEN>,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "{}", header())?;
    writeln!(out, "{}", rule())?;
    for frame in reader.frames() {
        let sample = decode_raw(&frame?);
        log::debug!("sample {sample:?}");
        writeln!(out, "{}", row(sample.to_f64()))?;
    }
    Ok(())
}

/// Prints each single-axis word unsigned, one per line.
pub fn print_single_axis<S: Read, W: Write>(
    reader: &mut FrameReader<S, SINGLE_AXIS_FRAME_LEN>,
    out: &mut W,
) -> Result<()> {
    for frame in reader.frames() {
        let word = decode_single_axis(&frame?);
        log::trace!("z word {:#06x}, signed {}", word.raw(), word.signed());
        writeln!(out, "{}", word.raw())?;
    }
    Ok(())
}
