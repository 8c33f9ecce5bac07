use crate::twos::decode_word;
use thiserror::Error;

/// Bytes per tri-axial sample: X, Y, Z as little-endian words.
pub const TRIAXIAL_FRAME_LEN: usize = 6;
/// Bytes per single-axis sample.
pub const SINGLE_AXIS_FRAME_LEN: usize = 2;

/// g per LSB at full resolution (3.9 mg/LSB rounded to a power of two).
pub const SCALE: f64 = 1.0 / 256.0;

pub type TriaxialFrame = [u8; TRIAXIAL_FRAME_LEN];
pub type SingleAxisFrame = [u8; SINGLE_AXIS_FRAME_LEN];

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("frame length mismatch: expected {expected} bytes, got {actual}")]
    Length { expected: usize, actual: usize },
}

/// One reading per axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Accel<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> Accel<T> {
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Accel<U> {
        Accel {
            x: f(self.x),
            y: f(self.y),
            z: f(self.z),
        }
    }
}

impl Accel<i16> {
    pub fn scaled(self, scale: f64) -> Accel<f64> {
        self.map(|v| f64::from(v) * scale)
    }

    pub fn to_f64(self) -> Accel<f64> {
        self.map(f64::from)
    }
}

/// Raw single-axis word as sent by the bridge.
///
/// The z-axis firmware variant sends the register pair without any sign
/// handling and the reader prints it unsigned; [`SingleAxis::signed`] gives
/// the two's complement reading for callers that want it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SingleAxis(pub u16);

impl SingleAxis {
    pub fn raw(self) -> u16 {
        self.0
    }

    pub fn signed(self) -> i16 {
        decode_word(self.0)
    }
}

pub fn le_word(lo: u8, hi: u8) -> u16 {
    u16::from(lo) | (u16::from(hi) << 8)
}

pub fn decode_raw(frame: &TriaxialFrame) -> Accel<i16> {
    Accel {
        x: decode_word(le_word(frame[0], frame[1])),
        y: decode_word(le_word(frame[2], frame[3])),
        z: decode_word(le_word(frame[4], frame[5])),
    }
}

pub fn decode_scaled(frame: &TriaxialFrame) -> Accel<f64> {
    decode_raw(frame).scaled(SCALE)
}

pub fn decode_single_axis(frame: &SingleAxisFrame) -> SingleAxis {
    SingleAxis(le_word(frame[0], frame[1]))
}

/// Checked conversion from a byte slice into a fixed-size frame.
pub fn frame_from_slice<const N: usize>(bytes: &[u8]) -> Result<[u8; N], DecodeError> {
    bytes.try_into().map_err(|_| DecodeError::Length {
        expected: N,
        actual: bytes.len(),
    })
}
