//! ADXL345 frame decoding: two's complement words, frame assembly, scaling.

pub mod frame;
pub mod twos;

pub use frame::{
    decode_raw, decode_scaled, decode_single_axis, frame_from_slice, le_word, Accel, DecodeError,
    SingleAxis, SingleAxisFrame, TriaxialFrame, SCALE, SINGLE_AXIS_FRAME_LEN, TRIAXIAL_FRAME_LEN,
};
pub use twos::{decode_word, twos_complement, DEFAULT_BITS};
