/// Word width of every ADXL345 data register pair.
pub const DEFAULT_BITS: u32 = 16;

/// Interprets the low `bits` bits of `value` as a two's complement integer.
///
/// When bit `bits - 1` is set the result is `value - 2^bits`, otherwise
/// `value` is returned as is. `bits` must be in `1..=32`.
pub fn twos_complement(value: u32, bits: u32) -> i64 {
    debug_assert!((1..=32).contains(&bits), "unsupported width {bits}");
    let value = i64::from(value);
    if value & (1 << (bits - 1)) != 0 {
        value - (1 << bits)
    } else {
        value
    }
}

/// 16-bit shortcut for [`twos_complement`].
pub fn decode_word(raw: u16) -> i16 {
    // always in i16 range for a 16-bit input
    twos_complement(u32::from(raw), DEFAULT_BITS) as i16
}
