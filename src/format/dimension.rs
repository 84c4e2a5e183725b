//! Dimension codec and pixel addressing.
//!
//! Widths and heights are stored as eight bytes whose sum equals the value,
//! each byte at most 255. Byte order and the per-byte cap are part of the
//! wire format, so the split below must stay bit-exact.

use crate::error::RangeError;

use super::{check_dimension, DIMENSION_BYTES};

/// Encode a dimension into its 8-byte sum representation.
///
/// The value is divided into `ceil(dimension / 255)` near-equal parts, with
/// the division remainder distributed one unit at a time from the front; the
/// remaining slots stay zero. Zero encodes as eight zero bytes. Fails with a
/// [`RangeError`] when the dimension exceeds [`MAX_DIMENSION`](super::MAX_DIMENSION).
pub fn encode_dimension(dimension: u32) -> Result<[u8; DIMENSION_BYTES], RangeError> {
    check_dimension(dimension)?;
    Ok(split(dimension))
}

/// Decode an 8-byte dimension encoding by summing its bytes.
///
/// Exact inverse of [`encode_dimension`] for any value the encoder can
/// produce, since the encoded parts always sum to the dimension.
pub fn decode_dimension(bytes: &[u8; DIMENSION_BYTES]) -> u32 {
    bytes.iter().map(|&b| u32::from(b)).sum()
}

// Callers guarantee `dimension <= MAX_DIMENSION`.
pub(crate) fn split(dimension: u32) -> [u8; DIMENSION_BYTES] {
    let mut bytes = [0u8; DIMENSION_BYTES];

    if dimension == 0 {
        return bytes;
    }

    let count = dimension.div_ceil(u8::MAX as u32);
    let base = dimension / count;
    let extra = dimension % count;

    for (i, slot) in bytes.iter_mut().take(count as usize).enumerate() {
        *slot = base as u8 + u8::from((i as u32) < extra);
    }

    bytes
}

/// Row-major linear index of the pixel at `(x, y)`.
pub fn pixel_index(x: u32, y: u32, width: u32) -> u32 {
    y * width + x
}

/// Coordinates of the pixel at a row-major linear index.
pub fn pixel_coords(index: u32, width: u32, height: u32) -> (u32, u32) {
    (index % width, (index / width) % height)
}
