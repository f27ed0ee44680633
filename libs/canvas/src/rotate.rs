//! In-place 90° clockwise rotation of packed 1-bpp square bitmaps.
//!
//! Layout contract: row-major, MSB-first, `stride = ceil(side / 8)` bytes per
//! row. A pixel at `(x, y)` lands at `(side - 1 - y, x)`.

use crate::error::{CanvasResult, Error};

/// Rotate `buffer` 90° clockwise using `scratch` for the pre-rotation copy.
///
/// Copies the first `stride * side` bytes into `scratch`, zeroes them in
/// `buffer`, then ORs every set source bit into its rotated position. After
/// the copy, `buffer` is write-only and `scratch` is read-only, which is what
/// makes the in-place rotation safe.
///
/// # Panics
/// If `buffer` or `scratch` holds fewer than `stride * side` bytes. Capacity
/// is a structural invariant fixed when the bitmap is sized, not a per-call
/// parameter, so an undersized slice is a programming error.
pub fn rotate_clockwise_90_in(buffer: &mut [u8], scratch: &mut [u8], side: usize) {
    let stride = side.div_ceil(8);
    let len = stride * side;
    assert!(
        buffer.len() >= len,
        "bitmap buffer holds {} bytes, side {side} needs {len}",
        buffer.len()
    );
    assert!(
        scratch.len() >= len,
        "scratch buffer holds {} bytes, side {side} needs {len}",
        scratch.len()
    );

    scratch[..len].copy_from_slice(&buffer[..len]);
    buffer[..len].fill(0);

    for y in 0..side {
        for x in 0..side {
            let set = (scratch[y * stride + x / 8] >> (7 - (x % 8))) & 1 != 0;
            if !set {
                // Background needs no write; the buffer was just cleared.
                continue;
            }

            let new_x = side - 1 - y;
            let new_y = x;
            buffer[new_y * stride + new_x / 8] |= 1 << (7 - (new_x % 8));
        }
    }
}

/// Rotate `buffer` 90° clockwise with a scratch copy allocated for this call.
///
/// # Panics
/// If `buffer` holds fewer than `stride * side` bytes.
pub fn rotate_clockwise_90(buffer: &mut [u8], side: usize) {
    let mut scratch = vec![0u8; side.div_ceil(8) * side];
    rotate_clockwise_90_in(buffer, &mut scratch, side);
}

/// Checked variant of [`rotate_clockwise_90`] for callers that cannot
/// guarantee capacity statically.
pub fn try_rotate_clockwise_90(buffer: &mut [u8], side: usize) -> CanvasResult<()> {
    let required = side.div_ceil(8) * side;
    if buffer.len() < required {
        return Err(Error::BufferTooSmall {
            required,
            actual: buffer.len(),
        });
    }
    rotate_clockwise_90(buffer, side);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bit(buffer: &[u8], side: usize, x: usize, y: usize) -> bool {
        let stride = side.div_ceil(8);
        (buffer[y * stride + x / 8] >> (7 - (x % 8))) & 1 != 0
    }

    #[test]
    fn single_pixel_top_left_moves_to_top_right() {
        // 4x4, one pixel at (0,0): rows 1000, 0000, 0000, 0000
        let mut buffer = [0b1000_0000u8, 0, 0, 0];
        rotate_clockwise_90(&mut buffer, 4);
        // (0,0) -> (3,0): rows 0001, 0000, 0000, 0000
        assert_eq!(buffer, [0b0001_0000, 0, 0, 0]);
    }

    #[test]
    fn full_top_row_becomes_right_column() {
        let mut buffer = [0b1111_0000u8, 0, 0, 0];
        rotate_clockwise_90(&mut buffer, 4);
        assert_eq!(
            buffer,
            [0b0001_0000, 0b0001_0000, 0b0001_0000, 0b0001_0000]
        );
    }

    #[test]
    fn four_rotations_restore_original() {
        let mut buffer = [0b1010_0000u8, 0b0110_0000, 0b0001_0000, 0b1001_0000];
        let original = buffer;
        for _ in 0..4 {
            rotate_clockwise_90(&mut buffer, 4);
        }
        assert_eq!(buffer, original);
    }

    #[test]
    fn rotation_maps_every_coordinate() {
        let side: usize = 6;
        let stride = side.div_ceil(8);
        let mut buffer = vec![0u8; stride * side];
        // Diagonal plus one off-diagonal pixel
        for i in 0..side {
            buffer[i * stride] |= 1 << (7 - i);
        }
        buffer[2 * stride] |= 1 << (7 - 5);

        let before = buffer.clone();
        rotate_clockwise_90(&mut buffer, side);

        for y in 0..side {
            for x in 0..side {
                assert_eq!(
                    bit(&before, side, x, y),
                    bit(&buffer, side, side - 1 - y, x),
                    "pixel ({x},{y}) mismapped"
                );
            }
        }
    }

    #[test]
    fn padding_bits_stay_zero_for_partial_final_byte() {
        let side: usize = 6;
        let stride = side.div_ceil(8);
        let mut buffer = vec![0b1111_1100u8; stride * side]; // every valid pixel set
        rotate_clockwise_90(&mut buffer, side);
        for row in 0..side {
            assert_eq!(buffer[row * stride] & 0b0000_0011, 0, "row {row}");
        }
    }

    #[test]
    fn caller_scratch_is_never_smaller_than_copy() {
        let mut buffer = [0b1000_0000u8, 0, 0, 0];
        let mut scratch = [0xFFu8; 8]; // oversized and dirty: contents must not matter
        rotate_clockwise_90_in(&mut buffer, &mut scratch, 4);
        assert_eq!(buffer, [0b0001_0000, 0, 0, 0]);
    }

    #[test]
    fn checked_rotation_rejects_undersized_buffer() {
        let mut buffer = [0u8; 3];
        let err = try_rotate_clockwise_90(&mut buffer, 4).unwrap_err();
        assert_eq!(
            err,
            Error::BufferTooSmall {
                required: 4,
                actual: 3
            }
        );
    }

    #[test]
    #[should_panic(expected = "bitmap buffer holds")]
    fn undersized_buffer_panics() {
        let mut buffer = [0u8; 3];
        rotate_clockwise_90(&mut buffer, 4);
    }
}
