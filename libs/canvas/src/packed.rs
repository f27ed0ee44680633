//! A square packed 1-bpp canvas that widgets draw into upright and that is
//! rotated in place before being blitted to the physical display.

use crate::rotate;
use core::convert::Infallible;
use embedded_graphics::{
    geometry::Dimensions,
    image::ImageRaw,
    pixelcolor::BinaryColor,
    prelude::{DrawTarget, OriginDimensions, Pixel, PointsIter, Size},
    primitives::Rectangle,
};

/// Canvas dimension, fixed at build time to match the screen.
pub const SIDE: u32 = 68;
/// Bytes per row: tightly packed, MSB-first, no alignment padding.
pub const STRIDE: usize = (SIDE as usize).div_ceil(8);
pub const BUFFER_SIZE: usize = STRIDE * SIDE as usize;

// Valid-pixel mask for the final byte of each row (SIDE is not a multiple
// of 8, so the low bits of that byte are padding and must stay zero).
const TAIL_BITS: u32 = SIDE % 8;
const TAIL_MASK: u8 = if TAIL_BITS == 0 {
    0xFF
} else {
    !(0xFF >> TAIL_BITS)
};

pub struct PackedCanvas {
    buffer: Box<[u8]>,
    scratch: Box<[u8]>,
}

impl PackedCanvas {
    /// Create a canvas cleared to background, with the rotation scratch
    /// allocated once up front.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buffer: vec![0; BUFFER_SIZE].into_boxed_slice(),
            scratch: vec![0; BUFFER_SIZE].into_boxed_slice(),
        }
    }

    /// Rotate the canvas contents 90° clockwise in place.
    ///
    /// Rotation takes `&mut self`, so the owned scratch can never be shared
    /// between concurrent rotations.
    pub fn rotate_clockwise_90(&mut self) {
        rotate::rotate_clockwise_90_in(&mut self.buffer, &mut self.scratch, SIDE as usize);
    }

    /// Pixel at `(x, y)`, or `None` outside the canvas.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<bool> {
        if x >= SIDE || y >= SIDE {
            return None;
        }
        let index = y as usize * STRIDE + x as usize / 8;
        Some((self.buffer[index] >> (7 - (x % 8))) & 1 != 0)
    }

    /// Number of foreground pixels, used by callers that diff frames.
    #[must_use]
    pub fn foreground_count(&self) -> u32 {
        self.buffer.iter().map(|byte| byte.count_ones()).sum()
    }

    /// Raw packed bytes, row-major.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.buffer
    }

    /// View of the canvas as an embedded-graphics raw image, for blitting to
    /// an outer display after rotation.
    #[must_use]
    pub fn as_image_raw(&self) -> ImageRaw<'_, BinaryColor> {
        ImageRaw::new(&self.buffer, SIDE)
    }
}

impl Default for PackedCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawTarget for PackedCanvas {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            let (x, y) = coord.into();

            if x < 0 || x >= SIDE.cast_signed() || y < 0 || y >= SIDE.cast_signed() {
                continue;
            }

            let index = y.cast_unsigned() as usize * STRIDE + x.cast_unsigned() as usize / 8;
            let bit = 7 - (x % 8);

            if color.is_on() {
                self.buffer[index] |= 1 << bit;
            } else {
                self.buffer[index] &= !(1 << bit);
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let clipped_area = area.intersection(&self.bounding_box());

        if clipped_area.is_zero_sized() {
            return Ok(());
        }

        self.draw_iter(clipped_area.points().map(|p| Pixel(p, color)))
    }

    fn clear(&mut self, color: BinaryColor) -> Result<(), Self::Error> {
        if color.is_on() {
            // Whole bytes per row, then the masked tail byte so padding
            // bits stay zero.
            for row in self.buffer.chunks_exact_mut(STRIDE) {
                row.fill(0xFF);
                row[STRIDE - 1] = TAIL_MASK;
            }
        } else {
            self.buffer.fill(0);
        }
        Ok(())
    }
}

impl OriginDimensions for PackedCanvas {
    fn size(&self) -> Size {
        Size::new(SIDE, SIDE)
    }
}
