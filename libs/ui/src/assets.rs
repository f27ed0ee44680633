//! Built-in 1-bpp glyphs, packed MSB-first with byte-padded rows.

use embedded_graphics::image::ImageRaw;
use embedded_graphics::pixelcolor::BinaryColor;

pub const BOLT_WIDTH: u32 = 10;
pub const BOLT_HEIGHT: u32 = 14;

// 10x14 charge bolt, two bytes per row.
#[rustfmt::skip]
const BOLT_DATA: [u8; 28] = [
    0b0001_1100, 0b0000_0000,
    0b0011_1000, 0b0000_0000,
    0b0011_1000, 0b0000_0000,
    0b0111_0000, 0b0000_0000,
    0b0111_0000, 0b0000_0000,
    0b1111_1110, 0b0000_0000,
    0b0111_1111, 0b0000_0000,
    0b0000_1110, 0b0000_0000,
    0b0001_1100, 0b0000_0000,
    0b0001_1000, 0b0000_0000,
    0b0011_0000, 0b0000_0000,
    0b0011_0000, 0b0000_0000,
    0b0110_0000, 0b0000_0000,
    0b0100_0000, 0b0000_0000,
];

/// Charge indicator drawn over the battery gauge while on external power.
pub const BOLT: ImageRaw<'static, BinaryColor> = ImageRaw::new(&BOLT_DATA, BOLT_WIDTH);
