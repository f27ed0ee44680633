pub mod error;
pub mod packed;
pub mod rotate;

pub use error::{CanvasResult, Error};
pub use packed::{BUFFER_SIZE, PackedCanvas, SIDE, STRIDE};
pub use rotate::{rotate_clockwise_90, rotate_clockwise_90_in, try_rotate_clockwise_90};
