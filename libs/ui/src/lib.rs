//! Status widgets for the keyview screen
//!
//! Widgets draw upright into a [`keyview_canvas::PackedCanvas`]; the canvas
//! is then rotated 90° clockwise to match the physical mounting of the
//! display before being blitted out.

pub mod assets;
pub mod state;
pub mod status;
pub mod widgets;

// Re-export commonly used types
pub use state::StatusState;
pub use status::{StatusWidget, UiEvent};
pub use widgets::Battery;
