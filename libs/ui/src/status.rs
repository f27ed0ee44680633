//! Status widget lifecycle: draw upright, rotate, signal a redraw.

use crate::state::StatusState;
use crate::widgets::Battery;
use crossbeam_channel::Sender;
use embedded_graphics::{
    Drawable,
    image::Image,
    pixelcolor::BinaryColor,
    prelude::{DrawTarget, Point},
};
use keyview_canvas::PackedCanvas;

/// Events the widget emits toward the owning render loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiEvent {
    /// The canvas content changed and should be pushed to the display.
    DirtyCanvas,
}

/// Owns the packed canvas and keeps it in display orientation.
///
/// Mutating the pixels and invalidating the outer surface are separate
/// steps: [`refresh`](Self::refresh) only touches the owned buffer and sends
/// a dirty event; pushing the frame out happens in
/// [`blit_to`](Self::blit_to) when the render loop decides to.
pub struct StatusWidget {
    canvas: PackedCanvas,
    events: Sender<UiEvent>,
}

impl StatusWidget {
    #[must_use]
    pub fn new(events: Sender<UiEvent>) -> Self {
        Self {
            canvas: PackedCanvas::new(),
            events,
        }
    }

    /// Redraw the widget from `state`.
    ///
    /// Widgets draw upright, then the whole canvas is rotated 90° clockwise
    /// to match the sideways screen mount.
    pub fn refresh(&mut self, state: &StatusState) {
        let Ok(()) = self.canvas.clear(BinaryColor::Off);
        let Ok(()) = Battery::new(*state).draw(&mut self.canvas);

        self.canvas.rotate_clockwise_90();

        log::trace!(
            "status canvas refreshed: battery {}%, charging {}",
            state.battery,
            state.charging
        );
        let _ = self.events.send(UiEvent::DirtyCanvas);
    }

    /// The rotated frame, ready to blit.
    #[must_use]
    pub fn canvas(&self) -> &PackedCanvas {
        &self.canvas
    }

    /// Draw the rotated frame into an outer display at `offset`.
    pub fn blit_to<D>(&self, display: &mut D, offset: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let raw = self.canvas.as_image_raw();
        Image::new(&raw, offset).draw(display)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;
    use keyview_canvas::SIDE;

    #[test]
    fn refresh_signals_a_dirty_canvas() {
        let (tx, rx) = unbounded();
        let mut widget = StatusWidget::new(tx);

        widget.refresh(&StatusState::default());
        assert_eq!(rx.try_recv(), Ok(UiEvent::DirtyCanvas));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn refresh_leaves_the_frame_rotated() {
        let (tx, rx) = unbounded();
        let mut widget = StatusWidget::new(tx);

        widget.refresh(&StatusState {
            battery: 100,
            charging: false,
        });
        let _ = rx.try_recv();

        // The battery outline's top edge (upright y = 2, x = 0..=29) must
        // land on the right edge of the rotated frame, column SIDE - 1 - 2.
        for y in 0..=29 {
            assert_eq!(widget.canvas().pixel(SIDE - 3, y), Some(true), "y = {y}");
        }
        // Nothing upright remains in the top-left body area
        assert_eq!(widget.canvas().pixel(0, 2), Some(false));
    }

    #[test]
    fn refresh_overwrites_the_previous_frame() {
        let (tx, _rx) = unbounded();
        let mut widget = StatusWidget::new(tx);

        widget.refresh(&StatusState {
            battery: 100,
            charging: true,
        });
        let full = widget.canvas().foreground_count();

        widget.refresh(&StatusState {
            battery: 0,
            charging: false,
        });
        let empty = widget.canvas().foreground_count();

        assert!(empty < full);
    }

    #[test]
    fn blit_lands_in_the_target_at_the_offset() {
        let (tx, _rx) = unbounded();
        let mut widget = StatusWidget::new(tx);
        widget.refresh(&StatusState {
            battery: 100,
            charging: false,
        });

        let mut target = PackedCanvas::new();
        widget.blit_to(&mut target, Point::zero()).unwrap();

        assert_eq!(
            target.foreground_count(),
            widget.canvas().foreground_count()
        );
    }
}
