use crate::assets;
use crate::state::StatusState;
use embedded_graphics::{
    Drawable,
    image::Image,
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};
use embedded_layout::View;

/// Rectangle from inclusive pixel corners.
const fn area(x1: i32, y1: i32, x2: i32, y2: i32) -> Rectangle {
    Rectangle::new(
        Point::new(x1, y1),
        Size::new((x2 - x1 + 1) as u32, (y2 - y1 + 1) as u32),
    )
}

/// Battery gauge: body outline, charge fill, terminal nub, and a bolt glyph
/// while charging. Drawn upright; the canvas rotation happens afterwards.
#[derive(Clone)]
pub struct Battery {
    pub state: StatusState,
    pub bounds: Rectangle,
}

impl Battery {
    #[must_use]
    pub fn new(state: StatusState) -> Self {
        Self {
            state,
            // Bolt tip pokes one row above the body, hence y = -1
            bounds: Rectangle::new(Point::new(0, -1), Size::new(33, 15)),
        }
    }
}

impl View for Battery {
    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn translate_impl(&mut self, by: Point) {
        self.bounds.top_left += by;
    }
}

impl Drawable for Battery {
    type Color = BinaryColor;
    type Output = ();

    fn draw<D>(&self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        let origin = self.bounds.top_left - Point::new(0, -1);
        let foreground = PrimitiveStyle::with_fill(BinaryColor::On);
        let background = PrimitiveStyle::with_fill(BinaryColor::Off);

        let battery = i32::from(self.state.battery.min(100));

        let part = |rect: Rectangle, style| {
            Rectangle::new(rect.top_left + origin, rect.size).into_styled(style)
        };

        // Body outline and interior
        part(area(0, 2, 29, 13), foreground).draw(display)?;
        part(area(1, 3, 27, 12), background).draw(display)?;

        // Charge level, one column per ~4 percent
        part(area(2, 4, 2 + (battery + 2) / 4, 11), foreground).draw(display)?;

        // Terminal nub
        part(area(30, 5, 32, 10), foreground).draw(display)?;
        part(area(31, 6, 31, 9), background).draw(display)?;

        if self.state.charging {
            let image = Image::new(&assets::BOLT, origin + Point::new(9, -1));
            image.draw(display)?;
        }

        Ok(())
    }
}
