//! Trip screen: static trip statistics layout.

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Alignment;
use heapless::Vec;

use crate::screens::screen::Screen;
use crate::ui::{
    ColorPalette, Drawable, ScreenId, Style, TextComponent, TextSize, TouchEvent,
};

const TITLE_HEIGHT: u32 = 28;
const ROW_HEIGHT: u32 = 40;
const ROW_INSET: i32 = 24;

pub struct TripScreen {
    bounds: Rectangle,
    title: TextComponent,
    rows: Vec<TextComponent, 6>,
    palette: ColorPalette,
    dirty: bool,
}

impl TripScreen {
    pub fn new(bounds: Rectangle) -> Self {
        let palette = ColorPalette::default();

        let title = TextComponent::new(
            Rectangle::new(bounds.top_left, Size::new(bounds.size.width, TITLE_HEIGHT)),
            "TRIP",
            TextSize::Medium,
        )
        .with_alignment(Alignment::Center);

        let mut rows = Vec::new();
        let row_width = bounds.size.width - 2 * ROW_INSET as u32;
        let labels = [
            ("Distance", "0.0 km"),
            ("Moving time", "00:00"),
            ("Avg speed", "0 km/h"),
        ];

        for (i, (label, value)) in labels.iter().enumerate() {
            let y = TITLE_HEIGHT as i32 + 16 + i as i32 * ROW_HEIGHT as i32;
            let row_bounds =
                Rectangle::new(bounds.top_left + Point::new(ROW_INSET, y), Size::new(row_width, ROW_HEIGHT));

            let label_text = TextComponent::new(row_bounds, label, TextSize::Medium)
                .with_style(Style::new().with_foreground(palette.text_secondary));
            rows.push(label_text).ok();

            let value_text = TextComponent::new(row_bounds, value, TextSize::Large)
                .with_alignment(Alignment::Right);
            rows.push(value_text).ok();
        }

        Self {
            bounds,
            title,
            rows,
            palette,
            dirty: true,
        }
    }
}

impl Screen for TripScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Trip
    }

    fn title(&self) -> &str {
        "Trip"
    }

    fn on_activate(&mut self) {
        self.dirty = true;
    }

    fn handle_touch(&mut self, _event: &TouchEvent) {}

    fn update(&mut self, _now_ms: u64) {}

    fn draw_screen<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        self.bounds
            .into_styled(PrimitiveStyle::with_fill(self.palette.background))
            .draw(display)?;

        self.title.draw(display)?;
        for row in &self.rows {
            row.draw(display)?;
        }

        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
        self.title.mark_clean();
        for row in &mut self.rows {
            row.mark_clean();
        }
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
