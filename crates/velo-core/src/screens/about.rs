//! About screen: device identity and a navigation hint.

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Alignment;

use crate::screens::screen::Screen;
use crate::ui::{
    ColorPalette, Drawable, ScreenId, Style, TextComponent, TextSize, TouchEvent,
};

pub struct AboutScreen {
    bounds: Rectangle,
    name: TextComponent,
    version: TextComponent,
    hint: TextComponent,
    palette: ColorPalette,
    dirty: bool,
}

impl AboutScreen {
    pub fn new(bounds: Rectangle) -> Self {
        let palette = ColorPalette::default();
        let width = bounds.size.width;

        let name = TextComponent::new(
            Rectangle::new(bounds.top_left + Point::new(0, 80), Size::new(width, 24)),
            "velo-rs",
            TextSize::Large,
        )
        .with_alignment(Alignment::Center);

        let version = TextComponent::new(
            Rectangle::new(bounds.top_left + Point::new(0, 112), Size::new(width, 16)),
            concat!("v", env!("CARGO_PKG_VERSION")),
            TextSize::Medium,
        )
        .with_alignment(Alignment::Center)
        .with_style(Style::new().with_foreground(palette.text_secondary));

        let hint = TextComponent::new(
            Rectangle::new(bounds.top_left + Point::new(0, 190), Size::new(width, 16)),
            "swipe left or right to change screens",
            TextSize::Small,
        )
        .with_alignment(Alignment::Center)
        .with_style(Style::new().with_foreground(palette.text_secondary));

        Self {
            bounds,
            name,
            version,
            hint,
            palette,
            dirty: true,
        }
    }
}

impl Screen for AboutScreen {
    fn id(&self) -> ScreenId {
        ScreenId::About
    }

    fn title(&self) -> &str {
        "About"
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

        self.name.draw(display)?;
        self.version.draw(display)?;
        self.hint.draw(display)?;

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
        self.name.mark_clean();
        self.version.mark_clean();
        self.hint.mark_clean();
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
