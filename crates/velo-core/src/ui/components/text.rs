//! Text component for displaying styled text.

use crate::ui::core::Drawable;
use crate::ui::styling::Style;
use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle, ascii::FONT_6X10};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Alignment, Text as EgText};

/// Text size presets mapped to embedded-graphics fonts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextSize {
    Small,
    Medium,
    Large,
}

impl TextSize {
    pub fn font(&self) -> &'static MonoFont<'static> {
        match self {
            TextSize::Small => &embedded_graphics::mono_font::ascii::FONT_5X8,
            TextSize::Medium => &FONT_6X10,
            TextSize::Large => &embedded_graphics::mono_font::ascii::FONT_10X20,
        }
    }
}

/// A single line of styled text with dirty tracking.
pub struct TextComponent {
    bounds: Rectangle,
    text: heapless::String<64>,
    size: TextSize,
    alignment: Alignment,
    style: Style,
    dirty: bool,
}

impl TextComponent {
    pub fn new(bounds: Rectangle, text: &str, size: TextSize) -> Self {
        let mut text_string = heapless::String::new();
        text_string.push_str(text).ok();

        Self {
            bounds,
            text: text_string,
            size,
            alignment: Alignment::Left,
            style: Style::default(),
            dirty: true,
        }
    }

    /// Set the text alignment (Left, Center, or Right).
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Replace the displayed text. Marks the component dirty when the
    /// content actually changes.
    pub fn set_text(&mut self, text: &str) {
        if self.text.as_str() != text {
            self.text.clear();
            self.text.push_str(text).ok();
            self.dirty = true;
        }
    }

    fn anchor(&self) -> Point {
        let center = self.bounds.center();
        match self.alignment {
            Alignment::Left => Point::new(self.bounds.top_left.x, center.y),
            Alignment::Center => center,
            Alignment::Right => Point::new(
                self.bounds.top_left.x + self.bounds.size.width as i32,
                center.y,
            ),
        }
    }
}

impl Drawable for TextComponent {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        // Fill the background first so stale glyphs are cleared
        if self.style.background_color.is_some() {
            self.bounds
                .into_styled(self.style.to_primitive_style())
                .draw(display)?;
        }

        let color = self.style.foreground_color.unwrap_or(Rgb565::WHITE);
        let text_style = MonoTextStyle::new(self.size.font(), color);

        EgText::with_alignment(&self.text, self.anchor(), text_style, self.alignment)
            .draw(display)?;

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
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
