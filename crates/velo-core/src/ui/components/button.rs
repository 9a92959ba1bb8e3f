//! Button component with press feedback.

use crate::ui::core::{Action, Drawable, TouchEvent, TouchPhase, TouchPoint, TouchResult, Touchable};
use crate::ui::styling::{ButtonVariant, ColorPalette, Style};
use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::ascii::FONT_10X20;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Rectangle, RoundedRectangle};
use embedded_graphics::text::{Alignment as TextAlignment, Text};

/// Button state
#[derive(Debug, Clone, Copy, PartialEq)]
enum ButtonState {
    Normal,
    Pressed,
}

/// Button with a label and an [`Action`] fired when pressed.
pub struct Button {
    bounds: Rectangle,
    label: heapless::String<16>,
    action: Action,
    state: ButtonState,
    variant: ButtonVariant,
    palette: ColorPalette,
    border_radius: u32,
    dirty: bool,
}

impl Button {
    pub fn new(bounds: Rectangle, label: &str, action: Action) -> Self {
        let mut label_string = heapless::String::new();
        label_string.push_str(label).ok();

        Self {
            bounds,
            label: label_string,
            action,
            state: ButtonState::Normal,
            variant: ButtonVariant::Secondary,
            palette: ColorPalette::default(),
            border_radius: 6,
            dirty: true,
        }
    }

    pub fn with_variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self.dirty = true;
        self
    }

    pub fn with_palette(mut self, palette: ColorPalette) -> Self {
        self.palette = palette;
        self.dirty = true;
        self
    }

    pub fn action(&self) -> Action {
        self.action
    }

    /// Whether the press visual is currently engaged.
    #[cfg(test)]
    pub(crate) fn is_pressed(&self) -> bool {
        self.state == ButtonState::Pressed
    }

    fn style(&self) -> Style {
        let base = self.variant.to_style(&self.palette);

        match self.state {
            ButtonState::Normal => base,
            ButtonState::Pressed => {
                // Darken the fill while the finger is down
                let bg = base.background_color.unwrap_or(self.palette.surface);
                let darkened = Rgb565::new(
                    bg.r().saturating_sub(4),
                    bg.g().saturating_sub(8),
                    bg.b().saturating_sub(4),
                );
                base.with_background(darkened)
            }
        }
    }

    fn set_state(&mut self, state: ButtonState) {
        if self.state != state {
            self.state = state;
            self.dirty = true;
        }
    }
}

impl Drawable for Button {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        let style = self.style();

        let corner_radius = Size::new(self.border_radius, self.border_radius);
        RoundedRectangle::with_equal_corners(self.bounds, corner_radius)
            .into_styled(style.to_primitive_style())
            .draw(display)?;

        let text_color = style.foreground_color.unwrap_or(Rgb565::WHITE);
        let text_style = MonoTextStyle::new(&FONT_10X20, text_color);
        let center = self.bounds.center();

        Text::with_alignment(&self.label, center, text_style, TextAlignment::Center)
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

impl Touchable for Button {
    fn contains_point(&self, point: TouchPoint) -> bool {
        self.bounds.contains(point.to_point())
    }

    fn handle_touch(&mut self, event: &TouchEvent) -> TouchResult {
        match event.phase {
            TouchPhase::Press if self.contains_point(event.point) => {
                self.set_state(ButtonState::Pressed);
                // Action fires on press, release only clears the visual state
                TouchResult::Action(self.action)
            }
            TouchPhase::Drag => {
                let new_state = if self.contains_point(event.point) && self.state == ButtonState::Pressed {
                    ButtonState::Pressed
                } else {
                    ButtonState::Normal
                };
                self.set_state(new_state);
                TouchResult::Handled
            }
            TouchPhase::Release => {
                self.set_state(ButtonState::Normal);
                TouchResult::NotHandled
            }
            _ => TouchResult::NotHandled,
        }
    }
}
