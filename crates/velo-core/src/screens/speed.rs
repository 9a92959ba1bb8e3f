//! Speed screen: the arc gauge with its -/+ adjustment buttons.

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Alignment;

use crate::config::{GAUGE_MAX, GAUGE_MIN, GAUGE_STEP};
use crate::gauge::GaugeModel;
use crate::screens::screen::Screen;
use crate::ui::{
    Action, ArcMeter, Button, ButtonVariant, ColorPalette, Drawable, ScreenId, TextComponent,
    TextSize, TouchEvent, TouchResult, Touchable,
};

/// Height of the title strip at the top of the screen.
const TITLE_HEIGHT: u32 = 28;

/// Size of each adjustment button.
const BUTTON_SIZE: Size = Size::new(100, 40);

/// Gap between the screen edge and the buttons.
const BUTTON_MARGIN: i32 = 40;

pub struct SpeedScreen {
    bounds: Rectangle,
    gauge: GaugeModel,
    meter: ArcMeter,
    title: TextComponent,
    minus_button: Button,
    plus_button: Button,
    palette: ColorPalette,
    dirty: bool,
}

impl SpeedScreen {
    pub fn new(bounds: Rectangle) -> Self {
        let palette = ColorPalette::default();
        let gauge = GaugeModel::new(GAUGE_MIN, GAUGE_MAX, 0);

        let title = TextComponent::new(
            Rectangle::new(bounds.top_left, Size::new(bounds.size.width, TITLE_HEIGHT)),
            "SPEED",
            TextSize::Medium,
        )
        .with_alignment(Alignment::Center);

        let width = bounds.size.width as i32;
        let height = bounds.size.height as i32;
        let button_y = height - BUTTON_SIZE.height as i32 - 12;

        let minus_button = Button::new(
            Rectangle::new(
                bounds.top_left + Point::new(BUTTON_MARGIN, button_y),
                BUTTON_SIZE,
            ),
            "-",
            Action::GaugeDecrement,
        )
        .with_palette(palette);

        let plus_button = Button::new(
            Rectangle::new(
                bounds.top_left
                    + Point::new(width - BUTTON_MARGIN - BUTTON_SIZE.width as i32, button_y),
                BUTTON_SIZE,
            ),
            "+",
            Action::GaugeIncrement,
        )
        .with_palette(palette)
        .with_variant(ButtonVariant::Primary);

        // Gauge ring between the title strip and the button row
        let meter_height = (button_y - TITLE_HEIGHT as i32 - 8).max(0) as u32;
        let meter = ArcMeter::new(
            Rectangle::new(
                bounds.top_left + Point::new(0, TITLE_HEIGHT as i32),
                Size::new(bounds.size.width, meter_height),
            ),
            GAUGE_MIN,
            GAUGE_MAX,
            gauge.value(),
            "km/h",
        )
        .with_palette(palette);

        Self {
            bounds,
            gauge,
            meter,
            title,
            minus_button,
            plus_button,
            palette,
            dirty: true,
        }
    }

    pub fn gauge(&self) -> &GaugeModel {
        &self.gauge
    }

    /// Hit area of the increment button, for input routing tests.
    #[cfg(test)]
    pub(crate) fn plus_button_bounds(&self) -> Rectangle {
        self.plus_button.bounds()
    }

    #[cfg(test)]
    pub(crate) fn plus_button_pressed(&self) -> bool {
        self.plus_button.is_pressed()
    }

    /// Apply a gauge action and push the clamped value into the meter.
    fn apply(&mut self, action: Action) {
        let value = match action {
            Action::GaugeIncrement => self.gauge.increment(GAUGE_STEP),
            Action::GaugeDecrement => self.gauge.decrement(GAUGE_STEP),
        };
        self.meter.set_value(value);
    }
}

impl Screen for SpeedScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Speed
    }

    fn title(&self) -> &str {
        "Speed"
    }

    fn on_activate(&mut self) {
        self.dirty = true;
    }

    fn handle_touch(&mut self, event: &TouchEvent) {
        // Collect the fired action first; applying it needs the whole
        // screen mutable again
        let mut fired = None;
        for button in [&mut self.minus_button, &mut self.plus_button] {
            if let TouchResult::Action(action) = button.handle_touch(event) {
                fired = Some(action);
                break;
            }
        }
        if let Some(action) = fired {
            self.apply(action);
        }
    }

    fn update(&mut self, _now_ms: u64) {}

    fn draw_screen<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        self.bounds
            .into_styled(PrimitiveStyle::with_fill(self.palette.background))
            .draw(display)?;

        self.title.draw(display)?;
        self.meter.draw(display)?;
        self.minus_button.draw(display)?;
        self.plus_button.draw(display)?;

        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn is_dirty(&self) -> bool {
        self.dirty
            || self.meter.is_dirty()
            || self.minus_button.is_dirty()
            || self.plus_button.is_dirty()
            || self.title.is_dirty()
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
        self.meter.mark_clean();
        self.minus_button.mark_clean();
        self.plus_button.mark_clean();
        self.title.mark_clean();
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::core::TouchEvent;

    fn screen() -> SpeedScreen {
        SpeedScreen::new(Rectangle::new(Point::zero(), Size::new(320, 240)))
    }

    fn tap(screen: &mut SpeedScreen, at: Point) {
        let (x, y) = (at.x as u16, at.y as u16);
        screen.handle_touch(&TouchEvent::press(x, y, 0));
        screen.handle_touch(&TouchEvent::release(x, y, 50));
    }

    #[test]
    fn test_plus_button_raises_gauge_by_step() {
        let mut screen = screen();
        let plus = screen.plus_button.bounds().center();
        tap(&mut screen, plus);
        assert_eq!(screen.gauge().value(), GAUGE_STEP);
        assert_eq!(screen.meter.value(), GAUGE_STEP);
    }

    #[test]
    fn test_minus_button_lowers_gauge_by_step() {
        let mut screen = screen();
        let minus = screen.minus_button.bounds().center();
        tap(&mut screen, minus);
        assert_eq!(screen.gauge().value(), -GAUGE_STEP);
    }

    #[test]
    fn test_gauge_clamps_at_max_through_buttons() {
        let mut screen = screen();
        let plus = screen.plus_button.bounds().center();
        // Far more taps than steps in the range
        for _ in 0..100 {
            tap(&mut screen, plus);
        }
        assert_eq!(screen.gauge().value(), GAUGE_MAX);
        assert_eq!(screen.meter.value(), GAUGE_MAX);
    }

    #[test]
    fn test_single_press_applies_exactly_one_action() {
        let mut screen = screen();
        let plus = screen.plus_button.bounds().center();
        let (x, y) = (plus.x as u16, plus.y as u16);

        // The action fires on the press alone; the release only clears
        // the visual state and must not apply a second step
        screen.handle_touch(&TouchEvent::press(x, y, 0));
        assert_eq!(screen.gauge().value(), GAUGE_STEP);
        screen.handle_touch(&TouchEvent::release(x, y, 50));
        assert_eq!(screen.gauge().value(), GAUGE_STEP);
    }

    #[test]
    fn test_touch_outside_buttons_is_ignored() {
        let mut screen = screen();
        tap(&mut screen, Point::new(160, 120));
        assert_eq!(screen.gauge().value(), 0);
    }

    #[test]
    fn test_adjustment_marks_screen_dirty() {
        let mut screen = screen();
        screen.mark_clean();
        assert!(!screen.is_dirty());
        let plus = screen.plus_button.bounds().center();
        tap(&mut screen, plus);
        assert!(screen.is_dirty());
    }
}
