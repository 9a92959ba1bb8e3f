//! Arc meter: a bounded integer value rendered as a partial ring with a
//! large centered numeric readout.

use core::fmt::Write;

use crate::config::GAUGE_SWEEP_DEGREES;
use crate::ui::core::Drawable;
use crate::ui::styling::ColorPalette;
use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::geometry::Angle;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_10X20};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Arc, PrimitiveStyleBuilder, Rectangle};
use embedded_graphics::text::{Alignment, Text};

/// Stroke width of the ring in pixels.
const RING_STROKE_PX: u32 = 12;

/// Gap between the component bounds and the ring.
const RING_MARGIN_PX: u32 = 8;

/// Start of the sweep in degrees. 225 places the gauge gap at the bottom,
/// with the sweep running clockwise through the top.
const SWEEP_START_DEGREES: f32 = 225.0;

/// Gauge visualization for a clamped integer value.
///
/// The fill fraction is `(value - min) / (max - min)` of the configured
/// sweep; the value itself is printed in the ring center with its unit
/// below it.
pub struct ArcMeter {
    bounds: Rectangle,
    min: i32,
    max: i32,
    value: i32,
    unit: &'static str,
    label: heapless::String<8>,
    palette: ColorPalette,
    dirty: bool,
}

impl ArcMeter {
    pub fn new(bounds: Rectangle, min: i32, max: i32, value: i32, unit: &'static str) -> Self {
        let mut meter = Self {
            bounds,
            min,
            max,
            value,
            unit,
            label: heapless::String::new(),
            palette: ColorPalette::default(),
            dirty: true,
        };
        meter.format_label();
        meter
    }

    pub fn with_palette(mut self, palette: ColorPalette) -> Self {
        self.palette = palette;
        self.dirty = true;
        self
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    /// Update the displayed value. The caller is responsible for clamping;
    /// the meter renders whatever it is given within its range.
    pub fn set_value(&mut self, value: i32) {
        if self.value != value {
            self.value = value;
            self.format_label();
            self.dirty = true;
        }
    }

    fn format_label(&mut self) {
        self.label.clear();
        write!(self.label, "{}", self.value).ok();
    }

    /// Fraction of the sweep covered by the current value, in `0.0..=1.0`.
    fn fill_fraction(&self) -> f32 {
        let span = (self.max - self.min) as f32;
        let offset = (self.value.clamp(self.min, self.max) - self.min) as f32;
        offset / span
    }

    fn ring_diameter(&self) -> u32 {
        self.bounds
            .size
            .width
            .min(self.bounds.size.height)
            .saturating_sub(2 * RING_MARGIN_PX)
    }
}

impl Drawable for ArcMeter {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        let center = self.bounds.center();
        let diameter = self.ring_diameter();

        let track_style = PrimitiveStyleBuilder::new()
            .stroke_color(self.palette.stroke)
            .stroke_width(RING_STROKE_PX)
            .build();
        let fill_style = PrimitiveStyleBuilder::new()
            .stroke_color(self.palette.accent)
            .stroke_width(RING_STROKE_PX)
            .build();

        let start = Angle::from_degrees(SWEEP_START_DEGREES);

        // Full track, then the value arc over it. Negative sweep runs
        // clockwise from the lower-left end of the gauge.
        Arc::with_center(center, diameter, start, Angle::from_degrees(-GAUGE_SWEEP_DEGREES))
            .into_styled(track_style)
            .draw(display)?;

        let fill_sweep = -GAUGE_SWEEP_DEGREES * self.fill_fraction();
        Arc::with_center(center, diameter, start, Angle::from_degrees(fill_sweep))
            .into_styled(fill_style)
            .draw(display)?;

        // Numeric readout and unit in the ring center
        let value_style = MonoTextStyle::new(&FONT_10X20, self.palette.text_primary);
        Text::with_alignment(&self.label, center, value_style, Alignment::Center)
            .draw(display)?;

        let unit_style = MonoTextStyle::new(&FONT_6X10, self.palette.text_secondary);
        let unit_anchor = center + Point::new(0, 18);
        Text::with_alignment(self.unit, unit_anchor, unit_style, Alignment::Center)
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
