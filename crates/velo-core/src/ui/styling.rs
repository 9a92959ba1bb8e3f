//! Styling for velo UI elements: RGB565 colors, a palette, and per-element
//! style configuration.
//!
//! To convert from 8-bit RGB: R>>3, G>>2, B>>3.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::primitives::{PrimitiveStyle, PrimitiveStyleBuilder};

// ============================================================================
// Base colors
// ============================================================================

/// Primary background color - near black with a blue cast
pub const COLOR_BACKGROUND: Rgb565 = Rgb565::new(16 >> 3, 20 >> 2, 26 >> 3);

/// Raised surface color (buttons, cards)
pub const COLOR_SURFACE: Rgb565 = Rgb565::new(32 >> 3, 38 >> 2, 48 >> 3);

/// Border/stroke color - medium gray
pub const COLOR_STROKE: Rgb565 = Rgb565::new(58 >> 3, 66 >> 2, 78 >> 3);

/// Accent color for the gauge arc and primary buttons - cyan-teal
pub const COLOR_ACCENT: Rgb565 = Rgb565::new(64 >> 3, 196 >> 2, 188 >> 3);

/// Pure white - maximum brightness in RGB565
pub const WHITE: Rgb565 = Rgb565::new(31, 63, 31);

/// Light gray - for secondary text
pub const LIGHT_GRAY: Rgb565 = Rgb565::new(21, 42, 21);

// ============================================================================
// Color palette
// ============================================================================

/// A cohesive color palette shared by all screens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPalette {
    pub background: Rgb565,
    pub surface: Rgb565,
    pub stroke: Rgb565,
    pub accent: Rgb565,
    pub text_primary: Rgb565,
    pub text_secondary: Rgb565,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            background: COLOR_BACKGROUND,
            surface: COLOR_SURFACE,
            stroke: COLOR_STROKE,
            accent: COLOR_ACCENT,
            text_primary: WHITE,
            text_secondary: LIGHT_GRAY,
        }
    }
}

// ============================================================================
// Style
// ============================================================================

/// Visual style configuration for a UI element.
///
/// Use the builder methods to configure incrementally:
///
/// ```ignore
/// let style = Style::new()
///     .with_background(palette.surface)
///     .with_border(palette.stroke, 1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Style {
    /// Background fill color (if any)
    pub background_color: Option<Rgb565>,
    /// Foreground/text color (if any)
    pub foreground_color: Option<Rgb565>,
    /// Border color (if any)
    pub border_color: Option<Rgb565>,
    /// Border width in pixels (0 = no border)
    pub border_width: u32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            background_color: None,
            foreground_color: Some(WHITE),
            border_color: None,
            border_width: 0,
        }
    }
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_background(mut self, color: Rgb565) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn with_foreground(mut self, color: Rgb565) -> Self {
        self.foreground_color = Some(color);
        self
    }

    pub fn with_border(mut self, color: Rgb565, width: u32) -> Self {
        self.border_color = Some(color);
        self.border_width = width;
        self
    }

    /// Convert to an embedded-graphics primitive style (fill + stroke).
    pub fn to_primitive_style(&self) -> PrimitiveStyle<Rgb565> {
        let mut builder = PrimitiveStyleBuilder::new();

        if let Some(bg) = self.background_color {
            builder = builder.fill_color(bg);
        }
        if let Some(border) = self.border_color {
            builder = builder
                .stroke_color(border)
                .stroke_width(self.border_width);
        }

        builder.build()
    }
}

// ============================================================================
// Button variants
// ============================================================================

/// Preset button appearances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Accent-colored, for the main interaction on a screen
    Primary,
    /// Surface-colored, for everything else
    Secondary,
}

impl ButtonVariant {
    pub fn to_style(self, palette: &ColorPalette) -> Style {
        match self {
            ButtonVariant::Primary => Style::new()
                .with_background(palette.accent)
                .with_foreground(palette.background),
            ButtonVariant::Secondary => Style::new()
                .with_background(palette.surface)
                .with_foreground(palette.text_primary)
                .with_border(palette.stroke, 1),
        }
    }
}
