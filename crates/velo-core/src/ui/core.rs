//! Core UI traits and types for the velo UI system.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// A 2D touch point on the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchPoint {
    pub x: u16,
    pub y: u16,
}

impl TouchPoint {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    pub fn to_point(&self) -> Point {
        Point::new(self.x as i32, self.y as i32)
    }
}

/// Phase of a touch interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    /// Finger down.
    Press,
    /// Finger moved while held down.
    Drag,
    /// Finger up.
    Release,
}

/// A discrete touch event with the timestamp at which it was captured.
///
/// Timestamps are milliseconds from an arbitrary monotonic origin; only
/// differences between them are meaningful (swipe duration, animation
/// progress).
#[derive(Debug, Clone, Copy)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub point: TouchPoint,
    pub at_ms: u64,
}

impl TouchEvent {
    pub fn new(phase: TouchPhase, point: TouchPoint, at_ms: u64) -> Self {
        Self {
            phase,
            point,
            at_ms,
        }
    }

    pub fn press(x: u16, y: u16, at_ms: u64) -> Self {
        Self::new(TouchPhase::Press, TouchPoint::new(x, y), at_ms)
    }

    pub fn drag(x: u16, y: u16, at_ms: u64) -> Self {
        Self::new(TouchPhase::Drag, TouchPoint::new(x, y), at_ms)
    }

    pub fn release(x: u16, y: u16, at_ms: u64) -> Self {
        Self::new(TouchPhase::Release, TouchPoint::new(x, y), at_ms)
    }
}

/// Result from handling a touch event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchResult {
    /// Event was handled by this element
    Handled,
    /// Event was not handled, pass to next element
    NotHandled,
    /// Event triggered an action
    Action(Action),
}

/// Actions that UI elements can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Raise the gauge value by one step
    GaugeIncrement,
    /// Lower the gauge value by one step
    GaugeDecrement,
}

/// Screen identifier, used for titles and logging. Navigation itself is by
/// position in the screen list, not by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenId {
    Speed,
    Trip,
    About,
}

/// Trait for any UI element that can be drawn.
pub trait Drawable {
    /// Draw the element to the display.
    fn draw<D: DrawTarget<Color = embedded_graphics::pixelcolor::Rgb565>>(
        &self,
        display: &mut D,
    ) -> Result<(), D::Error>;

    /// Bounding rectangle of this element.
    fn bounds(&self) -> Rectangle;

    /// Whether the element needs redrawing.
    fn is_dirty(&self) -> bool;

    /// Clear the dirty flag after a successful draw.
    fn mark_clean(&mut self);

    /// Force the element to be redrawn on the next frame.
    fn mark_dirty(&mut self);
}

/// Trait for UI elements that respond to touch.
pub trait Touchable {
    /// Check if a point is within this element's bounds.
    fn contains_point(&self, point: TouchPoint) -> bool;

    /// Handle a touch event.
    fn handle_touch(&mut self, event: &TouchEvent) -> TouchResult;
}
