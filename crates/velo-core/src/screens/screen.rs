//! Screen abstraction and type-erased wrapper for the navigable screen stack.
//!
//! [`Screen`] defines the lifecycle, input, and rendering contract for one
//! full-size page. [`ScreenWrapper`] is an enum-based wrapper so the
//! [`ScreenManager`](super::manager::ScreenManager) can store heterogeneous
//! screen types in a `heapless::Vec` without trait objects.

use crate::ui::core::{ScreenId, TouchEvent};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

extern crate alloc;
use alloc::boxed::Box;

use super::about::AboutScreen;
use super::speed::SpeedScreen;
use super::trip::TripScreen;

/// Trait that all navigable screens implement.
///
/// The manager calls these in a fixed order each frame: `handle_touch` for
/// incoming events, `update` once per frame, `draw_screen` when dirty,
/// `on_activate` when the screen becomes the navigation target.
pub trait Screen {
    /// Identifier used in titles and debug logs.
    fn id(&self) -> ScreenId;

    /// Human-readable title.
    fn title(&self) -> &str;

    /// Called when this screen becomes the active screen.
    fn on_activate(&mut self) {}

    /// Process a touch event targeting this screen.
    fn handle_touch(&mut self, event: &TouchEvent);

    /// Advance per-frame state.
    fn update(&mut self, now_ms: u64);

    /// Render the entire screen.
    fn draw_screen<D: DrawTarget<Color = embedded_graphics::pixelcolor::Rgb565>>(
        &self,
        display: &mut D,
    ) -> Result<(), D::Error>;

    /// Bounding rectangle (the full display).
    fn bounds(&self) -> Rectangle;

    /// Whether the screen needs redrawing.
    fn is_dirty(&self) -> bool;

    /// Clear the dirty flag after a successful draw.
    fn mark_clean(&mut self);

    /// Force a redraw on the next frame.
    fn mark_dirty(&mut self);
}

/// Concrete wrapper over every screen type, delegating each [`Screen`]
/// method to the inner value.
pub enum ScreenWrapper {
    Speed(Box<SpeedScreen>),
    Trip(Box<TripScreen>),
    About(Box<AboutScreen>),
}

impl Screen for ScreenWrapper {
    fn id(&self) -> ScreenId {
        match self {
            ScreenWrapper::Speed(s) => s.id(),
            ScreenWrapper::Trip(s) => s.id(),
            ScreenWrapper::About(s) => s.id(),
        }
    }

    fn title(&self) -> &str {
        match self {
            ScreenWrapper::Speed(s) => s.title(),
            ScreenWrapper::Trip(s) => s.title(),
            ScreenWrapper::About(s) => s.title(),
        }
    }

    fn on_activate(&mut self) {
        match self {
            ScreenWrapper::Speed(s) => s.on_activate(),
            ScreenWrapper::Trip(s) => s.on_activate(),
            ScreenWrapper::About(s) => s.on_activate(),
        }
    }

    fn handle_touch(&mut self, event: &TouchEvent) {
        match self {
            ScreenWrapper::Speed(s) => s.handle_touch(event),
            ScreenWrapper::Trip(s) => s.handle_touch(event),
            ScreenWrapper::About(s) => s.handle_touch(event),
        }
    }

    fn update(&mut self, now_ms: u64) {
        match self {
            ScreenWrapper::Speed(s) => s.update(now_ms),
            ScreenWrapper::Trip(s) => s.update(now_ms),
            ScreenWrapper::About(s) => s.update(now_ms),
        }
    }

    fn draw_screen<D: DrawTarget<Color = embedded_graphics::pixelcolor::Rgb565>>(
        &self,
        display: &mut D,
    ) -> Result<(), D::Error> {
        match self {
            ScreenWrapper::Speed(s) => s.draw_screen(display),
            ScreenWrapper::Trip(s) => s.draw_screen(display),
            ScreenWrapper::About(s) => s.draw_screen(display),
        }
    }

    fn bounds(&self) -> Rectangle {
        match self {
            ScreenWrapper::Speed(s) => s.bounds(),
            ScreenWrapper::Trip(s) => s.bounds(),
            ScreenWrapper::About(s) => s.bounds(),
        }
    }

    fn is_dirty(&self) -> bool {
        match self {
            ScreenWrapper::Speed(s) => s.is_dirty(),
            ScreenWrapper::Trip(s) => s.is_dirty(),
            ScreenWrapper::About(s) => s.is_dirty(),
        }
    }

    fn mark_clean(&mut self) {
        match self {
            ScreenWrapper::Speed(s) => s.mark_clean(),
            ScreenWrapper::Trip(s) => s.mark_clean(),
            ScreenWrapper::About(s) => s.mark_clean(),
        }
    }

    fn mark_dirty(&mut self) {
        match self {
            ScreenWrapper::Speed(s) => s.mark_dirty(),
            ScreenWrapper::Trip(s) => s.mark_dirty(),
            ScreenWrapper::About(s) => s.mark_dirty(),
        }
    }
}
