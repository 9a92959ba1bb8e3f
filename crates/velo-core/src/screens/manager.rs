//! Screen manager: owns the fixed circular screen list, routes touch input
//! between the navigation controller and the active screen, and renders the
//! slide transition between screens.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use heapless::Vec;
use log::debug;

extern crate alloc;
use alloc::boxed::Box;

use crate::config::SCREEN_COUNT;
use crate::navigation::{NavigationController, SlideDirection};
use crate::screens::screen::{Screen, ScreenWrapper};
use crate::screens::{AboutScreen, SpeedScreen, TripScreen};
use crate::ui::core::TouchEvent;

/// Owns the screen list and the navigation state machine.
///
/// The list is ordered and fixed at construction; `screens[i]` is the
/// screen at navigation index `i`.
pub struct ScreenManager {
    screens: Vec<ScreenWrapper, SCREEN_COUNT>,
    nav: NavigationController,
    bounds: Rectangle,
}

impl ScreenManager {
    pub fn new(bounds: Rectangle, screens: Vec<ScreenWrapper, SCREEN_COUNT>) -> Self {
        debug_assert!(!screens.is_empty());
        let nav = NavigationController::new(screens.len());
        Self {
            screens,
            nav,
            bounds,
        }
    }

    /// Build the manager with the deployed screen set: Speed, Trip, About.
    pub fn with_default_screens(bounds: Rectangle) -> Self {
        let mut screens: Vec<ScreenWrapper, SCREEN_COUNT> = Vec::new();
        screens
            .push(ScreenWrapper::Speed(Box::new(SpeedScreen::new(bounds))))
            .ok();
        screens
            .push(ScreenWrapper::Trip(Box::new(TripScreen::new(bounds))))
            .ok();
        screens
            .push(ScreenWrapper::About(Box::new(AboutScreen::new(bounds))))
            .ok();
        Self::new(bounds, screens)
    }

    pub fn current_index(&self) -> usize {
        self.nav.current_index()
    }

    pub fn is_animating(&self) -> bool {
        self.nav.is_animating()
    }

    /// Route one touch event.
    ///
    /// The navigation controller sees every event first; when it recognizes
    /// a swipe the active screen changes and widget input is suppressed for
    /// the rest of the transition.
    pub fn handle_touch(&mut self, event: TouchEvent) {
        if let Some(transition) = self.nav.handle_touch(&event) {
            if let Some(screen) = self.screens.get_mut(transition.to_index()) {
                debug!("screen manager: activating '{}'", screen.title());
                screen.on_activate();
            }
            if let Some(screen) = self.screens.get_mut(transition.from_index()) {
                // The gesture started on this screen; let it see the
                // release so held widgets drop their pressed state
                // (release carries no action)
                screen.handle_touch(&event);
                screen.mark_dirty();
            }
            return;
        }

        if self.nav.is_animating() {
            return;
        }

        if let Some(screen) = self.screens.get_mut(self.nav.current_index()) {
            screen.handle_touch(&event);
        }
    }

    /// Per-frame state advance. Completes an elapsed transition.
    pub fn update(&mut self, now_ms: u64) {
        if self.nav.update(now_ms) {
            // Lock released; settle the final frame at rest
            if let Some(screen) = self.screens.get_mut(self.nav.current_index()) {
                screen.mark_dirty();
            }
        }

        if let Some(screen) = self.screens.get_mut(self.nav.current_index()) {
            screen.update(now_ms);
        }
    }

    /// Whether a redraw is needed this frame. Always true mid-transition.
    pub fn is_dirty(&self) -> bool {
        if self.nav.is_animating() {
            return true;
        }
        self.screens
            .get(self.nav.current_index())
            .is_some_and(|s| s.is_dirty())
    }

    /// Render the current frame.
    ///
    /// Mid-transition both involved screens are drawn through translated
    /// draw targets; the outgoing screen's offset runs from 0 to one
    /// screen-width and the incoming one trails exactly one width behind,
    /// so together they always cover the display.
    pub fn draw<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        display: &mut D,
        now_ms: u64,
    ) -> Result<(), D::Error> {
        if let Some(transition) = self.nav.transition().copied() {
            let width = self.bounds.size.width;
            let out_offset = transition.offset_px(now_ms, width);
            let in_offset = match transition.slide() {
                SlideDirection::Right => out_offset - width as i32,
                SlideDirection::Left => out_offset + width as i32,
            };

            if let Some(outgoing) = self.screens.get(transition.from_index()) {
                outgoing.draw_screen(&mut display.translated(Point::new(out_offset, 0)))?;
            }
            if let Some(incoming) = self.screens.get(transition.to_index()) {
                incoming.draw_screen(&mut display.translated(Point::new(in_offset, 0)))?;
            }
            return Ok(());
        }

        if let Some(screen) = self.screens.get_mut(self.nav.current_index()) {
            screen.draw_screen(display)?;
            screen.mark_clean();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GAUGE_STEP, TRANSITION_DURATION_MS};

    fn manager() -> ScreenManager {
        ScreenManager::with_default_screens(Rectangle::new(Point::zero(), Size::new(320, 240)))
    }

    fn swipe(manager: &mut ScreenManager, dx: i32, at_ms: u64) {
        manager.handle_touch(TouchEvent::press(160, 120, at_ms));
        manager.handle_touch(TouchEvent::release((160 + dx) as u16, 120, at_ms + 100));
    }

    #[test]
    fn test_swipe_left_advances_circularly() {
        let mut manager = manager();
        let mut now = 0;
        for expected in [1, 2, 0] {
            swipe(&mut manager, -100, now);
            assert_eq!(manager.current_index(), expected);
            now += 1_000;
            manager.update(now);
        }
    }

    #[test]
    fn test_swipe_right_goes_back_with_wrap() {
        let mut manager = manager();
        swipe(&mut manager, 100, 0);
        assert_eq!(manager.current_index(), 2);
    }

    #[test]
    fn test_widget_input_suppressed_while_animating() {
        let mut manager = manager();
        // Navigate away from Speed and immediately back so Speed is the
        // incoming screen of an in-flight transition
        swipe(&mut manager, -100, 0);
        manager.update(1_000);
        swipe(&mut manager, 100, 2_000);
        assert_eq!(manager.current_index(), 0);
        assert!(manager.is_animating());

        // Tap where the + button sits; must be dropped
        let plus_center = match &manager.screens[0] {
            ScreenWrapper::Speed(s) => s.plus_button_bounds().center(),
            _ => unreachable!(),
        };
        manager.handle_touch(TouchEvent::press(
            plus_center.x as u16,
            plus_center.y as u16,
            2_150,
        ));
        manager.handle_touch(TouchEvent::release(
            plus_center.x as u16,
            plus_center.y as u16,
            2_200,
        ));

        let value = match &manager.screens[0] {
            ScreenWrapper::Speed(s) => s.gauge().value(),
            _ => unreachable!(),
        };
        assert_eq!(value, 0);
    }

    #[test]
    fn test_widget_input_reaches_active_screen_when_idle() {
        let mut manager = manager();
        let plus_center = match &manager.screens[0] {
            ScreenWrapper::Speed(s) => s.plus_button_bounds().center(),
            _ => unreachable!(),
        };
        manager.handle_touch(TouchEvent::press(
            plus_center.x as u16,
            plus_center.y as u16,
            0,
        ));
        manager.handle_touch(TouchEvent::release(
            plus_center.x as u16,
            plus_center.y as u16,
            50,
        ));

        let value = match &manager.screens[0] {
            ScreenWrapper::Speed(s) => s.gauge().value(),
            _ => unreachable!(),
        };
        assert_eq!(value, GAUGE_STEP);
    }

    #[test]
    fn test_dirty_while_animating_and_settles_after() {
        let mut manager = manager();
        swipe(&mut manager, -100, 0);
        assert!(manager.is_dirty());

        manager.update(100 + TRANSITION_DURATION_MS);
        assert!(!manager.is_animating());
        // Final settle frame requested
        assert!(manager.is_dirty());
        assert!(manager.screens[1].is_dirty());
    }

    #[test]
    fn test_swipe_release_clears_held_button_state() {
        let mut manager = manager();
        let plus_center = match &manager.screens[0] {
            ScreenWrapper::Speed(s) => s.plus_button_bounds().center(),
            _ => unreachable!(),
        };

        // Finger lands on the + button, then slides off into a swipe.
        // The release is consumed by navigation but the button must not
        // stay stuck in its pressed visual.
        manager.handle_touch(TouchEvent::press(
            plus_center.x as u16,
            plus_center.y as u16,
            0,
        ));
        manager.handle_touch(TouchEvent::release(
            (plus_center.x - 100) as u16,
            plus_center.y as u16,
            100,
        ));
        assert!(manager.is_animating());
        assert_ne!(manager.current_index(), 0);

        match &manager.screens[0] {
            ScreenWrapper::Speed(s) => assert!(!s.plus_button_pressed()),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_second_swipe_during_animation_dropped() {
        let mut manager = manager();
        swipe(&mut manager, -100, 0);
        swipe(&mut manager, -100, 150);
        assert_eq!(manager.current_index(), 1);

        manager.update(100 + TRANSITION_DURATION_MS);
        assert_eq!(manager.current_index(), 1);
    }
}
