//! Swipe-driven screen navigation.
//!
//! [`NavigationController`] interprets raw press/release touch events into
//! horizontal swipes, keeps the current screen index over a fixed circular
//! screen list, and holds the animation lock: while a [`Transition`] is in
//! flight every new gesture and navigation request is silently discarded.
//! The lock always releases after exactly the transition duration, driven
//! by the render loop calling [`NavigationController::update`] with the
//! current time.
//!
//! All timing is threaded through as millisecond timestamps so the whole
//! state machine runs under host tests with synthetic clocks.

use log::debug;

use crate::config::{
    SWIPE_AXIS_RATIO, SWIPE_MAX_DURATION_MS, SWIPE_MIN_DISTANCE_PX, TRANSITION_DURATION_MS,
};
use crate::ui::core::{TouchEvent, TouchPhase, TouchPoint};

/// Horizontal direction of finger travel in a recognized swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved left (dx < 0)
    Left,
    /// Finger moved right (dx > 0)
    Right,
}

/// Direction the screen content slides during a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
    Left,
    Right,
}

/// An in-flight animated switch between two screen indices.
///
/// Only [`NavigationController`] constructs these, so the duration is
/// always the configured [`TRANSITION_DURATION_MS`] and never zero.
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    from: usize,
    to: usize,
    slide: SlideDirection,
    started_ms: u64,
    duration_ms: u64,
}

impl Transition {
    fn new(from: usize, to: usize, slide: SlideDirection, started_ms: u64) -> Self {
        Self {
            from,
            to,
            slide,
            started_ms,
            duration_ms: TRANSITION_DURATION_MS,
        }
    }

    pub fn from_index(&self) -> usize {
        self.from
    }

    pub fn to_index(&self) -> usize {
        self.to
    }

    pub fn slide(&self) -> SlideDirection {
        self.slide
    }

    pub fn started_ms(&self) -> u64 {
        self.started_ms
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.started_ms)
    }

    pub fn is_complete(&self, now_ms: u64) -> bool {
        self.elapsed_ms(now_ms) >= self.duration_ms
    }

    /// Pixel offset of the outgoing screen at `now_ms` for screens `width`
    /// pixels wide. Starts at 0 and ends at `±width`; the incoming screen
    /// trails exactly one screen-width behind.
    pub fn offset_px(&self, now_ms: u64, width: u32) -> i32 {
        let elapsed = self.elapsed_ms(now_ms).min(self.duration_ms);
        let shift = (elapsed * width as u64 / self.duration_ms) as i32;
        match self.slide {
            SlideDirection::Right => shift,
            SlideDirection::Left => -shift,
        }
    }
}

/// Classify a completed gesture as a swipe.
///
/// All three thresholds are strict: displacement must exceed
/// [`SWIPE_MIN_DISTANCE_PX`], the horizontal component must exceed
/// [`SWIPE_AXIS_RATIO`] times the vertical one, and the gesture must finish
/// in under [`SWIPE_MAX_DURATION_MS`]. Slow drags, vertical scrolls, and
/// diagonals all fall out here.
pub fn classify_swipe(dx: i32, dy: i32, duration_ms: u64) -> Option<SwipeDirection> {
    if dx.abs() <= SWIPE_MIN_DISTANCE_PX {
        return None;
    }
    if dx.abs() <= SWIPE_AXIS_RATIO * dy.abs() {
        return None;
    }
    if duration_ms >= SWIPE_MAX_DURATION_MS {
        return None;
    }

    Some(if dx > 0 {
        SwipeDirection::Right
    } else {
        SwipeDirection::Left
    })
}

/// The press that opened the gesture currently being tracked.
#[derive(Debug, Clone, Copy)]
struct ActiveGesture {
    start: TouchPoint,
    started_ms: u64,
}

/// Screen index state machine with the animation lock.
///
/// Two states: Idle (`transition.is_none()`) and Animating. Only Idle
/// accepts gestures and navigation requests.
pub struct NavigationController {
    screen_count: usize,
    current: usize,
    gesture: Option<ActiveGesture>,
    transition: Option<Transition>,
}

impl NavigationController {
    pub fn new(screen_count: usize) -> Self {
        debug_assert!(screen_count > 0);
        Self {
            screen_count,
            current: 0,
            gesture: None,
            transition: None,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    /// Index after the current one, wrapping to 0 past the end.
    pub fn next_index(&self) -> usize {
        (self.current + 1) % self.screen_count
    }

    /// Index before the current one, wrapping to the last from 0.
    pub fn previous_index(&self) -> usize {
        (self.current + self.screen_count - 1) % self.screen_count
    }

    /// Feed one touch event into the gesture tracker.
    ///
    /// Returns the transition started by a recognized swipe, if any. While
    /// a transition is animating all events are discarded and any tracked
    /// gesture is dropped.
    pub fn handle_touch(&mut self, event: &TouchEvent) -> Option<Transition> {
        if self.transition.is_some() {
            self.gesture = None;
            return None;
        }

        match event.phase {
            TouchPhase::Press => {
                // A new press always restarts tracking
                self.gesture = Some(ActiveGesture {
                    start: event.point,
                    started_ms: event.at_ms,
                });
                None
            }
            TouchPhase::Drag => None,
            TouchPhase::Release => {
                let gesture = self.gesture.take()?;
                let dx = event.point.x as i32 - gesture.start.x as i32;
                let dy = event.point.y as i32 - gesture.start.y as i32;
                let duration_ms = event.at_ms.saturating_sub(gesture.started_ms);

                match classify_swipe(dx, dy, duration_ms)? {
                    // Rightward finger travel navigates to the PREVIOUS
                    // screen, sliding content right. Matches the shipped
                    // device behavior even though it inverts the common
                    // convention.
                    SwipeDirection::Right => {
                        self.navigate_to(self.previous_index(), SlideDirection::Right, event.at_ms)
                    }
                    SwipeDirection::Left => {
                        self.navigate_to(self.next_index(), SlideDirection::Left, event.at_ms)
                    }
                }
            }
        }
    }

    /// Begin an animated switch to `target`.
    ///
    /// No-op while animating, or when `target` is already the current index
    /// (state stays Idle, nothing animates). Otherwise the index is updated
    /// and the animation lock engages atomically.
    pub fn navigate_to(
        &mut self,
        target: usize,
        slide: SlideDirection,
        now_ms: u64,
    ) -> Option<Transition> {
        if self.transition.is_some() || target == self.current {
            return None;
        }
        debug_assert!(target < self.screen_count);

        let transition = Transition::new(self.current, target, slide, now_ms);
        debug!(
            "navigation: screen {} -> {} ({:?})",
            transition.from, transition.to, slide
        );

        self.current = target;
        self.transition = Some(transition);
        Some(transition)
    }

    /// Release the animation lock once the transition duration has elapsed.
    ///
    /// Called every frame by the render loop; returns true on the frame the
    /// transition completes.
    pub fn update(&mut self, now_ms: u64) -> bool {
        match self.transition {
            Some(t) if t.is_complete(now_ms) => {
                debug!("navigation: transition to {} complete", t.to);
                self.transition = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SCREEN_COUNT;
    use crate::ui::core::TouchEvent;

    fn swipe(nav: &mut NavigationController, dx: i32, at_ms: u64) -> Option<Transition> {
        nav.handle_touch(&TouchEvent::press(160, 120, at_ms));
        let end_x = (160 + dx) as u16;
        nav.handle_touch(&TouchEvent::release(end_x, 120, at_ms + 100))
    }

    #[test]
    fn test_distance_threshold_is_strict() {
        assert_eq!(classify_swipe(70, 0, 499), None);
        assert!(classify_swipe(71, 0, 499).is_some());
        assert_eq!(classify_swipe(-70, 0, 499), None);
        assert_eq!(classify_swipe(-71, 0, 499), Some(SwipeDirection::Left));
    }

    #[test]
    fn test_axis_ratio_is_strict() {
        // 100 > 2*60 is false: diagonal, rejected
        assert_eq!(classify_swipe(100, 60, 100), None);
        // 100 > 2*49 holds
        assert!(classify_swipe(100, 49, 100).is_some());
        assert_eq!(classify_swipe(100, 50, 100), None);
    }

    #[test]
    fn test_duration_threshold_is_strict() {
        assert_eq!(classify_swipe(100, 0, 500), None);
        assert!(classify_swipe(100, 0, 499).is_some());
    }

    #[test]
    fn test_swipe_direction_mapping() {
        assert_eq!(classify_swipe(100, 0, 100), Some(SwipeDirection::Right));
        assert_eq!(classify_swipe(-100, 0, 100), Some(SwipeDirection::Left));
    }

    #[test]
    fn test_circular_previous_from_zero() {
        let mut nav = NavigationController::new(SCREEN_COUNT);
        // Rightward swipe from screen 0 wraps to the last screen
        let t = swipe(&mut nav, 100, 0).unwrap();
        assert_eq!(t.from_index(), 0);
        assert_eq!(t.to_index(), SCREEN_COUNT - 1);
        assert_eq!(t.slide(), SlideDirection::Right);
        assert_eq!(nav.current_index(), SCREEN_COUNT - 1);
    }

    #[test]
    fn test_circular_next_wraps_to_zero() {
        let mut nav = NavigationController::new(3);
        let mut now = 0;
        for expected in [1, 2, 0] {
            let t = swipe(&mut nav, -100, now).unwrap();
            assert_eq!(t.to_index(), expected);
            now += 1_000;
            nav.update(now);
        }
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn test_reentrancy_guard() {
        let mut nav = NavigationController::new(3);

        // Swipe A: 0 -> 1, now animating
        assert!(swipe(&mut nav, -100, 0).is_some());
        assert!(nav.is_animating());
        assert_eq!(nav.current_index(), 1);

        // Swipe B before completion: dropped, index unchanged
        assert!(swipe(&mut nav, -100, 150).is_none());
        assert_eq!(nav.current_index(), 1);
        assert!(nav.is_animating());

        // After the duration the lock releases...
        assert!(nav.update(100 + TRANSITION_DURATION_MS));
        assert!(!nav.is_animating());
        assert_eq!(nav.current_index(), 1);

        // ...and a new swipe succeeds
        let t = swipe(&mut nav, -100, 2_000).unwrap();
        assert_eq!(t.to_index(), 2);
    }

    #[test]
    fn test_lock_releases_exactly_at_duration() {
        let mut nav = NavigationController::new(3);
        let t = swipe(&mut nav, -100, 0).unwrap();
        let end = t.started_ms() + t.duration_ms();

        assert!(!nav.update(end - 1));
        assert!(nav.is_animating());
        assert!(nav.update(end));
        assert!(!nav.is_animating());
        // Completion reports only once
        assert!(!nav.update(end + 1));
    }

    #[test]
    fn test_same_screen_switch_is_noop() {
        let mut nav = NavigationController::new(3);
        assert!(nav.navigate_to(0, SlideDirection::Left, 0).is_none());
        assert!(!nav.is_animating());
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn test_release_without_press_is_ignored() {
        let mut nav = NavigationController::new(3);
        assert!(nav.handle_touch(&TouchEvent::release(300, 120, 100)).is_none());
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn test_new_press_restarts_gesture() {
        let mut nav = NavigationController::new(3);
        nav.handle_touch(&TouchEvent::press(10, 120, 0));
        // Second press supersedes the first; dx is measured from it
        nav.handle_touch(&TouchEvent::press(300, 120, 1_000));
        assert!(nav.handle_touch(&TouchEvent::release(310, 120, 1_050)).is_none());
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn test_drag_keeps_gesture_alive() {
        let mut nav = NavigationController::new(3);
        nav.handle_touch(&TouchEvent::press(300, 120, 0));
        nav.handle_touch(&TouchEvent::drag(200, 120, 50));
        let t = nav.handle_touch(&TouchEvent::release(100, 120, 100)).unwrap();
        assert_eq!(t.slide(), SlideDirection::Left);
    }

    #[test]
    fn test_slow_gesture_rejected_by_controller() {
        let mut nav = NavigationController::new(3);
        nav.handle_touch(&TouchEvent::press(160, 120, 0));
        assert!(nav.handle_touch(&TouchEvent::release(60, 120, 500)).is_none());
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn test_press_during_animation_is_discarded() {
        let mut nav = NavigationController::new(3);
        assert!(swipe(&mut nav, -100, 0).is_some());

        // Press lands while animating; even if the release arrives after
        // the lock drops, no gesture was tracked for it
        nav.handle_touch(&TouchEvent::press(300, 120, 150));
        nav.update(100 + TRANSITION_DURATION_MS);
        assert!(nav.handle_touch(&TouchEvent::release(100, 120, 460)).is_none());
        assert_eq!(nav.current_index(), 1);
    }

    #[test]
    fn test_offset_px_endpoints() {
        let t = Transition::new(0, 1, SlideDirection::Left, 1_000);
        assert_eq!(t.duration_ms(), TRANSITION_DURATION_MS);
        assert_eq!(t.offset_px(1_000, 320), 0);
        assert_eq!(t.offset_px(1_150, 320), -160);
        assert_eq!(t.offset_px(1_300, 320), -320);
        // Clamped past the end
        assert_eq!(t.offset_px(9_999, 320), -320);

        let t = Transition::new(0, 1, SlideDirection::Right, 1_000);
        assert_eq!(t.offset_px(1_300, 320), 320);
    }
}
