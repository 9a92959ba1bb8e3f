//! Desktop simulator for the velo-rs touchscreen dashboard.
//!
//! Renders the velo-core screens in an SDL2 window via
//! `embedded-graphics-simulator`. Mouse input is forwarded as touch events,
//! so swipes (click-drag-release) and the gauge buttons work exactly as on
//! the device.
//!
//! # Key bindings
//!
//! | Key | Action |
//! |-----|--------|
//! | Q   | Quit   |

use std::time::{Duration, Instant};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window, sdl2::Keycode,
};
use log::info;

use velo_core::config::{DISPLAY_HEIGHT_PX, DISPLAY_WIDTH_PX, FRAME_INTERVAL_MS};
use velo_core::screens::ScreenManager;
use velo_core::ui::{TouchEvent, TouchPhase, TouchPoint};

/// Pixel scale factor for the simulator window.
const WINDOW_SCALE: u32 = 2;

/// Target frame duration, matching the firmware UI loop.
const FRAME_DURATION: Duration = Duration::from_millis(FRAME_INTERVAL_MS);

/// Convert an SDL mouse position to a touch event. Positions outside the
/// display (possible during a drag) are clamped to the panel edge.
fn touch_event(phase: TouchPhase, position: Point, at_ms: u64) -> TouchEvent {
    let x = position.x.clamp(0, DISPLAY_WIDTH_PX as i32 - 1) as u16;
    let y = position.y.clamp(0, DISPLAY_HEIGHT_PX as i32 - 1) as u16;
    TouchEvent::new(phase, TouchPoint::new(x, y), at_ms)
}

fn main() {
    env_logger::init();

    let mut display =
        SimulatorDisplay::<Rgb565>::new(Size::new(DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX));
    let settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("velo-rs simulator", &settings);

    let bounds = Rectangle::new(Point::zero(), Size::new(DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX));
    let mut manager = ScreenManager::with_default_screens(bounds);

    info!("simulator started; drag horizontally to swipe, Q to quit");

    let start = Instant::now();
    let mut mouse_down = false;

    'running: loop {
        let now_ms = start.elapsed().as_millis() as u64;

        manager.update(now_ms);
        if manager.is_dirty() {
            // SimulatorDisplay drawing is infallible
            manager.draw(&mut display, now_ms).unwrap();
        }
        window.update(&display);

        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::KeyDown { keycode, .. } => {
                    if keycode == Keycode::Q {
                        break 'running;
                    }
                }
                SimulatorEvent::MouseButtonDown { point, .. } => {
                    mouse_down = true;
                    manager.handle_touch(touch_event(TouchPhase::Press, point, now_ms));
                }
                SimulatorEvent::MouseButtonUp { point, .. } => {
                    mouse_down = false;
                    manager.handle_touch(touch_event(TouchPhase::Release, point, now_ms));
                }
                SimulatorEvent::MouseMove { point } if mouse_down => {
                    manager.handle_touch(touch_event(TouchPhase::Drag, point, now_ms));
                }
                _ => {}
            }
        }

        std::thread::sleep(FRAME_DURATION);
    }
}
