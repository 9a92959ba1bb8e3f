//! velo UI system: core traits, styling, and components for the
//! embedded-graphics based screen stack.

pub mod components;
pub mod core;
pub mod styling;

// Re-export commonly used items
pub use components::{ArcMeter, Button, TextComponent, TextSize};
pub use self::core::{
    Action, Drawable, ScreenId, TouchEvent, TouchPhase, TouchPoint, TouchResult, Touchable,
};
pub use styling::{ButtonVariant, ColorPalette, Style};
