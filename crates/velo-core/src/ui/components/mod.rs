pub mod arc_meter;
pub mod button;
pub mod text;

pub use arc_meter::ArcMeter;
pub use button::Button;
pub use text::{TextComponent, TextSize};
