pub mod about;
pub mod manager;
pub mod screen;
pub mod speed;
pub mod trip;

pub use about::AboutScreen;
pub use manager::ScreenManager;
pub use screen::{Screen, ScreenWrapper};
pub use speed::SpeedScreen;
pub use trip::TripScreen;
