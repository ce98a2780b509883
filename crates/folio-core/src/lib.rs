pub mod backdrop;
pub mod constants;
pub mod contact;
pub mod panel;
pub mod parallax;
pub mod particles;
pub mod progress;
pub mod ui;

pub use backdrop::*;
pub use constants::*;
pub use contact::*;
pub use panel::*;
pub use parallax::*;
pub use particles::*;
pub use progress::*;
pub use ui::*;
