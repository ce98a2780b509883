pub mod nav;
pub mod pointer;
pub mod scroll;

pub use nav::wire_navigation;
pub use pointer::wire_background;
pub use scroll::wire_scroll;
