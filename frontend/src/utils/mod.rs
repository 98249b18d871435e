pub mod window_listener;

pub use window_listener::{scroll_offset, viewport_width, WindowListener};
