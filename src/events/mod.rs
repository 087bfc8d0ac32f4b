pub mod keyboard;
pub mod page;
pub mod pointer;

pub use keyboard::wire_global_keydown;
pub use page::{wire_resize, wire_visibility, wire_welcome};
pub use pointer::wire_pointer_trail;
