pub mod window;
pub mod layout;
pub mod path;
pub mod render;
pub mod rest;

pub use window::*;
pub use layout::*;
pub use path::*;
pub use render::*;
pub use rest::*;
