pub mod input;
pub mod palette;
pub mod render;
