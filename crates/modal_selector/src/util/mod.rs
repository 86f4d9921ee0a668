pub mod screen;
pub mod styles;
