pub mod render;
pub mod submit;
