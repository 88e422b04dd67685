pub mod constants;
mod markdown;
pub mod render;
