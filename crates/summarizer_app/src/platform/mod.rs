mod app;
mod effects;
mod input;
pub mod logging;
mod ui;

pub use app::run_app;
