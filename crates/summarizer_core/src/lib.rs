//! Summarizer core: pure submission state machine and view-model projection.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{
    AppState, BackendStatus, Lifecycle, RequestId, EMPTY_INPUT_MESSAGE, FALLBACK_ERROR_MESSAGE,
};
pub use update::update;
pub use view_model::{AppViewModel, FeatureCard, Panel, FEATURES};
