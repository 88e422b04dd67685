use crate::{BackendStatus, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Shell finished setting up; triggers the health probe.
    Started,
    /// User edited the URL input box.
    InputChanged(String),
    /// User pressed the submit control.
    SubmitClicked,
    /// Adapter finished a summary request. `Err` carries the adapter message,
    /// which may be blank.
    SummaryReceived {
        request_id: RequestId,
        result: Result<String, String>,
    },
    /// Adapter finished the health probe.
    HealthChecked(BackendStatus),
    /// UI tick used to animate the busy indicator.
    Tick,
    /// Fallback for unmapped input.
    NoOp,
}
