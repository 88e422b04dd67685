use summarizer_logging::{summarizer_debug, summarizer_info};

use crate::{AppState, BackendStatus, Effect, Msg, EMPTY_INPUT_MESSAGE};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => {
            state.set_backend(BackendStatus::Checking);
            vec![Effect::CheckHealth]
        }
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::SubmitClicked => {
            let url = state.input().trim().to_owned();
            if url.is_empty() {
                state.fail(EMPTY_INPUT_MESSAGE);
                return (state, Vec::new());
            }
            let request_id = state.begin_request(url.clone());
            summarizer_info!(
                "Submit request_id={} url_len={} url={}",
                request_id,
                url.len(),
                url
            );
            vec![Effect::RequestSummary { request_id, url }]
        }
        Msg::SummaryReceived { request_id, result } => {
            let ok = result.is_ok();
            if state.finish_request(request_id, result) {
                summarizer_debug!("Request {} resolved ok={}", request_id, ok);
            } else {
                summarizer_debug!("Dropping superseded result for request {}", request_id);
            }
            Vec::new()
        }
        Msg::HealthChecked(status) => {
            state.set_backend(status);
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
