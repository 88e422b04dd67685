use summarizer_client::{BackendHealth, ClientEvent, ClientHandle, SummarizeError};
use summarizer_core::{BackendStatus, Effect, Msg};
use summarizer_logging::{summarizer_info, summarizer_warn};

/// Executes core effects on the client handle and turns client events back
/// into messages.
pub struct EffectRunner {
    client: ClientHandle,
}

impl EffectRunner {
    pub fn new(client: ClientHandle) -> Self {
        Self { client }
    }

    /// Runs `effects`. Returns messages for effects that failed before
    /// reaching the client, so no submission is left loading.
    pub fn run(&self, effects: Vec<Effect>) -> Vec<Msg> {
        let mut immediate = Vec::new();
        for effect in effects {
            match effect {
                Effect::RequestSummary { request_id, url } => {
                    summarizer_info!("RequestSummary request_id={} url={}", request_id, url);
                    if let Err(err) = self.client.submit(request_id, url) {
                        immediate.push(Msg::SummaryReceived {
                            request_id,
                            result: Err(err.message),
                        });
                    }
                }
                Effect::CheckHealth => {
                    if let Err(err) = self.client.check_health() {
                        immediate.push(Msg::HealthChecked(unreachable_status(err)));
                    }
                }
            }
        }
        immediate
    }

    /// Drains finished client work.
    pub fn poll(&self) -> Vec<Msg> {
        std::iter::from_fn(|| self.client.try_recv())
            .map(map_event)
            .collect()
    }
}

fn map_event(event: ClientEvent) -> Msg {
    match event {
        ClientEvent::SummaryCompleted { request_id, result } => Msg::SummaryReceived {
            request_id,
            result: result.map_err(|err| err.message),
        },
        ClientEvent::HealthChecked(Ok(health)) => Msg::HealthChecked(online_status(health)),
        ClientEvent::HealthChecked(Err(err)) => {
            summarizer_warn!("Health probe failed: {}", err);
            Msg::HealthChecked(unreachable_status(err))
        }
    }
}

fn online_status(health: BackendHealth) -> BackendStatus {
    BackendStatus::Online {
        status: health.status,
        mode: health.mode,
        model: health.model,
    }
}

fn unreachable_status(err: SummarizeError) -> BackendStatus {
    BackendStatus::Unreachable {
        message: err.message,
    }
}
