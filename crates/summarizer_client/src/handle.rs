use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use summarizer_logging::{summarizer_debug, summarizer_warn};

use crate::client::{ReqwestSummaryClient, SummaryClient};
use crate::{ClientEvent, ClientSettings, FailureKind, RequestId, SummarizeError};

#[derive(Debug, thiserror::Error)]
pub enum StartError {
    #[error("failed to start client runtime: {0}")]
    Runtime(#[from] io::Error),
    #[error("failed to build http client: {0}")]
    Client(#[from] SummarizeError),
}

enum ClientCommand {
    Summarize { request_id: RequestId, url: String },
    CheckHealth,
}

/// Runs a [`SummaryClient`] on a background tokio runtime. Every accepted
/// command produces exactly one [`ClientEvent`].
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
    event_rx: mpsc::Receiver<ClientEvent>,
}

impl ClientHandle {
    pub fn new(settings: ClientSettings) -> Result<Self, StartError> {
        let client = ReqwestSummaryClient::new(settings)?;
        Self::with_client(Arc::new(client))
    }

    pub fn with_client(client: Arc<dyn SummaryClient>) -> Result<Self, StartError> {
        let (cmd_tx, cmd_rx) = mpsc::channel::<ClientCommand>();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("summarizer-io")
            .enable_all()
            .build()?;

        thread::Builder::new()
            .name("summarizer-client".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let client = client.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(client.as_ref(), command, event_tx).await;
                    });
                }
                summarizer_debug!("Client command channel closed");
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    /// A handle whose worker has already exited. Every command fails to send.
    pub fn stopped() -> Self {
        let (cmd_tx, _) = mpsc::channel();
        let (_, event_rx) = mpsc::channel();
        Self { cmd_tx, event_rx }
    }

    /// Queues a summary request. Fails only if the worker thread is gone.
    pub fn submit(
        &self,
        request_id: RequestId,
        url: impl Into<String>,
    ) -> Result<(), SummarizeError> {
        self.send(ClientCommand::Summarize {
            request_id,
            url: url.into(),
        })
    }

    pub fn check_health(&self) -> Result<(), SummarizeError> {
        self.send(ClientCommand::CheckHealth)
    }

    pub fn try_recv(&self) -> Option<ClientEvent> {
        self.event_rx.try_recv().ok()
    }

    fn send(&self, command: ClientCommand) -> Result<(), SummarizeError> {
        self.cmd_tx.send(command).map_err(|_| {
            summarizer_warn!("Client worker stopped; dropping command");
            SummarizeError::new(FailureKind::Transport, "client worker stopped")
        })
    }
}

async fn handle_command(
    client: &dyn SummaryClient,
    command: ClientCommand,
    event_tx: mpsc::Sender<ClientEvent>,
) {
    let event = match command {
        ClientCommand::Summarize { request_id, url } => {
            let result = client.request_summary(&url).await;
            if let Err(err) = &result {
                summarizer_warn!("Request {} failed: {}", request_id, err);
            }
            ClientEvent::SummaryCompleted { request_id, result }
        }
        ClientCommand::CheckHealth => ClientEvent::HealthChecked(client.check_health().await),
    };
    // The receiver is gone only when the app is shutting down.
    let _ = event_tx.send(event);
}
