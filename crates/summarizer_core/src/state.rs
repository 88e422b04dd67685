use crate::view_model::{AppViewModel, Panel};

/// Identifies one submission cycle. Zero means "no request issued yet".
pub type RequestId = u64;

/// Shown when the submitted input is blank.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a URL";
/// Shown when the adapter failed without a usable message.
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Lifecycle of the current submission cycle. Exactly one variant is active,
/// so a stale summary can never be displayed next to an error or a spinner.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Idle,
    Loading {
        request_id: RequestId,
    },
    Success {
        summary: String,
    },
    Failure {
        message: String,
    },
}

/// What the health probe reported about the backend.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BackendStatus {
    /// No probe has been issued.
    #[default]
    Unknown,
    /// Probe in flight.
    Checking,
    Online {
        status: String,
        mode: Option<String>,
        model: Option<String>,
    },
    Unreachable {
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    input: String,
    submitted_url: Option<String>,
    lifecycle: Lifecycle,
    last_request_id: RequestId,
    backend: BackendStatus,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    /// Trimmed input captured by the most recent valid submission.
    pub fn submitted_url(&self) -> Option<&str> {
        self.submitted_url.as_deref()
    }

    pub fn backend(&self) -> &BackendStatus {
        &self.backend
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Loading { .. })
    }

    pub fn view(&self) -> AppViewModel {
        let panel = match &self.lifecycle {
            Lifecycle::Idle => Panel::Features,
            Lifecycle::Loading { .. } => Panel::Busy {
                url: self.submitted_url.clone().unwrap_or_default(),
            },
            Lifecycle::Success { summary } => Panel::Result {
                url: self.submitted_url.clone().unwrap_or_default(),
                summary: summary.clone(),
            },
            Lifecycle::Failure { message } => Panel::Error {
                message: message.clone(),
            },
        };
        let loading = self.is_loading();
        AppViewModel {
            input: self.input.clone(),
            input_enabled: !loading,
            submit_enabled: !loading,
            panel,
            backend: self.backend.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_input(&mut self, text: String) {
        if self.input != text {
            self.input = text;
            self.dirty = true;
        }
    }

    pub(crate) fn fail(&mut self, message: impl Into<String>) {
        self.lifecycle = Lifecycle::Failure {
            message: message.into(),
        };
        self.dirty = true;
    }

    /// Captures the submitted URL and enters `Loading` under a fresh request id.
    pub(crate) fn begin_request(&mut self, url: String) -> RequestId {
        self.last_request_id += 1;
        let request_id = self.last_request_id;
        self.submitted_url = Some(url);
        self.lifecycle = Lifecycle::Loading { request_id };
        self.dirty = true;
        request_id
    }

    /// Applies an adapter result. Returns `false` when the result belongs to a
    /// superseded cycle and was dropped.
    pub(crate) fn finish_request(
        &mut self,
        request_id: RequestId,
        result: Result<String, String>,
    ) -> bool {
        match self.lifecycle {
            Lifecycle::Loading { request_id: current } if current == request_id => {}
            _ => return false,
        }

        self.lifecycle = match result {
            Ok(summary) => Lifecycle::Success { summary },
            Err(message) if message.trim().is_empty() => Lifecycle::Failure {
                message: FALLBACK_ERROR_MESSAGE.to_string(),
            },
            Err(message) => Lifecycle::Failure { message },
        };
        self.dirty = true;
        true
    }

    pub(crate) fn set_backend(&mut self, backend: BackendStatus) {
        if self.backend != backend {
            self.backend = backend;
            self.dirty = true;
        }
    }
}
