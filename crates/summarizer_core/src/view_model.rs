use crate::BackendStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
}

/// Static highlights shown while nothing has been submitted yet.
pub const FEATURES: [FeatureCard; 3] = [
    FeatureCard {
        icon: "🚀",
        title: "Lightning Fast",
        blurb: "Get summaries in seconds with local AI processing",
    },
    FeatureCard {
        icon: "🔒",
        title: "100% Private",
        blurb: "Everything runs locally on your machine",
    },
    FeatureCard {
        icon: "💰",
        title: "Completely Free",
        blurb: "No API costs, no subscriptions needed",
    },
];

/// The single content region below the input row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Features,
    Busy {
        url: String,
    },
    Error {
        message: String,
    },
    /// `summary` is untouched markdown from the backend.
    Result {
        url: String,
        summary: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub input: String,
    pub input_enabled: bool,
    pub submit_enabled: bool,
    pub panel: Panel,
    pub backend: BackendStatus,
    pub dirty: bool,
}
