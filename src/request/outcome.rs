use crate::error::ActionError;

/// Status of the one request a page may own.
///
/// A tagged state rather than `is_loading`/`result`/`error` flags, so
/// combinations like "in flight and succeeded" cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestOutcome {
    #[default]
    NotStarted,

    /// Waiting for the response to the request with this generation.
    InFlight { generation: u64 },

    Succeeded(String),

    /// `result` is only `Some` for an empty summary: the service answered,
    /// the (empty) text is kept and the error is shown alongside it.
    Failed {
        error: ActionError,
        result: Option<String>,
    },
}

impl RequestOutcome {
    /// A failure with no accompanying result.
    pub fn failed(error: ActionError) -> Self {
        Self::Failed {
            error,
            result: None,
        }
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight { .. })
    }

    /// True while waiting for exactly this generation.
    pub fn awaits(&self, generation: u64) -> bool {
        matches!(self, Self::InFlight { generation: g } if *g == generation)
    }

    /// Result text to display, if any.
    pub fn result(&self) -> Option<&str> {
        match self {
            Self::Succeeded(text) => Some(text),
            Self::Failed {
                result: Some(text), ..
            } => Some(text),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ActionError> {
        match self {
            Self::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Error message as shown under the input panel.
    pub fn error_message(&self) -> Option<String> {
        self.error().map(ToString::to_string)
    }
}
