use std::sync::atomic::{AtomicU64, Ordering};

use serde_json::Value;

use crate::api::{ClientError, InferenceClient, UploadPart};
use crate::request::Action;

/// Process-wide generation counter. Generations are never reused, so a
/// remounted page cannot mistake a stale response for its own.
static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

/// Identifies one request for one action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub action: Action,
    pub generation: u64,
}

impl Ticket {
    pub fn issue(action: Action) -> Self {
        Self {
            action,
            generation: NEXT_GENERATION.fetch_add(1, Ordering::Relaxed),
        }
    }
}

/// A request ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub ticket: Ticket,
    pub part: UploadPart,
}

/// The network result of a submission, routed back to its page.
#[derive(Debug)]
pub struct Settlement {
    pub ticket: Ticket,
    pub result: Result<Value, ClientError>,
}

/// Send `submission` and wait for the response. No retries.
pub async fn execute(client: &InferenceClient, submission: Submission) -> Settlement {
    let Submission { ticket, part } = submission;
    let result = client.upload(ticket.action, part).await;
    if let Err(err) = &result {
        tracing::warn!(
            action = ticket.action.noun(),
            generation = ticket.generation,
            kind = err.kind(),
            "Request failed: {err}"
        );
    }
    Settlement { ticket, result }
}
