//! Turns a network result into display state.

use serde_json::Value;

use crate::api::ClientError;
use crate::error::ActionError;
use crate::request::{Action, RequestOutcome};

/// Interpret the settled result of a request for `action`.
///
/// - caption: the `caption` string is shown as-is.
/// - summary: the `summary` string is trimmed; a missing, null or blank
///   summary keeps the empty result and adds the empty-response error.
/// - anything else (connection failure, non-2xx, bad JSON, wrong field
///   type) collapses into the generic per-action message.
pub fn interpret(action: Action, result: Result<Value, ClientError>) -> RequestOutcome {
    let extracted = result.and_then(|body| extract(action, &body));

    match extracted {
        Ok(text) if action == Action::Summarize && text.is_empty() => RequestOutcome::Failed {
            error: ActionError::EmptyResult,
            result: Some(text),
        },
        Ok(text) => RequestOutcome::Succeeded(text),
        Err(err) => {
            tracing::debug!(action = action.noun(), kind = err.kind(), "Collapsing error: {err}");
            RequestOutcome::failed(ActionError::Transport { action })
        }
    }
}

fn extract(action: Action, body: &Value) -> Result<String, ClientError> {
    let field = action.result_field();
    match body.get(field) {
        Some(Value::String(text)) => Ok(match action {
            Action::Caption => text.clone(),
            Action::Summarize => text.trim().to_string(),
        }),
        None | Some(Value::Null) if action == Action::Summarize => Ok(String::new()),
        None => Err(ClientError::Shape(format!("missing '{field}' field"))),
        Some(other) => Err(ClientError::Shape(format!(
            "'{field}' is not a string: {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn transport(action: Action) -> RequestOutcome {
        RequestOutcome::failed(ActionError::Transport { action })
    }

    #[test]
    fn caption_success_is_shown_verbatim() {
        let outcome = interpret(
            Action::Caption,
            Ok(json!({"caption": "A dog running on grass"})),
        );
        assert_eq!(
            outcome,
            RequestOutcome::Succeeded("A dog running on grass".into())
        );
    }

    #[test]
    fn summary_is_trimmed() {
        let outcome = interpret(Action::Summarize, Ok(json!({"summary": "  Short.\n"})));
        assert_eq!(outcome, RequestOutcome::Succeeded("Short.".into()));
    }

    #[test]
    fn blank_summary_keeps_empty_result_and_error() {
        let outcome = interpret(Action::Summarize, Ok(json!({"summary": "   "})));
        assert_eq!(
            outcome,
            RequestOutcome::Failed {
                error: ActionError::EmptyResult,
                result: Some(String::new()),
            }
        );
    }

    #[test]
    fn missing_or_null_summary_is_empty_result() {
        for body in [json!({}), json!({"summary": null})] {
            let outcome = interpret(Action::Summarize, Ok(body));
            assert_eq!(outcome.error(), Some(&ActionError::EmptyResult));
            assert_eq!(outcome.result(), Some(""));
        }
    }

    #[test]
    fn non_string_summary_is_transport_error() {
        let outcome = interpret(Action::Summarize, Ok(json!({"summary": 42})));
        assert_eq!(outcome, transport(Action::Summarize));
    }

    #[test]
    fn missing_caption_is_transport_error() {
        let outcome = interpret(Action::Caption, Ok(json!({"text": "wrong field"})));
        assert_eq!(outcome, transport(Action::Caption));
    }

    #[test]
    fn status_errors_are_generic_for_both_actions() {
        let caption = interpret(Action::Caption, Err(ClientError::Status { status: 500 }));
        let summary = interpret(Action::Summarize, Err(ClientError::Status { status: 404 }));
        assert_eq!(
            caption.error_message().as_deref(),
            Some("An error occurred while generating the caption.")
        );
        assert_eq!(
            summary.error_message().as_deref(),
            Some("An error occurred while generating the summary.")
        );
        assert_eq!(caption.result(), None);
        assert_eq!(summary.result(), None);
    }
}
