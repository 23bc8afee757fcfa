use crate::options::{reconcile, PlaceholderPolicy};
use crate::{ActionResult, Command, ControlId, Effect, Msg, PanelState, ResultPayload};

const CANCEL_NO_CONTENT: &str = "content not initialized";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: PanelState, msg: Msg) -> (PanelState, Vec<Effect>) {
    let effects = match msg {
        Msg::ContentDecoded { kind, text } => {
            state.apply_content(kind, text);
            Vec::new()
        }
        Msg::ContentRejected { message, notify } => {
            // A bad bootstrap payload is a data fault: report it upward and
            // ask for a user-visible notification.
            state.apply_load_error(message.clone());
            vec![
                Effect::PostResult {
                    command: Command::ContentLoaded,
                    result: ActionResult::Error { message },
                },
                Effect::Notify { key: notify },
            ]
        }
        Msg::CandidatesLoaded {
            control,
            candidates,
            prior,
        } => {
            let policy = match control {
                ControlId::Scripts | ControlId::Metrics => PlaceholderPolicy::Leading {
                    label: state.placeholder_label().to_string(),
                },
                ControlId::Memory => PlaceholderPolicy::FirstCandidate,
            };
            state.apply_options(control, reconcile(&candidates, &prior, &policy));
            Vec::new()
        }
        Msg::EditorChanged(text) => {
            state.apply_editor_text(text);
            Vec::new()
        }
        Msg::SelectionChanged { control, value } => {
            state.apply_single_selection(control, &value);
            Vec::new()
        }
        Msg::MultiSelectionToggled { control, value } => {
            state.apply_multi_toggle(control, &value);
            Vec::new()
        }
        Msg::TimeoutChanged(raw) => {
            state.apply_timeout_raw(raw);
            Vec::new()
        }
        Msg::SubmitClicked => match state.content() {
            Some(buffer) => vec![Effect::EncodeAndSubmit {
                kind: buffer.kind,
                text: buffer.text.clone(),
                command: Command::ContentSubmitted,
            }],
            // Submitting before content ever decoded is an environment
            // problem, not a user fault: report Canceled, not Error.
            None => vec![Effect::PostResult {
                command: Command::ContentSubmitted,
                result: ActionResult::Canceled {
                    reason: CANCEL_NO_CONTENT.to_string(),
                },
            }],
        },
        Msg::DownloadClicked => match state.content() {
            Some(buffer) => vec![Effect::PostResult {
                command: Command::DownloadCompleted,
                result: ActionResult::Success {
                    payload: ResultPayload::Content(buffer.text.clone()),
                },
            }],
            None => vec![Effect::PostResult {
                command: Command::DownloadCompleted,
                result: ActionResult::Canceled {
                    reason: CANCEL_NO_CONTENT.to_string(),
                },
            }],
        },
        Msg::SettingsSubmitted => match state.validate_settings() {
            Ok((memory_mb, timeout_secs)) => vec![Effect::PostResult {
                command: Command::SettingsUpdated,
                result: ActionResult::Success {
                    payload: ResultPayload::Settings {
                        memory_mb,
                        timeout_secs,
                    },
                },
            }],
            Err(message) => {
                // Validation failures are recovered locally; nothing is
                // posted across the boundary.
                state.apply_validation_error(message);
                Vec::new()
            }
        },
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
