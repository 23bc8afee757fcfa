use std::sync::Once;

use panel_core::{
    update, ActionResult, Candidate, Command, ContentKind, ControlId, Effect, Msg, NotifyKey,
    PanelState, PriorSelection, ResultPayload, PLACEHOLDER_VALUE, TIMEOUT_MAX_SECS,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(panel_logging::initialize_for_tests);
}

fn load_plain_content(state: PanelState, text: &str) -> PanelState {
    let (state, effects) = update(
        state,
        Msg::ContentDecoded {
            kind: ContentKind::PlainScript,
            text: text.to_string(),
        },
    );
    assert!(effects.is_empty());
    state
}

fn load_memory_candidates(state: PanelState) -> PanelState {
    let candidates = ["128", "256", "512"]
        .iter()
        .map(|v| Candidate {
            value: (*v).to_string(),
            label: (*v).to_string(),
        })
        .collect();
    let (state, effects) = update(
        state,
        Msg::CandidatesLoaded {
            control: ControlId::Memory,
            candidates,
            prior: PriorSelection::None,
        },
    );
    assert!(effects.is_empty());
    state
}

#[test]
fn submit_without_content_reports_canceled() {
    init_logging();
    let state = PanelState::new();

    let (_state, effects) = update(state, Msg::SubmitClicked);

    assert_eq!(effects.len(), 1);
    match &effects[0] {
        Effect::PostResult { command, result } => {
            assert_eq!(*command, Command::ContentSubmitted);
            assert!(matches!(result, ActionResult::Canceled { .. }));
        }
        other => panic!("unexpected effect: {other:?}"),
    }
}

#[test]
fn submit_with_content_emits_encode_effect() {
    init_logging();
    let state = load_plain_content(PanelState::new(), "console.log(1)");

    let (_state, effects) = update(state, Msg::SubmitClicked);

    assert_eq!(
        effects,
        vec![Effect::EncodeAndSubmit {
            kind: ContentKind::PlainScript,
            text: "console.log(1)".to_string(),
            command: Command::ContentSubmitted,
        }]
    );
}

#[test]
fn editor_changes_flow_into_the_submitted_text() {
    init_logging();
    let state = load_plain_content(PanelState::new(), "original");
    let (state, _effects) = update(state, Msg::EditorChanged("edited".to_string()));

    let (_state, effects) = update(state, Msg::SubmitClicked);

    match &effects[0] {
        Effect::EncodeAndSubmit { text, .. } => assert_eq!(text, "edited"),
        other => panic!("unexpected effect: {other:?}"),
    }
}

#[test]
fn download_with_content_posts_the_text() {
    init_logging();
    let state = load_plain_content(PanelState::new(), "script body");

    let (_state, effects) = update(state, Msg::DownloadClicked);

    assert_eq!(
        effects,
        vec![Effect::PostResult {
            command: Command::DownloadCompleted,
            result: ActionResult::Success {
                payload: ResultPayload::Content("script body".to_string()),
            },
        }]
    );
}

#[test]
fn download_without_content_reports_canceled() {
    init_logging();
    let (_state, effects) = update(PanelState::new(), Msg::DownloadClicked);

    match &effects[0] {
        Effect::PostResult { command, result } => {
            assert_eq!(*command, Command::DownloadCompleted);
            assert!(matches!(result, ActionResult::Canceled { .. }));
        }
        other => panic!("unexpected effect: {other:?}"),
    }
}

#[test]
fn content_rejection_posts_error_and_requests_notification() {
    init_logging();
    let (mut state, effects) = update(
        PanelState::new(),
        Msg::ContentRejected {
            message: "incorrect content type".to_string(),
            notify: NotifyKey::IncorrectContentType,
        },
    );

    assert_eq!(
        effects,
        vec![
            Effect::PostResult {
                command: Command::ContentLoaded,
                result: ActionResult::Error {
                    message: "incorrect content type".to_string(),
                },
            },
            Effect::Notify {
                key: NotifyKey::IncorrectContentType,
            },
        ]
    );
    let view = state.view();
    assert!(!view.content_ready);
    assert_eq!(view.load_error.as_deref(), Some("incorrect content type"));
    assert!(state.consume_dirty());
}

#[test]
fn content_rejection_notifies_with_the_reported_cause() {
    init_logging();
    let (_state, effects) = update(
        PanelState::new(),
        Msg::ContentRejected {
            message: "malformed structured content: expected value".to_string(),
            notify: NotifyKey::MalformedContent,
        },
    );

    assert_eq!(
        effects[1],
        Effect::Notify {
            key: NotifyKey::MalformedContent,
        }
    );
}

#[test]
fn candidates_loaded_populates_scripts_with_sentinel() {
    init_logging();
    let candidates = vec![
        Candidate {
            value: "1".to_string(),
            label: "X".to_string(),
        },
        Candidate {
            value: "2".to_string(),
            label: "Y".to_string(),
        },
    ];

    let (state, effects) = update(
        PanelState::new(),
        Msg::CandidatesLoaded {
            control: ControlId::Scripts,
            candidates,
            prior: PriorSelection::Single("2".to_string()),
        },
    );

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.scripts.len(), 3);
    assert_eq!(view.scripts[0].value, PLACEHOLDER_VALUE);
    assert!(!view.scripts[0].selected);
    assert!(view.scripts[2].selected);
}

#[test]
fn selection_change_moves_the_selected_flag() {
    init_logging();
    let candidates = vec![
        Candidate {
            value: "1".to_string(),
            label: "X".to_string(),
        },
        Candidate {
            value: "2".to_string(),
            label: "Y".to_string(),
        },
    ];
    let (state, _effects) = update(
        PanelState::new(),
        Msg::CandidatesLoaded {
            control: ControlId::Scripts,
            candidates,
            prior: PriorSelection::None,
        },
    );

    let (state, effects) = update(
        state,
        Msg::SelectionChanged {
            control: ControlId::Scripts,
            value: "1".to_string(),
        },
    );

    assert!(effects.is_empty());
    let view = state.view();
    assert!(!view.scripts[0].selected);
    assert!(view.scripts[1].selected);
}

#[test]
fn valid_settings_submit_posts_settings_payload() {
    init_logging();
    let state = load_memory_candidates(PanelState::new());
    let (state, _effects) = update(state, Msg::TimeoutChanged("30".to_string()));

    let (state, effects) = update(state, Msg::SettingsSubmitted);

    assert_eq!(
        effects,
        vec![Effect::PostResult {
            command: Command::SettingsUpdated,
            result: ActionResult::Success {
                payload: ResultPayload::Settings {
                    memory_mb: 128,
                    timeout_secs: 30,
                },
            },
        }]
    );
    assert_eq!(state.view().validation, None);
}

#[test]
fn out_of_range_timeout_is_recovered_locally() {
    init_logging();
    let state = load_memory_candidates(PanelState::new());
    let over_limit = (TIMEOUT_MAX_SECS + 1).to_string();
    let (state, _effects) = update(state, Msg::TimeoutChanged(over_limit));

    let (state, effects) = update(state, Msg::SettingsSubmitted);

    assert!(effects.is_empty());
    let validation = state.view().validation.unwrap();
    assert!(validation.contains("timeout"), "got: {validation}");
}

#[test]
fn non_numeric_timeout_is_recovered_locally() {
    init_logging();
    let state = load_memory_candidates(PanelState::new());
    let (state, _effects) = update(state, Msg::TimeoutChanged("soon".to_string()));

    let (_state, effects) = update(state, Msg::SettingsSubmitted);

    assert!(effects.is_empty());
}

#[test]
fn settings_submit_without_memory_options_is_recovered_locally() {
    init_logging();
    let (state, _effects) = update(PanelState::new(), Msg::TimeoutChanged("30".to_string()));

    let (state, effects) = update(state, Msg::SettingsSubmitted);

    assert!(effects.is_empty());
    assert!(state.view().validation.is_some());
}

#[test]
fn successful_settings_submit_clears_previous_validation() {
    init_logging();
    let state = load_memory_candidates(PanelState::new());
    let (state, _effects) = update(state, Msg::TimeoutChanged("0".to_string()));
    let (state, effects) = update(state, Msg::SettingsSubmitted);
    assert!(effects.is_empty());
    assert!(state.view().validation.is_some());

    let (state, _effects) = update(state, Msg::TimeoutChanged("60".to_string()));
    let (state, effects) = update(state, Msg::SettingsSubmitted);

    assert_eq!(effects.len(), 1);
    assert_eq!(state.view().validation, None);
}
