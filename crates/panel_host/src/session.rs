use panel_core::{
    update, ActionResult, Candidate, Command, ContentKind, ControlId, Effect, Msg, NotifyKey,
    PanelState, PanelViewModel, PriorSelection, ResultPayload,
};
use panel_logging::{panel_debug, panel_info, panel_warn};
use panel_wire as wire;
use serde_json::{json, Value};

/// One-way sink toward the extension host. The real webview bridge
/// implements this outside the workspace; posts are fire-and-forget with no
/// retries at this layer.
pub trait HostPost {
    fn post(&mut self, message: String);
}

/// Bootstrap data read out of the page DOM by the embedding shell: the
/// content envelope plus the serialized candidate lists and their prior
/// selections.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BootstrapData {
    /// Page name used as log context for this session's thread.
    pub page_label: Option<String>,
    pub content_type: Option<String>,
    pub content: Option<String>,
    pub placeholder_label: Option<String>,
    pub scripts_json: Option<String>,
    pub selected_script: Option<String>,
    pub metrics_json: Option<String>,
    pub selected_metrics: Option<String>,
    pub memory_json: Option<String>,
    pub selected_memory: Option<String>,
}

/// Composition root for one panel page.
///
/// Owns the page state, the post sink, and the subscription flag. User and
/// host dispatch stay disabled until [`PageSession::bootstrap`] has finished
/// populating the page, so initialization always completes before any
/// handler can fire.
pub struct PageSession<P: HostPost> {
    state: PanelState,
    post: P,
    subscribed: bool,
}

impl<P: HostPost> PageSession<P> {
    pub fn new(post: P) -> Self {
        Self {
            state: PanelState::new(),
            post,
            subscribed: false,
        }
    }

    /// DOM-ready initialization: decode inbound content, populate controls,
    /// then enable dispatch.
    pub fn bootstrap(&mut self, data: &BootstrapData) {
        if let Some(label) = &data.page_label {
            panel_logging::set_page_label(label);
        }
        if let Some(label) = &data.placeholder_label {
            self.state.set_placeholder_label(label);
        }
        if let Some(tag) = &data.content_type {
            let raw = data.content.clone().unwrap_or_default();
            self.load_content(tag, &raw);
        }
        self.load_candidates(
            ControlId::Scripts,
            data.scripts_json.as_deref(),
            data.selected_script.as_deref(),
        );
        self.load_candidates(
            ControlId::Metrics,
            data.metrics_json.as_deref(),
            data.selected_metrics.as_deref(),
        );
        self.load_candidates(
            ControlId::Memory,
            data.memory_json.as_deref(),
            data.selected_memory.as_deref(),
        );
        // Handlers attach only after population.
        self.subscribed = true;
    }

    /// Dispatch one inbound host message. Unknown commands are ignored.
    pub fn on_host_message(&mut self, json: &str) {
        if !self.subscribed {
            panel_debug!("host message before bootstrap; ignored");
            return;
        }
        match wire::parse_host_message(json) {
            Ok(wire::HostCommand::UpdateContent {
                content_type,
                content,
            }) => self.load_content(&content_type, &content),
            Ok(wire::HostCommand::UpdateCandidates {
                control,
                list_json,
                selected,
            }) => match parse_control(&control) {
                Some(control) => {
                    self.load_candidates(control, Some(&list_json), selected.as_deref())
                }
                None => panel_warn!("candidate update for unknown control {control:?} ignored"),
            },
            Ok(wire::HostCommand::Unknown) => {}
            Err(err) => panel_warn!("unparseable host message ignored: {err}"),
        }
    }

    /// Dispatch one user-triggered message. No-op until bootstrap completes.
    pub fn on_user_action(&mut self, msg: Msg) {
        if !self.subscribed {
            panel_debug!("user action before bootstrap; ignored");
            return;
        }
        self.apply(msg);
    }

    /// Detach the page from dispatch; called on page unload.
    pub fn teardown(&mut self) {
        self.subscribed = false;
    }

    pub fn view(&self) -> PanelViewModel {
        self.state.view()
    }

    fn load_content(&mut self, tag: &str, raw: &str) {
        let content_type = wire::ContentType::from_tag(tag);
        let msg = match content_type.kind() {
            None => Msg::ContentRejected {
                message: wire::CodecError::UnrecognizedContentType.to_string(),
                notify: NotifyKey::IncorrectContentType,
            },
            Some(kind) => {
                let envelope = wire::ContentEnvelope {
                    content_type,
                    raw_content: raw.to_string(),
                };
                match wire::decode(&envelope) {
                    Ok(text) => Msg::ContentDecoded {
                        kind: content_kind_to_core(kind),
                        text,
                    },
                    // The tag was recognized, so this is a payload fault.
                    Err(err) => Msg::ContentRejected {
                        message: err.to_string(),
                        notify: NotifyKey::MalformedContent,
                    },
                }
            }
        };
        self.apply(msg);
    }

    fn load_candidates(&mut self, control: ControlId, json: Option<&str>, selected: Option<&str>) {
        let Some(json) = json else { return };
        let records = match wire::parse_candidate_list(json) {
            Ok(records) => records,
            Err(err) => {
                panel_warn!("candidate list for {control:?} ignored: {err}");
                return;
            }
        };
        let candidates: Vec<Candidate> = records
            .into_iter()
            .map(|r| Candidate {
                value: r.value,
                label: r.label,
            })
            .collect();
        let prior = match (control, selected) {
            (_, None) => PriorSelection::None,
            (ControlId::Metrics, Some(keys)) => PriorSelection::Multi(keys.to_string()),
            (_, Some(key)) => PriorSelection::Single(key.to_string()),
        };
        self.apply(Msg::CandidatesLoaded {
            control,
            candidates,
            prior,
        });
    }

    fn apply(&mut self, msg: Msg) {
        let (state, effects) = update(std::mem::take(&mut self.state), msg);
        self.state = state;
        self.run_effects(effects);
    }

    fn run_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::PostResult { command, result } => {
                    self.post_message(command, &result_payload(&result));
                }
                Effect::EncodeAndSubmit {
                    kind,
                    text,
                    command,
                } => match wire::encode(&text, content_kind_to_wire(kind)) {
                    Ok(encoded) => self.post_message(
                        command,
                        &wire::OutboundPayload::Success {
                            result: Some(Value::String(encoded)),
                        },
                    ),
                    Err(err) => {
                        self.post_message(
                            command,
                            &wire::OutboundPayload::Error {
                                message: err.to_string(),
                            },
                        );
                        self.post
                            .post(wire::notify_message(NotifyKey::MalformedContent.as_str()));
                    }
                },
                Effect::Notify { key } => self.post.post(wire::notify_message(key.as_str())),
            }
        }
    }

    fn post_message(&mut self, command: Command, payload: &wire::OutboundPayload) {
        let message = wire::result_message(command.as_str(), payload);
        panel_info!(
            "page {:?} posting {command} message ({} bytes)",
            panel_logging::get_page_label(),
            message.len()
        );
        self.post.post(message);
    }
}

fn parse_control(control: &str) -> Option<ControlId> {
    match control {
        "scripts" => Some(ControlId::Scripts),
        "metrics" => Some(ControlId::Metrics),
        "memory" => Some(ControlId::Memory),
        _ => None,
    }
}

fn content_kind_to_core(kind: wire::ContentKind) -> ContentKind {
    match kind {
        wire::ContentKind::StructuredJson => ContentKind::StructuredJson,
        wire::ContentKind::PlainScript => ContentKind::PlainScript,
    }
}

fn content_kind_to_wire(kind: ContentKind) -> wire::ContentKind {
    match kind {
        ContentKind::StructuredJson => wire::ContentKind::StructuredJson,
        ContentKind::PlainScript => wire::ContentKind::PlainScript,
    }
}

fn result_payload(result: &ActionResult) -> wire::OutboundPayload {
    match result {
        ActionResult::Success { payload } => wire::OutboundPayload::Success {
            result: success_value(payload),
        },
        ActionResult::Error { message } => wire::OutboundPayload::Error {
            message: message.clone(),
        },
        ActionResult::Canceled { reason } => wire::OutboundPayload::Canceled {
            reason: reason.clone(),
        },
    }
}

fn success_value(payload: &ResultPayload) -> Option<Value> {
    match payload {
        ResultPayload::Empty => None,
        ResultPayload::Content(text) => Some(Value::String(text.clone())),
        ResultPayload::Settings {
            memory_mb,
            timeout_secs,
        } => Some(json!({ "memorySize": memory_mb, "timeout": timeout_secs })),
    }
}
