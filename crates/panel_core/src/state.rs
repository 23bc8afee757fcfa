use crate::options::{self, SelectOption};
use crate::view_model::PanelViewModel;

/// Placeholder label used until the host supplies a localized one.
pub const DEFAULT_PLACEHOLDER_LABEL: &str = "----";

/// Timeout bounds for the function settings form, in seconds.
pub const TIMEOUT_MIN_SECS: u32 = 1;
pub const TIMEOUT_MAX_SECS: u32 = 900;

/// The decodable content kinds. The boundary's unrecognized tag never
/// reaches this enum; rejected content stays out of the editor entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    StructuredJson,
    PlainScript,
}

/// The select controls a panel page can own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlId {
    /// Script picker, single-select with a sentinel placeholder.
    Scripts,
    /// Monitoring metric picker, multi-select with a sentinel placeholder.
    Metrics,
    /// Memory size picker, single-select defaulting to the first candidate.
    Memory,
}

/// Decoded, editable script content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBuffer {
    pub kind: ContentKind,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct SettingsForm {
    timeout_raw: String,
    validation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelState {
    content: Option<ContentBuffer>,
    load_error: Option<String>,
    scripts: Vec<SelectOption>,
    metrics: Vec<SelectOption>,
    memory: Vec<SelectOption>,
    settings: SettingsForm,
    placeholder_label: String,
    dirty: bool,
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            content: None,
            load_error: None,
            scripts: Vec::new(),
            metrics: Vec::new(),
            memory: Vec::new(),
            settings: SettingsForm::default(),
            placeholder_label: DEFAULT_PLACEHOLDER_LABEL.to_string(),
            dirty: false,
        }
    }
}

impl PanelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the placeholder label with a host-localized one. Must be
    /// called before controls are populated to take effect.
    pub fn set_placeholder_label(&mut self, label: &str) {
        self.placeholder_label = label.to_string();
    }

    pub fn view(&self) -> PanelViewModel {
        PanelViewModel {
            content_ready: self.content.is_some(),
            editor_text: self
                .content
                .as_ref()
                .map(|c| c.text.clone())
                .unwrap_or_default(),
            load_error: self.load_error.clone(),
            scripts: self.scripts.clone(),
            metrics: self.metrics.clone(),
            memory: self.memory.clone(),
            timeout_raw: self.settings.timeout_raw.clone(),
            validation: self.settings.validation.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns the dirty flag and clears it.
    pub fn consume_dirty(&mut self) -> bool {
        let dirty = self.dirty;
        self.dirty = false;
        dirty
    }

    pub(crate) fn placeholder_label(&self) -> &str {
        &self.placeholder_label
    }

    pub(crate) fn content(&self) -> Option<&ContentBuffer> {
        self.content.as_ref()
    }

    pub(crate) fn apply_content(&mut self, kind: ContentKind, text: String) {
        self.content = Some(ContentBuffer { kind, text });
        self.load_error = None;
        self.mark_dirty();
    }

    pub(crate) fn apply_load_error(&mut self, message: String) {
        self.content = None;
        self.load_error = Some(message);
        self.mark_dirty();
    }

    pub(crate) fn apply_options(&mut self, control: ControlId, options: Vec<SelectOption>) {
        *self.options_mut(control) = options;
        self.mark_dirty();
    }

    pub(crate) fn apply_editor_text(&mut self, text: String) {
        if let Some(content) = self.content.as_mut() {
            content.text = text;
            self.mark_dirty();
        }
    }

    pub(crate) fn apply_single_selection(&mut self, control: ControlId, value: &str) {
        options::apply_single_selection(self.options_mut(control), value);
        self.mark_dirty();
    }

    pub(crate) fn apply_multi_toggle(&mut self, control: ControlId, value: &str) {
        options::toggle_multi_selection(self.options_mut(control), value);
        self.mark_dirty();
    }

    pub(crate) fn apply_timeout_raw(&mut self, raw: String) {
        self.settings.timeout_raw = raw;
        self.mark_dirty();
    }

    pub(crate) fn apply_validation_error(&mut self, message: String) {
        self.settings.validation = Some(message);
        self.mark_dirty();
    }

    /// Check the settings form, returning `(memory_mb, timeout_secs)` when it
    /// is submittable. Clears any previous validation message on success.
    pub(crate) fn validate_settings(&mut self) -> Result<(u32, u32), String> {
        let selected_memory = self
            .memory
            .iter()
            .find(|o| !o.disabled && o.selected)
            .ok_or_else(|| "no memory size selected".to_string())?;
        let memory_mb: u32 = selected_memory
            .value
            .parse()
            .map_err(|_| "memory size must be numeric".to_string())?;
        let timeout_secs: u32 = self
            .settings
            .timeout_raw
            .trim()
            .parse()
            .map_err(|_| "timeout must be a number".to_string())?;
        if !(TIMEOUT_MIN_SECS..=TIMEOUT_MAX_SECS).contains(&timeout_secs) {
            return Err(format!(
                "timeout must be between {TIMEOUT_MIN_SECS} and {TIMEOUT_MAX_SECS} seconds"
            ));
        }
        self.settings.validation = None;
        self.mark_dirty();
        Ok((memory_mb, timeout_secs))
    }

    fn options_mut(&mut self, control: ControlId) -> &mut Vec<SelectOption> {
        match control {
            ControlId::Scripts => &mut self.scripts,
            ControlId::Metrics => &mut self.metrics,
            ControlId::Memory => &mut self.memory,
        }
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
