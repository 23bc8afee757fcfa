use crate::options::SelectOption;

/// Immutable snapshot of a panel page for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PanelViewModel {
    pub content_ready: bool,
    pub editor_text: String,
    pub load_error: Option<String>,
    pub scripts: Vec<SelectOption>,
    pub metrics: Vec<SelectOption>,
    pub memory: Vec<SelectOption>,
    pub timeout_raw: String,
    pub validation: Option<String>,
    pub dirty: bool,
}
