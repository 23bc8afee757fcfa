/// Value carried by the placeholder entry meaning "nothing chosen yet".
pub const PLACEHOLDER_VALUE: &str = "-1";

/// One entry of a candidate list after boundary parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub value: String,
    pub label: String,
}

/// One entry of a rendered select control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
    pub disabled: bool,
}

/// Previously chosen key(s) delivered with a candidate list.
///
/// `Multi` holds a comma-delimited key set; empty strings count as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriorSelection {
    None,
    Single(String),
    Multi(String),
}

/// How a control behaves when no prior selection matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceholderPolicy {
    /// Prepend a disabled sentinel entry; it stays selected until a real
    /// candidate is.
    Leading { label: String },
    /// No sentinel; the first candidate is selected by default.
    FirstCandidate,
}

/// Build the option list for a select control from a candidate list and the
/// prior selection.
///
/// Candidates keep their list order. When candidates share a key (malformed
/// input), the last occurrence wins the selection; display order is
/// unaffected. An empty candidate list under a `Leading` policy still yields
/// the sentinel-only result, never an empty control.
pub fn reconcile(
    candidates: &[Candidate],
    prior: &PriorSelection,
    placeholder: &PlaceholderPolicy,
) -> Vec<SelectOption> {
    let mut options = Vec::with_capacity(candidates.len() + 1);
    let leading = matches!(placeholder, PlaceholderPolicy::Leading { .. });
    if let PlaceholderPolicy::Leading { label } = placeholder {
        options.push(SelectOption {
            value: PLACEHOLDER_VALUE.to_string(),
            label: label.clone(),
            selected: true,
            disabled: true,
        });
    }
    let base = options.len();
    for candidate in candidates {
        options.push(SelectOption {
            value: candidate.value.clone(),
            label: candidate.label.clone(),
            selected: false,
            disabled: false,
        });
    }

    let mut matched = false;
    match prior {
        PriorSelection::Single(key) if !key.is_empty() => {
            if let Some(idx) = candidates.iter().rposition(|c| c.value == *key) {
                options[base + idx].selected = true;
                matched = true;
            }
        }
        PriorSelection::Multi(keys) if !keys.is_empty() => {
            for token in keys.split(',').map(str::trim).filter(|t| !t.is_empty()) {
                if let Some(idx) = candidates.iter().rposition(|c| c.value == token) {
                    options[base + idx].selected = true;
                    matched = true;
                }
            }
        }
        PriorSelection::None | PriorSelection::Single(_) | PriorSelection::Multi(_) => {}
    }

    if matched {
        // The sentinel is advisory-only; it never coexists with a real
        // selection.
        if leading {
            options[0].selected = false;
        }
    } else if !leading {
        if let Some(first) = options.first_mut() {
            first.selected = true;
        }
    }

    options
}

/// Move the single selection of a populated control to `value`.
///
/// Falls back to the sentinel when `value` matches no real entry.
pub fn apply_single_selection(options: &mut [SelectOption], value: &str) {
    for option in options.iter_mut() {
        option.selected = false;
    }
    match options
        .iter()
        .rposition(|o| !o.disabled && o.value == value)
    {
        Some(idx) => options[idx].selected = true,
        None => {
            if let Some(sentinel) = sentinel_mut(options) {
                sentinel.selected = true;
            }
        }
    }
}

/// Toggle one entry of a populated multi-select control.
///
/// Keeps the sentinel invariant: it is selected iff no real entry is.
pub fn toggle_multi_selection(options: &mut [SelectOption], value: &str) {
    if let Some(idx) = options
        .iter()
        .rposition(|o| !o.disabled && o.value == value)
    {
        options[idx].selected = !options[idx].selected;
    }
    let any_real = options.iter().any(|o| !o.disabled && o.selected);
    if let Some(sentinel) = sentinel_mut(options) {
        sentinel.selected = !any_real;
    }
}

fn sentinel_mut(options: &mut [SelectOption]) -> Option<&mut SelectOption> {
    options
        .iter_mut()
        .find(|o| o.disabled && o.value == PLACEHOLDER_VALUE)
}
