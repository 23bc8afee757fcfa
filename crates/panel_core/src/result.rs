use std::fmt;

/// Outcome of one user-triggered panel action, posted to the extension host.
///
/// Constructed once per action and serialized immediately; the error and
/// canceled cases are distinct variants, so they can never both be set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResult {
    Success { payload: ResultPayload },
    Error { message: String },
    Canceled { reason: String },
}

/// Closed set of success payloads, keyed by the command they travel with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultPayload {
    Empty,
    /// Encoded or raw script content.
    Content(String),
    /// Numeric function settings.
    Settings { memory_mb: u32, timeout_secs: u32 },
}

/// Outbound command vocabulary understood by the extension host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ContentLoaded,
    ContentSubmitted,
    SettingsUpdated,
    DownloadCompleted,
}

impl Command {
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::ContentLoaded => "contentLoaded",
            Command::ContentSubmitted => "contentSubmitted",
            Command::SettingsUpdated => "settingsUpdated",
            Command::DownloadCompleted => "downloadCompleted",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
