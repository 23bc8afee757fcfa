#![deny(missing_docs)]
//! Shared logging utilities for the panel workspace.
//!
//! This crate provides the `panel_*` logging macros used across the codebase
//! and a minimal test initializer for the global logger.

use std::cell::RefCell;

thread_local! {
    /// Thread-local storage for the current page label.
    ///
    /// Each panel page runs single-threaded, so a per-thread label is enough
    /// to attribute log lines to the page that emitted them.
    static PAGE_LABEL: RefCell<String> = const { RefCell::new(String::new()) };
}

/// Sets the page label for the current thread.
/// This should be called by the embedding shell when a page session starts.
pub fn set_page_label(label: &str) {
    PAGE_LABEL.with(|v| *v.borrow_mut() = label.to_string());
}

/// Retrieves the page label for the current thread.
/// Returns an empty string if no label has been set.
pub fn get_page_label() -> String {
    PAGE_LABEL.with(|v| v.borrow().clone())
}

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! panel_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! panel_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! panel_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! panel_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! panel_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
