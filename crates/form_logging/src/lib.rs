#![deny(missing_docs)]
//! Shared logging utilities for the text2list workspace.
//!
//! This crate provides the `form_*` logging macros used across the codebase
//! and a minimal test initializer for the global logger. Every line is
//! prefixed with the sequence number of the user action being handled, so a
//! commit and all of its pipeline decisions can be read together.

use std::cell::Cell;

#[doc(hidden)]
pub use log;

thread_local! {
    /// Thread-local sequence number of the user action currently being handled.
    static ACTION_SEQ: Cell<u64> = const { Cell::new(0) };
}

/// Starts a new user action on the current thread and returns its number.
/// The form state machine calls this once per dispatched message.
pub fn begin_action() -> u64 {
    ACTION_SEQ.with(|v| {
        let next = v.get().wrapping_add(1);
        v.set(next);
        next
    })
}

/// Retrieves the number of the action currently being handled on this thread.
/// Returns 0 before the first action.
pub fn current_action() -> u64 {
    ACTION_SEQ.with(|v| v.get())
}

/// Logs a trace-level message tagged with the current action.
#[macro_export]
macro_rules! form_trace {
    ($($arg:tt)*) => {{
        $crate::log::trace!("[action {}] {}", $crate::current_action(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message tagged with the current action.
#[macro_export]
macro_rules! form_debug {
    ($($arg:tt)*) => {{
        $crate::log::debug!("[action {}] {}", $crate::current_action(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message tagged with the current action.
#[macro_export]
macro_rules! form_info {
    ($($arg:tt)*) => {{
        $crate::log::info!("[action {}] {}", $crate::current_action(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message tagged with the current action.
#[macro_export]
macro_rules! form_warn {
    ($($arg:tt)*) => {{
        $crate::log::warn!("[action {}] {}", $crate::current_action(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message tagged with the current action.
#[macro_export]
macro_rules! form_error {
    ($($arg:tt)*) => {{
        $crate::log::error!("[action {}] {}", $crate::current_action(), format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in tests.
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
