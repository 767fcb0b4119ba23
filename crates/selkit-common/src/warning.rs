//! Builder warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used by the selector builder to report fragments it passes through
//! unchanged but that are likely to render as broken CSS.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

fn warning_key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Warn about suspicious input (prints once per unique message)
///
/// # Example
/// ```
/// use selkit_common::warning::warn_once;
///
/// warn_once("selector", "empty class name");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let should_print = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(warning_key(component, message));

    if should_print {
        eprintln!("{}", format!("[selkit {component}] ⚠ {message}").yellow());
    }
}

/// Whether `warn_once` has already reported this exact message.
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    let guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    guard
        .as_ref()
        .is_some_and(|set| set.contains(&warning_key(component, message)))
}

/// Clear all recorded warnings
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
