//! The "n / 500 characters" read-out under the ticket description.

use helpdesk_web_ui_shared::utils::js_length;

/// Formats the counter for `text`. Going over `max` is allowed, the count just keeps
/// climbing; enforcing the limit is up to the markup and the server.
pub fn count_display(text: &str, max: usize) -> String {
    format!("{} / {} characters", js_length(text), max)
}
