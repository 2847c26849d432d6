//! Locator URLs for notes

use crate::config::PUBLIC_BASE;

/// Editor preview URL for a draft, used when the API does not return one
pub fn draft_fallback_url(note_key: &str) -> String {
    format!("{}/notes/{}?draft=1", PUBLIC_BASE, note_key)
}
