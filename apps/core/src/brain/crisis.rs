//! Output-side crisis detection.
//!
//! Scans the produced reply text, not the user's input, for literal crisis
//! markers. Any reply containing a marker triggers the out-of-band advisory,
//! independent of which category produced it.

/// The crisis hotline number carried by crisis-support replies.
pub const CRISIS_HOTLINE_MARKER: &str = "988";

/// Literal word identifying crisis-hotline content. Case-sensitive.
pub const CRISIS_WORD_MARKER: &str = "Crisis";

/// Returns true when the reply text carries a crisis marker.
pub fn detects_crisis_signal(reply_text: &str) -> bool {
    reply_text.contains(CRISIS_HOTLINE_MARKER) || reply_text.contains(CRISIS_WORD_MARKER)
}
