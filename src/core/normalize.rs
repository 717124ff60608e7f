use crate::domain::model::InputKind;
use std::borrow::Cow;

/// Lowercases `raw` and drops every `\n`. Carriage returns are kept.
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase().chars().filter(|&c| c != '\n').collect()
}

/// Decodes file bytes as UTF-8, replacing invalid sequences.
pub fn decode_lossy(bytes: &[u8], input: InputKind) -> Cow<'_, str> {
    let text = String::from_utf8_lossy(bytes);
    if matches!(text, Cow::Owned(_)) {
        tracing::warn!(
            "The {} file is not valid UTF-8; invalid bytes were replaced with U+FFFD",
            input
        );
    }
    text
}
