//! Character-budget helpers shared by the extractor and the prompt builder.

/// Extracted page text embedded in any prompt is cut to this many characters.
pub const MAX_PROMPT_CHARS: usize = 4000;

/// Returns the first `max_chars` Unicode scalar values of `text`.
///
/// Never splits a multi-byte character. Silent: callers that care whether
/// anything was dropped compare lengths themselves.
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_chars("hello", 4000), "hello");
    }

    #[test]
    fn long_text_is_cut_to_budget() {
        let text = "a".repeat(MAX_PROMPT_CHARS + 500);
        assert_eq!(truncate_chars(&text, MAX_PROMPT_CHARS).chars().count(), MAX_PROMPT_CHARS);
    }

    #[test]
    fn exact_budget_is_kept() {
        let text = "b".repeat(MAX_PROMPT_CHARS);
        assert_eq!(truncate_chars(&text, MAX_PROMPT_CHARS), text);
    }

    #[test]
    fn counts_characters_not_bytes() {
        let text = "é".repeat(10);
        let cut = truncate_chars(&text, 3);
        assert_eq!(cut, "ééé");
        assert_eq!(cut.len(), 6);
    }

    #[test]
    fn zero_budget_is_empty() {
        assert_eq!(truncate_chars("anything", 0), "");
    }
}
