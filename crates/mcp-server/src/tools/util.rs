/// First `max_chars` characters of `input` (char boundaries, not bytes).
pub(super) fn truncate_to_chars(input: &str, max_chars: usize) -> String {
    let mut cut_byte = input.len();
    for (seen, (idx, _)) in input.char_indices().enumerate() {
        if seen == max_chars {
            cut_byte = idx;
            break;
        }
    }
    input[..cut_byte].to_string()
}

/// Card preview: the first `max_chars` characters, with `...` appended when cut.
pub(super) fn preview(input: &str, max_chars: usize) -> String {
    let mut out = truncate_to_chars(input, max_chars);
    if out.len() < input.len() {
        out.push_str("...");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_respects_char_boundaries() {
        assert_eq!(truncate_to_chars("héllo", 2), "hé");
        assert_eq!(truncate_to_chars("abc", 10), "abc");
        assert_eq!(truncate_to_chars("abc", 0), "");
    }

    #[test]
    fn preview_marks_cut_text() {
        assert_eq!(preview("abcdef", 3), "abc...");
        assert_eq!(preview("abc", 3), "abc");
    }
}
