// Text helpers shared by cards and the search popover

/// Cut `text` to at most `max_chars` characters, appending `...` when cut
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}...", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 150), "short");
        assert_eq!(truncate_text("abcdef ghij", 7), "abcdef...");
        assert_eq!(truncate_text("éèàùç", 3), "éèà...");
    }
}
