const MAX_VISIBLE_CHARS: usize = 80;

/// Shortens document text for log lines; uploads can run to megabytes and
/// legal documents do not belong in logs wholesale.
pub fn text_preview(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total = trimmed.chars().count();
    if total <= MAX_VISIBLE_CHARS {
        return trimmed.to_string();
    }

    let head: String = trimmed.chars().take(MAX_VISIBLE_CHARS).collect();
    format!("{head}... ({total} chars total)")
}
