/// Normalizes whitespace in extracted text.
///
/// - runs of spaces, tabs and other horizontal whitespace become one space
/// - every line is trimmed
/// - consecutive blank lines collapse into a single blank line
/// - leading and trailing blank lines are dropped
pub fn clean_extra_whitespaces(text: &str) -> String {
    let mut cleaned = String::with_capacity(text.len());
    let mut pending_blank = false;

    for line in text.lines() {
        let collapsed = collapse_line(line);
        if collapsed.is_empty() {
            pending_blank = !cleaned.is_empty();
            continue;
        }
        if !cleaned.is_empty() {
            cleaned.push('\n');
            if pending_blank {
                cleaned.push('\n');
            }
        }
        cleaned.push_str(&collapsed);
        pending_blank = false;
    }

    cleaned
}

fn collapse_line(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::collapse_line;

    #[test]
    fn collapse_line_handles_tabs_and_nbsp() {
        assert_eq!(collapse_line("\ta \t b\u{a0}\u{a0}c  "), "a b c");
    }
}
