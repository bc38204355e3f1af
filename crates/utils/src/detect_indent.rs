/// Returns the leading whitespace of the first indented line in `content`.
///
/// Falls back to four spaces when no line is indented, so freshly written or
/// compact files pick up the conventional manifest indentation.
#[must_use]
pub fn detect_indent(content: &str) -> String {
    for line in content.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let indent = &line[..line.len() - line.trim_start().len()];
        if !indent.is_empty() {
            return indent.to_string();
        }
    }
    "    ".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case("{\n  \"foo\": \"bar\"\n}", "  ")]
    #[case("{\n    \"foo\": \"bar\"\n}", "    ")]
    #[case("{\n\t\"key\": \"value\"\n}", "\t")]
    #[case("{\n\t\t\"key\": \"value\"\n}", "\t\t")]
    #[case("{\"compact\":true}", "    ")]
    #[case("", "    ")]
    #[case("   \n\t\n", "    ")] // blank lines only
    #[case("{\n\n\n  \"after_blanks\": true\n}", "  ")]
    #[case("{\n   \"three\": 3\n}", "   ")]
    #[case("line1\nline2", "    ")] // nothing indented at all
    #[case("{\n  \"a\": 1,\n        \"b\": 2\n}", "  ")] // first indented line wins
    fn test_detect_indent(#[case] content: &str, #[case] expected: &str) {
        assert_eq!(detect_indent(content), expected);
    }
}
