/// Replace every `version=`-prefixed line with `version=<version>\n`.
///
/// All other lines pass through byte-for-byte, keeping their original order
/// and line endings. A file with no `version=` line comes back unchanged.
#[must_use]
pub fn replace_version_lines(content: &str, version: &str) -> String {
    let mut out = String::with_capacity(content.len());
    for line in content.split_inclusive('\n') {
        if line.starts_with("version=") {
            out.push_str("version=");
            out.push_str(version);
            out.push('\n');
        } else {
            out.push_str(line);
        }
    }
    out
}

/// Version value of the first `version=` line, `None` when absent.
#[must_use]
pub fn find_version(content: &str) -> Option<&str> {
    content
        .lines()
        .find_map(|line| line.strip_prefix("version="))
        .map(str::trim_end)
}
