use std::sync::LazyLock;

use makever_core::VersionTriple;
use regex::Regex;

static VERSION_STR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^#define ESP8266AUDIO_VERSION_STR "([^"]+)""#)
        .expect("hardcoded regex must compile")
});

/// Render the complete version header for `version`.
///
/// The header is a pure function of the triple; prior file contents are
/// never consulted.
#[must_use]
pub fn render_header(version: &VersionTriple) -> String {
    format!(
        "#pragma once\n\
         #define ESP8266AUDIO_MAJOR {}\n\
         #define ESP8266AUDIO_MINOR {}\n\
         #define ESP8266AUDIO_REVISION {}\n\
         #define ESP8266AUDIO_VERSION_STR \"{}\"\n",
        version.major, version.minor, version.sub, version
    )
}

/// Version string from the `ESP8266AUDIO_VERSION_STR` define, `None` when
/// the define is missing.
#[must_use]
pub fn find_version(content: &str) -> Option<&str> {
    VERSION_STR_PATTERN
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
