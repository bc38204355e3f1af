use anyhow::{Context, Result, bail};
use makever_utils::detect_indent;
use serde::Serialize;
use serde_json::{Serializer, Value, ser::PrettyFormatter};

/// Set the top-level `version` key to `version`, inserting it if absent.
///
/// Sibling keys and their order are preserved; the output keeps the file's
/// existing indentation and trailing-newline style.
pub fn set_version(content: &str, version: &str) -> Result<String> {
    let mut manifest: Value =
        serde_json::from_str(content).context("manifest is not valid JSON")?;
    let Some(object) = manifest.as_object_mut() else {
        bail!("manifest is not a top-level JSON object");
    };
    object.insert("version".to_string(), Value::String(version.to_string()));

    let indent = detect_indent(content);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    manifest
        .serialize(&mut serializer)
        .context("unable to serialize manifest")?;

    let mut out = String::from_utf8(buf).context("serialized manifest is not UTF-8")?;
    if content.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}

/// Current `version` string in the manifest, `None` when absent or not a
/// string value.
pub fn find_version(content: &str) -> Result<Option<String>> {
    let manifest: Value = serde_json::from_str(content).context("manifest is not valid JSON")?;
    let Some(object) = manifest.as_object() else {
        bail!("manifest is not a top-level JSON object");
    };
    Ok(object
        .get("version")
        .and_then(Value::as_str)
        .map(String::from))
}
