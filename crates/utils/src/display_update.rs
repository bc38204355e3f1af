use colored::*;

/// Render a `current -> next` version transition for terminal output.
pub fn display_update(current: Option<&str>, next: &str) -> String {
    let current = current
        .map(|version| format!("v{version}"))
        .unwrap_or_else(|| "none".to_string());
    format!(
        "{} {} {}",
        current.bright_yellow(),
        "→".bright_cyan(),
        format!("v{next}").bright_green().bold()
    )
}
