//! Workflow command and command file formatting.
//!
//! Workflow commands are single stdout lines of the form
//! `::name key=value,key=value::message`. Command files (`GITHUB_ENV`,
//! `GITHUB_STATE`) take `NAME<<DELIMITER` heredoc blocks.

use uuid::Uuid;

use crate::error::{HostError, Result};

/// Format a workflow command line.
pub fn format(command: &str, properties: &[(&str, &str)], message: &str) -> String {
    let mut line = format!("::{}", command);

    if !properties.is_empty() {
        line.push(' ');
        let props = properties
            .iter()
            .map(|(k, v)| format!("{}={}", k, escape_property(v)))
            .collect::<Vec<_>>()
            .join(",");
        line.push_str(&props);
    }

    line.push_str("::");
    line.push_str(&escape_data(message));
    line
}

/// Escape a command message.
pub fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a command property value.
pub fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}

/// Build a heredoc block for a command file using a fresh random delimiter.
///
/// # Errors
///
/// Returns `HostError::DelimiterCollision` if the name or value contains the
/// delimiter.
pub fn key_value_message(name: &str, value: &str) -> Result<String> {
    key_value_message_with(name, value, &format!("ghadelimiter_{}", Uuid::new_v4()))
}

fn key_value_message_with(name: &str, value: &str, delimiter: &str) -> Result<String> {
    if name.contains(delimiter) {
        return Err(HostError::DelimiterCollision {
            field: "name",
            delimiter: delimiter.to_string(),
        }
        .into());
    }
    if value.contains(delimiter) {
        return Err(HostError::DelimiterCollision {
            field: "value",
            delimiter: delimiter.to_string(),
        }
        .into());
    }

    Ok(format!("{name}<<{delimiter}\n{value}\n{delimiter}"))
}
