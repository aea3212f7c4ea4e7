//! Flat `key=value` text format, the shape `java.util.Properties` files have.

use chrono::Utc;
use std::collections::HashMap;

/// Parse a properties document into a key/value map.
///
/// Blank lines and lines starting with `#` or `!` are skipped. Lines without
/// an `=` separator are ignored. Escape sequences are not interpreted; the
/// values stored here never contain them.
pub fn parse(content: &str) -> HashMap<String, String> {
    let mut entries = HashMap::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            entries.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    entries
}

/// Render entries as a properties document, preceded by a timestamp comment.
pub fn render(entries: &[(&str, &str)]) -> String {
    let mut out = format!("#{}\n", Utc::now().format("%a %b %e %H:%M:%S UTC %Y"));
    for (key, value) in entries {
        out.push_str(key);
        out.push('=');
        out.push_str(value);
        out.push('\n');
    }
    out
}
