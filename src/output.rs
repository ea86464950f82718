//! CLI output for the `list` command.
//!
//! # Output Format
//!
//! ```text
//! 001 Alpha Build → beta/index.html
//! 002 Zeta Build → alpha/index.html
//!
//! Found 2 builds
//! ```
//!
//! Each output has a `format_*` function (returns `Vec<String>` or `String`)
//! for testability and a `print_*` wrapper that writes to stdout.

use crate::types::BuildEntry;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn display_name(name: &str) -> &str {
    if name.is_empty() { "(unnamed)" } else { name }
}

fn summary(count: usize) -> String {
    match count {
        1 => "Found 1 build".to_string(),
        n => format!("Found {n} builds"),
    }
}

/// Format discovered builds as one line each plus a summary.
pub fn format_list_output(entries: &[BuildEntry], entry_point: &str) -> Vec<String> {
    let mut lines: Vec<String> = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            format!(
                "{} {} \u{2192} {}",
                format_index(i + 1),
                display_name(&entry.name),
                entry.href(entry_point)
            )
        })
        .collect();

    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(summary(entries.len()));
    lines
}

/// Format discovered builds as a pretty-printed JSON array.
pub fn format_list_json(entries: &[BuildEntry]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(entries)
}

/// Print the `list` output to stdout.
pub fn print_list_output(entries: &[BuildEntry], entry_point: &str) {
    for line in format_list_output(entries, entry_point) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_show_index_name_and_link() {
        let entries = vec![
            BuildEntry::new("Alpha Build", "beta"),
            BuildEntry::new("Zeta Build", "alpha"),
        ];
        let lines = format_list_output(&entries, "index.html");
        assert_eq!(
            lines,
            vec![
                "001 Alpha Build \u{2192} beta/index.html",
                "002 Zeta Build \u{2192} alpha/index.html",
                "",
                "Found 2 builds",
            ]
        );
    }

    #[test]
    fn empty_name_shown_as_unnamed() {
        let entries = vec![BuildEntry::new("", "blank")];
        let lines = format_list_output(&entries, "index.html");
        assert_eq!(lines[0], "001 (unnamed) \u{2192} blank/index.html");
        assert_eq!(lines[2], "Found 1 build");
    }

    #[test]
    fn no_builds_prints_summary_only() {
        let lines = format_list_output(&[], "index.html");
        assert_eq!(lines, vec!["Found 0 builds"]);
    }

    #[test]
    fn json_lists_name_and_dir() {
        let entries = vec![BuildEntry::new("Alpha Build", "beta")];
        let json = format_list_json(&entries).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["name"], "Alpha Build");
        assert_eq!(value[0]["dir"], "beta");
    }

    #[test]
    fn json_for_no_builds_is_empty_array() {
        assert_eq!(format_list_json(&[]).unwrap(), "[]");
    }
}
