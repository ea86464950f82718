//! HTML index rendering.
//!
//! Stage 2 of the index pipeline. Takes the sorted build entries and
//! produces the complete landing page as a string.
//!
//! The page layout lives in `static/index.html`, embedded at compile time.
//! It holds five placeholders: `{title}`, `{stylesheet}`, `{heading}`,
//! `{intro}` and `{builds}`. The first four come from [`IndexConfig`]; the
//! last receives one indented `<li>` per build, joined by newlines.
//!
//! List items are built with [maud](https://maud.lambda.xyz/), so display
//! names and directory names are HTML-escaped. Config text substituted into
//! the template is escaped the same way.

use crate::config::IndexConfig;
use crate::types::BuildEntry;
use maud::html;

const TEMPLATE: &str = include_str!("../static/index.html");

/// Render the full landing page. Cannot fail; an empty slice yields an
/// empty list.
pub fn render_index(entries: &[BuildEntry], config: &IndexConfig) -> String {
    let builds = render_list_items(entries, config);
    let title = escape_text(&config.title);
    let stylesheet = escape_text(&config.stylesheet);
    let heading = escape_text(&config.heading);
    let intro = escape_text(&config.intro);

    fill_template(
        TEMPLATE.trim_end_matches('\n'),
        &[
            ("title", &title),
            ("stylesheet", &stylesheet),
            ("heading", &heading),
            ("intro", &intro),
            ("builds", &builds),
        ],
    )
}

/// One indented `<li><a href="dir/index.html">name</a></li>` per entry,
/// joined with newlines.
pub fn render_list_items(entries: &[BuildEntry], config: &IndexConfig) -> String {
    let indent = " ".repeat(config.indent);
    entries
        .iter()
        .map(|entry| {
            let item = html! {
                li { a href=(entry.href(&config.entry_point)) { (entry.name) } }
            };
            format!("{indent}{}", item.into_string())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn escape_text(text: &str) -> String {
    html! { (text) }.into_string()
}

/// Replace `{key}` placeholders in a single pass.
///
/// Substituted values are never re-scanned, so a display name containing
/// `{builds}` stays literal. Braces that do not name a known key are kept.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after.find('}').and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v, close))
        });
        match value {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
