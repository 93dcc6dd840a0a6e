//! Light markup for bot responses.
//!
//! The backend answers in a loose markdown dialect: `**bold**`, `*italic*`
//! and bullet lines starting with `•` or `*`. The transform runs in a fixed
//! order (bold, italic, bullets, list grouping, line breaks) and escapes the
//! raw text first, so nothing the backend sends can introduce its own tags.

use once_cell::sync::Lazy;
use regex::Regex;

static BOLD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern is valid"));
static ITALIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*(.*?)\*").expect("italic pattern is valid"));

const BULLET_MARKERS: [char; 2] = ['•', '*'];

enum Line<'a> {
    Text(&'a str),
    Item(&'a str),
}

pub fn format_bot_response(text: &str) -> String {
    let escaped = escape_html(text);
    let bolded = BOLD.replace_all(&escaped, "<strong>${1}</strong>");
    let emphasized = ITALIC.replace_all(&bolded, "<em>${1}</em>");

    let lines = emphasized.split('\n').map(classify_line).collect::<Vec<_>>();
    join_lines(&lines)
}

/// Escapes the characters that would otherwise be parsed as markup in
/// element content. Quotes are left alone; the output never lands in an
/// attribute.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
    out
}

fn classify_line(line: &str) -> Line<'_> {
    let trimmed = line.trim_start();
    let Some(rest) = trimmed.strip_prefix(BULLET_MARKERS) else {
        return Line::Text(line);
    };
    // The marker must be followed by whitespace, otherwise it is just text.
    if rest.starts_with(char::is_whitespace) {
        Line::Item(rest.trim_start())
    } else {
        Line::Text(line)
    }
}

fn join_lines(lines: &[Line<'_>]) -> String {
    let mut segments: Vec<String> = Vec::new();
    let mut list: Option<String> = None;

    for line in lines {
        match line {
            Line::Item(content) => {
                let items = list.get_or_insert_with(String::new);
                items.push_str("<li>");
                items.push_str(content);
                items.push_str("</li>");
            }
            Line::Text(content) => {
                if let Some(items) = list.take() {
                    segments.push(format!("<ul>{items}</ul>"));
                }
                segments.push((*content).to_string());
            }
        }
    }
    if let Some(items) = list.take() {
        segments.push(format!("<ul>{items}</ul>"));
    }

    segments.join("<br>")
}
