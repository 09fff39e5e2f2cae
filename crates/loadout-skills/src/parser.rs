//! SKILL.md document parser.
//!
//! Parsing is total: every malformed or absent piece of structure degrades
//! to a default, so any input yields a usable [`Skill`]. The frontmatter
//! grammar is the simple `key: value` subset of YAML that SKILL.md files
//! use in practice, plus the two list forms for `triggerKeywords`.

use crate::skill::{Skill, TriggerMode};

const FALLBACK_NAME: &str = "Unnamed Skill";
const DEFAULT_SCAN_DEPTH: u32 = 3;

/// Parse a SKILL.md document into a [`Skill`].
///
/// ```
/// use loadout_skills::parse_skill_md;
///
/// let skill = parse_skill_md("---\nname: demo\n---\n\n# Demo\nBody.");
/// assert_eq!(skill.name, "demo");
/// assert_eq!(skill.content, "# Demo\nBody.");
/// ```
pub fn parse_skill_md(raw: &str) -> Skill {
    let trimmed = raw.trim();
    let (front, body) = split_front_matter(trimmed);
    let body = body.trim();

    let name = scalar(front, "name")
        .filter(|n| !n.trim().is_empty())
        .or_else(|| first_heading(body))
        .unwrap_or_else(|| FALLBACK_NAME.to_string());

    Skill {
        name,
        description: scalar(front, "description").unwrap_or_default(),
        author: scalar(front, "author").unwrap_or_default(),
        version: scalar(front, "version").unwrap_or_else(|| "1.0.0".into()),
        content: body.to_string(),
        trigger_mode: scalar(front, "triggerMode")
            .map(|v| TriggerMode::parse_lossy(&v))
            .unwrap_or_default(),
        trigger_keywords: keyword_list(front, "triggerKeywords"),
        use_regex: parse_bool(scalar(front, "useRegex")),
        case_sensitive: parse_bool(scalar(front, "caseSensitive")),
        scan_depth: parse_scan_depth(scalar(front, "scanDepth")),
        ..Skill::default()
    }
}

/// Split a trimmed document into (frontmatter, body).
///
/// The frontmatter is the text strictly between an opening line consisting
/// solely of `---` and the next such line. A missing closing delimiter
/// means no frontmatter at all: the whole document is the body.
fn split_front_matter(doc: &str) -> (&str, &str) {
    let Some(rest) = doc.strip_prefix("---") else {
        return ("", doc);
    };
    let Some(newline) = rest.find('\n') else {
        return ("", doc);
    };
    if !rest[..newline].trim().is_empty() {
        return ("", doc);
    }

    let after_open = &rest[newline + 1..];
    let mut offset = 0;
    for line in after_open.split_inclusive('\n') {
        if line.trim() == "---" {
            let front = &after_open[..offset];
            let body = &after_open[offset + line.len()..];
            return (front, body);
        }
        offset += line.len();
    }
    ("", doc)
}

/// Extract a scalar `key: value` line from the frontmatter, trimming the
/// value and stripping one layer of matching surrounding quotes.
fn scalar(front: &str, key: &str) -> Option<String> {
    for line in front.lines() {
        if let Some((k, v)) = line.split_once(':') {
            if k.trim() == key {
                return Some(unquote(v.trim()).to_string());
            }
        }
    }
    None
}

/// Extract a keyword list in either accepted form:
/// block-dash (`key:` followed by `- item` lines) or inline
/// (`key: [a, b, c]`). Anything else yields an empty list.
fn keyword_list(front: &str, key: &str) -> Vec<String> {
    let mut lines = front.lines().peekable();
    while let Some(line) = lines.next() {
        let Some((k, v)) = line.split_once(':') else {
            continue;
        };
        if k.trim() != key {
            continue;
        }
        let value = v.trim();

        if value.is_empty() {
            let mut items = Vec::new();
            while let Some(next) = lines.peek() {
                let Some(item) = next.trim().strip_prefix('-') else {
                    break;
                };
                let item = item.trim();
                if !item.is_empty() {
                    items.push(item.to_string());
                }
                lines.next();
            }
            return items;
        }

        if let Some(inner) = value.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            return inner
                .split(',')
                .map(|item| unquote(item.trim()).to_string())
                .filter(|item| !item.is_empty())
                .collect();
        }

        return Vec::new();
    }
    Vec::new()
}

/// First markdown heading (`#`s, whitespace, text) in the body.
fn first_heading(body: &str) -> Option<String> {
    for line in body.lines() {
        let hashes = line.len() - line.trim_start_matches('#').len();
        if hashes == 0 {
            continue;
        }
        let rest = &line[hashes..];
        if rest.starts_with(char::is_whitespace) {
            let text = rest.trim();
            if !text.is_empty() {
                return Some(text.to_string());
            }
        }
    }
    None
}

fn parse_bool(value: Option<String>) -> bool {
    value.is_some_and(|v| v.eq_ignore_ascii_case("true"))
}

fn parse_scan_depth(value: Option<String>) -> u32 {
    value
        .and_then(|v| v.parse::<u32>().ok())
        .filter(|n| *n >= 1)
        .unwrap_or(DEFAULT_SCAN_DEPTH)
}

/// Remove one layer of matching surrounding quotes from a value.
fn unquote(s: &str) -> &str {
    let bytes = s.as_bytes();
    if bytes.len() >= 2
        && ((bytes[0] == b'"' && bytes[bytes.len() - 1] == b'"')
            || (bytes[0] == b'\'' && bytes[bytes.len() - 1] == b'\''))
    {
        &s[1..s.len() - 1]
    } else {
        s
    }
}
