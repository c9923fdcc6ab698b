//! Tag-based HTML re-indentation.
//!
//! A heuristic line formatter, not an HTML parser: a newline is forced
//! between adjacent tags, then each line is classified by two small
//! predicates to maintain a running indent depth. The pass is deterministic
//! and idempotent on its own output, which matters because converted pages
//! are overwritten on every build.
//!
//! The classification is deliberately shallow. Attributes spanning lines,
//! text mixed with tags on one line, or malformed markup all fall through to
//! plain-line handling and keep the current depth.

/// Spaces per nesting level.
const INDENT_WIDTH: usize = 2;

/// Reformat an HTML string into indented lines.
///
/// Every `><` boundary becomes a line break, then lines are emitted trimmed
/// and prefixed with the current indent. A closing tag dedents before its
/// own line is emitted; a line that is exactly one opening tag indents the
/// lines after it. Input without tag boundaries comes back unchanged.
pub fn prettify(html: &str) -> String {
    let separated = html.replace("><", ">\n<");
    let mut depth: usize = 0;
    let mut lines: Vec<String> = Vec::new();
    for raw in separated.split('\n') {
        let line = raw.trim();
        if is_closing_tag_start(line) {
            depth = depth.saturating_sub(1);
        }
        lines.push(format!("{}{}", " ".repeat(INDENT_WIDTH * depth), line));
        if is_single_opening_tag(line) && tag_name(line) != "br" {
            depth += 1;
        }
    }
    lines.join("\n")
}

/// True when the line opens with a closing tag: `</` followed by a tag-name
/// character.
fn is_closing_tag_start(line: &str) -> bool {
    let bytes = line.as_bytes();
    bytes.len() >= 3 && bytes[0] == b'<' && bytes[1] == b'/' && is_word_byte(bytes[2])
}

/// True when the whole line is a single opening tag: starts `<` plus a
/// tag-name character, ends `>` not preceded by `/`, and contains no other
/// `>` before its final two characters.
///
/// The shape requires at least four characters, so a bare single-letter tag
/// like `<p>` never indents. That floor is part of the output contract.
fn is_single_opening_tag(line: &str) -> bool {
    let bytes = line.as_bytes();
    if bytes.len() < 4 {
        return false;
    }
    if bytes[0] != b'<' || !is_word_byte(bytes[1]) {
        return false;
    }
    if bytes[bytes.len() - 1] != b'>' || bytes[bytes.len() - 2] == b'/' {
        return false;
    }
    !bytes[2..bytes.len() - 2].contains(&b'>')
}

/// Tag name directly after the opening `<`. Empty for closing tags and
/// non-tag lines.
fn tag_name(line: &str) -> &str {
    let rest = &line[1..];
    let end = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(rest.len());
    &rest[..end]
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
