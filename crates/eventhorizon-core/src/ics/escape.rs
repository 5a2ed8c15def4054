//! iCalendar text escaping and line folding (RFC 5545 §3.1, §3.3.11).

/// Maximum length of a physical content line.
pub const MAX_LINE_LENGTH: usize = 75;

/// Line terminator mandated by RFC 5545.
pub const CRLF: &str = "\r\n";

/// Escapes text for an iCalendar TEXT value.
///
/// Backslash, semicolon and comma are prefixed with a backslash. Every line
/// break (CRLF, lone CR, lone LF) becomes the two-character sequence `\n`.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\r' => {
                chars.next_if_eq(&'\n');
                out.push_str("\\n");
            }
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out
}

/// Reverses [`escape_text`].
///
/// Line breaks decode to LF. An unknown escape keeps the escaped character.
pub fn unescape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n' | 'N') => out.push('\n'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

/// Folds a content line so no physical line exceeds [`MAX_LINE_LENGTH`].
///
/// The first segment holds 75 characters; each continuation starts with a
/// single space followed by up to 74 characters. Segments are joined with
/// CRLF. Lengths are counted in characters, so a multi-byte character is
/// never split.
pub fn fold_line(line: &str) -> String {
    if line.chars().count() <= MAX_LINE_LENGTH {
        return line.to_string();
    }

    let mut out = String::with_capacity(line.len() + line.len() / MAX_LINE_LENGTH * 3);
    let mut chars = line.chars();
    out.extend(chars.by_ref().take(MAX_LINE_LENGTH));

    loop {
        let segment: String = chars.by_ref().take(MAX_LINE_LENGTH - 1).collect();
        if segment.is_empty() {
            break;
        }
        out.push_str(CRLF);
        out.push(' ');
        out.push_str(&segment);
    }
    out
}

/// Reverses [`fold_line`] over a whole document, returning logical lines.
pub fn unfold(document: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    for physical in document.split(CRLF) {
        match (physical.strip_prefix(' '), lines.last_mut()) {
            (Some(rest), Some(last)) => last.push_str(rest),
            _ => lines.push(physical.to_string()),
        }
    }
    lines
}
