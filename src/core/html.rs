// src/core/html.rs
// Tolerant attribute scanning; no DOM. Good enough for listing pages.

/// Every `href` value in `doc`, in document order.
/// Accepts `href="…"`, `href='…'` and bare `href=…`; attribute name is case-insensitive.
pub fn hrefs(doc: &str) -> Vec<&str> {
    // ASCII lowercasing keeps byte offsets identical to `doc`
    let lc = doc.to_ascii_lowercase();
    let b = doc.as_bytes();
    let n = b.len();

    let mut out = Vec::new();
    let mut pos = 0usize;

    while let Some(rel) = lc.get(pos..).and_then(|s| s.find("href")) {
        let mut i = pos + rel + 4;
        pos = i;

        // must be an attribute name, not part of a longer word
        let at = i - 4;
        if at > 0 && (b[at - 1].is_ascii_alphanumeric() || b[at - 1] == b'-') {
            continue;
        }

        while i < n && b[i].is_ascii_whitespace() { i += 1; }
        if i >= n || b[i] != b'=' { continue; }
        i += 1;
        while i < n && b[i].is_ascii_whitespace() { i += 1; }
        if i >= n { break; }

        let (start, end) = match b[i] {
            q @ (b'"' | b'\'') => {
                let start = i + 1;
                match doc[start..].find(q as char) {
                    Some(off) => (start, start + off),
                    None => break, // unterminated; nothing sane left
                }
            }
            _ => {
                let start = i;
                let mut j = i;
                while j < n && !b[j].is_ascii_whitespace() && b[j] != b'>' { j += 1; }
                (start, j)
            }
        };

        out.push(&doc[start..end]);
        pos = end;
    }

    out
}

/// Minimal entity decoding for attribute values.
pub fn decode_entities(s: &str) -> String {
    s.replace("&amp;", "&").replace("&#47;", "/").replace("&nbsp;", " ")
}
