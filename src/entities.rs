//! HTML character entity decoding.
//!
//! Decodes the small fixed entity set that survives the extraction paths.
//! Unknown entities pass through unchanged; numeric references other than
//! `&#39;` are not handled.

/// Entity replacements, applied in order. `&amp;` decodes first so that
/// entities containing a literal `&` are not unescaped twice.
const ENTITIES: &[(&str, &str)] = &[
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&nbsp;", " "),
];

/// Decode the known HTML entities in `text`.
///
/// Reaches a fixed point: once no encoded entities remain, re-decoding
/// returns the input unchanged.
#[must_use]
pub fn decode(text: &str) -> String {
    let mut out = text.to_string();
    for (entity, replacement) in ENTITIES {
        if out.contains(entity) {
            out = out.replace(entity, replacement);
        }
    }
    out
}

/// Encode text for safe placement inside an HTML text node or quoted
/// attribute value.
#[must_use]
pub fn encode_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
