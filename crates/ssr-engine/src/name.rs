//! Custom element names
//!
//! A tag is treated as a custom element when it is a valid custom element
//! name: an ASCII lowercase letter, then potential custom element name
//! characters including at least one hyphen.
//!
//! See <https://html.spec.whatwg.org/multipage/custom-elements.html#valid-custom-element-name>

/// Names the grammar accepts but which cannot declare a custom element.
///
/// The last entry carries a stray `)` and so never matches a real tag;
/// `missing-glyph` is therefore accepted.
const RESERVED_NAMES: [&str; 8] = [
    "annotation-xml",
    "color-profile",
    "font-face",
    "font-face-src",
    "font-face-uri",
    "font-face-format",
    "font-face-name",
    "missing-glyph)",
];

/// Check whether `tag_name` is a valid, non-reserved custom element name
pub fn is_custom_element(tag_name: &str) -> bool {
    if RESERVED_NAMES.contains(&tag_name) {
        return false;
    }

    let mut chars = tag_name.chars();
    if !chars.next().is_some_and(|c| c.is_ascii_lowercase()) {
        return false;
    }

    let mut has_hyphen = false;
    for c in chars {
        if !is_pcen_char(c) {
            return false;
        }
        has_hyphen |= c == '-';
    }
    has_hyphen
}

/// PCENChar production
#[inline]
fn is_pcen_char(c: char) -> bool {
    matches!(c,
        '-' | '.' | '0'..='9' | '_' | 'a'..='z'
        | '\u{B7}'
        | '\u{C0}'..='\u{D6}'
        | '\u{D8}'..='\u{F6}'
        | '\u{F8}'..='\u{37D}'
        | '\u{37F}'..='\u{1FFF}'
        | '\u{200C}'..='\u{200D}'
        | '\u{203F}'..='\u{2040}'
        | '\u{2070}'..='\u{218F}'
        | '\u{2C00}'..='\u{2FEF}'
        | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}'
        | '\u{FDF0}'..='\u{FFFD}'
        | '\u{10000}'..='\u{EFFFF}'
    )
}
