//! Escape tables for reserved characters.
//!
//! Two modes selected at configuration time: named entity references or
//! numeric (hexadecimal) character references. Escaping applies to text
//! content and attribute values only, never to comments, CDATA sections, or
//! already-assembled markup.

/// Escaping table selection for reserved characters.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum EscapeMode {
    /// Named entity references: `&amp;`, `&lt;`, `&gt;`, `&quot;`.
    #[default]
    Named,
    /// Numeric character references: `&#x26;`, `&#x3C;`, `&#x3E;`, `&#x22;`.
    Hex,
}

impl EscapeMode {
    /// Replacement for a reserved text character, if it is one.
    #[inline]
    fn text_replacement(self, c: char) -> Option<&'static str> {
        match (self, c) {
            (EscapeMode::Named, '&') => Some("&amp;"),
            (EscapeMode::Named, '<') => Some("&lt;"),
            (EscapeMode::Named, '>') => Some("&gt;"),
            (EscapeMode::Hex, '&') => Some("&#x26;"),
            (EscapeMode::Hex, '<') => Some("&#x3C;"),
            (EscapeMode::Hex, '>') => Some("&#x3E;"),
            _ => None,
        }
    }

    /// Replacement for a reserved attribute-value character. Attribute
    /// values additionally escape the double quote that delimits them.
    #[inline]
    fn attr_replacement(self, c: char) -> Option<&'static str> {
        match (self, c) {
            (EscapeMode::Named, '"') => Some("&quot;"),
            (EscapeMode::Hex, '"') => Some("&#x22;"),
            _ => self.text_replacement(c),
        }
    }
}

fn escape_with(text: &str, replace: impl Fn(char) -> Option<&'static str>) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match replace(c) {
            Some(replacement) => out.push_str(replacement),
            None => out.push(c),
        }
    }
    out
}

/// Escape `&`, `<`, `>` in character data under the given mode.
pub fn escape_text(text: &str, mode: EscapeMode) -> String {
    escape_with(text, |c| mode.text_replacement(c))
}

/// Escape `&`, `<`, `>`, `"` in an attribute value under the given mode.
pub fn escape_attribute(value: &str, mode: EscapeMode) -> String {
    escape_with(value, |c| mode.attr_replacement(c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn named_mode_escapes_reserved_text() {
        assert_eq!(
            escape_text("fish & <chips>", EscapeMode::Named),
            "fish &amp; &lt;chips&gt;"
        );
    }

    #[test]
    fn hex_mode_uses_numeric_references() {
        assert_eq!(
            escape_text("a & b", EscapeMode::Hex),
            "a &#x26; b"
        );
        assert_eq!(escape_text("<>", EscapeMode::Hex), "&#x3C;&#x3E;");
    }

    #[test]
    fn attribute_values_escape_quotes_too() {
        assert_eq!(
            escape_attribute("say \"hi\" & go", EscapeMode::Named),
            "say &quot;hi&quot; &amp; go"
        );
        assert_eq!(escape_attribute("\"", EscapeMode::Hex), "&#x22;");
    }

    #[test]
    fn unreserved_text_passes_through() {
        assert_eq!(escape_text("plain text", EscapeMode::Named), "plain text");
        assert_eq!(escape_text("", EscapeMode::Hex), "");
    }

    #[test]
    fn ampersand_in_replacement_is_not_rescanned() {
        // Single pass: the `&` of an inserted entity is never re-escaped.
        assert_eq!(escape_text("&&", EscapeMode::Named), "&amp;&amp;");
    }
}
