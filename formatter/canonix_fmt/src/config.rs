//! Formatter configuration.
//!
//! An explicit options struct with documented defaults, validated once when a
//! formatter is constructed. Options are immutable for the lifetime of a run.

use rustc_hash::FxHashSet;

use crate::escape::EscapeMode;

/// Default indentation unit: two spaces per depth level.
pub const DEFAULT_INDENT: &str = "  ";

/// Configuration for one formatting run.
///
/// The three name sets assign formatting classes to elements; membership must
/// be disjoint (validated by [`Classifier::from_options`]).
///
/// [`Classifier::from_options`]: crate::classify::Classifier::from_options
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FormatOptions {
    /// Elements forcing newline + indent on both open and close.
    pub block: FxHashSet<String>,

    /// Elements forcing newline + indent on open only; still eligible for
    /// self-close collapse when empty.
    pub compact: FxHashSet<String>,

    /// Elements with no forced breaks; whitespace-sensitive context.
    pub inline: FxHashSet<String>,

    /// Preserve text whitespace when directly under inline/compact context.
    /// Defaults to `true`.
    pub preserve_whitespace: bool,

    /// Elements never collapsed to self-closing form, even when empty.
    pub close_tags: FxHashSet<String>,

    /// Escaping table for `&`, `<`, `>` in text content. Defaults to
    /// [`EscapeMode::Named`].
    pub escape_mode: EscapeMode,

    /// Pass namespace-qualified names through instead of flattening to
    /// local names. Defaults to `false`.
    pub use_namespaces: bool,

    /// Indentation unit repeated per depth level. Defaults to two spaces.
    /// Must not contain line breaks.
    pub indent_unit: String,

    /// Apply canonical Unicode normalization (NFC) to text content.
    /// Defaults to `false`.
    pub normalize_unicode: bool,

    /// Text directly under these elements keeps its line breaks and is never
    /// edge-trimmed.
    pub preserve_linebreaks: FxHashSet<String>,

    /// Place comments arriving in block/default context on their own
    /// indented line. Defaults to `false` (comments append verbatim).
    pub contextual_comments: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            block: FxHashSet::default(),
            compact: FxHashSet::default(),
            inline: FxHashSet::default(),
            preserve_whitespace: true,
            close_tags: FxHashSet::default(),
            escape_mode: EscapeMode::Named,
            use_namespaces: false,
            indent_unit: DEFAULT_INDENT.to_owned(),
            normalize_unicode: false,
            preserve_linebreaks: FxHashSet::default(),
            contextual_comments: false,
        }
    }
}

impl FormatOptions {
    /// Create options with the three class sets populated from name lists.
    pub fn with_classes(block: &[&str], compact: &[&str], inline: &[&str]) -> Self {
        fn names(list: &[&str]) -> FxHashSet<String> {
            list.iter().copied().map(str::to_owned).collect()
        }
        FormatOptions {
            block: names(block),
            compact: names(compact),
            inline: names(inline),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_documented_values() {
        let options = FormatOptions::default();
        assert!(options.preserve_whitespace);
        assert!(!options.use_namespaces);
        assert!(!options.normalize_unicode);
        assert!(!options.contextual_comments);
        assert_eq!(options.escape_mode, EscapeMode::Named);
        assert_eq!(options.indent_unit, "  ");
        assert!(options.block.is_empty());
        assert!(options.close_tags.is_empty());
        assert!(options.preserve_linebreaks.is_empty());
    }

    #[test]
    fn with_classes_populates_sets() {
        let options = FormatOptions::with_classes(&["root", "div"], &["p"], &["i"]);
        assert!(options.block.contains("root"));
        assert!(options.block.contains("div"));
        assert!(options.compact.contains("p"));
        assert!(options.inline.contains("i"));
    }
}
