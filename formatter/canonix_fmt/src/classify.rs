//! Element classification.
//!
//! Maps element names to formatting classes via the three configured name
//! sets. Built once per run; read-only afterwards.

use rustc_hash::FxHashSet;

use crate::config::FormatOptions;
use crate::error::ConfigError;

/// Formatting class of an element name.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ElementClass {
    /// Newline + indent before both the opening and closing tag.
    Block,
    /// Newline + indent before the opening tag only.
    Compact,
    /// No forced breaks; whitespace-sensitive context.
    Inline,
    /// Not in any configured set. Behaves like flow content: no forced
    /// breaks, whitespace follows the non-preserving path.
    #[default]
    Default,
}

impl ElementClass {
    /// Whether text directly under this class sits in flow content, where
    /// configured whitespace preservation applies.
    #[inline]
    pub fn is_flow(self) -> bool {
        matches!(self, ElementClass::Inline | ElementClass::Compact)
    }

    /// Whether an element of this class opens with a forced line break.
    #[inline]
    pub fn breaks_before_open(self) -> bool {
        matches!(self, ElementClass::Block | ElementClass::Compact)
    }
}

/// O(1) element-name lookup against the configured class sets.
#[derive(Clone, Debug)]
pub struct Classifier {
    block: FxHashSet<String>,
    compact: FxHashSet<String>,
    inline: FxHashSet<String>,
}

impl Classifier {
    /// Build a classifier, rejecting configurations where a name appears in
    /// more than one class set or the indent unit contains line breaks.
    pub fn from_options(options: &FormatOptions) -> Result<Self, ConfigError> {
        if options.indent_unit.contains(['\n', '\r']) {
            return Err(ConfigError::IndentWithLineBreak);
        }
        for name in &options.block {
            if options.compact.contains(name) || options.inline.contains(name) {
                return Err(ConfigError::OverlappingClass { name: name.clone() });
            }
        }
        for name in &options.compact {
            if options.inline.contains(name) {
                return Err(ConfigError::OverlappingClass { name: name.clone() });
            }
        }
        Ok(Classifier {
            block: options.block.clone(),
            compact: options.compact.clone(),
            inline: options.inline.clone(),
        })
    }

    /// Classify an element name, falling back to [`ElementClass::Default`].
    pub fn classify(&self, name: &str) -> ElementClass {
        if self.block.contains(name) {
            ElementClass::Block
        } else if self.compact.contains(name) {
            ElementClass::Compact
        } else if self.inline.contains(name) {
            ElementClass::Inline
        } else {
            ElementClass::Default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn options() -> FormatOptions {
        FormatOptions::with_classes(&["root", "div"], &["p"], &["i"])
    }

    #[test]
    fn classifies_each_configured_set() {
        let classifier = match Classifier::from_options(&options()) {
            Ok(classifier) => classifier,
            Err(err) => panic!("valid options rejected: {err}"),
        };
        assert_eq!(classifier.classify("root"), ElementClass::Block);
        assert_eq!(classifier.classify("p"), ElementClass::Compact);
        assert_eq!(classifier.classify("i"), ElementClass::Inline);
        assert_eq!(classifier.classify("unknown"), ElementClass::Default);
    }

    #[test]
    fn rejects_name_in_two_sets() {
        let mut options = options();
        options.compact.insert("root".to_owned());
        let err = Classifier::from_options(&options).err();
        assert_eq!(
            err,
            Some(ConfigError::OverlappingClass {
                name: "root".to_owned()
            })
        );
    }

    #[test]
    fn rejects_indent_unit_with_newline() {
        let mut options = options();
        options.indent_unit = " \n".to_owned();
        assert_eq!(
            Classifier::from_options(&options).err(),
            Some(ConfigError::IndentWithLineBreak)
        );
    }

    #[test]
    fn default_class_is_not_flow() {
        assert!(!ElementClass::Default.is_flow());
        assert!(!ElementClass::Block.is_flow());
        assert!(ElementClass::Inline.is_flow());
        assert!(ElementClass::Compact.is_flow());
    }
}
