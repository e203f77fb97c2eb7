//! Dart identifiers for the generated binding.

use std::collections::HashSet;

use heck::{ToSnakeCase, ToUpperCamelCase};
use log::warn;

use crate::loader::IconEntry;

/// Dart reserved words; none of them may name a field.
const DART_RESERVED: &[&str] = &[
    "assert", "break", "case", "catch", "class", "const", "continue", "default", "do", "else",
    "enum", "extends", "false", "final", "finally", "for", "if", "in", "is", "new", "null",
    "rethrow", "return", "super", "switch", "this", "throw", "true", "try", "var", "void", "while",
    "with",
];

/// Class name derived from the input directory name, e.g. `my-icons` → `MyIcons`.
pub fn class_name(dir_name: &str) -> String {
    let name = dir_name.to_upper_camel_case();
    if name.is_empty() || name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("Icons{name}")
    } else {
        name
    }
}

/// Constant name derived from an icon's base name, e.g. `Arrow-Left` → `arrow_left`.
///
/// Does not check for collisions; see [`IdentifierSet::generate`].
pub fn constant_name(base_name: &str) -> String {
    let name = base_name.to_snake_case();
    if name.is_empty() || name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("icon_{name}")
    } else if DART_RESERVED.contains(&name.as_str()) {
        format!("{name}_icon")
    } else {
        name
    }
}

/// Class name plus one constant name per icon, in ordinal order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierSet {
    class_name: String,
    constant_names: Vec<String>,
}

impl IdentifierSet {
    /// Derive constant names for `entries`.
    ///
    /// A name already taken by an earlier entry gets `_<ordinal>` appended
    /// until it is unique, so output depends only on the entry order.
    pub fn generate(class_name: impl Into<String>, entries: &[IconEntry]) -> Self {
        let mut taken: HashSet<String> = HashSet::with_capacity(entries.len());
        let mut constant_names = Vec::with_capacity(entries.len());

        for entry in entries {
            let base = constant_name(entry.base_name());
            let mut name = base.clone();
            while taken.contains(&name) {
                name = format!("{name}_{}", entry.ordinal());
            }
            if name != base {
                warn!(
                    "{}: constant '{base}' already used, renamed to '{name}'",
                    entry.relative_path().display()
                );
            }
            taken.insert(name.clone());
            constant_names.push(name);
        }

        Self { class_name: class_name.into(), constant_names }
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn constant_names(&self) -> &[String] {
        &self.constant_names
    }

    pub fn len(&self) -> usize {
        self.constant_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constant_names.is_empty()
    }
}
