//! Dart binding emitter.

use crate::{codepoints::CodepointTable, identifiers::IdentifierSet};

/// Render the Dart class exposing one `IconData` constant per icon.
pub fn render_binding(ids: &IdentifierSet, codepoints: &CodepointTable) -> String {
    debug_assert_eq!(ids.len(), codepoints.len());
    let class_name = ids.class_name();

    let constants = ids
        .constant_names()
        .iter()
        .zip(codepoints.iter())
        .map(|(name, (_, codepoint))| {
            format!(
                "  static const IconData {name} = IconData({codepoint:#x}, fontFamily: _fontFamily);"
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "// Place fonts/{class_name}.ttf in your fonts/ directory and
// add the following to your pubspec.yaml
// flutter:
//   fonts:
//    - family: {class_name}
//      fonts:
//       - asset: fonts/{class_name}.ttf
//
// Generated with iconfont

import 'package:flutter/widgets.dart';

class {class_name} {{
  {class_name}._();

  static const String _fontFamily = '{class_name}';

{constants}
}}"
    )
}

/// File name of the binding for `class_name`.
pub fn binding_file_name(class_name: &str) -> String {
    format!("{class_name}_icons.dart")
}

#[cfg(test)]
mod tests {
    use std::fs::write;

    use super::*;
    use crate::loader::load_icons;

    fn render(names: &[&str]) -> String {
        let dir = tempfile::tempdir().unwrap();
        for name in names {
            write(dir.path().join(name), "<svg/>").unwrap();
        }
        let entries = load_icons(dir.path()).unwrap();
        let ids = IdentifierSet::generate("Icons", &entries);
        render_binding(&ids, &CodepointTable::new(entries.len()).unwrap())
    }

    #[test]
    fn test_render_binding() {
        let text = render(&["home.svg", "settings.svg"]);
        let expected = "// Place fonts/Icons.ttf in your fonts/ directory and
// add the following to your pubspec.yaml
// flutter:
//   fonts:
//    - family: Icons
//      fonts:
//       - asset: fonts/Icons.ttf
//
// Generated with iconfont

import 'package:flutter/widgets.dart';

class Icons {
  Icons._();

  static const String _fontFamily = 'Icons';

  static const IconData home = IconData(0xe900, fontFamily: _fontFamily);
  static const IconData settings = IconData(0xe901, fontFamily: _fontFamily);
}";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_one_declaration_per_icon() {
        let names: Vec<String> = (0..40).map(|i| format!("glyph{i:02}.svg")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let text = render(&refs);

        let declarations: Vec<&str> =
            text.lines().filter(|line| line.contains("static const IconData")).collect();
        assert_eq!(declarations.len(), 40);
        for (i, line) in declarations.iter().enumerate() {
            assert!(line.contains(&format!("IconData({:#x},", 0xE900 + i)), "{line}");
        }
    }

    #[test]
    fn test_binding_file_name() {
        assert_eq!(binding_file_name("Icons"), "Icons_icons.dart");
    }
}
