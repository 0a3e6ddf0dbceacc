//! `jsonbase.dart`: the interface and helpers generated classes rely on.

use crate::GeneratedFile;

/// The support file every generated module imports.
pub struct JsonBaseDart;

impl JsonBaseDart {
    pub const PATH: &'static str = "jsonbase.dart";

    pub fn render(&self) -> String {
        r#"// generated by dartjsonclass

abstract class JsonBase {
  Map<String, dynamic> toMap();
}

bool listEquals<T>(List<T>? a, List<T>? b) {
  if (identical(a, b)) return true;
  if (a == null || b == null || a.length != b.length) return false;
  for (var i = 0; i < a.length; i++) {
    if (a[i] != b[i]) return false;
  }
  return true;
}

bool mapEquals<K, V>(Map<K, V>? a, Map<K, V>? b) {
  if (identical(a, b)) return true;
  if (a == null || b == null || a.length != b.length) return false;
  for (final key in a.keys) {
    if (!b.containsKey(key) || a[key] != b[key]) return false;
  }
  return true;
}
"#
        .to_string()
    }

    pub fn file(&self) -> GeneratedFile {
        GeneratedFile {
            path: Self::PATH.to_string(),
            content: self.render(),
        }
    }
}
