//! Snapshot tests for Dart code generation.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use dartjsonclass_codegen_dart::{ClassOptions, CodegenError, Generator};
use dartjsonclass_schema::{Catalog, RecordFilter, SchemaFile, SchemaFormat};

fn catalog_from_toml(schema: &str) -> Catalog {
    let file = SchemaFile::parse(schema, SchemaFormat::Toml, "models.toml")
        .expect("Failed to parse schema");
    let mut catalog = Catalog::new();
    catalog
        .add_file(file, &RecordFilter::new())
        .expect("Failed to build catalog");
    catalog
}

/// Lines of the generated class named `name`.
fn class_of(catalog: &Catalog, name: &str, options: ClassOptions) -> String {
    let entry = catalog.get(name).expect("Record not found");
    Generator::new(catalog)
        .with_options(options)
        .class_lines(&entry.record)
        .expect("Generation failed")
        .join("\n")
}

const ITEM_WRAPPER: &str = r#"
[Item]
fields = ["int a"]

[Wrapper]
fields = [{ type = "List<Item>?", name = "items" }]
"#;

#[test]
fn test_wrapper_class() {
    let catalog = catalog_from_toml(ITEM_WRAPPER);
    let wrapper = class_of(&catalog, "Wrapper", ClassOptions::default());

    insta::assert_snapshot!(wrapper, @r#"
    class Wrapper implements JsonBase {
      List<Item>? items;
      Wrapper(this.items);
      factory Wrapper.fromMap(Map<String, dynamic> raw) => Wrapper(raw["items"] == null ? null : (raw["items"] as List).map<Item>((elt) => Item.fromMap(elt)).toList());
      factory Wrapper.fromJson(String json) => Wrapper.fromMap(jsonDecode(json));
      @override
      Map<String, dynamic> toMap() => {"items": items?.map((elt) => elt.toMap()).toList()};
      static const List<String> fields = ["items"];
      dynamic getAttr(String name) {
        switch (name) {
          case "items":
            return items;
          default:
            throw ArgumentError.value(name, "name", "unknown field");
        }
      }
      void setAttr(String name, dynamic value) {
        switch (name) {
          case "items":
            items = value;
            break;
          default:
            throw ArgumentError.value(name, "name", "unknown field");
        }
      }
      @override
      bool operator ==(Object other) => other is Wrapper && listEquals(items, other.items);
      @override
      int get hashCode => items == null ? 0 : Object.hashAll(items!);
      Wrapper copy() => Wrapper(items == null ? null : <Item>[...items!]);
    }
    "#);
}

#[test]
fn test_single_file_layout() {
    let catalog = catalog_from_toml(ITEM_WRAPPER);
    let content = Generator::new(&catalog)
        .with_options(ClassOptions::default().without_accessors().without_value_semantics())
        .single_file()
        .expect("Generation failed")
        .output;

    assert!(content.starts_with(
        "// generated by dartjsonclass\nimport 'dart:convert';\nimport './jsonbase.dart';\n\nclass Item implements JsonBase {\n"
    ));
    assert!(content.contains("}\n\nclass Wrapper implements JsonBase {\n"));
    assert!(content.ends_with("}\n\n"));
}

#[test]
fn test_nested_containers() {
    let catalog = catalog_from_toml(
        r#"
        [Item]
        fields = ["int a"]

        [Grid]
        fields = [
            "Map<String, List<Item>> rows",
            "List<Map<String, DateTime>>? stamps",
        ]
        "#,
    );
    let grid = class_of(&catalog, "Grid", ClassOptions::default());

    assert!(grid.contains(
        r#"(raw["rows"] as Map<String, dynamic>).map<String, List<Item>>((key, val) => MapEntry(key, (val as List).map<Item>((elt1) => Item.fromMap(elt1)).toList()))"#
    ));
    assert!(grid.contains(
        r#"raw["stamps"] == null ? null : (raw["stamps"] as List).map<Map<String, DateTime>>((elt) => (elt as Map<String, dynamic>).map<String, DateTime>((key1, val1) => MapEntry(key1, DateTime.parse(val1)))).toList()"#
    ));
    assert!(grid.contains(
        r#""rows": rows.map((key, val) => MapEntry(key, val.map((elt1) => elt1.toMap()).toList()))"#
    ));
    assert!(grid.contains(
        r#""stamps": stamps?.map((elt) => elt.map((key1, val1) => MapEntry(key1, val1.toIso8601String()))).toList()"#
    ));
    assert!(grid.contains("mapEquals(rows, other.rows) && listEquals(stamps, other.stamps)"));
}

#[test]
fn test_non_string_key_names_field_and_record() {
    let catalog = catalog_from_toml(
        r#"
        [Counts]
        fields = ["Map<int, int> byId"]
        "#,
    );
    let err = Generator::new(&catalog).single_file().unwrap_err();
    assert_eq!(
        err,
        CodegenError::NonStringMapKey {
            key: "int".to_string(),
            record: "Counts".to_string(),
            field: "byId".to_string(),
        }
    );
}
