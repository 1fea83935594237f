//! Integration tests for loading catalog snapshots from disk.

use std::io::Write;

use novexa_core::{Catalog, ColorPalette, Error, Normalizer};
use tempfile::NamedTempFile;

fn write_snapshot(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write snapshot");
    file
}

/// Records in the storefront's export shape normalize into strict products
#[test]
fn test_load_storefront_export() {
    let file = write_snapshot(
        r#"[
          {
            "id": "clx1",
            "name": "Aero Knit Runner",
            "description": "Lightweight knit upper in pink",
            "price": 129.0,
            "mainCategory": "WOMEN",
            "category": { "name": "Sneakers" },
            "tags": ["running", "breathable"],
            "features": ["Knit upper", "Foam midsole"],
            "images": ["https://cdn.example.com/clx1.jpg"]
          },
          {
            "id": "clx2",
            "name": "Heritage Chelsea",
            "color": "Brown",
            "style": "chelsea",
            "height": "ankle",
            "pattern": null,
            "mainCategory": "MEN",
            "category": { "name": "Boots" }
          }
        ]"#,
    );

    let catalog = Catalog::load(file.path(), &Normalizer::default()).expect("Failed to load");
    assert_eq!(catalog.len(), 2);

    let runner = &catalog.products()[0];
    assert_eq!(runner.id.as_str(), "clx1");
    assert_eq!(runner.color, "pink");
    assert_eq!(runner.gender, "WOMEN");
    assert_eq!(runner.category, "Sneakers");
    assert_eq!(runner.tags, vec!["running", "breathable"]);
    assert_eq!(runner.images.len(), 1);

    let boot = &catalog.products()[1];
    assert_eq!(boot.color, "brown");
    assert_eq!(boot.height, "ankle");
    assert_eq!(boot.pattern, "");
}

/// A custom palette replaces the default color vocabulary
#[test]
fn test_load_with_custom_palette() {
    let file = write_snapshot(r#"[{"id": "x", "name": "Teal Slide"}]"#);

    let default_catalog = Catalog::load(file.path(), &Normalizer::default()).unwrap();
    assert_eq!(default_catalog.products()[0].color, "");

    let normalizer = Normalizer::new(ColorPalette::from_words(["teal"]));
    let catalog = Catalog::load(file.path(), &normalizer).unwrap();
    assert_eq!(catalog.products()[0].color, "teal");
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = Catalog::load(&dir.path().join("missing.json"), &Normalizer::default());
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_malformed_json() {
    let file = write_snapshot("[{\"id\": \"x\",");
    let result = Catalog::load(file.path(), &Normalizer::default());
    assert!(matches!(result, Err(Error::Serialization(_))));
}
