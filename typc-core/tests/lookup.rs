use std::path::PathBuf;

use typc_core::catalog::{Catalog, FontFormat, FontStyle};
use typc_core::loader::load_catalog_from_path;

fn fixture_catalog() -> Catalog {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/catalog.json");
    load_catalog_from_path(path).expect("fixture catalog loads")
}

#[test]
fn adobe_caslon_pro_matches_published_numbers() {
    let catalog = fixture_catalog();
    let family = catalog.find_family("AdobeCaslonPro").expect("present");

    assert_eq!(family.display_name, "Adobe Caslon Pro");
    assert_eq!(family.font_count, 6);
    assert_eq!(family.total_size, 977632);
    assert_eq!(family.formats, vec![FontFormat::Otf]);
    assert!(family.has_default_font);
    assert_eq!(
        family.default_variant().expect("default face").name,
        "ACaslonPro-Regular"
    );
}

#[test]
fn placeholder_collection_is_empty_across_the_board() {
    let catalog = fixture_catalog();
    let family = catalog.find_family("0.RandomCollections").expect("present");

    assert!(family.variants.is_empty());
    assert_eq!(family.font_count, 0);
    assert_eq!(family.total_size, 0);
    assert!(family.formats.is_empty());
    assert!(!family.has_default_font);
}

#[test]
fn missing_family_is_none_not_an_error() {
    let catalog = fixture_catalog();
    let before = catalog.clone();

    assert!(catalog.find_family("DoesNotExist").is_none());
    assert_eq!(catalog, before, "lookup must not mutate the catalog");
}

#[test]
fn total_size_sums_every_family_and_is_deterministic() {
    let catalog = fixture_catalog();
    let per_family: u64 = catalog.iter().map(|f| f.total_size).sum();

    assert_eq!(catalog.total_size(), per_family);
    assert_eq!(catalog.total_size(), 2278587);
    assert_eq!(catalog.total_size(), catalog.total_size());
    assert_eq!(catalog.font_count(), 18);
}

#[test]
fn families_by_format_filters_in_catalog_order() {
    let catalog = fixture_catalog();

    let ttf: Vec<&str> = catalog
        .families_by_format(FontFormat::Ttf)
        .iter()
        .map(|f| f.family_name.as_str())
        .collect();
    assert_eq!(ttf, vec!["Barlow", "IBMPlexMono", "Lato"]);

    let otf: Vec<&str> = catalog
        .families_by_format(FontFormat::Otf)
        .iter()
        .map(|f| f.family_name.as_str())
        .collect();
    assert_eq!(otf, vec!["AdobeCaslonPro", "Lato", "Overpass"]);
}

#[test]
fn derived_fields_agree_with_variants_for_every_family() {
    let catalog = fixture_catalog();

    for family in &catalog {
        assert_eq!(family.font_count, family.variants.len());

        let summed: u64 = family.variants.iter().map(|v| v.file_size).sum();
        assert_eq!(family.total_size, summed);

        let mut derived: Vec<FontFormat> = family.variants.iter().map(|v| v.format).collect();
        derived.sort_unstable();
        derived.dedup();
        let mut declared = family.formats.clone();
        declared.sort_unstable();
        assert_eq!(declared, derived);

        if family.variants.is_empty() {
            assert!(!family.has_default_font);
        }
    }
}

#[test]
fn family_names_are_unique() {
    let catalog = fixture_catalog();
    let mut names: Vec<&str> = catalog.iter().map(|f| f.family_name.as_str()).collect();
    names.sort_unstable();
    let len_before = names.len();
    names.dedup();

    assert_eq!(names.len(), len_before);
}

#[test]
fn oblique_faces_survive_the_trip() {
    let catalog = fixture_catalog();
    let overpass = catalog.find_family("Overpass").expect("present");

    assert!(overpass
        .variants
        .iter()
        .any(|v| v.style == FontStyle::Oblique));
    assert!(overpass.default_variant().is_none());
}
