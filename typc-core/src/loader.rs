//! Catalog loading and validation (made by FontLab https://www.fontlab.com/)

use std::collections::{BTreeSet, HashSet};
use std::fs::File;
use std::io::{BufReader, Read};
use std::ops::RangeInclusive;
use std::path::Path;

use crate::catalog::{Catalog, FamilyRecord, FontFormat};
use crate::error::{CatalogError, Result};

/// Weights the generator is allowed to emit, per the OpenType/CSS scale as
/// observed in shipping catalogs (100 thin through 950 extra-black).
const WEIGHT_RANGE: RangeInclusive<u16> = 100..=950;

/// Load and validate a catalog asset from a file path.
pub fn load_catalog_from_path(path: impl AsRef<Path>) -> Result<Catalog> {
    let file = File::open(path.as_ref())?;
    load_catalog_from_reader(BufReader::new(file))
}

/// Load and validate a catalog from any reader producing the JSON asset.
pub fn load_catalog_from_reader(reader: impl Read) -> Result<Catalog> {
    let families: Vec<FamilyRecord> = serde_json::from_reader(reader)?;
    validate(&families)?;
    Ok(Catalog::new(families))
}

/// Load and validate a catalog from an in-memory JSON string.
pub fn load_catalog_from_str(raw: &str) -> Result<Catalog> {
    let families: Vec<FamilyRecord> = serde_json::from_str(raw)?;
    validate(&families)?;
    Ok(Catalog::new(families))
}

/// The catalog is a trusted static asset, so the first violation aborts the
/// whole load rather than coercing or skipping the bad record.
fn validate(families: &[FamilyRecord]) -> Result<()> {
    let mut seen = HashSet::new();

    for family in families {
        validate_family(family)?;
        if !seen.insert(family.family_name.as_str()) {
            return Err(CatalogError::DuplicateFamily(family.family_name.clone()));
        }
    }

    Ok(())
}

fn validate_family(family: &FamilyRecord) -> Result<()> {
    let key = &family.family_name;

    if family.display_name.trim().is_empty() || key.trim().is_empty() {
        return Err(CatalogError::EmptyName { family: key.clone() });
    }

    if family.font_count != family.variants.len() {
        return Err(CatalogError::FontCountMismatch {
            family: key.clone(),
            declared: family.font_count,
            actual: family.variants.len(),
        });
    }

    let summed: u64 = family.variants.iter().map(|v| v.file_size).sum();
    if family.total_size != summed {
        return Err(CatalogError::TotalSizeMismatch {
            family: key.clone(),
            declared: family.total_size,
            actual: summed,
        });
    }

    // Order-insensitive set comparison; a duplicated declared tag is a
    // violation too, since the field is specified as a set.
    let declared: BTreeSet<FontFormat> = family.formats.iter().copied().collect();
    let derived: BTreeSet<FontFormat> = family.variants.iter().map(|v| v.format).collect();
    if declared != derived || declared.len() != family.formats.len() {
        return Err(CatalogError::FormatsMismatch { family: key.clone() });
    }

    if family.variants.is_empty() && family.has_default_font {
        return Err(CatalogError::EmptyFamilyDefault { family: key.clone() });
    }

    let mut family_folder: Option<&str> = None;

    for variant in &family.variants {
        if variant.file_size == 0 {
            return Err(CatalogError::ZeroFileSize {
                family: key.clone(),
                name: variant.name.clone(),
            });
        }

        if !WEIGHT_RANGE.contains(&variant.weight) {
            return Err(CatalogError::WeightOutOfRange {
                family: key.clone(),
                name: variant.name.clone(),
                weight: variant.weight,
            });
        }

        let folder = variant.folder().ok_or_else(|| CatalogError::VariantPath {
            family: key.clone(),
            file: variant.file.clone(),
            reason: "must have the shape fonts/<folder>/<file>.<ext>",
        })?;

        match family_folder {
            None => family_folder = Some(folder),
            Some(expected) if expected != folder => {
                return Err(CatalogError::VariantPath {
                    family: key.clone(),
                    file: variant.file.clone(),
                    reason: "does not share the family's folder segment",
                });
            }
            Some(_) => {}
        }

        match variant.extension() {
            Some(ext) if ext == variant.format.as_str() => {}
            _ => {
                return Err(CatalogError::VariantPath {
                    family: key.clone(),
                    file: variant.file.clone(),
                    reason: "extension does not match the declared format",
                });
            }
        }
    }

    Ok(())
}
