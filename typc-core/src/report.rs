//! Aggregate catalog reporting (made by FontLab https://www.fontlab.com/)

use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::{Catalog, FontFormat};

/// Footprint of one format across the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormatBreakdown {
    /// Families whose format set contains the tag.
    pub families: usize,
    /// Variants carrying the tag.
    pub fonts: usize,
    /// Bytes across those variants.
    pub bytes: u64,
}

/// Catalog-wide aggregates, the numbers an install-footprint report needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogSummary {
    pub family_count: usize,
    pub font_count: usize,
    pub total_size: u64,
    /// Placeholder/collection entries with no variants.
    pub empty_families: usize,
    pub families_with_default: usize,
    pub formats: BTreeMap<FontFormat, FormatBreakdown>,
}

/// Walk the catalog once and total everything up.
pub fn summarize(catalog: &Catalog) -> CatalogSummary {
    let mut formats: BTreeMap<FontFormat, FormatBreakdown> = BTreeMap::new();
    let mut empty_families = 0;
    let mut families_with_default = 0;

    for family in catalog {
        if family.is_placeholder() {
            empty_families += 1;
        }
        if family.has_default_font {
            families_with_default += 1;
        }

        for format in &family.formats {
            formats.entry(*format).or_default().families += 1;
        }

        for variant in &family.variants {
            let slot = formats.entry(variant.format).or_default();
            slot.fonts += 1;
            slot.bytes += variant.file_size;
        }
    }

    CatalogSummary {
        family_count: catalog.len(),
        font_count: catalog.font_count(),
        total_size: catalog.total_size(),
        empty_families,
        families_with_default,
        formats,
    }
}
