//! Typed catalog model and accessors (made by FontLab https://www.fontlab.com/)

use std::fmt;

use serde::{Deserialize, Serialize};

/// Slant classification of a single face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    Normal,
    Italic,
    Oblique,
}

impl FontStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontStyle::Normal => "normal",
            FontStyle::Italic => "italic",
            FontStyle::Oblique => "oblique",
        }
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Container format of a font file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFormat {
    Otf,
    Ttf,
}

impl FontFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontFormat::Otf => "otf",
            FontFormat::Ttf => "ttf",
        }
    }
}

impl fmt::Display for FontFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One physical font file within a family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct VariantRecord {
    pub name: String,
    pub weight: u16,
    pub style: FontStyle,
    pub format: FontFormat,
    pub file_size: u64,
    pub file: String,
}

impl VariantRecord {
    /// Folder segment of the canonical `fonts/<folder>/<file>.<ext>` path,
    /// or `None` when the path does not have that shape.
    pub fn folder(&self) -> Option<&str> {
        let mut parts = self.file.split('/');
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some("fonts"), Some(folder), Some(name), None)
                if !folder.is_empty() && !name.is_empty() =>
            {
                Some(folder)
            }
            _ => None,
        }
    }

    /// File-name extension, lowered for comparison against the format tag.
    pub fn extension(&self) -> Option<String> {
        let (_, ext) = self.file.rsplit_once('.')?;
        if ext.is_empty() {
            None
        } else {
            Some(ext.to_ascii_lowercase())
        }
    }
}

/// One font family and its derived bookkeeping fields.
///
/// `formats`, `font_count`, and `total_size` are redundant with `variants`
/// by contract; the loader rejects any record where they disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FamilyRecord {
    pub display_name: String,
    pub family_name: String,
    pub variants: Vec<VariantRecord>,
    pub formats: Vec<FontFormat>,
    pub has_default_font: bool,
    pub font_count: usize,
    pub total_size: u64,
}

impl FamilyRecord {
    pub fn has_format(&self, format: FontFormat) -> bool {
        self.formats.contains(&format)
    }

    pub fn is_placeholder(&self) -> bool {
        self.variants.is_empty()
    }

    /// Resolve the default-face convention: the 400-weight normal variant,
    /// else the first normal variant, else the first variant. Families that
    /// do not claim a default face resolve to `None`.
    pub fn default_variant(&self) -> Option<&VariantRecord> {
        if !self.has_default_font {
            return None;
        }

        self.variants
            .iter()
            .find(|v| v.weight == 400 && v.style == FontStyle::Normal)
            .or_else(|| self.variants.iter().find(|v| v.style == FontStyle::Normal))
            .or_else(|| self.variants.first())
    }
}

/// The loaded catalog: an ordered, immutable sequence of family records.
///
/// Only [`crate::loader`] constructs one, so holding a `Catalog` means every
/// record has already passed validation. Not `Deserialize` on purpose; the
/// loader is the only way in.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    families: Vec<FamilyRecord>,
}

impl Catalog {
    pub(crate) fn new(families: Vec<FamilyRecord>) -> Self {
        Self { families }
    }

    pub fn families(&self) -> &[FamilyRecord] {
        &self.families
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FamilyRecord> {
        self.families.iter()
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    /// Exact-match lookup by family key. Keys are case-sensitive PascalCase
    /// identifiers, so `adobecaslonpro` finds nothing.
    pub fn find_family(&self, family_name: &str) -> Option<&FamilyRecord> {
        self.families.iter().find(|f| f.family_name == family_name)
    }

    /// Install footprint of the whole catalog in bytes.
    pub fn total_size(&self) -> u64 {
        self.families.iter().map(|f| f.total_size).sum()
    }

    /// Number of physical font files across every family.
    pub fn font_count(&self) -> usize {
        self.families.iter().map(|f| f.font_count).sum()
    }

    /// Families whose format set contains `format`, in catalog order.
    pub fn families_by_format(&self, format: FontFormat) -> Vec<&FamilyRecord> {
        self.families
            .iter()
            .filter(|f| f.has_format(format))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a FamilyRecord;
    type IntoIter = std::slice::Iter<'a, FamilyRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.families.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variant(name: &str, weight: u16, style: FontStyle) -> VariantRecord {
        VariantRecord {
            name: name.to_string(),
            weight,
            style,
            format: FontFormat::Otf,
            file_size: 1000,
            file: format!("fonts/Sample/{name}.otf"),
        }
    }

    fn family(variants: Vec<VariantRecord>, has_default: bool) -> FamilyRecord {
        let font_count = variants.len();
        let total_size = variants.iter().map(|v| v.file_size).sum();
        let formats = if variants.is_empty() {
            Vec::new()
        } else {
            vec![FontFormat::Otf]
        };
        FamilyRecord {
            display_name: "Sample".to_string(),
            family_name: "Sample".to_string(),
            variants,
            formats,
            has_default_font: has_default,
            font_count,
            total_size,
        }
    }

    #[test]
    fn default_variant_prefers_regular_weight() {
        let fam = family(
            vec![
                variant("Sample-Bold", 700, FontStyle::Normal),
                variant("Sample-Regular", 400, FontStyle::Normal),
                variant("Sample-Italic", 400, FontStyle::Italic),
            ],
            true,
        );

        assert_eq!(fam.default_variant().unwrap().name, "Sample-Regular");
    }

    #[test]
    fn default_variant_falls_back_to_first_normal_face() {
        let fam = family(
            vec![
                variant("Sample-Italic", 400, FontStyle::Italic),
                variant("Sample-Semibold", 600, FontStyle::Normal),
            ],
            true,
        );

        assert_eq!(fam.default_variant().unwrap().name, "Sample-Semibold");
    }

    #[test]
    fn default_variant_requires_the_flag() {
        let fam = family(vec![variant("Sample-Regular", 400, FontStyle::Normal)], false);
        assert!(fam.default_variant().is_none());
    }

    #[test]
    fn variant_folder_requires_canonical_shape() {
        let good = variant("Sample-Regular", 400, FontStyle::Normal);
        assert_eq!(good.folder(), Some("Sample"));

        let mut stray = good.clone();
        stray.file = "elsewhere/Sample/Sample-Regular.otf".to_string();
        assert_eq!(stray.folder(), None);

        let mut deep = good.clone();
        deep.file = "fonts/Sample/extra/Sample-Regular.otf".to_string();
        assert_eq!(deep.folder(), None);
    }

    #[test]
    fn find_family_is_case_sensitive() {
        let catalog = Catalog::new(vec![family(Vec::new(), false)]);
        // placeholder family above has no variants, which is fine for lookup
        assert!(catalog.find_family("Sample").is_some());
        assert!(catalog.find_family("sample").is_none());
    }
}
