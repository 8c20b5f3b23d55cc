//! Family filtering and filter-argument parsing (made by FontLab https://www.fontlab.com/)

use std::ops::RangeInclusive;

use anyhow::{anyhow, Result};
use regex::Regex;

use crate::catalog::{Catalog, FamilyRecord, FontFormat, FontStyle};

/// Builder-style filter over family records. An empty filter matches every
/// family; each configured criterion narrows the result.
#[derive(Debug, Clone, Default)]
pub struct FamilyFilter {
    formats: Vec<FontFormat>,
    styles: Vec<FontStyle>,
    weight_range: Option<RangeInclusive<u16>>,
    name_patterns: Vec<Regex>,
    require_default: bool,
    skip_empty: bool,
}

impl FamilyFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require every listed format to appear in the family's format set.
    pub fn with_formats(mut self, formats: Vec<FontFormat>) -> Self {
        self.formats = formats;
        self
    }

    /// Require at least one variant per listed style.
    pub fn with_styles(mut self, styles: Vec<FontStyle>) -> Self {
        self.styles = styles;
        self
    }

    /// Require at least one variant whose weight falls inside the range.
    pub fn with_weight_range(mut self, range: Option<RangeInclusive<u16>>) -> Self {
        self.weight_range = range;
        self
    }

    /// Regex patterns; at least one must match a display, family, or
    /// variant name.
    pub fn with_name_patterns(mut self, patterns: Vec<Regex>) -> Self {
        self.name_patterns = patterns;
        self
    }

    /// Only families that designate a default face.
    pub fn require_default(mut self, yes: bool) -> Self {
        self.require_default = yes;
        self
    }

    /// Drop placeholder families with no variants.
    pub fn skip_empty(mut self, yes: bool) -> Self {
        self.skip_empty = yes;
        self
    }

    /// Check whether a family satisfies every configured criterion.
    pub fn matches(&self, family: &FamilyRecord) -> bool {
        if self.require_default && !family.has_default_font {
            return false;
        }

        if self.skip_empty && family.variants.is_empty() {
            return false;
        }

        if !self.formats.iter().all(|f| family.has_format(*f)) {
            return false;
        }

        if !self
            .styles
            .iter()
            .all(|s| family.variants.iter().any(|v| v.style == *s))
        {
            return false;
        }

        if let Some(range) = &self.weight_range {
            if !family.variants.iter().any(|v| range.contains(&v.weight)) {
                return false;
            }
        }

        if !self.name_patterns.is_empty() {
            let matched = self.name_patterns.iter().any(|re| {
                re.is_match(&family.display_name)
                    || re.is_match(&family.family_name)
                    || family.variants.iter().any(|v| re.is_match(&v.name))
            });
            if !matched {
                return false;
            }
        }

        true
    }

    /// Filter a catalog into an owned result set, preserving catalog order.
    pub fn apply(&self, catalog: &Catalog) -> Vec<FamilyRecord> {
        catalog.iter().filter(|f| self.matches(f)).cloned().collect()
    }
}

/// Parse format tags (`otf`, `ttf`), rejecting anything else.
pub fn parse_format_list(raw: &[String]) -> Result<Vec<FontFormat>> {
    raw.iter().map(|s| parse_format(s)).collect()
}

fn parse_format(raw: &str) -> Result<FontFormat> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "otf" => Ok(FontFormat::Otf),
        "ttf" => Ok(FontFormat::Ttf),
        other => Err(anyhow!("unknown format tag: {other}")),
    }
}

/// Parse style names (`normal`, `italic`, `oblique`).
pub fn parse_style_list(raw: &[String]) -> Result<Vec<FontStyle>> {
    raw.iter().map(|s| parse_style(s)).collect()
}

fn parse_style(raw: &str) -> Result<FontStyle> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "normal" => Ok(FontStyle::Normal),
        "italic" => Ok(FontStyle::Italic),
        "oblique" => Ok(FontStyle::Oblique),
        other => Err(anyhow!("unknown style: {other}")),
    }
}

/// Parse a single weight (`400`) or inclusive range (`300-500`). Reversed
/// bounds are swapped rather than rejected.
pub fn parse_weight_range(raw: &str) -> Result<RangeInclusive<u16>> {
    let trimmed = raw.trim();

    if let Some((lo, hi)) = trimmed.split_once('-') {
        let lo = parse_weight(lo)?;
        let hi = parse_weight(hi)?;
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        return Ok(lo..=hi);
    }

    let weight = parse_weight(trimmed)?;
    Ok(weight..=weight)
}

fn parse_weight(token: &str) -> Result<u16> {
    token
        .trim()
        .parse::<u16>()
        .map_err(|_| anyhow!("invalid weight: {token}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_formats_and_styles() {
        assert_eq!(parse_format("OTF").unwrap(), FontFormat::Otf);
        assert_eq!(parse_style(" italic ").unwrap(), FontStyle::Italic);
        assert!(parse_format("woff2").is_err());
        assert!(parse_style("backslant").is_err());
    }

    #[test]
    fn weight_range_accepts_single_value_and_swaps_reversed_bounds() {
        assert_eq!(parse_weight_range("400").unwrap(), 400..=400);
        assert_eq!(parse_weight_range("700-300").unwrap(), 300..=700);
        assert!(parse_weight_range("bold").is_err());
    }
}
