//! Catalog error taxonomy (made by FontLab https://www.fontlab.com/)

use std::{io, result};

use thiserror::Error;

/// Everything that can go wrong between an asset on disk and a valid
/// [`crate::catalog::Catalog`]. Lookup misses are not errors and never
/// appear here.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed catalog JSON: {0}")]
    Schema(#[from] serde_json::Error),

    #[error("family '{family}': displayName and familyName must be non-empty")]
    EmptyName { family: String },

    #[error("duplicate familyName '{0}'")]
    DuplicateFamily(String),

    #[error("family '{family}': fontCount is {declared} but {actual} variants are listed")]
    FontCountMismatch {
        family: String,
        declared: usize,
        actual: usize,
    },

    #[error("family '{family}': totalSize is {declared} but variant sizes sum to {actual}")]
    TotalSizeMismatch {
        family: String,
        declared: u64,
        actual: u64,
    },

    #[error("family '{family}': formats list disagrees with the variants' formats")]
    FormatsMismatch { family: String },

    #[error("family '{family}': empty family must not claim a default font")]
    EmptyFamilyDefault { family: String },

    #[error("family '{family}': variant '{name}' has zero file size")]
    ZeroFileSize { family: String, name: String },

    #[error("family '{family}': variant '{name}' weight {weight} is outside 100..=950")]
    WeightOutOfRange {
        family: String,
        name: String,
        weight: u16,
    },

    #[error("family '{family}': variant file '{file}' {reason}")]
    VariantPath {
        family: String,
        file: String,
        reason: &'static str,
    },
}

pub type Result<T> = result::Result<T, CatalogError>;
