/// typc-core: The meticulous archivist of font catalogs
///
/// Every font manager keeps a ledger somewhere - a long table of families,
/// their faces, their weights, and where the actual files live. This library
/// is the archivist who guards that ledger: it reads the catalog asset,
/// checks every entry against the house rules, and then answers questions
/// about it all day without ever losing its patience.
///
/// ## Three Duties of the Archivist
///
/// **Loading**: Reading the ledger without skipping a line
/// - Parses the JSON catalog asset into typed family and variant records
/// - Verifies every derived field (counts, sizes, format sets) on arrival
/// - Refuses the whole ledger on the first inconsistency, because a broken
///   entry means the generator upstream has been telling fibs
///
/// **Lookup**: Finding the right family on the first try
/// - Exact, case-sensitive family-key lookup (`AdobeCaslonPro`, not
///   `adobecaslonpro`)
/// - Filtering by format, style, weight range, or name pattern
/// - A missing family is an answer, not an accident
///
/// **Reporting**: Summing up the collection for the curious
/// - Total install footprint across every family
/// - Per-format breakdowns of families, files, and bytes
/// - JSON and NDJSON renderings for anything downstream
///
/// ## A Sample Conversation
///
/// ```rust,no_run
/// use typc_core::catalog::FontFormat;
/// use typc_core::loader::load_catalog_from_path;
///
/// let catalog = load_catalog_from_path("catalog.json")?;
///
/// if let Some(family) = catalog.find_family("AdobeCaslonPro") {
///     println!(
///         "{} ships {} faces in {} bytes",
///         family.display_name, family.font_count, family.total_size
///     );
/// }
///
/// let ttf_only = catalog.families_by_format(FontFormat::Ttf);
/// println!("{} families carry TrueType files", ttf_only.len());
/// #
/// # Ok::<(), typc_core::error::CatalogError>(())
/// ```
///
/// ## House Rules
///
/// The catalog is immutable once loaded. No file on disk is ever opened by
/// this crate beyond the asset itself - variant paths are bookkeeping for the
/// consuming application, not promises we check against the filesystem.
///
/// ## The Cast of Characters
///
/// - [`catalog::Catalog`]: The ledger itself, ordered as written
/// - [`catalog::FamilyRecord`]: One family and its derived bookkeeping
/// - [`catalog::VariantRecord`]: One physical font file's vital statistics
/// - [`query::FamilyFilter`]: Your polite interrogation of the ledger
/// - [`error::CatalogError`]: What went wrong, named precisely
///
/// ---
///
/// Crafted with care at FontLab https://www.fontlab.com/
pub mod catalog;
pub mod error;
pub mod loader;
pub mod output;
pub mod query;
pub mod report;
