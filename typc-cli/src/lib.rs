//! typc CLI (made by FontLab https://www.fontlab.com/)

use std::env;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum, ValueHint};
use regex::Regex;

use typc_core::catalog::{Catalog, FamilyRecord};
use typc_core::loader::load_catalog_from_path;
use typc_core::output::{write_json_pretty, write_ndjson};
use typc_core::query::{parse_format_list, parse_style_list, parse_weight_range, FamilyFilter};
use typc_core::report::summarize;

/// CLI entrypoint for typc.
#[derive(Debug, Parser)]
#[command(
    name = "typc",
    about = "Font catalog loader/inspector (made by FontLab https://www.fontlab.com/)"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List catalog families, optionally filtered
    List(ListArgs),
    /// Show one family in detail
    Show(ShowArgs),
    /// Report catalog-wide aggregate totals
    Stats(StatsArgs),
    /// Load a catalog asset and report the first violation, if any
    Validate(ValidateArgs),
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Catalog asset to read (defaults to $TYPC_CATALOG)
    #[arg(short = 'c', long = "catalog", value_hint = ValueHint::FilePath)]
    catalog: Option<PathBuf>,

    /// Require families to carry these format tags (otf,ttf)
    #[arg(short = 'F', long = "formats", value_delimiter = ',', value_hint = ValueHint::Other)]
    formats: Vec<String>,

    /// Require a variant per listed style (normal,italic,oblique)
    #[arg(short = 's', long = "styles", value_delimiter = ',', value_hint = ValueHint::Other)]
    styles: Vec<String>,

    /// Weight a variant must hit, as a value or inclusive range (400, 300-500)
    #[arg(short = 'w', long = "weight", value_hint = ValueHint::Other)]
    weight: Option<String>,

    /// Regex patterns that must match a family or variant name
    #[arg(short = 'n', long = "name", value_hint = ValueHint::Other)]
    name_patterns: Vec<String>,

    /// Only families designating a default face
    #[arg(long = "with-default", action = ArgAction::SetTrue)]
    with_default: bool,

    /// Skip placeholder families without variants
    #[arg(long = "non-empty", action = ArgAction::SetTrue)]
    non_empty: bool,

    /// Emit a single JSON array
    #[arg(long = "json", action = ArgAction::SetTrue, conflicts_with = "ndjson")]
    json: bool,

    /// Emit newline-delimited JSON
    #[arg(long = "ndjson", action = ArgAction::SetTrue)]
    ndjson: bool,

    /// Format output as padded columns
    #[arg(long = "columns", action = ArgAction::SetTrue)]
    columns: bool,

    /// Control colorized output (auto|always|never)
    #[arg(long = "color", default_value_t = ColorChoice::Auto, value_enum)]
    color: ColorChoice,
}

#[derive(Debug, Args)]
struct ShowArgs {
    /// Family key to look up (exact, case-sensitive)
    family: String,

    /// Catalog asset to read (defaults to $TYPC_CATALOG)
    #[arg(short = 'c', long = "catalog", value_hint = ValueHint::FilePath)]
    catalog: Option<PathBuf>,

    /// Emit the record as prettified JSON
    #[arg(long = "json", action = ArgAction::SetTrue)]
    json: bool,
}

#[derive(Debug, Args)]
struct StatsArgs {
    /// Catalog asset to read (defaults to $TYPC_CATALOG)
    #[arg(short = 'c', long = "catalog", value_hint = ValueHint::FilePath)]
    catalog: Option<PathBuf>,

    /// Emit the summary as prettified JSON
    #[arg(long = "json", action = ArgAction::SetTrue)]
    json: bool,
}

#[derive(Debug, Args)]
struct ValidateArgs {
    /// Catalog asset to read (defaults to $TYPC_CATALOG)
    #[arg(short = 'c', long = "catalog", value_hint = ValueHint::FilePath)]
    catalog: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

/// Parse CLI args and execute the selected command.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::List(args) => run_list(args),
        Command::Show(args) => run_show(args),
        Command::Stats(args) => run_stats(args),
        Command::Validate(args) => run_validate(args),
    }
}

fn run_list(args: ListArgs) -> Result<()> {
    let catalog = open_catalog(args.catalog.clone())?;
    let filter = build_filter(&args)?;
    let families = filter.apply(&catalog);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let use_color = match args.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => handle.is_terminal(),
    };

    if args.ndjson {
        write_ndjson(&families, &mut handle)?;
    } else if args.json {
        write_json_pretty(&families, &mut handle)?;
    } else if args.columns {
        write_columns(&families, &mut handle, use_color)?;
    } else {
        write_plain(&families, &mut handle, use_color)?;
    }

    Ok(())
}

fn run_show(args: ShowArgs) -> Result<()> {
    let catalog = open_catalog(args.catalog)?;

    let family = match catalog.find_family(&args.family) {
        Some(family) => family,
        None => {
            // A miss is not a malfunction, so skip main's `error:` prefix.
            eprintln!("no such family: {}", args.family);
            std::process::exit(1);
        }
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    if args.json {
        let json = serde_json::to_string_pretty(family)?;
        writeln!(handle, "{json}")?;
        return Ok(());
    }

    writeln!(handle, "{} ({})", family.display_name, family.family_name)?;
    writeln!(
        handle,
        "  fonts: {}, total {}, formats {}",
        family.font_count,
        format_size(family.total_size),
        formats_label(family),
    )?;
    if let Some(default) = family.default_variant() {
        writeln!(handle, "  default face: {}", default.name)?;
    }

    for variant in &family.variants {
        writeln!(
            handle,
            "  {:>3} {:<7} {}  {:>9}  {}",
            variant.weight,
            variant.style.as_str(),
            variant.format.as_str(),
            format_size(variant.file_size),
            variant.file,
        )?;
    }

    Ok(())
}

fn run_stats(args: StatsArgs) -> Result<()> {
    let catalog = open_catalog(args.catalog)?;
    let summary = summarize(&catalog);

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    if args.json {
        let json = serde_json::to_string_pretty(&summary)?;
        writeln!(handle, "{json}")?;
        return Ok(());
    }

    writeln!(
        handle,
        "families: {} ({} empty, {} with default face)",
        summary.family_count, summary.empty_families, summary.families_with_default,
    )?;
    writeln!(handle, "fonts: {}", summary.font_count)?;
    writeln!(
        handle,
        "total size: {} ({} bytes)",
        format_size(summary.total_size),
        summary.total_size,
    )?;

    for (format, breakdown) in &summary.formats {
        writeln!(
            handle,
            "{}: {} families, {} fonts, {}",
            format,
            breakdown.families,
            breakdown.fonts,
            format_size(breakdown.bytes),
        )?;
    }

    Ok(())
}

fn run_validate(args: ValidateArgs) -> Result<()> {
    let catalog = open_catalog(args.catalog)?;

    println!(
        "ok: {} families, {} fonts, {} bytes",
        catalog.len(),
        catalog.font_count(),
        catalog.total_size(),
    );

    Ok(())
}

fn open_catalog(arg: Option<PathBuf>) -> Result<Catalog> {
    let path = resolve_catalog_path(arg)?;
    load_catalog_from_path(&path).with_context(|| format!("loading catalog {}", path.display()))
}

fn resolve_catalog_path(arg: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = arg {
        return Ok(path);
    }

    if let Ok(raw) = env::var("TYPC_CATALOG") {
        if !raw.trim().is_empty() {
            return Ok(PathBuf::from(raw));
        }
    }

    Err(anyhow!(
        "no catalog asset given (pass --catalog or set TYPC_CATALOG)"
    ))
}

fn build_filter(args: &ListArgs) -> Result<FamilyFilter> {
    let formats = parse_format_list(&args.formats)?;
    let styles = parse_style_list(&args.styles)?;
    let weight_range = args
        .weight
        .as_deref()
        .map(parse_weight_range)
        .transpose()?;
    let name_patterns = compile_patterns(&args.name_patterns)?;

    Ok(FamilyFilter::new()
        .with_formats(formats)
        .with_styles(styles)
        .with_weight_range(weight_range)
        .with_name_patterns(name_patterns)
        .require_default(args.with_default)
        .skip_empty(args.non_empty))
}

fn compile_patterns(patterns: &[String]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|p| Regex::new(p).with_context(|| format!("invalid regex: {p}")))
        .collect()
}

fn write_plain(families: &[FamilyRecord], mut w: impl Write, color: bool) -> Result<()> {
    for family in families {
        let rendered = apply_color(&family.family_name, color, AnsiColor::Cyan);
        writeln!(w, "{rendered}")?;
    }
    Ok(())
}

fn write_columns(families: &[FamilyRecord], mut w: impl Write, color: bool) -> Result<()> {
    let mut rows: Vec<(String, String, String)> = families
        .iter()
        .map(|f| {
            let tags = format!(
                "fonts:{:<3} {:<7} {:>9}{}",
                f.font_count,
                formats_label(f),
                format_size(f.total_size),
                if f.has_default_font { " default" } else { "" },
            );

            (f.family_name.clone(), f.display_name.clone(), tags)
        })
        .collect();

    let key_width = rows
        .iter()
        .map(|r| r.0.len())
        .max()
        .unwrap_or(0)
        .clamp(0, 60);
    let name_width = rows
        .iter()
        .map(|r| r.1.len())
        .max()
        .unwrap_or(0)
        .clamp(0, 80);

    for (key, name, tags) in rows.drain(..) {
        let padded_key = format!("{:<key_width$}", key);
        let padded_name = format!("{:<name_width$}", name);
        let rendered_key = apply_color(&padded_key, color, AnsiColor::Cyan);
        let rendered_name = apply_color(&padded_name, color, AnsiColor::Yellow);
        let rendered_tags = apply_color(&tags, color, AnsiColor::Green);

        writeln!(w, "{rendered_key}  {rendered_name}  {rendered_tags}")?;
    }

    Ok(())
}

fn formats_label(family: &FamilyRecord) -> String {
    if family.formats.is_empty() {
        return "-".to_string();
    }

    family
        .formats
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join("+")
}

fn format_size(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = 1024.0 * 1024.0;

    let b = bytes as f64;
    if b >= MIB {
        format!("{:.1} MiB", b / MIB)
    } else if b >= KIB {
        format!("{:.1} KiB", b / KIB)
    } else {
        format!("{bytes} B")
    }
}

#[derive(Copy, Clone)]
enum AnsiColor {
    Cyan,
    Yellow,
    Green,
}

fn apply_color(text: &str, color: bool, code: AnsiColor) -> String {
    if !color {
        return text.to_string();
    }

    let code_str = match code {
        AnsiColor::Cyan => "36",
        AnsiColor::Yellow => "33",
        AnsiColor::Green => "32",
    };

    format!("\u{1b}[{}m{}\u{1b}[0m", code_str, text)
}
