//! Prxcrypt CLI - Command-line tool for inspecting encrypted PSP modules.
//!
//! The tool reads module headers and the key catalogs; it does not decrypt,
//! since that needs a crypto engine holding the hardware keys.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, warn, LevelFilter};
use rayon::prelude::*;
use serde::Serialize;
use walkdir::WalkDir;

use prxcrypt::prelude::*;

/// Prxcrypt - encrypted PSP module inspector
#[derive(Parser)]
#[command(name = "prxcrypt")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Treat an additional engine code as available (hex or decimal)
    #[arg(
        long = "allow-code",
        env = "PRXCRYPT_EXTRA_CODES",
        value_delimiter = ',',
        value_parser = parse_code,
        global = true
    )]
    allow_code: Vec<u8>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List key catalog entries
    Tags {
        /// Only this variant (1 or 2)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=2))]
        variant: Option<u8>,

        /// Only entries whose engine codes are all available
        #[arg(long)]
        available: bool,

        /// Only tags that appear more than once
        #[arg(long)]
        duplicates: bool,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Identify module files
    Inspect {
        /// Module files or glob patterns
        #[arg(required = true)]
        inputs: Vec<String>,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Identify every module under a directory
    Scan {
        /// Directory to walk
        #[arg(env = "PRXCRYPT_SCAN_DIR")]
        dir: PathBuf,

        /// File name filter (glob-style)
        #[arg(short, long)]
        filter: Option<String>,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .parse_default_env()
        .init();

    let mut gate = KeyGate::default();
    for &code in &cli.allow_code {
        gate.allow(code);
    }
    debug!("engine codes: {gate:?}");

    match cli.command {
        Commands::Tags { variant, available, duplicates, json } => {
            cmd_tags(&gate, variant, available, duplicates, json)?;
        }
        Commands::Inspect { inputs, json } => {
            cmd_inspect(&gate, &inputs, json)?;
        }
        Commands::Scan { dir, filter, json } => {
            cmd_scan(&gate, &dir, filter.as_deref(), json)?;
        }
    }

    Ok(())
}

/// Parse an engine code given as `0x5D` or `93`.
fn parse_code(s: &str) -> std::result::Result<u8, String> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid engine code {s:?}: {e}"))
}

#[derive(Serialize)]
#[serde(untagged)]
enum Entry {
    V1(&'static TagInfo),
    V2(&'static TagInfo2),
}

#[derive(Serialize)]
struct TagRow {
    variant: Variant,
    #[serde(flatten)]
    entry: Entry,
    codes: Vec<u8>,
    available: bool,
    /// An earlier entry has the same tag, so lookup never returns this one.
    shadowed: bool,
}

fn catalog_rows(gate: &KeyGate) -> Vec<TagRow> {
    fn row<R: KeyRecord>(variant: Variant, entry: Entry, record: &R, shadowed: bool, gate: &KeyGate) -> TagRow {
        let codes: Vec<u8> = record.required_codes().collect();
        let available = codes.iter().all(|&c| gate.contains(c));
        TagRow { variant, entry, codes, available, shadowed }
    }

    let mut rows = Vec::new();
    for (i, info) in keys::v1::iter().enumerate() {
        let shadowed = keys::v1::iter().position(|t| t.tag == info.tag) != Some(i);
        rows.push(row(Variant::V1, Entry::V1(info), info, shadowed, gate));
    }
    for (i, info) in keys::v2::iter().enumerate() {
        let shadowed = keys::v2::iter().position(|t| t.tag == info.tag) != Some(i);
        rows.push(row(Variant::V2, Entry::V2(info), info, shadowed, gate));
    }
    rows
}

fn cmd_tags(gate: &KeyGate, variant: Option<u8>, available: bool, duplicates: bool, json: bool) -> Result<()> {
    let duplicated: Vec<u32> = keys::v1::duplicate_tags()
        .into_iter()
        .chain(keys::v2::duplicate_tags())
        .collect();

    let rows: Vec<TagRow> = catalog_rows(gate)
        .into_iter()
        .filter(|r| match variant {
            Some(1) => r.variant == Variant::V1,
            Some(_) => r.variant == Variant::V2,
            None => true,
        })
        .filter(|r| !available || r.available)
        .filter(|r| !duplicates || duplicated.contains(&entry_tag(&r.entry)))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for r in &rows {
        let (tag, label, kind) = match r.entry {
            Entry::V1(info) => (info.tag, info.label, String::new()),
            Entry::V2(info) => (info.tag, info.label, format!(" type {}", info.kind)),
        };
        let codes: Vec<String> = r.codes.iter().map(|c| format!("{c:02X}")).collect();
        println!(
            "{:#010x}  v{}  codes {:<6} {} {}{}{}",
            tag,
            if r.variant == Variant::V1 { 1 } else { 2 },
            codes.join(","),
            if r.available { "A" } else { " " },
            label,
            kind,
            if r.shadowed { "  (shadowed)" } else { "" }
        );
    }

    println!("\nTotal: {} entries", rows.len());

    Ok(())
}

fn entry_tag(entry: &Entry) -> u32 {
    match entry {
        Entry::V1(info) => info.tag,
        Entry::V2(info) => info.tag,
    }
}

#[derive(Serialize)]
struct HeaderSummary {
    module_name: String,
    version: (u8, u8),
    kernel: bool,
    compressed: bool,
    elf_size: u32,
    psp_size: u32,
    decrypt_mode: u8,
}

impl From<&PrxHeader> for HeaderSummary {
    fn from(header: &PrxHeader) -> Self {
        Self {
            module_name: header.module_name(),
            version: header.module_version(),
            kernel: header.is_kernel_module(),
            compressed: header.is_compressed(),
            elf_size: header.elf_size,
            psp_size: header.psp_size,
            decrypt_mode: header.decrypt_mode,
        }
    }
}

#[derive(Serialize)]
struct Report {
    path: PathBuf,
    header: Option<HeaderSummary>,
    identification: Option<Identification>,
    /// Why the module could not be identified or would be rejected.
    problem: Option<String>,
}

impl Report {
    fn is_decryptable(&self) -> bool {
        self.problem.is_none() && self.identification.as_ref().is_some_and(|id| id.is_decryptable())
    }
}

fn inspect_file(gate: &KeyGate, path: &Path) -> Report {
    let mut report = Report {
        path: path.to_path_buf(),
        header: None,
        identification: None,
        problem: None,
    };

    let data = match fs::read(path) {
        Ok(data) => data,
        Err(e) => {
            report.problem = Some(format!("read failed: {e}"));
            return report;
        }
    };

    match PrxHeader::parse(&data) {
        Ok(header) if header.has_psp_magic() => report.header = Some(HeaderSummary::from(&header)),
        Ok(_) => debug!("{}: no ~PSP signature", path.display()),
        Err(e) => debug!("{}: {e}", path.display()),
    }

    match identify(gate, &data) {
        Ok(id) => {
            report.problem = match (id.missing_code, id.check_size()) {
                (Some(code), _) => Some(format!("missing key {code:02X}")),
                (None, Err(e)) => Some(e.to_string()),
                (None, Ok(())) if id.route == Route::Unknown => Some(format!("unknown tag {:#010x}", id.tag)),
                (None, Ok(())) => None,
            };
            report.identification = Some(id);
        }
        Err(e) => report.problem = Some(e.to_string()),
    }

    report
}

fn print_report(report: &Report) {
    println!("{}", report.path.display());
    if let Some(header) = &report.header {
        println!(
            "  module   {} v{}.{}{}{}",
            header.module_name,
            header.version.0,
            header.version.1,
            if header.kernel { " kernel" } else { "" },
            if header.compressed { " compressed" } else { "" }
        );
        println!("  sizes    elf {:#x}, psp {:#x}", header.elf_size, header.psp_size);
    }
    if let Some(id) = &report.identification {
        let variant = id.route.variant().map_or_else(|| "-".to_string(), |v| v.to_string());
        println!(
            "  tag      {:#010x} ({}, {})",
            id.tag,
            variant,
            id.route.label().unwrap_or("not catalogued")
        );
        if let Some(size) = id.declared_size {
            println!("  declared {size:#x} bytes of {:#x}", id.len);
        }
    }
    match &report.problem {
        Some(problem) => println!("  status   {problem}"),
        None => println!("  status   decryptable"),
    }
}

/// Expand file arguments, treating any with wildcards as glob patterns.
fn expand_inputs(inputs: &[String]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for input in inputs {
        if input.contains(['*', '?', '[']) {
            let matches = glob::glob(input).with_context(|| format!("Invalid glob pattern: {input}"))?;
            for entry in matches {
                match entry {
                    Ok(path) if path.is_file() => paths.push(path),
                    Ok(_) => {}
                    Err(e) => warn!("{e}"),
                }
            }
        } else {
            paths.push(PathBuf::from(input));
        }
    }
    Ok(paths)
}

fn cmd_inspect(gate: &KeyGate, inputs: &[String], json: bool) -> Result<()> {
    let paths = expand_inputs(inputs)?;
    if paths.is_empty() {
        anyhow::bail!("No input files matched");
    }

    let reports: Vec<Report> = paths.iter().map(|p| inspect_file(gate, p)).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            print_report(report);
        }
    }

    Ok(())
}

fn has_psp_magic(path: &Path) -> bool {
    use std::io::Read;

    let mut magic = [0u8; 4];
    fs::File::open(path)
        .and_then(|mut f| f.read_exact(&mut magic))
        .map(|_| magic == PrxHeader::MAGIC)
        .unwrap_or(false)
}

#[derive(Serialize)]
struct TagSummary {
    tag: u32,
    label: Option<&'static str>,
    modules: usize,
    decryptable: usize,
}

fn cmd_scan(gate: &KeyGate, dir: &Path, filter: Option<&str>, json: bool) -> Result<()> {
    let pattern = filter
        .map(glob::Pattern::new)
        .transpose()
        .context("Invalid glob pattern")?;

    let start = Instant::now();
    let paths: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| match e {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("{e}");
                None
            }
        })
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            pattern
                .as_ref()
                .map_or(true, |p| p.matches(&e.file_name().to_string_lossy()))
        })
        .map(|e| e.into_path())
        .collect();

    if !json {
        println!("Inspecting {} files under {}...", paths.len(), dir.display());
    }

    let pb = ProgressBar::new(paths.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("#>-"),
    );

    let mut reports: Vec<Report> = paths
        .par_iter()
        .filter_map(|path| {
            let report = has_psp_magic(path).then(|| inspect_file(gate, path));
            pb.inc(1);
            report
        })
        .collect();
    pb.finish_and_clear();
    reports.sort_by(|a, b| a.path.cmp(&b.path));

    let mut summary: BTreeMap<u32, TagSummary> = BTreeMap::new();
    for report in &reports {
        if let Some(id) = &report.identification {
            let row = summary.entry(id.tag).or_insert_with(|| TagSummary {
                tag: id.tag,
                label: id.route.label(),
                modules: 0,
                decryptable: 0,
            });
            row.modules += 1;
            if report.is_decryptable() {
                row.decryptable += 1;
            }
        }
    }

    if json {
        #[derive(Serialize)]
        struct ScanOutput<'a> {
            modules: &'a [Report],
            tags: Vec<&'a TagSummary>,
        }
        let output = ScanOutput {
            modules: &reports,
            tags: summary.values().collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for row in summary.values() {
        println!(
            "{:#010x}  {:>5} modules  {:>5} decryptable  {}",
            row.tag,
            row.modules,
            row.decryptable,
            row.label.unwrap_or("not catalogued")
        );
    }
    println!(
        "\n{} modules, {} tags in {:?}",
        reports.len(),
        summary.len(),
        start.elapsed()
    );

    Ok(())
}
