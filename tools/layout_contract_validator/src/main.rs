//! Checks the checked-in layout contract (`docs/helio-layout-contract.json`)
//! against the registry compiled into `helio-script-abi`: header sizes, every
//! shadow-visible field offset/size, and the pinned host ABI version. Run in
//! CI and whenever the host object headers are re-synced; a diff between the
//! two artifacts is exactly the silent-misread hazard the contract exists to
//! catch.
//!
//! `--print-fingerprint` emits the registry fingerprint for the host build
//! system to embed (the value hosts hand back at script-load time).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;

use helio_script_abi::{
    HOST_ABI_MAJOR, HOST_ABI_MINOR, LAYOUTS, LAYOUT_FINGERPRINT, OBJECT_HEADER_BYTES,
    PROGRAM_HEADER_BYTES,
};

#[derive(Parser, Debug)]
#[command(
    about = "Validate docs/helio-layout-contract.json against the shadow layout registry compiled into helio-script-abi."
)]
struct Args {
    /// Repository root directory (defaults to current working directory).
    #[arg(long, default_value = ".")]
    repo_root: PathBuf,

    /// Path to the layout contract JSON (relative to repo_root unless absolute).
    #[arg(long, default_value = "docs/helio-layout-contract.json")]
    contract: PathBuf,

    /// Print the registry fingerprint for this target and exit.
    #[arg(long)]
    print_fingerprint: bool,
}

#[derive(Debug, Clone, serde::Deserialize)]
struct LayoutContract {
    schema_version: u32,
    contract_name: String,
    host_abi: HostAbi,
    layouts: WidthSections,
}

#[derive(Debug, Clone, serde::Deserialize)]
struct HostAbi {
    major: u32,
    minor: u32,
}

#[derive(Debug, Clone, serde::Deserialize)]
struct WidthSections {
    #[serde(default)]
    abi64: Option<WidthSection>,
    #[serde(default)]
    abi32: Option<WidthSection>,
}

#[derive(Debug, Clone, serde::Deserialize)]
struct WidthSection {
    pointer_width: u32,
    object_header_bytes: usize,
    program_header_bytes: usize,
    kinds: Vec<KindEntry>,
}

#[derive(Debug, Clone, serde::Deserialize)]
struct KindEntry {
    kind: String,
    header_bytes: usize,
    size_bytes: usize,
    fields: Vec<FieldEntry>,
}

#[derive(Debug, Clone, serde::Deserialize)]
struct FieldEntry {
    name: String,
    offset: usize,
    size: usize,
}

fn main() {
    tracing_subscriber::fmt().with_target(false).init();
    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    if args.print_fingerprint {
        println!(
            "host_abi={HOST_ABI_MAJOR}.{HOST_ABI_MINOR} pointer_width={} fingerprint={LAYOUT_FINGERPRINT:#018x}",
            usize::BITS,
        );
        return Ok(());
    }

    let contract_path = resolve_under(&args.repo_root, &args.contract);
    let contract = load_contract(&contract_path)
        .with_context(|| format!("load layout contract {}", contract_path.display()))?;

    validate_contract(&contract)?;

    info!(
        "layout contract OK: {} kinds, host ABI {}.{}, fingerprint {:#018x}",
        LAYOUTS.len(),
        HOST_ABI_MAJOR,
        HOST_ABI_MINOR,
        LAYOUT_FINGERPRINT,
    );
    Ok(())
}

fn resolve_under(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

fn load_contract(path: &Path) -> Result<LayoutContract> {
    let text = fs::read_to_string(path)?;
    let contract: LayoutContract = serde_json::from_str(&text)?;
    Ok(contract)
}

fn validate_contract(contract: &LayoutContract) -> Result<()> {
    if contract.schema_version != 1 {
        bail!(
            "unsupported contract schema_version {} (expected 1)",
            contract.schema_version
        );
    }
    if contract.contract_name != "helio-script-object-layouts" {
        bail!("unexpected contract_name {:?}", contract.contract_name);
    }
    if contract.host_abi.major != HOST_ABI_MAJOR || contract.host_abi.minor != HOST_ABI_MINOR {
        bail!(
            "contract pins host ABI {}.{} but this registry pins {}.{}",
            contract.host_abi.major,
            contract.host_abi.minor,
            HOST_ABI_MAJOR,
            HOST_ABI_MINOR,
        );
    }

    let (section_name, section) = match usize::BITS {
        64 => ("abi64", contract.layouts.abi64.as_ref()),
        32 => ("abi32", contract.layouts.abi32.as_ref()),
        other => bail!("unsupported pointer width {other}"),
    };
    let section =
        section.with_context(|| format!("contract has no {section_name} section for this target"))?;

    validate_section(section_name, section)
}

fn validate_section(section_name: &str, section: &WidthSection) -> Result<()> {
    let mut diffs: Vec<String> = Vec::new();

    if section.pointer_width as usize != usize::BITS as usize {
        diffs.push(format!(
            "{section_name}.pointer_width is {} but this target is {}-bit",
            section.pointer_width,
            usize::BITS
        ));
    }
    if section.object_header_bytes != OBJECT_HEADER_BYTES {
        diffs.push(format!(
            "object_header_bytes: contract {} vs registry {}",
            section.object_header_bytes, OBJECT_HEADER_BYTES
        ));
    }
    if section.program_header_bytes != PROGRAM_HEADER_BYTES {
        diffs.push(format!(
            "program_header_bytes: contract {} vs registry {}",
            section.program_header_bytes, PROGRAM_HEADER_BYTES
        ));
    }

    if section.kinds.len() != LAYOUTS.len() {
        diffs.push(format!(
            "kind count: contract {} vs registry {}",
            section.kinds.len(),
            LAYOUTS.len()
        ));
    }

    for (entry, layout) in section.kinds.iter().zip(LAYOUTS.iter()) {
        let kind = layout.kind.name();
        if entry.kind != kind {
            diffs.push(format!(
                "kind order: contract {:?} vs registry {:?}",
                entry.kind, kind
            ));
            continue;
        }
        if entry.header_bytes != layout.header_bytes {
            diffs.push(format!(
                "{kind}.header_bytes: contract {} vs registry {}",
                entry.header_bytes, layout.header_bytes
            ));
        }
        if entry.size_bytes != layout.size_bytes {
            diffs.push(format!(
                "{kind}.size_bytes: contract {} vs registry {}",
                entry.size_bytes, layout.size_bytes
            ));
        }
        if entry.fields.len() != layout.fields.len() {
            diffs.push(format!(
                "{kind} field count: contract {} vs registry {}",
                entry.fields.len(),
                layout.fields.len()
            ));
            continue;
        }
        for (field, desc) in entry.fields.iter().zip(layout.fields.iter()) {
            if field.name != desc.name {
                diffs.push(format!(
                    "{kind} field order: contract {:?} vs registry {:?}",
                    field.name, desc.name
                ));
                continue;
            }
            if field.offset != desc.offset {
                diffs.push(format!(
                    "{kind}.{}: offset contract {} vs registry {}",
                    desc.name, field.offset, desc.offset
                ));
            }
            if field.size != desc.size {
                diffs.push(format!(
                    "{kind}.{}: size contract {} vs registry {}",
                    desc.name, field.size, desc.size
                ));
            }
        }
    }

    if !diffs.is_empty() {
        bail!(
            "layout contract diverges from the compiled registry:\n  {}",
            diffs.join("\n  ")
        );
    }
    Ok(())
}
