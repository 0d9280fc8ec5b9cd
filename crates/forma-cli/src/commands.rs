//! Command implementations.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use tracing::info;

use forma_format::{ReaderOptions, UnknownTagPolicy, read_project_with_options, write_project};
use forma_model::Project;

use crate::cli::{GenerateArgs, InfoArgs, RewriteArgs};

fn reader_options(strict_tags: bool) -> ReaderOptions {
    ReaderOptions {
        unknown_tags: if strict_tags {
            UnknownTagPolicy::Error
        } else {
            UnknownTagPolicy::Skip
        },
    }
}

fn load_project(path: &Path, strict_tags: bool) -> Result<Project> {
    let bytes =
        fs::read(path).with_context(|| format!("read project file {}", path.display()))?;
    let project = read_project_with_options(&bytes, &reader_options(strict_tags))
        .with_context(|| format!("decode project file {}", path.display()))?;
    info!(
        windows = project.windows.len(),
        controls = project.control_count(),
        "loaded {}",
        path.display()
    );
    Ok(project)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

pub fn run_info(args: &InfoArgs) -> Result<()> {
    let project = load_project(&args.project, false)?;

    if args.json {
        let json = serde_json::to_string_pretty(&project).context("serialize project")?;
        println!("{json}");
        return Ok(());
    }

    println!("Project: {}", project.name);
    if !project.directory.is_empty() {
        println!("Directory: {}", project.directory);
    }
    if !project.source_path.is_empty() {
        println!("Source: {}", project.source_path);
    }
    println!("Grid: {}", project.grid_size);

    let mut table = Table::new();
    table.set_header(vec!["Window", "Parent", "Rect", "Anchor", "Controls", "Members"]);
    apply_table_style(&mut table);
    for window in &project.windows {
        let rect = format!(
            "{},{} {}x{}",
            window.rect.x, window.rect.y, window.rect.w, window.rect.h
        );
        table.add_row(vec![
            window.name.clone(),
            window.parent.clone().unwrap_or_default(),
            rect,
            window.orientation.as_str().to_string(),
            window.controls.len().to_string(),
            window.members.len().to_string(),
        ]);
    }
    println!("{table}");

    if !project.tables.is_empty() {
        let mut defs = Table::new();
        defs.set_header(vec!["Table", "Columns", "Layout"]);
        apply_table_style(&mut defs);
        for def in &project.tables {
            let layout = def
                .columns
                .iter()
                .map(|c| {
                    format!(
                        "{} ({}, {})",
                        c.display.label,
                        c.display.width,
                        c.display.align.as_str()
                    )
                })
                .collect::<Vec<_>>()
                .join(", ");
            defs.add_row(vec![
                def.name.clone(),
                def.columns.len().to_string(),
                layout,
            ]);
        }
        println!("{defs}");
    }
    Ok(())
}

pub fn run_generate(args: &GenerateArgs) -> Result<()> {
    let project = load_project(&args.project, args.strict_tags)?;

    let out_path = args
        .out
        .clone()
        .or_else(|| {
            (!project.source_path.is_empty()).then(|| PathBuf::from(&project.source_path))
        })
        .ok_or_else(|| {
            anyhow!("no output path: pass --out or set the project's source path")
        })?;

    let prior_path = args.prior.as_ref().unwrap_or(&out_path);
    let prior = match fs::read_to_string(prior_path) {
        Ok(text) => Some(text),
        // No previous output means no snippets to preserve.
        Err(error) if error.kind() == ErrorKind::NotFound => None,
        Err(error) => {
            return Err(error)
                .with_context(|| format!("read prior source {}", prior_path.display()));
        }
    };

    let text = forma_codegen::generate(&project, prior.as_deref());

    if args.dry_run {
        print!("{text}");
        return Ok(());
    }

    if let Some(parent) = out_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    fs::write(&out_path, &text)
        .with_context(|| format!("write generated source {}", out_path.display()))?;
    info!(bytes = text.len(), "wrote {}", out_path.display());
    Ok(())
}

pub fn run_rewrite(args: &RewriteArgs) -> Result<()> {
    let project = load_project(&args.input, args.strict_tags)?;
    let bytes = write_project(&project).context("encode project")?;
    write_atomic(&args.output, &bytes)?;
    info!(bytes = bytes.len(), "rewrote {}", args.output.display());
    Ok(())
}

/// Write via a temp file and rename so a crash cannot leave a partial
/// project file behind.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let temp_path = path.with_extension("fui.tmp");
    fs::write(&temp_path, bytes)
        .with_context(|| format!("write temp file {}", temp_path.display()))?;
    fs::rename(&temp_path, path)
        .with_context(|| format!("rename {} into place", temp_path.display()))?;
    Ok(())
}
