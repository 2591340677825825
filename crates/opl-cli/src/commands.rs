use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span, warn};

use opl_ingest::{EntriesFile, MEET_FILE, discover_entries, read_table};
use opl_model::Sex;
use opl_validate::{CheckSettings, DiagnosticSink, TableChecker, WeightClassCatalog};

use crate::cli::{CheckArgs, ClassesArgs};
use crate::summary::apply_table_style;
use crate::types::RunResult;

pub fn run_check(args: &CheckArgs) -> Result<RunResult> {
    let settings = CheckSettings::load(args.config.as_deref(), args.weight_classes.as_deref())
        .context("load check settings")?;
    let checker = TableChecker::new(settings);
    let mut sink = DiagnosticSink::new();
    let mut files_checked = 0usize;

    for root in &args.paths {
        let span = info_span!("check_root", root = %root.display());
        let _guard = span.enter();
        let entries =
            discover_entries(root).with_context(|| format!("discover {}", root.display()))?;
        if entries.is_empty() {
            warn!("no entries.csv found");
        }
        for entry in &entries {
            check_entry(&checker, entry, &mut sink);
            files_checked += 1;
        }
    }

    if let Some(path) = &args.report {
        write_report(path, &sink)?;
    }

    info!(
        files = files_checked,
        errors = sink.error_count(),
        warnings = sink.warning_count(),
        "check complete"
    );
    Ok(RunResult {
        files_checked,
        error_count: sink.error_count(),
        warning_count: sink.warning_count(),
        reports: sink.into_reports(),
    })
}

/// Check one file. Problems reading it become findings against the file so
/// the run carries on with the next one.
fn check_entry(checker: &TableChecker, entry: &EntriesFile, sink: &mut DiagnosticSink) {
    match read_table(&entry.path) {
        Ok(table) => checker.check(&entry.path, &table, sink),
        Err(error) => {
            sink.reset(&entry.path);
            sink.error(format!("Could not read table: {error}"));
        }
    }
    if entry.meet_path.is_none() {
        sink.error(format!("Missing companion {MEET_FILE}"));
    }
}

fn write_report(path: &Path, sink: &DiagnosticSink) -> Result<()> {
    let json = serde_json::to_string_pretty(sink.reports()).context("serialize report")?;
    fs::write(path, json).with_context(|| format!("write report {}", path.display()))?;
    info!(path = %path.display(), "wrote report");
    Ok(())
}

pub fn run_classes(args: &ClassesArgs) -> Result<()> {
    let catalog = match &args.weight_classes {
        Some(path) => WeightClassCatalog::from_path(path)
            .with_context(|| format!("load weight classes {}", path.display()))?,
        None => WeightClassCatalog::default(),
    };
    println!("{}", classes_table(&catalog));
    println!("Men only: {}", catalog.men_only().join(", "));
    println!("Women only: {}", catalog.women_only().join(", "));
    Ok(())
}

/// One row per scheme and sex, classes in file order.
pub fn classes_table(catalog: &WeightClassCatalog) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Scheme", "Sex", "Classes"]);
    apply_table_style(&mut table);
    for scheme in catalog.schemes() {
        for sex in [Sex::M, Sex::F] {
            let classes: Vec<String> = catalog
                .entries()
                .iter()
                .filter(|entry| entry.scheme == scheme && entry.sex == sex)
                .map(|entry| entry.class.canonical())
                .collect();
            if !classes.is_empty() {
                table.add_row(vec![scheme.to_string(), sex.to_string(), classes.join(", ")]);
            }
        }
    }
    table
}
