mod cli;
mod config;
mod core;
mod sheet;
mod utils;

use anyhow::Result;
use chrono::{Local, Utc};
use clap::Parser;
use cli::{CalcArgs, Cli, Commands, ExportArgs, NewArgs, SheetArgs};
use colored::Colorize;
use crate::core::ScoredSheet;
use sheet::{Sheet, SheetFormat};
use std::path::{Path, PathBuf};

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            2
        }
    };

    std::process::exit(exit_code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::New(args) => run_new(args),
        Commands::Calc(args) => run_calc(args),
        Commands::Export(args) => run_export(args),
        Commands::Init(args) => {
            if args.config.is_some() {
                eprintln!(
                    "warning: --config is ignored by `report-calc init`; writing ./{}",
                    config::CONFIG_FILE_NAME
                );
            }

            let path = std::env::current_dir()?.join(config::CONFIG_FILE_NAME);
            config::write_default_config(&path)?;
            println!("created {}", path.display());
            Ok(0)
        }
    }
}

fn run_new(args: NewArgs) -> Result<i32> {
    let cwd = std::env::current_dir()?;
    let cfg = config::load_config(args.config.as_deref(), &cwd)?;

    let max = cfg.sheet.max_subjects;
    if args.subjects == 0 || args.subjects > max {
        anyhow::bail!(
            "--subjects must be between 1 and {} (got {})",
            max,
            args.subjects
        );
    }

    let out = resolve_path(&cwd, &args.out);
    let sheet = Sheet::blank(args.subjects, args.name);
    let content = sheet::render_sheet(&sheet, SheetFormat::from_path(&out))?;
    utils::fs::write_new_file(&out, &content)?;
    println!(
        "created {} with {} subjects; fill in the exams and run `report-calc calc {}`",
        out.display(),
        args.subjects,
        args.out.display()
    );
    Ok(0)
}

fn run_calc(args: CalcArgs) -> Result<i32> {
    let cwd = std::env::current_dir()?;
    let cfg = config::load_config(args.sheet.config.as_deref(), &cwd)?;
    let Some(scored) = load_and_score(&cwd, &args.sheet)? else {
        return Ok(1);
    };

    if args.json || cfg.general.json {
        println!("{}", core::render_json(&scored, &cfg)?);
    } else {
        core::report::print_human(&scored.calculation, scored.student(), &cfg);
    }

    Ok(0)
}

fn run_export(args: ExportArgs) -> Result<i32> {
    let cwd = std::env::current_dir()?;
    let cfg = config::load_config(args.sheet.config.as_deref(), &cwd)?;
    let Some(scored) = load_and_score(&cwd, &args.sheet)? else {
        return Ok(1);
    };

    let out_dir = match &args.out_dir {
        Some(dir) => resolve_path(&cwd, dir),
        None => resolve_path(&cwd, Path::new(&cfg.report.output_dir)),
    };
    let file_name = core::document::export_file_name(
        &core::document::prepared_for(scored.student()),
        Utc::now().timestamp_millis(),
    );
    let path = out_dir.join(file_name);

    let document = core::document::render_document(
        &scored.calculation,
        scored.student(),
        scored.date,
        &cfg,
    );
    utils::fs::write_new_file(&path, &document)?;
    println!("created {}", path.display());
    Ok(0)
}

/// `Ok(None)` means the sheet failed validation and the message was already printed.
fn load_and_score(cwd: &Path, args: &SheetArgs) -> Result<Option<ScoredSheet>> {
    let sheet_path = resolve_path(cwd, &args.sheet);
    let sheet = sheet::load_sheet(&sheet_path)?;

    if sheet.subjects.is_empty() {
        eprintln!(
            "warning: {} has no subjects; the final average defaults to 0",
            sheet_path.display()
        );
    }
    for index in sheet.ignored_activities() {
        eprintln!(
            "warning: subject #{} has an activity score but has_activity is false; ignoring it",
            index
        );
    }

    match core::score_sheet(&sheet, args.name.as_deref(), Local::now().date_naive()) {
        Ok(scored) => Ok(Some(scored)),
        Err(err) => {
            eprintln!("{} {}", "invalid input:".red().bold(), err);
            eprintln!(
                "-> hint: fix the {} of subject #{} and run again",
                err.field(),
                err.subject()
            );
            Ok(None)
        }
    }
}

fn resolve_path(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}
