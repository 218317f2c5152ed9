use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "report-calc",
    version,
    about = "Weighted grade-average calculator with printable reports"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write a blank score sheet for a number of subjects
    New(NewArgs),
    /// Score a sheet and print the averages
    Calc(CalcArgs),
    /// Score a sheet and write a printable report
    Export(ExportArgs),
    /// Write the default config file to ./report-calc.toml
    Init(InitArgs),
}

#[derive(Debug, Args, Clone)]
pub struct SheetArgs {
    /// Score sheet (TOML, or JSON when the extension is .json)
    pub sheet: PathBuf,
    /// Display name, overrides `student` from the sheet
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct CalcArgs {
    #[command(flatten)]
    pub sheet: SheetArgs,
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args, Clone)]
pub struct ExportArgs {
    #[command(flatten)]
    pub sheet: SheetArgs,
    /// Directory for the report, defaults to report.output_dir
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct NewArgs {
    #[arg(long, short = 's', default_value_t = 5)]
    pub subjects: usize,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long, default_value = "sheet.toml")]
    pub out: PathBuf,
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct InitArgs {
    #[arg(long)]
    pub config: Option<PathBuf>,
}
