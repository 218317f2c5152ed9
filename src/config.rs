use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "report-calc.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub report: ReportConfig,
    pub sheet: SheetConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub json: bool,
    /// Decimal places used when averages are displayed.
    pub decimals: u8,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            json: false,
            decimals: 2,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub title: String,
    pub footer: String,
    pub pass_mark: f64,
    pub output_dir: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: "REPORT CALCULATOR".to_string(),
            footer: "Generated by Report Calculator".to_string(),
            pass_mark: 10.0,
            output_dir: ".".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    pub max_subjects: usize,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self { max_subjects: 10 }
    }
}

pub fn load_config(cli_config_path: Option<&Path>, cwd: &Path) -> Result<Config> {
    let config = if let Some(path) = cli_config_path {
        if !path.exists() {
            bail!(
                "config file not found at {} (passed with --config)",
                path.display()
            );
        }
        read_config(path)?
    } else {
        let local_path = cwd.join(CONFIG_FILE_NAME);
        if local_path.exists() {
            read_config(&local_path)?
        } else {
            Config::default()
        }
    };

    validate_config(&config)?;
    Ok(config)
}

pub fn write_default_config(path: &Path) -> Result<()> {
    if path.exists() {
        bail!(
            "refusing to overwrite existing config file: {}",
            path.display()
        );
    }

    let content = default_config_toml()?;
    fs::write(path, content).with_context(|| format!("failed writing {}", path.display()))?;
    Ok(())
}

pub fn default_config_toml() -> Result<String> {
    toml::to_string_pretty(&Config::default()).context("failed to serialize default config")
}

fn read_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed reading config file {}", path.display()))?;
    parse_config(&content)
        .with_context(|| format!("failed parsing config file {}", path.display()))
}

fn parse_config(content: &str) -> Result<Config> {
    Ok(toml::from_str::<Config>(content)?)
}

fn validate_config(config: &Config) -> Result<()> {
    if config.general.decimals > 6 {
        bail!(
            "general.decimals must be at most 6 (got {})",
            config.general.decimals
        );
    }
    if !(0.0..=20.0).contains(&config.report.pass_mark) {
        bail!(
            "report.pass_mark must be within 0..=20 (got {})",
            config.report.pass_mark
        );
    }
    if config.sheet.max_subjects == 0 {
        bail!("sheet.max_subjects must be at least 1");
    }
    Ok(())
}
