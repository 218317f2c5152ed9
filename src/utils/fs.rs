use anyhow::{Context, Result, bail};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

static UNSAFE_FILE_CHARS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9]").expect("valid file name regex"));

/// Replaces every char outside `[a-zA-Z0-9]` with `_`.
pub fn safe_file_stem(name: &str, fallback: &str) -> String {
    let stem = UNSAFE_FILE_CHARS_RE.replace_all(name, "_").into_owned();
    if stem.is_empty() {
        fallback.to_string()
    } else {
        stem
    }
}

pub fn write_new_file(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        bail!("refusing to overwrite existing file: {}", path.display());
    }

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed creating directory {}", parent.display()))?;
    }

    fs::write(path, content).with_context(|| format!("failed writing {}", path.display()))?;
    Ok(())
}
