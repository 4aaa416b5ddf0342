use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// `$NANOFIN_HOME`, or `~/.nanofin`
pub fn nanofin_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("NANOFIN_HOME") {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let home = std::env::var("HOME").context("HOME is not set (or set NANOFIN_HOME)")?;
    Ok(PathBuf::from(home).join(".nanofin"))
}

pub fn ensure_nanofin_home() -> Result<PathBuf> {
    let dir = nanofin_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}
