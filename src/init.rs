use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use crate::config::CONFIG_FILE_NAME;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitPreset {
    Rust,
    Go,
    Python,
}

/// Write the preset into `.license-header.toml` inside `dir`
pub fn generate_config(dir: &Path, preset: InitPreset) -> Result<PathBuf> {
    let path = dir.join(CONFIG_FILE_NAME);
    generate_config_at_path(&path, preset)?;
    Ok(path)
}

/// Create the file from the preset, or replace only its `[license]` table
/// when the file already exists.
pub fn generate_config_at_path<P: AsRef<Path>>(path: P, preset: InitPreset) -> Result<()> {
    let path = path.as_ref();

    if !path.exists() {
        fs::write(path, get_preset_config(preset))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        return Ok(());
    }

    replace_license_section(path, preset)
}

fn replace_license_section(path: &Path, preset: InitPreset) -> Result<()> {
    let existing_content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let mut doc = existing_content
        .parse::<toml_edit::DocumentMut>()
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    let preset_doc = get_preset_config(preset).parse::<toml_edit::DocumentMut>()?;
    let license = preset_doc
        .get("license")
        .ok_or_else(|| anyhow::anyhow!("Invalid preset config format"))?;

    // `policy` is accepted as an alias of `license`; keep only one of them
    doc.remove("policy");
    doc["license"] = license.clone();

    fs::write(path, doc.to_string())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

fn get_preset_config(preset: InitPreset) -> &'static str {
    match preset {
        InitPreset::Rust => include_str!("../presets/rust.toml"),
        InitPreset::Go => include_str!("../presets/go.toml"),
        InitPreset::Python => include_str!("../presets/python.toml"),
    }
}
