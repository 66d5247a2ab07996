use anyhow::Result;
use crate::cli::InitPreset;
use license_header_auditor::init;

pub fn handle_init(preset: InitPreset, quiet: bool) -> Result<()> {
    let init_preset = match preset {
        InitPreset::Rust => init::InitPreset::Rust,
        InitPreset::Go => init::InitPreset::Go,
        InitPreset::Python => init::InitPreset::Python,
    };

    let path = init::generate_config(&std::env::current_dir()?, init_preset)?;

    if !quiet {
        println!("✅ Wrote [license] section to {}", path.display());
    }

    Ok(())
}
