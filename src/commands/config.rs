use anyhow::Result;
use std::path::PathBuf;
use license_header_auditor::config::load_config;

pub fn handle_config(path: Option<PathBuf>, show: bool, validate: bool, quiet: bool) -> Result<()> {
    if !show && !validate {
        if !quiet {
            eprintln!("Use --show or --validate");
        }
        std::process::exit(1);
    }

    let dir = path.unwrap_or_else(|| PathBuf::from("."));
    let config = match load_config(&dir) {
        Ok(config) => config,
        Err(e) => {
            if !quiet {
                eprintln!("❌ Configuration validation failed: {:#}", e);
            }
            std::process::exit(1);
        }
    };

    if show && !quiet {
        println!("{}", serde_json::to_string_pretty(&config)?);
    }

    if validate {
        let problems = config.problems();
        if !problems.is_empty() {
            if !quiet {
                eprintln!("❌ Configuration validation failed:");
                for problem in &problems {
                    eprintln!("   - {}", problem);
                }
            }
            std::process::exit(1);
        }
        if !quiet {
            println!("✅ Configuration is valid");
        }
    }

    Ok(())
}
