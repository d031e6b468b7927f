use crate::output;
use anyhow::Context;
use claudekit_core::bundle::Bundle;
use claudekit_core::install::{self, SettingsOutcome};
use std::path::Path;

pub fn run(home: &Path, source: &Path, json: bool) -> anyhow::Result<()> {
    let bundle = Bundle::load(source)
        .with_context(|| format!("cannot install from {}", source.display()))?;

    let report = install::install(home, &bundle).context("install failed")?;

    if json {
        return output::print_json(&report);
    }

    println!("Installing Claude configuration to: {}", report.target.display());

    match &report.backup {
        Some(path) => println!("  backed up existing configuration to: {}", path.display()),
        None => println!("  no existing configuration — fresh install"),
    }

    for dir in &report.dirs {
        println!("  {}: {} files", dir.name, dir.files);
    }
    println!("  CLAUDE.md");

    match &report.settings {
        SettingsOutcome::Installed => println!("  settings.json"),
        SettingsOutcome::Preserved { template } => {
            println!(
                "  settings.json: kept yours (incoming written to {})",
                template
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default()
            );
        }
        SettingsOutcome::Absent => {}
    }

    if report.settings_local_restored {
        println!("  restored: settings.local.json (from backup)");
    }

    println!("\nInstall complete.");
    Ok(())
}
