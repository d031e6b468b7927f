use crate::output;
use anyhow::Context;
use claudekit_core::restore;
use dialoguer::Confirm;
use std::path::Path;

pub fn run(home: &Path, yes: bool, json: bool) -> anyhow::Result<()> {
    // Pick the backup first so "no backups" fails before any prompt
    // and before anything is touched.
    let chosen = restore::candidate(home)?;

    if !yes {
        let proceed = Confirm::new()
            .with_prompt(format!(
                "Replace {} with backup {}?",
                claudekit_core::paths::claude_dir(home).display(),
                chosen.name
            ))
            .default(false)
            .interact()
            .context("confirmation prompt failed (use --yes in scripts)")?;
        if !proceed {
            println!("Aborted. Nothing was changed.");
            return Ok(());
        }
    }

    let report = restore::restore_latest(home).context("restore failed")?;

    if json {
        return output::print_json(&report);
    }

    println!(
        "Restored {} from {}",
        report.target.display(),
        report.restored_from.display()
    );
    if report.remaining.is_empty() {
        println!("No backups remain.");
    } else {
        println!("Remaining backups:");
        for name in &report.remaining {
            println!("  {name}");
        }
    }
    Ok(())
}
