use crate::output;
use claudekit_core::status;
use std::path::Path;

pub fn run(home: &Path, json: bool) -> anyhow::Result<()> {
    let report = status::status(home)?;

    if json {
        return output::print_json(&report);
    }

    if !report.installed {
        println!("Not installed: {} does not exist.", report.target.display());
        return Ok(());
    }

    println!("Installed at: {}", report.target.display());
    for dir in &report.dirs {
        println!("  {}: {} files", dir.name, dir.files);
    }
    println!("  CLAUDE.md: {}", present(report.claude_md));
    println!("  settings.json: {}", present(report.settings));
    if report.settings_template {
        println!("  settings.template.json: present (pending manual merge)");
    }
    if report.settings_local {
        println!("  settings.local.json: present");
    }
    println!("Backups: {}", report.backups.len());
    Ok(())
}

fn present(yes: bool) -> &'static str {
    if yes {
        "present"
    } else {
        "missing"
    }
}
