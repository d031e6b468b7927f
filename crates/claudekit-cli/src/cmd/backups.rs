use crate::output;
use claudekit_core::backup;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct BackupRow {
    name: String,
    created: Option<String>,
}

pub fn run(home: &Path, json: bool) -> anyhow::Result<()> {
    let backups = backup::list(home)?;

    let rows: Vec<BackupRow> = backups
        .iter()
        .map(|b| BackupRow {
            name: b.name.clone(),
            created: b.created().map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string()),
        })
        .collect();

    if json {
        return output::print_json(&rows);
    }

    if rows.is_empty() {
        println!("No backups.");
        return Ok(());
    }
    for row in &rows {
        match &row.created {
            Some(t) => println!("{}  ({t})", row.name),
            None => println!("{}", row.name),
        }
    }
    Ok(())
}
