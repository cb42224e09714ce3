//! The list command

use colored::Colorize;
use syncctl_core::{Activity, SyncerStatus};

use crate::context::SyncContext;
use crate::error::Result;

/// Run the list command
pub fn run_list(ctx: &SyncContext, json: bool) -> Result<()> {
    let rows = ctx.dispatcher().list()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        tracing::info!("No active syncers configured. Use 'syncctl enable <syncer>' to start.");
        return Ok(());
    }

    print!("{}", render_table(&rows));
    Ok(())
}

/// Render rows as an `active`/`syncer` table.
fn render_table(rows: &[SyncerStatus]) -> String {
    let width = rows
        .iter()
        .map(|row| row.active.as_str().len())
        .chain(std::iter::once("active".len()))
        .max()
        .unwrap_or_default();

    let mut out = format!("{:<width$}  {}\n", "active".bold(), "syncer".bold());
    for row in rows {
        let label = match row.active {
            Activity::Active => row.active.as_str().green(),
            Activity::Disabled => row.active.as_str().dimmed(),
        };
        out.push_str(&format!("{:<width$}  {}\n", label, row.syncer));
    }
    out
}
