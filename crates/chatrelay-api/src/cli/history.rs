//! `chatrelay history` -- print stored exchanges.

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use chatrelay_core::chat::repository::ChatRepository;
use chatrelay_types::chat::ChatRecord;

/// Print every record, most recent first, as a table or JSON.
///
/// Reads the store directly so no API key is needed.
pub async fn list_history<R: ChatRepository>(repo: &R, json: bool) -> Result<()> {
    let records = repo.list_all().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!();
        println!(
            "  {} No chats yet. Start one with: {}",
            style("i").blue().bold(),
            style("chatrelay ask \"hello\"").yellow()
        );
        println!();
        return Ok(());
    }

    println!();
    println!("{}", render_table(&records));
    println!();
    println!(
        "  {} exchange{}",
        style(records.len()).bold(),
        if records.len() == 1 { "" } else { "s" }
    );
    println!();

    Ok(())
}

fn render_table(records: &[ChatRecord]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("#").fg(Color::White),
        Cell::new("When").fg(Color::White),
        Cell::new("Message").fg(Color::White),
        Cell::new("Reply").fg(Color::White),
    ]);

    for record in records {
        table.add_row(vec![
            Cell::new(record.id).fg(Color::DarkGrey),
            Cell::new(format_relative_time(&record.timestamp)).fg(Color::DarkGrey),
            Cell::new(truncate(&record.user_message, 40)).fg(Color::Cyan),
            Cell::new(truncate(&record.bot_reply, 60)),
        ]);
    }

    table
}

/// Truncate to `max` characters, appending "..." when shortened.
fn truncate(text: &str, max: usize) -> String {
    let flat = text.replace('\n', " ");
    if flat.chars().count() > max {
        let head: String = flat.chars().take(max.saturating_sub(3)).collect();
        format!("{head}...")
    } else {
        flat
    }
}

fn format_relative_time(dt: &chrono::DateTime<chrono::Utc>) -> String {
    let now = chrono::Utc::now();
    let diff = now - *dt;

    if diff.num_minutes() < 1 {
        "just now".to_string()
    } else if diff.num_hours() < 1 {
        format!("{}m ago", diff.num_minutes())
    } else if diff.num_days() < 1 {
        format!("{}h ago", diff.num_hours())
    } else if diff.num_days() < 30 {
        format!("{}d ago", diff.num_days())
    } else {
        dt.format("%Y-%m-%d").to_string()
    }
}
