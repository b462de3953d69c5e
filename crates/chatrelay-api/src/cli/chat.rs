//! `chatrelay ask` -- one exchange from the terminal.

use anyhow::Result;
use console::style;

use chatrelay_types::chat::ChatRequest;

use chatrelay_api::state::AppState;

/// Send `message` through the chat service and print the stored record.
///
/// Persists exactly like `POST /chat`. With `quiet`, only the reply text is
/// printed.
pub async fn ask(state: &AppState, message: String, json: bool, quiet: bool) -> Result<()> {
    let record = state.chat_service.send(&ChatRequest::new(message)).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    if quiet {
        println!("{}", record.bot_reply);
        return Ok(());
    }

    println!();
    println!("  {} {}", style("you").cyan().bold(), record.user_message);
    println!("  {} {}", style(state.chat_service.provider_name()).magenta().bold(), record.bot_reply);
    println!();
    println!(
        "  {}",
        style(format!("saved as #{} at {}", record.id, record.timestamp.to_rfc3339())).dim()
    );
    println!();

    Ok(())
}
