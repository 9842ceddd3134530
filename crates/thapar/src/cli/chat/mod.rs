use anyhow::{Context, Result};
use std::io::stdout;
use thapar_core::assistant::Assistant;

mod banner;
mod repl;
mod terminal;

use banner::{GOODBYE, STARTING};
use terminal::ConsoleTerminal;

/// Starts the interactive chat session on the current terminal.
pub async fn execute(assistant: Assistant) -> Result<()> {
    watch_interrupt();

    println!("{STARTING}");
    let mut terminal = ConsoleTerminal::new().context("Failed to initialize terminal")?;
    repl::run(&assistant, &mut terminal, &mut stdout()).await
}

/// Ends the process on Ctrl-C outside of line editing, including while a
/// request is in flight. The pending request is abandoned.
fn watch_interrupt() {
    tokio::spawn(async {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!("{GOODBYE}");
            std::process::exit(0);
        }
    });
}
