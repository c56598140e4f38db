//! Chat command handler.
//!
//! Interactive loop on stdin. Each successful turn extends the session
//! history so follow-up questions ("Wie hoch ist er?") can be resolved by
//! the service; a failed turn prints a notice and leaves the history
//! untouched.

use clap::Args;
use lugpt_chat::ChatSession;
use lugpt_core::{config::AppConfig, AppResult};
use lugpt_retrieval::create_client;
use std::io::{BufRead, Write};

/// Interactive chat session with follow-up questions
#[derive(Args, Debug)]
pub struct ChatCommand {
    /// Print sources on their own lines instead of appended to the answer
    #[arg(long)]
    pub sources_listed: bool,
}

impl ChatCommand {
    /// Execute the chat command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing chat command");

        let client = create_client(config)?;
        let mut session = ChatSession::new(client);

        println!("Wie kann ich helfen? (exit/quit zum Beenden)");

        let stdin = std::io::stdin();
        let mut lines = stdin.lock().lines();

        loop {
            print!("> ");
            std::io::stdout().flush()?;

            let line = match lines.next() {
                Some(line) => line?,
                None => break, // EOF
            };

            let question = line.trim();
            if question.is_empty() {
                continue;
            }
            if question == "exit" || question == "quit" {
                break;
            }

            match session.ask(question).await {
                Ok(formatted) => {
                    if self.sources_listed {
                        println!("{}", formatted.answer);
                        for source in &formatted.sources {
                            println!("- {}", source);
                        }
                    } else {
                        println!("{}", formatted.display_line());
                    }
                }
                Err(e) => {
                    // The turn was not recorded; the session stays usable.
                    tracing::error!("Turn failed: {}", e);
                    println!("Die Anfrage konnte nicht beantwortet werden. Bitte versuchen Sie es erneut.");
                }
            }
        }

        tracing::info!(
            "Chat session ended after {} completed turns",
            session.history().len()
        );

        Ok(())
    }
}
