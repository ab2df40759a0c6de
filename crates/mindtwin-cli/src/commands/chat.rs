use std::thread;
use std::time::Duration;

use clap::Subcommand;
use mindtwin_core::chat::{self, ChatSession};

/// Delay before the twin "types" its reply, matching the app feel.
const TYPING_DELAY_MS: u64 = 1_000;

#[derive(Subcommand)]
pub enum ChatAction {
    /// Send a message to the twin and print its reply
    Send {
        /// Message text
        message: String,
        /// Skip the simulated typing delay
        #[arg(long)]
        no_delay: bool,
        /// Print the full exchange as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the quick-reply suggestions shown under the input
    QuickReplies,
    /// Print the twin's greeting message
    Greeting,
}

pub fn run(action: ChatAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ChatAction::Send {
            message,
            no_delay,
            json,
        } => {
            let mut session = ChatSession::new();
            let reply = session.send(&message)?;
            if !no_delay {
                thread::sleep(Duration::from_millis(TYPING_DELAY_MS));
            }
            if json {
                let output = serde_json::json!({
                    "message": message.trim(),
                    "reply": reply,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                println!("{reply}");
            }
        }
        ChatAction::QuickReplies => {
            for suggestion in chat::QUICK_REPLIES {
                println!("{suggestion}");
            }
        }
        ChatAction::Greeting => {
            println!("{}", chat::GREETING);
        }
    }
    Ok(())
}
