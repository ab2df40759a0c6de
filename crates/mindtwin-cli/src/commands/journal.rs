use clap::Subcommand;
use mindtwin_core::checkin::FALLBACK_MOOD;
use mindtwin_core::content::Mood;
use mindtwin_core::journal::{JournalEntry, JOURNAL_ENTRY_XP};

#[derive(Subcommand)]
pub enum JournalAction {
    /// Write a journal entry
    Add {
        /// Entry text
        text: String,
        /// Mood to attach (e.g. happy, meh, sad)
        #[arg(long)]
        mood: Option<Mood>,
    },
}

pub fn run(action: JournalAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        JournalAction::Add { text, mood } => {
            let mood = mood.map(|m| m.as_str()).unwrap_or(FALLBACK_MOOD);
            let entry = JournalEntry::new_text(&text, mood)?;
            println!("{}", serde_json::to_string_pretty(&entry)?);
            println!("+{JOURNAL_ENTRY_XP} XP");
        }
    }
    Ok(())
}
