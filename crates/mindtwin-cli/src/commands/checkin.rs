use clap::Subcommand;
use mindtwin_core::checkin::{self, DailyCheckIn};

#[derive(Subcommand)]
pub enum CheckinAction {
    /// Show whether today's check-in is done and the recorded mood
    Status,
    /// Mark today's check-in complete
    Complete {
        /// Mood value to record (e.g. happy, meh, sad)
        #[arg(long)]
        mood: Option<String>,
    },
    /// Print today's mood (falls back to "okay")
    Mood,
    /// List the check-in questions
    Questions {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: CheckinAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        CheckinAction::Status => {
            let gate = DailyCheckIn::open()?;
            let done = gate.has_completed_today()?;
            let status = serde_json::json!({
                "date": checkin::today_string(),
                "completed": done,
                "mood": gate.today_mood()?,
            });
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
        CheckinAction::Complete { mood } => {
            let gate = DailyCheckIn::open()?;
            if gate.has_completed_today()? {
                println!("Already checked in today.");
                return Ok(());
            }
            gate.mark_completed_today(mood.as_deref())?;
            let recorded = gate.today_mood()?;
            println!(
                "Check-in complete. Mood: {} {}",
                checkin::mood_emoji(&recorded),
                recorded
            );
        }
        CheckinAction::Mood => {
            let gate = DailyCheckIn::open()?;
            println!("{}", gate.today_mood()?);
        }
        CheckinAction::Questions { json } => {
            let questions = checkin::check_in_questions();
            if json {
                println!("{}", serde_json::to_string_pretty(&questions)?);
            } else {
                for q in &questions {
                    println!("{}. {} {}", q.step, q.emoji, q.question);
                }
            }
        }
    }
    Ok(())
}
