use clap::Subcommand;
use mindtwin_core::content;

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Show the fresh-start user profile
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: ProfileAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ProfileAction::Show { json } => {
            let profile = content::fresh_user();
            if json {
                println!("{}", serde_json::to_string_pretty(&profile)?);
            } else {
                println!("{} (level {})", profile.name, profile.level);
                println!(
                    "XP: {}/{}  Growth streak: {} days",
                    profile.xp, profile.xp_to_next_level, profile.growth_streak
                );
                let earned = profile.badges.iter().filter(|b| b.earned).count();
                println!("Badges: {}/{}", earned, profile.badges.len());
            }
        }
    }
    Ok(())
}
