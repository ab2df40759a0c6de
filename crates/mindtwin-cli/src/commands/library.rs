use clap::Subcommand;
use mindtwin_core::content::{self, EstimatedTime};

#[derive(Subcommand)]
pub enum LibraryAction {
    /// List the therapy library modules
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: LibraryAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        LibraryAction::List { json } => {
            let modules = content::therapy_modules();
            if json {
                println!("{}", serde_json::to_string_pretty(&modules)?);
            } else {
                for module in &modules {
                    let time = match module.estimated_time {
                        EstimatedTime::Short => "short",
                        EstimatedTime::Medium => "medium",
                        EstimatedTime::Deep => "deep",
                    };
                    let star = if module.recommended { " *" } else { "" };
                    println!(
                        "{} {} [{}] - {} ({} lessons, {}){star}",
                        module.icon,
                        module.name,
                        module.category,
                        module.description,
                        module.lessons_count,
                        time
                    );
                }
            }
        }
    }
    Ok(())
}
