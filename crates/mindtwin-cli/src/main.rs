use clap::{CommandFactory, Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "mindtwin-cli", version, about = "MindTwin CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Chat with your twin
    Chat {
        #[command(subcommand)]
        action: commands::chat::ChatAction,
    },
    /// Daily check-in
    Checkin {
        #[command(subcommand)]
        action: commands::checkin::CheckinAction,
    },
    /// Lesson catalog and flows
    Lesson {
        #[command(subcommand)]
        action: commands::lesson::LessonAction,
    },
    /// Therapy library
    Library {
        #[command(subcommand)]
        action: commands::library::LibraryAction,
    },
    /// Onboarding flow
    Onboarding {
        #[command(subcommand)]
        action: commands::onboarding::OnboardingAction,
    },
    /// Journal entries
    Journal {
        #[command(subcommand)]
        action: commands::journal::JournalAction,
    },
    /// User profile
    Profile {
        #[command(subcommand)]
        action: commands::profile::ProfileAction,
    },
    /// Route resolution
    Route {
        #[command(subcommand)]
        action: commands::route::RouteAction,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Chat { action } => commands::chat::run(action),
        Commands::Checkin { action } => commands::checkin::run(action),
        Commands::Lesson { action } => commands::lesson::run(action),
        Commands::Library { action } => commands::library::run(action),
        Commands::Onboarding { action } => commands::onboarding::run(action),
        Commands::Journal { action } => commands::journal::run(action),
        Commands::Profile { action } => commands::profile::run(action),
        Commands::Route { action } => commands::route::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "mindtwin-cli",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
