use clap::Subcommand;
use mindtwin_core::onboarding::{self, FIRST_GOAL_SUGGESTIONS};
use mindtwin_core::wizard::StepKind;

#[derive(Subcommand)]
pub enum OnboardingAction {
    /// List the onboarding steps
    Steps {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the suggested first weekly goals
    Suggestions,
}

pub fn run(action: OnboardingAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        OnboardingAction::Steps { json } => {
            let wizard = onboarding::build_wizard();
            if json {
                println!("{}", serde_json::to_string_pretty(wizard.steps())?);
            } else {
                for (i, step) in wizard.steps().iter().enumerate() {
                    let kind = match &step.kind {
                        StepKind::Info => "info",
                        StepKind::FreeText { required: true, .. } => "free-text (required)",
                        StepKind::FreeText { .. } => "free-text",
                        StepKind::SingleChoice { .. } => "single-choice",
                        StepKind::MultiChoice { .. } => "multi-choice",
                        StepKind::Quiz { .. } => "quiz",
                    };
                    println!("{}. {} [{}]", i + 1, step.title, kind);
                }
            }
        }
        OnboardingAction::Suggestions => {
            for goal in FIRST_GOAL_SUGGESTIONS {
                println!("{goal}");
            }
        }
    }
    Ok(())
}
