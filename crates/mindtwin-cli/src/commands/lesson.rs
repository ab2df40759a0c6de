use clap::Subcommand;
use mindtwin_core::content::{self, LessonStatus};
use mindtwin_core::flows;
use mindtwin_core::wizard::StepKind;

#[derive(Subcommand)]
pub enum LessonAction {
    /// List the lesson catalog
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one lesson by id
    Show {
        /// Lesson id
        id: String,
    },
    /// Print the step sequence of a lesson's flow
    Flow {
        /// Lesson id
        id: String,
    },
}

pub fn run(action: LessonAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        LessonAction::List { json } => {
            let lessons = content::all_lessons();
            if json {
                println!("{}", serde_json::to_string_pretty(&lessons)?);
            } else {
                for lesson in &lessons {
                    let marker = match lesson.status {
                        LessonStatus::Completed => "x",
                        LessonStatus::InProgress => ">",
                        LessonStatus::Available => " ",
                        LessonStatus::Locked => "#",
                    };
                    println!(
                        "[{marker}] {} {} ({} XP, {})",
                        lesson.id, lesson.title, lesson.xp_reward, lesson.duration
                    );
                }
            }
        }
        LessonAction::Show { id } => {
            let lesson = content::lesson_by_id(&id)
                .ok_or_else(|| format!("no lesson with id {id:?}"))?;
            println!("{}", serde_json::to_string_pretty(&lesson)?);
        }
        LessonAction::Flow { id } => {
            let wizard =
                flows::for_lesson(&id).ok_or_else(|| format!("no lesson with id {id:?}"))?;
            for (i, step) in wizard.steps().iter().enumerate() {
                let kind = match &step.kind {
                    StepKind::Info => "info",
                    StepKind::FreeText { .. } => "free-text",
                    StepKind::SingleChoice { .. } => "single-choice",
                    StepKind::MultiChoice { .. } => "multi-choice",
                    StepKind::Quiz { .. } => "quiz",
                };
                println!("{}. {} [{}]", i + 1, step.title, kind);
            }
        }
    }
    Ok(())
}
