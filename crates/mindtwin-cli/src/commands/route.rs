use clap::Subcommand;
use mindtwin_core::routes::{self, Route};

#[derive(Subcommand)]
pub enum RouteAction {
    /// Resolve a path to its screen
    Resolve {
        /// Path to resolve (e.g. /home, /lesson/3)
        path: String,
    },
}

pub fn run(action: RouteAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        RouteAction::Resolve { path } => {
            let route = routes::resolve(&path);
            let output = serde_json::json!({
                "path": path,
                "route": format!("{route:?}"),
                "overlays": routes::shows_overlays(&route),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            if matches!(route, Route::NotFound) {
                std::process::exit(2);
            }
        }
    }
    Ok(())
}
