//! CreativeBlock headless home screen
//!
//! Reads the client config, syncs ideas and catalogs once and prints the
//! list the way the home screen shows it.

use std::path::PathBuf;
use std::process::ExitCode;

use creative_block::domain::display_label;
use creative_block::{connect, CatalogKind, ClientConfig, IdeaState};

const CONFIG_ENV: &str = "CREATIVEBLOCK_CONFIG";
const LOG_DIR_ENV: &str = "CREATIVEBLOCK_LOG_DIR";

fn env_path(name: &str, fallback: &str) -> PathBuf {
    std::env::var_os(name)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(fallback))
}

#[tokio::main]
async fn main() -> ExitCode {
    let log_dir = env_path(LOG_DIR_ENV, "logs");
    if let Err(e) = rolling_logger::init_logger(&log_dir, "CreativeBlock") {
        eprintln!("Logging disabled: {}", e);
    }

    let config_path = env_path(CONFIG_ENV, "creativeblock.json");
    let config = match ClientConfig::load_from(&config_path) {
        Ok(config) => config.with_env_overrides(),
        Err(e) => {
            eprintln!("Failed to read {}: {}", config_path.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let view_model = match connect(&config) {
        Ok(view_model) => view_model,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let _ = rolling_logger::info(&format!("Syncing with {}", config.base_url));
    let outcome = view_model.load_all().await;
    render(&view_model.snapshot());

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let _ = rolling_logger::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn render(state: &IdeaState) {
    if let Some(error) = &state.error {
        eprintln!("Error: {}", error);
    }

    println!("CreativeBlock - {} ideas", state.ideas.len());
    for idea in &state.ideas {
        println!(
            "  #{:<4} {}  [{} | {} | {}]",
            idea.id,
            idea.title,
            display_label(&idea.category),
            display_label(&idea.priority),
            display_label(&idea.status),
        );
        if !idea.resources_needed.is_empty() {
            println!("        needs: {}", idea.resources_needed);
        }
    }

    for kind in CatalogKind::ALL {
        let names: Vec<String> = state
            .catalog(kind)
            .iter()
            .map(|item| item.display_name())
            .collect();
        println!("{:>10}: {}", kind.label(), names.join(", "));
    }
}
