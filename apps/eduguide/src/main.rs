mod cli;
mod config;
mod controller;
mod errors;
mod llm_client;
mod models;
mod output;
mod recommendation;
mod store;

use std::sync::Arc;

use anyhow::{bail, Result};
use clap::Parser;
use serde_json::json;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::controller::AppController;
use crate::llm_client::GeminiClient;
use crate::models::profile::StudentProfile;
use crate::output::{college_line, print_one, render_comparison, render_guidance};
use crate::recommendation::RecommendationClient;
use crate::store::FileStore;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    // Logs go to stderr so stdout stays clean for --json.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting EduGuide v{}", env!("CARGO_PKG_VERSION"));

    let store = Arc::new(FileStore::new(&config.data_dir)?);
    info!("Data directory: {}", store.dir().display());

    // Only `recommend` talks to the engine; other commands run without a key.
    let api_key = match &cli.command {
        Commands::Recommend { .. } => config.require_api_key()?.to_string(),
        _ => config.gemini_api_key.clone().unwrap_or_default(),
    };
    let engine = Arc::new(GeminiClient::new(api_key)?);
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let app = AppController::load(store, RecommendationClient::new(engine))?;

    run(app, cli).await
}

async fn run(app: AppController, cli: Cli) -> Result<()> {
    let json = cli.json;

    match cli.command {
        Commands::Login { name, email } => {
            app.login(&name, &email)?;
            print_one(json, app.identity(), |identity| match identity {
                Some(i) => format!("Logged in as {} <{}>", i.name, i.email),
                None => "Not logged in".to_string(),
            })
        }
        Commands::Logout => {
            app.logout()?;
            print_one(json, json!({ "logged_out": true, "theme": app.theme() }), |_| {
                format!("Logged out. Theme stays {}.", app.theme())
            })
        }
        Commands::Theme { mode } => {
            let theme = match mode {
                Some(arg) => match arg.theme() {
                    Some(theme) => {
                        app.set_theme(theme)?;
                        theme
                    }
                    None => app.toggle_theme()?,
                },
                None => app.theme(),
            };
            print_one(json, theme, |t| format!("Theme: {t}"))
        }
        Commands::Recommend {
            profile,
            save,
            compare,
        } => {
            let profile = StudentProfile::from(profile);
            app.update_draft(profile.clone());

            if let Err(e) = app.submit_profile(profile).await {
                if e.is_validation() {
                    // incomplete profile: a notice, not a failure
                    eprintln!("{e}");
                    return Ok(());
                }
                let message = app.last_error().unwrap_or_else(|| e.to_string());
                bail!(message);
            }

            let Some(guidance) = app.guidance() else {
                bail!("No recommendations were returned");
            };

            for id in &save {
                let Some(college) = guidance.college(id) else {
                    eprintln!("No recommended college with id '{id}'");
                    continue;
                };
                let outcome = app.toggle_saved(college)?;
                eprintln!("{outcome:?}: {}", college.college_name);
            }

            for id in &compare {
                let Some(college) = guidance.college(id) else {
                    eprintln!("No recommended college with id '{id}'");
                    continue;
                };
                if let Err(e) = app.toggle_comparison(college) {
                    // comparison cap is a notice, not a failure
                    eprintln!("{e}");
                }
            }

            let comparison = app.comparison_set();
            if json {
                print_one(
                    true,
                    json!({ "guidance": guidance, "comparison": comparison }),
                    |_| String::new(),
                )
            } else {
                println!("{}", render_guidance(&guidance));
                if !comparison.is_empty() {
                    println!("\n{}", render_comparison(&comparison));
                }
                Ok(())
            }
        }
        Commands::Saved => {
            let saved = app.saved_colleges();
            print_one(json, saved, |colleges| {
                if colleges.is_empty() {
                    "No saved colleges.".to_string()
                } else {
                    colleges
                        .iter()
                        .map(college_line)
                        .collect::<Vec<_>>()
                        .join("\n")
                }
            })
        }
    }
}
