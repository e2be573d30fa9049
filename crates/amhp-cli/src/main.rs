use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;

use amhp_application::AmhpApp;
use amhp_core::action::Action;
use amhp_core::navigation::Screen;
use amhp_core::speech::SpeechCapabilities;
use amhp_core::store::KeyValueStore;
use amhp_infrastructure::{AmhpPaths, ConfigService, FileKeyValueStore, MemoryKeyValueStore};

mod commands;
mod helper;
mod logging;
mod render;

use commands::{Input, parse_input};
use helper::CliHelper;

#[derive(Parser)]
#[command(name = "amhp")]
#[command(about = "AMHP - Accessible Mental Health Platform", long_about = None)]
struct Cli {
    /// Directory for persisted records (overrides config.toml)
    #[arg(long, env = "AMHP_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Path to config.toml
    #[arg(long, env = "AMHP_CONFIG")]
    config: Option<PathBuf>,

    /// Seed for reply and prompt selection
    #[arg(long)]
    seed: Option<u64>,

    /// Keep all data in memory for this run
    #[arg(long)]
    ephemeral: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ===== Configuration =====
    let config_service = match &cli.config {
        Some(path) => ConfigService::new(path),
        None => ConfigService::from_default_location()?,
    };
    let mut config = config_service.load_or_default();
    if cli.data_dir.is_some() {
        config.data_dir = cli.data_dir.clone();
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    let paths = AmhpPaths::new(config.data_dir.clone());
    let _log_guard = logging::init(&paths.logs_dir()?, &config.log_level)?;
    tracing::info!(config = %config_service.path().display(), ephemeral = cli.ephemeral, "Starting AMHP");

    // ===== Backend Initialization =====
    let store: Arc<dyn KeyValueStore> = if cli.ephemeral {
        Arc::new(MemoryKeyValueStore::new())
    } else {
        Arc::new(FileKeyValueStore::new(paths.data_dir()?))
    };
    let (app, events) = AmhpApp::start(store, config, SpeechCapabilities::none()).await;
    let renderer = tokio::spawn(render::run(app.clone(), events));

    // ===== REPL Setup =====
    let mut rl: Editor<CliHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(CliHelper::new()));

    render::print_banner();

    // ===== Main REPL Loop =====
    loop {
        let prompt = format!("{}> ", app.snapshot().await.screen.id());
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                match parse_input(trimmed) {
                    Ok(Input::Quit) => break,
                    Ok(Input::Help) => render::print_help(),
                    Ok(Input::Show) => render::print_screen(&app.snapshot().await),
                    Ok(Input::Action(action)) => app.dispatch(action).await,
                    Ok(Input::Chat(text)) => send_chat(&app, text).await,
                    Ok(Input::SendDraft) => {
                        let draft = app.snapshot().await.chat_draft;
                        send_chat(&app, draft).await;
                    }
                    Err(message) => println!("{}", message.yellow()),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type /quit to exit.".yellow());
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    if app.has_user_data().await {
        println!("{}", "Your entries are saved on this device.".bright_black());
    }
    println!("{}", "Take care. Goodbye!".bright_green());

    app.shutdown();
    renderer.abort();
    Ok(())
}

/// Plain text always goes to the chat, opening it first if needed.
async fn send_chat(app: &AmhpApp, text: String) {
    if app.snapshot().await.screen != Screen::Chat {
        app.dispatch(Action::Navigate {
            screen: Screen::Chat.id().to_string(),
        })
        .await;
    }
    app.dispatch(Action::SendMessage { text }).await;
}
