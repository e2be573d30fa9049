//! Terminal rendering of snapshots and events.

use amhp_application::{AmhpApp, AppSnapshot};
use amhp_core::catalog::{CBT_EXERCISES, MEDITATIONS};
use amhp_core::chat::{ChatMessage, Sender};
use amhp_core::event::{AppEvent, StatusKind};
use amhp_core::mood::DailyMood;
use amhp_core::navigation::Screen;
use colored::Colorize;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::commands::COMMANDS;

/// Prints events until the channel closes.
pub async fn run(app: AmhpApp, mut events: UnboundedReceiver<AppEvent>) {
    while let Some(event) = events.recv().await {
        match event {
            AppEvent::ScreenChanged { .. } => print_screen(&app.snapshot().await),
            AppEvent::MoodChartRefreshed { series } => print_chart(&series),
            AppEvent::ChatInputFocused => {
                println!("{}", "Type a message and press Enter.".bright_black());
            }
            AppEvent::MessageAppended(message) => print_message(&message),
            AppEvent::Status(status) => match status.kind {
                StatusKind::Success => println!("{}", format!("✓ {}", status.text).green()),
                StatusKind::Error => println!("{}", format!("✗ {}", status.text).red()),
            },
            AppEvent::StatusCleared { .. } => {}
            AppEvent::Announcement(text) => println!("{}", text.bright_black().italic()),
            AppEvent::SettingsApplied(settings) => {
                println!(
                    "{}",
                    format!(
                        "Settings: theme={} textSize={} language={} voice={}",
                        settings.theme,
                        settings.text_size,
                        settings.language,
                        if settings.voice_enabled { "on" } else { "off" }
                    )
                    .bright_black()
                );
            }
            AppEvent::JournalPromptChanged(prompt) => {
                println!("{} {}", "Prompt:".bright_yellow(), prompt);
            }
            AppEvent::TabChanged(_) => print_resources(&app.snapshot().await),
            AppEvent::VoiceListening(true) => println!("{}", "🎤 listening...".bright_magenta()),
            AppEvent::VoiceListening(false) => {}
            AppEvent::VoiceTranscript(text) => {
                println!("{} {} {}", "Heard:".bright_magenta(), text, "(/send to send)".bright_black());
            }
        }
    }
}

pub fn print_banner() {
    println!("{}", "=== AMHP - Accessible Mental Health Platform ===".bright_magenta().bold());
    println!(
        "{}",
        "Type /start for an anonymous session, /guest to continue, or /help for commands.".bright_black()
    );
    println!(
        "{}",
        "In an emergency type /crisis at any time.".bright_red()
    );
    println!();
}

pub fn print_help() {
    for command in COMMANDS {
        println!("  {:<24} {}", command.usage.bright_cyan(), command.description);
    }
}

pub fn print_screen(snapshot: &AppSnapshot) {
    println!();
    println!("{}", format!("── {} ──", snapshot.screen.title()).bright_magenta().bold());

    match snapshot.screen {
        Screen::Welcome => print_banner(),
        Screen::Dashboard => {
            println!("{} {}", "Today:".bright_yellow(), snapshot.recommendation);
            println!(
                "{}",
                "How are you feeling? /quick <1-10>. Screens: mood chat resources journal settings".bright_black()
            );
        }
        Screen::Mood => {
            println!("{}", "Record your mood with /mood <1-10> [note].".bright_black());
        }
        Screen::Chat => {
            for message in &snapshot.messages {
                print_message(message);
            }
        }
        Screen::Resources => print_resources(snapshot),
        Screen::Journal => {
            println!("{} {}", "Prompt:".bright_yellow(), snapshot.journal_prompt);
            println!(
                "{}",
                format!("{} entries saved. /journal <text> to write, /prompt for another prompt.", snapshot.journal_entries.len())
                    .bright_black()
            );
        }
        Screen::Crisis => {
            println!("{}", "If you are in immediate danger, call your local emergency number.".bright_red().bold());
            for hotline in snapshot.hotlines {
                println!("{}", hotline.name.bold());
                println!("  {} - {}", hotline.contact.bright_white().bold(), hotline.available);
                println!("  {}", hotline.description.bright_black());
            }
        }
        Screen::Settings => {
            let settings = &snapshot.settings;
            println!("  theme        {}", settings.theme);
            println!("  textSize     {}", settings.text_size);
            println!("  language     {}", settings.language);
            println!("  voiceEnabled {}", settings.voice_enabled);
            println!("{}", "Change with /set <key> <value>.".bright_black());
        }
    }
}

fn print_resources(snapshot: &AppSnapshot) {
    println!("{}", format!("[{}]", snapshot.active_tab.id()).bright_yellow());
    for resource in snapshot.tab_resources {
        let meta = match resource.difficulty {
            Some(difficulty) => format!("{} · {} · {}", resource.duration, resource.category, difficulty),
            None => format!("{} · {}", resource.duration, resource.category),
        };
        println!("{} {}", resource.title.bold(), meta.bright_black());
        println!("  {}", resource.display_description());
    }
    let total = CBT_EXERCISES.len() + MEDITATIONS.len();
    println!(
        "{}",
        format!("{} resources. /tab <cbt|meditation>, /exercise <title>.", total).bright_black()
    );
}

fn print_message(message: &ChatMessage) {
    match message.sender {
        Sender::User => println!("{}", format!("You: {}", message.text).green()),
        Sender::Assistant => {
            for line in message.text.lines() {
                println!("{}", format!("AI: {}", line).bright_blue());
            }
        }
    }
}

fn print_chart(series: &[DailyMood]) {
    println!("{}", "Mood, last 7 days".bright_yellow());
    for point in series {
        let bar = "█".repeat(usize::from(point.mood));
        let line = format!("  {} {:<10} {:>2} {}", point.date.format("%a %d"), bar, point.mood, point.label());
        if point.recorded {
            println!("{}", line);
        } else {
            println!("{}", line.bright_black());
        }
    }
}
