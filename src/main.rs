use clap::Parser;
use eyre::Result;
use std::path::PathBuf;
use taskpad::config::Config;
use taskpad::console::Console;
use taskpad::menu;
use taskpad::models::{format_timestamp, now_ms};
use taskpad::store::TaskStore;

#[derive(Parser)]
#[command(name = "taskpad")]
#[command(about = "Interactive todo list with marker scanning, a priority matrix, and a Pomodoro timer")]
#[command(version)]
struct Cli {
    /// Path to the tasks file (overrides the config file)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Path to the config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Setup tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;
    let tasks_file = cli.file.unwrap_or_else(|| config.tasks_file.clone());
    let store = TaskStore::new(tasks_file);

    let mut console = Console::stdio();
    console.say("\nTodo List Menu")?;
    console.say(format!("Current Date and Time: {}", format_timestamp(now_ms())))?;

    menu::run(&mut console, &store, &config)
}
