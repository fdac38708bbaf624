// Pomodoro timer: submenu and blocking per-second countdown

use crate::config::Config;
use crate::console::Console;
use eyre::Result;
use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

/// Render remaining seconds as M:SS
pub fn format_remaining(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Block for the given duration, updating a remaining-time display once per
/// second. There is no cancellation path short of terminating the process.
pub fn run_countdown<R: BufRead, W: Write>(console: &mut Console<R, W>, seconds: u64) -> Result<()> {
    for remaining in (0..=seconds).rev() {
        console.status(format!("Time remaining: {}", format_remaining(remaining)))?;
        if remaining > 0 {
            thread::sleep(Duration::from_secs(1));
        }
    }
    console.say("")?;
    Ok(())
}

/// Pomodoro submenu, looping until the user exits back to the main menu
pub fn pomodoro_menu<R: BufRead, W: Write>(console: &mut Console<R, W>, config: &Config) -> Result<()> {
    console.say("\nPomodoro Timer")?;
    console.say("1. Start Pomodoro")?;
    console.say("2. Start Short Break")?;
    console.say("3. Start Long Break")?;
    console.say("4. Stop Timer")?;
    console.say("5. Exit Pomodoro Timer")?;

    loop {
        let choice = console.ask_question("Enter your choice (1-5): ")?;

        match choice.trim() {
            "1" => {
                console.say(format!(
                    "Pomodoro started. Focus for {} minutes.",
                    config.pomodoro_minutes
                ))?;
                run_countdown(console, config.pomodoro_minutes * 60)?;
                console.say("Pomodoro completed! Take a short break.")?;
                run_countdown(console, config.short_break_minutes * 60)?;
            }
            "2" => {
                console.say(format!(
                    "Short break started. Relax for {} minutes.",
                    config.short_break_minutes
                ))?;
                run_countdown(console, config.short_break_minutes * 60)?;
            }
            "3" => {
                console.say(format!(
                    "Long break started. Relax for {} minutes.",
                    config.long_break_minutes
                ))?;
                run_countdown(console, config.long_break_minutes * 60)?;
            }
            // The countdown blocks until it finishes, so nothing can be
            // running by the time this prompt is reachable again
            "4" => console.say("No timer is currently running.")?,
            "5" => return Ok(()),
            _ => console.say("Invalid choice. Please enter a number from 1 to 5.")?,
        }
    }
}
