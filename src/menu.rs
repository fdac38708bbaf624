// Interactive numbered menu and the task operations behind it

use crate::config::Config;
use crate::console::Console;
use crate::matrix;
use crate::models::Task;
use crate::quote;
use crate::scan;
use crate::store::TaskStore;
use crate::timer;
use colored::Colorize;
use eyre::Result;
use std::env;
use std::io::{BufRead, Write};
use tracing::warn;

/// Main menu loop. Returns when the user picks Exit.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &TaskStore,
    config: &Config,
) -> Result<()> {
    loop {
        console.say("\nMenu:")?;
        console.say("1. Add Task")?;
        console.say("2. List Tasks")?;
        console.say("3. Complete Task")?;
        console.say("4. Remove Task")?;
        console.say("5. Extract Tasks from Files")?;
        console.say("6. Eisenhower Matrix")?;
        console.say("7. Edit Task")?;
        console.say("8. Pomodoro Timer")?;
        console.say("9. Random Quote")?;
        console.say("10. Exit")?;

        let choice = console.ask_question("Enter your choice (1-10): ")?;

        match choice.trim() {
            "1" => add_task(console, store)?,
            "2" => list_tasks(console, store)?,
            "3" => complete_task(console, store)?,
            "4" => remove_task(console, store)?,
            "5" => extract_tasks(console, store, config)?,
            "6" => show_matrix(console, store)?,
            "7" => edit_task(console, store)?,
            "8" => timer::pomodoro_menu(console, config)?,
            "9" => show_quote(console, config)?,
            "10" => return Ok(()),
            _ => console.say("Invalid choice. Please enter a number from 1 to 10.")?,
        }
    }
}

fn add_task<R: BufRead, W: Write>(console: &mut Console<R, W>, store: &TaskStore) -> Result<()> {
    let description = console.ask_question("Enter a new task: ")?;
    let due_date = console.ask_question("Enter due date (e.g., YYYY-MM-DD): ")?;
    let priority = console.ask_question("Enter task priority (e.g., High, Medium, Low): ")?;
    let tags = console.ask_question("Enter tags (comma-separated, e.g., Work,Personal): ")?;

    let mut task = Task::new(description);
    task.due_date = optional(due_date);
    task.priority = optional(priority);
    task.tags = parse_tags(&tags);

    store.add(task)?;
    console.say("Task added successfully.".green())?;
    Ok(())
}

fn list_tasks<R: BufRead, W: Write>(console: &mut Console<R, W>, store: &TaskStore) -> Result<()> {
    let tasks = store.load();
    print_task_list(console, &tasks)?;
    Ok(())
}

fn complete_task<R: BufRead, W: Write>(console: &mut Console<R, W>, store: &TaskStore) -> Result<()> {
    let tasks = store.load();
    if !print_task_list(console, &tasks)? {
        return Ok(());
    }

    let answer = console.ask_question("Select a task to mark as completed (enter the task number): ")?;
    match parse_index(&answer, tasks.len()) {
        Some(index) => {
            store.complete(index)?;
            console.say("Task marked as completed.".green())?;
        }
        None => console.say("Invalid task number. Task not marked as completed.".red())?,
    }
    Ok(())
}

fn remove_task<R: BufRead, W: Write>(console: &mut Console<R, W>, store: &TaskStore) -> Result<()> {
    let tasks = store.load();
    if !print_task_list(console, &tasks)? {
        return Ok(());
    }

    let answer = console.ask_question("Select a task to remove (enter the task number): ")?;
    match parse_index(&answer, tasks.len()) {
        Some(index) => {
            store.remove(index)?;
            console.say("Task removed successfully.".green())?;
        }
        None => console.say("Invalid task number. Task not removed.".red())?,
    }
    Ok(())
}

fn edit_task<R: BufRead, W: Write>(console: &mut Console<R, W>, store: &TaskStore) -> Result<()> {
    let mut tasks = store.load();
    if !print_task_list(console, &tasks)? {
        return Ok(());
    }

    let answer = console.ask_question("Select a task to edit (enter the task number): ")?;
    let Some(index) = parse_index(&answer, tasks.len()) else {
        console.say("Invalid task number. Task not edited.".red())?;
        return Ok(());
    };

    console.say(format!("\nEditing Task: {}", tasks[index - 1].description))?;

    let description = console.ask_question("Enter the new task description: ")?;
    let due_date = console.ask_question("Enter new due date (e.g., YYYY-MM-DD): ")?;
    let priority = console.ask_question("Enter new task priority (e.g., High, Medium, Low): ")?;
    let tags = console.ask_question("Enter new tags (comma-separated, e.g., Work,Personal): ")?;

    // Every field is overwritten; an empty answer clears the optional ones
    let task = &mut tasks[index - 1];
    task.description = description;
    task.due_date = optional(due_date);
    task.priority = optional(priority);
    task.tags = parse_tags(&tags);

    store.save(&tasks)?;
    console.say("Task edited successfully.".green())?;
    Ok(())
}

fn extract_tasks<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &TaskStore,
    config: &Config,
) -> Result<()> {
    let root = env::current_dir()?;
    let outcome = scan::scan_tree(&root, &config.markers);

    for error in &outcome.errors {
        warn!(%error, "Scan skipped an entry");
        console.say(format!("Skipped: {}", error).yellow())?;
    }

    let count = store.import(&outcome.tasks)?;
    console.say(format!("{} tasks extracted and added to the todo list.", count).green())?;
    Ok(())
}

fn show_matrix<R: BufRead, W: Write>(console: &mut Console<R, W>, store: &TaskStore) -> Result<()> {
    let tasks = store.load();
    if tasks.is_empty() {
        console.say("No tasks found.")?;
        return Ok(());
    }
    matrix::browse(&tasks)
}

fn show_quote<R: BufRead, W: Write>(console: &mut Console<R, W>, config: &Config) -> Result<()> {
    match quote::fetch_random_quote(&config.quote_url) {
        Ok(Some(quote)) => {
            console.say("\nRandom Quote:")?;
            console.say(format!("\"{}\" - {}", quote.text, quote.attribution()))?;
        }
        Ok(None) => console.say("No quotes found.")?,
        Err(e) => console.say(format!("Error fetching a random quote: {:#}", e).red())?,
    }
    Ok(())
}

/// Print the numbered task list. Returns false (after a "no tasks" message)
/// when the list is empty.
fn print_task_list<R: BufRead, W: Write>(console: &mut Console<R, W>, tasks: &[Task]) -> Result<bool> {
    if tasks.is_empty() {
        console.say("No tasks found.")?;
        return Ok(false);
    }

    console.say("Tasks:")?;
    for (index, task) in tasks.iter().enumerate() {
        console.say(format_task_line(index, task))?;
    }
    Ok(true)
}

fn format_task_line(index: usize, task: &Task) -> String {
    let status = if task.completed {
        "[x]".green().to_string()
    } else {
        "[ ]".to_string()
    };

    let mut line = format!("  {}. {} {}", index + 1, status, task.description);
    if let Some(due) = &task.due_date {
        line.push_str(&format!(" Due: {}", due));
    }
    if let Some(priority) = &task.priority {
        line.push_str(&format!(" Priority: {}", priority));
    }
    if let Some(tags) = &task.tags {
        line.push_str(&format!(" Tags: {}", tags.join(", ")));
    }
    line
}

/// Parse a 1-based selection, returning None unless it falls in [1, len]
fn parse_index(answer: &str, len: usize) -> Option<usize> {
    match answer.trim().parse::<usize>() {
        Ok(n) if n >= 1 && n <= len => Some(n),
        _ => None,
    }
}

fn optional(answer: String) -> Option<String> {
    let trimmed = answer.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_string()) }
}

fn parse_tags(answer: &str) -> Option<Vec<String>> {
    let tags: Vec<String> = answer
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect();
    if tags.is_empty() { None } else { Some(tags) }
}
