// Eisenhower matrix: quadrant partition and arrow-key browser

use crate::models::Task;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{self, Clear, ClearType},
};
use eyre::Result;
use std::io::{Write, stdout};

const QUADRANT_TITLES: [&str; 4] = [
    "Quadrant I - Urgent & Important",
    "Quadrant II - Not Urgent & Important",
    "Quadrant III - Urgent & Not Important",
    "Quadrant IV - Not Urgent & Not Important",
];

const SEPARATOR: &str = "───────────────────────────────────";

/// One matrix quadrant with the tasks that fall into it
#[derive(Debug)]
pub struct Quadrant<'a> {
    pub title: &'static str,
    pub tasks: Vec<&'a Task>,
}

/// Partition tasks into the four quadrants.
///
/// "High" priority (exact match) counts as important; completion state stands
/// in for urgency. Every task lands in exactly one quadrant.
pub fn partition(tasks: &[Task]) -> [Quadrant<'_>; 4] {
    let mut quadrants = QUADRANT_TITLES.map(|title| Quadrant {
        title,
        tasks: Vec::new(),
    });

    for task in tasks {
        let high = task.priority.as_deref() == Some("High");
        let slot = match (high, task.completed) {
            (true, false) => 0,
            (true, true) => 1,
            (false, false) => 2,
            (false, true) => 3,
        };
        quadrants[slot].tasks.push(task);
    }

    quadrants
}

/// Browse the quadrants interactively: ←/→ navigate, any other key exits.
///
/// Raw mode is restored even when the browse loop errors.
pub fn browse(tasks: &[Task]) -> Result<()> {
    let quadrants = partition(tasks);

    terminal::enable_raw_mode()?;
    let result = browse_loop(&quadrants);
    terminal::disable_raw_mode()?;

    // Leave the screen clean for the menu that follows
    let mut out = stdout();
    execute!(out, Clear(ClearType::All), cursor::MoveTo(0, 0))?;

    result
}

fn browse_loop(quadrants: &[Quadrant<'_>; 4]) -> Result<()> {
    let mut out = stdout();
    let mut current = 0usize;

    loop {
        render(&mut out, &quadrants[current])?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Right if current < 3 => current += 1,
                KeyCode::Left if current > 0 => current -= 1,
                KeyCode::Right | KeyCode::Left => {}
                _ => return Ok(()),
            }
        }
    }
}

// Raw mode is active here, so lines end with \r\n explicitly
fn render(out: &mut impl Write, quadrant: &Quadrant<'_>) -> Result<()> {
    execute!(out, Clear(ClearType::All), cursor::MoveTo(0, 0))?;

    write!(out, "{}\r\n{}\r\n", quadrant.title, SEPARATOR)?;
    for (index, task) in quadrant.tasks.iter().enumerate() {
        write!(out, "[{}] {}\r\n", index + 1, task.description)?;
    }
    write!(
        out,
        "{}\r\nUse arrow keys to navigate (← →). Press any other key to exit.\r\n",
        SEPARATOR
    )?;
    out.flush()?;

    Ok(())
}
