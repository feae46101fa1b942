//! Line-oriented console output.

use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};
use ratatui::{backend::CrosstermBackend, Terminal, TerminalOptions, Viewport};

use super::narration::narrate;
use super::stats_panel::{draw_character_sheet, sheet_rows, SHEET_HEIGHT};
use crate::character::{Character, CharacterEvent};

/// Writes one colored line.
pub fn print_line(out: &mut impl Write, text: &str, color: Color, bold: bool) -> io::Result<()> {
    queue!(out, SetForegroundColor(color))?;
    if bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    queue!(
        out,
        Print(text),
        SetAttribute(Attribute::Reset),
        ResetColor,
        Print("\n")
    )?;
    out.flush()
}

/// Writes text inside a rounded box sized to fit it.
pub fn print_panel(out: &mut impl Write, text: &str, color: Color) -> io::Result<()> {
    let width = text.chars().count() + 2;
    let border = "─".repeat(width);
    print_line(out, &format!("╭{}╮", border), color, true)?;
    print_line(out, &format!("│ {} │", text), color, true)?;
    print_line(out, &format!("╰{}╯", border), color, true)
}

/// Narrates every event in order.
pub fn print_events(
    out: &mut impl Write,
    name: &str,
    events: &[CharacterEvent],
) -> io::Result<()> {
    for event in events {
        for line in narrate(name, event) {
            print_line(out, &line.text, line.color, false)?;
        }
    }
    Ok(())
}

/// Writes the character sheet as plain aligned text, for non-terminal output.
pub fn print_character_sheet(out: &mut impl Write, character: &Character) -> io::Result<()> {
    writeln!(out, "{}'s Character Sheet", character.name())?;
    for row in sheet_rows(character) {
        if row.is_spacer() {
            writeln!(out)?;
        } else {
            writeln!(out, "  {:<18}{}", row.label, row.value)?;
        }
    }
    out.flush()
}

/// Renders the character sheet inline on stdout, below the current cursor.
pub fn render_character_sheet(character: &Character) -> io::Result<()> {
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::with_options(
        backend,
        TerminalOptions {
            viewport: Viewport::Inline(SHEET_HEIGHT),
        },
    )?;
    terminal.draw(|frame| {
        let area = frame.size();
        draw_character_sheet(frame, area, character)
    })?;
    terminal.show_cursor()?;
    println!();
    Ok(())
}
