use crate::character::{Character, CombatStat};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Row, Table},
    Frame,
};

/// Rows in the sheet, plus the table header and borders.
pub const SHEET_HEIGHT: u16 = 17;

/// One attribute/value pair on the character sheet. Blank rows separate groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRow {
    pub label: &'static str,
    pub value: String,
}

impl SheetRow {
    fn new(label: &'static str, value: String) -> Self {
        Self { label, value }
    }

    fn spacer() -> Self {
        Self::new("", String::new())
    }

    pub fn is_spacer(&self) -> bool {
        self.label.is_empty()
    }
}

/// Read-only projection of a character in display order:
/// vitals, gold, combat stats, then progress counters.
pub fn sheet_rows(character: &Character) -> Vec<SheetRow> {
    let mut rows = vec![
        SheetRow::new("Level", character.level().to_string()),
        SheetRow::new(
            "Health",
            format!("{}/{}", character.health(), character.max_health()),
        ),
        SheetRow::new(
            "Mana",
            format!("{}/{}", character.mana(), character.max_mana()),
        ),
        SheetRow::new(
            "Experience",
            format!(
                "{}/{}",
                character.experience(),
                character.experience_to_next_level()
            ),
        ),
        SheetRow::new("Gold", character.gold().to_string()),
        SheetRow::spacer(),
    ];

    for stat in CombatStat::all() {
        rows.push(SheetRow::new(stat.name(), character.stat(stat).to_string()));
    }

    rows.push(SheetRow::spacer());
    rows.push(SheetRow::new(
        "Dungeon Level",
        character.dungeon_level().to_string(),
    ));
    rows.push(SheetRow::new(
        "Rooms Explored",
        character.rooms_explored().to_string(),
    ));
    rows.push(SheetRow::new(
        "Enemies Defeated",
        character.enemies_defeated().to_string(),
    ));
    rows
}

/// Draws the character sheet as a two-column table.
pub fn draw_character_sheet(frame: &mut Frame, area: Rect, character: &Character) {
    let rows = sheet_rows(character).into_iter().map(|row| {
        Row::new(vec![row.label.to_string(), row.value])
    });

    let header = Row::new(vec!["Attribute", "Value"]).style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let table = Table::new(rows, [Constraint::Length(18), Constraint::Min(10)])
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{}'s Character Sheet", character.name()))
                .title_style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .style(Style::default().fg(Color::Magenta));

    frame.render_widget(table, area);
}
