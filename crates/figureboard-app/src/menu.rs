//! Command menu definitions.

use figureboard_core::{FigureKind, LineThickness, LineType};

/// A command the shell can execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Exit,
    Add(FigureKind),
    SetLineType,
    SetLineThickness,
    PrintFigure,
    PrintAll,
    RemoveFigure,
    RemoveAll,
}

impl MenuCommand {
    /// Look up the command bound to a menu number.
    pub fn from_selection(selection: u32) -> Option<Self> {
        Menu::all()
            .into_iter()
            .find(|entry| entry.selection == selection)
            .map(|entry| entry.command)
    }
}

/// A numbered menu line.
#[derive(Debug, Clone)]
pub struct MenuEntry {
    pub selection: u32,
    pub command: MenuCommand,
    pub description: &'static str,
}

impl MenuEntry {
    pub const fn new(selection: u32, command: MenuCommand, description: &'static str) -> Self {
        Self {
            selection,
            command,
            description,
        }
    }

    /// Format the entry for display (e.g., "2. Add circle").
    pub fn format(&self) -> String {
        format!("{}. {}", self.selection, self.description)
    }
}

/// Registry of all menu commands.
pub struct Menu;

impl Menu {
    /// Get all menu entries in display order.
    pub fn all() -> Vec<MenuEntry> {
        vec![
            MenuEntry::new(1, MenuCommand::Exit, "Exit"),
            MenuEntry::new(2, MenuCommand::Add(FigureKind::Circle), "Add circle"),
            MenuEntry::new(3, MenuCommand::Add(FigureKind::Square), "Add square"),
            MenuEntry::new(4, MenuCommand::Add(FigureKind::Triangle), "Add triangle"),
            MenuEntry::new(5, MenuCommand::Add(FigureKind::Star), "Add star"),
            MenuEntry::new(6, MenuCommand::SetLineType, "Set line type"),
            MenuEntry::new(7, MenuCommand::SetLineThickness, "Set line thickness"),
            MenuEntry::new(8, MenuCommand::PrintFigure, "Print figure"),
            MenuEntry::new(9, MenuCommand::PrintAll, "Print all figures"),
            MenuEntry::new(10, MenuCommand::RemoveFigure, "Remove figure"),
            MenuEntry::new(11, MenuCommand::RemoveAll, "Remove all figures"),
        ]
    }

    /// Render the command menu.
    pub fn render() -> String {
        let lines: Vec<_> = Self::all().iter().map(MenuEntry::format).collect();
        numbered_block("Enter a command:", &lines)
    }

    /// Render the line type sub-menu.
    pub fn render_line_types() -> String {
        let lines: Vec<_> = LineType::ALL
            .iter()
            .enumerate()
            .map(|(i, t)| format!("{}. {}", i + 1, t))
            .collect();
        numbered_block("Enter line type:", &lines)
    }

    /// Render the line thickness sub-menu.
    pub fn render_thicknesses() -> String {
        let lines: Vec<_> = LineThickness::ALL
            .iter()
            .enumerate()
            .map(|(i, t)| format!("{}. {}", i + 1, t))
            .collect();
        numbered_block("Enter line thickness:", &lines)
    }
}

fn numbered_block(header: &str, lines: &[String]) -> String {
    let body: String = lines.iter().map(|line| format!("\t{}\n", line)).collect();
    format!("{}\n{}", header, body)
}
