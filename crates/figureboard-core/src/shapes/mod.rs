//! Figure definitions for the registry.

mod figure;

pub use figure::Figure;

use std::fmt;

/// Unique identifier for figures.
pub type FigureId = u64;

/// Integer position on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// The closed set of figure kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FigureKind {
    Circle,
    Square,
    Triangle,
    Star,
}

impl FigureKind {
    /// All kinds in menu order.
    pub const ALL: [FigureKind; 4] = [
        FigureKind::Circle,
        FigureKind::Square,
        FigureKind::Triangle,
        FigureKind::Star,
    ];

    /// Display label used when describing a figure.
    pub fn label(self) -> &'static str {
        match self {
            FigureKind::Circle => "Circle",
            FigureKind::Square => "Square",
            FigureKind::Triangle => "Triangle",
            FigureKind::Star => "Star",
        }
    }
}

impl fmt::Display for FigureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Stroke pattern of a figure outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineType {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl LineType {
    /// All line types in menu order.
    pub const ALL: [LineType; 3] = [LineType::Solid, LineType::Dashed, LineType::Dotted];

    /// Map a 1-based menu choice to a line type.
    pub fn from_choice(choice: u32) -> Option<Self> {
        let index = usize::try_from(choice.checked_sub(1)?).ok()?;
        Self::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            LineType::Solid => "Solid",
            LineType::Dashed => "Dashed",
            LineType::Dotted => "Dotted",
        }
    }
}

impl fmt::Display for LineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Stroke weight of a figure outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineThickness {
    Thin,
    #[default]
    Normal,
    Thick,
}

impl LineThickness {
    /// All thicknesses in menu order.
    pub const ALL: [LineThickness; 3] = [
        LineThickness::Thin,
        LineThickness::Normal,
        LineThickness::Thick,
    ];

    /// Map a 1-based menu choice to a thickness.
    pub fn from_choice(choice: u32) -> Option<Self> {
        let index = usize::try_from(choice.checked_sub(1)?).ok()?;
        Self::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            LineThickness::Thin => "Thin",
            LineThickness::Normal => "Normal",
            LineThickness::Thick => "Thick",
        }
    }
}

impl fmt::Display for LineThickness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Style properties shared by every figure kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineStyle {
    pub line_type: LineType,
    pub thickness: LineThickness,
}
