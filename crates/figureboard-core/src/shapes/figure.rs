//! Figure entity.

use super::{FigureId, FigureKind, LineStyle, LineThickness, LineType, Point};
use std::fmt;

/// A figure on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Figure {
    id: FigureId,
    position: Point,
    kind: FigureKind,
    /// Style properties.
    pub style: LineStyle,
}

impl Figure {
    /// Create a new figure with the default line style.
    pub fn new(kind: FigureKind, id: FigureId, position: Point) -> Self {
        Self {
            id,
            position,
            kind,
            style: LineStyle::default(),
        }
    }

    pub fn id(&self) -> FigureId {
        self.id
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn kind(&self) -> FigureKind {
        self.kind
    }

    pub fn line_type(&self) -> LineType {
        self.style.line_type
    }

    pub fn line_thickness(&self) -> LineThickness {
        self.style.thickness
    }

    pub fn set_line_type(&mut self, line_type: LineType) {
        self.style.line_type = line_type;
    }

    pub fn set_line_thickness(&mut self, thickness: LineThickness) {
        self.style.thickness = thickness;
    }

    /// Format the figure as `Label: [id N; x X; y Y; Type; Thickness]`.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: [id {}; x {}; y {}; {}; {}]",
            self.kind,
            self.id,
            self.position.x,
            self.position.y,
            self.style.line_type,
            self.style.thickness
        )
    }
}
