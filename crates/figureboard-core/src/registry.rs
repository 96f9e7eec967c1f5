//! Figure registry and id allocation.

use crate::shapes::{Figure, FigureId, FigureKind, LineThickness, LineType, Point};
use std::collections::HashMap;

/// In-memory registry owning every figure on the board, keyed by id.
///
/// Ids come from a counter owned by the registry. The counter only moves
/// forward, so an id is never handed out twice, even after `remove` or
/// `clear`.
#[derive(Debug, Clone, Default)]
pub struct FigureRegistry {
    figures: HashMap<FigureId, Figure>,
    next_id: FigureId,
}

impl FigureRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a figure and store it. Returns the id it was given.
    pub fn insert(&mut self, kind: FigureKind, position: Point) -> FigureId {
        let id = self.next_id;
        self.next_id += 1;
        self.figures.insert(id, Figure::new(kind, id, position));
        log::debug!("Created {} {} at ({}, {})", kind, id, position.x, position.y);
        id
    }

    /// Get a figure by ID.
    pub fn get(&self, id: FigureId) -> Option<&Figure> {
        self.figures.get(&id)
    }

    /// Get a mutable reference to a figure by ID.
    pub fn get_mut(&mut self, id: FigureId) -> Option<&mut Figure> {
        self.figures.get_mut(&id)
    }

    pub fn contains(&self, id: FigureId) -> bool {
        self.figures.contains_key(&id)
    }

    /// Set the line type of a figure.
    /// Returns the updated description, or `None` if the id is unknown.
    pub fn set_line_type(&mut self, id: FigureId, line_type: LineType) -> Option<String> {
        let figure = self.figures.get_mut(&id)?;
        figure.set_line_type(line_type);
        Some(figure.describe())
    }

    /// Set the line thickness of a figure.
    /// Returns the updated description, or `None` if the id is unknown.
    pub fn set_line_thickness(&mut self, id: FigureId, thickness: LineThickness) -> Option<String> {
        let figure = self.figures.get_mut(&id)?;
        figure.set_line_thickness(thickness);
        Some(figure.describe())
    }

    pub fn describe(&self, id: FigureId) -> Option<String> {
        self.figures.get(&id).map(Figure::describe)
    }

    /// Describe every figure, in no particular order.
    /// Returns `None` when the registry is empty.
    pub fn describe_all(&self) -> Option<Vec<String>> {
        if self.figures.is_empty() {
            return None;
        }
        Some(self.figures.values().map(Figure::describe).collect())
    }

    /// Remove a figure. Unknown ids are ignored.
    pub fn remove(&mut self, id: FigureId) -> Option<Figure> {
        let removed = self.figures.remove(&id);
        if let Some(figure) = &removed {
            log::debug!("Dropped {} {}", figure.kind(), id);
        }
        removed
    }

    /// Remove all figures. The id counter keeps running.
    pub fn clear(&mut self) {
        for (id, figure) in self.figures.drain() {
            log::debug!("Dropped {} {}", figure.kind(), id);
        }
    }

    /// Iterate over all figures, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Figure> {
        self.figures.values()
    }

    /// The id the next inserted figure will receive.
    pub fn next_id(&self) -> FigureId {
        self.next_id
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }

    /// Get the number of figures.
    pub fn len(&self) -> usize {
        self.figures.len()
    }
}
