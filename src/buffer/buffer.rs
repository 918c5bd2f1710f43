use super::Cell;
use crate::style::Rgb;

/// A grid of terminal cells. The paint API takes signed coordinates and
/// silently clips anything outside the grid, so callers can draw content
/// that hangs off any edge (a mirror with a negative left offset, a table
/// scrolled half out of view) without pre-clipping.
#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        let cells = vec![Cell::default(); (width as usize) * (height as usize)];
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width as i32 && y < self.height as i32
    }

    /// Write a character, keeping the cell's current background.
    pub fn put(&mut self, x: i32, y: i32, ch: char, fg: Rgb, bold: bool) {
        if self.in_bounds(x, y) {
            let idx = self.index(x as u16, y as u16);
            let cell = &mut self.cells[idx];
            cell.ch = ch;
            cell.fg = fg;
            cell.bold = bold;
        }
    }

    /// Set a cell's background, keeping its character.
    pub fn paint_bg(&mut self, x: i32, y: i32, bg: Rgb) {
        if self.in_bounds(x, y) {
            let idx = self.index(x as u16, y as u16);
            self.cells[idx].bg = bg;
        }
    }

    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    pub fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| {
                let x = (i % self.width as usize) as u16;
                let y = (i / self.width as usize) as u16;
                (x, y, cell)
            })
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::default();
        }
    }
}
