//! Writing a rendered grid to a terminal.

use std::io::{self, Write};

use crate::plot::{Cell, Grid};

/// ANSI foreground for axis cells (red).
pub const AXIS_COLOR: &str = "\x1b[31m";

/// ANSI foreground for plotted points (bright green).
pub const POINT_COLOR: &str = "\x1b[92m";

/// ANSI foreground for intercepts (bright cyan).
pub const INTERCEPT_COLOR: &str = "\x1b[96m";

/// ANSI reset, emitted after every colored character.
pub const RESET: &str = "\x1b[0m";

/// Color escape for a cell, `None` for unstyled cells.
pub fn cell_color(cell: Cell) -> Option<&'static str> {
    match cell {
        Cell::Blank => None,
        Cell::Point => Some(POINT_COLOR),
        Cell::Axis => Some(AXIS_COLOR),
        Cell::Intercept => Some(INTERCEPT_COLOR),
    }
}

/// Emits a grid row by row, optionally color coded.
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    color: bool,
    intercept_char: char,
}

impl Printer {
    pub fn new(color: bool, intercept_char: char) -> Self {
        Self {
            color,
            intercept_char,
        }
    }

    /// Write every row of `grid` to `out`, each followed by a newline.
    pub fn print<W: Write>(&self, grid: &Grid, out: &mut W) -> io::Result<()> {
        let mut line = String::new();
        for row in grid.rows() {
            line.clear();
            for cell in row {
                self.push_cell(&mut line, *cell);
            }
            line.push('\n');
            out.write_all(line.as_bytes())?;
        }
        out.flush()
    }

    /// Render `grid` into a string, exactly as [`Printer::print`] would.
    pub fn render_to_string(&self, grid: &Grid) -> String {
        let mut out = String::new();
        for row in grid.rows() {
            for cell in row {
                self.push_cell(&mut out, *cell);
            }
            out.push('\n');
        }
        out
    }

    fn push_cell(&self, out: &mut String, cell: Cell) {
        let glyph = cell.glyph(self.intercept_char);
        if !self.color {
            out.push(glyph);
            return;
        }
        if let Some(color) = cell_color(cell) {
            out.push_str(color);
        }
        out.push(glyph);
        out.push_str(RESET);
    }
}
