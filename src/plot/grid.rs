//! Fixed-size character grid the graph is rasterized into.

/// Glyph for a cell a function sample landed on.
pub const POINT_CHAR: char = '*';

/// Glyph for a cell on the x=0 or y=0 line.
pub const AXIS_CHAR: char = '#';

/// Glyph for an empty cell.
pub const BLANK_CHAR: char = ' ';

/// Default glyph for a cell where the function meets an axis.
pub const DEFAULT_INTERCEPT_CHAR: char = '@';

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    /// Nothing drawn here
    #[default]
    Blank,
    /// A function sample landed here
    Point,
    /// The cell lies on an axis and no sample landed here
    Axis,
    /// A function sample and an axis share this cell
    Intercept,
}

impl Cell {
    /// Character used to draw this cell.
    ///
    /// The intercept glyph is configurable, the others are fixed.
    pub fn glyph(self, intercept_char: char) -> char {
        match self {
            Cell::Blank => BLANK_CHAR,
            Cell::Point => POINT_CHAR,
            Cell::Axis => AXIS_CHAR,
            Cell::Intercept => intercept_char,
        }
    }

    /// Whether a function sample is recorded in this cell.
    pub fn is_plotted(self) -> bool {
        matches!(self, Cell::Point | Cell::Intercept)
    }
}

/// Row-major `width x height` grid with its origin at the top-left.
///
/// The size is fixed at construction. All indexing goes through
/// [`Grid::index_of`], which owns the bounds contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every cell blank.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Blank; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells (`width * height`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Linear index of `(row, col)`, or `None` when either coordinate is
    /// outside the grid.
    pub fn index_of(&self, row: i64, col: i64) -> Option<usize> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(row * self.width + col)
    }

    /// Cell at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index_of(row as i64, col as i64).map(|i| self.cells[i])
    }

    /// Cell at a linear index, or `None` when out of bounds.
    pub fn at(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Overwrite the cell at a linear index.
    ///
    /// Returns `false` and leaves the grid untouched when the index is out
    /// of bounds.
    pub fn set(&mut self, index: usize, cell: Cell) -> bool {
        match self.cells.get_mut(index) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks() panics on zero, and a zero-width grid has no rows anyway
        self.cells.chunks(self.width.max(1))
    }

    /// Number of cells holding `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|c| **c == cell).count()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Plain-text rendering, one line per row, each terminated by `\n`.
    pub fn to_text(&self, intercept_char: char) -> String {
        let mut out = String::with_capacity(self.len() + self.height);
        for row in self.rows() {
            out.extend(row.iter().map(|c| c.glyph(intercept_char)));
            out.push('\n');
        }
        out
    }
}
