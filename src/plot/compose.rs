//! Axis overlay.
//!
//! Draws the `x = 0` and `y = 0` lines onto a rasterized grid. A cell that
//! already holds a function sample becomes an intercept, anything else
//! becomes an axis cell. The vertical axis is drawn first, then the
//! horizontal one; at the origin the horizontal pass keeps an intercept
//! left by the vertical pass.

use super::grid::{Cell, Grid};
use super::viewport::Viewport;

/// Draw both axes onto `grid` in place.
///
/// Running this more than once leaves the grid unchanged after the first
/// run.
///
/// # Panics
/// Panics if an axis cell falls outside the grid. That only happens when
/// the viewport bounds do not match the grid size (e.g. an asymmetric
/// viewport built with [`Viewport::with_bounds`]).
pub fn compose_axes(grid: &mut Grid, viewport: &Viewport) {
    draw_vertical_axis(grid, viewport);
    draw_horizontal_axis(grid, viewport);
    log::debug!(
        "Composed axes: {} intercept cell(s)",
        grid.count(Cell::Intercept)
    );
}

/// Draw the `x = 0` line, one cell per row in `[y_min, y_max)`.
pub fn draw_vertical_axis(grid: &mut Grid, viewport: &Viewport) {
    let col = -viewport.x_min();
    for y in viewport.y_min()..viewport.y_max() {
        let row = y - viewport.y_min();
        let index = axis_index(grid, row, col);
        overlay(grid, index);
    }
}

/// Draw the `y = 0` line, one cell per column in `[x_min, x_max)`.
pub fn draw_horizontal_axis(grid: &mut Grid, viewport: &Viewport) {
    let row = -viewport.y_min();
    for x in viewport.x_min()..viewport.x_max() {
        let col = x - viewport.x_min();
        let index = axis_index(grid, row, col);
        overlay(grid, index);
    }
}

fn axis_index(grid: &Grid, row: i64, col: i64) -> usize {
    match grid.index_of(row, col) {
        Some(index) => index,
        None => panic!(
            "axis cell ({}, {}) outside {}x{} grid: viewport does not match grid",
            row,
            col,
            grid.width(),
            grid.height()
        ),
    }
}

fn overlay(grid: &mut Grid, index: usize) {
    let next = match grid.at(index) {
        Some(cell) if cell.is_plotted() => Cell::Intercept,
        _ => Cell::Axis,
    };
    grid.set(index, next);
}
