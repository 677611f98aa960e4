//! Sampling a function onto the grid.

use super::function::PlotFunction;
use super::grid::{Cell, Grid};
use super::viewport::Viewport;

/// Evaluate `function` at grid-space `x`, returning the grid-space `y`.
///
/// The input is divided by the scale before evaluation and the output
/// multiplied by it. A hole (`None`, or NaN from the arithmetic) yields
/// `None`.
pub fn sample<F>(function: &F, viewport: &Viewport, x: f64) -> Option<f64>
where
    F: PlotFunction + ?Sized,
{
    let scale = viewport.scale();
    function
        .eval(x / scale)
        .map(|y| y * scale)
        .filter(|y| !y.is_nan())
}

/// Sample `function` across the viewport's domain and mark every visible
/// sample on a fresh grid.
///
/// Samples that are holes, that fall on or outside the viewport boundary,
/// or that round to a cell outside the grid are dropped.
pub fn rasterize<F>(function: &F, viewport: &Viewport) -> Grid
where
    F: PlotFunction + ?Sized,
{
    let mut grid = Grid::new(viewport.width(), viewport.height());
    rasterize_into(function, viewport, &mut grid);
    grid
}

/// Like [`rasterize`], but marks into an existing grid.
///
/// Returns the number of samples written.
pub fn rasterize_into<F>(function: &F, viewport: &Viewport, grid: &mut Grid) -> usize
where
    F: PlotFunction + ?Sized,
{
    let mut written = 0;
    let mut holes = 0;

    for x in viewport.sample_xs() {
        let Some(y) = sample(function, viewport, x) else {
            holes += 1;
            continue;
        };
        if !viewport.contains(x, y) {
            continue;
        }
        let (row, col) = viewport.to_cell(x, y);
        if let Some(index) = grid.index_of(row, col) {
            grid.set(index, Cell::Point);
            written += 1;
        }
    }

    log::debug!(
        "Rasterized {} samples ({} written, {} holes) into {}x{} grid",
        viewport.sample_count(),
        written,
        holes,
        grid.width(),
        grid.height()
    );
    written
}
