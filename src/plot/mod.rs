//! Graph rendering core.
//!
//! Turns a function into a character grid in two phases:
//!
//! 1. **Rasterize** - sample the function across the domain and mark the
//!    cell under every visible sample
//! 2. **Compose** - overlay the x and y axes, turning samples that sit on
//!    an axis into intercepts
//!
//! The resulting [`Grid`] is handed to the printer.

mod compose;
mod function;
mod grid;
mod rasterize;
mod viewport;

pub use compose::{compose_axes, draw_horizontal_axis, draw_vertical_axis};
pub use function::{FunctionPreset, PlotFunction};
pub use grid::{Cell, Grid, AXIS_CHAR, BLANK_CHAR, DEFAULT_INTERCEPT_CHAR, POINT_CHAR};
pub use rasterize::{rasterize, rasterize_into, sample};
pub use viewport::{Viewport, SAMPLE_STEP};

/// Rasterize `function` and overlay the axes.
pub fn render<F>(function: &F, viewport: &Viewport) -> Grid
where
    F: PlotFunction + ?Sized,
{
    log::debug!(
        "Rendering {}x{} graph at scale {} (x in [{}, {}), y in [{}, {}))",
        viewport.width(),
        viewport.height(),
        viewport.scale(),
        viewport.x_min(),
        viewport.x_max(),
        viewport.y_min(),
        viewport.y_max()
    );
    let mut grid = rasterize(function, viewport);
    compose_axes(&mut grid, viewport);
    grid
}
