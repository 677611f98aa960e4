//! Mapping between function space and grid space.

/// Distance between consecutive sample inputs, in domain units.
pub const SAMPLE_STEP: f64 = 0.001;

/// Visible region of the plane, centered on the origin.
///
/// Computed once per render from the grid size and scale. Bounds are
/// integral: `x_max = width / 2`, `y_max = height / 2` (floor division),
/// with `x_min = -x_max` and `y_min = -y_max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: usize,
    height: usize,
    x_min: i64,
    x_max: i64,
    y_min: i64,
    y_max: i64,
    scale: f64,
    domain_radius: f64,
    step: f64,
}

impl Viewport {
    /// Build the centered viewport for a `width x height` grid.
    pub fn new(width: usize, height: usize, scale: f64) -> Self {
        let x_max = (width / 2) as i64;
        let y_max = (height / 2) as i64;
        Self::with_bounds(width, height, (-x_max, x_max), (-y_max, y_max), scale)
    }

    /// Build a viewport with explicit bounds.
    ///
    /// No symmetry is enforced here. Axis compositing assumes the bounds
    /// produced by [`Viewport::new`] and panics on anything that would
    /// put an axis outside the grid.
    pub fn with_bounds(
        width: usize,
        height: usize,
        (x_min, x_max): (i64, i64),
        (y_min, y_max): (i64, i64),
        scale: f64,
    ) -> Self {
        Self {
            width,
            height,
            x_min,
            x_max,
            y_min,
            y_max,
            scale,
            domain_radius: width.max(height) as f64,
            step: SAMPLE_STEP,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn x_min(&self) -> i64 {
        self.x_min
    }

    pub fn x_max(&self) -> i64 {
        self.x_max
    }

    pub fn y_min(&self) -> i64 {
        self.y_min
    }

    pub fn y_max(&self) -> i64 {
        self.y_max
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Half-width of the sampled input range.
    pub fn domain_radius(&self) -> f64 {
        self.domain_radius
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Number of samples taken across `[-domain_radius, domain_radius)`.
    pub fn sample_count(&self) -> u64 {
        (2.0 * self.domain_radius / self.step).round() as u64
    }

    /// Sample inputs from `-domain_radius` up to (not including)
    /// `+domain_radius`, `step` apart.
    pub fn sample_xs(&self) -> impl Iterator<Item = f64> {
        let start = -self.domain_radius;
        let step = self.step;
        (0..self.sample_count()).map(move |i| start + i as f64 * step)
    }

    /// Whether `(x, y)` lies strictly inside the viewport.
    ///
    /// Points exactly on a boundary are outside.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x < self.x_max as f64
            && x > self.x_min as f64
            && y < self.y_max as f64
            && y > self.y_min as f64
    }

    /// Grid `(row, col)` for a point in function space.
    ///
    /// Rounds half away from zero, then offsets by the axis minimum. The
    /// vertical axis is flipped so larger `y` lands on a smaller row.
    pub fn to_cell(&self, x: f64, y: f64) -> (i64, i64) {
        let row = (-y).round() as i64 - self.y_min;
        let col = x.round() as i64 - self.x_min;
        (row, col)
    }

    /// Grid `(row, col)` of the origin.
    pub fn origin(&self) -> (i64, i64) {
        (-self.y_min, -self.x_min)
    }
}
