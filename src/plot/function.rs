//! Functions that can be graphed.

/// A single-variable real function.
///
/// Returning `None` marks a hole: the input is outside the function's
/// domain and nothing is drawn for it.
pub trait PlotFunction {
    fn eval(&self, x: f64) -> Option<f64>;
}

impl<F> PlotFunction for F
where
    F: Fn(f64) -> Option<f64>,
{
    fn eval(&self, x: f64) -> Option<f64> {
        self(x)
    }
}

/// Functions compiled into the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FunctionPreset {
    /// x²
    #[default]
    Square,
    /// x
    Linear,
    /// x³
    Cubic,
    /// sin x
    Sine,
    /// 1/x, undefined at 0
    Reciprocal,
    /// √x, undefined for x < 0
    Sqrt,
}

impl FunctionPreset {
    /// Every preset, in listing order.
    pub fn all() -> &'static [FunctionPreset] {
        &[
            FunctionPreset::Square,
            FunctionPreset::Linear,
            FunctionPreset::Cubic,
            FunctionPreset::Sine,
            FunctionPreset::Reciprocal,
            FunctionPreset::Sqrt,
        ]
    }

    /// Name used on the command line and in the config file.
    pub fn name(&self) -> &'static str {
        match self {
            FunctionPreset::Square => "square",
            FunctionPreset::Linear => "linear",
            FunctionPreset::Cubic => "cubic",
            FunctionPreset::Sine => "sine",
            FunctionPreset::Reciprocal => "reciprocal",
            FunctionPreset::Sqrt => "sqrt",
        }
    }

    /// Human-readable formula.
    pub fn formula(&self) -> &'static str {
        match self {
            FunctionPreset::Square => "f(x) = x^2",
            FunctionPreset::Linear => "f(x) = x",
            FunctionPreset::Cubic => "f(x) = x^3",
            FunctionPreset::Sine => "f(x) = sin(x)",
            FunctionPreset::Reciprocal => "f(x) = 1/x",
            FunctionPreset::Sqrt => "f(x) = sqrt(x)",
        }
    }

    /// Look up a preset by name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::all()
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }
}

impl PlotFunction for FunctionPreset {
    fn eval(&self, x: f64) -> Option<f64> {
        match self {
            FunctionPreset::Square => Some(x * x),
            FunctionPreset::Linear => Some(x),
            FunctionPreset::Cubic => Some(x * x * x),
            FunctionPreset::Sine => Some(x.sin()),
            FunctionPreset::Reciprocal => (x != 0.0).then(|| 1.0 / x),
            FunctionPreset::Sqrt => (x >= 0.0).then(|| x.sqrt()),
        }
    }
}

impl std::fmt::Display for FunctionPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
