//! CLI enum types.

use clap::ValueEnum;

use crate::plot::FunctionPreset;

/// Function to plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Function {
    #[default]
    Square,
    Linear,
    Cubic,
    Sine,
    Reciprocal,
    Sqrt,
}

impl From<Function> for FunctionPreset {
    fn from(f: Function) -> Self {
        match f {
            Function::Square => FunctionPreset::Square,
            Function::Linear => FunctionPreset::Linear,
            Function::Cubic => FunctionPreset::Cubic,
            Function::Sine => FunctionPreset::Sine,
            Function::Reciprocal => FunctionPreset::Reciprocal,
            Function::Sqrt => FunctionPreset::Sqrt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_to_preset() {
        assert_eq!(FunctionPreset::from(Function::Square), FunctionPreset::Square);
        assert_eq!(FunctionPreset::from(Function::Linear), FunctionPreset::Linear);
        assert_eq!(FunctionPreset::from(Function::Cubic), FunctionPreset::Cubic);
        assert_eq!(FunctionPreset::from(Function::Sine), FunctionPreset::Sine);
        assert_eq!(
            FunctionPreset::from(Function::Reciprocal),
            FunctionPreset::Reciprocal
        );
        assert_eq!(FunctionPreset::from(Function::Sqrt), FunctionPreset::Sqrt);
    }

    #[test]
    fn test_value_names_match_preset_names() {
        for variant in Function::value_variants() {
            let name = variant
                .to_possible_value()
                .map(|v| v.get_name().to_string())
                .unwrap();
            assert_eq!(FunctionPreset::from(*variant).name(), name);
        }
    }
}
