//! Render options and their validation.

use crate::plot::{FunctionPreset, Viewport, DEFAULT_INTERCEPT_CHAR};

/// Smallest accepted width or height.
pub const MIN_DIMENSION: u32 = 20;

/// Largest accepted width or height.
pub const MAX_DIMENSION: u32 = 10_000;

pub const DEFAULT_SCALE: f64 = 4.5;
pub const DEFAULT_WIDTH: u32 = 60;
pub const DEFAULT_HEIGHT: u32 = 30;

/// Errors from invalid render options.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum OptionsError {
    #[error("{name} must be at least 20, got {value}")]
    DimensionTooSmall { name: &'static str, value: u32 },

    #[error("{name} must be at most 10000, got {value}")]
    DimensionTooLarge { name: &'static str, value: u32 },

    #[error("scale must be a positive number, got {0}")]
    InvalidScale(f64),

    #[error("intercept character must be printable, got {0:?}")]
    InvalidInterceptChar(char),

    #[error("unknown function '{0}' (see `termgraph list-functions`)")]
    UnknownFunction(String),
}

/// Everything a single render needs. Built once, then read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub color_enabled: bool,
    pub scale: f64,
    pub height: u32,
    pub width: u32,
    pub intercept_char: char,
    pub function: FunctionPreset,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            color_enabled: true,
            scale: DEFAULT_SCALE,
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            intercept_char: DEFAULT_INTERCEPT_CHAR,
            function: FunctionPreset::default(),
        }
    }
}

impl Options {
    /// Check every field against its accepted range.
    pub fn validate(&self) -> Result<(), OptionsError> {
        validate_dimension("width", self.width)?;
        validate_dimension("height", self.height)?;
        validate_scale(self.scale)?;
        validate_intercept_char(self.intercept_char)?;
        Ok(())
    }

    /// Viewport for these options.
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width as usize, self.height as usize, self.scale)
    }
}

/// Check a width or height.
pub fn validate_dimension(name: &'static str, value: u32) -> Result<u32, OptionsError> {
    if value < MIN_DIMENSION {
        return Err(OptionsError::DimensionTooSmall { name, value });
    }
    if value > MAX_DIMENSION {
        return Err(OptionsError::DimensionTooLarge { name, value });
    }
    Ok(value)
}

pub fn validate_scale(scale: f64) -> Result<f64, OptionsError> {
    if scale.is_finite() && scale > 0.0 {
        Ok(scale)
    } else {
        Err(OptionsError::InvalidScale(scale))
    }
}

pub fn validate_intercept_char(c: char) -> Result<char, OptionsError> {
    if c.is_control() || c.is_whitespace() {
        Err(OptionsError::InvalidInterceptChar(c))
    } else {
        Ok(c)
    }
}

/// Intercept character from raw user input.
///
/// Empty input selects the default; otherwise the first character is
/// used and the rest ignored.
pub fn parse_intercept_char(input: &str) -> Result<char, OptionsError> {
    match input.chars().next() {
        None => Ok(DEFAULT_INTERCEPT_CHAR),
        Some(c) => validate_intercept_char(c),
    }
}

/// Function preset from its name.
pub fn parse_function(name: &str) -> Result<FunctionPreset, OptionsError> {
    FunctionPreset::from_name(name).ok_or_else(|| OptionsError::UnknownFunction(name.to_string()))
}
