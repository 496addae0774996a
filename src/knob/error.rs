use thiserror::Error;

/// Errors raised when a knob is configured
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KnobError {
    /// `max <= min` or `max < min + step`
    #[error("max value should be bigger or equal to min+step value (min: {min}, max: {max}, step: {step})")]
    Configuration { min: f64, max: f64, step: f64 },

    /// The value or the range is not a multiple of `step`
    ///
    /// Raised after the new configuration has been applied, so the controller
    /// already holds the rejected settings.
    #[error("value and (max - min) should be divisible by step (value: {value}, min: {min}, max: {max}, step: {step})")]
    Quantization {
        value: f64,
        min: f64,
        max: f64,
        step: f64,
    },
}

impl KnobError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }

    pub fn is_quantization(&self) -> bool {
        matches!(self, Self::Quantization { .. })
    }
}
