//! Knob configuration supplied by the presentation layer

use serde::{Deserialize, Serialize};

use super::callbacks::KnobCallbacks;
use super::scale::DialScale;

/// Configuration of one knob, re-applied on every update
///
/// Callbacks cannot be serialized; a deserialized configuration has none.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnobProps {
    /// Rendered size in pixels, used to find the dial center
    pub diameter: f64,
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Reserve an extra slot between `max` and `min`, defaults to true
    #[serde(default)]
    pub space_max_from_zero: Option<bool>,
    #[serde(skip)]
    pub callbacks: KnobCallbacks,
}

impl KnobProps {
    pub fn new(diameter: f64, min: f64, max: f64, step: f64, value: f64) -> Self {
        Self {
            diameter,
            value,
            min,
            max,
            step,
            space_max_from_zero: None,
            callbacks: KnobCallbacks::default(),
        }
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    pub fn with_space_max_from_zero(mut self, space: bool) -> Self {
        self.space_max_from_zero = Some(space);
        self
    }

    pub fn with_callbacks(mut self, callbacks: KnobCallbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    /// The value scale described by these props
    pub fn scale(&self) -> DialScale {
        DialScale::new(
            self.min,
            self.max,
            self.step,
            self.space_max_from_zero.unwrap_or(true),
        )
    }
}
