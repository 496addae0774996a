//! Presentation-side holder for a knob controller
//!
//! [`Knob`] plays the role of the rendered knob element: the first render
//! creates the [`KnobArea`], later renders push new props into it. A rejected
//! configuration never escapes as an error. It is logged and turned into
//! [`KnobView::Error`] so the host can draw a visible error marker in place of
//! the control.

use tracing::error;

use super::area::{KnobArea, KnobEnvironment};
use super::error::KnobError;
use super::props::KnobProps;

/// What the host should draw after a render
#[derive(Debug)]
pub enum KnobView<'a> {
    /// Normal, interactive control
    Control(&'a KnobArea),
    /// Configuration was rejected
    Error {
        diameter: f64,
        message: String,
        /// Controller from an earlier successful render, if any
        area: Option<&'a KnobArea>,
    },
}

impl KnobView<'_> {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

/// A mounted knob
pub struct Knob {
    env: KnobEnvironment,
    area: Option<KnobArea>,
    error: Option<KnobError>,
    diameter: f64,
}

impl Knob {
    pub fn new(env: KnobEnvironment) -> Self {
        Self {
            env,
            area: None,
            error: None,
            diameter: 0.0,
        }
    }

    /// Creates or updates the controller from `props`
    pub fn render(&mut self, props: &KnobProps) -> KnobView<'_> {
        self.diameter = props.diameter;

        let result = match self.area.as_mut() {
            Some(area) => area.update_from_props(props),
            None => KnobArea::new(self.env.clone(), props).map(|area| {
                self.area = Some(area);
            }),
        };

        self.error = result.err();
        if let Some(err) = &self.error {
            error!(error = %err, "Knob configuration rejected");
        }
        self.view()
    }

    /// View for the last render
    pub fn view(&self) -> KnobView<'_> {
        match (&self.error, self.area.as_ref()) {
            (None, Some(area)) => KnobView::Control(area),
            (err, area) => KnobView::Error {
                diameter: self.diameter,
                message: err
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| "knob has not been rendered".to_string()),
                area,
            },
        }
    }

    pub fn area(&self) -> Option<&KnobArea> {
        self.area.as_ref()
    }

    /// Controller for wiring input events, only while the configuration is valid
    pub fn area_mut(&mut self) -> Option<&mut KnobArea> {
        if self.error.is_some() {
            return None;
        }
        self.area.as_mut()
    }

    pub fn error(&self) -> Option<&KnobError> {
        self.error.as_ref()
    }

    /// Ends any drag in progress so no global listener outlives the knob
    pub fn unmount(&mut self) {
        if let Some(area) = self.area.as_mut()
            && area.is_interacting()
        {
            area.handle_pointer_up();
            area.handle_touch_end();
        }
    }
}

impl Drop for Knob {
    fn drop(&mut self) {
        self.unmount();
    }
}
