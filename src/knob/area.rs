//! Interaction controller of a single knob
//!
//! [`KnobArea`] owns the knob's value, angle and interaction state. Input
//! handlers translate pointer, touch and keyboard events into new values; every
//! state change goes through a setter that notifies observers only when the
//! field actually changes.

use std::rc::Rc;
use std::sync::atomic::{AtomicU32, Ordering};

use tracing::{debug, trace};

use super::callbacks::KnobCallbacks;
use super::error::KnobError;
use super::events::{
    GlobalInput, KeyCode, KeyEvent, KnobId, ListenerGroup, PointerCoords, PointerEvent, TouchEvent,
};
use super::frame::{FrameScheduler, FrameSlot, ManualFrames};
use super::listeners::{InputSource, ListenerRegistry};
use super::position::{PositionResolver, resolve_center};
use super::props::KnobProps;
use super::scale::{DialScale, degree_of_rotation};

static NEXT_KNOB_ID: AtomicU32 = AtomicU32::new(0);

/// Host capabilities a knob needs to work
#[derive(Clone)]
pub struct KnobEnvironment {
    /// Where the knob element is on the page
    pub element: Rc<dyn PositionResolver>,
    /// Global surface for drag listeners
    pub input: Rc<dyn InputSource>,
    /// Frame scheduling for deferred angle updates
    pub frames: Rc<dyn FrameScheduler>,
}

impl KnobEnvironment {
    pub fn new(
        element: Rc<dyn PositionResolver>,
        input: Rc<dyn InputSource>,
        frames: Rc<dyn FrameScheduler>,
    ) -> Self {
        Self {
            element,
            input,
            frames,
        }
    }

    /// Environment with a private listener registry and manually driven frames
    pub fn headless(element: impl PositionResolver + 'static) -> Self {
        Self::new(
            Rc::new(element),
            Rc::new(ListenerRegistry::new()),
            Rc::new(ManualFrames::new()),
        )
    }
}

/// Stateful controller behind a rotary knob
pub struct KnobArea {
    id: KnobId,
    env: KnobEnvironment,
    scale: DialScale,
    diameter: f64,
    callbacks: KnobCallbacks,
    // Unset until the first configuration is applied
    value: Option<f64>,
    angle: Option<f64>,
    is_interacting: bool,
    location: [f64; 2],
    pending_rotation: FrameSlot<[f64; 2]>,
}

impl KnobArea {
    /// Creates a controller and applies `props` to it
    ///
    /// Fails with [`KnobError::Configuration`] when the bounds are invalid and
    /// with [`KnobError::Quantization`] when the value or range does not line up
    /// with `step`.
    pub fn new(env: KnobEnvironment, props: &KnobProps) -> Result<Self, KnobError> {
        let scale = props.scale();
        if !scale.has_valid_bounds() {
            return Err(KnobError::Configuration {
                min: props.min,
                max: props.max,
                step: props.step,
            });
        }

        let mut area = Self {
            id: KnobId(NEXT_KNOB_ID.fetch_add(1, Ordering::Relaxed)),
            env,
            scale,
            diameter: props.diameter,
            callbacks: props.callbacks.clone(),
            value: None,
            angle: None,
            is_interacting: false,
            location: [0.0, 0.0],
            pending_rotation: FrameSlot::new(),
        };
        area.update_from_props(props)?;
        debug!(knob = area.id.0, value = area.value(), "Knob created");
        Ok(area)
    }

    /// Applies a new configuration
    ///
    /// Invalid bounds are rejected before anything changes. The step alignment
    /// is only checked once the new settings are in place, so a
    /// [`KnobError::Quantization`] leaves the controller holding them.
    pub fn update_from_props(&mut self, props: &KnobProps) -> Result<(), KnobError> {
        let scale = props.scale();
        if !scale.has_valid_bounds() {
            return Err(KnobError::Configuration {
                min: props.min,
                max: props.max,
                step: props.step,
            });
        }

        self.scale = scale;
        self.diameter = props.diameter;
        self.callbacks.merge_from(&props.callbacks);

        if self.value != Some(props.value) {
            let current = self.value;
            let value = if current.is_some_and(|v| props.min > v) || props.value < props.min {
                props.min
            } else if current.is_some_and(|v| props.max < v) || props.value > props.max {
                props.max
            } else {
                props.value
            };
            self.set_value(value);
            self.set_angle(self.scale.angle_from_value(value));
        }

        let value = self.value();
        if value % self.scale.step != 0.0 || (self.scale.max - self.scale.min) % self.scale.step != 0.0
        {
            return Err(KnobError::Quantization {
                value,
                min: self.scale.min,
                max: self.scale.max,
                step: self.scale.step,
            });
        }
        Ok(())
    }

    pub fn id(&self) -> KnobId {
        self.id
    }

    /// Current value, always one of `min, min + step, ..., max`
    pub fn value(&self) -> f64 {
        self.value.unwrap_or(self.scale.min)
    }

    /// Current display angle in degrees
    pub fn angle(&self) -> f64 {
        self.angle.unwrap_or(0.0)
    }

    pub fn is_interacting(&self) -> bool {
        self.is_interacting
    }

    pub fn scale(&self) -> DialScale {
        self.scale
    }

    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    pub fn num_steps(&self) -> f64 {
        self.scale.num_steps()
    }

    pub fn vals_distribution(&self) -> f64 {
        self.scale.vals_distribution()
    }

    /// Page position of the dial center, as resolved when the current or last
    /// interaction started
    pub fn location(&self) -> [f64; 2] {
        self.location
    }

    pub fn angle_from_value(&self, value: f64) -> f64 {
        self.scale.angle_from_value(value)
    }

    pub fn value_from_angle(&self, angle: f64) -> f64 {
        self.scale.value_from_angle(angle)
    }

    /// Sets the value, notifying observers if it changed
    ///
    /// Returns true if the value changed.
    pub fn set_value(&mut self, value: f64) -> bool {
        if self.value == Some(value) {
            return false;
        }
        trace!(knob = self.id.0, value, "Value changed");
        self.value = Some(value);
        self.callbacks.value_changed(value);
        true
    }

    /// Sets the angle, notifying observers if it changed
    pub fn set_angle(&mut self, angle: f64) -> bool {
        if self.angle == Some(angle) {
            return false;
        }
        trace!(knob = self.id.0, angle, "Angle changed");
        self.angle = Some(angle);
        self.callbacks.angle_changed(angle);
        true
    }

    /// Sets the interaction state, notifying observers if it changed
    pub fn set_interacting(&mut self, is_interacting: bool) -> bool {
        if self.is_interacting == is_interacting {
            return false;
        }
        debug!(knob = self.id.0, is_interacting, "Interaction changed");
        self.is_interacting = is_interacting;
        self.callbacks.interaction_changed(is_interacting);
        true
    }

    /// Resolves the dial center for an interaction starting at `coords`
    pub fn update_area_location(&mut self, coords: PointerCoords) {
        self.location = resolve_center(self.env.element.as_ref(), self.diameter, coords);
        trace!(knob = self.id.0, x = self.location[0], y = self.location[1], "Area located");
    }

    /// Rotation of the page point `(x, y)` around the dial center
    pub fn calc_degree_of_rotation(&self, x: f64, y: f64) -> f64 {
        degree_of_rotation(self.location, [x, y])
    }

    /// Schedules an angle/value update for the page point `(x, y)`
    ///
    /// The update runs on the next [`on_frame`](Self::on_frame); a later call
    /// before then replaces this one.
    pub fn update_angle_value(&mut self, x: f64, y: f64) {
        self.pending_rotation.schedule([x, y]);
        self.env.frames.request_frame(self.id);
    }

    /// Returns true if an angle/value update is waiting for a frame
    pub fn has_pending_frame(&self) -> bool {
        self.pending_rotation.is_pending()
    }

    /// Runs the pending angle/value update, if any
    ///
    /// The angle is derived again from the quantized value, so it always shows
    /// a reachable position. Returns true if an update ran.
    pub fn on_frame(&mut self) -> bool {
        let Some([x, y]) = self.pending_rotation.take() else {
            return false;
        };
        let rotation = self.calc_degree_of_rotation(x, y);
        let value = self.scale.value_from_angle(rotation);
        self.set_value(value);
        self.set_angle(self.scale.angle_from_value(value));
        true
    }

    pub fn handle_pointer_down(&mut self, event: &PointerEvent) {
        self.add_window_event_listeners(ListenerGroup::Pointer);
        self.update_area_location(event.coords);
        self.update_angle_value(event.coords.page[0], event.coords.page[1]);
    }

    pub fn handle_pointer_move(&mut self, event: &PointerEvent) {
        if !self.is_interacting {
            return;
        }
        self.update_angle_value(event.coords.page[0], event.coords.page[1]);
    }

    pub fn handle_pointer_up(&mut self) {
        self.remove_window_event_listeners(ListenerGroup::Pointer);
    }

    /// Starts a touch drag; only a single touch point positions the knob
    pub fn handle_touch_start(&mut self, event: &TouchEvent) {
        self.add_window_event_listeners(ListenerGroup::Touch);
        if let Some(touch) = event.single_touch() {
            self.update_area_location(touch);
            self.update_angle_value(touch.page[0], touch.page[1]);
        }
    }

    pub fn handle_touch_move(&mut self, event: &TouchEvent) {
        if !self.is_interacting {
            return;
        }
        if let Some(touch) = event.single_touch() {
            self.update_angle_value(touch.page[0], touch.page[1]);
        }
    }

    pub fn handle_touch_end(&mut self) {
        self.remove_window_event_listeners(ListenerGroup::Touch);
    }

    pub fn handle_focus(&mut self) {
        self.set_interacting(true);
    }

    pub fn handle_blur(&mut self) {
        self.set_interacting(false);
    }

    /// Steps the value up or down by one `step`, staying within bounds
    pub fn handle_key_down(&mut self, event: &KeyEvent) {
        let value = self.value();
        let step = self.scale.step;
        let next = match event.key {
            KeyCode::Up if value + step <= self.scale.max => value + step,
            KeyCode::Down if value - step >= self.scale.min => value - step,
            _ => return,
        };
        self.set_value(next);
        self.set_angle(self.scale.angle_from_value(next));
    }

    /// Routes an event from the global input surface to its handler
    pub fn handle_global_input(&mut self, input: &GlobalInput) {
        match input {
            GlobalInput::PointerMove(event) => self.handle_pointer_move(event),
            GlobalInput::PointerUp => self.handle_pointer_up(),
            GlobalInput::TouchMove(event) => self.handle_touch_move(event),
            GlobalInput::TouchEnd => self.handle_touch_end(),
        }
    }

    /// Marks the knob as interacting and binds the group's global listeners
    pub fn add_window_event_listeners(&mut self, group: ListenerGroup) {
        self.set_interacting(true);
        for event in group.events() {
            self.env.input.add_listener(self.id, event);
        }
    }

    /// Ends the interaction and unbinds the group's global listeners
    pub fn remove_window_event_listeners(&mut self, group: ListenerGroup) {
        self.set_interacting(false);
        for event in group.events() {
            self.env.input.remove_listener(self.id, event);
        }
    }
}

impl std::fmt::Debug for KnobArea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KnobArea")
            .field("id", &self.id)
            .field("scale", &self.scale)
            .field("diameter", &self.diameter)
            .field("value", &self.value)
            .field("angle", &self.angle)
            .field("is_interacting", &self.is_interacting)
            .field("location", &self.location)
            .finish_non_exhaustive()
    }
}
