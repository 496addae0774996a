//! Change notification callbacks

use std::fmt;
use std::rc::Rc;

/// Callback receiving a new angle or value
pub type NumberCallback = Rc<dyn Fn(f64)>;

/// Callback receiving the new interaction state
pub type InteractionCallback = Rc<dyn Fn(bool)>;

/// Observers notified when the knob's state changes
///
/// Every callback is optional. Callbacks fire synchronously and only when the
/// observed field actually changes.
#[derive(Clone, Default)]
pub struct KnobCallbacks {
    pub on_angle_change: Option<NumberCallback>,
    pub on_value_change: Option<NumberCallback>,
    pub on_interaction_change: Option<InteractionCallback>,
}

impl KnobCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_angle_change(mut self, callback: impl Fn(f64) + 'static) -> Self {
        self.on_angle_change = Some(Rc::new(callback));
        self
    }

    pub fn on_value_change(mut self, callback: impl Fn(f64) + 'static) -> Self {
        self.on_value_change = Some(Rc::new(callback));
        self
    }

    pub fn on_interaction_change(mut self, callback: impl Fn(bool) + 'static) -> Self {
        self.on_interaction_change = Some(Rc::new(callback));
        self
    }

    /// Takes over the callbacks `incoming` provides and keeps the rest
    pub fn merge_from(&mut self, incoming: &KnobCallbacks) {
        if let Some(cb) = &incoming.on_angle_change {
            self.on_angle_change = Some(Rc::clone(cb));
        }
        if let Some(cb) = &incoming.on_value_change {
            self.on_value_change = Some(Rc::clone(cb));
        }
        if let Some(cb) = &incoming.on_interaction_change {
            self.on_interaction_change = Some(Rc::clone(cb));
        }
    }

    pub(crate) fn angle_changed(&self, angle: f64) {
        if let Some(cb) = &self.on_angle_change {
            cb(angle);
        }
    }

    pub(crate) fn value_changed(&self, value: f64) {
        if let Some(cb) = &self.on_value_change {
            cb(value);
        }
    }

    pub(crate) fn interaction_changed(&self, is_interacting: bool) {
        if let Some(cb) = &self.on_interaction_change {
            cb(is_interacting);
        }
    }
}

impl fmt::Debug for KnobCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KnobCallbacks")
            .field("on_angle_change", &self.on_angle_change.is_some())
            .field("on_value_change", &self.on_value_change.is_some())
            .field("on_interaction_change", &self.on_interaction_change.is_some())
            .finish()
    }
}

/// Chains two callbacks: `handler` runs first, then `callback` if there is one
///
/// Skins use this to observe a change while still forwarding it to the
/// caller's own callback.
pub fn compose_two<T: 'static>(
    handler: Rc<dyn Fn(T)>,
    callback: Option<Rc<dyn Fn(T)>>,
) -> Rc<dyn Fn(T)>
where
    T: Clone,
{
    Rc::new(move |arg: T| {
        handler(arg.clone());
        if let Some(callback) = &callback {
            callback(arg);
        }
    })
}
