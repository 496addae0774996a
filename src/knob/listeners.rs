//! Global listener registration
//!
//! While a drag is in progress the knob listens for move and release events on
//! the whole input surface, not only on its own element, so the drag keeps
//! working when the pointer leaves the dial. The surface is injected through
//! [`InputSource`]; [`ListenerRegistry`] is an in-process implementation that a
//! host can feed events into.

use std::cell::RefCell;

use tracing::debug;

use super::area::KnobArea;
use super::events::{GlobalEventKind, GlobalInput, KnobId};

/// Global input surface that knobs bind drag listeners to
pub trait InputSource {
    /// Starts delivering `event` to `owner`
    fn add_listener(&self, owner: KnobId, event: GlobalEventKind);

    /// Stops delivering `event` to `owner`
    fn remove_listener(&self, owner: KnobId, event: GlobalEventKind);
}

/// Records bound listeners and routes global input to their owners
///
/// Binding the same listener twice keeps a single entry and removing an unbound
/// listener does nothing, matching `addEventListener`/`removeEventListener`.
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    listeners: RefCell<Vec<(GlobalEventKind, KnobId)>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of bound listeners
    pub fn len(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.borrow().is_empty()
    }

    /// Bound listeners in binding order
    pub fn listeners(&self) -> Vec<(GlobalEventKind, KnobId)> {
        self.listeners.borrow().clone()
    }

    /// Knobs listening for `event`
    pub fn owners_of(&self, event: GlobalEventKind) -> Vec<KnobId> {
        self.listeners
            .borrow()
            .iter()
            .filter(|(kind, _)| *kind == event)
            .map(|(_, owner)| *owner)
            .collect()
    }

    /// Delivers `input` to every knob in `knobs` that listens for it
    ///
    /// Returns the number of knobs that received the event.
    pub fn dispatch<'a>(
        &self,
        input: &GlobalInput,
        knobs: impl IntoIterator<Item = &'a mut KnobArea>,
    ) -> usize {
        // Handlers unbind listeners, so collect owners before calling them
        let owners = self.owners_of(input.kind());
        let mut delivered = 0;
        for knob in knobs {
            if owners.contains(&knob.id()) {
                knob.handle_global_input(input);
                delivered += 1;
            }
        }
        delivered
    }
}

impl InputSource for ListenerRegistry {
    fn add_listener(&self, owner: KnobId, event: GlobalEventKind) {
        let mut listeners = self.listeners.borrow_mut();
        if !listeners.contains(&(event, owner)) {
            debug!(knob = owner.0, event = event.name(), "Listener added");
            listeners.push((event, owner));
        }
    }

    fn remove_listener(&self, owner: KnobId, event: GlobalEventKind) {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|entry| *entry != (event, owner));
        if listeners.len() != before {
            debug!(knob = owner.0, event = event.name(), "Listener removed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_idempotent() {
        let registry = ListenerRegistry::new();
        registry.add_listener(KnobId(1), GlobalEventKind::PointerMove);
        registry.add_listener(KnobId(1), GlobalEventKind::PointerMove);
        registry.add_listener(KnobId(2), GlobalEventKind::PointerMove);
        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.owners_of(GlobalEventKind::PointerMove),
            vec![KnobId(1), KnobId(2)]
        );
    }

    #[test]
    fn test_remove_only_matching_entry() {
        let registry = ListenerRegistry::new();
        registry.add_listener(KnobId(1), GlobalEventKind::TouchMove);
        registry.add_listener(KnobId(1), GlobalEventKind::TouchEnd);
        registry.remove_listener(KnobId(2), GlobalEventKind::TouchMove);
        registry.remove_listener(KnobId(1), GlobalEventKind::PointerUp);
        assert_eq!(registry.len(), 2);

        registry.remove_listener(KnobId(1), GlobalEventKind::TouchMove);
        assert_eq!(
            registry.listeners(),
            vec![(GlobalEventKind::TouchEnd, KnobId(1))]
        );
        registry.remove_listener(KnobId(1), GlobalEventKind::TouchEnd);
        assert!(registry.is_empty());
    }
}
