//! Input events consumed by the knob controller

/// Identifier of one knob controller, used as the owner of global listeners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KnobId(pub u32);

/// Page and viewport coordinates of a pointer or touch point
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerCoords {
    /// Position relative to the document
    pub page: [f64; 2],
    /// Position relative to the viewport
    pub client: [f64; 2],
}

impl PointerCoords {
    pub fn new(page: [f64; 2], client: [f64; 2]) -> Self {
        Self { page, client }
    }

    /// Coordinates for a page that is not scrolled
    pub fn at(x: f64, y: f64) -> Self {
        Self::new([x, y], [x, y])
    }

    /// How far the document was scrolled when the event fired
    pub fn scroll_offset(&self) -> [f64; 2] {
        [
            self.page[0] - self.client[0],
            self.page[1] - self.client[1],
        ]
    }
}

/// Mouse or pen event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub coords: PointerCoords,
}

impl PointerEvent {
    pub fn new(coords: PointerCoords) -> Self {
        Self { coords }
    }

    pub fn at(x: f64, y: f64) -> Self {
        Self::new(PointerCoords::at(x, y))
    }
}

/// Touch event carrying the touch points that changed
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TouchEvent {
    pub changed_touches: Vec<PointerCoords>,
}

impl TouchEvent {
    pub fn new(changed_touches: Vec<PointerCoords>) -> Self {
        Self { changed_touches }
    }

    /// Event with exactly one touch point
    pub fn single(x: f64, y: f64) -> Self {
        Self::new(vec![PointerCoords::at(x, y)])
    }

    /// The touch point, if exactly one changed
    pub fn single_touch(&self) -> Option<PointerCoords> {
        match self.changed_touches.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }
}

/// Keys the knob distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Up,
    Down,
    Other,
}

impl KeyCode {
    /// Maps a DOM `KeyboardEvent.key` name
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "ArrowUp" | "Up" => Self::Up,
            "ArrowDown" | "Down" => Self::Down,
            _ => Self::Other,
        }
    }

    /// Maps a legacy numeric `keyCode`
    pub fn from_legacy_code(code: u32) -> Self {
        match code {
            38 => Self::Up,
            40 => Self::Down,
            _ => Self::Other,
        }
    }
}

/// Key press event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: KeyCode,
}

impl KeyEvent {
    pub fn new(key: KeyCode) -> Self {
        Self { key }
    }
}

/// Set of global listeners bound together for one kind of drag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerGroup {
    Pointer,
    Touch,
}

impl ListenerGroup {
    /// The move and release events of this group, in binding order
    pub fn events(self) -> [GlobalEventKind; 2] {
        match self {
            Self::Pointer => [GlobalEventKind::PointerMove, GlobalEventKind::PointerUp],
            Self::Touch => [GlobalEventKind::TouchMove, GlobalEventKind::TouchEnd],
        }
    }
}

/// Events listened for on the global input surface during a drag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GlobalEventKind {
    PointerMove,
    PointerUp,
    TouchMove,
    TouchEnd,
}

impl GlobalEventKind {
    /// DOM event name
    pub fn name(self) -> &'static str {
        match self {
            Self::PointerMove => "mousemove",
            Self::PointerUp => "mouseup",
            Self::TouchMove => "touchmove",
            Self::TouchEnd => "touchend",
        }
    }
}

/// An event delivered by the global input surface
#[derive(Debug, Clone, PartialEq)]
pub enum GlobalInput {
    PointerMove(PointerEvent),
    PointerUp,
    TouchMove(TouchEvent),
    TouchEnd,
}

impl GlobalInput {
    pub fn kind(&self) -> GlobalEventKind {
        match self {
            Self::PointerMove(_) => GlobalEventKind::PointerMove,
            Self::PointerUp => GlobalEventKind::PointerUp,
            Self::TouchMove(_) => GlobalEventKind::TouchMove,
            Self::TouchEnd => GlobalEventKind::TouchEnd,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_touch() {
        assert_eq!(
            TouchEvent::single(1.0, 2.0).single_touch(),
            Some(PointerCoords::at(1.0, 2.0))
        );
        assert_eq!(TouchEvent::default().single_touch(), None);
        let multi = TouchEvent::new(vec![PointerCoords::at(1.0, 2.0), PointerCoords::at(3.0, 4.0)]);
        assert_eq!(multi.single_touch(), None);
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(KeyCode::from_key_name("ArrowUp"), KeyCode::Up);
        assert_eq!(KeyCode::from_key_name("ArrowDown"), KeyCode::Down);
        assert_eq!(KeyCode::from_key_name("ArrowLeft"), KeyCode::Other);
        assert_eq!(KeyCode::from_legacy_code(38), KeyCode::Up);
        assert_eq!(KeyCode::from_legacy_code(40), KeyCode::Down);
        assert_eq!(KeyCode::from_legacy_code(13), KeyCode::Other);
    }

    #[test]
    fn test_listener_groups() {
        assert_eq!(
            ListenerGroup::Pointer.events().map(GlobalEventKind::name),
            ["mousemove", "mouseup"]
        );
        assert_eq!(
            ListenerGroup::Touch.events().map(GlobalEventKind::name),
            ["touchmove", "touchend"]
        );
    }
}
