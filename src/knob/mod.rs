//! Headless rotary knob
//!
//! Turns pointer, touch and keyboard input into a bounded, stepped value and a
//! display angle, and tells observers when either changes.
//!
//! # Architecture
//!
//! ```text
//! UI events ──→ KnobArea handlers ──→ PositionResolver (interaction start)
//!                     │                        ↓
//!                     │               FrameSlot (latest pointer)
//!                     │                        ↓ on_frame()
//!                     └──────────────→ DialScale (angle ↔ value)
//!                                              ↓
//!                                     setters ──→ KnobCallbacks
//! ```
//!
//! Host capabilities are injected through [`KnobEnvironment`]: the element's
//! page position ([`PositionResolver`]), the global input surface drags bind to
//! ([`InputSource`]) and frame scheduling ([`FrameScheduler`]).
//!
//! # Usage
//!
//! ```
//! use knob_area::knob::{KeyCode, KeyEvent, KnobArea, KnobEnvironment, KnobProps};
//!
//! let env = KnobEnvironment::headless(|| [0.0, 0.0]);
//! let mut knob = KnobArea::new(env, &KnobProps::new(180.0, 0.0, 100.0, 1.0, 50.0))?;
//! assert_eq!(knob.angle(), 179.0);
//!
//! knob.handle_key_down(&KeyEvent::new(KeyCode::Up));
//! assert_eq!(knob.value(), 51.0);
//! # Ok::<(), knob_area::knob::KnobError>(())
//! ```

mod area;
mod callbacks;
mod error;
mod events;
mod frame;
mod listeners;
mod position;
mod props;
mod scale;
mod widget;

pub use area::{KnobArea, KnobEnvironment};
pub use callbacks::{InteractionCallback, KnobCallbacks, NumberCallback, compose_two};
pub use error::KnobError;
pub use events::{
    GlobalEventKind, GlobalInput, KeyCode, KeyEvent, KnobId, ListenerGroup, PointerCoords,
    PointerEvent, TouchEvent,
};
pub use frame::{FrameScheduler, FrameSlot, ManualFrames};
pub use listeners::{InputSource, ListenerRegistry};
pub use position::{ElementBox, OffsetChain, PositionResolver, Transform, resolve_center};
pub use props::KnobProps;
pub use scale::{DialScale, degree_of_rotation};
pub use widget::{Knob, KnobView};
