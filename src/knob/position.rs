//! Locating the dial center on the page
//!
//! The controller measures pointer angles around the center of the element that
//! renders the knob. Where that element sits is a property of the hosting layout,
//! so it is injected through [`PositionResolver`]. [`OffsetChain`] is the
//! offset-parent walk used by DOM-like hosts; any `Fn() -> [f64; 2]` works too.
//!
//! The position is resolved again at the start of every interaction because the
//! element may have scrolled or moved since the last one.

use std::sync::LazyLock;

use regex::Regex;

use super::events::PointerCoords;

static MATRIX_3D: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^matrix3d\((.+)\)$").expect("valid matrix3d pattern"));
static MATRIX_2D: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^matrix\((.+)\)$").expect("valid matrix pattern"));

/// Translation and scale taken from a computed CSS transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub x: f64,
    pub y: f64,
    pub scale_x: f64,
    pub scale_y: f64,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        scale_x: 1.0,
        scale_y: 1.0,
    };

    /// Parses a computed `transform` value (`matrix(...)`, `matrix3d(...)` or `none`)
    ///
    /// Unrecognised functions yield the identity.
    pub fn parse_css(value: &str) -> Self {
        let value = value.trim();
        if let Some(caps) = MATRIX_3D.captures(value) {
            return Self::from_components(&caps[1], [12, 13, 0, 5]);
        }
        if let Some(caps) = MATRIX_2D.captures(value) {
            return Self::from_components(&caps[1], [4, 5, 0, 3]);
        }
        Self::IDENTITY
    }

    /// Picks `[x, y, scale_x, scale_y]` out of a comma separated component list
    ///
    /// Each picked component is parsed on its own; one that is missing or
    /// malformed keeps its identity value without affecting the others.
    fn from_components(list: &str, indices: [usize; 4]) -> Self {
        let parts: Vec<&str> = list.split(',').map(str::trim).collect();
        let pick = |i: usize, identity: f64| {
            parts
                .get(i)
                .and_then(|p| p.parse::<f64>().ok())
                .unwrap_or(identity)
        };
        Self {
            x: pick(indices[0], Self::IDENTITY.x),
            y: pick(indices[1], Self::IDENTITY.y),
            scale_x: pick(indices[2], Self::IDENTITY.scale_x),
            scale_y: pick(indices[3], Self::IDENTITY.scale_y),
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Layout box of one element in an offset-parent chain
#[derive(Debug, Clone, PartialEq)]
pub struct ElementBox {
    /// Upper-case tag name, `BODY` gets special scroll handling
    pub tag: String,
    /// Offset relative to the offset parent
    pub offset: [f64; 2],
    /// Scroll position of the element's own content
    pub scroll: [f64; 2],
    /// Border widths (left, top)
    pub client: [f64; 2],
    /// Computed transform, identity when the host cannot introspect styles
    pub transform: Transform,
}

impl ElementBox {
    /// Creates an untransformed, unscrolled box at `offset`
    pub fn new(tag: impl Into<String>, offset: [f64; 2]) -> Self {
        Self {
            tag: tag.into().to_uppercase(),
            offset,
            scroll: [0.0, 0.0],
            client: [0.0, 0.0],
            transform: Transform::IDENTITY,
        }
    }

    pub fn with_scroll(mut self, scroll: [f64; 2]) -> Self {
        self.scroll = scroll;
        self
    }

    pub fn with_client(mut self, client: [f64; 2]) -> Self {
        self.client = client;
        self
    }

    /// Sets the transform from a computed CSS value
    pub fn with_css_transform(mut self, value: &str) -> Self {
        self.transform = Transform::parse_css(value);
        self
    }

    fn is_body(&self) -> bool {
        self.tag == "BODY"
    }
}

/// Capability returning the page position of the knob element's top-left corner
pub trait PositionResolver {
    fn element_origin(&self) -> [f64; 2];
}

impl<F> PositionResolver for F
where
    F: Fn() -> [f64; 2],
{
    fn element_origin(&self) -> [f64; 2] {
        self()
    }
}

/// Snapshot of an element and its offset parents, element first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OffsetChain {
    pub elements: Vec<ElementBox>,
    /// Scroll of the document element, used for `BODY` when it reports none
    pub document_scroll: [f64; 2],
}

impl OffsetChain {
    pub fn new(elements: Vec<ElementBox>) -> Self {
        Self {
            elements,
            document_scroll: [0.0, 0.0],
        }
    }

    pub fn with_document_scroll(mut self, scroll: [f64; 2]) -> Self {
        self.document_scroll = scroll;
        self
    }
}

impl PositionResolver for OffsetChain {
    fn element_origin(&self) -> [f64; 2] {
        let mut x = 0.0;
        let mut y = 0.0;
        for el in &self.elements {
            let scroll = if el.is_body() {
                [
                    non_zero_or(el.scroll[0], self.document_scroll[0]),
                    non_zero_or(el.scroll[1], self.document_scroll[1]),
                ]
            } else {
                el.scroll
            };
            x += el.offset[0] - scroll[0] + el.client[0] + el.transform.x;
            y += el.offset[1] - scroll[1] + el.client[1] + el.transform.y;
        }
        [x, y]
    }
}

fn non_zero_or(value: f64, fallback: f64) -> f64 {
    if value != 0.0 { value } else { fallback }
}

/// Page position of the dial center for an interaction started at `coords`
pub fn resolve_center(
    resolver: &dyn PositionResolver,
    diameter: f64,
    coords: PointerCoords,
) -> [f64; 2] {
    let origin = resolver.element_origin();
    let radius = diameter / 2.0;
    let shift = coords.scroll_offset();
    [origin[0] + radius + shift[0], origin[1] + radius + shift[1]]
}
