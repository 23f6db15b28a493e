//! Render output of the indicator component.
//!
//! `IndicatorView` describes the layers the host should draw: the outer row
//! container, the scroll view with its children and forwarded props, and the
//! optional track overlay with the thumb inside it.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::types::{Color, Direction, LayerStyle, Overflow, PointerEvents, Position};

/// Minimum interval between scroll events requested from the scroll view
/// (about 60 per second).
pub const SCROLL_EVENT_THROTTLE_MS: u64 = 16;

#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorView<'a, C> {
    pub container_style: LayerStyle,
    pub scroll_view: ScrollViewNode<'a, C>,
    /// Present only when the content is taller than the viewport.
    pub overlay: Option<Overlay>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollViewNode<'a, C> {
    pub style: LayerStyle,
    /// Props for the host scroll view, including forwarded passthrough props.
    pub props: BTreeMap<String, Value>,
    pub children: &'a [C],
}

/// The track container laid over the right edge of the scroll view.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    pub style: LayerStyle,
    /// Animated opacity of the whole track, 0.0 - 1.0.
    pub opacity: f32,
    pub pointer_events: PointerEvents,
    pub thumb: Thumb,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Thumb {
    /// Offset from the top of the track.
    pub top: f32,
    pub height: f32,
    pub style: LayerStyle,
}

pub fn default_container_style() -> LayerStyle {
    LayerStyle::new().flex(1.0).direction(Direction::Row)
}

pub fn default_scroll_view_style() -> LayerStyle {
    LayerStyle::new().flex(1.0)
}

pub fn default_track_style() -> LayerStyle {
    LayerStyle::new()
        .position(Position::Absolute)
        .top(0.0)
        .right(2.0)
        .bottom(0.0)
        .overflow(Overflow::Hidden)
        .border_radius(10.0)
        .width(6.0)
        .margin_vertical(3.0)
}

pub fn default_thumb_style() -> LayerStyle {
    LayerStyle::new()
        .position(Position::Absolute)
        .right(0.0)
        .width(6.0)
        .border_radius(3.0)
        .opacity(0.5)
        .background(Color::BLUE)
}

/// Props the component always sets on the scroll view. Passthrough props are
/// applied afterwards and win on conflict; the scroll handler key is dropped.
pub fn scroll_view_props(passthrough: &BTreeMap<String, Value>) -> BTreeMap<String, Value> {
    let mut props = BTreeMap::new();
    props.insert(
        "scrollEventThrottle".to_string(),
        Value::from(SCROLL_EVENT_THROTTLE_MS),
    );
    props.insert("showsVerticalScrollIndicator".to_string(), Value::Bool(false));

    for (key, value) in passthrough {
        if key == crate::config::SCROLL_HANDLER_KEY {
            continue;
        }
        props.insert(key.clone(), value.clone());
    }
    props
}
