/// Two-dimensional extent reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
}

impl Dimensions {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Scroll position of the content relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContentOffset {
    pub x: f32,
    pub y: f32,
}

impl ContentOffset {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Payload of a scroll event, forwarded untouched to caller scroll handlers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollEvent {
    pub content_offset: ContentOffset,
    pub content_size: Dimensions,
    pub layout_measurement: Dimensions,
}

impl ScrollEvent {
    /// A vertical scroll event with only the offset filled in.
    pub fn vertical(y: f32) -> Self {
        Self {
            content_offset: ContentOffset::new(0.0, y),
            ..Default::default()
        }
    }

    pub fn with_content_size(mut self, width: f32, height: f32) -> Self {
        self.content_size = Dimensions::new(width, height);
        self
    }

    pub fn with_layout_measurement(mut self, width: f32, height: f32) -> Self {
        self.layout_measurement = Dimensions::new(width, height);
        self
    }
}

/// Events the host delivers to a [`ScrollViewIndicator`](crate::ScrollViewIndicator).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IndicatorEvent {
    /// The scroll view itself was laid out.
    ViewportLayout(Dimensions),
    /// The scroll view's content changed size.
    ContentSizeChange(Dimensions),
    /// The indicator track container was laid out.
    TrackLayout(Dimensions),
    /// The content scrolled.
    Scroll(ScrollEvent),
    /// The user started dragging the content.
    ScrollBeginDrag,
    /// Momentum scrolling came to rest.
    MomentumScrollEnd,
}
