/// Heights reported by the host's layout callbacks.
///
/// Everything starts at `1` so the position math has a non-zero denominator
/// before the first layout pass arrives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurements {
    /// Height of the visible viewport.
    pub visible_height: f32,
    /// Height of the full scrollable content.
    pub content_height: f32,
    /// Rendered height of the indicator track container.
    pub track_height: f32,
}

impl Default for Measurements {
    fn default() -> Self {
        Self {
            visible_height: 1.0,
            content_height: 1.0,
            track_height: 1.0,
        }
    }
}

impl Measurements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the value changed.
    pub fn set_visible_height(&mut self, height: f32) -> bool {
        replace(&mut self.visible_height, height)
    }

    /// Returns true if the value changed.
    pub fn set_content_height(&mut self, height: f32) -> bool {
        replace(&mut self.content_height, height)
    }

    /// Returns true if the value changed.
    pub fn set_track_height(&mut self, height: f32) -> bool {
        replace(&mut self.track_height, height)
    }

    /// How far the content can scroll. Zero or negative when it fits.
    pub fn scrollable_range(&self) -> f32 {
        self.content_height - self.visible_height
    }

    /// Whether the content is taller than the viewport.
    pub fn overflows(&self) -> bool {
        self.scrollable_range() > 0.0
    }
}

fn replace(slot: &mut f32, value: f32) -> bool {
    if slot.to_bits() == value.to_bits() {
        return false;
    }
    *slot = value;
    true
}
