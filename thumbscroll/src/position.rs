//! Mapping from scroll offset to thumb geometry.
//!
//! The math works in percentages: the share of the scrollable range that has
//! been traversed is applied to the share of the track the thumb can travel.
//! The track may be shorter than the viewport (margins, insets), so the
//! travel range subtracts that difference as well as the thumb's own height.

use crate::measure::Measurements;

/// Flexible thumbs shorter than this are not worth drawing.
pub const MIN_FLEXIBLE_HEIGHT: f32 = 10.0;

/// Thumb height proportional to the visible share of the content.
pub fn flexible_height(visible_height: f32, content_height: f32) -> f32 {
    let height = visible_height * (visible_height / content_height);
    if height < MIN_FLEXIBLE_HEIGHT {
        0.0
    } else {
        height
    }
}

/// Percentage (0 - 100) of the scrollable range covered by offset `y`.
///
/// Not guarded: when content and viewport are the same height this divides
/// by zero and yields `inf` or `NaN`. The overlay is not rendered in that
/// case, so the value is never shown.
pub fn move_percent(y: f32, m: &Measurements) -> f32 {
    y / (m.scrollable_range() / 100.0)
}

/// Distance the thumb moves per percent of scroll.
pub fn travel_range(m: &Measurements, indicator_height: f32) -> f32 {
    (m.visible_height - indicator_height - (m.visible_height - m.track_height)) / 100.0
}

/// Offset of the thumb from the top of the track for scroll offset `y`.
pub fn thumb_offset(y: f32, m: &Measurements, indicator_height: f32) -> f32 {
    travel_range(m, indicator_height) * move_percent(y, m)
}
