//! Cell layout of an [`IndicatorView`] inside a terminal area.
//!
//! Style values are in cells. Fractional values are rounded, negative and
//! non-finite values collapse to zero.

mod rect;

pub use rect::Rect;

use crate::types::LayerStyle;
use crate::view::{IndicatorView, Overlay};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndicatorLayout {
    /// The scroll view; fills the whole area.
    pub viewport: Rect,
    /// The track container, when the overlay is rendered.
    pub track: Option<Rect>,
    /// The thumb, clipped to the track. `None` when it has no visible cells.
    pub thumb: Option<Rect>,
}

/// Convert a style length to whole cells.
pub fn cells(value: f32) -> u16 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    value.round().min(u16::MAX as f32) as u16
}

fn style_cells(value: Option<f32>) -> u16 {
    value.map(cells).unwrap_or(0)
}

pub fn layout<C>(view: &IndicatorView<'_, C>, area: Rect) -> IndicatorLayout {
    let viewport = area;

    let Some(overlay) = &view.overlay else {
        return IndicatorLayout {
            viewport,
            track: None,
            thumb: None,
        };
    };

    let track = track_rect(&overlay.style, area);
    let thumb = thumb_rect(overlay, track);

    log::trace!(
        "[layout] viewport={:?} track={:?} thumb={:?}",
        viewport,
        track,
        thumb
    );

    IndicatorLayout {
        viewport,
        track: Some(track),
        thumb,
    }
}

/// The track hugs the right edge unless `left` is set, which anchors it to
/// the left instead. Offsets plus the vertical margin inset it from the
/// edges; a `height` shortens it from the bottom.
fn track_rect(style: &LayerStyle, area: Rect) -> Rect {
    let margin = style_cells(style.margin_vertical);
    let top = style_cells(style.top).saturating_add(margin);
    let bottom = style_cells(style.bottom).saturating_add(margin);
    let right = style_cells(style.right);
    let left = style_cells(style.left);

    let inner = area.inset(top, right, bottom, left);
    let width = match (style.width, style.left) {
        (Some(width), _) => cells(width),
        // Pinned on both sides: stretch between them.
        (None, Some(_)) => inner.width,
        (None, None) => 1,
    }
    .min(inner.width);
    let height = style
        .height
        .map(cells)
        .unwrap_or(inner.height)
        .min(inner.height);

    let x = if style.left.is_some() {
        inner.x
    } else {
        inner.right() - width
    };
    Rect::new(x, inner.y, width, height)
}

fn thumb_rect(overlay: &Overlay, track: Rect) -> Option<Rect> {
    let thumb = &overlay.thumb;
    if !thumb.top.is_finite() || !thumb.height.is_finite() {
        return None;
    }

    let style = &thumb.style;
    let right = style_cells(style.right);
    let width = style.width.map(cells).unwrap_or(track.width);
    let height = cells(thumb.height);

    // Thumbs scrolled above the track keep their bottom part.
    let top = thumb.top.round();
    let (y, height) = if top < 0.0 {
        let clipped = cells(-top);
        (track.y, height.saturating_sub(clipped))
    } else {
        (track.y.saturating_add(cells(top)), height)
    };

    let x = track.right().saturating_sub(right).saturating_sub(width);
    let rect = Rect::new(x, y, width, height).intersection(track);

    (!rect.is_empty()).then_some(rect)
}
