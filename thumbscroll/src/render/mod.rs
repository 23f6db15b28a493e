use crate::buffer::Buffer;
use crate::layout::{IndicatorLayout, Rect};
use crate::types::{Color, Rgb};
use crate::view::IndicatorView;

/// Paint the indicator overlay into `buf`.
///
/// The scroll view's children are the host's to draw; call this after they
/// are in the buffer. Track and thumb colors are blended over whatever is
/// already there. The overlay opacity covers both layers; the thumb's own
/// opacity is applied on top of it.
pub fn render_to_buffer<C>(view: &IndicatorView<'_, C>, layout: &IndicatorLayout, buf: &mut Buffer) {
    let Some(overlay) = &view.overlay else {
        return;
    };

    let overlay_alpha = unit(overlay.opacity);
    if overlay_alpha <= 0.0 {
        return;
    }

    if let (Some(track), Some(color)) = (layout.track, &overlay.style.background_color) {
        blend_rect(buf, track, color.to_rgb(), overlay_alpha);
    }

    if let Some(thumb) = layout.thumb {
        let style = &overlay.thumb.style;
        let color = style.background_color.clone().unwrap_or(Color::BLUE);
        let alpha = overlay_alpha * unit(style.opacity.unwrap_or(1.0));
        blend_rect(buf, thumb, color.to_rgb(), alpha);
    }
}

fn unit(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

fn blend_rect(buf: &mut Buffer, rect: Rect, color: Rgb, alpha: f32) {
    if alpha <= 0.0 {
        return;
    }
    let rect = rect.intersection(buf.area());
    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            if let Some(cell) = buf.get_mut(x, y) {
                cell.bg = cell.bg.blend(color, alpha);
            }
        }
    }
}
