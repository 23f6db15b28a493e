use std::time::Instant;

use crate::config::IndicatorConfig;
use crate::event::{IndicatorEvent, ScrollEvent};
use crate::measure::Measurements;
use crate::position;
use crate::types::PointerEvents;
use crate::view::{
    default_container_style, default_scroll_view_style, default_thumb_style,
    default_track_style, scroll_view_props, IndicatorView, Overlay, ScrollViewNode, Thumb,
};
use crate::visibility::{Visibility, VisibilityController};

/// Caller-supplied observer of scroll events.
pub type ScrollHandler = Box<dyn FnMut(&ScrollEvent)>;

/// A scroll container that draws its own auto-hiding scroll thumb.
///
/// The host feeds layout, scroll, drag and momentum events through the
/// `on_*` methods (or [`handle`](Self::handle)) and calls
/// [`render`](Self::render) each frame to get the layers to draw.
pub struct ScrollViewIndicator<C> {
    config: IndicatorConfig,
    children: Vec<C>,
    on_scroll: Option<ScrollHandler>,
    measurements: Measurements,
    indicator_height: f32,
    /// Last reported vertical scroll offset.
    scroll_y: f32,
    visibility: VisibilityController,
}

impl<C> ScrollViewIndicator<C> {
    pub fn new(config: IndicatorConfig, children: Vec<C>) -> Self {
        let visibility = VisibilityController::new(config.auto_hide, config.fade());
        log::debug!(
            "[indicator] mount: height={} flexible={} auto_hide={}",
            config.indicator_height,
            config.flexible_indicator,
            config.auto_hide
        );
        Self {
            indicator_height: config.indicator_height,
            config,
            children,
            on_scroll: None,
            measurements: Measurements::default(),
            scroll_y: 0.0,
            visibility,
        }
    }

    /// Observe every scroll event. The handler sees the unmodified event
    /// before the thumb position is updated.
    pub fn on_scroll(mut self, handler: impl FnMut(&ScrollEvent) + 'static) -> Self {
        self.on_scroll = Some(Box::new(handler));
        self
    }

    pub fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    pub fn children(&self) -> &[C] {
        &self.children
    }

    pub fn set_children(&mut self, children: Vec<C>) {
        self.children = children;
    }

    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.visibility.set_reduced_motion(enabled);
    }

    /// Dispatch a host event to the matching entry point.
    pub fn handle(&mut self, event: &IndicatorEvent, now: Instant) {
        match event {
            IndicatorEvent::ViewportLayout(size) => self.on_viewport_layout(size.height),
            IndicatorEvent::ContentSizeChange(size) => {
                self.on_content_size_change(size.width, size.height)
            }
            IndicatorEvent::TrackLayout(size) => self.on_track_layout(size.height),
            IndicatorEvent::Scroll(scroll) => {
                self.on_scroll_event(scroll);
            }
            IndicatorEvent::ScrollBeginDrag => self.on_scroll_begin_drag(now),
            IndicatorEvent::MomentumScrollEnd => self.on_momentum_scroll_end(now),
        }
    }

    pub fn on_viewport_layout(&mut self, height: f32) {
        if self.measurements.set_visible_height(height) {
            log::trace!("[indicator] viewport height {}", height);
            self.derive_height();
        }
    }

    pub fn on_content_size_change(&mut self, _width: f32, height: f32) {
        if self.measurements.set_content_height(height) {
            log::trace!("[indicator] content height {}", height);
            self.derive_height();
        }
    }

    pub fn on_track_layout(&mut self, height: f32) {
        if self.measurements.set_track_height(height) {
            log::trace!("[indicator] track height {}", height);
        }
    }

    /// Record a scroll event and return the resulting thumb offset.
    pub fn on_scroll_event(&mut self, event: &ScrollEvent) -> f32 {
        if let Some(handler) = self.on_scroll.as_mut() {
            handler(event);
        }
        self.scroll_y = event.content_offset.y;

        let offset = self.thumb_offset();
        if !offset.is_finite() {
            log::trace!(
                "[indicator] non-finite thumb offset at y={} (content fits viewport)",
                self.scroll_y
            );
        }
        offset
    }

    pub fn on_scroll_begin_drag(&mut self, now: Instant) {
        self.visibility.drag_start(now);
    }

    pub fn on_momentum_scroll_end(&mut self, now: Instant) {
        self.visibility.momentum_end(now);
    }

    fn derive_height(&mut self) {
        if !self.config.flexible_indicator {
            return;
        }
        self.indicator_height = position::flexible_height(
            self.measurements.visible_height,
            self.measurements.content_height,
        );
    }

    pub fn measurements(&self) -> Measurements {
        self.measurements
    }

    pub fn indicator_height(&self) -> f32 {
        self.indicator_height
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_y
    }

    /// Thumb offset from the top of the track, from the latest measurements.
    pub fn thumb_offset(&self) -> f32 {
        position::thumb_offset(self.scroll_y, &self.measurements, self.indicator_height)
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility.state()
    }

    pub fn is_hidden(&self) -> bool {
        self.visibility.is_hidden()
    }

    pub fn opacity(&self, now: Instant) -> f32 {
        self.visibility.opacity_at(now)
    }

    /// Whether a fade is still running; hosts keep redrawing while true.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.visibility.is_animating(now)
    }

    /// Whether the overlay is part of the rendered output.
    pub fn shows_indicator(&self) -> bool {
        self.measurements.overflows()
    }

    /// Describe the layers to draw at `now`.
    ///
    /// A `top` or `height` in the thumb style replaces the computed geometry,
    /// and an `opacity` in the track style replaces the animated opacity.
    pub fn render(&self, now: Instant) -> IndicatorView<'_, C> {
        let overlay = self.shows_indicator().then(|| {
            let style = default_track_style().merged(&self.config.track_style);
            let thumb_style = default_thumb_style().merged(&self.config.thumb_style);
            Overlay {
                opacity: style.opacity.unwrap_or_else(|| self.opacity(now)),
                style,
                pointer_events: PointerEvents::None,
                thumb: Thumb {
                    top: thumb_style.top.unwrap_or_else(|| self.thumb_offset()),
                    height: thumb_style.height.unwrap_or(self.indicator_height),
                    style: thumb_style,
                },
            }
        });

        IndicatorView {
            container_style: default_container_style().merged(&self.config.style),
            scroll_view: ScrollViewNode {
                style: default_scroll_view_style().merged(&self.config.scroll_view_style),
                props: scroll_view_props(&self.config.passthrough),
                children: &self.children,
            },
            overlay,
        }
    }

    /// Drop finished transitions. Optional; interpolation is time based.
    pub fn tick(&mut self, now: Instant) {
        self.visibility.prune(now);
    }

    /// Consume the component and hand back its children. Fades are driven by
    /// `Instant`s passed in from the host, so nothing keeps running afterwards.
    pub fn unmount(self) -> Vec<C> {
        log::debug!("[indicator] unmount");
        self.children
    }
}

impl<C: std::fmt::Debug> std::fmt::Debug for ScrollViewIndicator<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollViewIndicator")
            .field("config", &self.config)
            .field("children", &self.children)
            .field("on_scroll", &self.on_scroll.as_ref().map(|_| "..."))
            .field("measurements", &self.measurements)
            .field("indicator_height", &self.indicator_height)
            .field("scroll_y", &self.scroll_y)
            .field("visibility", &self.visibility)
            .finish()
    }
}
