use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use serde_json::Value;
use thumbscroll::{
    Color, Dimensions, Easing, IndicatorConfig, IndicatorEvent, LayerStyle, PointerEvents,
    ScrollEvent, ScrollViewIndicator, Visibility,
};

fn linear_config() -> IndicatorConfig {
    IndicatorConfig::new()
        .fade_duration(Duration::from_millis(500))
        .fade_easing(Easing::Linear)
}

fn measured(
    config: IndicatorConfig,
    visible: f32,
    content: f32,
    track: f32,
) -> ScrollViewIndicator<&'static str> {
    let mut indicator = ScrollViewIndicator::new(config, vec!["a", "b", "c"]);
    indicator.on_viewport_layout(visible);
    indicator.on_content_size_change(320.0, content);
    indicator.on_track_layout(track);
    indicator
}

// ============================================================================
// Overlay presence
// ============================================================================

#[test]
fn test_overlay_rendered_only_when_content_overflows() {
    let now = Instant::now();
    let mut indicator = measured(IndicatorConfig::new(), 200.0, 1000.0, 194.0);
    assert!(indicator.shows_indicator());
    assert!(indicator.render(now).overlay.is_some());

    indicator.on_content_size_change(320.0, 200.0);
    assert!(!indicator.shows_indicator());
    assert!(indicator.render(now).overlay.is_none());

    indicator.on_content_size_change(320.0, 150.0);
    assert!(indicator.render(now).overlay.is_none());
}

#[test]
fn test_fresh_indicator_has_no_overlay() {
    let indicator: ScrollViewIndicator<()> = ScrollViewIndicator::new(IndicatorConfig::new(), vec![]);
    assert!(indicator.render(Instant::now()).overlay.is_none());
}

#[test]
fn test_overlay_is_not_interactive() {
    let indicator = measured(IndicatorConfig::new(), 200.0, 1000.0, 194.0);
    let view = indicator.render(Instant::now());
    assert_eq!(view.overlay.unwrap().pointer_events, PointerEvents::None);
}

// ============================================================================
// Thumb geometry
// ============================================================================

#[test]
fn test_flexible_height_tracks_measurements() {
    let mut indicator = measured(IndicatorConfig::new(), 100.0, 400.0, 100.0);
    assert_eq!(indicator.indicator_height(), 25.0);

    indicator.on_content_size_change(320.0, 200.0);
    assert_eq!(indicator.indicator_height(), 50.0);

    indicator.on_viewport_layout(10.0);
    indicator.on_content_size_change(320.0, 1000.0);
    assert_eq!(indicator.indicator_height(), 0.0);
}

#[test]
fn test_fixed_height_ignores_measurements() {
    let config = IndicatorConfig::new()
        .flexible_indicator(false)
        .indicator_height(40.0);
    let mut indicator = measured(config, 100.0, 400.0, 100.0);
    assert_eq!(indicator.indicator_height(), 40.0);
    indicator.on_content_size_change(320.0, 5000.0);
    assert_eq!(indicator.indicator_height(), 40.0);
}

#[test]
fn test_starts_with_configured_height() {
    let indicator: ScrollViewIndicator<()> =
        ScrollViewIndicator::new(IndicatorConfig::new().indicator_height(120.0), vec![]);
    assert_eq!(indicator.indicator_height(), 120.0);
}

#[test]
fn test_scroll_maps_to_thumb_offset() {
    let config = IndicatorConfig::new()
        .flexible_indicator(false)
        .indicator_height(40.0);
    let mut indicator = measured(config, 200.0, 1000.0, 200.0);

    let offset = indicator.on_scroll_event(&ScrollEvent::vertical(400.0));
    assert!((offset - 80.0).abs() < 1e-3, "got {offset}");

    let thumb = indicator.render(Instant::now()).overlay.unwrap().thumb;
    assert!((thumb.top - 80.0).abs() < 1e-3);
    assert_eq!(thumb.height, 40.0);
}

#[test]
fn test_thumb_offset_follows_latest_measurements() {
    let config = IndicatorConfig::new()
        .flexible_indicator(false)
        .indicator_height(40.0);
    let mut indicator = measured(config, 200.0, 1000.0, 200.0);
    indicator.on_scroll_event(&ScrollEvent::vertical(400.0));

    // Content grows without a new scroll event: the thumb moves up.
    indicator.on_content_size_change(320.0, 1800.0);
    assert!((indicator.thumb_offset() - 40.0).abs() < 1e-3);

    indicator.on_track_layout(194.0);
    assert!((indicator.thumb_offset() - 38.5).abs() < 1e-3);
}

#[test]
fn test_equal_heights_keep_non_finite_offset_hidden() {
    let mut indicator = measured(IndicatorConfig::new(), 300.0, 300.0, 300.0);
    let offset = indicator.on_scroll_event(&ScrollEvent::vertical(10.0));
    assert!(!offset.is_finite());
    assert!(indicator.render(Instant::now()).overlay.is_none());
}

// ============================================================================
// Visibility
// ============================================================================

#[test]
fn test_auto_hide_fades_in_and_out() {
    let start = Instant::now();
    let mut indicator = measured(linear_config(), 200.0, 1000.0, 194.0);
    assert!(indicator.is_hidden());
    assert_eq!(indicator.opacity(start), 0.0);

    indicator.on_scroll_begin_drag(start);
    assert_eq!(indicator.visibility(), Visibility::Visible);
    let half = indicator.opacity(start + Duration::from_millis(250));
    assert!((half - 0.5).abs() < 0.001, "got {half}");

    let settled = start + Duration::from_millis(600);
    assert_eq!(indicator.render(settled).overlay.unwrap().opacity, 1.0);
    assert!(!indicator.is_animating(settled));

    indicator.on_momentum_scroll_end(settled);
    assert!(indicator.is_hidden());
    assert!(indicator.is_animating(settled));
    assert_eq!(indicator.opacity(settled + Duration::from_millis(500)), 0.0);
}

#[test]
fn test_drag_start_when_visible_stays_visible() {
    let start = Instant::now();
    let mut indicator = measured(linear_config(), 200.0, 1000.0, 194.0);
    indicator.on_scroll_begin_drag(start);
    indicator.on_scroll_begin_drag(start + Duration::from_millis(100));
    assert!(!indicator.is_hidden());
    assert_eq!(indicator.opacity(start + Duration::from_millis(500)), 1.0);
}

#[test]
fn test_momentum_end_always_hides() {
    let start = Instant::now();
    let mut indicator = measured(linear_config(), 200.0, 1000.0, 194.0);
    indicator.on_momentum_scroll_end(start);
    assert!(indicator.is_hidden());

    indicator.on_scroll_begin_drag(start);
    indicator.on_momentum_scroll_end(start + Duration::from_millis(100));
    assert!(indicator.is_hidden());
}

#[test]
fn test_disabled_auto_hide_keeps_full_opacity() {
    let now = Instant::now();
    let mut indicator = measured(linear_config().auto_hide(false), 200.0, 1000.0, 194.0);
    assert_eq!(indicator.opacity(now), 1.0);

    indicator.on_scroll_begin_drag(now);
    indicator.on_momentum_scroll_end(now);
    assert_eq!(indicator.opacity(now), 1.0);
    assert_eq!(indicator.opacity(now + Duration::from_secs(1)), 1.0);
    assert!(!indicator.is_animating(now));
}

#[test]
fn test_reduced_motion_skips_fade() {
    let now = Instant::now();
    let mut indicator = measured(linear_config(), 200.0, 1000.0, 194.0);
    indicator.set_reduced_motion(true);
    indicator.on_scroll_begin_drag(now);
    assert_eq!(indicator.opacity(now), 1.0);
    assert!(!indicator.is_animating(now));
}

#[test]
fn test_unmount_returns_children() {
    let now = Instant::now();
    let mut indicator = measured(linear_config(), 200.0, 1000.0, 194.0);
    indicator.on_scroll_begin_drag(now);
    assert_eq!(indicator.unmount(), vec!["a", "b", "c"]);
}

// ============================================================================
// Scroll handler passthrough
// ============================================================================

#[test]
fn test_scroll_handler_sees_each_event_once_unmodified() {
    let seen: Rc<RefCell<Vec<ScrollEvent>>> = Rc::default();
    let sink = Rc::clone(&seen);

    let mut indicator = ScrollViewIndicator::new(IndicatorConfig::new(), vec![()])
        .on_scroll(move |event| sink.borrow_mut().push(*event));
    indicator.on_viewport_layout(200.0);
    indicator.on_content_size_change(320.0, 1000.0);

    let first = ScrollEvent::vertical(12.5)
        .with_content_size(320.0, 1000.0)
        .with_layout_measurement(320.0, 200.0);
    let second = ScrollEvent::vertical(40.0);
    indicator.on_scroll_event(&first);
    indicator.handle(&IndicatorEvent::Scroll(second), Instant::now());

    assert_eq!(*seen.borrow(), vec![first, second]);
}

#[test]
fn test_scroll_handler_sees_offset_that_is_recorded() {
    let observed: Rc<RefCell<Vec<f32>>> = Rc::default();
    let sink = Rc::clone(&observed);

    let indicator = ScrollViewIndicator::new(IndicatorConfig::new(), vec![()]);
    let mut indicator = indicator.on_scroll(move |event| sink.borrow_mut().push(event.content_offset.y));
    indicator.on_scroll_event(&ScrollEvent::vertical(7.0));
    assert_eq!(*observed.borrow(), vec![7.0]);
    assert_eq!(indicator.scroll_offset(), 7.0);
}

// ============================================================================
// Event dispatch
// ============================================================================

#[test]
fn test_handle_dispatches_layout_events() {
    let now = Instant::now();
    let mut indicator: ScrollViewIndicator<()> = ScrollViewIndicator::new(linear_config(), vec![]);
    indicator.handle(&IndicatorEvent::ViewportLayout(Dimensions::new(320.0, 100.0)), now);
    indicator.handle(&IndicatorEvent::ContentSizeChange(Dimensions::new(320.0, 400.0)), now);
    indicator.handle(&IndicatorEvent::TrackLayout(Dimensions::new(6.0, 94.0)), now);

    let m = indicator.measurements();
    assert_eq!(m.visible_height, 100.0);
    assert_eq!(m.content_height, 400.0);
    assert_eq!(m.track_height, 94.0);
    assert_eq!(indicator.indicator_height(), 25.0);

    indicator.handle(&IndicatorEvent::ScrollBeginDrag, now);
    assert!(!indicator.is_hidden());
    indicator.handle(&IndicatorEvent::MomentumScrollEnd, now);
    assert!(indicator.is_hidden());
}

// ============================================================================
// Forwarded props and styles
// ============================================================================

#[test]
fn test_passthrough_props_reach_scroll_view() {
    let config = IndicatorConfig::new()
        .prop("bounces", false)
        .prop("contentInsetTop", 12)
        .prop("onScroll", "not forwarded");
    let indicator = ScrollViewIndicator::new(config, vec![1, 2, 3]);
    let view = indicator.render(Instant::now());
    let props = &view.scroll_view.props;

    assert_eq!(props.get("bounces"), Some(&Value::Bool(false)));
    assert_eq!(props.get("contentInsetTop"), Some(&Value::from(12)));
    assert_eq!(props.get("scrollEventThrottle"), Some(&Value::from(16u64)));
    assert_eq!(props.get("showsVerticalScrollIndicator"), Some(&Value::Bool(false)));
    assert!(!props.contains_key("onScroll"));
    assert_eq!(view.scroll_view.children, &[1, 2, 3]);
}

#[test]
fn test_passthrough_overrides_component_defaults() {
    let config = IndicatorConfig::new().prop("scrollEventThrottle", 32);
    let indicator: ScrollViewIndicator<()> = ScrollViewIndicator::new(config, vec![]);
    let view = indicator.render(Instant::now());
    assert_eq!(view.scroll_view.props.get("scrollEventThrottle"), Some(&Value::from(32)));
}

#[test]
fn test_json_config_forwards_unknown_keys() {
    let config = IndicatorConfig::from_json(r#"{ "indicatorHeight": 50, "pagingEnabled": true }"#)
        .unwrap();
    let indicator: ScrollViewIndicator<()> = ScrollViewIndicator::new(config, vec![]);
    let view = indicator.render(Instant::now());
    assert_eq!(view.scroll_view.props.get("pagingEnabled"), Some(&Value::Bool(true)));
    assert!(!view.scroll_view.props.contains_key("indicatorHeight"));
}

#[test]
fn test_default_layer_styles() {
    let indicator = measured(IndicatorConfig::new(), 200.0, 1000.0, 194.0);
    let overlay = indicator.render(Instant::now()).overlay.unwrap();

    assert_eq!(overlay.style.right, Some(2.0));
    assert_eq!(overlay.style.width, Some(6.0));
    assert_eq!(overlay.style.margin_vertical, Some(3.0));
    assert_eq!(overlay.thumb.style.width, Some(6.0));
    assert_eq!(overlay.thumb.style.opacity, Some(0.5));
    assert_eq!(overlay.thumb.style.background_color, Some(Color::BLUE));
}

#[test]
fn test_caller_styles_merge_over_defaults() {
    let config = IndicatorConfig::new()
        .thumb_style(LayerStyle::new().background(Color::rgb(255, 0, 0)))
        .track_style(LayerStyle::new().right(0.0));
    let indicator = measured(config, 200.0, 1000.0, 194.0);
    let overlay = indicator.render(Instant::now()).overlay.unwrap();

    assert_eq!(overlay.thumb.style.background_color, Some(Color::rgb(255, 0, 0)));
    assert_eq!(overlay.thumb.style.opacity, Some(0.5));
    assert_eq!(overlay.style.right, Some(0.0));
    assert_eq!(overlay.style.width, Some(6.0));
}
