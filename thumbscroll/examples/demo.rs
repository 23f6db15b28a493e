use std::fs::File;
use std::time::{Duration, Instant};

use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEventKind, MouseEventKind};
use simplelog::{Config, LevelFilter, WriteLogger};
use thumbscroll::{
    layout, render_to_buffer, Color, IndicatorConfig, LayerStyle, Rect, Rgb, ScrollEvent,
    ScrollViewIndicator, Terminal,
};

/// A scroll gesture is over once no input arrives for this long.
const GESTURE_IDLE: Duration = Duration::from_millis(300);
const FRAME: Duration = Duration::from_millis(16);

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let lines: Vec<String> = (1..=200)
        .map(|i| format!("{i:>3}  the quick brown fox jumps over the lazy dog"))
        .collect();

    // Terminal cells are coarse: a one column track flush with the edge.
    let config = IndicatorConfig::new()
        .fade_duration(Duration::from_millis(400))
        .track_style(LayerStyle::new().width(1.0).right(0.0).margin_vertical(0.0))
        .thumb_style(
            LayerStyle::new()
                .width(1.0)
                .opacity(0.9)
                .background(Color::rgb(90, 140, 255)),
        );

    let mut indicator = ScrollViewIndicator::new(config, lines)
        .on_scroll(|event| log::trace!("[demo] scrolled to {}", event.content_offset.y));

    let mut term = Terminal::new()?;
    let mut offset: u16 = 0;
    let mut gesture_at: Option<Instant> = None;

    'outer: loop {
        let now = Instant::now();
        let area = term.area();
        let content_height = indicator.children().len() as u16;

        indicator.on_viewport_layout(area.height as f32);
        indicator.on_content_size_change(area.width as f32, content_height as f32);
        let track_height = layout(&indicator.render(now), area).track.map(|t| t.height);
        if let Some(height) = track_height {
            indicator.on_track_layout(height as f32);
        }

        let view = indicator.render(now);
        let placed = layout(&view, area);
        term.draw(|buf| {
            let rows = view
                .scroll_view
                .children
                .iter()
                .skip(offset as usize)
                .take(area.height as usize);
            for (row, line) in rows.enumerate() {
                buf.set_str(0, row as u16, line, Rgb::new(200, 200, 200));
            }
            render_to_buffer(&view, &placed, buf);
        })?;

        let timeout = (gesture_at.is_some() || indicator.is_animating(now)).then_some(FRAME);
        for event in term.poll(timeout)? {
            let delta = match event {
                CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break 'outer,
                    KeyCode::Down | KeyCode::Char('j') => 1,
                    KeyCode::Up | KeyCode::Char('k') => -1,
                    KeyCode::PageDown => area.height as i32,
                    KeyCode::PageUp => -(area.height as i32),
                    _ => 0,
                },
                CrosstermEvent::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::ScrollDown => 3,
                    MouseEventKind::ScrollUp => -3,
                    _ => 0,
                },
                _ => 0,
            };
            if delta == 0 {
                continue;
            }

            let now = Instant::now();
            if gesture_at.is_none() {
                indicator.on_scroll_begin_drag(now);
            }
            gesture_at = Some(now);

            offset = scroll(offset, delta, content_height, area);
            let event = ScrollEvent::vertical(offset as f32)
                .with_content_size(area.width as f32, content_height as f32)
                .with_layout_measurement(area.width as f32, area.height as f32);
            indicator.on_scroll_event(&event);
        }

        if gesture_at.is_some_and(|at| at.elapsed() >= GESTURE_IDLE) {
            indicator.on_momentum_scroll_end(Instant::now());
            gesture_at = None;
        }
        indicator.tick(Instant::now());
    }

    indicator.unmount();
    Ok(())
}

fn scroll(offset: u16, delta: i32, content_height: u16, area: Rect) -> u16 {
    let max = content_height.saturating_sub(area.height) as i32;
    (offset as i32 + delta).clamp(0, max) as u16
}
