#![forbid(unsafe_code)]

//! Renders the current month as a grid of day cells, walks keyboard focus
//! a few days forward, picks the focused day, and prints each frame.

use std::io::{self, Write};

use chrono::Local;
use pickers_demo::config::THEME_ENV;
use pickers_demo::{MonthGrid, ansi, theme_from_setting};
use pickers_render::buffer::Buffer;
use pickers_runtime::{EffectQueue, FocusManager};
use pickers_style::set_theme;
use pickers_widgets::{ChronoAdapter, DayEvent};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let setting = std::env::var(THEME_ENV).ok();
    let theme = theme_from_setting(setting.as_deref())?;
    set_theme(theme);

    let today = Local::now().date_naive();
    let focus = FocusManager::new();
    let mut queue = EffectQueue::new();
    let adapter = ChronoAdapter::new();
    let mut grid = MonthGrid::new(today, &focus)
        .show_days_outside_current_month(true)
        .allow_keyboard_control(true);
    let mut buf = Buffer::new(grid.width(), grid.height());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    grid.frame(&adapter, &mut buf, &mut queue, &focus);
    ansi::write_buffer(&buf, &mut out)?;

    for _ in 0..3 {
        grid.move_focus(1);
        grid.frame(&adapter, &mut buf, &mut queue, &focus);
    }
    // settle a month switch, if any
    grid.frame(&adapter, &mut buf, &mut queue, &focus);
    grid.dispatch(&adapter, grid.focused(), DayEvent::KeyEnter);
    grid.frame(&adapter, &mut buf, &mut queue, &focus);

    writeln!(out)?;
    ansi::write_buffer(&buf, &mut out)?;
    out.flush()?;

    tracing::info!(
        selected = ?grid.selected(),
        focus_calls = focus.programmatic_requests(),
        effects = queue.executed(),
        "demo finished"
    );
    Ok(())
}
