#![forbid(unsafe_code)]

//! Six-week month grid of day cells.

use std::cell::Cell as StdCell;
use std::rc::Rc;

use chrono::{Datelike, Days, Months, NaiveDate};
use pickers_render::buffer::Buffer;
use pickers_render::cell::Cell;
use pickers_render::geometry::Rect;
use pickers_runtime::{EffectQueue, ElementId, FocusManager};
use pickers_style::current_theme;
use pickers_style::dimensions::{DAY_HEIGHT, day_outer_width};
use pickers_widgets::{
    ChronoAdapter, DayCell, DayCellState, DayEvent, DayOutcome, DayProps, StatefulWidget,
};

pub const WEEKS: usize = 6;
pub const WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Rows above the day cells: title and weekday header.
const HEADER_ROWS: u16 = 2;

pub struct MonthGrid {
    month: NaiveDate,
    today: NaiveDate,
    selected: Option<NaiveDate>,
    focused: NaiveDate,
    show_outside: bool,
    keyboard: bool,
    disable_weekends: bool,
    animating: bool,
    states: Vec<DayCellState>,
    picked: Rc<StdCell<Option<NaiveDate>>>,
    reported: Rc<StdCell<Option<NaiveDate>>>,
}

impl MonthGrid {
    /// Grid showing `today`'s month, with 42 cells mounted on `focus`.
    #[must_use]
    pub fn new(today: NaiveDate, focus: &FocusManager) -> Self {
        Self {
            month: first_of_month(today),
            today,
            selected: None,
            focused: today,
            show_outside: false,
            keyboard: false,
            disable_weekends: false,
            animating: false,
            states: (0..WEEKS * 7).map(|_| DayCellState::mounted(focus)).collect(),
            picked: Rc::new(StdCell::new(None)),
            reported: Rc::new(StdCell::new(None)),
        }
    }

    #[must_use]
    pub fn show_days_outside_current_month(mut self, show: bool) -> Self {
        self.show_outside = show;
        self
    }

    #[must_use]
    pub fn allow_keyboard_control(mut self, allow: bool) -> Self {
        self.keyboard = allow;
        self
    }

    #[must_use]
    pub fn disable_weekends(mut self, disable: bool) -> Self {
        self.disable_weekends = disable;
        self
    }

    #[must_use]
    pub fn month(&self) -> NaiveDate {
        self.month
    }

    #[must_use]
    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    #[must_use]
    pub fn focused(&self) -> NaiveDate {
        self.focused
    }

    #[must_use]
    pub fn width(&self) -> u16 {
        day_outer_width(true) * 7
    }

    #[must_use]
    pub fn height(&self) -> u16 {
        HEADER_ROWS + DAY_HEIGHT * WEEKS as u16
    }

    /// The 42 dates shown, starting on the Sunday on or before the 1st.
    #[must_use]
    pub fn days(&self) -> Vec<NaiveDate> {
        let lead = u64::from(self.month.weekday().num_days_from_sunday());
        let start = self
            .month
            .checked_sub_days(Days::new(lead))
            .unwrap_or(self.month);
        start.iter_days().take(WEEKS * 7).collect()
    }

    #[must_use]
    pub fn element_id(&self, date: NaiveDate) -> Option<ElementId> {
        let idx = self.days().iter().position(|d| *d == date)?;
        self.states.get(idx).map(DayCellState::id)
    }

    fn props(&self, date: NaiveDate) -> DayProps<NaiveDate> {
        let in_month = date.month() == self.month.month() && date.year() == self.month.year();
        let weekend = matches!(date.weekday().num_days_from_sunday(), 0 | 6);
        let picked = Rc::clone(&self.picked);
        let reported = Rc::clone(&self.reported);
        DayProps::new(date, in_month)
            .today(date == self.today)
            .selected(self.selected == Some(date))
            .disabled(self.disable_weekends && weekend)
            .focused(self.focused == date)
            .focusable(self.focused == date)
            .is_animating(self.animating)
            .allow_keyboard_control(self.keyboard)
            .show_days_outside_current_month(self.show_outside)
            .on_click(move |d: &NaiveDate| picked.set(Some(*d)))
            .on_focus(move |_| reported.set(Some(date)))
    }

    /// Move keyboard focus by `delta` days, switching months when it leaves
    /// the displayed one.
    pub fn move_focus(&mut self, delta: i64) {
        let magnitude = Days::new(delta.unsigned_abs());
        let next = if delta >= 0 {
            self.focused.checked_add_days(magnitude)
        } else {
            self.focused.checked_sub_days(magnitude)
        };
        let Some(next) = next else {
            return;
        };
        self.focused = next;
        let month = first_of_month(next);
        if month != self.month {
            tracing::info!(from = %self.month, to = %month, "month switched");
            self.month = month;
            self.animating = true;
        }
    }

    /// Show the next (`1`) or previous (`-1`) month.
    pub fn shift_month(&mut self, months: i32) {
        let step = Months::new(months.unsigned_abs());
        let next = if months >= 0 {
            self.month.checked_add_months(step)
        } else {
            self.month.checked_sub_months(step)
        };
        if let Some(next) = next {
            self.month = next;
            self.animating = true;
        }
    }

    /// Deliver a pointer or key event to the cell showing `date`.
    pub fn dispatch(&mut self, adapter: &ChronoAdapter, date: NaiveDate, event: DayEvent) -> DayOutcome {
        let Some(idx) = self.days().iter().position(|d| *d == date) else {
            return DayOutcome::Ignored;
        };
        let cell = DayCell::new(self.props(date), adapter);
        let outcome = match self.states.get_mut(idx) {
            Some(state) => cell.handle_event(state, event),
            None => DayOutcome::Ignored,
        };
        self.absorb_callbacks();
        outcome
    }

    /// One frame: render, commit, flush, route focus events.
    pub fn frame(
        &mut self,
        adapter: &ChronoAdapter,
        buf: &mut Buffer,
        queue: &mut EffectQueue<ElementId, FocusManager>,
        focus: &FocusManager,
    ) -> Vec<DayOutcome> {
        let theme = current_theme();
        let days = self.days();
        let cells: Vec<_> = days
            .iter()
            .map(|d| DayCell::new(self.props(*d), adapter).theme(&theme))
            .collect();

        self.draw_header(buf);
        let width = day_outer_width(true);
        for (i, (cell, state)) in cells.iter().zip(self.states.iter_mut()).enumerate() {
            let area = Rect::new(
                (i % 7) as u16 * width,
                HEADER_ROWS + (i / 7) as u16 * DAY_HEIGHT,
                width,
                DAY_HEIGHT,
            );
            StatefulWidget::render(cell, area, buf, state);
        }

        for (cell, state) in cells.iter().zip(self.states.iter_mut()) {
            cell.commit(state, queue);
        }
        queue.flush(focus);

        let mut outcomes = Vec::new();
        for event in focus.drain_events() {
            for (cell, state) in cells.iter().zip(self.states.iter_mut()) {
                let outcome = cell.handle_event(state, DayEvent::Focus(event));
                if outcome != DayOutcome::Ignored {
                    outcomes.push(outcome);
                }
            }
        }
        self.absorb_callbacks();
        self.animating = false;
        outcomes
    }

    fn absorb_callbacks(&mut self) {
        if let Some(date) = self.picked.take() {
            tracing::info!(%date, "day picked");
            self.selected = Some(date);
        }
        if let Some(date) = self.reported.take() {
            tracing::debug!(%date, "focus reported by day");
            self.focused = date;
        }
    }

    fn draw_header(&self, buf: &mut Buffer) {
        let title = self.month.format("%B %Y").to_string();
        let pad = (self.width() as usize).saturating_sub(title.len()) / 2;
        put_str(buf, pad as u16, 0, &title);
        let width = day_outer_width(true);
        for (i, label) in WEEKDAY_LABELS.iter().enumerate() {
            put_str(buf, i as u16 * width + 2, 1, label);
        }
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn put_str(buf: &mut Buffer, x: u16, y: u16, text: &str) {
    for (x, c) in (x..=u16::MAX).zip(text.chars()) {
        buf.set(x, y, Cell::from_char(c));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn days_start_on_sunday() {
        let fm = FocusManager::new();
        let grid = MonthGrid::new(date(2026, 10, 18), &fm);
        let days = grid.days();
        assert_eq!(days.len(), 42);
        assert_eq!(days[0], date(2026, 9, 27));
        assert_eq!(days[4], date(2026, 10, 1));
        assert_eq!(days[41], date(2026, 11, 7));
    }

    #[test]
    fn move_focus_switches_month() {
        let fm = FocusManager::new();
        let mut grid = MonthGrid::new(date(2026, 10, 30), &fm);
        grid.move_focus(3);
        assert_eq!(grid.focused(), date(2026, 11, 2));
        assert_eq!(grid.month(), date(2026, 11, 1));
        grid.move_focus(-7);
        assert_eq!(grid.month(), date(2026, 10, 1));
    }

    #[test]
    fn shift_month_keeps_focus() {
        let fm = FocusManager::new();
        let mut grid = MonthGrid::new(date(2026, 10, 18), &fm);
        grid.shift_month(-1);
        assert_eq!(grid.month(), date(2026, 9, 1));
        assert_eq!(grid.focused(), date(2026, 10, 18));
    }

    #[test]
    fn header_lists_weekdays() {
        let fm = FocusManager::new();
        let mut queue = EffectQueue::new();
        let adapter = ChronoAdapter::new();
        let mut grid = MonthGrid::new(date(2026, 10, 18), &fm);
        let mut buf = Buffer::new(grid.width(), grid.height());
        grid.frame(&adapter, &mut buf, &mut queue, &fm);
        assert!(buf.row_text(0).contains("October 2026"));
        assert!(buf.row_text(1).starts_with("  Su    Mo"));
    }

    #[test]
    fn put_str_stops_at_last_column() {
        let mut buf = Buffer::new(4, 1);
        put_str(&mut buf, u16::MAX - 1, 0, "October");
        put_str(&mut buf, 2, 0, "Su");
        assert_eq!(buf.row_text(0), "  Su");
    }
}
