#![forbid(unsafe_code)]

//! Selectable calendar day cell.
//!
//! A [`DayCell`] is rebuilt by the parent grid on every frame from
//! [`DayProps`]. Rendering is pure: facets are resolved into a
//! [`VisualState`], mapped through the theme, and painted into the buffer.
//! The only state kept between frames lives in [`DayCellState`]: the
//! element id, the focus-effect memo and the hover/focus flags the host
//! reports back through [`DayCell::handle_event`].
//!
//! # Frame Protocol
//!
//! 1. `render` every cell.
//! 2. `commit` every cell; this may schedule a focus effect.
//! 3. `queue.flush(&focus_manager)`.
//! 4. Route `focus_manager.drain_events()` to the cells via `handle_event`.
//!
//! # Invariants
//!
//! 1. A hidden cell paints only the paper colour and ignores pointer input,
//!    but keeps its geometry.
//! 2. Disabled cells never show hover/focus highlight and never activate.
//! 3. `on_focus` fires only for focus events that arrive while the props
//!    say the cell is not focused.

mod focus;
mod props;
mod style;
mod visual;

use ahash::AHashMap;
use pickers_render::buffer::Buffer;
use pickers_render::cell::Cell;
use pickers_render::geometry::{Rect, Sides};
use pickers_runtime::{EffectQueue, ElementId, FocusEvent, FocusEventKind, FocusManager};
use pickers_style::dimensions::{DAY_MARGIN, DAY_WIDTH};
use pickers_style::{PickersTheme, current_theme};
use unicode_width::UnicodeWidthStr;

use crate::a11y::{A11yNode, Role, TabIndex};
use crate::adapter::{DateAdapter, DateFormat};
use crate::{StatefulWidget, Widget, apply_style, draw_text_span};

pub use focus::{FocusController, FocusWatch};
pub use props::{ButtonAttrs, ClickCallback, DayProps, FocusCallback};
pub use style::{DayPresentation, Interaction, present};
pub use visual::{CLASS_PREFIX, LABEL_CLASS, VisualState};

pub const TEST_ID: &str = "day";

/// Columns reserved for the day-of-month label.
const LABEL_WIDTH: u16 = 2;

/// Frame-to-frame state of one day cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCellState {
    id: ElementId,
    controller: FocusController,
    interaction: Interaction,
}

impl DayCellState {
    #[must_use]
    pub fn new(id: ElementId) -> Self {
        Self {
            id,
            controller: FocusController::new(),
            interaction: Interaction::default(),
        }
    }

    /// Allocate and mount a fresh element on `focus`.
    #[must_use]
    pub fn mounted(focus: &FocusManager) -> Self {
        let id = focus.allocate();
        focus.mount(id);
        Self::new(id)
    }

    /// Drop any pending focus effect and unmount the element.
    pub fn unmount(&mut self, focus: &FocusManager, queue: &mut EffectQueue<ElementId, FocusManager>) {
        queue.discard(self.id);
        focus.unmount(self.id);
        self.controller.reset();
        self.interaction = Interaction::default();
    }

    #[must_use]
    pub fn id(&self) -> ElementId {
        self.id
    }

    #[must_use]
    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    #[must_use]
    pub fn controller(&self) -> &FocusController {
        &self.controller
    }
}

/// Host input routed to a day cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayEvent {
    /// A focus or blur event from the focus manager.
    Focus(FocusEvent),
    PointerEnter,
    PointerLeave,
    Click,
    KeyEnter,
    KeySpace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayOutcome {
    /// The event does not concern this cell or was blocked.
    Ignored,
    /// Interaction state changed; nothing was reported to the caller.
    Consumed,
    /// `on_focus` was invoked.
    FocusReported,
    /// The cell was activated; `on_click` ran if present.
    Activated,
}

/// Host-facing description of the rendered button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayElement {
    pub a11y: A11yNode,
    pub class_names: Vec<String>,
    /// Visible label (day of month).
    pub label: String,
    pub label_class: &'static str,
    pub test_id: &'static str,
    pub center_ripple: bool,
    pub attributes: AHashMap<String, String>,
}

impl DayElement {
    #[must_use]
    pub fn has_class(&self, name: &str) -> bool {
        self.class_names.iter().any(|c| c == name)
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// A selectable calendar day.
pub struct DayCell<'a, A: DateAdapter> {
    props: DayProps<A::Date>,
    adapter: &'a A,
    theme: Option<&'a PickersTheme>,
}

impl<'a, A: DateAdapter> DayCell<'a, A> {
    /// Render with the process-wide theme unless [`theme`](Self::theme) is set.
    #[must_use]
    pub fn new(props: DayProps<A::Date>, adapter: &'a A) -> Self {
        Self {
            props,
            adapter,
            theme: None,
        }
    }

    #[must_use]
    pub fn theme(mut self, theme: &'a PickersTheme) -> Self {
        self.theme = Some(theme);
        self
    }

    #[must_use]
    pub fn props(&self) -> &DayProps<A::Date> {
        &self.props
    }

    #[must_use]
    pub fn visual(&self) -> VisualState {
        VisualState::resolve(&self.props)
    }

    #[must_use]
    pub fn tab_index(&self) -> TabIndex {
        if self.props.focused || self.props.focusable {
            TabIndex::Sequential
        } else {
            TabIndex::Programmatic
        }
    }

    #[must_use]
    pub fn presentation(&self, interaction: Interaction) -> DayPresentation {
        let visual = self.visual();
        match self.theme {
            Some(theme) => present(visual, interaction, theme),
            None => present(visual, interaction, &current_theme()),
        }
    }

    #[must_use]
    pub fn element(&self) -> DayElement {
        let visual = self.visual();
        DayElement {
            a11y: A11yNode {
                role: Role::Button,
                label: self.adapter.format(&self.props.date, DateFormat::FullDate),
                hidden: visual.hidden,
                tab_index: self.tab_index(),
                disabled: visual.disabled,
            },
            class_names: visual.class_names(self.props.attrs.class_name.as_deref()),
            label: self.adapter.format(&self.props.date, DateFormat::DayOfMonth),
            label_class: LABEL_CLASS,
            test_id: TEST_ID,
            center_ripple: true,
            attributes: self.props.attrs.attributes.clone(),
        }
    }

    /// Commit phase: schedule the focus effect if its watched inputs changed.
    pub fn commit(
        &self,
        state: &mut DayCellState,
        queue: &mut EffectQueue<ElementId, FocusManager>,
    ) -> bool {
        let id = state.id;
        state.controller.sync(id, self.props.focus_watch(), queue)
    }

    pub fn handle_event(&self, state: &mut DayCellState, event: DayEvent) -> DayOutcome {
        let visual = self.visual();
        match event {
            DayEvent::Focus(ev) if ev.target != state.id => DayOutcome::Ignored,
            DayEvent::Focus(ev) => match ev.kind {
                FocusEventKind::Blur => {
                    state.interaction.has_focus = false;
                    DayOutcome::Consumed
                }
                FocusEventKind::Focus => {
                    state.interaction.has_focus = true;
                    if self.props.focused {
                        return DayOutcome::Consumed;
                    }
                    match &self.props.on_focus {
                        Some(on_focus) => {
                            on_focus(&ev);
                            DayOutcome::FocusReported
                        }
                        None => DayOutcome::Consumed,
                    }
                }
            },
            DayEvent::PointerEnter => {
                if !visual.accepts_highlight() {
                    return DayOutcome::Ignored;
                }
                state.interaction.hovered = true;
                DayOutcome::Consumed
            }
            DayEvent::PointerLeave => {
                if !std::mem::take(&mut state.interaction.hovered) {
                    return DayOutcome::Ignored;
                }
                DayOutcome::Consumed
            }
            DayEvent::Click => {
                if !visual.accepts_highlight() {
                    return DayOutcome::Ignored;
                }
                self.activate()
            }
            DayEvent::KeyEnter | DayEvent::KeySpace => {
                if visual.disabled || !state.interaction.has_focus {
                    return DayOutcome::Ignored;
                }
                self.activate()
            }
        }
    }

    fn activate(&self) -> DayOutcome {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            label = %self.adapter.format(&self.props.date, DateFormat::FullDate),
            "day activated"
        );
        if let Some(on_click) = &self.props.attrs.on_click {
            on_click(&self.props.date);
        }
        DayOutcome::Activated
    }

    fn render_with(&self, area: Rect, buf: &mut Buffer, interaction: Interaction) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "DayCell",
            x = area.x,
            y = area.y,
            w = area.width,
            h = area.height
        )
        .entered();

        let visual = self.visual();
        let body = if visual.with_margin {
            area.inner(Sides::horizontal(DAY_MARGIN))
        } else {
            area
        };
        if body.is_empty() {
            return;
        }

        let look = self.presentation(interaction);
        let mut blank = Cell::default();
        apply_style(&mut blank, look.style);
        buf.fill(body, blank);
        if visual.hidden {
            return;
        }

        let left = body
            .x
            .saturating_add(body.width.saturating_sub(DAY_WIDTH) / 2);
        let y = body.y.saturating_add(body.height / 2);
        let max_x = body.right();

        let label = self.adapter.format(&self.props.date, DateFormat::DayOfMonth);
        let label_width = (label.width() as u16).min(LABEL_WIDTH);
        let label_x = left.saturating_add(1 + LABEL_WIDTH - label_width);
        let label_end = left.saturating_add(1 + LABEL_WIDTH);
        if label_x < max_x {
            draw_text_span(buf, label_x, y, &label, look.style, max_x.min(label_end));
        }

        if let Some(ring) = look.ring {
            draw_text_span(buf, left, y, "(", ring, max_x);
            if label_end < max_x {
                draw_text_span(buf, label_end, y, ")", ring, max_x);
            }
        }
    }
}

impl<A: DateAdapter> Widget for DayCell<'_, A> {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        self.render_with(area, buf, Interaction::default());
    }
}

impl<A: DateAdapter> StatefulWidget for DayCell<'_, A> {
    type State = DayCellState;

    fn render(&self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        self.render_with(area, buf, state.interaction);
    }
}

impl<A: DateAdapter> std::fmt::Debug for DayCell<'_, A>
where
    A::Date: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DayCell")
            .field("props", &self.props)
            .field("themed", &self.theme.is_some())
            .finish()
    }
}
