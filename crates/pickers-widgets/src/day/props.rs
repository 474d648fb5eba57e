#![forbid(unsafe_code)]

//! Input record of a day cell.
//!
//! The parent grid rebuilds a [`DayProps`] for every cell on every render.
//! All optional flags are materialized as plain `bool`s defaulting to
//! `false`, so the resolver never has to guess.

use std::fmt;
use std::rc::Rc;

use ahash::AHashMap;
use pickers_runtime::FocusEvent;

use super::focus::FocusWatch;

pub type FocusCallback = Rc<dyn Fn(&FocusEvent)>;
pub type ClickCallback<D> = Rc<dyn Fn(&D)>;

/// Pass-through attributes of the underlying button.
pub struct ButtonAttrs<D> {
    /// Extra class appended after the cell's own classes.
    pub class_name: Option<String>,
    /// Free-form attributes (`data-*`, `title`, ...).
    pub attributes: AHashMap<String, String>,
    /// Activation by click, Enter or Space.
    pub on_click: Option<ClickCallback<D>>,
}

impl<D> ButtonAttrs<D> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            class_name: None,
            attributes: AHashMap::new(),
            on_click: None,
        }
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

impl<D> Default for ButtonAttrs<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> Clone for ButtonAttrs<D> {
    fn clone(&self) -> Self {
        Self {
            class_name: self.class_name.clone(),
            attributes: self.attributes.clone(),
            on_click: self.on_click.clone(),
        }
    }
}

impl<D> fmt::Debug for ButtonAttrs<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ButtonAttrs")
            .field("class_name", &self.class_name)
            .field("attributes", &self.attributes)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

/// Fully populated inputs of one day cell.
pub struct DayProps<D> {
    /// The date shown.
    pub date: D,
    /// The date belongs to the displayed month.
    pub in_current_month: bool,
    pub today: bool,
    pub selected: bool,
    pub disabled: bool,
    /// The grid's keyboard navigation points at this cell.
    pub focused: bool,
    /// The cell can be reached by tabbing in.
    pub focusable: bool,
    /// A month-switch animation is running.
    pub is_animating: bool,
    /// Keyboard control and focus management are enabled.
    pub allow_keyboard_control: bool,
    /// Drop the inter-cell margin (contiguous range bands).
    pub disable_margin: bool,
    /// Render adjacent-month days dimmed instead of hiding them.
    pub show_days_outside_current_month: bool,
    /// Do not ring today's date.
    pub disable_highlight_today: bool,
    pub on_focus: Option<FocusCallback>,
    pub attrs: ButtonAttrs<D>,
}

impl<D> DayProps<D> {
    /// Props for `date` with every optional flag at its default (`false`).
    #[must_use]
    pub fn new(date: D, in_current_month: bool) -> Self {
        Self {
            date,
            in_current_month,
            today: false,
            selected: false,
            disabled: false,
            focused: false,
            focusable: false,
            is_animating: false,
            allow_keyboard_control: false,
            disable_margin: false,
            show_days_outside_current_month: false,
            disable_highlight_today: false,
            on_focus: None,
            attrs: ButtonAttrs::new(),
        }
    }

    #[must_use]
    pub fn today(mut self, today: bool) -> Self {
        self.today = today;
        self
    }

    #[must_use]
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    #[must_use]
    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    #[must_use]
    pub fn is_animating(mut self, is_animating: bool) -> Self {
        self.is_animating = is_animating;
        self
    }

    #[must_use]
    pub fn allow_keyboard_control(mut self, allow: bool) -> Self {
        self.allow_keyboard_control = allow;
        self
    }

    #[must_use]
    pub fn disable_margin(mut self, disable: bool) -> Self {
        self.disable_margin = disable;
        self
    }

    #[must_use]
    pub fn show_days_outside_current_month(mut self, show: bool) -> Self {
        self.show_days_outside_current_month = show;
        self
    }

    #[must_use]
    pub fn disable_highlight_today(mut self, disable: bool) -> Self {
        self.disable_highlight_today = disable;
        self
    }

    #[must_use]
    pub fn on_focus(mut self, callback: impl Fn(&FocusEvent) + 'static) -> Self {
        self.on_focus = Some(Rc::new(callback));
        self
    }

    #[must_use]
    pub fn on_click(mut self, callback: impl Fn(&D) + 'static) -> Self {
        self.attrs.on_click = Some(Rc::new(callback));
        self
    }

    #[must_use]
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.attrs.class_name = Some(class_name.into());
        self
    }

    #[must_use]
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.attributes.insert(name.into(), value.into());
        self
    }

    /// The inputs the focus controller watches.
    #[must_use]
    pub fn focus_watch(&self) -> FocusWatch {
        FocusWatch {
            allow_keyboard_control: self.allow_keyboard_control,
            disabled: self.disabled,
            focused: self.focused,
            is_animating: self.is_animating,
            in_current_month: self.in_current_month,
        }
    }

    /// This cell must currently hold input focus.
    #[must_use]
    pub fn focus_intent(&self) -> bool {
        self.focus_watch().intent()
    }
}

impl<D: Clone> Clone for DayProps<D> {
    fn clone(&self) -> Self {
        Self {
            date: self.date.clone(),
            in_current_month: self.in_current_month,
            today: self.today,
            selected: self.selected,
            disabled: self.disabled,
            focused: self.focused,
            focusable: self.focusable,
            is_animating: self.is_animating,
            allow_keyboard_control: self.allow_keyboard_control,
            disable_margin: self.disable_margin,
            show_days_outside_current_month: self.show_days_outside_current_month,
            disable_highlight_today: self.disable_highlight_today,
            on_focus: self.on_focus.clone(),
            attrs: self.attrs.clone(),
        }
    }
}

impl<D: fmt::Debug> fmt::Debug for DayProps<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DayProps")
            .field("date", &self.date)
            .field("in_current_month", &self.in_current_month)
            .field("today", &self.today)
            .field("selected", &self.selected)
            .field("disabled", &self.disabled)
            .field("focused", &self.focused)
            .field("focusable", &self.focusable)
            .field("is_animating", &self.is_animating)
            .field("allow_keyboard_control", &self.allow_keyboard_control)
            .field("disable_margin", &self.disable_margin)
            .field(
                "show_days_outside_current_month",
                &self.show_days_outside_current_month,
            )
            .field("disable_highlight_today", &self.disable_highlight_today)
            .field("on_focus", &self.on_focus.is_some())
            .field("attrs", &self.attrs)
            .finish()
    }
}
