#![forbid(unsafe_code)]

//! Facets of a day cell, resolved from its props.
//!
//! # Invariants
//!
//! 1. `hidden` and `outside_month_dimmed` are never both set.
//! 2. `highlight_today` is never set on a selected cell.
//! 3. Equal props resolve to equal states.

use super::props::DayProps;

pub const CLASS_PREFIX: &str = "PickersDay-";
pub const LABEL_CLASS: &str = "PickersDay-dayLabel";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VisualState {
    pub selected: bool,
    pub disabled: bool,
    pub with_margin: bool,
    pub highlight_today: bool,
    pub hidden: bool,
    pub outside_month_dimmed: bool,
}

impl VisualState {
    #[must_use]
    pub fn resolve<D>(props: &DayProps<D>) -> Self {
        let outside = !props.in_current_month;
        Self {
            selected: props.selected,
            disabled: props.disabled,
            with_margin: !props.disable_margin,
            highlight_today: props.today && !props.disable_highlight_today && !props.selected,
            hidden: outside && !props.show_days_outside_current_month,
            outside_month_dimmed: outside && props.show_days_outside_current_month,
        }
    }

    /// Hover and focus highlights may be painted.
    #[must_use]
    pub const fn accepts_highlight(self) -> bool {
        !self.disabled && !self.hidden
    }

    /// Facet class names in cascade order, then the caller's class.
    #[must_use]
    pub fn class_names(self, extra: Option<&str>) -> Vec<String> {
        let facets = [
            ("day", true),
            ("daySelected", self.selected),
            ("dayDisabled", self.disabled),
            ("dayWithMargin", self.with_margin),
            ("today", self.highlight_today),
            ("hidden", self.hidden),
            ("dayOutsideMonth", self.outside_month_dimmed),
        ];
        let mut out: Vec<String> = facets
            .iter()
            .filter(|(_, on)| *on)
            .map(|(name, _)| format!("{CLASS_PREFIX}{name}"))
            .collect();
        if let Some(extra) = extra.filter(|c| !c.is_empty()) {
            out.push(extra.to_string());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props() -> DayProps<u8> {
        DayProps::new(1, true)
    }

    #[test]
    fn plain_day() {
        let v = VisualState::resolve(&props());
        assert_eq!(
            v,
            VisualState {
                with_margin: true,
                ..VisualState::default()
            }
        );
        assert_eq!(
            v.class_names(None),
            vec!["PickersDay-day", "PickersDay-dayWithMargin"]
        );
    }

    #[test]
    fn outside_month_hidden_or_dimmed() {
        let mut p = props();
        p.in_current_month = false;
        let hidden = VisualState::resolve(&p);
        assert!(hidden.hidden && !hidden.outside_month_dimmed);
        assert!(!hidden.accepts_highlight());

        let dimmed = VisualState::resolve(&p.show_days_outside_current_month(true));
        assert!(!dimmed.hidden && dimmed.outside_month_dimmed);
        assert!(dimmed.accepts_highlight());
    }

    #[test]
    fn show_outside_has_no_effect_in_month() {
        let v = VisualState::resolve(&props().show_days_outside_current_month(true));
        assert!(!v.hidden && !v.outside_month_dimmed);
    }

    #[test]
    fn today_ring_rules() {
        assert!(VisualState::resolve(&props().today(true)).highlight_today);
        assert!(
            !VisualState::resolve(&props().today(true).disable_highlight_today(true))
                .highlight_today
        );
        assert!(!VisualState::resolve(&props().today(true).selected(true)).highlight_today);
        assert!(VisualState::resolve(&props().today(true).disabled(true)).highlight_today);
    }

    #[test]
    fn class_cascade_order() {
        let p = props()
            .selected(true)
            .disabled(true)
            .class_name("range-end");
        let v = VisualState::resolve(&p);
        assert_eq!(
            v.class_names(p.attrs.class_name.as_deref()),
            vec![
                "PickersDay-day",
                "PickersDay-daySelected",
                "PickersDay-dayDisabled",
                "PickersDay-dayWithMargin",
                "range-end",
            ]
        );
    }

    #[test]
    fn empty_extra_class_is_skipped() {
        let v = VisualState::resolve(&props().disable_margin(true));
        assert_eq!(v.class_names(Some("")), vec!["PickersDay-day"]);
    }
}
