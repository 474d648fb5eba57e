#![forbid(unsafe_code)]

//! Maps resolved facets and host interaction flags to terminal styles.
//!
//! Layers apply in the order `day`, `dayOutsideMonth`, `hidden`,
//! `daySelected`, `dayDisabled`, then hover/focus. Every colour is made
//! opaque: backgrounds over the paper, foregrounds over the final fill.

use std::time::Duration;

use pickers_render::cell::PackedRgba;
use pickers_style::{PickersTheme, Style, blend_over, fade};

use super::visual::VisualState;

/// Pointer and focus state delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Interaction {
    pub hovered: bool,
    pub has_focus: bool,
}

impl Interaction {
    #[must_use]
    pub const fn is_active(self) -> bool {
        self.hovered || self.has_focus
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayPresentation {
    /// Fill and label style of the whole cell.
    pub style: Style,
    /// Style of the today ring, when drawn.
    pub ring: Option<Style>,
    /// Background transition of the fill.
    pub transition: Option<Duration>,
    /// Pointer input reaches the cell.
    pub interactive: bool,
}

impl DayPresentation {
    #[must_use]
    pub fn fill(&self) -> PackedRgba {
        self.style.bg.unwrap_or_default()
    }

    #[must_use]
    pub fn text(&self) -> PackedRgba {
        self.style.fg.unwrap_or_default()
    }
}

#[must_use]
pub fn present(visual: VisualState, interaction: Interaction, theme: &PickersTheme) -> DayPresentation {
    let palette = &theme.palette;
    let paper = palette.background_paper;

    if visual.hidden {
        return DayPresentation {
            style: Style::new().fg(paper).bg(paper),
            ring: None,
            transition: None,
            interactive: false,
        };
    }

    let mut fg = palette.text_primary;
    let mut bg = paper;
    if visual.outside_month_dimmed {
        fg = palette.text_hint;
    }
    if visual.selected {
        fg = palette.primary_contrast_text;
        bg = palette.primary_main;
    }
    if visual.disabled {
        fg = palette.text_hint;
    }
    if visual.accepts_highlight() && interaction.is_active() {
        bg = if visual.selected {
            palette.primary_dark
        } else {
            fade(palette.action_active, palette.action_hover_opacity)
        };
    }

    let bg = palette.solid(bg);
    let ring = visual
        .highlight_today
        .then(|| Style::new().fg(blend_over(palette.text_hint, bg)).bg(bg));
    let transition = (visual.selected && !visual.disabled).then(|| theme.transitions.short());

    DayPresentation {
        style: Style::new().fg(blend_over(fg, bg)).bg(bg),
        ring,
        transition,
        interactive: visual.accepts_highlight(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOVER: Interaction = Interaction {
        hovered: true,
        has_focus: false,
    };
    const FOCUS: Interaction = Interaction {
        hovered: false,
        has_focus: true,
    };

    fn theme() -> PickersTheme {
        PickersTheme::light()
    }

    fn plain() -> VisualState {
        VisualState {
            with_margin: true,
            ..VisualState::default()
        }
    }

    #[test]
    fn base_day_on_paper() {
        let t = theme();
        let p = present(plain(), Interaction::default(), &t);
        assert_eq!(p.fill(), PackedRgba::WHITE);
        assert_eq!(p.text(), t.palette.solid(t.palette.text_primary));
        assert!(p.ring.is_none() && p.transition.is_none() && p.interactive);
    }

    #[test]
    fn hover_and_focus_tint_unselected() {
        let t = theme();
        let idle = present(plain(), Interaction::default(), &t);
        let hover = present(plain(), HOVER, &t);
        let focus = present(plain(), FOCUS, &t);
        assert_ne!(hover.fill(), idle.fill());
        assert_eq!(hover.fill(), focus.fill());
        assert_eq!(
            hover.fill(),
            t.palette
                .solid(fade(t.palette.action_active, t.palette.action_hover_opacity))
        );
    }

    #[test]
    fn selected_uses_primary_and_transitions() {
        let t = theme();
        let v = VisualState { selected: true, ..plain() };
        let p = present(v, Interaction::default(), &t);
        assert_eq!(p.fill(), t.palette.primary_main);
        assert_eq!(p.text(), t.palette.primary_contrast_text);
        assert_eq!(p.transition, Some(Duration::from_millis(250)));
        assert_eq!(present(v, HOVER, &t).fill(), t.palette.primary_dark);
    }

    #[test]
    fn disabled_selected_has_no_hover_or_transition() {
        let t = theme();
        let v = VisualState {
            selected: true,
            disabled: true,
            ..plain()
        };
        let idle = present(v, Interaction::default(), &t);
        let hover = present(v, HOVER, &t);
        assert_eq!(idle, hover);
        assert!(idle.transition.is_none());
        assert!(!idle.interactive);
        assert_eq!(idle.text(), blend_over(t.palette.text_hint, idle.fill()));
    }

    #[test]
    fn hidden_is_paper_only() {
        let t = theme();
        let v = VisualState { hidden: true, ..plain() };
        let p = present(v, HOVER, &t);
        assert_eq!(p.fill(), t.palette.background_paper);
        assert_eq!(p.text(), t.palette.background_paper);
        assert!(!p.interactive && p.ring.is_none());
    }

    #[test]
    fn today_ring_keeps_fill() {
        let t = theme();
        let v = VisualState { highlight_today: true, ..plain() };
        let ringed = present(v, Interaction::default(), &t);
        let plain_p = present(plain(), Interaction::default(), &t);
        assert_eq!(ringed.style, plain_p.style);
        let ring = ringed.ring.unwrap();
        assert_eq!(ring.bg, Some(ringed.fill()));
        assert_eq!(ring.fg, Some(t.palette.solid(t.palette.text_hint)));
    }

    #[test]
    fn dimmed_uses_hint_text() {
        let t = PickersTheme::dark();
        let v = VisualState { outside_month_dimmed: true, ..plain() };
        let p = present(v, Interaction::default(), &t);
        assert_eq!(p.text(), t.palette.solid(t.palette.text_hint));
        assert!(p.interactive);
    }
}
