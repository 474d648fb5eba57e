#![forbid(unsafe_code)]

//! Moves input focus to a day cell when the grid's navigation points at it.
//!
//! The controller runs in the commit phase. It compares the watched inputs
//! with the previous commit and, on change, schedules one effect on the
//! host queue. The effect focuses the element only if the intent still
//! holds; it never blurs.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Element not mounted | Effect flushed before mount / after unmount | Silent no-op, retried only on the next watched change |

use pickers_runtime::{EffectDeps, EffectQueue, ElementId, FocusManager};

/// Inputs the focus effect depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FocusWatch {
    pub allow_keyboard_control: bool,
    pub disabled: bool,
    pub focused: bool,
    pub is_animating: bool,
    pub in_current_month: bool,
}

impl FocusWatch {
    /// The cell should own input focus.
    #[must_use]
    pub const fn intent(self) -> bool {
        self.focused
            && !self.disabled
            && !self.is_animating
            && self.in_current_month
            && self.allow_keyboard_control
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusController {
    deps: EffectDeps<FocusWatch>,
}

impl FocusController {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            deps: EffectDeps::new(),
        }
    }

    /// Schedule the focus effect for `id` if `watch` changed since the last
    /// sync. Returns whether an effect was scheduled.
    pub fn sync(
        &mut self,
        id: ElementId,
        watch: FocusWatch,
        queue: &mut EffectQueue<ElementId, FocusManager>,
    ) -> bool {
        if !self.deps.changed(watch) {
            return false;
        }
        let intent = watch.intent();
        queue.schedule(id, move |focus: &FocusManager| {
            if !intent {
                return;
            }
            if let Err(_err) = focus.focus(id) {
                #[cfg(feature = "tracing")]
                tracing::trace!(error = %_err, "day focus skipped");
            }
        });
        true
    }

    /// The watched inputs of the last sync.
    #[must_use]
    pub fn last_watch(&self) -> Option<FocusWatch> {
        self.deps.last().copied()
    }

    /// Forget the memo, e.g. after the element was remounted.
    pub fn reset(&mut self) {
        self.deps.reset();
    }
}
