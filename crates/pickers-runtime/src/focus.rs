#![forbid(unsafe_code)]

//! Single-owner input focus for mounted elements.
//!
//! The [`FocusManager`] plays the part of the host's focus primitive: it
//! knows which elements are mounted, which one owns focus, and records the
//! blur/focus events each move produces so the host can route them back to
//! the widgets that own the elements.
//!
//! # Invariants
//!
//! 1. At most one element owns focus.
//! 2. Only mounted elements can receive focus; unmounting the owner blurs it.
//! 3. Focusing the current owner is a no-op: no events, no version bump.
//! 4. A move from `a` to `b` records `Blur(a)` then `Focus(b)`, each naming
//!    the other as related element.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Focus unmounted element | Element not mounted yet / already gone | [`FocusError::NotMounted`], focus unchanged |

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use ahash::AHashSet;

use crate::reactive::{Observable, Subscription};

/// Opaque handle of a focusable element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

impl ElementId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Who asked for the focus move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusOrigin {
    /// An imperative `focus()` call made by widget code.
    Programmatic,
    /// The user (tab key, pointer) or anything outside widget code.
    External,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusEventKind {
    Focus,
    Blur,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FocusEvent {
    pub kind: FocusEventKind,
    pub target: ElementId,
    /// The element losing focus (for `Focus`) or gaining it (for `Blur`).
    pub related: Option<ElementId>,
    pub origin: FocusOrigin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusError {
    /// The element is not mounted.
    NotMounted(ElementId),
}

impl fmt::Display for FocusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotMounted(id) => write!(f, "element {id} is not mounted"),
        }
    }
}

impl std::error::Error for FocusError {}

#[derive(Debug, Default)]
struct FocusState {
    mounted: AHashSet<ElementId>,
    next_id: u64,
    events: VecDeque<FocusEvent>,
    programmatic_requests: u64,
}

/// Shared focus owner. Clones share the same state.
#[derive(Clone)]
pub struct FocusManager {
    owner: Observable<Option<ElementId>>,
    state: Rc<RefCell<FocusState>>,
}

impl FocusManager {
    #[must_use]
    pub fn new() -> Self {
        Self {
            owner: Observable::new(None),
            state: Rc::new(RefCell::new(FocusState::default())),
        }
    }

    /// Hand out a fresh element id (not mounted yet).
    #[must_use]
    pub fn allocate(&self) -> ElementId {
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        ElementId(state.next_id)
    }

    /// Returns `false` if `id` was already mounted.
    pub fn mount(&self, id: ElementId) -> bool {
        self.state.borrow_mut().mounted.insert(id)
    }

    /// Unmount `id`, blurring it first if it owns focus.
    pub fn unmount(&self, id: ElementId) -> bool {
        if self.owner.get() == Some(id) {
            self.move_focus(None, FocusOrigin::External);
        }
        self.state.borrow_mut().mounted.remove(&id)
    }

    #[must_use]
    pub fn is_mounted(&self, id: ElementId) -> bool {
        self.state.borrow().mounted.contains(&id)
    }

    #[must_use]
    pub fn focused(&self) -> Option<ElementId> {
        self.owner.get()
    }

    #[must_use]
    pub fn has_focus(&self, id: ElementId) -> bool {
        self.owner.get() == Some(id)
    }

    /// Imperatively focus `id`, as widget code does.
    pub fn focus(&self, id: ElementId) -> Result<(), FocusError> {
        self.state.borrow_mut().programmatic_requests += 1;
        self.request(id, FocusOrigin::Programmatic)
    }

    /// Focus `id` on behalf of the user (tab key, pointer press).
    pub fn focus_external(&self, id: ElementId) -> Result<(), FocusError> {
        self.request(id, FocusOrigin::External)
    }

    /// Drop focus entirely.
    pub fn blur(&self) {
        self.move_focus(None, FocusOrigin::External);
    }

    fn request(&self, id: ElementId, origin: FocusOrigin) -> Result<(), FocusError> {
        if !self.is_mounted(id) {
            tracing::trace!(%id, ?origin, "focus request for unmounted element");
            return Err(FocusError::NotMounted(id));
        }
        self.move_focus(Some(id), origin);
        Ok(())
    }

    fn move_focus(&self, next: Option<ElementId>, origin: FocusOrigin) {
        let previous = self.owner.get();
        if previous == next {
            return;
        }
        {
            let mut state = self.state.borrow_mut();
            if let Some(prev) = previous {
                state.events.push_back(FocusEvent {
                    kind: FocusEventKind::Blur,
                    target: prev,
                    related: next,
                    origin,
                });
            }
            if let Some(target) = next {
                state.events.push_back(FocusEvent {
                    kind: FocusEventKind::Focus,
                    target,
                    related: previous,
                    origin,
                });
            }
        }
        tracing::debug!(?previous, ?next, ?origin, "focus moved");
        self.owner.set(next);
    }

    /// Take the events recorded since the last drain, oldest first.
    pub fn drain_events(&self) -> Vec<FocusEvent> {
        self.state.borrow_mut().events.drain(..).collect()
    }

    /// Observe focus ownership changes.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, callback: impl Fn(&Option<ElementId>) + 'static) -> Subscription {
        self.owner.subscribe(callback)
    }

    /// Number of imperative [`focus`](Self::focus) calls, including no-ops.
    #[must_use]
    pub fn programmatic_requests(&self) -> u64 {
        self.state.borrow().programmatic_requests
    }

    /// Increments once per ownership change.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.owner.version()
    }
}

impl Default for FocusManager {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FocusManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("FocusManager")
            .field("owner", &self.owner.get())
            .field("mounted", &state.mounted.len())
            .field("pending_events", &state.events.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use tracing_test::traced_test;

    fn mounted(fm: &FocusManager) -> ElementId {
        let id = fm.allocate();
        fm.mount(id);
        id
    }

    #[test]
    fn allocate_is_unique() {
        let fm = FocusManager::new();
        assert_ne!(fm.allocate(), fm.allocate());
    }

    #[test]
    #[traced_test]
    fn focus_unmounted_is_error() {
        let fm = FocusManager::new();
        let id = fm.allocate();
        assert_eq!(fm.focus(id), Err(FocusError::NotMounted(id)));
        assert_eq!(fm.focused(), None);
        assert!(fm.drain_events().is_empty());
        assert!(logs_contain("focus request for unmounted element"));
    }

    #[test]
    fn move_records_blur_then_focus() {
        let fm = FocusManager::new();
        let a = mounted(&fm);
        let b = mounted(&fm);
        fm.focus_external(a).unwrap();
        fm.drain_events();

        fm.focus(b).unwrap();
        let events = fm.drain_events();
        assert_eq!(
            events,
            vec![
                FocusEvent {
                    kind: FocusEventKind::Blur,
                    target: a,
                    related: Some(b),
                    origin: FocusOrigin::Programmatic,
                },
                FocusEvent {
                    kind: FocusEventKind::Focus,
                    target: b,
                    related: Some(a),
                    origin: FocusOrigin::Programmatic,
                },
            ]
        );
        assert!(fm.has_focus(b));
    }

    #[test]
    fn refocus_owner_is_silent() {
        let fm = FocusManager::new();
        let a = mounted(&fm);
        fm.focus(a).unwrap();
        let v = fm.version();
        fm.drain_events();
        fm.focus(a).unwrap();
        assert_eq!(fm.version(), v);
        assert!(fm.drain_events().is_empty());
        assert_eq!(fm.programmatic_requests(), 2);
    }

    #[test]
    fn unmount_owner_blurs() {
        let fm = FocusManager::new();
        let a = mounted(&fm);
        fm.focus(a).unwrap();
        fm.drain_events();
        assert!(fm.unmount(a));
        assert_eq!(fm.focused(), None);
        let events = fm.drain_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, FocusEventKind::Blur);
        assert!(!fm.is_mounted(a));
    }

    #[test]
    fn subscribers_see_owner_changes() {
        let fm = FocusManager::new();
        let a = mounted(&fm);
        let seen = Rc::new(Cell::new(None));
        let s = Rc::clone(&seen);
        let _sub = fm.subscribe(move |owner| s.set(*owner));
        fm.focus_external(a).unwrap();
        assert_eq!(seen.get(), Some(a));
        fm.blur();
        assert_eq!(seen.get(), None);
    }
}
