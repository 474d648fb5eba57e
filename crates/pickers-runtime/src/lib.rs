#![forbid(unsafe_code)]

//! Runtime support for the pickers widgets.
//!
//! Render stays pure; everything that happens after a frame commits lives
//! here: change-tracked values ([`reactive`]), deferred effects
//! ([`effect`]) and focus ownership ([`focus`]).
//!
//! All handles are single-threaded (`Rc`-based) and are driven by one host
//! loop: render, commit (schedule effects), [`EffectQueue::flush`], then
//! route [`FocusManager::drain_events`] back to widgets.

pub mod effect;
pub mod focus;
pub mod reactive;

pub use effect::{EffectDeps, EffectQueue};
pub use focus::{ElementId, FocusError, FocusEvent, FocusEventKind, FocusManager, FocusOrigin};
pub use reactive::{Observable, Subscription};
