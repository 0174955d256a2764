//! Fire actions when a watched value changes between render passes.
//!
//! A [`ChangeWatcher`] is attached to one view instance. The host calls
//! [`ChangeWatcher::on_render`] with the current trigger value on every render, and the watcher
//! asks its [`Dispatch`] whether the change from the previous value should fire an action.
//!
//! [`ActionPerformable`] describes things that perform actions (haptics, sounds, ...).
//! Connecting a watcher to a performer is up to the caller; see [`gated`].

mod dispatch;
mod on_change;
mod perform;
mod watcher;

pub use dispatch::*;
pub use on_change::*;
pub use perform::*;
pub use watcher::*;
