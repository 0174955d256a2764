use std::rc::Rc;

use parse_display::{Display, FromStr};
use serde::{Deserialize, Serialize};


/// Whether an [`ActionPerformable`] can perform an action right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, FromStr, Serialize, Deserialize)]
#[display(style = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Readiness {
    /// Available and enabled.
    Ready,
    /// The underlying mechanism does not exist or does not work in this environment.
    Unavailable,
    /// Available, but currently not permitted (for example by user settings).
    Disabled,
}

impl Readiness {
    pub fn is_ready(self) -> bool {
        self == Self::Ready
    }
}

/// A type that can perform actions of a particular family, such as haptic feedback or sounds.
///
/// Callers are expected to check [`is_available`](Self::is_available) and
/// [`is_enabled`](Self::is_enabled) before calling [`perform`](Self::perform).
/// [`perform_if_ready`](Self::perform_if_ready) does both.
///
/// [`ChangeWatcher`](crate::ChangeWatcher) never consults a performer by itself.
/// To connect the two, use [`gated`] to build an action handler.
pub trait ActionPerformable {
    type Action;

    /// Whether the mechanism exists and works on the current platform.
    fn is_available(&self) -> bool;

    /// Whether performing actions is currently permitted.
    fn is_enabled(&self) -> bool;

    fn perform(&self, action: Self::Action);

    fn readiness(&self) -> Readiness {
        if !self.is_available() {
            Readiness::Unavailable
        } else if !self.is_enabled() {
            Readiness::Disabled
        } else {
            Readiness::Ready
        }
    }

    /// Performs `action` if the performer is available and enabled.
    ///
    /// Returns `true` if the action was performed.
    fn perform_if_ready(&self, action: Self::Action) -> bool {
        if self.readiness().is_ready() {
            self.perform(action);
            true
        } else {
            false
        }
    }
}

impl<P: ActionPerformable + ?Sized> ActionPerformable for &P {
    type Action = P::Action;
    fn is_available(&self) -> bool {
        (**self).is_available()
    }
    fn is_enabled(&self) -> bool {
        (**self).is_enabled()
    }
    fn perform(&self, action: Self::Action) {
        (**self).perform(action)
    }
}
impl<P: ActionPerformable + ?Sized> ActionPerformable for Rc<P> {
    type Action = P::Action;
    fn is_available(&self) -> bool {
        (**self).is_available()
    }
    fn is_enabled(&self) -> bool {
        (**self).is_enabled()
    }
    fn perform(&self, action: Self::Action) {
        (**self).perform(action)
    }
}
impl<P: ActionPerformable + ?Sized> ActionPerformable for Box<P> {
    type Action = P::Action;
    fn is_available(&self) -> bool {
        (**self).is_available()
    }
    fn is_enabled(&self) -> bool {
        (**self).is_enabled()
    }
    fn perform(&self, action: Self::Action) {
        (**self).perform(action)
    }
}

/// Wraps a performer so that it only performs actions while it is ready.
///
/// ```
/// use std::cell::Cell;
/// use change_action::{gated, ActionPerformable, ChangeWatcher, Dispatch};
///
/// struct Beeper {
///     enabled: Cell<bool>,
///     beeps: Cell<u32>,
/// }
/// impl ActionPerformable for Beeper {
///     type Action = u32;
///     fn is_available(&self) -> bool {
///         true
///     }
///     fn is_enabled(&self) -> bool {
///         self.enabled.get()
///     }
///     fn perform(&self, action: u32) {
///         self.beeps.set(self.beeps.get() + action)
///     }
/// }
///
/// let beeper = Beeper { enabled: Cell::new(false), beeps: Cell::new(0) };
/// let mut w = ChangeWatcher::new(Dispatch::unconditional(1), gated(&beeper).into_handler());
/// w.on_render(0);
/// w.on_render(1);
/// beeper.enabled.set(true);
/// w.on_render(2);
/// assert_eq!(beeper.beeps.get(), 1);
/// ```
pub fn gated<P: ActionPerformable>(performer: P) -> Gated<P> {
    Gated(performer)
}

/// An [`ActionPerformable`] adapter created by [`gated`].
#[derive(Clone, Debug)]
pub struct Gated<P>(P);

impl<P: ActionPerformable> Gated<P> {
    pub fn performer(&self) -> &P {
        &self.0
    }

    /// Returns an action handler suitable for [`ChangeWatcher::new`](crate::ChangeWatcher::new).
    pub fn into_handler(self) -> impl FnMut(P::Action) {
        move |action| {
            self.0.perform_if_ready(action);
        }
    }
}

impl<P: ActionPerformable> ActionPerformable for Gated<P> {
    type Action = P::Action;
    fn is_available(&self) -> bool {
        self.0.is_available()
    }
    fn is_enabled(&self) -> bool {
        self.0.is_enabled()
    }
    fn perform(&self, action: Self::Action) {
        self.0.perform_if_ready(action);
    }
}
