use std::fmt;

use crate::{Dispatch, DispatchMode};


/// Watches a trigger value across render passes and fires an action when it changes.
///
/// The host calls [`on_render`](Self::on_render) once per render with the current trigger value.
/// The first call only records the value. Every later call that brings a value different from
/// the recorded one asks the [`Dispatch`] for an action, passes it to the handler, and then
/// records the new value.
///
/// ```
/// use change_action::{ChangeWatcher, Dispatch};
///
/// let mut fired = Vec::new();
/// let mut w = ChangeWatcher::new(Dispatch::unconditional("toggled"), |a| fired.push(a));
/// w.on_render(false);
/// w.on_render(true);
/// w.on_render(true);
/// drop(w);
/// assert_eq!(fired, ["toggled"]);
/// ```
///
/// The trigger type must be comparable.
///
/// ```compile_fail,E0599
/// use change_action::{ChangeWatcher, Dispatch};
///
/// #[derive(Clone, Debug)]
/// struct Opaque;
///
/// // `Opaque: PartialEq` is not satisfied, so `new` is not available.
/// let _w = ChangeWatcher::<Opaque, (), fn(())>::new(Dispatch::unconditional(()), |_| {});
/// ```
pub struct ChangeWatcher<T, A, H> {
    previous: Option<T>,
    dispatch: Dispatch<T, A>,
    handler: H,
}

impl<T, A, H> ChangeWatcher<T, A, H>
where
    T: PartialEq,
    A: Clone,
    H: FnMut(A),
{
    /// Create an unseeded watcher.
    pub fn new(dispatch: Dispatch<T, A>, handler: H) -> Self {
        Self {
            previous: None,
            dispatch,
            handler,
        }
    }

    /// Notifies the watcher of the trigger value seen by the current render.
    ///
    /// Returns `true` if the handler was called.
    ///
    /// Calling this again with an unchanged value does nothing,
    /// so hosts may call it on every render.
    pub fn on_render(&mut self, current: T) -> bool {
        let Some(previous) = &self.previous else {
            trace_seed(self.mode());
            self.previous = Some(current);
            return false;
        };
        if *previous == current {
            return false;
        }
        let handler = &mut self.handler;
        let fired = self.dispatch.dispatch(previous, &current, |action| handler(action));
        trace_change(self.dispatch.mode(), fired);
        self.previous = Some(current);
        fired
    }
}

impl<T, A, H> ChangeWatcher<T, A, H> {
    /// The value recorded at the last render, or `None` before the first render.
    pub fn previous(&self) -> Option<&T> {
        self.previous.as_ref()
    }

    pub fn is_seeded(&self) -> bool {
        self.previous.is_some()
    }

    pub fn mode(&self) -> DispatchMode {
        self.dispatch.mode()
    }

    pub fn dispatch(&self) -> &Dispatch<T, A> {
        &self.dispatch
    }
}

impl<T: fmt::Debug, A, H> fmt::Debug for ChangeWatcher<T, A, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeWatcher")
            .field("mode", &self.mode())
            .field("previous", &self.previous)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "tracing")]
fn trace_seed(mode: DispatchMode) {
    tracing::trace!(message = "change_action.seed", %mode);
}
#[cfg(not(feature = "tracing"))]
fn trace_seed(_mode: DispatchMode) {}

#[cfg(feature = "tracing")]
fn trace_change(mode: DispatchMode, fired: bool) {
    if fired {
        tracing::debug!(message = "change_action.fire", %mode);
    } else {
        tracing::trace!(message = "change_action.skip", %mode);
    }
}
#[cfg(not(feature = "tracing"))]
fn trace_change(_mode: DispatchMode, _fired: bool) {}
