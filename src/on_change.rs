use std::fmt;

use crate::{ChangeWatcher, Dispatch};


/// Fire `action` whenever `trigger` changes.
pub fn on_change<T, A, H>(trigger: T, action: A, handler: H) -> OnChange<T, A, H>
where
    T: PartialEq,
    A: Clone,
    H: FnMut(A),
{
    OnChange::new(trigger, Dispatch::unconditional(action), handler)
}

/// Fire `action` whenever `trigger` changes and `condition(previous, current)` returns `true`.
pub fn on_change_if<T, A, H>(
    trigger: T,
    action: A,
    condition: impl Fn(&T, &T) -> bool + 'static,
    handler: H,
) -> OnChange<T, A, H>
where
    T: PartialEq,
    A: Clone,
    H: FnMut(A),
{
    OnChange::new(trigger, Dispatch::conditional(action, condition), handler)
}

/// Fire the action computed by `compute(previous, current)` whenever `trigger` changes.
pub fn on_change_map<T, A, H>(
    trigger: T,
    compute: impl Fn(&T, &T) -> Option<A> + 'static,
    handler: H,
) -> OnChange<T, A, H>
where
    T: PartialEq,
    A: Clone,
    H: FnMut(A),
{
    OnChange::new(trigger, Dispatch::dynamic(compute), handler)
}

/// A trigger value owned by a view, together with the watcher attached to that view.
///
/// The view updates the value with [`set_trigger`](Self::set_trigger) and calls
/// [`render`](Self::render) on each render pass. Only `render` can fire the handler.
///
/// ```
/// use change_action::on_change_if;
///
/// let mut log = Vec::new();
/// let mut view = on_change_if(0, "grew", |prev, cur| cur > prev, |a| log.push(a));
/// view.render();
/// for value in [5, 3, 8] {
///     view.set_trigger(value);
///     view.render();
/// }
/// drop(view);
/// assert_eq!(log, ["grew", "grew"]);
/// ```
pub struct OnChange<T, A, H> {
    trigger: T,
    watcher: ChangeWatcher<T, A, H>,
}

impl<T, A, H> OnChange<T, A, H>
where
    T: PartialEq,
    A: Clone,
    H: FnMut(A),
{
    pub fn new(trigger: T, dispatch: Dispatch<T, A>, handler: H) -> Self {
        Self {
            trigger,
            watcher: ChangeWatcher::new(dispatch, handler),
        }
    }

    /// Delivers the current trigger value to the watcher.
    ///
    /// Returns `true` if the handler was called.
    pub fn render(&mut self) -> bool
    where
        T: Clone,
    {
        self.watcher.on_render(self.trigger.clone())
    }
}

impl<T, A, H> OnChange<T, A, H> {
    pub fn trigger(&self) -> &T {
        &self.trigger
    }

    /// Replaces the trigger value. The change is observed on the next [`render`](Self::render).
    pub fn set_trigger(&mut self, trigger: T) {
        self.trigger = trigger;
    }

    pub fn watcher(&self) -> &ChangeWatcher<T, A, H> {
        &self.watcher
    }

    pub fn into_watcher(self) -> ChangeWatcher<T, A, H> {
        self.watcher
    }
}

impl<T: fmt::Debug, A, H> fmt::Debug for OnChange<T, A, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OnChange")
            .field("trigger", &self.trigger)
            .field("watcher", &self.watcher)
            .finish()
    }
}
