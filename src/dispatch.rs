use std::{fmt, rc::Rc};

use derive_ex::derive_ex;
use parse_display::{Display, FromStr};
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// The kind of [`Dispatch`] a watcher was configured with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, FromStr, Serialize, Deserialize)]
#[display(style = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DispatchMode {
    /// Fire a fixed action on every change.
    Unconditional,
    /// Fire a fixed action when a condition over `(previous, current)` holds.
    Conditional,
    /// Fire whatever action is computed from `(previous, current)`, if any.
    Dynamic,
}

/// Decides which action, if any, a change from `previous` to `current` produces.
///
/// Exactly one mode is chosen when the value is built and it never changes afterwards.
/// The closures are reference counted, so cloning a `Dispatch` is cheap and
/// lets the same configuration drive the watchers of several views.
#[derive_ex(Clone, bound(A))]
pub enum Dispatch<T, A> {
    Unconditional(A),
    Conditional {
        action: A,
        condition: Rc<dyn Fn(&T, &T) -> bool>,
    },
    Dynamic(Rc<dyn Fn(&T, &T) -> Option<A>>),
}

impl<T, A> Dispatch<T, A> {
    /// Fire `action` on every change.
    pub fn unconditional(action: A) -> Self {
        Self::Unconditional(action)
    }

    /// Fire `action` on a change only if `condition(previous, current)` returns `true`.
    pub fn conditional(action: A, condition: impl Fn(&T, &T) -> bool + 'static) -> Self {
        Self::Conditional {
            action,
            condition: Rc::new(condition),
        }
    }

    /// Fire the action returned by `compute(previous, current)`. `None` means no action.
    pub fn dynamic(compute: impl Fn(&T, &T) -> Option<A> + 'static) -> Self {
        Self::Dynamic(Rc::new(compute))
    }

    pub fn mode(&self) -> DispatchMode {
        match self {
            Self::Unconditional(_) => DispatchMode::Unconditional,
            Self::Conditional { .. } => DispatchMode::Conditional,
            Self::Dynamic(_) => DispatchMode::Dynamic,
        }
    }

    /// Returns the action to fire for a change from `previous` to `current`.
    ///
    /// The caller is responsible for only calling this on a genuine change.
    pub fn select(&self, previous: &T, current: &T) -> Option<A>
    where
        A: Clone,
    {
        match self {
            Self::Unconditional(action) => Some(action.clone()),
            Self::Conditional { action, condition } => {
                condition(previous, current).then(|| action.clone())
            }
            Self::Dynamic(compute) => compute(previous, current),
        }
    }

    /// Selects an action and passes it to `handler`.
    ///
    /// `handler` is called at most once. Returns `true` if it was called.
    pub fn dispatch(&self, previous: &T, current: &T, handler: impl FnOnce(A)) -> bool
    where
        A: Clone,
    {
        match self.select(previous, current) {
            Some(action) => {
                handler(action);
                true
            }
            None => false,
        }
    }
}

impl<T, A: fmt::Debug> fmt::Debug for Dispatch<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unconditional(action) => f.debug_tuple("Unconditional").field(action).finish(),
            Self::Conditional { action, .. } => f
                .debug_struct("Conditional")
                .field("action", action)
                .finish_non_exhaustive(),
            Self::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}
