//! Combinators available on every action.
//!
//! ```rust,ignore
//! let step = Wait::new(secs(1)).then(TakePosition::new(pos, taker));
//! let idle: BoxAction = NoAction.boxed();
//! ```

use crate::{Action, BoxAction, Sequence};

/// Extension trait that adds `.boxed()` and `.then(next)` to any `Action`.
pub trait ActionExt: Action + Sized + 'static {
    /// Erase the concrete type.
    fn boxed(self) -> BoxAction {
        Box::new(self)
    }

    /// A two-step [`Sequence`]: `self`, then `next`.
    fn then<B: Action + 'static>(self, next: B) -> Sequence {
        Sequence::new([self.boxed(), next.boxed()])
    }
}

impl<A: Action + Sized + 'static> ActionExt for A {}
