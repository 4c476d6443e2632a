//! `gw-action` — resumable, time-sliced actions.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`status`]     | `Status` — done / paused / interrupted + time left        |
//! | [`action`]     | `Action` trait, `NoAction`, `Interrupt`, `Wait`           |
//! | [`countdown`]  | `Countdown`, `CountdownAction`                            |
//! | [`sequence`]   | `Sequence` — steps run back-to-back                       |
//! | [`ext`]        | `ActionExt` — `.boxed()`, `.then(next)`                   |
//!
//! # Execution model (summary)
//!
//! An action is a plain struct holding its own progress.  The driver calls
//! `run(budget)` once per frame; the action consumes at most `budget` and
//! reports back:
//!
//! ```text
//! Done(left)         finished, `left` was not needed
//! Paused             needs more time; call again next frame
//! Interrupted(left)  can never finish; `left` was not used
//! ```
//!
//! There is no suspension inside `run`: resuming is simply calling `run`
//! again on the same value.

pub mod action;
pub mod countdown;
pub mod ext;
pub mod sequence;
pub mod status;

#[cfg(test)]
mod tests;

pub use action::{Action, BoxAction, Interrupt, NoAction, Wait};
pub use countdown::{Countdown, CountdownAction, SharedCountdown};
pub use ext::ActionExt;
pub use sequence::Sequence;
pub use status::Status;
