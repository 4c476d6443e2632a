//! Unit tests for gw-action.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use crate::{Action, BoxAction, Status};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn secs(n: u64) -> Duration {
    Duration::from_secs(n)
}

fn millis(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Records every budget it is offered and never completes.
#[derive(Clone, Default)]
struct StepRecorder {
    budgets: Rc<RefCell<Vec<Duration>>>,
}

impl StepRecorder {
    fn budgets(&self) -> Vec<Duration> {
        self.budgets.borrow().clone()
    }
}

impl Action for StepRecorder {
    fn run(&mut self, budget: Duration) -> Status {
        self.budgets.borrow_mut().push(budget);
        Status::paused()
    }
}

fn boxed<A: Action + 'static>(a: A) -> BoxAction {
    Box::new(a)
}

// ── Status ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod status {
    use super::*;

    #[test]
    fn done_keeps_time_left() {
        let s = Status::done(secs(1));
        assert!(s.is_done());
        assert!(!s.is_interrupted());
        assert!(!s.is_paused());
        assert!(s.has_time_left());
        assert_eq!(s.time_left(), secs(1));
    }

    #[test]
    fn done_with_no_time_left() {
        let s = Status::done(Duration::ZERO);
        assert!(s.is_done());
        assert!(!s.has_time_left());
    }

    #[test]
    fn done_after_overspend_clamps_to_zero() {
        let s = Status::done_after(secs(1), secs(3));
        assert_eq!(s, Status::done(Duration::ZERO));
        assert_eq!(Status::done_after(secs(3), secs(1)), Status::done(secs(2)));
    }

    #[test]
    fn interrupted_keeps_time_left() {
        let s = Status::interrupted(secs(1));
        assert!(!s.is_done());
        assert!(s.is_interrupted());
        assert!(s.is_finished());
        assert_eq!(s.time_left(), secs(1));
    }

    #[test]
    fn paused_has_no_time_left() {
        let s = Status::paused();
        assert!(!s.is_done());
        assert!(!s.is_interrupted());
        assert!(s.is_paused());
        assert!(!s.is_finished());
        assert!(!s.has_time_left());
        assert_eq!(s.time_left(), Duration::ZERO);
    }
}

// ── Primitive actions ─────────────────────────────────────────────────────────

#[cfg(test)]
mod primitives {
    use super::*;
    use crate::{Interrupt, NoAction, Wait};

    #[test]
    fn no_action_completes_in_no_time() {
        assert_eq!(NoAction.run(secs(1)), Status::done(secs(1)));
        assert_eq!(NoAction.run(Duration::ZERO), Status::done(Duration::ZERO));
    }

    #[test]
    fn interrupt_fails_in_no_time() {
        assert_eq!(Interrupt.run(secs(1)), Status::interrupted(secs(1)));
    }

    #[test]
    fn wait_pauses_until_time_is_up() {
        let mut w = Wait::new(secs(3));
        assert_eq!(w.run(secs(2)), Status::paused());
        assert_eq!(w.remaining(), secs(1));
        assert_eq!(w.run(secs(2)), Status::done(secs(1)));
    }

    #[test]
    fn wait_conserves_time_across_any_split() {
        let needed = millis(1_000);
        let splits: [&[u64]; 5] = [
            &[1_500],
            &[1_000, 500],
            &[250, 250, 250, 250, 500],
            &[999, 1, 500],
            &[0, 0, 1_500],
        ];
        for split in splits {
            let mut w = Wait::new(needed);
            let mut last = Status::paused();
            let mut done_at = None;
            for (i, &ms) in split.iter().enumerate() {
                if done_at.is_some() {
                    break;
                }
                last = w.run(millis(ms));
                if last.is_done() {
                    let offered: u64 = split[..=i].iter().sum();
                    done_at = Some(offered);
                }
            }
            let offered = done_at.expect("wait should complete");
            assert_eq!(last, Status::done(millis(offered) - needed), "split {split:?}");
        }
    }

    #[test]
    fn boxed_action_delegates() {
        let mut b: BoxAction = Box::new(Wait::new(secs(1)));
        assert_eq!(b.run(secs(2)), Status::done(secs(1)));
    }
}

// ── Countdown ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod countdown {
    use super::*;
    use crate::{Countdown, SharedCountdown};

    #[test]
    fn table() {
        // (name, needed, steps, left over from last step, progress)
        let cases: [(&str, u64, &[u64], u64, f64); 8] = [
            ("zero",                    0, &[],     0, 1.0),
            ("start",                   3, &[],     0, 0.0),
            ("halfway",                 2, &[1],    0, 0.5),
            ("halfway in two steps",    4, &[1, 1], 0, 0.5),
            ("complete",                1, &[1],    0, 1.0),
            ("complete in two steps",   2, &[1, 1], 0, 1.0),
            ("after done",              1, &[1, 1], 1, 1.0),
            ("after done with spare",   1, &[2],    1, 1.0),
        ];
        for (name, needed, steps, left_over, progress) in cases {
            let mut c = Countdown::default();
            c.reset_target(needed);
            let mut last = 0;
            for &s in steps {
                last = c.count_down(s);
            }
            assert_eq!(last, left_over, "{name}: left over");
            assert_eq!(c.progress(), progress, "{name}: progress");
        }
    }

    #[test]
    fn progress_is_monotone_and_clamped() {
        let mut c = Countdown::to(10);
        let mut prev = c.progress();
        for step in [0, 3, 0, 4, 5, 7, 1] {
            c.count_down(step);
            let now = c.progress();
            assert!(now >= prev, "progress went from {prev} to {now}");
            assert!(now <= 1.0);
            prev = now;
        }
        assert!(c.is_complete());
        assert_eq!(c.elapsed(), c.needed());
    }

    #[test]
    fn reset_clears_elapsed() {
        let mut c = Countdown::to(4);
        c.count_down(3);
        c.reset_target(2);
        assert_eq!(c.elapsed(), 0);
        assert_eq!(c.progress(), 0.0);
    }

    #[test]
    fn action_table() {
        // (name, needed, steps, final status, progress)
        let cases: [(&str, Duration, &[Duration], Status, f64); 8] = [
            ("zero",                  Duration::ZERO, &[],                    Status::paused(),        1.0),
            // Target is only set on the first run.
            ("start",                 secs(1),        &[],                    Status::paused(),        1.0),
            ("halfway",               secs(2),        &[secs(1)],             Status::paused(),        0.5),
            ("halfway in two steps",  secs(2),        &[millis(500), millis(500)], Status::paused(),   0.5),
            ("complete",              secs(1),        &[secs(1)],             Status::done(Duration::ZERO), 1.0),
            ("complete in two steps", secs(2),        &[secs(1), secs(1)],    Status::done(Duration::ZERO), 1.0),
            ("after done",            secs(1),        &[secs(1), secs(1)],    Status::done(secs(1)),   1.0),
            ("after done with spare", secs(1),        &[secs(2)],             Status::done(secs(1)),   1.0),
        ];
        for (name, needed, steps, want, progress) in cases {
            let shared = SharedCountdown::default();
            let mut action = Countdown::action(&shared, needed);
            let mut status = Status::paused();
            for &dt in steps {
                status = action.run(dt);
            }
            assert_eq!(status, want, "{name}: status");
            assert_eq!(shared.get().progress(), progress, "{name}: progress");
        }
    }

    #[test]
    fn action_does_not_touch_countdown_before_running() {
        let shared: SharedCountdown = Rc::new(Cell::new(Countdown::to(7)));
        let _action = Countdown::action(&shared, secs(3));
        assert_eq!(shared.get(), Countdown::to(7));
    }

    #[test]
    fn zero_budget_first_run_initializes_target() {
        let shared = SharedCountdown::default();
        let mut action = Countdown::action(&shared, secs(4));
        assert_eq!(action.run(Duration::ZERO), Status::paused());
        assert_eq!(shared.get().progress(), 0.0);
        action.run(secs(3));
        assert_eq!(shared.get().progress(), 0.75);
    }
}

// ── Sequence ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod sequence {
    use super::*;
    use crate::{Interrupt, Sequence, Wait};

    fn waits(ds: &[u64]) -> Vec<BoxAction> {
        ds.iter().map(|&s| boxed(Wait::new(secs(s)))).collect()
    }

    #[test]
    fn table() {
        // (name, wait steps in seconds, budgets in seconds, final status)
        let cases: [(&str, &[u64], &[u64], Status); 9] = [
            ("empty",                          &[],     &[1], Status::done(secs(1))),
            ("single step, insufficient time", &[3],    &[2], Status::paused()),
            ("single step, exact time",        &[1],    &[1], Status::done(Duration::ZERO)),
            ("single step, time to spare",     &[1],    &[3], Status::done(secs(2))),
            ("two steps, first short",         &[2, 3], &[1], Status::paused()),
            ("two steps, first exact",         &[2, 3], &[2], Status::paused()),
            ("two steps, second short",        &[2, 3], &[4], Status::paused()),
            ("two steps, second exact",        &[2, 3], &[5], Status::done(Duration::ZERO)),
            ("two steps, time to spare",       &[2, 3], &[6], Status::done(secs(1))),
        ];
        for (name, steps, budgets, want) in cases {
            let mut seq = Sequence::new(waits(steps));
            let mut status = Status::paused();
            for &b in budgets {
                status = seq.run(secs(b));
            }
            assert_eq!(status, want, "{name}");
        }
    }

    #[test]
    fn time_accounting_matches_total() {
        let steps = [1, 2, 3];
        let total: u64 = steps.iter().sum();
        for budget in 0..=total + 2 {
            let mut seq = Sequence::new(waits(&steps));
            let status = seq.run(secs(budget));
            if budget < total {
                assert!(status.is_paused(), "budget {budget}");
            } else {
                assert_eq!(status, Status::done(secs(budget - total)), "budget {budget}");
            }
        }
    }

    #[test]
    fn resumes_across_calls() {
        let mut seq = Sequence::new(waits(&[2, 3]));
        assert!(seq.run(secs(1)).is_paused());
        assert_eq!(seq.len(), 2);
        assert!(seq.run(secs(2)).is_paused());
        assert_eq!(seq.len(), 1);
        assert_eq!(seq.run(secs(3)), Status::done(secs(1)));
        assert!(seq.is_empty());
    }

    #[test]
    fn interruption_short_circuits() {
        let recorder = StepRecorder::default();
        let mut seq = Sequence::new([boxed(Interrupt), boxed(recorder.clone())]);
        assert_eq!(seq.run(secs(2)), Status::interrupted(secs(2)));
        assert!(recorder.budgets().is_empty(), "trailing step must never run");
        assert!(seq.is_empty());
    }

    #[test]
    fn interruption_after_progress_keeps_leftover() {
        let mut seq = Sequence::new([boxed(Wait::new(secs(1))), boxed(Interrupt), boxed(Wait::new(secs(1)))]);
        assert_eq!(seq.run(secs(3)), Status::interrupted(secs(2)));
    }

    #[test]
    fn runs_first_step_for_zero_time_when_none_is_given() {
        let recorder = StepRecorder::default();
        let mut seq = Sequence::new([boxed(recorder.clone())]);
        seq.run(Duration::ZERO);
        assert_eq!(recorder.budgets(), vec![Duration::ZERO]);
    }

    #[test]
    fn runs_remaining_step_for_zero_time_if_none_is_left() {
        let recorder = StepRecorder::default();
        let mut seq = Sequence::new([boxed(Wait::new(secs(1))), boxed(recorder.clone())]);
        seq.run(secs(1));
        assert_eq!(recorder.budgets(), vec![Duration::ZERO]);
    }

    #[test]
    fn push_appends() {
        let mut seq = Sequence::empty();
        seq.push(Wait::new(secs(1)));
        seq.push(Wait::new(secs(1)));
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.run(secs(2)), Status::done(Duration::ZERO));
    }
}

// ── ActionExt ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod ext {
    use super::*;
    use crate::{ActionExt, Interrupt, NoAction, Wait};

    #[test]
    fn then_runs_both() {
        let mut a = Wait::new(secs(1)).then(Wait::new(secs(2)));
        assert_eq!(a.run(secs(4)), Status::done(secs(1)));
    }

    #[test]
    fn then_propagates_interrupt() {
        let mut a = NoAction.then(Interrupt);
        assert_eq!(a.run(secs(1)), Status::interrupted(secs(1)));
    }
}
