//! Timer contracts.
//!
//! Runtime delays (the initial loading pause, status-message expiry, confirmation polling) go
//! through [`Scheduler`] so tests can drive time explicitly with [`ManualScheduler`].

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc, time::Duration};

use futures::channel::oneshot;

/// Boxed timer future returned by [`Scheduler::sleep`].
pub type SchedulerFuture = Pin<Box<dyn Future<Output = ()>>>;

/// Host timer service.
pub trait Scheduler {
    /// Returns a future that completes once `duration` has elapsed.
    ///
    /// The timer is armed when this method is called, not when the future is first polled.
    fn sleep(&self, duration: Duration) -> SchedulerFuture;
}

#[derive(Debug, Clone, Copy, Default)]
/// Scheduler whose timers complete immediately.
pub struct ReadyScheduler;

impl Scheduler for ReadyScheduler {
    fn sleep(&self, _duration: Duration) -> SchedulerFuture {
        Box::pin(async {})
    }
}

#[derive(Debug)]
struct PendingTimer {
    deadline: Duration,
    seq: u64,
    wake: oneshot::Sender<()>,
}

#[derive(Debug, Default)]
struct ManualClock {
    now: Duration,
    next_seq: u64,
    timers: Vec<PendingTimer>,
}

#[derive(Debug, Clone, Default)]
/// Virtual-time scheduler. Time only moves when [`ManualScheduler::advance`] is called.
pub struct ManualScheduler {
    clock: Rc<RefCell<ManualClock>>,
}

impl ManualScheduler {
    /// Virtual time elapsed since construction.
    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    /// Number of armed timers that have not fired yet.
    pub fn pending(&self) -> usize {
        self.clock.borrow().timers.len()
    }

    /// Moves virtual time forward and fires every timer whose deadline has passed, in deadline
    /// order. Returns how many timers fired.
    pub fn advance(&self, by: Duration) -> usize {
        let due = {
            let mut clock = self.clock.borrow_mut();
            clock.now += by;
            let now = clock.now;
            let (mut due, rest): (Vec<_>, Vec<_>) = clock
                .timers
                .drain(..)
                .partition(|timer| timer.deadline <= now);
            clock.timers = rest;
            due.sort_by_key(|timer| (timer.deadline, timer.seq));
            due
        };

        let fired = due.len();
        for timer in due {
            let _ = timer.wake.send(());
        }
        fired
    }
}

impl Scheduler for ManualScheduler {
    fn sleep(&self, duration: Duration) -> SchedulerFuture {
        let (wake, fired) = oneshot::channel();
        {
            let mut clock = self.clock.borrow_mut();
            let seq = clock.next_seq;
            clock.next_seq += 1;
            let deadline = clock.now + duration;
            clock.timers.push(PendingTimer {
                deadline,
                seq,
                wake,
            });
        }
        Box::pin(async move {
            let _ = fired.await;
        })
    }
}
