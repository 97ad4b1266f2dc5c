//! Simulated add-to-cart interaction.
//!
//! The page owns one flag, "adding to cart". A trigger raises it at once,
//! reports the add, and schedules a revert after
//! [`CartSettings::revert_delay`]. Nothing is stored anywhere; the revert
//! only lowers the flag.
//!
//! Timing goes through the [`Scheduler`] trait so the browser can use real
//! timeouts while tests drive a virtual clock. Each trigger hands out a
//! [`RevertTicket`]; only the ticket from the latest trigger can lower the
//! flag, which is what makes a re-trigger restart the countdown.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

/// Simulated latency before the flag drops again
pub const DEFAULT_REVERT_DELAY: Duration = Duration::from_millis(1000);

/// What a trigger does while a previous one is still pending
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RetriggerPolicy {
    /// Start the countdown over
    #[default]
    Restart,
    /// Keep the running countdown, drop the new trigger
    Ignore,
}

/// Tunables for the cart interaction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CartSettings {
    pub revert_delay: Duration,
    pub retrigger: RetriggerPolicy,
}

impl Default for CartSettings {
    fn default() -> Self {
        Self {
            revert_delay: DEFAULT_REVERT_DELAY,
            retrigger: RetriggerPolicy::default(),
        }
    }
}

/// Proof of a specific trigger, redeemed when its revert fires
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevertTicket(u64);

/// The flag and its trigger bookkeeping, without any timing
#[derive(Debug, Default)]
pub struct CartInteraction {
    adding: bool,
    generation: u64,
    policy: RetriggerPolicy,
}

impl CartInteraction {
    pub fn new(policy: RetriggerPolicy) -> Self {
        Self {
            adding: false,
            generation: 0,
            policy,
        }
    }

    pub fn is_adding(&self) -> bool {
        self.adding
    }

    /// Raise the flag. Returns `None` when the trigger is ignored.
    pub fn begin(&mut self) -> Option<RevertTicket> {
        if self.adding && self.policy == RetriggerPolicy::Ignore {
            return None;
        }
        self.adding = true;
        self.generation += 1;
        Some(RevertTicket(self.generation))
    }

    /// Lower the flag if `ticket` belongs to the latest trigger
    pub fn settle(&mut self, ticket: RevertTicket) -> bool {
        if self.adding && ticket.0 == self.generation {
            self.adding = false;
            true
        } else {
            false
        }
    }

    /// Invalidate every outstanding ticket and lower the flag
    pub fn abandon(&mut self) {
        self.generation += 1;
        self.adding = false;
    }
}

/// Deferred task runner on the page's event loop
pub trait Scheduler {
    type Handle;

    /// Run `task` once after `delay`
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle;

    /// Prevent a scheduled task from running. Harmless if it already ran.
    fn cancel(&self, handle: Self::Handle);
}

struct Shared {
    state: RefCell<CartInteraction>,
    on_change: Box<dyn Fn(bool)>,
}

/// Owns the flag and its pending revert.
///
/// Dropping the controller cancels the pending revert, so a torn-down page
/// never sees a late callback.
pub struct CartController<S: Scheduler> {
    shared: Rc<Shared>,
    on_added: Box<dyn Fn()>,
    scheduler: S,
    settings: CartSettings,
    pending: RefCell<Option<S::Handle>>,
}

impl<S: Scheduler> CartController<S> {
    /// `on_change` sees every flag transition; `on_added` runs once per
    /// accepted trigger, before its revert is scheduled.
    pub fn new(
        scheduler: S,
        settings: CartSettings,
        on_change: impl Fn(bool) + 'static,
        on_added: impl Fn() + 'static,
    ) -> Self {
        Self {
            shared: Rc::new(Shared {
                state: RefCell::new(CartInteraction::new(settings.retrigger)),
                on_change: Box::new(on_change),
            }),
            on_added: Box::new(on_added),
            scheduler,
            settings,
            pending: RefCell::new(None),
        }
    }

    pub fn settings(&self) -> CartSettings {
        self.settings
    }

    pub fn is_adding(&self) -> bool {
        self.shared.state.borrow().is_adding()
    }

    /// Handle an add-to-cart trigger. Returns whether it was accepted.
    pub fn add_to_cart(&self) -> bool {
        let Some(ticket) = self.shared.state.borrow_mut().begin() else {
            return false;
        };

        if let Some(previous) = self.pending.borrow_mut().take() {
            self.scheduler.cancel(previous);
        }

        (self.shared.on_change)(true);
        (self.on_added)();

        let shared: Weak<Shared> = Rc::downgrade(&self.shared);
        let handle = self.scheduler.schedule(
            self.settings.revert_delay,
            Box::new(move || {
                let Some(shared) = shared.upgrade() else {
                    return;
                };
                let settled = shared.state.borrow_mut().settle(ticket);
                if settled {
                    (shared.on_change)(false);
                }
            }),
        );
        *self.pending.borrow_mut() = Some(handle);

        true
    }

    /// Cancel any pending revert and lower the flag silently
    pub fn teardown(&self) {
        if let Some(handle) = self.pending.borrow_mut().take() {
            self.scheduler.cancel(handle);
        }
        self.shared.state.borrow_mut().abandon();
    }
}

impl<S: Scheduler> Drop for CartController<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Virtual-clock scheduler for driving timing deterministically in tests
#[cfg(test)]
pub(crate) mod manual {
    use super::Scheduler;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    struct Task {
        id: u64,
        due: Duration,
        run: Box<dyn FnOnce()>,
    }

    #[derive(Default)]
    struct Clock {
        now: Duration,
        next_id: u64,
        tasks: Vec<Task>,
    }

    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        clock: Rc<RefCell<Clock>>,
    }

    impl ManualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn pending(&self) -> usize {
            self.clock.borrow().tasks.len()
        }

        pub fn now(&self) -> Duration {
            self.clock.borrow().now
        }

        /// Move time forward, running due tasks in due order
        pub fn advance(&self, by: Duration) {
            let target = self.clock.borrow().now + by;
            loop {
                let next = {
                    let mut clock = self.clock.borrow_mut();
                    let due = clock
                        .tasks
                        .iter()
                        .enumerate()
                        .filter(|(_, t)| t.due <= target)
                        .min_by_key(|(_, t)| (t.due, t.id))
                        .map(|(i, _)| i);
                    match due {
                        Some(i) => {
                            let task = clock.tasks.remove(i);
                            clock.now = task.due;
                            Some(task)
                        }
                        None => None,
                    }
                };
                match next {
                    Some(task) => (task.run)(),
                    None => break,
                }
            }
            self.clock.borrow_mut().now = target;
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = u64;

        fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> u64 {
            let mut clock = self.clock.borrow_mut();
            let id = clock.next_id;
            clock.next_id += 1;
            let due = clock.now + delay;
            clock.tasks.push(Task { id, due, run: task });
            id
        }

        fn cancel(&self, handle: u64) {
            self.clock.borrow_mut().tasks.retain(|t| t.id != handle);
        }
    }
}
