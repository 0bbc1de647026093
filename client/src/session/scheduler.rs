//! One-shot deferred callbacks with cancellation.
//!
//! DESIGN
//! ======
//! A scheduled task is owned by the [`TimerGuard`] returned from
//! [`Scheduler::schedule`]. Dropping the guard before the task runs cancels
//! it, which is how a guard component abandons a pending check when it
//! unmounts or its inputs change.

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

pub type Task = Box<dyn FnOnce() + 'static>;

/// Cancels the associated task when dropped, unless it was forgotten.
#[must_use = "dropping a TimerGuard cancels its task"]
pub struct TimerGuard {
    on_cancel: Option<Box<dyn FnOnce() + 'static>>,
    on_forget: Option<Box<dyn FnOnce() + 'static>>,
}

impl TimerGuard {
    pub fn new(on_cancel: impl FnOnce() + 'static) -> Self {
        Self { on_cancel: Some(Box::new(on_cancel)), on_forget: None }
    }

    /// Run `on_forget` instead of the cancel hook when the guard is
    /// forgotten. Needed when the cancel hook owns a handle whose own drop
    /// would cancel the task.
    pub fn with_forget(mut self, on_forget: impl FnOnce() + 'static) -> Self {
        self.on_forget = Some(Box::new(on_forget));
        self
    }

    /// A guard with nothing to cancel.
    pub fn noop() -> Self {
        Self { on_cancel: None, on_forget: None }
    }

    pub fn cancel(self) {
        drop(self);
    }

    /// Let the task run even after this guard is dropped.
    pub fn forget(mut self) {
        // Release first: the cancel hook may share the handle and must find
        // it gone when it is dropped below.
        if let Some(on_forget) = self.on_forget.take() {
            on_forget();
        }
        self.on_cancel = None;
    }
}

impl Drop for TimerGuard {
    fn drop(&mut self) {
        if let Some(on_cancel) = self.on_cancel.take() {
            on_cancel();
        }
    }
}

impl std::fmt::Debug for TimerGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerGuard").field("armed", &self.on_cancel.is_some()).finish()
    }
}

/// Runs a task once after a delay.
pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Task) -> TimerGuard;
}

/// Browser `setTimeout` scheduler.
///
/// Outside the hydrated client there is no event loop to defer onto, so the
/// task is dropped without running and the caller stays pending. SSR renders
/// the pending view, which is what hydration expects to find.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> TimerGuard {
        #[cfg(feature = "hydrate")]
        {
            let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
            // Shared so `forget` can hand the timeout back to the browser
            // instead of dropping it, which would clear it.
            let slot = Rc::new(std::cell::Cell::new(Some(gloo_timers::callback::Timeout::new(millis, task))));
            let release = Rc::clone(&slot);
            TimerGuard::new(move || {
                if let Some(timeout) = slot.take() {
                    let _ = timeout.cancel();
                }
            })
            .with_forget(move || {
                if let Some(timeout) = release.take() {
                    let _ = timeout.forget();
                }
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (delay, task);
            TimerGuard::noop()
        }
    }
}

struct Entry {
    id: u64,
    due: Duration,
    task: Task,
}

#[derive(Default)]
struct ManualInner {
    now: Duration,
    next_id: u64,
    queue: Vec<Entry>,
}

/// Scheduler driven by virtual time. Tasks run only inside [`Self::advance`].
#[derive(Clone, Default)]
pub struct ManualScheduler {
    inner: Rc<RefCell<ManualInner>>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.inner.borrow().now
    }

    /// Number of tasks still waiting to run.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.inner.borrow().queue.len()
    }

    /// Move virtual time forward, running every task that becomes due in
    /// order of due time (ties in scheduling order).
    pub fn advance(&self, by: Duration) {
        let target = self.inner.borrow().now + by;
        loop {
            let next = {
                let mut inner = self.inner.borrow_mut();
                let due_index = inner
                    .queue
                    .iter()
                    .enumerate()
                    .filter(|(_, entry)| entry.due <= target)
                    .min_by_key(|(_, entry)| (entry.due, entry.id))
                    .map(|(index, _)| index);
                due_index.map(|index| {
                    let entry = inner.queue.remove(index);
                    inner.now = entry.due;
                    entry.task
                })
            };
            // The borrow is released before running so tasks may schedule more work.
            match next {
                Some(task) => task(),
                None => break,
            }
        }
        self.inner.borrow_mut().now = target;
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> TimerGuard {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            let due = inner.now + delay;
            inner.queue.push(Entry { id, due, task });
            id
        };
        let inner = Rc::downgrade(&self.inner);
        TimerGuard::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.borrow_mut().queue.retain(|entry| entry.id != id);
            }
        })
    }
}
