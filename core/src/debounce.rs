//! Coalescing bursts of events into a single delayed task.

use core::cell::RefCell;
use core::fmt;
use std::time::Duration;

/// Something that can run a task later.
///
/// Dropping the returned handle must cancel the task if it has not run yet.
pub trait Scheduler {
    /// Cancellation guard for a scheduled task.
    type Handle;

    /// Runs `task` once after `delay`.
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Holds at most one pending task and restarts it on every call.
pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    delay: Duration,
    pending: RefCell<Option<S::Handle>>,
}

impl<S: Scheduler> fmt::Debug for Debouncer<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay", &self.delay)
            .field("armed", &self.pending.borrow().is_some())
            .finish_non_exhaustive()
    }
}

impl<S: Scheduler> Debouncer<S> {
    /// Creates a debouncer waiting `delay` after the last call.
    pub const fn new(scheduler: S, delay: Duration) -> Self {
        Self {
            scheduler,
            delay,
            pending: RefCell::new(None),
        }
    }

    /// Cancels the pending task, if any, and schedules `task` in its place.
    pub fn schedule_recompute(&self, task: impl FnOnce() + 'static) {
        let mut pending = self.pending.borrow_mut();
        drop(pending.take());
        *pending = Some(self.scheduler.schedule(self.delay, Box::new(task)));
    }

    /// Cancels the pending task, if any.
    pub fn cancel(&self) {
        drop(self.pending.borrow_mut().take());
    }
}

#[cfg(test)]
pub(crate) mod manual {
    //! Virtual-time scheduler for tests.

    use std::{cell::RefCell, rc::Rc, time::Duration};

    use super::Scheduler;

    type Task = Box<dyn FnOnce()>;

    #[derive(Default)]
    struct Queue {
        now: Duration,
        next_id: u64,
        tasks: Vec<(u64, Duration, Task)>,
    }

    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        queue: Rc<RefCell<Queue>>,
    }

    pub struct ManualHandle {
        id: u64,
        queue: Rc<RefCell<Queue>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.queue.borrow_mut().tasks.retain(|(id, _, _)| *id != self.id);
        }
    }

    impl ManualScheduler {
        pub fn pending(&self) -> usize {
            self.queue.borrow().tasks.len()
        }

        /// Moves virtual time forward, running every task that comes due.
        pub fn advance(&self, by: Duration) {
            let due = {
                let mut queue = self.queue.borrow_mut();
                queue.now += by;
                let now = queue.now;
                let (due, waiting) = queue
                    .tasks
                    .drain(..)
                    .partition::<Vec<_>, _>(|(_, at, _)| *at <= now);
                queue.tasks = waiting;
                due
            };
            for (_, _, task) in due {
                task();
            }
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule(&self, delay: Duration, task: Task) -> ManualHandle {
            let mut queue = self.queue.borrow_mut();
            let id = queue.next_id;
            queue.next_id += 1;
            let at = queue.now + delay;
            queue.tasks.push((id, at, task));
            ManualHandle {
                id,
                queue: Rc::clone(&self.queue),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::{manual::ManualScheduler, *};
    use crate::Viewport;

    const DELAY: Duration = Duration::from_millis(200);

    #[test]
    fn test_burst_runs_once_with_last_value() {
        let scheduler = ManualScheduler::default();
        let debouncer = Debouncer::new(scheduler.clone(), DELAY);
        let runs = Rc::new(RefCell::new(Vec::new()));

        for width in [300, 400, 500, 600, 700] {
            let runs = Rc::clone(&runs);
            let viewport = Viewport::new(width, 2);
            debouncer.schedule_recompute(move || runs.borrow_mut().push(viewport.area()));
            scheduler.advance(Duration::from_millis(50));
        }
        assert!(runs.borrow().is_empty());
        assert_eq!(scheduler.pending(), 1);

        scheduler.advance(DELAY);
        assert_eq!(*runs.borrow(), vec![1_400]);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_separate_bursts_run_separately() {
        let scheduler = ManualScheduler::default();
        let debouncer = Debouncer::new(scheduler.clone(), DELAY);
        let count = Rc::new(RefCell::new(0));

        for _ in 0..2 {
            let count = Rc::clone(&count);
            debouncer.schedule_recompute(move || *count.borrow_mut() += 1);
            scheduler.advance(Duration::from_millis(250));
        }
        assert_eq!(*count.borrow(), 2);
    }

    #[test]
    fn test_nothing_runs_before_delay() {
        let scheduler = ManualScheduler::default();
        let debouncer = Debouncer::new(scheduler.clone(), DELAY);
        let ran = Rc::new(RefCell::new(false));
        let flag = Rc::clone(&ran);
        debouncer.schedule_recompute(move || *flag.borrow_mut() = true);
        scheduler.advance(Duration::from_millis(199));
        assert!(!*ran.borrow());
        scheduler.advance(Duration::from_millis(1));
        assert!(*ran.borrow());
    }

    #[test]
    fn test_cancel_drops_pending() {
        let scheduler = ManualScheduler::default();
        let debouncer = Debouncer::new(scheduler.clone(), DELAY);
        let ran = Rc::new(RefCell::new(false));
        let flag = Rc::clone(&ran);
        debouncer.schedule_recompute(move || *flag.borrow_mut() = true);
        debouncer.cancel();
        scheduler.advance(DELAY * 2);
        assert!(!*ran.borrow());
        assert_eq!(scheduler.pending(), 0);
    }
}
