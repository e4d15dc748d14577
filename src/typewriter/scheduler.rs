use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// A unit of deferred work handed to a [`Scheduler`].
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Runs tasks after a delay and lets callers take them back before they fire.
///
/// Implementations must never run a task synchronously from inside
/// [`Scheduler::schedule`]; the engine relies on that to keep every transition a
/// separate callback.
pub trait Scheduler: Send + Sync + 'static {
    type Token: Send + Sync + 'static;

    fn schedule(&self, delay: Duration, task: Task) -> Self::Token;

    /// De-registers a task. Cancelling a token whose task already ran is a no-op.
    fn cancel(&self, token: Self::Token);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct VirtualToken {
    due: Duration,
    id: u64,
}

#[derive(Default)]
struct Clock {
    now: Duration,
    next_id: u64,
    queue: BTreeMap<VirtualToken, Task>,
}

/// Deterministic scheduler driven by a simulated clock.
///
/// Nothing runs until the owner calls [`VirtualScheduler::advance`] or
/// [`VirtualScheduler::run_next`]. Tasks due at the same instant run in the
/// order they were scheduled.
#[derive(Clone, Default)]
pub struct VirtualScheduler {
    clock: Arc<Mutex<Clock>>,
}

impl VirtualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Clock> {
        self.clock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn now(&self) -> Duration {
        self.lock().now
    }

    /// Number of scheduled tasks that have neither run nor been cancelled.
    pub fn pending(&self) -> usize {
        self.lock().queue.len()
    }

    /// Runs the earliest pending task, moving the clock to its due time.
    /// Returns `false` if nothing was pending.
    pub fn run_next(&self) -> bool {
        let task = {
            let mut clock = self.lock();
            match clock.queue.pop_first() {
                Some((token, task)) => {
                    clock.now = clock.now.max(token.due);
                    task
                }
                None => return false,
            }
        };
        // lock released: the task may schedule follow-ups
        task();
        true
    }

    /// Moves the clock forward by `by`, running every task that comes due in
    /// the window, including ones scheduled by tasks run along the way.
    /// Returns how many tasks ran.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.lock().now.saturating_add(by);
        let mut ran = 0;
        loop {
            let task = {
                let mut clock = self.lock();
                let due = match clock.queue.first_key_value() {
                    Some((token, _)) if token.due <= target => token.due,
                    _ => break,
                };
                clock.now = due;
                match clock.queue.pop_first() {
                    Some((_, task)) => task,
                    None => break,
                }
            };
            task();
            ran += 1;
        }
        self.lock().now = target;
        ran
    }

    pub fn advance_millis(&self, ms: u64) -> usize {
        self.advance(Duration::from_millis(ms))
    }
}

impl Scheduler for VirtualScheduler {
    type Token = VirtualToken;

    fn schedule(&self, delay: Duration, task: Task) -> VirtualToken {
        let mut clock = self.lock();
        let token = VirtualToken {
            due: clock.now.saturating_add(delay),
            id: clock.next_id,
        };
        clock.next_id += 1;
        clock.queue.insert(token, task);
        token
    }

    fn cancel(&self, token: VirtualToken) {
        self.lock().queue.remove(&token);
    }
}

/// Longest delay `setTimeout` honours; larger values fire immediately.
#[cfg(feature = "hydrate")]
const MAX_TIMEOUT: Duration = Duration::from_millis(i32::MAX as u64);

/// Schedules tasks on the browser's `setTimeout`.
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

#[cfg(feature = "hydrate")]
impl Scheduler for BrowserScheduler {
    type Token = Option<leptos::prelude::TimeoutHandle>;

    fn schedule(&self, delay: Duration, task: Task) -> Self::Token {
        match leptos::prelude::set_timeout_with_handle(task, delay.min(MAX_TIMEOUT)) {
            Ok(handle) => Some(handle),
            Err(err) => {
                log::error!("failed to schedule timeout: {err:?}");
                None
            }
        }
    }

    fn cancel(&self, token: Self::Token) {
        if let Some(handle) = token {
            handle.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counter_task(counter: &Arc<AtomicUsize>) -> Task {
        let counter = counter.clone();
        Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn test_advance_runs_only_due_tasks() {
        let scheduler = VirtualScheduler::new();
        let counter = Arc::new(AtomicUsize::new(0));
        scheduler.schedule(Duration::from_millis(10), counter_task(&counter));
        scheduler.schedule(Duration::from_millis(30), counter_task(&counter));

        assert_eq!(scheduler.advance_millis(9), 0);
        assert_eq!(scheduler.advance_millis(1), 1);
        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert_eq!(scheduler.pending(), 1);
        assert_eq!(scheduler.now(), Duration::from_millis(10));

        scheduler.advance_millis(100);
        assert_eq!(counter.load(Ordering::SeqCst), 2);
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(scheduler.now(), Duration::from_millis(110));
    }

    #[test]
    fn test_cancel_removes_task() {
        let scheduler = VirtualScheduler::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let token = scheduler.schedule(Duration::from_millis(5), counter_task(&counter));
        assert_eq!(scheduler.pending(), 1);

        scheduler.cancel(token);
        assert_eq!(scheduler.pending(), 0);
        scheduler.advance_millis(50);
        assert_eq!(counter.load(Ordering::SeqCst), 0);

        // cancelling again is harmless
        scheduler.cancel(token);
    }

    #[test]
    fn test_tasks_scheduled_inside_window_run() {
        let scheduler = VirtualScheduler::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let inner_scheduler = scheduler.clone();
        let inner_counter = counter.clone();
        scheduler.schedule(
            Duration::from_millis(5),
            Box::new(move || {
                inner_counter.fetch_add(1, Ordering::SeqCst);
                inner_scheduler.schedule(Duration::from_millis(5), counter_task(&inner_counter));
            }),
        );

        assert_eq!(scheduler.advance_millis(10), 2);
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_huge_delay_saturates() {
        let scheduler = VirtualScheduler::new();
        let counter = Arc::new(AtomicUsize::new(0));
        scheduler.advance_millis(10);
        scheduler.schedule(Duration::MAX, counter_task(&counter));

        assert_eq!(scheduler.advance(Duration::MAX), 1);
        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert_eq!(scheduler.now(), Duration::MAX);
        assert_eq!(scheduler.advance_millis(1), 0);
    }

    #[test]
    fn test_same_instant_runs_in_schedule_order() {
        let scheduler = VirtualScheduler::new();
        let order = Arc::new(Mutex::new(Vec::new()));
        for i in 0..3 {
            let order = order.clone();
            scheduler.schedule(
                Duration::from_millis(1),
                Box::new(move || order.lock().unwrap().push(i)),
            );
        }
        assert!(scheduler.run_next());
        assert!(scheduler.run_next());
        assert!(scheduler.run_next());
        assert!(!scheduler.run_next());
        assert_eq!(*order.lock().unwrap(), vec![0, 1, 2]);
    }
}
