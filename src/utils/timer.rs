//! Cancellable deferred callbacks.
//!
//! Components schedule through [`Scheduler`] so their timers can be driven by
//! the browser ([`TimeoutScheduler`]) or by a simulated clock ([`ManualClock`]).
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Timeout;

pub type Task = Box<dyn FnOnce()>;

pub trait Scheduler {
    type Handle: TaskHandle;

    /// Run `task` once after `delay`, unless the returned handle is cancelled first.
    fn schedule(&self, delay: Duration, task: Task) -> Self::Handle;
}

pub trait TaskHandle {
    /// Drop the pending task. A no-op once the task has already run.
    fn cancel(self);
}

/// Browser timers via `setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay: Duration, task: Task) -> Timeout {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, task)
    }
}

impl TaskHandle for Timeout {
    fn cancel(self) {
        let _ = Timeout::cancel(self);
    }
}

struct PendingTask {
    id: u64,
    due: Duration,
    task: Task,
}

#[derive(Default)]
struct ClockState {
    now: Duration,
    next_id: u64,
    pending: Vec<PendingTask>,
}

/// Simulated clock. Time only moves when [`ManualClock::advance`] is called.
#[derive(Clone, Default)]
pub struct ManualClock {
    state: Rc<RefCell<ClockState>>,
}

pub struct ManualHandle {
    id: u64,
    state: Rc<RefCell<ClockState>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    /// Number of tasks scheduled but neither run nor cancelled.
    pub fn pending(&self) -> usize {
        self.state.borrow().pending.len()
    }

    /// Move time forward, running every task that falls due, earliest first.
    pub fn advance(&self, by: Duration) {
        let target = self.state.borrow().now + by;

        loop {
            // borrow is released before the task runs so it may schedule more work
            let next = {
                let mut state = self.state.borrow_mut();
                let earliest = state
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, pending)| pending.due <= target)
                    .min_by_key(|(_, pending)| (pending.due, pending.id))
                    .map(|(index, _)| index);

                match earliest {
                    Some(index) => {
                        let pending = state.pending.remove(index);
                        state.now = pending.due;
                        Some(pending.task)
                    }
                    None => {
                        state.now = target;
                        None
                    }
                }
            };

            match next {
                Some(task) => task(),
                None => break,
            }
        }
    }
}

impl Scheduler for ManualClock {
    type Handle = ManualHandle;

    fn schedule(&self, delay: Duration, task: Task) -> ManualHandle {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        let due = state.now + delay;
        state.pending.push(PendingTask { id, due, task });

        ManualHandle {
            id,
            state: Rc::clone(&self.state),
        }
    }
}

impl TaskHandle for ManualHandle {
    fn cancel(self) {
        self.state
            .borrow_mut()
            .pending
            .retain(|pending| pending.id != self.id);
    }
}
