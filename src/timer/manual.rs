use {
  std::{
    collections::BinaryHeap,
    ops::ControlFlow,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration
  },
  super::{Job, RepeatingTask, Scheduled, Task, Timer, MIN_PERIOD}
};

#[derive(Default)]
struct State {
  now: Duration,
  seq: u64,
  queue: BinaryHeap<Scheduled<Duration>>,
  timeout_delays: Vec<Duration>,
  intervals_scheduled: usize,
  intervals_cancelled: usize,
}

impl State {
  fn push(&mut self, at: Duration, job: Job) {
    let seq = self.seq;
    self.seq += 1;
    self.queue.push(Scheduled { at, seq, job });
  }

  fn pop_due(&mut self, until: Duration) -> Option<Scheduled<Duration>> {
    if self.queue.peek()?.at > until {
      return None;
    }
    let entry = self.queue.pop()?;
    self.now = self.now.max(entry.at);
    Some(entry)
  }
}

/// Virtual clock, advanced explicitly by the host.
///
/// Nothing runs until [`advance`](ManualTimer::advance) is called; tasks then run on the
/// calling thread in deadline order. Suits hosts that drive animation from their own frame
/// loop, and makes timing exact in tests. Clones share the same clock.
#[derive(Clone, Default)]
pub struct ManualTimer {
  state: Arc<Mutex<State>>
}

impl ManualTimer {
  pub fn new() -> Self {
    Self::default()
  }

  fn state(&self) -> MutexGuard<'_, State> {
    // a panicking task never holds the lock, the state stays consistent
    self.state.lock().unwrap_or_else(PoisonError::into_inner)
  }

  /// Virtual time elapsed since creation.
  pub fn now(&self) -> Duration {
    self.state().now
  }

  /// Tasks waiting to run, including live intervals.
  pub fn pending(&self) -> usize {
    self.state().queue.len()
  }

  pub fn next_deadline(&self) -> Option<Duration> {
    self.state().queue.peek().map(|next| next.at)
  }

  pub fn timeouts_scheduled(&self) -> usize {
    self.state().timeout_delays.len()
  }

  /// Requested delay of every timeout, in scheduling order.
  pub fn timeout_delays(&self) -> Vec<Duration> {
    self.state().timeout_delays.clone()
  }

  pub fn intervals_scheduled(&self) -> usize {
    self.state().intervals_scheduled
  }

  /// Intervals that ended by returning `Break`.
  pub fn intervals_cancelled(&self) -> usize {
    self.state().intervals_cancelled
  }

  /// Moves the clock forward, running every task that falls due. Returns the number of task
  /// runs.
  pub fn advance(&self, by: Duration) -> usize {
    let until = self.now() + by;
    let mut runs = 0;
    loop {
      let Some(entry) = self.state().pop_due(until) else { break };
      runs += 1;
      match entry.job {
        Job::Once(task) => task(),
        Job::Repeat { period, mut task } => match task() {
          ControlFlow::Continue(()) =>
            self.state().push(entry.at + period, Job::Repeat { period, task }),
          ControlFlow::Break(()) =>
            self.state().intervals_cancelled += 1,
        }
      }
    }
    let mut state = self.state();
    state.now = state.now.max(until);
    runs
  }

  /// Advances until nothing is pending. Never returns while an interval keeps continuing.
  pub fn run_until_idle(&self) -> usize {
    let mut runs = 0;
    while let Some(deadline) = self.next_deadline() {
      runs += self.advance(deadline.saturating_sub(self.now()));
    }
    runs
  }
}

impl Timer for ManualTimer {
  fn set_timeout(&self, delay: Duration, task: Task) {
    let mut state = self.state();
    state.timeout_delays.push(delay);
    let at = state.now + delay;
    state.push(at, Job::Once(task));
  }

  fn set_interval(&self, period: Duration, task: RepeatingTask) {
    let mut state = self.state();
    state.intervals_scheduled += 1;
    let period = period.max(MIN_PERIOD);
    let at = state.now + period;
    state.push(at, Job::Repeat { period, task });
  }
}
