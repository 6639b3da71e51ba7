//! Deferred execution of draw tasks.
//!
//! A [`Timer`] runs a task once after a delay, or repeatedly at a fixed period until the task
//! itself returns [`ControlFlow::Break`]. There are no global timer ids: whoever owns the
//! repeating task owns its lifetime.

use std::{
  cmp::Ordering,
  ops::ControlFlow,
  time::Duration
};

mod manual;
mod thread;

pub use manual::ManualTimer;
pub use thread::ThreadTimer;

pub type Task = Box<dyn FnOnce() + Send>;
/// Returns `Break` to cancel itself.
pub type RepeatingTask = Box<dyn FnMut() -> ControlFlow<()> + Send>;

/// Intervals shorter than this are stretched to it.
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

pub trait Timer {
  /// Never blocks; `task` runs once, approximately `delay` from now.
  fn set_timeout(&self, delay: Duration, task: Task);
  /// Never blocks; `task` first runs one `period` from now, then every `period`.
  fn set_interval(&self, period: Duration, task: RepeatingTask);
}

impl<T: Timer + ?Sized> Timer for &T {
  fn set_timeout(&self, delay: Duration, task: Task) { (**self).set_timeout(delay, task) }
  fn set_interval(&self, period: Duration, task: RepeatingTask) { (**self).set_interval(period, task) }
}

pub(crate) enum Job {
  Once(Task),
  Repeat { period: Duration, task: RepeatingTask },
}

/// Heap entry; earliest deadline first, ties in scheduling order.
pub(crate) struct Scheduled<At> {
  pub at: At,
  pub seq: u64,
  pub job: Job,
}

impl<At: Ord> PartialEq for Scheduled<At> {
  fn eq(&self, other: &Self) -> bool {
    self.cmp(other) == Ordering::Equal
  }
}
impl<At: Ord> Eq for Scheduled<At> {}

impl<At: Ord> PartialOrd for Scheduled<At> {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl<At: Ord> Ord for Scheduled<At> {
  // reversed, `BinaryHeap` is a max-heap
  fn cmp(&self, other: &Self) -> Ordering {
    (&other.at, other.seq).cmp(&(&self.at, self.seq))
  }
}
