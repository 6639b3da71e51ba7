use {
  std::{
    ops::ControlFlow,
    sync::{Mutex, PoisonError},
    time::Duration
  },
  anyhow::Context,
  tokio::{
    runtime::{Builder, Runtime},
    task::JoinHandle,
    time::{interval, sleep}
  },
  crate::error::Result,
  super::{RepeatingTask, Task, Timer, MIN_PERIOD}
};

/// Real-time timer backed by a tokio runtime with a single worker thread.
///
/// Tasks run one at a time on the worker, so two tasks never overlap. Dropping the timer
/// shuts the runtime down and cancels whatever has not run yet; call [`ThreadTimer::join`]
/// first to let everything finish.
pub struct ThreadTimer {
  runtime: Runtime,
  tasks: Mutex<Vec<JoinHandle<()>>>,
}

impl ThreadTimer {
  pub fn new() -> Result<Self> {
    let runtime = Builder::new_multi_thread()
      .worker_threads(1)
      .thread_name("dot-reveal-timer")
      .enable_time()
      .build()
      .context("unable to start timer runtime")?;
    Ok(Self { runtime, tasks: Mutex::new(vec![]) })
  }

  /// Blocks until every scheduled task has run and every interval has been cancelled.
  pub fn join(&self) -> Result<()> {
    loop {
      let tasks = std::mem::take(&mut *self.tasks.lock().unwrap_or_else(PoisonError::into_inner));
      if tasks.is_empty() {
        break;
      }
      self.runtime.block_on(async {
        for task in tasks {
          task.await.context("timer task failed")?;
        }
        Ok::<_, anyhow::Error>(())
      })?;
    }
    tracing::trace!("timer drained");
    Ok(())
  }

  /// Number of spawned tasks not yet collected by [`ThreadTimer::join`].
  pub fn pending(&self) -> usize {
    self.tasks.lock()
      .unwrap_or_else(PoisonError::into_inner)
      .iter()
      .filter(|task| !task.is_finished())
      .count()
  }

  fn track(&self, task: JoinHandle<()>) {
    self.tasks.lock()
      .unwrap_or_else(PoisonError::into_inner)
      .push(task);
  }
}

impl Timer for ThreadTimer {
  fn set_timeout(&self, delay: Duration, task: Task) {
    let handle = self.runtime.spawn(async move {
      sleep(delay).await;
      task();
    });
    self.track(handle);
  }

  fn set_interval(&self, period: Duration, mut task: RepeatingTask) {
    let period = period.max(MIN_PERIOD);
    let handle = self.runtime.spawn(async move {
      let mut ticks = interval(period);
      // the first tick completes immediately
      ticks.tick().await;
      loop {
        ticks.tick().await;
        if let ControlFlow::Break(()) = task() {
          break;
        }
      }
    });
    self.track(handle);
  }
}
