//! Drawing a laid out bitmap progressively, in random order.
//!
//! [`reveal`] only schedules work on a [`Timer`] and returns at once; the dots are painted
//! later, one per timer callback. The returned [`Reveal`] observes the run and can stop it.

use {
  std::{
    ops::ControlFlow,
    sync::{Arc, atomic::{AtomicBool, AtomicUsize, Ordering}},
    time::Duration
  },
  rand::{Rng, seq::SliceRandom},
  crate::{
    error::{Error, Result},
    geometry::Dot,
    layout::Layout,
    options::RevealPolicy,
    surface::{SharedSurface, Surface},
    timer::Timer
  }
};


#[derive(Debug)]
struct Progress {
  total: usize,
  radius: f32,
  drawn: AtomicUsize,
  settled: AtomicUsize,
  stopped: AtomicBool,
}

impl Progress {
  fn is_stopped(&self) -> bool {
    self.stopped.load(Ordering::Acquire)
  }

  /// Marks one dot as dealt with. Returns `true` for the last one.
  fn settle(&self, drawn: bool) -> bool {
    if drawn {
      self.drawn.fetch_add(1, Ordering::AcqRel);
    }
    self.settled.fetch_add(1, Ordering::AcqRel) + 1 == self.total
  }
}

/// Handle to one running reveal.
///
/// Cloning shares the run. Dropping the handle does not stop it.
#[derive(Debug, Clone)]
pub struct Reveal {
  progress: Arc<Progress>
}

impl Reveal {
  /// Number of dots in the run.
  pub fn total(&self) -> usize {
    self.progress.total
  }

  /// Dots painted so far.
  pub fn drawn(&self) -> usize {
    self.progress.drawn.load(Ordering::Acquire)
  }

  /// Radius shared by every dot of the run.
  pub fn radius(&self) -> f32 {
    self.progress.radius
  }

  /// `true` once no further draw will happen.
  pub fn is_finished(&self) -> bool {
    self.is_stopped() || self.progress.settled.load(Ordering::Acquire) >= self.progress.total
  }

  /// Turns the remaining draws into no-ops.
  pub fn stop(&self) {
    if !self.progress.stopped.swap(true, Ordering::AcqRel) {
      tracing::debug!(drawn = self.drawn(), total = self.total(), "reveal stopped");
    }
  }

  pub fn is_stopped(&self) -> bool {
    self.progress.is_stopped()
  }
}

/// Applies `fill_style` to the surface, then schedules one draw per dot of `layout`.
pub fn reveal<S, T, R>(
  surface: &SharedSurface<S>,
  layout: Layout,
  fill_style: S::FillStyle,
  policy: RevealPolicy,
  rng: &mut R,
  timer: &T
) -> Result<Reveal>
  where S: Surface + Send + 'static,
        T: Timer + ?Sized,
        R: Rng + ?Sized
{
  policy.validate()?;
  surface.lock()
    .map_err(|_| Error::surface("surface lock is poisoned"))?
    .set_fill_style(fill_style);

  let Layout { radius, dots, .. } = layout;
  let progress = Arc::new(Progress {
    total: dots.len(),
    radius,
    drawn: AtomicUsize::new(0),
    settled: AtomicUsize::new(0),
    stopped: AtomicBool::new(false)
  });
  tracing::debug!(dots = dots.len(), radius, ?policy, "reveal scheduled");

  if !dots.is_empty() {
    match policy {
      RevealPolicy::ShuffledQueue { tick } =>
        schedule_queue(surface.clone(), dots, tick, progress.clone(), rng, timer),
      RevealPolicy::RandomDelay { window } =>
        schedule_delays(surface, dots, window, &progress, rng, timer),
    }
  }
  Ok(Reveal { progress })
}

fn schedule_queue<S, T, R>(
  surface: SharedSurface<S>,
  mut queue: Vec<Dot>,
  tick: Duration,
  progress: Arc<Progress>,
  rng: &mut R,
  timer: &T
) where S: Surface + Send + 'static,
        T: Timer + ?Sized,
        R: Rng + ?Sized
{
  queue.shuffle(rng);
  timer.set_interval(tick, Box::new(move || {
    if progress.is_stopped() {
      return ControlFlow::Break(());
    }
    let Some(dot) = queue.pop() else {
      return ControlFlow::Break(());
    };
    let drawn = draw(&surface, dot, progress.radius);
    if progress.settle(drawn) || queue.is_empty() {
      tracing::debug!(dots = progress.total, "reveal finished");
      return ControlFlow::Break(());
    }
    ControlFlow::Continue(())
  }));
}

fn schedule_delays<S, T, R>(
  surface: &SharedSurface<S>,
  dots: Vec<Dot>,
  window: Duration,
  progress: &Arc<Progress>,
  rng: &mut R,
  timer: &T
) where S: Surface + Send + 'static,
        T: Timer + ?Sized,
        R: Rng + ?Sized
{
  let window_ms = (window.as_millis() as u64).max(1);
  dots.into_iter().for_each(|dot| {
    let delay = Duration::from_millis(rng.gen_range(0..window_ms));
    let (surface, progress) = (surface.clone(), progress.clone());
    timer.set_timeout(delay, Box::new(move || {
      let drawn = !progress.is_stopped() && draw(&surface, dot, progress.radius);
      if progress.settle(drawn) {
        tracing::debug!(dots = progress.total, drawn = progress.drawn.load(Ordering::Acquire), "reveal finished");
      }
    }));
  });
}

fn draw<S: Surface>(surface: &SharedSurface<S>, dot: Dot, radius: f32) -> bool {
  match surface.lock() {
    Ok(mut surface) => {
      surface.fill_circle(dot, radius);
      tracing::trace!(x = dot.x, y = dot.y, "dot drawn");
      true
    }
    Err(_) => {
      tracing::error!(x = dot.x, y = dot.y, "surface lock is poisoned, dot skipped");
      false
    }
  }
}
